//! Renderer configuration
//!
//! Read from the `[renderer]` options of the host's documentation
//! configuration, usually a TOML file:
//!
//! ```toml
//! header_level = 2
//! display_name_format = "relative"
//! typing_module_paths = ["pkg.types"]
//!
//! [exclude.parameters]
//! "pkg.Widget" = ["legacy"]
//! ```

use crate::diagnostics::{RenderError, RenderResult};
use crate::exclude::ExclusionRegistry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// How to show the name of an object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NameFormat {
    /// The object path, e.g. `pkg.shapes.Circle`
    Full,
    /// Just the name, e.g. `Circle`
    Name,
    /// Same as `Name`
    Short,
    /// The path without the top level package, e.g. `shapes.Circle`
    Relative,
    /// The path where the object is defined
    Canonical,
}

impl NameFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            NameFormat::Full => "full",
            NameFormat::Name => "name",
            NameFormat::Short => "short",
            NameFormat::Relative => "relative",
            NameFormat::Canonical => "canonical",
        }
    }
}

impl FromStr for NameFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(NameFormat::Full),
            "name" => Ok(NameFormat::Name),
            "short" => Ok(NameFormat::Short),
            "relative" => Ok(NameFormat::Relative),
            "canonical" => Ok(NameFormat::Canonical),
            other => Err(RenderError::unknown_name_format(other)),
        }
    }
}

impl TryFrom<String> for NameFormat {
    type Error = RenderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NameFormat> for String {
    fn from(format: NameFormat) -> Self {
        format.as_str().to_string()
    }
}

impl fmt::Display for NameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name format of headings, which may depend on the heading depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DisplayNameFormat {
    /// `Full` for the object at the top of a page, `Name` below it
    #[default]
    Auto,
    Fixed(NameFormat),
}

impl DisplayNameFormat {
    /// Resolve to a concrete format for a heading at `level`
    pub fn resolve(&self, level: usize, header_level: usize) -> NameFormat {
        match self {
            DisplayNameFormat::Auto if level == header_level => NameFormat::Full,
            DisplayNameFormat::Auto => NameFormat::Name,
            DisplayNameFormat::Fixed(format) => *format,
        }
    }
}

impl FromStr for DisplayNameFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(DisplayNameFormat::Auto),
            other => other.parse().map(DisplayNameFormat::Fixed),
        }
    }
}

impl TryFrom<String> for DisplayNameFormat {
    type Error = RenderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DisplayNameFormat> for String {
    fn from(format: DisplayNameFormat) -> Self {
        format.to_string()
    }
}

impl From<NameFormat> for DisplayNameFormat {
    fn from(format: NameFormat) -> Self {
        DisplayNameFormat::Fixed(format)
    }
}

impl fmt::Display for DisplayNameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayNameFormat::Auto => f.write_str("auto"),
            DisplayNameFormat::Fixed(format) => format.fmt(f),
        }
    }
}

/// Configuration of a render pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Heading level of the objects at the top of a page
    pub header_level: usize,

    /// Whether to show signatures
    pub show_signature: bool,

    /// Name format of object headings
    pub display_name_format: DisplayNameFormat,

    /// Name format inside signatures
    pub signature_name_format: NameFormat,

    /// Modules whose type inventory is written for cross references
    pub typing_module_paths: Vec<String>,

    /// Members and parameters left out of the documentation
    pub exclude: ExclusionRegistry,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            header_level: 1,
            show_signature: true,
            display_name_format: DisplayNameFormat::Auto,
            signature_name_format: NameFormat::Name,
            typing_module_paths: vec![],
            exclude: ExclusionRegistry::default(),
        }
    }
}

impl RenderConfig {
    /// Create a new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from TOML text
    pub fn from_toml_str(content: &str) -> RenderResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RenderError::FileNotFound(PathBuf::from(path)));
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Set the heading level of top level objects
    pub fn with_header_level(mut self, level: usize) -> Self {
        self.header_level = level;
        self
    }

    /// Set whether to show signatures
    pub fn with_show_signature(mut self, show: bool) -> Self {
        self.show_signature = show;
        self
    }

    /// Set the heading name format
    pub fn with_display_name_format(mut self, format: impl Into<DisplayNameFormat>) -> Self {
        self.display_name_format = format.into();
        self
    }

    /// Set the signature name format
    pub fn with_signature_name_format(mut self, format: NameFormat) -> Self {
        self.signature_name_format = format;
        self
    }

    /// Add a module whose type inventory should be written
    pub fn with_typing_module(mut self, path: impl Into<String>) -> Self {
        self.typing_module_paths.push(path.into());
        self
    }

    /// Set the exclusions
    pub fn with_exclusions(mut self, exclude: ExclusionRegistry) -> Self {
        self.exclude = exclude;
        self
    }
}
