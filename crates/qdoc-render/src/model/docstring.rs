//! Parsed docstrings
//!
//! The introspection tool parses each docstring into an ordered list of
//! typed sections. This module only represents them.

use crate::model::expr::Expr;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A docstring and its parsed sections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Docstring {
    /// Raw docstring text
    #[serde(default)]
    pub value: String,

    /// Parsed sections, in docstring order
    #[serde(default)]
    pub parsed: Vec<DocstringSection>,
}

impl Docstring {
    /// Create a docstring with a single text section
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            parsed: vec![DocstringSection::new(SectionContent::Text(value.clone()))],
            value,
        }
    }

    /// Create a docstring from sections
    pub fn from_sections(sections: Vec<DocstringSection>) -> Self {
        Self {
            value: String::new(),
            parsed: sections,
        }
    }

    /// First line of the leading text section, used in summaries
    pub fn first_line(&self) -> Option<&str> {
        match self.parsed.first().map(|s| &s.content) {
            Some(SectionContent::Text(text)) => text.split('\n').next(),
            _ => None,
        }
    }
}

/// One section of a docstring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocstringSection {
    /// Declared title, e.g. "Notes" for an admonition
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,

    #[serde(flatten)]
    pub content: SectionContent,
}

impl DocstringSection {
    pub fn new(content: SectionContent) -> Self {
        Self {
            title: None,
            content,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn kind(&self) -> SectionKind {
        self.content.kind()
    }
}

/// The tagged content of a section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SectionContent {
    Text(String),
    Parameters(Vec<Definition>),
    OtherParameters(Vec<Definition>),
    Returns(Vec<Definition>),
    Yields(Vec<Definition>),
    Receives(Vec<Definition>),
    Raises(Vec<Definition>),
    Warns(Vec<Definition>),
    Attributes(Vec<Definition>),
    Examples(Vec<ExampleItem>),
    Deprecated(Deprecation),
    Admonition(Admonition),
    SeeAlso(String),
}

impl SectionContent {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionContent::Text(_) => SectionKind::Text,
            SectionContent::Parameters(_) => SectionKind::Parameters,
            SectionContent::OtherParameters(_) => SectionKind::OtherParameters,
            SectionContent::Returns(_) => SectionKind::Returns,
            SectionContent::Yields(_) => SectionKind::Yields,
            SectionContent::Receives(_) => SectionKind::Receives,
            SectionContent::Raises(_) => SectionKind::Raises,
            SectionContent::Warns(_) => SectionKind::Warns,
            SectionContent::Attributes(_) => SectionKind::Attributes,
            SectionContent::Examples(_) => SectionKind::Examples,
            SectionContent::Deprecated(_) => SectionKind::Deprecated,
            SectionContent::Admonition(_) => SectionKind::Admonition,
            SectionContent::SeeAlso(_) => SectionKind::SeeAlso,
        }
    }

    /// Definitions of a definition-list section
    pub fn definitions(&self) -> Option<&[Definition]> {
        match self {
            SectionContent::Parameters(items)
            | SectionContent::OtherParameters(items)
            | SectionContent::Returns(items)
            | SectionContent::Yields(items)
            | SectionContent::Receives(items)
            | SectionContent::Raises(items)
            | SectionContent::Warns(items)
            | SectionContent::Attributes(items) => Some(items),
            _ => None,
        }
    }
}

/// Section kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKind {
    Text,
    Parameters,
    OtherParameters,
    Returns,
    Yields,
    Receives,
    Raises,
    Warns,
    Attributes,
    Examples,
    Deprecated,
    Admonition,
    SeeAlso,
}

impl SectionKind {
    /// Name of the kind, used as the default section title
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Text => "text",
            SectionKind::Parameters => "parameters",
            SectionKind::OtherParameters => "other parameters",
            SectionKind::Returns => "returns",
            SectionKind::Yields => "yields",
            SectionKind::Receives => "receives",
            SectionKind::Raises => "raises",
            SectionKind::Warns => "warns",
            SectionKind::Attributes => "attributes",
            SectionKind::Examples => "examples",
            SectionKind::Deprecated => "deprecated",
            SectionKind::Admonition => "admonition",
            SectionKind::SeeAlso => "see also",
        }
    }

    /// Sections rendered as a plain container rather than under a heading
    pub fn is_untitled(&self) -> bool {
        matches!(self, SectionKind::Text | SectionKind::Deprecated)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An item of a definition-list section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    /// Name, empty for unnamed return values
    #[serde(default)]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub annotation: Option<Expr>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default: Option<Expr>,

    #[serde(default)]
    pub description: String,
}

impl Definition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn with_annotation(mut self, annotation: Expr) -> Self {
        self.annotation = Some(annotation);
        self
    }

    pub fn with_default(mut self, default: impl Into<Expr>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// A piece of an examples section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ExampleItem {
    /// Prose between code samples
    Text(String),
    /// Interactive code sample
    Code(String),
}

/// Content of a deprecated section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deprecation {
    pub version: String,
    #[serde(default)]
    pub description: String,
}

/// Content of an admonition (unofficial numpydoc sections such as Notes)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Admonition {
    /// Admonition kind, e.g. "note"
    #[serde(default)]
    pub annotation: String,
    #[serde(default)]
    pub description: String,
}
