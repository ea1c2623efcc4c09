//! Exclusion registry
//!
//! Hosts hide deprecated parameters, attributes, functions and classes
//! from the documentation by naming them per object path. The object path
//! is the path as shown on the API page, not the canonical path.
//!
//! The registry is filled before a render pass and only read during it.
//!
//! # Example
//!
//! ```
//! use qdoc_render::exclude::{ExclusionKind, ExclusionRegistry};
//!
//! let mut registry = ExclusionRegistry::new();
//! registry.exclude_parameters([
//!     ("package.ClassA", vec!["p1"]),
//!     ("package.ClassB", vec!["p1", "p2"]),
//! ]);
//! assert!(registry.is_excluded(ExclusionKind::Parameters, "package.ClassB", "p2"));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// One name or several names to exclude
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExcludeSpec {
    One(String),
    Many(Vec<String>),
}

impl ExcludeSpec {
    pub fn into_names(self) -> BTreeSet<String> {
        match self {
            ExcludeSpec::One(name) => BTreeSet::from([name]),
            ExcludeSpec::Many(names) => names.into_iter().collect(),
        }
    }
}

impl From<&str> for ExcludeSpec {
    fn from(name: &str) -> Self {
        ExcludeSpec::One(name.to_string())
    }
}

impl From<String> for ExcludeSpec {
    fn from(name: String) -> Self {
        ExcludeSpec::One(name)
    }
}

impl From<Vec<&str>> for ExcludeSpec {
    fn from(names: Vec<&str>) -> Self {
        ExcludeSpec::Many(names.into_iter().map(String::from).collect())
    }
}

impl From<Vec<String>> for ExcludeSpec {
    fn from(names: Vec<String>) -> Self {
        ExcludeSpec::Many(names)
    }
}

impl<const N: usize> From<[&str; N]> for ExcludeSpec {
    fn from(names: [&str; N]) -> Self {
        ExcludeSpec::Many(names.iter().map(|s| s.to_string()).collect())
    }
}

/// What an exclusion applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExclusionKind {
    /// Parameters of a function or class signature
    Parameters,
    /// Attribute members of a module or class
    Attributes,
    /// Function members of a module, methods of a class
    Functions,
    /// Class members of a module or class
    Classes,
}

impl fmt::Display for ExclusionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExclusionKind::Parameters => "parameters",
            ExclusionKind::Attributes => "attributes",
            ExclusionKind::Functions => "functions",
            ExclusionKind::Classes => "classes",
        })
    }
}

type Exclusions = IndexMap<String, BTreeSet<String>>;

/// Names to leave out of the documentation, per object path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionRegistry {
    #[serde(default, deserialize_with = "deserialize_specs")]
    parameters: Exclusions,
    #[serde(default, deserialize_with = "deserialize_specs")]
    attributes: Exclusions,
    #[serde(default, deserialize_with = "deserialize_specs")]
    functions: Exclusions,
    #[serde(default, deserialize_with = "deserialize_specs")]
    classes: Exclusions,
}

impl ExclusionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude parameters from the signatures of functions and classes
    ///
    /// When the parameter of a dataclass is excluded it still shows up
    /// among the attributes unless it is excluded there as well.
    pub fn exclude_parameters<I, K, V>(&mut self, spec: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ExcludeSpec>,
    {
        self.register(ExclusionKind::Parameters, spec)
    }

    /// Exclude attributes of modules and classes
    pub fn exclude_attributes<I, K, V>(&mut self, spec: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ExcludeSpec>,
    {
        self.register(ExclusionKind::Attributes, spec)
    }

    /// Exclude functions of modules and methods of classes
    pub fn exclude_functions<I, K, V>(&mut self, spec: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ExcludeSpec>,
    {
        self.register(ExclusionKind::Functions, spec)
    }

    /// Exclude classes contained in modules or classes
    pub fn exclude_classes<I, K, V>(&mut self, spec: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ExcludeSpec>,
    {
        self.register(ExclusionKind::Classes, spec)
    }

    /// Register exclusions of one kind
    ///
    /// Names for a path already present are added to the existing ones.
    pub fn register<I, K, V>(&mut self, kind: ExclusionKind, spec: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ExcludeSpec>,
    {
        let table = self.table_mut(kind);
        for (path, names) in spec {
            table
                .entry(path.into())
                .or_default()
                .extend(names.into().into_names());
        }
        self
    }

    /// Names excluded from the object at `path`
    pub fn excluded(&self, kind: ExclusionKind, path: &str) -> Option<&BTreeSet<String>> {
        self.table(kind).get(path)
    }

    /// Check whether `name` is excluded from the object at `path`
    pub fn is_excluded(&self, kind: ExclusionKind, path: &str, name: &str) -> bool {
        self.excluded(kind, path)
            .is_some_and(|names| names.contains(name))
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
            && self.attributes.is_empty()
            && self.functions.is_empty()
            && self.classes.is_empty()
    }

    fn table(&self, kind: ExclusionKind) -> &Exclusions {
        match kind {
            ExclusionKind::Parameters => &self.parameters,
            ExclusionKind::Attributes => &self.attributes,
            ExclusionKind::Functions => &self.functions,
            ExclusionKind::Classes => &self.classes,
        }
    }

    fn table_mut(&mut self, kind: ExclusionKind) -> &mut Exclusions {
        match kind {
            ExclusionKind::Parameters => &mut self.parameters,
            ExclusionKind::Attributes => &mut self.attributes,
            ExclusionKind::Functions => &mut self.functions,
            ExclusionKind::Classes => &mut self.classes,
        }
    }
}

fn deserialize_specs<'de, D>(deserializer: D) -> Result<Exclusions, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: IndexMap<String, ExcludeSpec> = IndexMap::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(path, spec)| (path, spec.into_names()))
        .collect())
}
