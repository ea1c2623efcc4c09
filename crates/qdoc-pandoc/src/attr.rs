//! Element attributes
//!
//! Pandoc attaches an identifier, classes and key/value pairs to headers,
//! divs, spans and code. The same attributes can be written in markdown
//! form (`{#id .class key="value"}`) or as HTML attributes.

use indexmap::IndexMap;
use std::fmt;

/// Identifier, classes and key/value attributes of an element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attr {
    /// Element identifier (anchor)
    pub identifier: Option<String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Extra key/value attributes
    pub attributes: IndexMap<String, String>,
}

impl Attr {
    /// Create empty attributes
    pub fn new() -> Self {
        Self::default()
    }

    /// Create attributes with the given classes
    pub fn classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Set the identifier
    pub fn with_id(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Add a class
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Add a key/value attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Check whether there is nothing to write
    pub fn is_empty(&self) -> bool {
        self.identifier.is_none() && self.classes.is_empty() && self.attributes.is_empty()
    }

    /// Attributes in HTML form, e.g. `id="x" class="a b"`
    pub fn html(&self) -> String {
        let mut parts = Vec::new();
        if let Some(id) = &self.identifier {
            parts.push(format!("id=\"{}\"", id));
        }
        if !self.classes.is_empty() {
            parts.push(format!("class=\"{}\"", self.classes.join(" ")));
        }
        for (key, value) in &self.attributes {
            parts.push(format!("{}=\"{}\"", key, value));
        }
        parts.join(" ")
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(id) = &self.identifier {
            parts.push(format!("#{}", id));
        }
        parts.extend(self.classes.iter().map(|c| format!(".{}", c)));
        for (key, value) in &self.attributes {
            parts.push(format!("{}=\"{}\"", key, value));
        }
        write!(f, "{}", parts.join(" "))
    }
}
