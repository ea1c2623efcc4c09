//! Introspected program objects
//!
//! `DocObject` is the read-only view of one module, class, function or
//! attribute produced by the introspection tool. Members keep their
//! declaration order.

use crate::model::docstring::Docstring;
use crate::model::expr::Expr;
use crate::model::params::Parameter;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Canonical path of the structural typing marker base
const PROTOCOL_PATH: &str = "typing.Protocol";

/// Kind of an introspected object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Module,
    Class,
    Function,
    Attribute,
    /// An unresolved import of another object
    Alias,
}

impl ObjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Module => "module",
            ObjectKind::Class => "class",
            ObjectKind::Function => "function",
            ObjectKind::Attribute => "attribute",
            ObjectKind::Alias => "alias",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An introspected module, class, function or attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocObject {
    /// Short name
    pub name: String,

    pub kind: ObjectKind,

    /// Dotted path as seen by users of the package
    pub path: String,

    /// Dotted path of the definition site, defaults to `path`
    #[serde(default)]
    pub canonical_path: String,

    /// Kind of the enclosing object, `None` for a root object
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub parent_kind: Option<ObjectKind>,

    /// Parameters of a function, or of a class initializer
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,

    /// Declared type of an attribute
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub annotation: Option<Expr>,

    /// Assigned value of an attribute
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub value: Option<Expr>,

    /// Declaration source lines
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<String>,

    /// Base classes of a class
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bases: Vec<Expr>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub docstring: Option<Docstring>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub members: IndexMap<String, DocObject>,

    /// Labels such as "property", "classmethod" or "dataclass"
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub labels: BTreeSet<String>,
}

impl DocObject {
    /// Create an object at the dotted `path`
    pub fn new(kind: ObjectKind, path: impl Into<String>) -> Self {
        let path = path.into();
        let name = path.rsplit('.').next().unwrap_or_default().to_string();
        Self {
            name,
            kind,
            canonical_path: path.clone(),
            path,
            parent_kind: None,
            parameters: vec![],
            annotation: None,
            value: None,
            lines: vec![],
            bases: vec![],
            docstring: None,
            members: IndexMap::new(),
            labels: BTreeSet::new(),
        }
    }

    pub fn module(path: impl Into<String>) -> Self {
        Self::new(ObjectKind::Module, path)
    }

    pub fn class(path: impl Into<String>) -> Self {
        Self::new(ObjectKind::Class, path)
    }

    pub fn function(path: impl Into<String>) -> Self {
        Self::new(ObjectKind::Function, path)
    }

    pub fn attribute(path: impl Into<String>) -> Self {
        Self::new(ObjectKind::Attribute, path)
    }

    pub fn with_canonical_path(mut self, path: impl Into<String>) -> Self {
        self.canonical_path = path.into();
        self
    }

    pub fn with_parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_annotation(mut self, annotation: Expr) -> Self {
        self.annotation = Some(annotation);
        self
    }

    pub fn with_value(mut self, value: impl Into<Expr>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the declaration source
    pub fn with_lines(mut self, source: &str) -> Self {
        self.lines = source.lines().map(String::from).collect();
        self
    }

    pub fn with_base(mut self, base: Expr) -> Self {
        self.bases.push(base);
        self
    }

    pub fn with_docstring(mut self, docstring: Docstring) -> Self {
        self.docstring = Some(docstring);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.insert(label.into());
        self
    }

    /// Add a member, recording this object as its parent
    pub fn with_member(mut self, mut member: DocObject) -> Self {
        member.parent_kind = Some(self.kind);
        self.members.insert(member.name.clone(), member);
        self
    }

    /// Canonical path, falling back to the user facing path
    pub fn canonical(&self) -> &str {
        if self.canonical_path.is_empty() {
            &self.path
        } else {
            &self.canonical_path
        }
    }

    pub fn is_class(&self) -> bool {
        self.kind == ObjectKind::Class
    }

    pub fn is_function(&self) -> bool {
        self.kind == ObjectKind::Function
    }

    pub fn is_attribute(&self) -> bool {
        self.kind == ObjectKind::Attribute
    }

    pub fn is_module(&self) -> bool {
        self.kind == ObjectKind::Module
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    /// Check for a class generated by the dataclass decorator
    pub fn is_dataclass(&self) -> bool {
        self.is_class() && self.has_label("dataclass")
    }

    /// Check for a type alias declaration
    ///
    /// Either annotated with `TypeAlias` or with a bare string, the
    /// old style of declaring an alias.
    pub fn is_typealias(&self) -> bool {
        if !self.is_attribute() {
            return false;
        }
        match &self.annotation {
            Some(Expr::Name { name, .. }) => name == "TypeAlias",
            Some(Expr::Str { .. }) => true,
            _ => false,
        }
    }

    /// Check for a `TypeVar(...)` declaration
    pub fn is_typevar(&self) -> bool {
        self.is_attribute()
            && self
                .value
                .as_ref()
                .is_some_and(|value| value.is_call_to("TypeVar"))
    }

    /// Check for a class whose most derived base is `typing.Protocol`
    pub fn is_protocol(&self) -> bool {
        self.is_class()
            && matches!(
                self.bases.last(),
                Some(Expr::Name { canonical_path, .. }) if canonical_path == PROTOCOL_PATH
            )
    }

    /// Attribute member with the given name
    pub fn attribute_member(&self, name: &str) -> Option<&DocObject> {
        self.members.get(name).filter(|m| m.is_attribute())
    }

    /// First line of the leading docstring text, or empty
    pub fn describe(&self) -> &str {
        self.docstring
            .as_ref()
            .and_then(Docstring::first_line)
            .unwrap_or_default()
    }
}
