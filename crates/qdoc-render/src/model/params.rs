//! Parameter definition types
//!
//! Parameters of functions, methods and class initializers, in
//! declaration order.

use crate::model::expr::Expr;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How an argument binds to a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    /// Before `/`
    PositionalOnly,
    /// Ordinary parameter
    #[default]
    PositionalOrKeyword,
    /// `*args`
    VarPositional,
    /// After `*` or `*args`
    KeywordOnly,
    /// `**kwargs`
    VarKeyword,
}

impl ParameterKind {
    /// Check for `*args` or `**kwargs`
    pub fn is_variadic(&self) -> bool {
        matches!(self, ParameterKind::VarPositional | ParameterKind::VarKeyword)
    }

    /// Get display string
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterKind::PositionalOnly => "positional-only",
            ParameterKind::PositionalOrKeyword => "positional or keyword",
            ParameterKind::VarPositional => "variadic positional",
            ParameterKind::KeywordOnly => "keyword-only",
            ParameterKind::VarKeyword => "variadic keyword",
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parameter of a callable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name, without `*` prefixes
    pub name: String,

    #[serde(default)]
    pub kind: ParameterKind,

    /// Type annotation
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub annotation: Option<Expr>,

    /// Default value
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default: Option<Expr>,
}

impl Parameter {
    /// Create a positional-or-keyword parameter
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::PositionalOrKeyword,
            annotation: None,
            default: None,
        }
    }

    /// Set the kind
    pub fn with_kind(mut self, kind: ParameterKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the annotation
    pub fn with_annotation(mut self, annotation: Expr) -> Self {
        self.annotation = Some(annotation);
        self
    }

    /// Set the default value
    pub fn with_default(mut self, default: impl Into<Expr>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Check for `*args` or `**kwargs`
    pub fn is_variadic(&self) -> bool {
        self.kind.is_variadic()
    }

    /// Check for a dataclass field declared with `field(init=False, ...)`
    pub fn is_field_init_false(&self) -> bool {
        self.default
            .as_ref()
            .filter(|default| default.is_call_to("field"))
            .and_then(|default| default.keyword_argument("init"))
            .is_some_and(|init| init.to_string() == "False")
    }
}
