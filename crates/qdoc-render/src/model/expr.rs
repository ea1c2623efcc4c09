//! Expressions
//!
//! Type annotations, default values and attribute values arrive from the
//! introspection tool as small expression trees. Names carry the
//! canonical path of what they refer to so they can become cross
//! references.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Marker that asks for a reference to be shown by its short name
pub const STRIP_QUALIFIER: char = '~';

/// An expression tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expr {
    /// Literal source text (string literals, numbers, operators)
    Str { value: String },
    /// A name that refers to an object
    Name { name: String, canonical_path: String },
    /// Dotted access, e.g. `typing.Optional`
    Attribute { values: Vec<Expr> },
    /// Function call, e.g. `field(init=False)`
    Call {
        function: Box<Expr>,
        #[serde(default)]
        arguments: Vec<Expr>,
    },
    /// Keyword argument of a call
    Keyword { name: String, value: Box<Expr> },
    /// Subscript, e.g. `InitVar[int]`
    Subscript { left: Box<Expr>, slice: Box<Expr> },
    /// Comma separated elements
    Tuple { elements: Vec<Expr> },
    /// Any other sequence of tokens, e.g. `int | None`
    Compound { parts: Vec<Expr> },
}

/// A direct child of an expression
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    /// Punctuation or literal text
    Text(Cow<'a, str>),
    /// A sub-expression
    Expr(&'a Expr),
}

impl Expr {
    /// Literal text
    pub fn str(value: impl Into<String>) -> Self {
        Expr::Str {
            value: value.into(),
        }
    }

    /// A name resolving to `canonical_path`
    pub fn name(name: impl Into<String>, canonical_path: impl Into<String>) -> Self {
        Expr::Name {
            name: name.into(),
            canonical_path: canonical_path.into(),
        }
    }

    /// `function(arguments...)`
    pub fn call(function: Expr, arguments: Vec<Expr>) -> Self {
        Expr::Call {
            function: Box::new(function),
            arguments,
        }
    }

    /// `name=value`
    pub fn keyword(name: impl Into<String>, value: Expr) -> Self {
        Expr::Keyword {
            name: name.into(),
            value: Box::new(value),
        }
    }

    /// `left[slice]`
    pub fn subscript(left: Expr, slice: Expr) -> Self {
        Expr::Subscript {
            left: Box::new(left),
            slice: Box::new(slice),
        }
    }

    /// Direct children, with the punctuation between them
    pub fn tokens(&self) -> Vec<Token<'_>> {
        match self {
            Expr::Str { value } => vec![Token::Text(Cow::Borrowed(value))],
            Expr::Name { name, .. } => vec![Token::Text(Cow::Borrowed(name))],
            Expr::Attribute { values } => joined(values, "."),
            Expr::Call {
                function,
                arguments,
            } => {
                let mut tokens = vec![Token::Expr(function), Token::Text(Cow::Borrowed("("))];
                tokens.extend(joined(arguments, ", "));
                tokens.push(Token::Text(Cow::Borrowed(")")));
                tokens
            }
            Expr::Keyword { name, value } => vec![
                Token::Text(Cow::Borrowed(name)),
                Token::Text(Cow::Borrowed("=")),
                Token::Expr(value),
            ],
            Expr::Subscript { left, slice } => vec![
                Token::Expr(left),
                Token::Text(Cow::Borrowed("[")),
                Token::Expr(slice),
                Token::Text(Cow::Borrowed("]")),
            ],
            Expr::Tuple { elements } => joined(elements, ", "),
            Expr::Compound { parts } => parts.iter().map(Token::Expr).collect(),
        }
    }

    /// Flattened leaves: text fragments and names, in source order
    pub fn iterate(&self) -> Vec<Token<'_>> {
        match self {
            Expr::Str { .. } | Expr::Name { .. } => vec![Token::Expr(self)],
            _ => self
                .tokens()
                .into_iter()
                .flat_map(|token| match token {
                    Token::Expr(expr) => expr.iterate(),
                    text => vec![text],
                })
                .collect(),
        }
    }

    /// Canonical path of the object the expression refers to
    ///
    /// For expressions that are not references this is the source text.
    pub fn canonical_path(&self) -> String {
        match self {
            Expr::Name { canonical_path, .. } => canonical_path.clone(),
            Expr::Str { value } => value.clone(),
            Expr::Attribute { values } => {
                let Some(last) = values.last() else {
                    return String::new();
                };
                let path = last.canonical_path();
                let stripped = matches!(
                    values.first(),
                    Some(Expr::Name { name, .. }) if name.starts_with(STRIP_QUALIFIER)
                );
                if stripped && !path.starts_with(STRIP_QUALIFIER) {
                    format!("{}{}", STRIP_QUALIFIER, path)
                } else {
                    path
                }
            }
            _ => self.to_string(),
        }
    }

    /// Last component of the canonical path
    pub fn canonical_name(&self) -> String {
        let path = self.canonical_path();
        path.rsplit('.').next().unwrap_or_default().to_string()
    }

    /// Check whether this is a name with the given identifier
    pub fn is_name(&self, identifier: &str) -> bool {
        matches!(self, Expr::Name { name, .. } if name == identifier)
    }

    /// Check whether this is a call of the function with the given name
    pub fn is_call_to(&self, identifier: &str) -> bool {
        matches!(self, Expr::Call { function, .. } if function.is_name(identifier))
    }

    /// Value of the keyword argument `name` if this is a call
    pub fn keyword_argument(&self, keyword: &str) -> Option<&Expr> {
        let Expr::Call { arguments, .. } = self else {
            return None;
        };
        arguments.iter().find_map(|arg| match arg {
            Expr::Keyword { name, value } if name == keyword => Some(value.as_ref()),
            _ => None,
        })
    }
}

fn joined<'a>(exprs: &'a [Expr], separator: &'static str) -> Vec<Token<'a>> {
    let mut tokens = Vec::with_capacity(exprs.len() * 2);
    for (i, expr) in exprs.iter().enumerate() {
        if i > 0 {
            tokens.push(Token::Text(Cow::Borrowed(separator)));
        }
        tokens.push(Token::Expr(expr));
    }
    tokens
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in self.iterate() {
            match token {
                Token::Text(text) => f.write_str(&text)?,
                Token::Expr(Expr::Str { value }) => f.write_str(value)?,
                Token::Expr(Expr::Name { name, .. }) => f.write_str(name)?,
                Token::Expr(other) => write!(f, "{}", other)?,
            }
        }
        Ok(())
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Expr::str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn optional_int() -> Expr {
        Expr::subscript(
            Expr::name("Optional", "typing.Optional"),
            Expr::name("int", "int"),
        )
    }

    #[test]
    fn test_display() {
        assert_eq!(optional_int().to_string(), "Optional[int]");

        let field = Expr::call(
            Expr::name("field", "dataclasses.field"),
            vec![
                Expr::keyword("init", Expr::str("False")),
                Expr::keyword("default", Expr::str("1")),
            ],
        );
        assert_eq!(field.to_string(), "field(init=False, default=1)");
    }

    #[test]
    fn test_iterate_leaves() {
        let names: Vec<String> = optional_int()
            .iterate()
            .into_iter()
            .filter_map(|t| match t {
                Token::Expr(Expr::Name { canonical_path, .. }) => Some(canonical_path.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(names, vec!["typing.Optional", "int"]);
    }

    #[test]
    fn test_canonical_path_strip_marker() {
        let attr = Expr::Attribute {
            values: vec![
                Expr::name("~pkg", "~pkg"),
                Expr::name("Shape", "pkg.shapes.Shape"),
            ],
        };
        assert_eq!(attr.canonical_path(), "~pkg.shapes.Shape");
        assert_eq!(attr.canonical_name(), "Shape");
    }

    #[test]
    fn test_keyword_argument() {
        let field = Expr::call(
            Expr::name("field", "dataclasses.field"),
            vec![Expr::keyword("init", Expr::str("False"))],
        );
        assert!(field.is_call_to("field"));
        assert_eq!(field.keyword_argument("init"), Some(&Expr::str("False")));
        assert_eq!(field.keyword_argument("repr"), None);
    }

    #[test]
    fn test_deserialize() {
        let expr: Expr = serde_json::from_str(
            r#"{"kind": "subscript",
                "left": {"kind": "name", "name": "InitVar", "canonical_path": "dataclasses.InitVar"},
                "slice": {"kind": "name", "name": "int", "canonical_path": "int"}}"#,
        )
        .unwrap();
        assert_eq!(expr.to_string(), "InitVar[int]");
    }
}
