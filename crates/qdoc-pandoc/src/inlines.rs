//! Inline content
//!
//! Inline elements sit inside a paragraph, a header or a table cell.

use crate::attr::Attr;
use std::fmt;

/// An inline element
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    /// Literal markdown text
    Str(String),
    /// `[content]{attr}`
    Span(Span),
    /// `` `text`{attr} ``
    Code(Code),
    /// `[content](target)`
    Link(Link),
    /// A run of inlines
    Many(Inlines),
}

impl Inline {
    /// Check whether the element writes out to nothing
    pub fn is_empty(&self) -> bool {
        match self {
            Inline::Str(s) => s.is_empty(),
            Inline::Many(inlines) => inlines.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for Inline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inline::Str(s) => f.write_str(s),
            Inline::Span(span) => span.fmt(f),
            Inline::Code(code) => code.fmt(f),
            Inline::Link(link) => link.fmt(f),
            Inline::Many(inlines) => inlines.fmt(f),
        }
    }
}

impl From<&str> for Inline {
    fn from(s: &str) -> Self {
        Inline::Str(s.to_string())
    }
}

impl From<String> for Inline {
    fn from(s: String) -> Self {
        Inline::Str(s)
    }
}

impl From<Span> for Inline {
    fn from(span: Span) -> Self {
        Inline::Span(span)
    }
}

impl From<Code> for Inline {
    fn from(code: Code) -> Self {
        Inline::Code(code)
    }
}

impl From<Link> for Inline {
    fn from(link: Link) -> Self {
        Inline::Link(link)
    }
}

impl From<Inlines> for Inline {
    fn from(inlines: Inlines) -> Self {
        Inline::Many(inlines)
    }
}

/// A sequence of inlines written back to back
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inlines(pub Vec<Inline>);

impl Inlines {
    /// Create an empty run
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element
    pub fn push(&mut self, inline: impl Into<Inline>) {
        self.0.push(inline.into());
    }

    /// Append an element if there is one
    pub fn push_opt(&mut self, inline: Option<impl Into<Inline>>) {
        if let Some(inline) = inline {
            self.push(inline);
        }
    }

    /// Check whether the run writes out to nothing
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Inline::is_empty)
    }
}

impl fmt::Display for Inlines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for inline in &self.0 {
            inline.fmt(f)?;
        }
        Ok(())
    }
}

impl From<&str> for Inlines {
    fn from(s: &str) -> Self {
        Inlines(vec![Inline::from(s)])
    }
}

impl From<String> for Inlines {
    fn from(s: String) -> Self {
        Inlines(vec![Inline::from(s)])
    }
}

impl From<Vec<Inline>> for Inlines {
    fn from(items: Vec<Inline>) -> Self {
        Inlines(items)
    }
}

impl FromIterator<Inline> for Inlines {
    fn from_iter<T: IntoIterator<Item = Inline>>(iter: T) -> Self {
        Inlines(iter.into_iter().collect())
    }
}

/// Bracketed span with attributes
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub content: Inlines,
    pub attr: Attr,
}

impl Span {
    pub fn new(content: impl Into<Inlines>, attr: Attr) -> Self {
        Self {
            content: content.into(),
            attr,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]{{{}}}", self.content, self.attr)
    }
}

/// Inline code
#[derive(Debug, Clone, PartialEq)]
pub struct Code {
    pub text: String,
    pub attr: Attr,
}

impl Code {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attr: Attr::default(),
        }
    }

    pub fn with_attr(mut self, attr: Attr) -> Self {
        self.attr = attr;
        self
    }

    /// The code as an HTML `<code>` element
    ///
    /// Markup inside HTML code tags is still processed by pandoc, which
    /// is what allows links inside rendered declarations.
    pub fn html(&self) -> String {
        if self.attr.is_empty() {
            format!("<code>{}</code>", self.text)
        } else {
            format!("<code {}>{}</code>", self.attr.html(), self.text)
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.attr.is_empty() {
            write!(f, "`{}`", self.text)
        } else {
            write!(f, "`{}`{{{}}}", self.text, self.attr)
        }
    }
}

/// Hyperlink
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub content: Inlines,
    pub target: String,
}

impl Link {
    pub fn new(content: impl Into<Inlines>, target: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]({})", self.content, self.target)
    }
}

/// Link whose target is a symbolic cross reference
///
/// The target is wrapped in backticks and left for the interlinks
/// filter to resolve. Without content the filter fills in the text.
pub fn interlink(content: Option<Inlines>, target: &str) -> Link {
    Link {
        content: content.unwrap_or_default(),
        target: format!("`{}`", target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span() {
        let span = Span::new("x", Attr::classes(["doc-parameter-name"]));
        assert_eq!(span.to_string(), "[x]{.doc-parameter-name}");
    }

    #[test]
    fn test_code_forms() {
        let code = Code::new(" ").with_attr(Attr::classes(["doc-symbol", "doc-symbol-class"]));
        assert_eq!(code.to_string(), "` `{.doc-symbol .doc-symbol-class}");
        assert_eq!(
            code.html(),
            "<code class=\"doc-symbol doc-symbol-class\"> </code>"
        );
        assert_eq!(Code::new("a = 1").html(), "<code>a = 1</code>");
    }

    #[test]
    fn test_interlink() {
        let link = interlink(Some(Inlines::from("int")), "int");
        assert_eq!(link.to_string(), "[int](`int`)");
        assert_eq!(interlink(None, "~pkg.func").to_string(), "[](`~pkg.func`)");
    }

    #[test]
    fn test_inlines_concatenate() {
        let mut inlines = Inlines::new();
        inlines.push("a");
        inlines.push_opt(None::<Inline>);
        inlines.push(Span::new("b", Attr::new().with_class("c")));
        assert_eq!(inlines.to_string(), "a[b]{.c}");
        assert!(Inlines::from("").is_empty());
    }
}
