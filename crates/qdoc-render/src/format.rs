//! Text formatting helpers
//!
//! Escaping, prettifying of code shown inside HTML `<code>` tags, and
//! interlinking of identifiers in declaration source.

use crate::model::{DocObject, Expr, Parameter, Token};
use lazy_static::lazy_static;
use qdoc_pandoc::{interlink, Attr, Inlines, Span};
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::HashMap;

lazy_static! {
    /// Python identifiers in a string of code
    static ref IDENTIFIER_RE: Regex = Regex::new(r"\b([^\W\d]\w*)").unwrap();

    /// Quoted strings in a string of code
    static ref STRING_RE: Regex =
        Regex::new(r#""(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*'"#).unwrap();

    /// Qualified names, or comma separated lists of them, at the start of a line
    static ref QUALNAME_RE: Regex = {
        let qualname = r"[a-zA-Z_][a-zA-Z0-9_]*(?:\.[a-zA-Z_][a-zA-Z0-9_]*)*";
        Regex::new(&format!(r"(?m)^((?:{q},\s*)+{q})|^({q})", q = qualname)).unwrap()
    };

    /// Indented continuation lines of a see-also item
    static ref CONTINUATION_RE: Regex = Regex::new(r"\n +").unwrap();
}

/// Characters that start markup when at the beginning of a string
const MARKDOWN_START_CHARS: [char; 2] = ['_', '*'];

/// Names that always resolve, whether or not the expression mentions them
const DEFAULT_LOOKUP: [(&str, &str); 1] = [("TypeAlias", "typing.TypeAlias")];

/// Escape a string that would otherwise start markdown emphasis
pub fn markdown_escape(s: &str) -> Cow<'_, str> {
    if s.starts_with(MARKDOWN_START_CHARS) {
        Cow::Owned(format!("\\{}", s))
    } else {
        Cow::Borrowed(s)
    }
}

/// Replace double and single quotes with HTML entities
///
/// Quotes inside inline `<code>` would otherwise become curly quotes.
pub fn escape_quotes(s: &str) -> String {
    s.replace('"', "&quot;").replace('\'', "&apos;")
}

/// Keep indentation and newlines of code inside inline HTML
pub fn escape_indents(s: &str) -> String {
    s.replace("    ", "&nbsp;&nbsp;&nbsp;&nbsp;")
        .replace('\n', "<br>")
}

/// Wrap quoted strings in a string highlight span
pub fn highlight_strings(s: &str) -> String {
    STRING_RE
        .replace_all(s, |caps: &Captures| {
            Span::new(&caps[0], Attr::new().with_class("st")).to_string()
        })
        .into_owned()
}

/// Remove whitespace common to the start of all non-blank lines
///
/// Lines holding only whitespace are emptied.
pub fn dedent(s: &str) -> String {
    let margin = s
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start_matches([' ', '\t']).len())
        .min()
        .unwrap_or(0);

    let mut out = String::with_capacity(s.len());
    for (i, line) in s.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if line.trim().is_empty() {
            continue;
        }
        out.push_str(&line[margin.min(line.len())..]);
    }
    out
}

/// Prettify code that will be shown inside HTML `<code>` tags
///
/// The code may already hold markdown links but must not be wrapped in
/// the tags yet. Pandoc does not highlight such code and squashes its
/// whitespace, so strings get a highlight span and the layout is kept
/// with entities.
pub fn pretty_code(s: &str) -> String {
    escape_quotes(&escape_indents(&highlight_strings(&dedent(s))))
}

/// Show a single quoted string literal with double quotes
pub fn repr_str(s: &str) -> Cow<'_, str> {
    if s.len() >= 2 && s.starts_with('\'') && s.ends_with('\'') {
        Cow::Owned(format!("\"{}\"", &s[1..s.len() - 1]))
    } else {
        Cow::Borrowed(s)
    }
}

/// Source text of an expression, with string literals in double quotes
pub fn repr_expr(expr: &Expr) -> String {
    expr.iterate()
        .into_iter()
        .map(|token| match token {
            Token::Text(text) => repr_str(&text).into_owned(),
            Token::Expr(Expr::Name { name, .. }) => name.clone(),
            Token::Expr(Expr::Str { value }) => repr_str(value).into_owned(),
            Token::Expr(other) => other.to_string(),
        })
        .collect()
}

/// Turn the qualified names of a "See Also" section into interlinks
///
/// Continuation lines are joined to their item first, so only names at
/// the start of an item are linked.
pub fn format_see_also(s: &str) -> String {
    let content = dedent(s);
    let content = CONTINUATION_RE.replace_all(&content, " ");
    QUALNAME_RE
        .replace_all(&content, |caps: &Captures| {
            let whole = &caps[0];
            if caps.get(2).is_some() {
                let end = caps.get(0).map_or(0, |m| m.end());
                if content[end..].starts_with(',') {
                    return whole.to_string();
                }
            }
            whole
                .split(',')
                .map(|name| interlink(None, &format!("~{}", name.trim())).to_string())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .into_owned()
}

/// Identifier to canonical path of every name in an expression
pub fn canonical_lookup(expr: &Expr) -> HashMap<String, String> {
    let mut lookup: HashMap<String, String> = DEFAULT_LOOKUP
        .iter()
        .map(|(name, path)| (name.to_string(), path.to_string()))
        .collect();
    for token in expr.iterate() {
        if let Token::Expr(Expr::Name {
            name,
            canonical_path,
        }) = token
        {
            lookup.insert(name.clone(), canonical_path.clone());
        }
    }
    lookup
}

/// Interlink the identifiers of `code` found in the lookup table
pub fn interlink_identifiers(code: &str, lookup: &HashMap<String, String>) -> String {
    IDENTIFIER_RE
        .replace_all(code, |caps: &Captures| {
            let identifier = &caps[1];
            match lookup.get(identifier) {
                Some(path) => interlink(Some(Inlines::from(identifier)), path).to_string(),
                None => identifier.to_string(),
            }
        })
        .into_owned()
}

/// Declaration source of an attribute with its identifiers interlinked
pub fn render_attribute_declaration(attr: &DocObject) -> String {
    match &attr.value {
        None => String::new(),
        Some(Expr::Str { value }) => value.clone(),
        Some(value) => interlink_identifiers(&attr.lines.join("\n"), &canonical_lookup(value)),
    }
}

/// Declaration of a dataclass parameter that is also an attribute
///
/// The source comes from the attribute, the links from the parameter's
/// annotation.
pub fn render_dataclass_parameter(param: &Parameter, attr: &DocObject) -> String {
    let source = attr.lines.join("\n");
    match &param.annotation {
        Some(annotation) => interlink_identifiers(&source, &canonical_lookup(annotation)),
        None => source,
    }
}

/// Declaration of an init-only dataclass parameter
///
/// `a: InitVar[int] = 1` shows as `a: int = 1`. A parameter without a
/// wrapped annotation shows as its bare name.
pub fn render_dataclass_init_parameter(param: &Parameter) -> String {
    let Some(Expr::Subscript { slice, .. }) = &param.annotation else {
        return param.name.clone();
    };
    let declaration = match &param.default {
        Some(default) => format!("{}: {} = {}", param.name, slice, default),
        None => format!("{}: {}", param.name, slice),
    };
    interlink_identifiers(&declaration, &canonical_lookup(slice))
}

/// Capitalize the first letter of every word, lowercase the rest
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Class name fragment for a title, e.g. "See Also" -> "see-also"
pub fn slug(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_markdown_escape() {
        assert_eq!(markdown_escape("_private"), "\\_private");
        assert_eq!(markdown_escape("*args"), "\\*args");
        assert_eq!(markdown_escape("public"), "public");
        assert_eq!(markdown_escape(""), "");
    }

    #[test]
    fn test_dedent() {
        assert_eq!(dedent("    a\n      b\n    c"), "a\n  b\nc");
        assert_eq!(dedent("  a\n   \n  b"), "a\n\nb");
        assert_eq!(dedent("a\n  b"), "a\n  b");
    }

    #[test]
    fn test_pretty_code() {
        assert_eq!(
            pretty_code("x = 'a'\nif x:\n    y"),
            "x = [&apos;a&apos;]{.st}<br>if x:<br>&nbsp;&nbsp;&nbsp;&nbsp;y"
        );
        assert_eq!(pretty_code(r#"s = "q\"q""#), r#"s = [&quot;q\&quot;q&quot;]{.st}"#);
    }

    #[test]
    fn test_repr() {
        assert_eq!(repr_str("'abc'"), "\"abc\"");
        assert_eq!(repr_str("\"abc\""), "\"abc\"");
        assert_eq!(repr_str("'"), "'");

        let expr = Expr::call(
            Expr::name("Color", "pkg.Color"),
            vec![Expr::str("'red'")],
        );
        assert_eq!(repr_expr(&expr), "Color(\"red\")");
    }

    #[test]
    fn test_see_also() {
        let text = "pkg.f, pkg.g : Related functions\npkg.h : Another one\n  that continues";
        assert_eq!(
            format_see_also(text),
            "[](`~pkg.f`), [](`~pkg.g`) : Related functions\n\
             [](`~pkg.h`) : Another one that continues"
        );
    }

    #[test]
    fn test_see_also_trailing_comma() {
        assert_eq!(format_see_also("abc, 12"), "abc, 12");
    }

    #[test]
    fn test_interlink_identifiers() {
        let annotation = Expr::subscript(
            Expr::name("Optional", "typing.Optional"),
            Expr::name("int", "int"),
        );
        let lookup = canonical_lookup(&annotation);
        assert_eq!(
            interlink_identifiers("x: Optional[int] = None", &lookup),
            "x: [Optional](`typing.Optional`)[[int](`int`)] = None"
        );
    }

    #[test]
    fn test_dataclass_init_parameter() {
        let param = Parameter::new("a")
            .with_annotation(Expr::subscript(
                Expr::name("InitVar", "dataclasses.InitVar"),
                Expr::name("int", "int"),
            ))
            .with_default("1");
        assert_eq!(render_dataclass_init_parameter(&param), "a: [int](`int`) = 1");
        assert_eq!(render_dataclass_init_parameter(&Parameter::new("b")), "b");
    }

    #[test]
    fn test_attribute_declaration() {
        let alias = DocObject::attribute("pkg.Number")
            .with_annotation(Expr::name("TypeAlias", "typing.TypeAlias"))
            .with_value(Expr::Compound {
                parts: vec![
                    Expr::name("int", "int"),
                    Expr::str(" | "),
                    Expr::name("float", "float"),
                ],
            })
            .with_lines("Number: TypeAlias = int | float");
        assert_eq!(
            render_attribute_declaration(&alias),
            "Number: [TypeAlias](`typing.TypeAlias`) = [int](`int`) | [float](`float`)"
        );
    }

    #[test]
    fn test_title_and_slug() {
        assert_eq!(title_case("see also"), "See Also");
        assert_eq!(title_case("PARAMETERS"), "Parameters");
        assert_eq!(slug("Other Parameters"), "other-parameters");
    }
}
