//! Signature formatting
//!
//! Builds the text inside a callable's signature code block, e.g.
//! `func(a, b, /, c, *, d=1, **kwargs)`.

use crate::format::repr_expr;
use crate::model::{Parameter, ParameterKind};

/// Widest a one line signature may be
const MAX_WIDTH: usize = 78;

/// Widest the parameters may be before they go one per line
const MAX_PARAMS_WIDTH: usize = 74;

const INDENT: &str = "    ";

/// Join a callable name and its rendered parameters into a signature
///
/// A signature wider than 78 characters has its parameters moved to an
/// indented line of their own; if the parameters alone are wider than
/// 74 characters they go one per line. Parameters are never broken.
pub fn format_signature(name: &str, params: &[String]) -> String {
    let opening = format!("{}(", name);
    let mut params_string = params.join(", ");
    let mut closing = ")";

    if opening.chars().count() + params_string.chars().count() > MAX_WIDTH {
        let line_pad = format!("\n{}", INDENT);
        if params_string.chars().count() > MAX_PARAMS_WIDTH {
            params_string = params.join(&format!(",{}", line_pad));
        }
        params_string = format!("{}{}", line_pad, params_string);
        closing = "\n)";
    }
    format!("{}{}{}", opening, params_string, closing)
}

/// Render parameters with the `/` and `*` separators between them
///
/// `/` follows the last positional-only parameter and `*` comes before
/// the first keyword-only one, unless `*args` already introduces it.
pub fn separated_parameters<'a, I, F>(parameters: I, mut render: F) -> Vec<String>
where
    I: IntoIterator<Item = &'a Parameter>,
    F: FnMut(&'a Parameter) -> String,
{
    let mut out = Vec::new();
    let mut prev = ParameterKind::PositionalOrKeyword;

    for parameter in parameters {
        let cur = parameter.kind;
        if prev != cur && prev != ParameterKind::VarPositional {
            if prev == ParameterKind::PositionalOnly {
                out.push("/".to_string());
            }
            if cur == ParameterKind::KeywordOnly {
                out.push("*".to_string());
            }
        }
        out.push(render(parameter));
        prev = cur;
    }

    // Only positional-only parameters still need the closing slash
    if prev == ParameterKind::PositionalOnly {
        out.push("/".to_string());
    }
    out
}

/// Render one parameter as it appears in a signature
///
/// Variadic parameters get their star prefix and never show a default.
pub fn signature_parameter(param: &Parameter, show_annotation: bool) -> String {
    let (name, default) = match param.kind {
        ParameterKind::VarKeyword => (format!("**{}", param.name), None),
        ParameterKind::VarPositional => (format!("*{}", param.name), None),
        _ => (param.name.clone(), param.default.as_ref()),
    };

    let (annotation, equals) = match (&param.annotation, show_annotation) {
        (Some(annotation), true) => (format!(" : {}", annotation), " = "),
        _ => (String::new(), "="),
    };

    let default = default
        .map(|value| format!("{}{}", equals, repr_expr(value)))
        .unwrap_or_default();
    format!("{}{}{}", name, annotation, default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Expr;
    use pretty_assertions::assert_eq;

    fn param(name: &str, kind: ParameterKind) -> Parameter {
        Parameter::new(name).with_kind(kind)
    }

    fn render(params: &[Parameter]) -> Vec<String> {
        separated_parameters(params, |p| signature_parameter(p, false))
    }

    #[test]
    fn test_positional_and_keyword_only() {
        use ParameterKind::*;
        let params = vec![
            param("a", PositionalOnly),
            param("b", PositionalOnly),
            param("c", PositionalOrKeyword),
            param("d", PositionalOrKeyword),
            param("e", KeywordOnly),
            param("f", KeywordOnly),
        ];
        assert_eq!(
            format_signature("func", &render(&params)),
            "func(a, b, /, c, d, *, e, f)"
        );
    }

    #[test]
    fn test_var_positional_introduces_keyword_only() {
        use ParameterKind::*;
        let params = vec![
            param("a", PositionalOrKeyword).with_default("1"),
            param("b", PositionalOrKeyword).with_default("2"),
            param("c", VarPositional).with_default("()"),
            param("z", KeywordOnly).with_default("26"),
        ];
        assert_eq!(
            format_signature("func", &render(&params)),
            "func(a=1, b=2, *c, z=26)"
        );
    }

    #[test]
    fn test_var_keyword_has_no_default() {
        use ParameterKind::*;
        let params = vec![
            param("a", PositionalOrKeyword).with_default("1"),
            param("kwargs", VarKeyword).with_default("{}"),
        ];
        let sig = format_signature("func", &render(&params));
        assert_eq!(sig, "func(a=1, **kwargs)");
        assert!(!sig.contains("{}"));
    }

    #[test]
    fn test_only_positional_only() {
        let params = vec![param("a", ParameterKind::PositionalOnly)];
        assert_eq!(format_signature("f", &render(&params)), "f(a, /)");
    }

    #[test]
    fn test_keyword_only_first() {
        let params = vec![param("x", ParameterKind::KeywordOnly)];
        assert_eq!(format_signature("f", &render(&params)), "f(*, x)");
    }

    #[test]
    fn test_annotation() {
        let p = Parameter::new("name")
            .with_annotation(Expr::name("str", "str"))
            .with_default("'x'");
        assert_eq!(signature_parameter(&p, true), "name : str = \"x\"");
        assert_eq!(signature_parameter(&p, false), "name=\"x\"");
    }

    #[test]
    fn test_reflow() {
        let params: Vec<String> = (0..8).map(|i| format!("parameter_{}", i)).collect();
        let sig = format_signature("function", &params);
        assert_eq!(
            sig,
            "function(\n    parameter_0,\n    parameter_1,\n    parameter_2,\n    \
             parameter_3,\n    parameter_4,\n    parameter_5,\n    parameter_6,\n    \
             parameter_7\n)"
        );
    }

    #[test]
    fn test_reflow_single_line() {
        let name = "a".repeat(70);
        let params = vec!["first".to_string(), "second".to_string()];
        assert_eq!(
            format_signature(&name, &params),
            format!("{}(\n    first, second\n)", name)
        );
    }
}
