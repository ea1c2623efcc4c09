//! Rendering shared by all documented objects
//!
//! Headings, names, labels, annotations, variable declarations, the
//! docstring body and summary rows.

use crate::config::NameFormat;
use crate::diagnostics::{RenderError, RenderResult};
use crate::format::{markdown_escape, pretty_code, repr_expr, repr_str, slug, title_case};
use crate::model::{Doc, Expr, SectionKind, Token, STRIP_QUALIFIER};
use crate::render::node::{RenderNode, SummaryItem};
use qdoc_pandoc::{interlink, Attr, Block, Blocks, Code, Div, Header, Inline, Inlines, Link, Span};

/// Labels worth showing, in display order
const LABELS: [&str; 6] = [
    "cached",
    "property",
    "classmethod",
    "staticmethod",
    "abstractmethod",
    "typing.overload",
];

/// Label shown on structural typing classes
const PROTOCOL_LABEL: &str = "Protocol";

/// Heading with the symbol, name and labels of the object
pub(crate) fn render_title(node: &RenderNode<'_>) -> RenderResult<Block> {
    let (Some(obj), Some(kind)) = (node.obj(), node.kind()) else {
        return Err(RenderError::invalid_usage("object title of a layout node"));
    };
    let show = node.show();
    let mut content = Inlines::new();

    if show.object_symbol {
        // Pandoc needs some content to write an empty code element
        content.push(Code::new(" ").with_attr(Attr::classes([
            "doc-symbol".to_string(),
            format!("doc-symbol-{}", kind),
        ])));
    }
    if show.object_name {
        content.push(Span::new(
            display_name(node),
            Attr::classes(["doc-object-name".to_string(), format!("doc-{}-name", kind)]),
        ));
    }
    if show.object_labels {
        content.push_opt(node.hooks().render_labels(node));
    }

    let mut attr = Attr::classes(["title".to_string(), "doc-object".to_string(), format!("doc-{}", kind)])
        .with_id(obj.path.as_str());
    if !obj.members.is_empty() {
        attr = attr.with_class("doc-has-member-docs");
    }
    Ok(Header::new(node.level(), content, attr).into())
}

/// Name shown in the heading
pub(crate) fn display_name(node: &RenderNode<'_>) -> String {
    let config = node.config();
    let format = config
        .display_name_format
        .resolve(node.level(), config.header_level);
    markdown_escape(&node.hooks().format_name(node, format)).into_owned()
}

/// Name shown in the signature
pub(crate) fn signature_name(node: &RenderNode<'_>) -> String {
    node.hooks()
        .format_name(node, node.config().signature_name_format)
}

pub(crate) fn format_name(node: &RenderNode<'_>, format: NameFormat) -> String {
    let Some(obj) = node.obj() else {
        return String::new();
    };
    match format {
        NameFormat::Name | NameFormat::Short => obj.name.clone(),
        // A top-level object has no relative path, fall back to its name
        NameFormat::Relative => match obj.path.split_once('.') {
            Some((_, relative)) => relative.to_string(),
            None => obj.name.clone(),
        },
        NameFormat::Full => obj.path.clone(),
        NameFormat::Canonical => obj.canonical().to_string(),
    }
}

/// Whitelisted labels of functions and attributes, or "Protocol"
pub(crate) fn labels(node: &RenderNode<'_>) -> Vec<String> {
    let Some(obj) = node.obj() else {
        return vec![];
    };
    if obj.is_function() || obj.is_attribute() {
        LABELS
            .iter()
            .filter(|label| obj.has_label(label))
            .map(|label| label.replace('.', "-"))
            .collect()
    } else if obj.is_protocol() {
        vec![PROTOCOL_LABEL.to_string()]
    } else {
        vec![]
    }
}

/// Empty code elements styled per label, inside a `doc-labels` span
pub(crate) fn render_labels(node: &RenderNode<'_>) -> Option<Inline> {
    let labels = node.hooks().labels(node);
    if labels.is_empty() {
        return None;
    }
    let codes: Inlines = labels
        .iter()
        .map(|label| {
            Inline::from(Code::new(" ").with_attr(Attr::classes([
                "doc-label".to_string(),
                format!("doc-label-{}", label.to_lowercase()),
            ])))
        })
        .collect();
    Some(Span::new(codes, Attr::classes(["doc-labels"])).into())
}

pub(crate) fn render_annotation(
    node: &RenderNode<'_>,
    annotation: Option<&Expr>,
) -> RenderResult<String> {
    let annotation = match annotation {
        Some(annotation) => Some(annotation),
        None => match node.obj() {
            Some(obj) if obj.is_attribute() => obj.annotation.as_ref(),
            Some(obj) => {
                return Err(RenderError::invalid_usage(format!(
                    "Cannot render annotation for type {}",
                    obj.kind
                )))
            }
            None => {
                return Err(RenderError::invalid_usage(format!(
                    "Cannot render annotation for a {} node",
                    node.target().type_name()
                )))
            }
        },
    };
    Ok(annotation.map(render_expr).unwrap_or_default())
}

/// Names become interlinks, strings are shown with double quotes
fn render_expr(expr: &Expr) -> String {
    match expr {
        Expr::Str { value } => repr_str(value).into_owned(),
        Expr::Name {
            name,
            canonical_path,
        } => interlink(
            Some(Inlines::from(markdown_escape(name).into_owned())),
            canonical_path,
        )
        .to_string(),
        _ => {
            let path = expr.canonical_path();
            if let Some(stripped) = path.strip_prefix(STRIP_QUALIFIER) {
                return interlink(Some(Inlines::from(expr.canonical_name())), stripped).to_string();
            }
            expr.tokens()
                .into_iter()
                .map(|token| match token {
                    Token::Text(text) => repr_str(&text).into_owned(),
                    Token::Expr(sub) => render_expr(sub),
                })
                .collect()
        }
    }
}

/// `name: annotation = default` as styled spans
///
/// The annotation is expected to be prettified already.
pub(crate) fn render_variable_definition(
    name: &str,
    annotation: Option<&str>,
    default: Option<&Expr>,
) -> Inlines {
    let mut inlines = Inlines::new();
    let annotation = annotation.filter(|a| !a.is_empty());

    if !name.is_empty() {
        inlines.push(Span::new(name, Attr::classes(["doc-parameter-name"])));
    }
    if let Some(annotation) = annotation {
        if !name.is_empty() {
            inlines.push(Span::new(": ", Attr::classes(["doc-parameter-annotation-sep"])));
        }
        inlines.push(Span::new(annotation, Attr::classes(["doc-parameter-annotation"])));
    }
    if let Some(default) = default {
        if !name.is_empty() {
            let equals = if annotation.is_some() { " = " } else { "=" };
            inlines.push(Span::new(equals, Attr::classes(["doc-parameter-default-sep"])));
        }
        inlines.push(Span::new(
            pretty_code(&repr_expr(default)),
            Attr::classes(["doc-parameter-default"]),
        ));
    }
    inlines
}

/// Rendered docstring sections with their kinds
///
/// Text and deprecation notes sit in a plain div, every other section
/// gets a heading one level below the object.
pub(crate) fn docstring_sections(
    node: &RenderNode<'_>,
) -> RenderResult<Vec<(SectionKind, Block)>> {
    let Some(docstring) = node.obj().and_then(|obj| obj.docstring.as_ref()) else {
        return Ok(vec![]);
    };

    let mut sections = Vec::with_capacity(docstring.parsed.len());
    for section in &docstring.parsed {
        let kind = section.kind();
        let title = title_case(section.title.as_deref().unwrap_or(kind.as_str()));
        let attr = Attr::classes([format!("doc-{}", slug(&title))]);
        let body = node
            .hooks()
            .render_section(node, section)?
            .unwrap_or_else(|| Block::Raw(String::new()));

        let block = if kind.is_untitled() {
            Div::new(body, attr).into()
        } else {
            let mut blocks = Blocks::new();
            blocks.push(Header::new(node.level() + 1, title, attr));
            blocks.push(body);
            blocks.into()
        };
        sections.push((kind, block));
    }
    Ok(sections)
}

/// The docstring sections
pub(crate) fn render_body(node: &RenderNode<'_>) -> RenderResult<Option<Block>> {
    let sections = docstring_sections(node)?;
    if sections.is_empty() {
        return Ok(None);
    }
    Ok(Some(
        sections
            .into_iter()
            .map(|(_, block)| block)
            .collect::<Blocks>()
            .into(),
    ))
}

/// Link to the object on its page and its one line description
pub(crate) fn render_summary(node: &RenderNode<'_>, doc: &Doc) -> SummaryItem {
    let link = Link::new(
        markdown_escape(&doc.name).into_owned(),
        format!("{}#{}", node.page_path(), doc.anchor),
    );
    SummaryItem::new(link.to_string(), doc.obj.describe())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocObject, Parameter};
    use crate::render::Renderer;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_variable_definition() {
        let inlines = render_variable_definition("a", Some("int"), Some(&Expr::str("1")));
        assert_eq!(
            inlines.to_string(),
            "[a]{.doc-parameter-name}[: ]{.doc-parameter-annotation-sep}\
             [int]{.doc-parameter-annotation}[ = ]{.doc-parameter-default-sep}\
             [1]{.doc-parameter-default}"
        );

        let inlines = render_variable_definition("b", None, Some(&Expr::str("'x'")));
        assert_eq!(
            inlines.to_string(),
            "[b]{.doc-parameter-name}[=]{.doc-parameter-default-sep}\
             [[&quot;x&quot;]{.st}]{.doc-parameter-default}"
        );

        let inlines = render_variable_definition("", Some("str"), None);
        assert_eq!(inlines.to_string(), "[str]{.doc-parameter-annotation}");
    }

    #[test]
    fn test_render_expr() {
        let optional = Expr::subscript(
            Expr::name("Optional", "typing.Optional"),
            Expr::name("int", "int"),
        );
        assert_eq!(
            render_expr(&optional),
            "[Optional](`typing.Optional`)[[int](`int`)]"
        );

        let stripped = Expr::Attribute {
            values: vec![Expr::name("~pkg", "~pkg"), Expr::name("Shape", "pkg.shapes.Shape")],
        };
        assert_eq!(render_expr(&stripped), "[Shape](`pkg.shapes.Shape`)");
        assert_eq!(render_expr(&Expr::str("'lit'")), "\"lit\"");
    }

    #[test]
    fn test_annotation_of_non_attribute() {
        let renderer = Renderer::default();
        let doc = Doc::new(
            "f",
            DocObject::function("pkg.f").with_parameters(vec![Parameter::new("x")]),
        );
        let node = RenderNode::for_doc(&renderer, &doc, 1).unwrap();
        let err = render_annotation(&node, None).unwrap_err();
        assert!(err.is_usage_error());
        assert!(render_annotation(&node, Some(&Expr::name("int", "int"))).is_ok());
    }

    #[test]
    fn test_format_name() {
        let renderer = Renderer::default();
        let doc = Doc::new(
            "Circle",
            DocObject::class("pkg.shapes.Circle").with_canonical_path("pkg._impl.Circle"),
        );
        let node = RenderNode::for_doc(&renderer, &doc, 1).unwrap();
        assert_eq!(format_name(&node, NameFormat::Name), "Circle");
        assert_eq!(format_name(&node, NameFormat::Relative), "shapes.Circle");
        assert_eq!(format_name(&node, NameFormat::Full), "pkg.shapes.Circle");
        assert_eq!(format_name(&node, NameFormat::Canonical), "pkg._impl.Circle");
    }

    #[test]
    fn test_relative_name_of_top_level_module() {
        let renderer = Renderer::new(
            crate::config::RenderConfig::default()
                .with_display_name_format(NameFormat::Relative),
        );
        let doc = Doc::new("pkg", DocObject::module("pkg"));
        let node = RenderNode::for_doc(&renderer, &doc, 1).unwrap();
        assert_eq!(format_name(&node, NameFormat::Relative), "pkg");
        let title = node.title().unwrap().unwrap().to_string();
        assert!(title.contains("[pkg]{.doc-object-name .doc-module-name}"));
    }
}
