//! Attributes, type aliases and type variables

use crate::diagnostics::RenderResult;
use crate::format::{pretty_code, render_attribute_declaration};
use crate::render::doc::signature_name;
use crate::render::node::{DocKind, RenderNode};
use qdoc_pandoc::{Attr, Block, Code, Div};

/// `name: annotation = value` declaration
pub(crate) fn render_signature(node: &RenderNode<'_>) -> RenderResult<Option<Block>> {
    let (Some(obj), Some(kind)) = (node.obj(), node.kind()) else {
        return Ok(None);
    };
    let hooks = node.hooks();
    let name = if node.show().signature_name {
        signature_name(node)
    } else {
        String::new()
    };
    let annotation = if node.show().signature_annotation {
        Some(pretty_code(&hooks.render_annotation(node, None)?))
    } else {
        None
    };
    let declaration =
        hooks.render_variable_definition(node, &name, annotation.as_deref(), obj.value.as_ref());
    Ok(Some(signature_div(declaration.to_string(), kind)))
}

/// Right hand side of a type alias or type variable declaration
///
/// The annotation of these (`TypeAlias`, or none) says nothing, the
/// declared value is what readers need.
pub(crate) fn render_type_signature(node: &RenderNode<'_>) -> RenderResult<Option<Block>> {
    let (Some(obj), Some(kind)) = (node.obj(), node.kind()) else {
        return Ok(None);
    };
    let declaration = render_attribute_declaration(obj);
    let value = declaration
        .split_once('=')
        .map_or(declaration.as_str(), |(_, value)| value)
        .trim();
    if value.is_empty() {
        return Ok(None);
    }
    Ok(Some(signature_div(pretty_code(value), kind)))
}

fn signature_div(code: String, kind: DocKind) -> Block {
    Div::new(
        Block::Raw(Code::new(code).html()),
        Attr::classes(["doc-signature".to_string(), format!("doc-{}", kind)]),
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Doc, DocObject, Expr};
    use crate::render::Renderer;
    use pretty_assertions::assert_eq;

    fn signature(obj: DocObject) -> String {
        let renderer = Renderer::default();
        let doc = Doc::new(obj.name.clone(), obj);
        let node = RenderNode::for_doc(&renderer, &doc, 1).unwrap();
        node.signature().unwrap().unwrap().to_string()
    }

    #[test]
    fn test_attribute() {
        let obj = DocObject::attribute("pkg.LIMIT")
            .with_annotation(Expr::name("int", "int"))
            .with_value("10");
        assert_eq!(
            signature(obj),
            "::: {.doc-signature .doc-attribute}\n\
             <code>[LIMIT]{.doc-parameter-name}[: ]{.doc-parameter-annotation-sep}\
             [[int](`int`)]{.doc-parameter-annotation}[ = ]{.doc-parameter-default-sep}\
             [10]{.doc-parameter-default}</code>\n\
             :::"
        );
    }

    #[test]
    fn test_type_alias_shows_value() {
        let obj = DocObject::attribute("pkg.Vector")
            .with_annotation(Expr::name("TypeAlias", "typing.TypeAlias"))
            .with_value(Expr::subscript(
                Expr::name("list", "list"),
                Expr::name("float", "float"),
            ))
            .with_lines("Vector: TypeAlias = list[float]");
        assert_eq!(
            signature(obj),
            "::: {.doc-signature .doc-type}\n\
             <code>[list](`list`)[[float](`float`)]</code>\n\
             :::"
        );
    }

    #[test]
    fn test_type_alias_without_value_has_no_signature() {
        let obj = DocObject::attribute("pkg.N")
            .with_annotation(Expr::str("'int | float'"))
            .with_lines("N: 'int | float'");
        let renderer = Renderer::default();
        let doc = Doc::new("N", obj);
        let node = RenderNode::for_doc(&renderer, &doc, 1).unwrap();
        assert_eq!(node.kind(), Some(DocKind::Type));
        assert!(node.signature().unwrap().is_none());
        assert!(!node.to_markdown().unwrap().contains("<code></code>"));
    }

    #[test]
    fn test_typevar() {
        let obj = DocObject::attribute("pkg.T")
            .with_value(Expr::call(
                Expr::name("TypeVar", "typing.TypeVar"),
                vec![Expr::str("'T'")],
            ))
            .with_lines("T = TypeVar('T')");
        let out = signature(obj);
        assert!(out.starts_with("::: {.doc-signature .doc-typevar}"));
        assert!(out.contains("[TypeVar](`typing.TypeVar`)"));
    }
}
