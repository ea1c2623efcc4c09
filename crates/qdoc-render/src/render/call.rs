//! Callables
//!
//! Signatures of functions, methods and classes (through their
//! initializer).

use crate::diagnostics::RenderResult;
use crate::exclude::ExclusionKind;
use crate::model::{ObjectKind, Parameter};
use crate::render::doc::signature_name;
use crate::render::node::RenderNode;
use crate::signature::{separated_parameters, signature_parameter};
use qdoc_pandoc::{Attr, Block, CodeBlock, Div};
use tracing::trace;

/// Parameters shown in the signature of the node's object
pub(crate) fn effective_parameters<'a>(node: &RenderNode<'a>) -> Vec<&'a Parameter> {
    let Some(obj) = node.doc().map(|doc| &doc.obj) else {
        return vec![];
    };
    let mut parameters: Vec<&'a Parameter> = obj.parameters.iter().collect();

    let omit_first = match (parameters.first(), obj.parent_kind) {
        (Some(first), Some(ObjectKind::Class)) => first.name == "self" || first.name == "cls",
        (Some(first), Some(ObjectKind::Module) | None) => obj.is_class() && first.name == "self",
        _ => false,
    };
    if omit_first {
        parameters.remove(0);
    }

    if let Some(excluded) = node
        .config()
        .exclude
        .excluded(ExclusionKind::Parameters, &obj.path)
    {
        trace!(path = %obj.path, ?excluded, "excluding parameters");
        parameters.retain(|p| !excluded.contains(&p.name));
    }

    if obj.is_dataclass() {
        parameters.retain(|p| !p.is_field_init_false() && p.annotation.is_some());
    }
    parameters
}

/// Signature in a python code block
pub(crate) fn render_signature(node: &RenderNode<'_>) -> RenderResult<Option<Block>> {
    let Some(kind) = node.kind() else {
        return Ok(None);
    };
    let name = if node.show().signature_name {
        signature_name(node)
    } else {
        String::new()
    };
    let params = node.hooks().render_signature_parameters(node)?;
    let sig = node.hooks().format_signature(node, &name, &params);
    Ok(Some(
        Div::new(
            CodeBlock::new(sig, Attr::classes(["python"])),
            Attr::classes(["doc-signature".to_string(), format!("doc-{}", kind)]),
        )
        .into(),
    ))
}

pub(crate) fn render_signature_parameters(node: &RenderNode<'_>) -> Vec<String> {
    let hooks = node.hooks();
    separated_parameters(node.parameters().iter().copied(), |param| {
        hooks.render_signature_parameter(node, param)
    })
}

pub(crate) fn render_signature_parameter(node: &RenderNode<'_>, param: &Parameter) -> String {
    signature_parameter(param, node.show().signature_annotation)
}
