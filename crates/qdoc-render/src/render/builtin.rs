//! Built-in behaviors
//!
//! The bottom of every hook chain. Each function picks the renderer for
//! the node's target and kind; the match is exhaustive so a new layout
//! node or object kind cannot be forgotten.

use crate::config::NameFormat;
use crate::diagnostics::RenderResult;
use crate::model::{Definition, DocstringSection, Expr, Parameter, SectionKind};
use crate::render::members::MemberGroup;
use crate::render::node::{DocKind, NodeTarget, RenderNode, SummaryItem};
use crate::render::{attribute, call, class, doc, members, module, sections, structure};
use qdoc_pandoc::{Block, DefinitionItem, Inline, Inlines};

pub(crate) fn render_title(node: &RenderNode<'_>) -> RenderResult<Option<Block>> {
    match node.target() {
        NodeTarget::Doc(_) => doc::render_title(node).map(Some),
        NodeTarget::Section(section) => Ok(structure::section_title(node, section)),
        NodeTarget::Layout(_) | NodeTarget::Page(_) | NodeTarget::Link(_) => Ok(None),
    }
}

pub(crate) fn labels(node: &RenderNode<'_>) -> Vec<String> {
    doc::labels(node)
}

pub(crate) fn render_labels(node: &RenderNode<'_>) -> Option<Inline> {
    doc::render_labels(node)
}

pub(crate) fn format_name(node: &RenderNode<'_>, format: NameFormat) -> String {
    doc::format_name(node, format)
}

pub(crate) fn render_signature(node: &RenderNode<'_>) -> RenderResult<Option<Block>> {
    let Some(kind) = node.kind() else {
        return Ok(None);
    };
    match kind {
        DocKind::Class | DocKind::Function | DocKind::Method => call::render_signature(node),
        DocKind::Attribute => attribute::render_signature(node),
        DocKind::Type | DocKind::TypeVar => attribute::render_type_signature(node),
        DocKind::Module => Ok(module::render_signature(node)),
    }
}

pub(crate) fn render_signature_parameters(node: &RenderNode<'_>) -> RenderResult<Vec<String>> {
    Ok(call::render_signature_parameters(node))
}

pub(crate) fn render_signature_parameter(node: &RenderNode<'_>, param: &Parameter) -> String {
    call::render_signature_parameter(node, param)
}

pub(crate) fn render_description(node: &RenderNode<'_>) -> RenderResult<Option<Block>> {
    match node.target() {
        NodeTarget::Section(section) => Ok(structure::section_description(section)),
        NodeTarget::Layout(_) | NodeTarget::Page(_) | NodeTarget::Link(_) | NodeTarget::Doc(_) => {
            Ok(None)
        }
    }
}

pub(crate) fn render_body(node: &RenderNode<'_>) -> RenderResult<Option<Block>> {
    match node.target() {
        NodeTarget::Layout(layout) => structure::layout_body(node, layout),
        NodeTarget::Page(page) => structure::page_body(node, page),
        NodeTarget::Section(section) => structure::section_body(node, section),
        NodeTarget::Link(_) => Ok(None),
        NodeTarget::Doc(_) => match node.kind() {
            Some(DocKind::Class) => class::render_body(node),
            Some(DocKind::Module) => members::render_body(node),
            Some(_) | None => doc::render_body(node),
        },
    }
}

pub(crate) fn render_section(
    node: &RenderNode<'_>,
    section: &DocstringSection,
) -> RenderResult<Option<Block>> {
    if let Some(handler) = node.renderer().section_handlers().get(section.kind()) {
        return handler.render(node, section);
    }
    sections::render_section(node, section)
}

pub(crate) fn render_definition_item(
    node: &RenderNode<'_>,
    kind: SectionKind,
    item: &Definition,
) -> RenderResult<DefinitionItem> {
    sections::render_definition_item(node, kind, item)
}

pub(crate) fn render_members(node: &RenderNode<'_>) -> RenderResult<Vec<Block>> {
    members::render_members(node)
}

pub(crate) fn render_member_group(
    node: &RenderNode<'_>,
    group: MemberGroup,
) -> RenderResult<Option<Block>> {
    members::render_member_group(node, group)
}

pub(crate) fn render_annotation(
    node: &RenderNode<'_>,
    annotation: Option<&Expr>,
) -> RenderResult<String> {
    doc::render_annotation(node, annotation)
}

pub(crate) fn render_variable_definition(
    name: &str,
    annotation: Option<&str>,
    default: Option<&Expr>,
) -> Inlines {
    doc::render_variable_definition(name, annotation, default)
}

pub(crate) fn render_summary(node: &RenderNode<'_>) -> RenderResult<Vec<SummaryItem>> {
    match node.target() {
        NodeTarget::Doc(target) => Ok(vec![doc::render_summary(node, target)]),
        NodeTarget::Link(link) => Ok(vec![structure::link_summary(link)]),
        NodeTarget::Page(page) => structure::page_summary(node, page),
        NodeTarget::Layout(_) | NodeTarget::Section(_) => Ok(vec![]),
    }
}
