//! Docstring section content
//!
//! Renders what goes under a section heading. The heading itself is
//! added by the body renderer.

use crate::diagnostics::RenderResult;
use crate::exclude::ExclusionKind;
use crate::format::{format_see_also, pretty_code};
use crate::model::{Definition, DocstringSection, ExampleItem, SectionContent, SectionKind};
use crate::render::node::RenderNode;
use qdoc_pandoc::{Attr, Block, Blocks, Code, CodeBlock, DefinitionItem, DefinitionList, Div, Inlines, Span};
use tracing::trace;

/// Prompt that marks interactive example code
const DOCTEST_PROMPT: &str = ">>>";

pub(crate) fn render_section(
    node: &RenderNode<'_>,
    section: &DocstringSection,
) -> RenderResult<Option<Block>> {
    let block = match &section.content {
        SectionContent::Text(text) => text_block(text),
        SectionContent::Parameters(items)
        | SectionContent::OtherParameters(items)
        | SectionContent::Returns(items)
        | SectionContent::Yields(items)
        | SectionContent::Receives(items)
        | SectionContent::Raises(items)
        | SectionContent::Warns(items)
        | SectionContent::Attributes(items) => {
            definition_items(node, section.kind(), items)?.into()
        }
        SectionContent::Examples(items) => items
            .iter()
            .map(|item| match item {
                ExampleItem::Code(code) => python_code_block(code),
                ExampleItem::Text(text) => text_block(text),
            })
            .collect::<Blocks>()
            .into(),
        SectionContent::Deprecated(deprecation) => {
            let mut content = Inlines::new();
            content.push(Span::new(
                format!("Deprecated since version {}:", deprecation.version),
                Attr::classes(["versionmodified", "deprecated"]),
            ));
            content.push(" ");
            content.push(deprecation.description.trim());
            Div::new(Block::Raw(content.to_string()), Attr::classes(["doc-deprecated"])).into()
        }
        SectionContent::Admonition(admonition) => Block::Raw(admonition.description.clone()),
        SectionContent::SeeAlso(text) => see_also(text).into(),
    };
    Ok(Some(block))
}

/// Plain text, or a code block when the text is an interactive example
fn text_block(text: &str) -> Block {
    if text.trim_start().starts_with(DOCTEST_PROMPT) {
        python_code_block(text)
    } else {
        Block::Raw(text.to_string())
    }
}

fn python_code_block(code: &str) -> Block {
    CodeBlock::new(code, Attr::classes(["python"])).into()
}

/// Definition list of the names in a "See Also" section
fn see_also(text: &str) -> DefinitionList {
    let items = format_see_also(text)
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| match line.split_once(':') {
            Some((term, description)) => DefinitionItem::new(term, description),
            None => DefinitionItem::new(line, ""),
        })
        .collect();
    DefinitionList::new(items)
}

/// Definition list of a parameters-like section
///
/// Parameters excluded from the object's signature are left out of its
/// Parameters section too.
fn definition_items(
    node: &RenderNode<'_>,
    kind: SectionKind,
    items: &[Definition],
) -> RenderResult<Div> {
    let excluded = match (kind, node.obj()) {
        (SectionKind::Parameters, Some(obj)) => node
            .config()
            .exclude
            .excluded(ExclusionKind::Parameters, &obj.path),
        _ => None,
    };

    let mut rendered = Vec::with_capacity(items.len());
    for item in items {
        if excluded.is_some_and(|names| names.contains(item.name.trim_start_matches('*'))) {
            trace!(name = %item.name, "parameter excluded from docstring");
            continue;
        }
        rendered.push(node.hooks().render_definition_item(node, kind, item)?);
    }
    Ok(Div::new(
        DefinitionList::new(rendered),
        Attr::classes(["doc-definition-items"]),
    ))
}

/// `name: annotation = default` in HTML code, then the description
///
/// The declaration is HTML rather than markdown code so pandoc still
/// processes the interlinks inside it.
pub(crate) fn render_definition_item(
    node: &RenderNode<'_>,
    kind: SectionKind,
    item: &Definition,
) -> RenderResult<DefinitionItem> {
    let annotation = match &item.annotation {
        Some(annotation) => Some(pretty_code(
            &node.hooks().render_annotation(node, Some(annotation))?,
        )),
        None => None,
    };

    let default = if is_variadic(node, kind, &item.name) {
        None
    } else {
        item.default.as_ref()
    };

    let term = node
        .hooks()
        .render_variable_definition(node, &item.name, annotation.as_deref(), default);
    Ok(DefinitionItem::new(
        Code::new(term.to_string()).html(),
        item.description.as_str(),
    ))
}

/// Whether a documented parameter is `*args` or `**kwargs`
///
/// Defaults recorded for them are artifacts, not real defaults.
fn is_variadic(node: &RenderNode<'_>, kind: SectionKind, name: &str) -> bool {
    if name.starts_with('*') {
        return true;
    }
    if !matches!(kind, SectionKind::Parameters | SectionKind::OtherParameters) {
        return false;
    }
    node.obj()
        .and_then(|obj| obj.parameters.iter().find(|p| p.name == name))
        .is_some_and(|p| p.is_variadic())
}
