//! Layout structure
//!
//! The layout, its sections, pages and links. These make up the API
//! index: sections with summary tables linking to the object pages.

use crate::diagnostics::RenderResult;
use crate::format::markdown_escape;
use crate::model::{Layout, Link, Page, Section};
use crate::render::node::{NodeTarget, RenderNode, SummaryItem};
use qdoc_pandoc::{interlink, Attr, Block, Blocks, Div, GridTable, Header};

/// Heading of a section from its title, or else its subtitle
pub(crate) fn section_title(node: &RenderNode<'_>, section: &Section) -> Option<Block> {
    if let Some(title) = &section.title {
        return Some(Header::new(node.level() + 1, title.as_str(), Attr::classes(["doc-summary"])).into());
    }
    section.subtitle.as_ref().map(|subtitle| {
        Header::new(
            node.level() + 2,
            subtitle.as_str(),
            Attr::classes(["doc-summary-subgroup"]),
        )
        .into()
    })
}

pub(crate) fn section_description(section: &Section) -> Option<Block> {
    section.desc.clone().map(Block::Raw)
}

/// Summary table of the section contents
pub(crate) fn section_body(node: &RenderNode<'_>, section: &Section) -> RenderResult<Option<Block>> {
    if section.contents.is_empty() {
        return Ok(None);
    }
    let mut table = GridTable::headless();
    for item in &section.contents {
        let item_node = RenderNode::new(node.renderer(), NodeTarget::from(item), node.level())?;
        for row in item_node.summary()? {
            table.add_row(vec![row.name.as_str(), row.description.as_str()]);
        }
    }
    Ok(Some(
        Div::new(table, Attr::classes(["doc-summary-table"])).into(),
    ))
}

/// All sections, at the level of the layout
pub(crate) fn layout_body(node: &RenderNode<'_>, layout: &Layout) -> RenderResult<Option<Block>> {
    let mut blocks = Blocks::new();
    for section in &layout.sections {
        let section_node = RenderNode::new(node.renderer(), NodeTarget::Section(section), node.level())?;
        blocks.push(section_node.to_block()?);
    }
    Ok(Some(blocks.into()))
}

fn page_nodes<'a>(node: &RenderNode<'a>, page: &'a Page) -> RenderResult<Vec<RenderNode<'a>>> {
    let path = format!("{}.qmd", page.path);
    page.contents
        .iter()
        .map(|doc| {
            RenderNode::for_doc(node.renderer(), doc, node.level()).map(|n| n.with_page_path(path.clone()))
        })
        .collect()
}

/// Every object of the page in full
pub(crate) fn page_body<'a>(node: &RenderNode<'a>, page: &'a Page) -> RenderResult<Option<Block>> {
    let mut blocks = Blocks::new();
    for doc_node in page_nodes(node, page)? {
        blocks.push(doc_node.to_block()?);
    }
    Ok(Some(blocks.into()))
}

/// Summary rows of every object of the page, linking into the page
pub(crate) fn page_summary<'a>(
    node: &RenderNode<'a>,
    page: &'a Page,
) -> RenderResult<Vec<SummaryItem>> {
    let mut rows = Vec::new();
    for doc_node in page_nodes(node, page)? {
        rows.extend_from_slice(doc_node.summary()?);
    }
    Ok(rows)
}

/// Interlink to an object documented elsewhere
pub(crate) fn link_summary(link: &Link) -> SummaryItem {
    SummaryItem::new(
        interlink(None, &markdown_escape(&link.name)).to_string(),
        link.obj.describe(),
    )
}
