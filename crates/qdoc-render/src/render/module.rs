//! Modules

use crate::render::node::RenderNode;
use qdoc_pandoc::{Attr, Block, Code, Div};

/// The module's display name, for namespace packages aggregated under
/// one page
///
/// Plain modules have no signature.
pub(crate) fn render_signature(node: &RenderNode<'_>) -> Option<Block> {
    let display_name = node.doc()?.display_name.as_deref()?;
    Some(
        Div::new(
            Block::Raw(Code::new(display_name).html()),
            Attr::classes(["doc-signature", "doc-module"]),
        )
        .into(),
    )
}
