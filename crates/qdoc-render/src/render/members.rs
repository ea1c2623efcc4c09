//! Member groups
//!
//! Modules and classes list their members in three groups: attributes,
//! classes and functions. Each group has a heading, a summary table and
//! the full documentation of every member, all on the parent's page.

use crate::diagnostics::RenderResult;
use crate::exclude::ExclusionKind;
use crate::format::slug;
use crate::model::Doc;
use crate::render::doc::docstring_sections;
use crate::render::node::{DocKind, RenderNode};
use qdoc_pandoc::{Attr, Block, Blocks, Div, GridTable, Header};
use std::fmt;
use tracing::trace;

/// A group of members of the same kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberGroup {
    Attributes,
    Classes,
    Functions,
}

impl MemberGroup {
    /// All groups, in rendering order
    pub const ALL: [MemberGroup; 3] = [
        MemberGroup::Attributes,
        MemberGroup::Classes,
        MemberGroup::Functions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MemberGroup::Attributes => "attributes",
            MemberGroup::Classes => "classes",
            MemberGroup::Functions => "functions",
        }
    }

    /// Exclusions that hide members of this group
    pub fn exclusion_kind(&self) -> ExclusionKind {
        match self {
            MemberGroup::Attributes => ExclusionKind::Attributes,
            MemberGroup::Classes => ExclusionKind::Classes,
            MemberGroup::Functions => ExclusionKind::Functions,
        }
    }

    /// Whether an object of the given kind belongs to the group
    pub fn contains(&self, kind: DocKind) -> bool {
        match self {
            MemberGroup::Attributes => kind.is_attribute(),
            MemberGroup::Classes => kind == DocKind::Class,
            MemberGroup::Functions => matches!(kind, DocKind::Function | DocKind::Method),
        }
    }

    /// Heading of the group, functions of a class are "Methods"
    pub fn title(&self, in_class: bool) -> &'static str {
        match self {
            MemberGroup::Attributes => "Attributes",
            MemberGroup::Classes => "Classes",
            MemberGroup::Functions if in_class => "Methods",
            MemberGroup::Functions => "Functions",
        }
    }
}

impl fmt::Display for MemberGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Docstring sections followed by the member groups
pub(crate) fn render_body(node: &RenderNode<'_>) -> RenderResult<Option<Block>> {
    let mut body: Blocks = docstring_sections(node)?
        .into_iter()
        .map(|(_, block)| block)
        .collect();
    for block in node.hooks().render_members(node)? {
        body.push(block);
    }
    if body.is_empty() {
        Ok(None)
    } else {
        Ok(Some(body.into()))
    }
}

pub(crate) fn render_members(node: &RenderNode<'_>) -> RenderResult<Vec<Block>> {
    let show = node.show();
    if !show.members {
        return Ok(vec![]);
    }
    let mut blocks = Vec::new();
    for group in MemberGroup::ALL {
        if !show.group(group).include {
            continue;
        }
        if let Some(block) = node.hooks().render_member_group(node, group)? {
            blocks.push(block);
        }
    }
    Ok(blocks)
}

/// Members of the node's object that belong to the group
///
/// Leaves out excluded members, and for dataclasses the attributes
/// already documented as parameter attributes.
fn group_members<'a>(node: &RenderNode<'a>, group: MemberGroup) -> Vec<&'a Doc> {
    let Some(doc) = node.doc() else {
        return vec![];
    };
    let excluded = node
        .config()
        .exclude
        .excluded(group.exclusion_kind(), &doc.obj.path);

    doc.members
        .iter()
        .filter(|member| DocKind::of(&member.obj).is_some_and(|kind| group.contains(kind)))
        .filter(|member| {
            let hidden = excluded.is_some_and(|names| names.contains(&member.obj.name));
            if hidden {
                trace!(parent = %doc.obj.path, member = %member.obj.name, %group, "member excluded");
            }
            !hidden
        })
        .filter(|member| {
            group != MemberGroup::Attributes
                || !node.dataclass_parameters().has_attribute(&member.obj.name)
        })
        .collect()
}

/// Heading, summary table and member documentation of one group
///
/// An empty group renders nothing.
pub(crate) fn render_member_group(
    node: &RenderNode<'_>,
    group: MemberGroup,
) -> RenderResult<Option<Block>> {
    let members = group_members(node, group);
    if members.is_empty() {
        return Ok(None);
    }

    let show = node.show();
    let options = show.group(group);
    let title = group.title(node.kind() == Some(DocKind::Class));

    let mut blocks = Blocks::new();
    blocks.push(Header::new(
        node.level() + 1,
        title,
        Attr::classes([format!("doc-{}", slug(title))]),
    ));

    let member_nodes = members
        .into_iter()
        .map(|member| {
            RenderNode::for_doc(node.renderer(), member, node.level() + 2)
                .map(RenderNode::clear_page_path)
        })
        .collect::<RenderResult<Vec<_>>>()?;

    if show.members_summary && options.summary {
        let mut table = GridTable::with_headers(vec!["Name", "Description"]);
        for member in &member_nodes {
            for item in member.summary()? {
                table.add_row(vec![item.name.as_str(), item.description.as_str()]);
            }
        }
        blocks.push(Div::new(table, Attr::classes(["doc-summary-table"])));
    }

    if show.members_body && options.body {
        let mut bodies = Blocks::new();
        for member in &member_nodes {
            bodies.push(member.to_block()?);
        }
        blocks.push(Div::new(bodies, Attr::classes(["doc-member-docs"])));
    }

    Ok(Some(blocks.into()))
}
