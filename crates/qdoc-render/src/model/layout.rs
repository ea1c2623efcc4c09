//! Layout tree
//!
//! The page planner decides which objects appear on which page and in
//! which section. Its decisions arrive as this tree.

use crate::model::object::{DocObject, ObjectKind};
use serde::{Deserialize, Serialize};

/// Any node of the layout tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutNode {
    Layout(Layout),
    Page(Page),
    Section(Section),
    Link(Link),
    Doc(Doc),
}

impl LayoutNode {
    /// Name of the variant, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            LayoutNode::Layout(_) => "Layout",
            LayoutNode::Page(_) => "Page",
            LayoutNode::Section(_) => "Section",
            LayoutNode::Link(_) => "Link",
            LayoutNode::Doc(_) => "Doc",
        }
    }
}

/// The whole reference index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default)]
    pub sections: Vec<Section>,

    /// Package being documented
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub package: Option<String>,
}

/// A titled group of items on the index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub subtitle: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub desc: Option<String>,

    #[serde(default)]
    pub contents: Vec<ContentItem>,
}

impl Section {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_content(mut self, item: impl Into<ContentItem>) -> Self {
        self.contents.push(item.into());
        self
    }
}

/// An entry of a section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentItem {
    Link(Link),
    Doc(Doc),
    Page(Page),
}

impl From<Link> for ContentItem {
    fn from(link: Link) -> Self {
        ContentItem::Link(link)
    }
}

impl From<Doc> for ContentItem {
    fn from(doc: Doc) -> Self {
        ContentItem::Doc(doc)
    }
}

impl From<Page> for ContentItem {
    fn from(page: Page) -> Self {
        ContentItem::Page(page)
    }
}

/// One output page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page path without extension
    pub path: String,

    #[serde(default)]
    pub contents: Vec<Doc>,
}

impl Page {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: vec![],
        }
    }

    pub fn with_doc(mut self, doc: Doc) -> Self {
        self.contents.push(doc);
        self
    }
}

/// Reference to an object documented elsewhere
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub name: String,
    pub obj: DocObject,
}

/// A documentable object placed in the layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doc {
    /// Name as written in the layout configuration
    pub name: String,

    /// Anchor of the object's heading
    pub anchor: String,

    /// Explicit display name, used when aggregating namespace packages
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub display_name: Option<String>,

    pub obj: DocObject,

    /// Member docs, in declaration order
    #[serde(default)]
    pub members: Vec<Doc>,
}

impl Doc {
    /// Place an object, anchored at its path
    pub fn new(name: impl Into<String>, obj: DocObject) -> Self {
        Self {
            name: name.into(),
            anchor: obj.path.clone(),
            display_name: None,
            obj,
            members: vec![],
        }
    }

    /// Place an object and, recursively, all of its members
    ///
    /// Alias members (imported names) are skipped.
    pub fn from_object(obj: DocObject) -> Self {
        let members = obj
            .members
            .values()
            .filter(|m| m.kind != ObjectKind::Alias)
            .cloned()
            .map(Doc::from_object)
            .collect();
        let mut doc = Doc::new(obj.name.clone(), obj);
        doc.members = members;
        doc
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_member(mut self, member: Doc) -> Self {
        self.members.push(member);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_object_skips_aliases() {
        let module = DocObject::module("pkg")
            .with_member(DocObject::function("pkg.f"))
            .with_member(DocObject::new(ObjectKind::Alias, "pkg.Path"))
            .with_member(DocObject::class("pkg.A").with_member(DocObject::function("pkg.A.m")));
        let doc = Doc::from_object(module);
        let names: Vec<&str> = doc.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["f", "A"]);
        assert_eq!(doc.members[1].members[0].anchor, "pkg.A.m");
    }

    #[test]
    fn test_deserialize_layout_node() {
        let node: LayoutNode = serde_json::from_str(
            r#"{"kind": "section", "title": "API", "contents": [
                {"kind": "link", "name": "pkg.f",
                 "obj": {"name": "f", "kind": "function", "path": "pkg.f"}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(node.type_name(), "Section");
    }
}
