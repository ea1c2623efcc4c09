//! Render nodes
//!
//! A `RenderNode` wraps one layout node for one render pass. Its four
//! fragments (title, signature, description, body) and the values they
//! are derived from are computed on first use and kept for the life of
//! the node, so a summary and a full rendering share the work.

use crate::config::RenderConfig;
use crate::diagnostics::{RenderError, RenderResult};
use crate::model::{ContentItem, Doc, DocObject, Layout, LayoutNode, Link, ObjectKind, Page, Parameter, Section};
use crate::render::class::DataclassParameters;
use crate::render::hooks::RenderHooks;
use crate::render::members::MemberGroup;
use crate::render::Renderer;
use once_cell::unsync::OnceCell;
use qdoc_pandoc::{Attr, Block, Blocks, Div};
use std::fmt;
use tracing::debug;

/// The layout node a `RenderNode` renders
#[derive(Debug, Clone, Copy)]
pub enum NodeTarget<'a> {
    Layout(&'a Layout),
    Page(&'a Page),
    Section(&'a Section),
    Link(&'a Link),
    Doc(&'a Doc),
}

impl<'a> NodeTarget<'a> {
    /// Name of the layout node type, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            NodeTarget::Layout(_) => "Layout",
            NodeTarget::Page(_) => "Page",
            NodeTarget::Section(_) => "Section",
            NodeTarget::Link(_) => "Link",
            NodeTarget::Doc(_) => "Doc",
        }
    }
}

impl<'a> From<&'a LayoutNode> for NodeTarget<'a> {
    fn from(node: &'a LayoutNode) -> Self {
        match node {
            LayoutNode::Layout(layout) => NodeTarget::Layout(layout),
            LayoutNode::Page(page) => NodeTarget::Page(page),
            LayoutNode::Section(section) => NodeTarget::Section(section),
            LayoutNode::Link(link) => NodeTarget::Link(link),
            LayoutNode::Doc(doc) => NodeTarget::Doc(doc),
        }
    }
}

impl<'a> From<&'a ContentItem> for NodeTarget<'a> {
    fn from(item: &'a ContentItem) -> Self {
        match item {
            ContentItem::Link(link) => NodeTarget::Link(link),
            ContentItem::Doc(doc) => NodeTarget::Doc(doc),
            ContentItem::Page(page) => NodeTarget::Page(page),
        }
    }
}

/// Kind of a documented object, refined for rendering
///
/// Functions inside classes are methods; attributes declaring a type
/// alias or a type variable get kinds of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocKind {
    Module,
    Class,
    Function,
    Method,
    Attribute,
    Type,
    TypeVar,
}

impl DocKind {
    /// Refine the kind of an object, `None` for an unresolved alias
    pub fn of(obj: &DocObject) -> Option<Self> {
        let kind = match obj.kind {
            ObjectKind::Module => DocKind::Module,
            ObjectKind::Class => DocKind::Class,
            ObjectKind::Function if obj.parent_kind == Some(ObjectKind::Class) => DocKind::Method,
            ObjectKind::Function => DocKind::Function,
            ObjectKind::Attribute if obj.is_typealias() => DocKind::Type,
            ObjectKind::Attribute if obj.is_typevar() => DocKind::TypeVar,
            ObjectKind::Attribute => DocKind::Attribute,
            ObjectKind::Alias => return None,
        };
        Some(kind)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocKind::Module => "module",
            DocKind::Class => "class",
            DocKind::Function => "function",
            DocKind::Method => "method",
            DocKind::Attribute => "attribute",
            DocKind::Type => "type",
            DocKind::TypeVar => "typevar",
        }
    }

    /// Objects whose signature lists parameters
    pub fn is_callable(&self) -> bool {
        matches!(self, DocKind::Class | DocKind::Function | DocKind::Method)
    }

    /// Attribute-like objects
    pub fn is_attribute(&self) -> bool {
        matches!(self, DocKind::Attribute | DocKind::Type | DocKind::TypeVar)
    }
}

impl fmt::Display for DocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visibility of the parts of one member group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupOptions {
    /// Whether the group is rendered at all
    pub include: bool,
    /// Whether the group has a summary table
    pub summary: bool,
    /// Whether the members are documented in full
    pub body: bool,
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self {
            include: true,
            summary: true,
            body: true,
        }
    }
}

/// What a node shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowOptions {
    pub title: bool,
    pub signature: bool,
    pub description: bool,
    pub body: bool,

    /// Name of the object inside its signature
    pub signature_name: bool,
    /// Type annotations inside the signature, on for attributes only
    pub signature_annotation: bool,

    /// Parts of the title
    pub object_name: bool,
    pub object_symbol: bool,
    pub object_labels: bool,

    /// All member groups
    pub members: bool,
    /// Summary tables of all member groups
    pub members_summary: bool,
    /// Full documentation of all members
    pub members_body: bool,
    pub attributes: GroupOptions,
    pub classes: GroupOptions,
    pub functions: GroupOptions,
}

impl Default for ShowOptions {
    fn default() -> Self {
        Self {
            title: true,
            signature: true,
            description: true,
            body: true,
            signature_name: true,
            signature_annotation: false,
            object_name: true,
            object_symbol: true,
            object_labels: true,
            members: true,
            members_summary: true,
            members_body: true,
            attributes: GroupOptions::default(),
            classes: GroupOptions::default(),
            functions: GroupOptions::default(),
        }
    }
}

impl ShowOptions {
    /// Defaults for an object of the given kind
    pub fn for_kind(config: &RenderConfig, kind: Option<DocKind>) -> Self {
        match kind {
            Some(kind) => Self {
                signature: config.show_signature,
                signature_annotation: kind.is_attribute(),
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    /// Options of one member group
    pub fn group(&self, group: MemberGroup) -> GroupOptions {
        match group {
            MemberGroup::Attributes => self.attributes,
            MemberGroup::Classes => self.classes,
            MemberGroup::Functions => self.functions,
        }
    }
}

/// A row of a summary table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryItem {
    /// Link to the object
    pub name: String,
    /// One line description
    pub description: String,
}

impl SummaryItem {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// One layout node being rendered
pub struct RenderNode<'a> {
    renderer: &'a Renderer,
    target: NodeTarget<'a>,
    level: usize,
    show: ShowOptions,
    page_path: String,

    title: OnceCell<Option<Block>>,
    signature: OnceCell<Option<Block>>,
    description: OnceCell<Option<Block>>,
    body: OnceCell<Option<Block>>,
    summary: OnceCell<Vec<SummaryItem>>,
    kind: OnceCell<Option<DocKind>>,
    parameters: OnceCell<Vec<&'a Parameter>>,
    dataclass: OnceCell<DataclassParameters<'a>>,
}

impl<'a> RenderNode<'a> {
    /// Create a node for `target` with headings at `level`
    ///
    /// Fails for a doc wrapping an unresolved alias, which has no
    /// renderer.
    pub fn new(renderer: &'a Renderer, target: NodeTarget<'a>, level: usize) -> RenderResult<Self> {
        let kind = match target {
            NodeTarget::Doc(doc) => match DocKind::of(&doc.obj) {
                Some(kind) => Some(kind),
                None => return Err(RenderError::unsupported(doc.obj.kind.as_str())),
            },
            _ => None,
        };

        let page_path = match target {
            NodeTarget::Doc(doc) => format!("{}.qmd", doc.obj.name),
            _ => String::new(),
        };

        match target {
            NodeTarget::Doc(doc) => {
                debug!(path = %doc.obj.path, kind = %doc.obj.kind, level, "rendering object")
            }
            NodeTarget::Page(page) => debug!(path = %page.path, level, "rendering page"),
            NodeTarget::Layout(layout) => {
                debug!(package = ?layout.package, sections = layout.sections.len(), "rendering layout")
            }
            NodeTarget::Section(_) | NodeTarget::Link(_) => {}
        }

        let mut node = Self {
            renderer,
            target,
            level,
            show: ShowOptions::for_kind(renderer.config(), kind),
            page_path,
            title: OnceCell::new(),
            signature: OnceCell::new(),
            description: OnceCell::new(),
            body: OnceCell::new(),
            summary: OnceCell::new(),
            kind: OnceCell::with_value(kind),
            parameters: OnceCell::new(),
            dataclass: OnceCell::new(),
        };
        node.show = renderer.hooks().show_options(&node, node.show);
        Ok(node)
    }

    /// Create a node for an object placed in the layout
    pub fn for_doc(renderer: &'a Renderer, doc: &'a Doc, level: usize) -> RenderResult<Self> {
        Self::new(renderer, NodeTarget::Doc(doc), level)
    }

    /// Set the page the object is written to
    pub fn with_page_path(mut self, path: impl Into<String>) -> Self {
        self.page_path = path.into();
        self
    }

    /// Mark the object as documented on its parent's page
    pub fn clear_page_path(self) -> Self {
        self.with_page_path("")
    }

    pub fn renderer(&self) -> &'a Renderer {
        self.renderer
    }

    pub fn config(&self) -> &'a RenderConfig {
        self.renderer.config()
    }

    /// Outermost hook layer, the entry point of every behavior
    pub fn hooks(&self) -> &'a dyn RenderHooks {
        self.renderer.hooks()
    }

    pub fn target(&self) -> NodeTarget<'a> {
        self.target
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn show(&self) -> &ShowOptions {
        &self.show
    }

    pub fn show_mut(&mut self) -> &mut ShowOptions {
        &mut self.show
    }

    pub fn page_path(&self) -> &str {
        &self.page_path
    }

    /// The placed object, for doc nodes
    pub fn doc(&self) -> Option<&'a Doc> {
        match self.target {
            NodeTarget::Doc(doc) => Some(doc),
            _ => None,
        }
    }

    /// The documented object, for doc and link nodes
    pub fn obj(&self) -> Option<&'a DocObject> {
        match self.target {
            NodeTarget::Doc(doc) => Some(&doc.obj),
            NodeTarget::Link(link) => Some(&link.obj),
            _ => None,
        }
    }

    /// Refined kind of the documented object
    pub fn kind(&self) -> Option<DocKind> {
        *self
            .kind
            .get_or_init(|| self.doc().and_then(|doc| DocKind::of(&doc.obj)))
    }

    pub fn title(&self) -> RenderResult<Option<&Block>> {
        self.title
            .get_or_try_init(|| self.hooks().render_title(self))
            .map(Option::as_ref)
    }

    pub fn signature(&self) -> RenderResult<Option<&Block>> {
        self.signature
            .get_or_try_init(|| self.hooks().render_signature(self))
            .map(Option::as_ref)
    }

    pub fn description(&self) -> RenderResult<Option<&Block>> {
        self.description
            .get_or_try_init(|| self.hooks().render_description(self))
            .map(Option::as_ref)
    }

    pub fn body(&self) -> RenderResult<Option<&Block>> {
        self.body
            .get_or_try_init(|| self.hooks().render_body(self))
            .map(Option::as_ref)
    }

    /// Rows this node contributes to a summary table
    pub fn summary(&self) -> RenderResult<&[SummaryItem]> {
        self.summary
            .get_or_try_init(|| self.hooks().render_summary(self))
            .map(Vec::as_slice)
    }

    /// Parameters shown in the signature
    ///
    /// Leaves out the implicit `self`/`cls`, excluded parameters, and for
    /// dataclasses the fields that are not initializer parameters.
    pub fn parameters(&self) -> &[&'a Parameter] {
        self.parameters
            .get_or_init(|| crate::render::call::effective_parameters(self))
    }

    /// Dataclass parameters split by whether they are also attributes
    pub fn dataclass_parameters(&self) -> &DataclassParameters<'a> {
        self.dataclass
            .get_or_init(|| crate::render::class::partition_parameters(self))
    }

    /// The node as a block: title, signature, description and body
    pub fn to_block(&self) -> RenderResult<Block> {
        let mut blocks = Blocks::new();
        if self.show.title {
            blocks.push_opt(self.title()?.cloned());
        }
        if self.show.signature && !matches!(self.target, NodeTarget::Link(_)) {
            blocks.push_opt(self.signature()?.cloned());
        }
        if self.show.description {
            blocks.push_opt(self.description()?.cloned());
        }
        if self.show.body {
            blocks.push_opt(self.body()?.cloned());
        }

        Ok(match self.target {
            NodeTarget::Link(_) => Div::new(blocks, Attr::classes(["doc"])).into(),
            _ => blocks.into(),
        })
    }

    /// The node as quarto markdown
    pub fn to_markdown(&self) -> RenderResult<String> {
        Ok(self.to_block()?.to_string())
    }
}

impl fmt::Debug for RenderNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderNode")
            .field("target", &self.target.type_name())
            .field("level", &self.level)
            .field("page_path", &self.page_path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Expr;

    #[test]
    fn test_refined_kind() {
        let cls = DocObject::class("pkg.A").with_member(DocObject::function("pkg.A.f"));
        assert_eq!(DocKind::of(&cls.members["f"]), Some(DocKind::Method));
        assert_eq!(DocKind::of(&DocObject::function("pkg.f")), Some(DocKind::Function));

        let alias = DocObject::attribute("pkg.N")
            .with_annotation(Expr::name("TypeAlias", "typing.TypeAlias"));
        assert_eq!(DocKind::of(&alias), Some(DocKind::Type));
        assert_eq!(DocKind::of(&DocObject::new(ObjectKind::Alias, "pkg.x")), None);
    }

    #[test]
    fn test_attribute_defaults_show_annotation() {
        let config = RenderConfig::default().with_show_signature(false);
        let show = ShowOptions::for_kind(&config, Some(DocKind::Attribute));
        assert!(show.signature_annotation);
        assert!(!show.signature);
        assert!(!ShowOptions::for_kind(&config, Some(DocKind::Function)).signature_annotation);
    }

    #[test]
    fn test_alias_is_unsupported() {
        let renderer = Renderer::default();
        let doc = Doc::new("x", DocObject::new(ObjectKind::Alias, "pkg.x"));
        let err = RenderNode::for_doc(&renderer, &doc, 1).unwrap_err();
        assert_eq!(err.to_string(), "Cannot document object of type alias");
    }

    #[test]
    fn test_doc_accessor() {
        let renderer = Renderer::default();
        let doc = Doc::new("f", DocObject::function("pkg.f"));
        let node = RenderNode::for_doc(&renderer, &doc, 1).unwrap();
        assert_eq!(node.doc().map(|d| d.anchor.as_str()), Some("pkg.f"));

        let page = Page::new("f").with_doc(doc.clone());
        let page_node = RenderNode::new(&renderer, NodeTarget::Page(&page), 1).unwrap();
        assert!(page_node.doc().is_none());
        assert_eq!(page_node.summary().unwrap()[0].name, "[f](f.qmd#pkg.f)");
    }

    #[test]
    fn test_page_path() {
        let renderer = Renderer::default();
        let doc = Doc::new("f", DocObject::function("pkg.f"));
        let node = RenderNode::for_doc(&renderer, &doc, 1).unwrap();
        assert_eq!(node.page_path(), "f.qmd");
        assert_eq!(node.clear_page_path().page_path(), "");
    }
}
