//! Extension hooks
//!
//! Every rendering behavior is a method of [`RenderHooks`]. Hosts change a
//! behavior by adding a layer that implements the methods it cares about
//! and hands everything else to the layer below it:
//!
//! ```
//! use qdoc_render::render::{RenderHooks, RenderNode};
//! use qdoc_render::{Renderer, RenderResult};
//! use qdoc_pandoc::Block;
//!
//! struct Shout {
//!     parent: Box<dyn RenderHooks>,
//! }
//!
//! impl RenderHooks for Shout {
//!     fn parent(&self) -> Option<&dyn RenderHooks> {
//!         Some(self.parent.as_ref())
//!     }
//!
//!     fn render_description(&self, node: &RenderNode<'_>) -> RenderResult<Option<Block>> {
//!         let text = self.parent.render_description(node)?;
//!         Ok(text.map(|block| Block::Raw(block.to_string().to_uppercase())))
//!     }
//! }
//!
//! let renderer = Renderer::builder()
//!     .layer(|parent| Box::new(Shout { parent }))
//!     .build();
//! ```
//!
//! The built-in behaviors call back into the outermost layer, so an
//! override of a small step (say `render_section`) is used by every
//! fragment built from it.

use crate::config::NameFormat;
use crate::diagnostics::RenderResult;
use crate::model::{Definition, DocstringSection, Expr, Parameter, SectionKind};
use crate::render::builtin;
use crate::render::members::MemberGroup;
use crate::render::node::{RenderNode, ShowOptions, SummaryItem};
use qdoc_pandoc::{Block, DefinitionItem, Inline, Inlines};
use std::collections::HashMap;

/// Overridable rendering behaviors
///
/// Each method defaults to the parent layer when there is one, and to
/// the built-in behavior otherwise.
pub trait RenderHooks {
    /// The layer below this one
    fn parent(&self) -> Option<&dyn RenderHooks> {
        None
    }

    /// Adjust what a node shows, called once when the node is created
    fn show_options(&self, node: &RenderNode<'_>, options: ShowOptions) -> ShowOptions {
        match self.parent() {
            Some(parent) => parent.show_options(node, options),
            None => options,
        }
    }

    /// Heading of an object or of a layout section
    fn render_title(&self, node: &RenderNode<'_>) -> RenderResult<Option<Block>> {
        match self.parent() {
            Some(parent) => parent.render_title(node),
            None => builtin::render_title(node),
        }
    }

    /// Labels shown in the heading, e.g. "property"
    fn labels(&self, node: &RenderNode<'_>) -> Vec<String> {
        match self.parent() {
            Some(parent) => parent.labels(node),
            None => builtin::labels(node),
        }
    }

    /// Label markers of the heading
    fn render_labels(&self, node: &RenderNode<'_>) -> Option<Inline> {
        match self.parent() {
            Some(parent) => parent.render_labels(node),
            None => builtin::render_labels(node),
        }
    }

    /// Name of the object in the given format
    fn format_name(&self, node: &RenderNode<'_>, format: NameFormat) -> String {
        match self.parent() {
            Some(parent) => parent.format_name(node, format),
            None => builtin::format_name(node, format),
        }
    }

    fn render_signature(&self, node: &RenderNode<'_>) -> RenderResult<Option<Block>> {
        match self.parent() {
            Some(parent) => parent.render_signature(node),
            None => builtin::render_signature(node),
        }
    }

    /// Parameters of a callable's signature, with separators
    fn render_signature_parameters(&self, node: &RenderNode<'_>) -> RenderResult<Vec<String>> {
        match self.parent() {
            Some(parent) => parent.render_signature_parameters(node),
            None => builtin::render_signature_parameters(node),
        }
    }

    /// A single parameter of a signature
    fn render_signature_parameter(&self, node: &RenderNode<'_>, param: &Parameter) -> String {
        match self.parent() {
            Some(parent) => parent.render_signature_parameter(node, param),
            None => builtin::render_signature_parameter(node, param),
        }
    }

    /// Lay out a callable's name and parameters
    fn format_signature(&self, node: &RenderNode<'_>, name: &str, params: &[String]) -> String {
        match self.parent() {
            Some(parent) => parent.format_signature(node, name, params),
            None => crate::signature::format_signature(name, params),
        }
    }

    fn render_description(&self, node: &RenderNode<'_>) -> RenderResult<Option<Block>> {
        match self.parent() {
            Some(parent) => parent.render_description(node),
            None => builtin::render_description(node),
        }
    }

    fn render_body(&self, node: &RenderNode<'_>) -> RenderResult<Option<Block>> {
        match self.parent() {
            Some(parent) => parent.render_body(node),
            None => builtin::render_body(node),
        }
    }

    /// Content of one docstring section, without its heading
    fn render_section(
        &self,
        node: &RenderNode<'_>,
        section: &DocstringSection,
    ) -> RenderResult<Option<Block>> {
        match self.parent() {
            Some(parent) => parent.render_section(node, section),
            None => builtin::render_section(node, section),
        }
    }

    /// One item of a definition-list section
    fn render_definition_item(
        &self,
        node: &RenderNode<'_>,
        kind: SectionKind,
        item: &Definition,
    ) -> RenderResult<DefinitionItem> {
        match self.parent() {
            Some(parent) => parent.render_definition_item(node, kind, item),
            None => builtin::render_definition_item(node, kind, item),
        }
    }

    /// Member groups of a module or class
    fn render_members(&self, node: &RenderNode<'_>) -> RenderResult<Vec<Block>> {
        match self.parent() {
            Some(parent) => parent.render_members(node),
            None => builtin::render_members(node),
        }
    }

    fn render_member_group(
        &self,
        node: &RenderNode<'_>,
        group: MemberGroup,
    ) -> RenderResult<Option<Block>> {
        match self.parent() {
            Some(parent) => parent.render_member_group(node, group),
            None => builtin::render_member_group(node, group),
        }
    }

    /// An annotation with its names interlinked
    ///
    /// Without an annotation, renders the annotation of the node's own
    /// object, which must be an attribute.
    fn render_annotation(
        &self,
        node: &RenderNode<'_>,
        annotation: Option<&Expr>,
    ) -> RenderResult<String> {
        match self.parent() {
            Some(parent) => parent.render_annotation(node, annotation),
            None => builtin::render_annotation(node, annotation),
        }
    }

    /// Declaration `name: annotation = default` of a variable or parameter
    fn render_variable_definition(
        &self,
        node: &RenderNode<'_>,
        name: &str,
        annotation: Option<&str>,
        default: Option<&Expr>,
    ) -> Inlines {
        match self.parent() {
            Some(parent) => parent.render_variable_definition(node, name, annotation, default),
            None => builtin::render_variable_definition(name, annotation, default),
        }
    }

    /// Rows of summary tables
    fn render_summary(&self, node: &RenderNode<'_>) -> RenderResult<Vec<SummaryItem>> {
        match self.parent() {
            Some(parent) => parent.render_summary(node),
            None => builtin::render_summary(node),
        }
    }
}

/// The bottom layer, all built-in behavior
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHooks;

impl RenderHooks for DefaultHooks {}

/// Renders the content of one kind of docstring section
pub trait SectionHandler {
    fn render(&self, node: &RenderNode<'_>, section: &DocstringSection)
        -> RenderResult<Option<Block>>;
}

impl<F> SectionHandler for F
where
    F: Fn(&RenderNode<'_>, &DocstringSection) -> RenderResult<Option<Block>>,
{
    fn render(
        &self,
        node: &RenderNode<'_>,
        section: &DocstringSection,
    ) -> RenderResult<Option<Block>> {
        self(node, section)
    }
}

/// Section handlers by section kind
///
/// A registered handler replaces the built-in rendering of its kind.
#[derive(Default)]
pub struct SectionHandlers {
    handlers: HashMap<SectionKind, Box<dyn SectionHandler>>,
}

impl SectionHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler, replacing any previous one for the kind
    pub fn register(&mut self, kind: SectionKind, handler: Box<dyn SectionHandler>) {
        self.handlers.insert(kind, handler);
    }

    pub fn get(&self, kind: SectionKind) -> Option<&dyn SectionHandler> {
        self.handlers.get(&kind).map(|handler| handler.as_ref())
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for SectionHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}
