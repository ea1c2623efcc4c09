//! Rendering of layout nodes to quarto markdown
//!
//! A [`Renderer`] holds the configuration, the hook layers and the
//! section handlers for a build. Each call renders one layout node with
//! a fresh [`RenderNode`], so nothing is shared between pages.
//!
//! # Example
//!
//! ```
//! use qdoc_render::model::{Doc, DocObject, Docstring, Page};
//! use qdoc_render::{RenderConfig, Renderer};
//!
//! let page = Page::new("area").with_doc(Doc::new(
//!     "area",
//!     DocObject::function("shapes.area").with_docstring(Docstring::text("Compute the area")),
//! ));
//!
//! let renderer = Renderer::new(RenderConfig::default());
//! let markdown = renderer.render(&page).unwrap();
//! assert!(markdown.contains("{#shapes.area .title"));
//! ```

pub mod hooks;
pub mod members;
pub mod node;

mod attribute;
mod builtin;
mod call;
mod class;
mod doc;
mod module;
mod sections;
mod structure;

pub use class::DataclassParameters;
pub use hooks::{DefaultHooks, RenderHooks, SectionHandler, SectionHandlers};
pub use members::MemberGroup;
pub use node::{DocKind, GroupOptions, NodeTarget, RenderNode, ShowOptions, SummaryItem};

use crate::config::RenderConfig;
use crate::diagnostics::RenderResult;
use crate::model::{Doc, DocObject, DocstringSection, Layout, LayoutNode, Page, SectionKind};
use qdoc_pandoc::Block;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Renders layout nodes with one configuration and set of hooks
pub struct Renderer {
    config: RenderConfig,
    hooks: Box<dyn RenderHooks>,
    sections: SectionHandlers,
}

impl Renderer {
    /// Create a renderer with the built-in behavior
    pub fn new(config: RenderConfig) -> Self {
        Self::builder().config(config).build()
    }

    /// Start configuring a renderer with hook layers or section handlers
    pub fn builder() -> RendererBuilder {
        RendererBuilder::new()
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Outermost hook layer
    pub fn hooks(&self) -> &dyn RenderHooks {
        self.hooks.as_ref()
    }

    pub fn section_handlers(&self) -> &SectionHandlers {
        &self.sections
    }

    /// Render a page of object documentation
    pub fn render(&self, page: &Page) -> RenderResult<String> {
        info!(path = %page.path, objects = page.contents.len(), "rendering page");
        let node = RenderNode::new(self, NodeTarget::Page(page), self.config.header_level)?;
        node.to_markdown()
    }

    /// Render the index of a layout: its sections with summary tables
    pub fn summarize(&self, layout: &Layout) -> RenderResult<String> {
        info!(sections = layout.sections.len(), "rendering index");
        let node = RenderNode::new(self, NodeTarget::Layout(layout), self.config.header_level)?;
        node.to_markdown()
    }

    /// Render any layout node with headings at `level`
    pub fn render_node(&self, node: &LayoutNode, level: usize) -> RenderResult<String> {
        RenderNode::new(self, NodeTarget::from(node), level)?.to_markdown()
    }

    /// Render a single placed object with headings at `level`
    pub fn render_doc(&self, doc: &Doc, level: usize) -> RenderResult<String> {
        RenderNode::for_doc(self, doc, level)?.to_markdown()
    }

    /// Write the type inventory of every configured typing module
    pub fn write_type_inventories(
        &self,
        roots: &[DocObject],
        out_dir: impl AsRef<Path>,
    ) -> RenderResult<Vec<PathBuf>> {
        crate::inventory::write_type_inventories(roots, &self.config.typing_module_paths, out_dir)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("config", &self.config)
            .field("sections", &self.sections)
            .finish_non_exhaustive()
    }
}

/// Builder for a [`Renderer`]
///
/// # Example
///
/// ```
/// use qdoc_pandoc::Block;
/// use qdoc_render::model::SectionKind;
/// use qdoc_render::Renderer;
///
/// let renderer = Renderer::builder()
///     .section_handler(SectionKind::Examples, |_node, _section| {
///         Ok(Some(Block::Raw("See the gallery.".into())))
///     })
///     .build();
/// assert_eq!(renderer.section_handlers().len(), 1);
/// ```
pub struct RendererBuilder {
    config: RenderConfig,
    hooks: Box<dyn RenderHooks>,
    sections: SectionHandlers,
    layers: usize,
}

impl RendererBuilder {
    /// Create a builder with the default configuration and no layers
    pub fn new() -> Self {
        Self {
            config: RenderConfig::default(),
            hooks: Box::new(DefaultHooks),
            sections: SectionHandlers::new(),
            layers: 0,
        }
    }

    /// Set the configuration
    pub fn config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a hook layer on top of the current ones
    ///
    /// `wrap` receives the layers built so far and returns the new
    /// outermost layer, which should delegate to them as its parent.
    pub fn layer<F>(mut self, wrap: F) -> Self
    where
        F: FnOnce(Box<dyn RenderHooks>) -> Box<dyn RenderHooks>,
    {
        self.hooks = wrap(self.hooks);
        self.layers += 1;
        self
    }

    /// Render sections of `kind` with a closure
    pub fn section_handler<F>(self, kind: SectionKind, handler: F) -> Self
    where
        F: Fn(&RenderNode<'_>, &DocstringSection) -> RenderResult<Option<Block>> + 'static,
    {
        self.section_handler_boxed(kind, Box::new(handler))
    }

    /// Render sections of `kind` with a handler object
    pub fn section_handler_boxed(mut self, kind: SectionKind, handler: Box<dyn SectionHandler>) -> Self {
        self.sections.register(kind, handler);
        self
    }

    pub fn build(self) -> Renderer {
        debug!(
            layers = self.layers,
            section_handlers = self.sections.len(),
            "renderer built"
        );
        Renderer {
            config: self.config,
            hooks: self.hooks,
            sections: self.sections,
        }
    }
}

impl Default for RendererBuilder {
    fn default() -> Self {
        Self::new()
    }
}
