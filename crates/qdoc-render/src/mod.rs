//! qdoc-render: Quarto documentation renderer for Python API objects
//!
//! This crate turns introspected Python objects into Quarto markdown:
//! - Object pages with headings, signatures, docstring sections and members
//! - Summary tables for the API index
//! - Dataclass parameter sections
//! - Type inventories for the interlinks filter
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐
//! │ object graph    │    │ layout tree      │
//! │ (DocObject)     │    │ (Page, Section)  │
//! └────────┬────────┘    └────────┬─────────┘
//!          │                      │
//!          └──────────┬───────────┘
//!                     ▼
//!              ┌──────────────┐
//!              │  RenderNode  │◄──── RenderHooks layers
//!              └──────┬───────┘
//!                     ▼
//!              ┌──────────────┐
//!              │ qdoc-pandoc  │
//!              │   blocks     │
//!              └──────┬───────┘
//!                     ▼
//!               quarto markdown
//! ```
//!
//! # Usage
//!
//! ```
//! use qdoc_render::model::{Doc, DocObject, Docstring, Page};
//! use qdoc_render::{RenderConfig, Renderer};
//!
//! let config = RenderConfig::from_toml_str("header_level = 2").unwrap();
//! let renderer = Renderer::new(config);
//!
//! let page = Page::new("Shape").with_doc(Doc::from_object(
//!     DocObject::class("shapes.Shape").with_docstring(Docstring::text("A shape")),
//! ));
//! let markdown = renderer.render(&page).unwrap();
//! assert!(markdown.starts_with("## "));
//! ```

// Core types
pub mod diagnostics;
pub mod model;

// Configuration
pub mod config;
pub mod exclude;

// Rendering
pub mod format;
pub mod render;
pub mod signature;

// Outputs and entry points
pub mod inventory;
pub mod test;
pub mod tools;

// Re-exports for convenience
pub use config::{DisplayNameFormat, NameFormat, RenderConfig};
pub use diagnostics::{RenderError, RenderResult};
pub use exclude::{ExcludeSpec, ExclusionKind, ExclusionRegistry};
pub use inventory::{write_type_inventories, TypeEntry, TypeInventory};
pub use model::{Doc, DocObject, Layout, LayoutNode, Page};
pub use render::{
    DefaultHooks, DocKind, MemberGroup, RenderHooks, RenderNode, Renderer, RendererBuilder,
    SectionHandler, ShowOptions,
};
pub use signature::format_signature;
pub use tools::{render_object, render_object_json};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
