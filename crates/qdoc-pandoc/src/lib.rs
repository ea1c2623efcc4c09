//! qdoc-pandoc: Pandoc markdown fragment builders
//!
//! Small value types that serialize to the pandoc markdown dialect
//! understood by Quarto. The renderer decides *which* fragments to build;
//! this crate only knows how each one is written out.
//!
//! # Example
//!
//! ```
//! use qdoc_pandoc::{Attr, Block, Header, Inlines};
//!
//! let header = Header::new(2, Inlines::from("Methods"), Attr::new().with_class("doc-methods"));
//! assert_eq!(Block::from(header).to_string(), "## Methods {.doc-methods}");
//! ```

pub mod attr;
pub mod blocks;
pub mod inlines;
pub mod table;

pub use attr::Attr;
pub use blocks::{Block, Blocks, CodeBlock, DefinitionItem, DefinitionList, Div, Header};
pub use inlines::{interlink, Code, Inline, Inlines, Link, Span};
pub use table::GridTable;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
