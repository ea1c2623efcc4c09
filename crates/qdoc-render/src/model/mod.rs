//! Input data model
//!
//! The object graph built by the introspection tool and the layout tree
//! built by the page planner. Both are read-only to the renderer.

pub mod docstring;
pub mod expr;
pub mod layout;
pub mod object;
pub mod params;

pub use docstring::{
    Admonition, Definition, Deprecation, Docstring, DocstringSection, ExampleItem, SectionContent,
    SectionKind,
};
pub use expr::{Expr, Token, STRIP_QUALIFIER};
pub use layout::{ContentItem, Doc, Layout, LayoutNode, Link, Page, Section};
pub use object::{DocObject, ObjectKind};
pub use params::{Parameter, ParameterKind};
