//! Convenience entry points
//!
//! Render an object without planning a layout first, e.g. to preview a
//! docstring while writing it.

use crate::diagnostics::{RenderError, RenderResult};
use crate::model::{Doc, DocObject};
use crate::render::Renderer;

/// Render an object and its members with the default configuration
pub fn render_object(obj: &DocObject) -> RenderResult<String> {
    let renderer = Renderer::default();
    let doc = Doc::from_object(obj.clone());
    renderer.render_doc(&doc, renderer.config().header_level)
}

/// Render an object from the introspection tool's JSON
///
/// With `name`, renders that member of the object instead.
pub fn render_object_json(json: &str, name: Option<&str>) -> RenderResult<String> {
    let obj: DocObject = serde_json::from_str(json)?;
    match name {
        Some(name) => {
            let member = obj
                .members
                .get(name)
                .ok_or_else(|| RenderError::ObjectNotFound(format!("{}.{}", obj.path, name)))?;
            render_object(member)
        }
        None => render_object(&obj),
    }
}
