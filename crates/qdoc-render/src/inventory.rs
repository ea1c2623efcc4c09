//! Type inventories
//!
//! Lists of the classes, type aliases and type variables of a module,
//! written as JSON next to the rendered pages. The interlinks filter
//! reads them to resolve names used in annotations.

use crate::diagnostics::{RenderError, RenderResult};
use crate::model::{DocObject, ObjectKind};
use crate::render::DocKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One type defined in the module subtree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEntry {
    pub name: String,
    pub path: String,
    pub canonical_path: String,
    /// "class", "type" or "typevar"
    pub kind: String,
}

/// The types of one module and its submodules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeInventory {
    pub module: String,
    pub entries: Vec<TypeEntry>,
}

impl TypeInventory {
    /// Collect the types defined under `module`
    pub fn collect(module: &DocObject) -> Self {
        let mut inventory = Self {
            module: module.path.clone(),
            entries: vec![],
        };
        inventory.visit(module);
        inventory
    }

    fn visit(&mut self, obj: &DocObject) {
        for member in obj.members.values() {
            if member.kind == ObjectKind::Alias {
                continue;
            }
            let kind = match DocKind::of(member) {
                Some(kind @ (DocKind::Class | DocKind::Type | DocKind::TypeVar)) => kind,
                _ => {
                    if member.is_module() {
                        self.visit(member);
                    }
                    continue;
                }
            };
            self.entries.push(TypeEntry {
                name: member.name.clone(),
                path: member.path.clone(),
                canonical_path: member.canonical().to_string(),
                kind: kind.as_str().to_string(),
            });
            if member.is_class() {
                self.visit(member);
            }
        }
    }

    /// File name of the inventory, `<module>.types.json`
    pub fn file_name(&self) -> String {
        format!("{}.types.json", self.module)
    }

    pub fn to_json(&self) -> RenderResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Find an object by path among the roots and their members
pub fn find_object<'a>(roots: &'a [DocObject], path: &str) -> Option<&'a DocObject> {
    roots.iter().find_map(|root| find_in(root, path))
}

fn find_in<'a>(obj: &'a DocObject, path: &str) -> Option<&'a DocObject> {
    if obj.path == path {
        return Some(obj);
    }
    if !path.starts_with(&format!("{}.", obj.path)) {
        return None;
    }
    obj.members.values().find_map(|member| find_in(member, path))
}

/// Write the inventory of each module in `modules` to `out_dir`
///
/// Returns the written files. A module missing from `roots` is an error.
pub fn write_type_inventories(
    roots: &[DocObject],
    modules: &[String],
    out_dir: impl AsRef<Path>,
) -> RenderResult<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref();
    if !modules.is_empty() {
        std::fs::create_dir_all(out_dir)?;
    }

    let mut written = Vec::with_capacity(modules.len());
    for module in modules {
        let obj = find_object(roots, module)
            .ok_or_else(|| RenderError::ObjectNotFound(module.clone()))?;
        let inventory = TypeInventory::collect(obj);
        let file = out_dir.join(inventory.file_name());
        std::fs::write(&file, inventory.to_json()?)?;
        debug!(module = %module, entries = inventory.entries.len(), "type inventory collected");
        written.push(file);
    }
    info!(count = written.len(), dir = %out_dir.display(), "type inventories written");
    Ok(written)
}
