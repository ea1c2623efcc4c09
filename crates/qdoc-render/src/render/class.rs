//! Classes
//!
//! The body of a class is its docstring followed by its members.
//! Dataclasses get two more sections describing the initializer.

use crate::diagnostics::RenderResult;
use crate::format::{pretty_code, render_dataclass_init_parameter, render_dataclass_parameter};
use crate::model::{Definition, DocObject, Expr, Parameter, SectionContent, SectionKind};
use crate::render::doc::docstring_sections;
use crate::render::node::RenderNode;
use qdoc_pandoc::{Attr, Block, Blocks, Code, DefinitionItem, DefinitionList, Div, Header};
use tracing::warn;

/// Effective parameters of a dataclass, split by whether they are also
/// attributes of the class
#[derive(Debug, Clone, Default)]
pub struct DataclassParameters<'a> {
    /// Fields, with the attribute declaring each one
    pub attributes: Vec<(&'a Parameter, &'a DocObject)>,
    /// Init-only parameters
    pub init: Vec<&'a Parameter>,
}

impl DataclassParameters<'_> {
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.init.is_empty()
    }

    /// Whether `name` is a field shown among the parameter attributes
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|(param, _)| param.name == name)
    }
}

pub(crate) fn partition_parameters<'a>(node: &RenderNode<'a>) -> DataclassParameters<'a> {
    let mut partition = DataclassParameters::default();
    let Some(obj) = node.doc().map(|doc| &doc.obj) else {
        return partition;
    };
    if !obj.is_dataclass() {
        return partition;
    }

    for &param in node.parameters() {
        match obj.attribute_member(&param.name) {
            Some(attr) => partition.attributes.push((param, attr)),
            None => {
                if !is_init_var(param.annotation.as_ref()) {
                    warn!(
                        class = %obj.path,
                        parameter = %param.name,
                        "dataclass parameter is neither a field nor an InitVar"
                    );
                }
                partition.init.push(param);
            }
        }
    }
    partition
}

fn is_init_var(annotation: Option<&Expr>) -> bool {
    matches!(annotation, Some(Expr::Subscript { left, .. }) if left.is_name("InitVar"))
}

/// Docstring sections, the dataclass sections, then the members
pub(crate) fn render_body(node: &RenderNode<'_>) -> RenderResult<Option<Block>> {
    let sections = docstring_sections(node)?;
    let insert_at = match sections.first() {
        Some((SectionKind::Text, _)) => 1,
        _ => 0,
    };
    let mut body: Blocks = sections.into_iter().map(|(_, block)| block).collect();

    let dataclass = node.dataclass_parameters();
    if !dataclass.is_empty() {
        let mut synthesized = Blocks::new();
        synthesized.push_opt(parameter_attributes(node, dataclass));
        synthesized.push_opt(init_parameters(node, dataclass));
        body.insert(insert_at, Block::from(synthesized));
    }

    for block in node.hooks().render_members(node)? {
        body.push(block);
    }

    if body.is_empty() {
        Ok(None)
    } else {
        Ok(Some(body.into()))
    }
}

/// Fields of the dataclass, declared as in the class body
fn parameter_attributes(
    node: &RenderNode<'_>,
    dataclass: &DataclassParameters<'_>,
) -> Option<Block> {
    if dataclass.attributes.is_empty() {
        return None;
    }
    let items = dataclass
        .attributes
        .iter()
        .map(|(param, attr)| {
            let declaration = Code::new(pretty_code(&render_dataclass_parameter(param, attr))).html();
            let description = attr
                .docstring
                .as_ref()
                .map(|docstring| docstring.value.clone())
                .filter(|value| !value.is_empty())
                .or_else(|| documented_parameter(node, &param.name))
                .unwrap_or_default();
            DefinitionItem::new(declaration, description)
        })
        .collect();
    Some(dataclass_section(
        node,
        "Parameter Attributes",
        "doc-parameter-attributes",
        items,
    ))
}

/// Parameters of the initializer that are not fields
fn init_parameters(node: &RenderNode<'_>, dataclass: &DataclassParameters<'_>) -> Option<Block> {
    if dataclass.init.is_empty() {
        return None;
    }
    let items = dataclass
        .init
        .iter()
        .map(|param| {
            let declaration = Code::new(pretty_code(&render_dataclass_init_parameter(param))).html();
            DefinitionItem::new(
                declaration,
                documented_parameter(node, &param.name).unwrap_or_default(),
            )
        })
        .collect();
    Some(dataclass_section(
        node,
        "Init Parameters",
        "doc-init-parameters",
        items,
    ))
}

fn dataclass_section(
    node: &RenderNode<'_>,
    title: &str,
    class: &str,
    items: Vec<DefinitionItem>,
) -> Block {
    let mut blocks = Blocks::new();
    blocks.push(Header::new(node.level() + 1, title, Attr::classes([class])));
    blocks.push(Div::new(
        DefinitionList::new(items),
        Attr::classes(["doc-definition-items"]),
    ));
    blocks.into()
}

/// Description of a parameter in the class docstring's Parameters section
fn documented_parameter(node: &RenderNode<'_>, name: &str) -> Option<String> {
    let docstring = node.obj()?.docstring.as_ref()?;
    docstring
        .parsed
        .iter()
        .filter_map(|section| match &section.content {
            SectionContent::Parameters(items) => Some(items),
            _ => None,
        })
        .flatten()
        .find(|item: &&Definition| item.name == name)
        .map(|item| item.description.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Doc, Docstring, DocstringSection};
    use crate::render::Renderer;
    use pretty_assertions::assert_eq;

    fn int() -> Expr {
        Expr::name("int", "int")
    }

    fn point() -> DocObject {
        DocObject::class("pkg.Point")
            .with_label("dataclass")
            .with_docstring(Docstring::from_sections(vec![
                DocstringSection::new(SectionContent::Text("A point.".into())),
                DocstringSection::new(SectionContent::Parameters(vec![Definition::new(
                    "scale",
                    "Scale factor",
                )])),
            ]))
            .with_parameters(vec![
                Parameter::new("self"),
                Parameter::new("x").with_annotation(int()).with_default("0"),
                Parameter::new("scale")
                    .with_annotation(Expr::subscript(Expr::name("InitVar", "dataclasses.InitVar"), int()))
                    .with_default("1"),
            ])
            .with_member(
                DocObject::attribute("pkg.Point.x")
                    .with_annotation(int())
                    .with_value("0")
                    .with_lines("x: int = 0"),
            )
    }

    #[test]
    fn test_partition() {
        let doc = Doc::from_object(point());
        let renderer = Renderer::default();
        let node = RenderNode::for_doc(&renderer, &doc, 1).unwrap();
        let dataclass = node.dataclass_parameters();

        let attributes: Vec<_> = dataclass.attributes.iter().map(|(p, _)| &p.name).collect();
        let init: Vec<_> = dataclass.init.iter().map(|p| &p.name).collect();
        assert_eq!(attributes, vec!["x"]);
        assert_eq!(init, vec!["scale"]);
        assert!(dataclass.has_attribute("x"));
    }

    #[test]
    fn test_sections_follow_leading_text() {
        let doc = Doc::from_object(point());
        let renderer = Renderer::default();
        let node = RenderNode::for_doc(&renderer, &doc, 1).unwrap();
        let body = node.body().unwrap().unwrap().to_string();

        let text = body.find("A point.").unwrap();
        let attributes = body.find("## Parameter Attributes {.doc-parameter-attributes}").unwrap();
        let init = body.find("## Init Parameters {.doc-init-parameters}").unwrap();
        let parameters = body.find("## Parameters {.doc-parameters}").unwrap();
        assert!(text < attributes && attributes < init && init < parameters);

        assert!(body.contains("<code>x: [int](`int`) = 0</code>"));
        assert!(body.contains("<code>scale: [int](`int`) = 1</code>\n\n:   Scale factor"));
    }

    #[test]
    fn test_plain_class_has_no_dataclass_sections() {
        let cls = DocObject::class("pkg.A")
            .with_parameters(vec![Parameter::new("self"), Parameter::new("a")])
            .with_docstring(Docstring::text("Plain."));
        let doc = Doc::from_object(cls);
        let renderer = Renderer::default();
        let node = RenderNode::for_doc(&renderer, &doc, 1).unwrap();
        assert!(node.dataclass_parameters().is_empty());
        assert_eq!(
            node.body().unwrap().unwrap().to_string(),
            "::: {.doc-text}\nPlain.\n:::"
        );
    }
}
