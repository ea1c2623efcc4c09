//! Layout index, pages, configuration files and type inventories

use pretty_assertions::assert_eq;
use qdoc_render::model::{ContentItem, Doc, Layout, LayoutNode, Link, Page, Section};
use qdoc_render::test::{mock_attribute, mock_function};
use qdoc_render::{DocObject, RenderConfig, RenderError, Renderer};
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

fn layout() -> Layout {
    Layout {
        sections: vec![
            Section::titled("Shapes")
                .with_content(Doc::new("area", mock_function("pkg.area", vec![], "Compute the area")))
                .with_content(
                    Page::new("helpers")
                        .with_doc(Doc::new("grow", mock_function("pkg.grow", vec![], "Grow it")))
                        .with_doc(Doc::new("shrink", mock_function("pkg.shrink", vec![], "Shrink it"))),
                ),
            Section {
                subtitle: Some("Elsewhere".into()),
                contents: vec![ContentItem::Link(Link {
                    name: "other.thing".into(),
                    obj: mock_function("other.thing", vec![], "Lives elsewhere"),
                })],
                ..Section::default()
            },
        ],
        package: Some("pkg".into()),
    }
}

#[test]
fn index_summaries() {
    let out = Renderer::default().summarize(&layout()).unwrap();
    assert!(out.starts_with("## Shapes {.doc-summary}"));
    assert!(out.contains("| [area](area.qmd#pkg.area)        | Compute the area |"));
    assert!(out.contains("| [grow](helpers.qmd#pkg.grow)"));
    assert!(out.contains("| [shrink](helpers.qmd#pkg.shrink)"));
    assert!(out.contains("### Elsewhere {.doc-summary-subgroup}"));
    assert!(out.contains("| [](`other.thing`) | Lives elsewhere |"));
    // The index has no object documentation
    assert!(!out.contains("doc-signature"));
}

#[test]
fn page_renders_every_object() {
    let page = Page::new("helpers")
        .with_doc(Doc::new("grow", mock_function("pkg.grow", vec![], "Grow it")))
        .with_doc(Doc::new("shrink", mock_function("pkg.shrink", vec![], "Shrink it")));
    let out = Renderer::default().render(&page).unwrap();
    let grow = out.find("{#pkg.grow .title").unwrap();
    let shrink = out.find("{#pkg.shrink .title").unwrap();
    assert!(grow < shrink);
}

#[test]
fn link_renders_as_a_div() {
    let link = LayoutNode::Link(Link {
        name: "other.thing".into(),
        obj: mock_function("other.thing", vec![], "Lives elsewhere"),
    });
    assert_eq!(Renderer::default().render_node(&link, 1).unwrap(), "::: {.doc}\n\n:::");
}

#[test]
fn attribute_page() {
    let page = Page::new("LIMIT").with_doc(Doc::new("LIMIT", mock_attribute("pkg.LIMIT", "int", "10")));
    let out = Renderer::default().render(&page).unwrap();
    assert!(out.contains("{#pkg.LIMIT .title .doc-object .doc-attribute}"));
    assert!(out.contains("[[int](`int`)]{.doc-parameter-annotation}"));
}

#[test]
fn config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
header_level = 2
display_name_format = "relative"

[exclude.parameters]
"pkg.area" = ["scale"]
"#
    )
    .unwrap();

    let config = RenderConfig::from_toml_file(file.path()).unwrap();
    let renderer = Renderer::new(config);
    let f = DocObject::function("pkg.shapes.area").with_parameters(vec![]);
    let out = renderer.render(&Page::new("area").with_doc(Doc::new("area", f))).unwrap();
    assert!(out.starts_with("## "));
    assert!(out.contains("[shapes.area]{.doc-object-name"));
}

#[test]
fn bad_name_format_is_rejected() {
    let err = RenderConfig::from_toml_str(r#"display_name_format = "shout""#).unwrap_err();
    assert!(matches!(err, RenderError::Config(_)));
    assert!(err.to_string().contains("shout"));
}

#[test]
fn missing_config_file() {
    let dir = tempdir().unwrap();
    let err = RenderConfig::from_toml_file(dir.path().join("qdoc.toml")).unwrap_err();
    assert!(matches!(err, RenderError::FileNotFound(_)));
}

#[test]
fn type_inventories() {
    let dir = tempdir().unwrap();
    let package = DocObject::module("pkg").with_member(DocObject::class("pkg.Shape"));
    let renderer = Renderer::new(RenderConfig::default().with_typing_module("pkg"));
    let files = renderer.write_type_inventories(&[package], dir.path()).unwrap();
    assert_eq!(files.len(), 1);
    let json = std::fs::read_to_string(&files[0]).unwrap();
    assert!(json.contains("\"kind\": \"class\""));
}
