//! Classes and dataclasses rendered end to end

use pretty_assertions::assert_eq;
use qdoc_render::model::{DocObject, Docstring, Expr, Parameter, ParameterKind};
use qdoc_render::test::{init_var, mock_attribute, mock_dataclass, mock_method, mock_page, param_with_default};
use qdoc_render::{ExclusionRegistry, RenderConfig, Renderer};

fn derived() -> DocObject {
    // Derived(Base) where Base declares `b` and Derived adds `c` and an InitVar
    DocObject::class("pkg.Derived")
        .with_label("dataclass")
        .with_base(Expr::name("Base", "pkg.Base"))
        .with_docstring(Docstring::text("Derived class"))
        .with_parameters(vec![
            Parameter::new("self"),
            init_var("a", "int").with_default("1"),
            param_with_default("b", "float", "2"),
            param_with_default("c", "float", "3"),
        ])
        .with_member(mock_attribute("pkg.Derived.b", "float", "2"))
        .with_member(mock_attribute("pkg.Derived.c", "float", "3"))
}

#[test]
fn dataclass_sections() {
    let out = Renderer::default().render(&mock_page("Derived", derived())).unwrap();

    assert!(out.contains("## Init Parameters {.doc-init-parameters}"));
    assert!(out.contains("<code>a: [int](`int`) = 1</code>"));
    assert!(out.contains("## Parameter Attributes {.doc-parameter-attributes}"));
    assert!(out.contains("<code>b: [float](`float`) = 2</code>"));
    assert!(out.contains("<code>c: [float](`float`) = 3</code>"));

    // The fields are not listed again as attributes
    assert!(!out.contains("## Attributes"));

    let text = out.find("Derived class").unwrap();
    let attributes = out.find("## Parameter Attributes").unwrap();
    let init = out.find("## Init Parameters").unwrap();
    assert!(text < attributes && attributes < init);
}

#[test]
fn dataclass_signature_skips_fields_left_out_of_init() {
    let mut cls = mock_dataclass("pkg.P", &[("x", "int", "0")]);
    cls.parameters.push(
        Parameter::new("cache")
            .with_annotation(Expr::name("dict", "dict"))
            .with_default(Expr::call(
                Expr::name("field", "dataclasses.field"),
                vec![Expr::keyword("init", Expr::str("False"))],
            )),
    );
    let out = Renderer::default().render(&mock_page("P", cls)).unwrap();
    assert!(out.contains("```{.python}\nP(x=0)\n```"));
}

#[test]
fn dataclass_sections_are_prepended_without_leading_text() {
    let cls = mock_dataclass("pkg.P", &[("x", "int", "0")]);
    let out = Renderer::default().render(&mock_page("P", cls)).unwrap();
    let signature = out.find("doc-signature").unwrap();
    let attributes = out.find("## Parameter Attributes").unwrap();
    assert!(signature < attributes);
    assert!(!out.contains("## Init Parameters"));
}

#[test]
fn kw_only_field_description_from_attribute() {
    let mut x = mock_attribute("pkg.P.x", "int", "0");
    x.docstring = Some(Docstring::text("The x coordinate"));
    let cls = DocObject::class("pkg.P")
        .with_label("dataclass")
        .with_parameters(vec![
            Parameter::new("self"),
            param_with_default("x", "int", "0").with_kind(ParameterKind::KeywordOnly),
        ])
        .with_member(x);
    let out = Renderer::default().render(&mock_page("P", cls)).unwrap();
    assert!(out.contains("```{.python}\nP(*, x=0)\n```"));
    assert!(out.contains("<code>x: [int](`int`) = 0</code>\n\n:   The x coordinate"));
}

#[test]
fn methods_are_summarized_and_documented_inline() {
    let cls = DocObject::class("pkg.A")
        .with_docstring(Docstring::text("The A class"))
        .with_member(mock_method("pkg.A.method", vec![], "Do the thing"));
    let out = Renderer::default().render(&mock_page("A", cls)).unwrap();

    assert!(out.contains("## Methods {.doc-methods}"));
    assert!(out.contains("| [method](#pkg.A.method) | Do the thing |"));
    assert!(out.contains("### ` `{.doc-symbol .doc-symbol-method}[method]"));
    assert!(out.contains("```{.python}\nmethod()\n```"));
}

#[test]
fn class_heading_marks_member_docs() {
    let cls = DocObject::class("pkg.A").with_member(mock_method("pkg.A.m", vec![], "M"));
    let out = Renderer::default().render(&mock_page("A", cls)).unwrap();
    assert!(out.contains("{#pkg.A .title .doc-object .doc-class .doc-has-member-docs}"));
}

#[test]
fn excluded_attributes_and_classes() {
    let mut exclude = ExclusionRegistry::new();
    exclude
        .exclude_attributes([("pkg", "OLD")])
        .exclude_classes([("pkg", vec!["Legacy"])]);
    let module = DocObject::module("pkg")
        .with_member(mock_attribute("pkg.OLD", "int", "1"))
        .with_member(mock_attribute("pkg.NEW", "int", "2"))
        .with_member(DocObject::class("pkg.Legacy"))
        .with_member(DocObject::class("pkg.Current"));
    let renderer = Renderer::new(RenderConfig::default().with_exclusions(exclude));
    let out = renderer.render(&mock_page("pkg", module)).unwrap();

    assert!(out.contains("pkg.NEW"));
    assert!(out.contains("pkg.Current"));
    assert!(!out.contains("pkg.OLD"));
    assert!(!out.contains("pkg.Legacy"));
}

#[test]
fn protocol_label() {
    let cls = DocObject::class("pkg.Drawable").with_base(Expr::name("Protocol", "typing.Protocol"));
    let out = Renderer::default().render(&mock_page("Drawable", cls)).unwrap();
    assert_eq!(
        out.lines().next().unwrap(),
        "# ` `{.doc-symbol .doc-symbol-class}[pkg.Drawable]{.doc-object-name .doc-class-name}\
         [` `{.doc-label .doc-label-protocol}]{.doc-labels} \
         {#pkg.Drawable .title .doc-object .doc-class}"
    );
}
