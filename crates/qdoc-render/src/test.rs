//! Test utilities and mock objects for qdoc-render.
//!
//! Builders for the object graphs that come up again and again in tests:
//! annotated parameters, documented functions, dataclasses and pages.
//!
//! # Example
//!
//! ```
//! use qdoc_render::test::{mock_function, mock_page, param};
//!
//! let f = mock_function("pkg.f", vec![param("a", "int")], "Do a thing");
//! let page = mock_page("f", f);
//! assert_eq!(page.contents[0].anchor, "pkg.f");
//! ```

use crate::model::{
    Definition, Doc, DocObject, Docstring, DocstringSection, Expr, Page, Parameter, SectionContent,
};

/// Name expression resolving to a builtin, e.g. `int`
pub fn builtin(name: &str) -> Expr {
    Expr::name(name, name)
}

/// Parameter annotated with a builtin type
pub fn param(name: &str, annotation: &str) -> Parameter {
    Parameter::new(name).with_annotation(builtin(annotation))
}

/// Parameter annotated with a builtin type and with a default
pub fn param_with_default(name: &str, annotation: &str, default: &str) -> Parameter {
    param(name, annotation).with_default(default)
}

/// Init-only dataclass parameter, `name: InitVar[annotation]`
pub fn init_var(name: &str, annotation: &str) -> Parameter {
    Parameter::new(name).with_annotation(Expr::subscript(
        Expr::name("InitVar", "dataclasses.InitVar"),
        builtin(annotation),
    ))
}

/// Function with parameters and a one line docstring
pub fn mock_function(path: &str, parameters: Vec<Parameter>, description: &str) -> DocObject {
    DocObject::function(path)
        .with_parameters(parameters)
        .with_docstring(Docstring::text(description))
}

/// Method of a class, with the implicit `self` first
pub fn mock_method(path: &str, parameters: Vec<Parameter>, description: &str) -> DocObject {
    let mut all = vec![Parameter::new("self")];
    all.extend(parameters);
    mock_function(path, all, description)
}

/// Attribute declared as `name: annotation = value`
pub fn mock_attribute(path: &str, annotation: &str, value: &str) -> DocObject {
    let name = path.rsplit('.').next().unwrap_or(path);
    DocObject::attribute(path)
        .with_annotation(builtin(annotation))
        .with_value(value)
        .with_lines(&format!("{}: {} = {}", name, annotation, value))
}

/// Dataclass whose fields are both initializer parameters and attributes
///
/// Each field is `(name, annotation, default)`.
pub fn mock_dataclass(path: &str, fields: &[(&str, &str, &str)]) -> DocObject {
    let mut cls = DocObject::class(path).with_label("dataclass");
    let mut parameters = vec![Parameter::new("self")];
    for (name, annotation, default) in fields {
        parameters.push(param_with_default(name, annotation, default));
        cls = cls.with_member(mock_attribute(
            &format!("{}.{}", path, name),
            annotation,
            default,
        ));
    }
    cls.with_parameters(parameters)
}

/// Docstring with a leading text and a Parameters section
pub fn mock_docstring(text: &str, parameters: &[(&str, &str)]) -> Docstring {
    Docstring::from_sections(vec![
        DocstringSection::new(SectionContent::Text(text.to_string())),
        DocstringSection::new(SectionContent::Parameters(
            parameters
                .iter()
                .map(|(name, description)| Definition::new(*name, *description))
                .collect(),
        )),
    ])
}

/// Page holding a single object and its members
pub fn mock_page(path: &str, obj: DocObject) -> Page {
    Page::new(path).with_doc(Doc::from_object(obj))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_dataclass() {
        let cls = mock_dataclass("pkg.P", &[("x", "int", "0")]);
        assert!(cls.is_dataclass());
        assert_eq!(cls.parameters.len(), 2);
        assert_eq!(cls.members["x"].lines, vec!["x: int = 0"]);
    }
}
