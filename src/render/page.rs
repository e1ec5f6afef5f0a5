use super::schema::{ObjectSchemaProps, SchemaRenderer};
use super::templates::{PageSection, PageTemplate};
use crate::fields::SelectorPath;
use crate::options::RenderOptions;
use crate::spec::{build_schema, slugify, LoadedSpec};
use askama::Template;
use tracing::info;

/// Render a full HTML page for the named component schemas.
///
/// An empty `schema_names` renders every schema in document order. The
/// selector, when given, applies to the top level of each schema.
///
/// # Errors
///
/// Fails on unknown schema names and template errors.
pub fn render_document(
    spec: &LoadedSpec,
    schema_names: &[String],
    selector: Option<&str>,
    options: &RenderOptions,
) -> anyhow::Result<String> {
    let names = if schema_names.is_empty() {
        spec.schema_names()
    } else {
        schema_names.to_vec()
    };

    let renderer = SchemaRenderer::new(options);
    let props = ObjectSchemaProps {
        level: 1,
        selector: selector.and_then(SelectorPath::parse),
        show_title: options.show_title,
    };

    let mut sections = Vec::with_capacity(names.len());
    for name in &names {
        let schema = build_schema(spec, name)?;
        let body = renderer.render_object_schema(&schema, &props)?;
        sections.push(PageSection {
            anchor: format!("schema-{}", slugify(name)),
            title: name.clone(),
            body,
        });
    }

    info!(
        title = %spec.title,
        schemas = sections.len(),
        "rendered schema documentation"
    );

    let page = PageTemplate {
        title: spec.title.clone(),
        version: spec.version.clone(),
        sections,
    }
    .render()?;
    Ok(page)
}
