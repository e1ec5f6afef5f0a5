use super::templates::{FieldRowTemplate, ObjectSchemaTemplate, OneofTemplate};
use crate::fields::{expand_by_default, group_fields, FieldItem, OneofGroup, SelectorPath};
use crate::options::RenderOptions;
use crate::spec::{Discriminator, FieldModel, SchemaModel};
use askama::Template;
use tracing::trace;

/// Per-call inputs of [`SchemaRenderer::render_object_schema`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectSchemaProps<'s> {
    /// Nesting level; top-level schemas are rendered at 1
    pub level: u32,
    /// Selector applying to this object's fields
    pub selector: Option<SelectorPath<'s>>,
    /// Render the schema title as caption
    pub show_title: bool,
}

/// Per-row inputs of [`SchemaRenderer::render_field`]
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldProps<'s, 'd> {
    pub is_last: bool,
    pub expand_by_default: bool,
    /// Remainder of the selector forwarded into this field
    pub selector: Option<SelectorPath<'s>>,
    pub level: u32,
    /// Discriminator of the enclosing object
    pub discriminator: Option<&'d Discriminator>,
}

/// Renders schema models to HTML tables.
///
/// Holds only the options; every call is a pure function of its inputs.
#[derive(Debug, Clone)]
pub struct SchemaRenderer<'o> {
    options: &'o RenderOptions,
}

impl<'o> SchemaRenderer<'o> {
    pub fn new(options: &'o RenderOptions) -> Self {
        Self { options }
    }

    /// Render the property table of `schema`.
    ///
    /// Arrays of objects render their item schema's properties.
    pub fn render_object_schema(
        &self,
        schema: &SchemaModel,
        props: &ObjectSchemaProps<'_>,
    ) -> askama::Result<String> {
        let target = schema.nested_schema();
        let items = group_fields(&target.fields, self.options.filter(), props.selector);
        let expand = expand_by_default(items.len(), props.level, self.options.expansion());
        trace!(
            level = props.level,
            items = items.len(),
            expand,
            "rendering object schema"
        );

        let mut rows = String::new();
        let count = items.len();
        for (idx, item) in items.iter().enumerate() {
            let is_last = idx + 1 == count;
            let row = match item {
                FieldItem::Field(field) => self.render_field(
                    field,
                    &FieldProps {
                        is_last,
                        expand_by_default: expand,
                        selector: props.selector.and_then(|s| s.forward_for(&field.name)),
                        level: props.level,
                        discriminator: target.discriminator.as_ref(),
                    },
                )?,
                FieldItem::Oneof(group) => self.render_oneof(
                    group,
                    &FieldProps {
                        is_last,
                        expand_by_default: expand,
                        selector: props.selector,
                        level: props.level,
                        discriminator: target.discriminator.as_ref(),
                    },
                )?,
            };
            rows.push_str(&row);
        }

        let caption = if props.show_title {
            target
                .title
                .clone()
                .or_else(|| schema.title.clone())
                .unwrap_or_default()
        } else {
            String::new()
        };

        ObjectSchemaTemplate { caption, rows }.render()
    }

    /// Render one oneof group.
    ///
    /// `props.selector` is the selector of the enclosing object; each member
    /// gets its own forwarded remainder. A single member is rendered exactly
    /// like a standalone field. Multi-member groups always show their members
    /// inline; members open their nested detail only on their own hint.
    pub fn render_oneof(
        &self,
        group: &OneofGroup<'_>,
        props: &FieldProps<'_, '_>,
    ) -> askama::Result<String> {
        if let Some(field) = group.single() {
            return self.render_field(
                field,
                &FieldProps {
                    selector: props.selector.and_then(|s| s.forward_for(&field.name)),
                    ..*props
                },
            );
        }

        let mut rows = String::new();
        let count = group.items.len();
        for (idx, field) in group.items.iter().enumerate() {
            rows.push_str(&self.render_field(
                field,
                &FieldProps {
                    is_last: idx + 1 == count,
                    expand_by_default: false,
                    selector: props.selector.and_then(|s| s.forward_for(&field.name)),
                    level: props.level,
                    discriminator: props.discriminator,
                },
            )?);
        }

        OneofTemplate {
            group_id: group.id.to_string(),
            is_last: props.is_last,
            rows,
        }
        .render()
    }

    /// Render a property row and, when the field's schema has properties of
    /// its own, the nested table one level down.
    pub fn render_field(
        &self,
        field: &FieldModel,
        props: &FieldProps<'_, '_>,
    ) -> askama::Result<String> {
        let schema = &field.schema;

        let nested = if !schema.is_circular && schema.has_nested() {
            self.render_object_schema(
                schema,
                &ObjectSchemaProps {
                    level: props.level + 1,
                    selector: props.selector,
                    show_title: false,
                },
            )?
        } else {
            String::new()
        };

        let mut classes = Vec::new();
        if props.is_last {
            classes.push("last");
        }
        if field.expanded {
            classes.push("expanded");
        }

        let discriminator_values = match props.discriminator {
            Some(d) if d.property_name == field.name => {
                if d.mapping.is_empty() {
                    schema.enum_values.clone()
                } else {
                    d.mapping.clone()
                }
            }
            _ => Vec::new(),
        };

        let example = if self.options.show_object_schema_examples {
            schema.example.clone().unwrap_or_default()
        } else {
            String::new()
        };

        FieldRowTemplate {
            name: field.name.clone(),
            row_class: classes.join(" "),
            type_name: schema.type_name.clone(),
            required: field.required,
            deprecated: field.deprecated,
            read_only: schema.read_only,
            write_only: schema.write_only,
            circular: schema.loops_back(),
            description: field.description.clone().unwrap_or_default(),
            enum_values: schema.enum_values.clone(),
            discriminator_values,
            example,
            nested,
            open: props.expand_by_default || field.expanded || props.selector.is_some(),
        }
        .render()
    }
}
