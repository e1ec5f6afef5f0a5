use askama::Template;

/// Property table of one object schema
#[derive(Template)]
#[template(path = "object_schema.html")]
pub struct ObjectSchemaTemplate {
    /// Table caption; empty hides it
    pub caption: String,
    /// Pre-rendered rows
    pub rows: String,
}

/// A single property row plus its collapsible nested table
#[derive(Template)]
#[template(path = "field_row.html")]
pub struct FieldRowTemplate {
    pub name: String,
    /// Space separated CSS classes (`last`, `expanded`)
    pub row_class: String,
    pub type_name: String,
    pub required: bool,
    pub deprecated: bool,
    pub read_only: bool,
    pub write_only: bool,
    pub circular: bool,
    pub description: String,
    pub enum_values: Vec<String>,
    /// Values of the discriminator switch when this field is the discriminator
    pub discriminator_values: Vec<String>,
    pub example: String,
    /// Pre-rendered nested object table; empty when there is none
    pub nested: String,
    /// Whether the nested table starts open
    pub open: bool,
}

/// "One of" header row followed by the member rows
#[derive(Template)]
#[template(path = "oneof.html")]
pub struct OneofTemplate {
    pub group_id: String,
    pub is_last: bool,
    /// Pre-rendered member rows
    pub rows: String,
}

/// One schema on the documentation page
#[derive(Debug, Clone)]
pub struct PageSection {
    pub anchor: String,
    pub title: String,
    /// Pre-rendered schema table
    pub body: String,
}

/// Full HTML document
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub title: String,
    pub version: String,
    pub sections: Vec<PageSection>,
}
