use serde_json::Value;

/// Source format of a document on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Yaml,
    Json,
}

impl SpecFormat {
    /// Pick the format from a file extension; anything that is not YAML is read as JSON.
    pub fn from_path(path: &str) -> Self {
        if path.ends_with(".yaml") || path.ends_with(".yml") {
            SpecFormat::Yaml
        } else {
            SpecFormat::Json
        }
    }
}

impl std::fmt::Display for SpecFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecFormat::Yaml => write!(f, "yaml"),
            SpecFormat::Json => write!(f, "json"),
        }
    }
}

/// A parsed and validated OpenAPI document.
///
/// The raw JSON tree is kept because schema building reads vendor extensions
/// (`x-protobuf-oneof`, `x-expanded`) straight from it.
#[derive(Debug, Clone)]
pub struct LoadedSpec {
    /// The whole document as JSON
    pub document: Value,
    /// `info.title`
    pub title: String,
    /// `info.version`
    pub version: String,
    /// Lowercase, underscore separated form of the title
    pub slug: String,
}

impl LoadedSpec {
    /// Names of all component schemas in document order
    pub fn schema_names(&self) -> Vec<String> {
        self.document
            .pointer("/components/schemas")
            .and_then(|v| v.as_object())
            .map(|schemas| schemas.keys().cloned().collect())
            .unwrap_or_default()
    }
}

/// Discriminator declared on an object schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discriminator {
    /// Name of the property that carries the discriminating value
    pub property_name: String,
    /// Keys of the `mapping` object, in document order
    pub mapping: Vec<String>,
}

/// Display model for a single schema node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaModel {
    /// `title`, or the component name the node was resolved from
    pub title: Option<String>,
    /// Human readable type, e.g. `string <uuid>`, `Array of Pet`
    pub type_name: String,
    pub description: Option<String>,
    /// Object properties in document order
    pub fields: Vec<FieldModel>,
    /// Item schema for arrays
    pub items: Option<Box<SchemaModel>>,
    pub enum_values: Vec<String>,
    pub discriminator: Option<Discriminator>,
    pub read_only: bool,
    pub write_only: bool,
    pub deprecated: bool,
    /// Oneof group identifier from `x-protobuf-oneof`
    pub oneof: Option<String>,
    /// Example serialized as compact JSON
    pub example: Option<String>,
    /// Component name when the node came from a `$ref`
    pub ref_name: Option<String>,
    /// Set when the node refers back to a schema already on the current path
    pub is_circular: bool,
}

impl SchemaModel {
    /// Fields to render below this node: its own properties, or the item
    /// schema's properties for arrays of objects.
    pub fn nested_fields(&self) -> &[FieldModel] {
        if !self.fields.is_empty() {
            return &self.fields;
        }
        match &self.items {
            Some(items) => items.nested_fields(),
            None => &[],
        }
    }

    /// The schema whose discriminator applies to [`SchemaModel::nested_fields`]
    pub fn nested_schema(&self) -> &SchemaModel {
        if self.fields.is_empty() {
            if let Some(items) = &self.items {
                return items.nested_schema();
            }
        }
        self
    }

    pub fn has_nested(&self) -> bool {
        !self.nested_fields().is_empty()
    }

    /// True when this node, or the item schema of an array, closes a `$ref` cycle.
    pub fn loops_back(&self) -> bool {
        self.is_circular || self.items.as_deref().is_some_and(SchemaModel::loops_back)
    }
}

/// One property of an object schema
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldModel {
    pub name: String,
    pub required: bool,
    pub deprecated: bool,
    pub description: Option<String>,
    /// Advisory display hint from `x-expanded`
    pub expanded: bool,
    pub schema: SchemaModel,
}

impl FieldModel {
    /// Oneof group this field belongs to, if any
    pub fn oneof(&self) -> Option<&str> {
        self.schema.oneof.as_deref()
    }

    pub fn is_read_only(&self) -> bool {
        self.schema.read_only
    }

    pub fn is_write_only(&self) -> bool {
        self.schema.write_only
    }
}
