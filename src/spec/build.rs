use super::types::{Discriminator, FieldModel, LoadedSpec, SchemaModel};
use crate::error::DocError;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Nesting cap for inline (non-`$ref`) schemas
const MAX_DEPTH: usize = 32;
const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

/// Vendor extension carrying the protobuf oneof group identifier
pub const ONEOF_EXTENSION: &str = "x-protobuf-oneof";
/// Vendor extension marking a field as expanded by default
pub const EXPANDED_EXTENSION: &str = "x-expanded";

/// Resolve a JSON Schema `$ref` such as `#/components/schemas/Pet` against the
/// raw document.
///
/// Returns `None` for references outside `components.schemas` or names that
/// are not defined.
pub fn resolve_schema_ref<'a>(document: &'a Value, ref_path: &str) -> Option<&'a Value> {
    let name = ref_path.strip_prefix(SCHEMA_REF_PREFIX)?;
    document.pointer("/components/schemas")?.get(name)
}

/// Build the display model for one component schema.
///
/// # Errors
///
/// [`DocError::UnknownSchema`] when `name` is not under `components.schemas`.
pub fn build_schema(spec: &LoadedSpec, name: &str) -> Result<SchemaModel, DocError> {
    let raw = spec
        .document
        .pointer("/components/schemas")
        .and_then(|schemas| schemas.get(name))
        .ok_or_else(|| DocError::UnknownSchema {
            name: name.to_string(),
        })?;

    let mut builder = SchemaBuilder::new(&spec.document);
    builder.stack.push(name.to_string());
    let mut model = builder.build(raw, 0);
    model.ref_name = Some(name.to_string());
    if model.title.is_none() {
        model.title = Some(name.to_string());
    }
    debug!(schema = name, fields = model.fields.len(), "built schema model");
    Ok(model)
}

/// Build every component schema, in document order.
pub fn build_all_schemas(spec: &LoadedSpec) -> Vec<(String, SchemaModel)> {
    spec.schema_names()
        .into_iter()
        .filter_map(|name| match build_schema(spec, &name) {
            Ok(model) => Some((name, model)),
            Err(e) => {
                warn!(schema = %name, error = %e, "skipping schema");
                None
            }
        })
        .collect()
}

struct SchemaBuilder<'a> {
    document: &'a Value,
    /// Component names on the path from the root to the current node
    stack: Vec<String>,
}

impl<'a> SchemaBuilder<'a> {
    fn new(document: &'a Value) -> Self {
        Self {
            document,
            stack: Vec::new(),
        }
    }

    fn build(&mut self, schema: &Value, depth: usize) -> SchemaModel {
        let obj = match schema.as_object() {
            Some(o) => o,
            // `true` / `{}` style schemas accept anything
            None => {
                return SchemaModel {
                    type_name: "any".to_string(),
                    ..Default::default()
                }
            }
        };

        if let Some(ref_path) = obj.get("$ref").and_then(|v| v.as_str()) {
            let mut model = self.build_ref(ref_path, depth);
            // Sibling keywords next to `$ref` annotate the use site
            apply_annotations(&mut model, obj);
            return model;
        }

        if depth > MAX_DEPTH {
            warn!(depth, "schema nesting too deep, truncating");
            return SchemaModel {
                type_name: type_name_of(obj, None),
                ..Default::default()
            };
        }

        let merged = if obj.contains_key("allOf") {
            let mut seen = Vec::new();
            self.merge_all_of(obj, &mut seen)
        } else {
            obj.clone()
        };
        self.build_object(&merged, depth)
    }

    fn build_ref(&mut self, ref_path: &str, depth: usize) -> SchemaModel {
        let name = ref_path
            .strip_prefix(SCHEMA_REF_PREFIX)
            .unwrap_or(ref_path)
            .to_string();

        if self.stack.contains(&name) {
            return SchemaModel {
                title: Some(name.clone()),
                type_name: name.clone(),
                ref_name: Some(name),
                is_circular: true,
                ..Default::default()
            };
        }

        let Some(target) = resolve_schema_ref(self.document, ref_path) else {
            warn!(reference = ref_path, "unresolved schema reference");
            return SchemaModel {
                type_name: name,
                ..Default::default()
            };
        };

        self.stack.push(name.clone());
        let mut model = self.build(target, depth + 1);
        self.stack.pop();

        if model.title.is_none() {
            model.title = Some(name.clone());
        }
        model.ref_name = Some(name);
        model
    }

    /// Flatten `allOf` into a single object: properties keep the first
    /// definition, `required` lists are unioned, other keywords fill gaps.
    fn merge_all_of(&self, obj: &Map<String, Value>, seen: &mut Vec<String>) -> Map<String, Value> {
        let mut merged = obj.clone();
        merged.remove("allOf");

        let members = obj
            .get("allOf")
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap_or_default();

        for member in &members {
            let resolved = match member.get("$ref").and_then(|v| v.as_str()) {
                Some(ref_path) => {
                    if seen.iter().any(|s| s == ref_path) {
                        continue;
                    }
                    seen.push(ref_path.to_string());
                    match resolve_schema_ref(self.document, ref_path) {
                        Some(target) => target,
                        None => {
                            warn!(reference = ref_path, "unresolved allOf member");
                            continue;
                        }
                    }
                }
                None => member,
            };
            let Some(member_obj) = resolved.as_object() else {
                continue;
            };
            let member_obj = if member_obj.contains_key("allOf") {
                self.merge_all_of(member_obj, seen)
            } else {
                member_obj.clone()
            };
            merge_into(&mut merged, &member_obj);
        }
        merged
    }

    fn build_object(&mut self, obj: &Map<String, Value>, depth: usize) -> SchemaModel {
        let required: Vec<&str> = obj
            .get("required")
            .and_then(|v| v.as_array())
            .map(|arr| arr.iter().filter_map(|v| v.as_str()).collect())
            .unwrap_or_default();

        let mut fields = Vec::new();
        if let Some(props) = obj.get("properties").and_then(|v| v.as_object()) {
            for (name, prop) in props {
                let schema = self.build(prop, depth + 1);
                fields.push(FieldModel {
                    name: name.clone(),
                    required: required.contains(&name.as_str()),
                    deprecated: schema.deprecated,
                    description: schema.description.clone(),
                    expanded: prop
                        .get(EXPANDED_EXTENSION)
                        .and_then(|v| v.as_bool())
                        .unwrap_or(false),
                    schema,
                });
            }
        }

        let items = obj
            .get("items")
            .map(|items| Box::new(self.build(items, depth + 1)));

        let enum_values = obj
            .get("enum")
            .and_then(|v| v.as_array())
            .map(|values| values.iter().map(display_value).collect())
            .unwrap_or_default();

        let discriminator = obj.get("discriminator").and_then(|d| {
            let property_name = d.get("propertyName")?.as_str()?.to_string();
            let mapping = d
                .get("mapping")
                .and_then(|m| m.as_object())
                .map(|m| m.keys().cloned().collect())
                .unwrap_or_default();
            Some(Discriminator {
                property_name,
                mapping,
            })
        });

        let mut model = SchemaModel {
            title: obj.get("title").and_then(|v| v.as_str()).map(String::from),
            type_name: type_name_of(obj, items.as_deref()),
            fields,
            items,
            enum_values,
            discriminator,
            ..Default::default()
        };
        apply_annotations(&mut model, obj);
        model
    }
}

/// Copy use-site keywords onto a model. Only keywords present on `obj` are
/// applied so a `$ref` target keeps its own values otherwise.
fn apply_annotations(model: &mut SchemaModel, obj: &Map<String, Value>) {
    if let Some(desc) = obj.get("description").and_then(|v| v.as_str()) {
        model.description = Some(desc.to_string());
    }
    if let Some(v) = obj.get("readOnly").and_then(|v| v.as_bool()) {
        model.read_only = v;
    }
    if let Some(v) = obj.get("writeOnly").and_then(|v| v.as_bool()) {
        model.write_only = v;
    }
    if let Some(v) = obj.get("deprecated").and_then(|v| v.as_bool()) {
        model.deprecated = v;
    }
    if let Some(group) = obj.get(ONEOF_EXTENSION) {
        model.oneof = match group {
            Value::Null => None,
            other => Some(display_value(other)),
        };
    }
    if let Some(example) = obj.get("example") {
        model.example = Some(example.to_string());
    } else if let Some(first) = obj
        .get("examples")
        .and_then(|v| v.as_array())
        .and_then(|arr| arr.first())
    {
        model.example = Some(first.to_string());
    }
}

fn merge_into(target: &mut Map<String, Value>, member: &Map<String, Value>) {
    for (key, value) in member {
        match key.as_str() {
            "properties" => {
                let Some(props) = value.as_object() else {
                    continue;
                };
                let entry = target
                    .entry("properties")
                    .or_insert_with(|| Value::Object(Map::new()));
                if let Value::Object(existing) = entry {
                    for (name, prop) in props {
                        if !existing.contains_key(name) {
                            existing.insert(name.clone(), prop.clone());
                        }
                    }
                }
            }
            "required" => {
                let Some(names) = value.as_array() else {
                    continue;
                };
                let entry = target
                    .entry("required")
                    .or_insert_with(|| Value::Array(Vec::new()));
                if let Value::Array(existing) = entry {
                    for name in names {
                        if !existing.contains(name) {
                            existing.push(name.clone());
                        }
                    }
                }
            }
            _ => {
                if !target.contains_key(key) {
                    target.insert(key.clone(), value.clone());
                }
            }
        }
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Human readable type label, e.g. `integer <int64>` or `Array of Pet`.
fn type_name_of(obj: &Map<String, Value>, items: Option<&SchemaModel>) -> String {
    let types: Vec<&str> = match obj.get("type") {
        Some(Value::String(s)) => vec![s.as_str()],
        Some(Value::Array(arr)) => arr.iter().filter_map(|v| v.as_str()).collect(),
        _ => Vec::new(),
    };

    let base = if types.is_empty() {
        if obj.contains_key("properties") {
            "object".to_string()
        } else if let Some(items) = items {
            array_label(items)
        } else {
            "any".to_string()
        }
    } else {
        types
            .iter()
            .map(|t| match (*t, items) {
                ("array", Some(items)) => array_label(items),
                _ => (*t).to_string(),
            })
            .collect::<Vec<_>>()
            .join(" or ")
    };

    match obj.get("format").and_then(|v| v.as_str()) {
        Some(format) => format!("{base} <{format}>"),
        None => base,
    }
}

fn array_label(items: &SchemaModel) -> String {
    let inner = items
        .ref_name
        .as_deref()
        .or(items.title.as_deref())
        .unwrap_or(&items.type_name);
    format!("Array of {inner}")
}
