use super::types::{LoadedSpec, SpecFormat};
use crate::error::DocError;
use oas3::OpenApiV3Spec;
use serde_json::Value;
use tracing::{debug, warn};

pub(crate) fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .replace(|c: char| !c.is_ascii_alphanumeric(), "_")
        .trim_matches('_')
        .to_string()
}

/// Load an OpenAPI document from disk.
///
/// `.yaml` / `.yml` files are parsed as YAML, everything else as JSON.
pub fn load_spec(file_path: &str) -> anyhow::Result<LoadedSpec> {
    let content = std::fs::read_to_string(file_path)?;
    debug!(path = file_path, bytes = content.len(), "read spec file");
    load_spec_from_str(&content, SpecFormat::from_path(file_path))
}

/// Parse and validate an OpenAPI document held in memory.
pub fn load_spec_from_str(content: &str, format: SpecFormat) -> anyhow::Result<LoadedSpec> {
    let value: Value = match format {
        SpecFormat::Yaml => serde_yaml::from_str(content)?,
        SpecFormat::Json => serde_json::from_str(content)?,
    };
    load_spec_from_value(value)
}

/// Validate an already parsed JSON tree as OpenAPI and wrap it.
///
/// Only the document header is required: an `openapi` version starting with
/// `3.` and `info.title` / `info.version`. Full OpenAPI 3.1 validation runs
/// afterwards and only warns, so 3.0 keyword forms still load.
pub fn load_spec_from_value(value: Value) -> anyhow::Result<LoadedSpec> {
    let openapi = header_field(&value, "/openapi")?;
    if !openapi.starts_with("3.") {
        return Err(invalid(format!("unsupported OpenAPI version `{openapi}`")).into());
    }
    let title = header_field(&value, "/info/title")?;
    let version = header_field(&value, "/info/version")?;

    if let Err(e) = serde_json::from_value::<OpenApiV3Spec>(value.clone()) {
        warn!(openapi = %openapi, error = %e, "document does not pass OpenAPI 3.1 validation");
    }

    let slug = slugify(&title);
    debug!(title = %title, version = %version, "loaded OpenAPI document");

    Ok(LoadedSpec {
        document: value,
        title,
        version,
        slug,
    })
}

fn invalid(reason: String) -> DocError {
    DocError::InvalidDocument { reason }
}

/// Read a string header value; YAML may type an unquoted version as a number.
fn header_field(value: &Value, pointer: &str) -> Result<String, DocError> {
    match value.pointer(pointer) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(_) => Err(invalid(format!("`{pointer}` must be a string"))),
        None => Err(invalid(format!("missing `{pointer}`"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"openapi: 3.1.0
info:
  title: Pet Store API
  version: '1.2'
paths: {}
components:
  schemas:
    Zebra:
      type: object
    Apple:
      type: object
"#;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Pet Store API!"), "pet_store_api");
    }

    #[test]
    fn test_load_yaml_keeps_schema_order() {
        let spec = load_spec_from_str(MINIMAL, SpecFormat::Yaml).unwrap();
        assert_eq!(spec.title, "Pet Store API");
        assert_eq!(spec.version, "1.2");
        assert_eq!(spec.slug, "pet_store_api");
        assert_eq!(spec.schema_names(), vec!["Zebra", "Apple"]);
    }

    #[test]
    fn test_invalid_document() {
        let err = load_spec_from_str(r#"{"openapi": "3.1.0"}"#, SpecFormat::Json).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DocError>(),
            Some(DocError::InvalidDocument { .. })
        ));
    }

    #[test]
    fn test_openapi_30_keywords_load() {
        let doc = r#"openapi: 3.0.3
info:
  title: Legacy
  version: '1'
paths: {}
components:
  schemas:
    Quota:
      type: object
      properties:
        limit:
          type: integer
          minimum: 0
          exclusiveMinimum: true
          nullable: true
"#;
        let spec = load_spec_from_str(doc, SpecFormat::Yaml).unwrap();
        assert_eq!(spec.title, "Legacy");
        assert_eq!(spec.schema_names(), vec!["Quota"]);
    }

    #[test]
    fn test_non_v3_document_rejected() {
        let doc = "swagger: '2.0'\ninfo:\n  title: Old\n  version: '1'\n";
        let err = load_spec_from_str(doc, SpecFormat::Yaml).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DocError>(),
            Some(DocError::InvalidDocument { .. })
        ));

        let doc = "openapi: 2.0.0\ninfo:\n  title: Old\n  version: '1'\n";
        assert!(load_spec_from_str(doc, SpecFormat::Yaml).is_err());
    }

    #[test]
    fn test_numeric_version_accepted() {
        let doc = "openapi: 3.1.0\ninfo:\n  title: Numbers\n  version: 2\npaths: {}\n";
        let spec = load_spec_from_str(doc, SpecFormat::Yaml).unwrap();
        assert_eq!(spec.version, "2");
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(SpecFormat::from_path("a/openapi.yml"), SpecFormat::Yaml);
        assert_eq!(SpecFormat::from_path("openapi.json"), SpecFormat::Json);
    }
}
