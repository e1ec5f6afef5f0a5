//! # Render Options Module
//!
//! Display options for rendering schema tables, layered from defaults, an
//! optional config file and environment variables. CLI flags are applied on
//! top by the caller.
//!
//! ## Environment Variables
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `SCHEMADOC_EXPAND_SINGLE_FIELD` | `expand_single_schema_field` | `false` |
//! | `SCHEMADOC_SHOW_EXAMPLES` | `show_object_schema_examples` | `false` |
//! | `SCHEMADOC_EXPANSION_LEVEL` | `schema_expansion_level` | `0` |
//! | `SCHEMADOC_SKIP_READ_ONLY` | `skip_read_only` | `false` |
//! | `SCHEMADOC_SKIP_WRITE_ONLY` | `skip_write_only` | `false` |
//!
//! Unparseable values are ignored and the previous value is kept.
//!
//! ## Config file
//!
//! ```yaml
//! expand_single_schema_field: true
//! schema_expansion_level: 2
//! skip_read_only: true
//! ```
//!
//! The same keys are accepted in TOML when the file ends in `.toml`.

use crate::error::DocError;
use crate::fields::{ExpansionPolicy, FieldFilter};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::warn;

/// Options consulted while rendering an object schema tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Expand a field when it is the only item of its object
    pub expand_single_schema_field: bool,
    /// Show `example` values next to fields
    pub show_object_schema_examples: bool,
    /// Expand every nesting level up to this one (top level is 1)
    pub schema_expansion_level: u32,
    /// Hide `readOnly` fields (request bodies)
    pub skip_read_only: bool,
    /// Hide `writeOnly` fields (responses)
    pub skip_write_only: bool,
    /// Render the schema title as table caption
    pub show_title: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            expand_single_schema_field: false,
            show_object_schema_examples: false,
            schema_expansion_level: 0,
            skip_read_only: false,
            skip_write_only: false,
            show_title: true,
        }
    }
}

impl RenderOptions {
    /// Defaults overridden by environment variables.
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    /// Read options from a YAML or TOML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
        let options = match ext {
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            "toml" => toml::from_str(&content)?,
            "json" => serde_json::from_str(&content)?,
            _ => {
                return Err(DocError::UnsupportedFormat {
                    path: path.display().to_string(),
                }
                .into())
            }
        };
        Ok(options)
    }

    /// Config file (when given) with environment overrides applied.
    pub fn load(config: Option<&Path>) -> anyhow::Result<Self> {
        let base = match config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_env())
    }

    /// Apply environment overrides on top of `self`.
    pub fn with_env(self) -> Self {
        self.with_vars(|key| env::var(key).ok())
    }

    fn with_vars<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str, current: bool| match lookup(key) {
            Some(val) => parse_bool(&val).unwrap_or_else(|| {
                warn!(variable = key, value = %val, "ignoring invalid boolean");
                current
            }),
            None => current,
        };

        self.expand_single_schema_field =
            flag("SCHEMADOC_EXPAND_SINGLE_FIELD", self.expand_single_schema_field);
        self.show_object_schema_examples =
            flag("SCHEMADOC_SHOW_EXAMPLES", self.show_object_schema_examples);
        self.skip_read_only = flag("SCHEMADOC_SKIP_READ_ONLY", self.skip_read_only);
        self.skip_write_only = flag("SCHEMADOC_SKIP_WRITE_ONLY", self.skip_write_only);

        if let Some(val) = lookup("SCHEMADOC_EXPANSION_LEVEL") {
            match val.trim().parse() {
                Ok(level) => self.schema_expansion_level = level,
                Err(_) => warn!(value = %val, "ignoring invalid SCHEMADOC_EXPANSION_LEVEL"),
            }
        }
        self
    }

    pub fn expansion(&self) -> ExpansionPolicy {
        ExpansionPolicy {
            expand_single_schema_field: self.expand_single_schema_field,
            schema_expansion_level: self.schema_expansion_level,
        }
    }

    pub fn filter(&self) -> FieldFilter {
        FieldFilter {
            skip_read_only: self.skip_read_only,
            skip_write_only: self.skip_write_only,
        }
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
