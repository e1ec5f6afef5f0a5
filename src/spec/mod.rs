//! # Spec Module
//!
//! Loads OpenAPI 3.x documents and turns `components.schemas` into the
//! [`SchemaModel`] / [`FieldModel`] tree the renderer consumes.
//!
//! ## Vendor extensions
//!
//! - `x-protobuf-oneof` on a property marks membership of a protobuf oneof
//!   group. Properties sharing the value are rendered as one "One of" block.
//! - `x-expanded: true` on a property sets the advisory expanded hint.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use schemadoc::spec::{build_schema, load_spec};
//!
//! let spec = load_spec("openapi.yaml")?;
//! let pet = build_schema(&spec, "Pet")?;
//! println!("{} fields", pet.fields.len());
//! ```

mod build;
mod load;
mod types;

pub use build::*;
pub use load::*;
pub use types::*;
