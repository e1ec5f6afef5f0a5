//! # schemadoc
//!
//! **schemadoc** renders the object schemas of an [OpenAPI 3.x](https://spec.openapis.org/oas/v3.1.0)
//! document, including schemas transcoded from protobuf, as nested HTML property tables.
//!
//! ## Overview
//!
//! Protobuf `oneof` fields survive transcoding to OpenAPI only as sibling
//! properties tagged with the `x-protobuf-oneof` vendor extension. schemadoc
//! puts those siblings back together: every object table shows standalone
//! fields and "One of" blocks in document order, and a dotted selector path
//! can narrow each block to a single branch.
//!
//! ## Architecture
//!
//! - **[`spec`]** - OpenAPI loading and `SchemaModel` / `FieldModel` building
//! - **[`fields`]** - Field grouping, selector resolution, default expansion
//! - **[`render`]** - Askama based HTML rendering
//! - **[`options`]** - Render options from config file and environment
//! - **[`cli`]** - The `schemadoc` command line
//! - **[`hot_reload`]** - Re-render on spec changes
//! - **[`logging`]** - `tracing` subscriber setup
//!
//! ### Render Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant CLI as CLI<br/>(schemadoc)
//!     participant Spec as spec::load_spec
//!     participant Build as spec::build_schema
//!     participant Fields as fields::group_fields
//!     participant Render as render::SchemaRenderer
//!
//!     CLI->>Spec: load_spec("openapi.yaml")
//!     Spec-->>CLI: LoadedSpec
//!     CLI->>Build: build_schema(&spec, "Payment")
//!     Build->>Build: Resolve $ref, merge allOf,<br/>read x-protobuf-oneof
//!     Build-->>CLI: SchemaModel
//!     CLI->>Render: render_object_schema(&schema, props)
//!     Render->>Fields: group_fields(fields, filter, selector)
//!     Fields-->>Render: Vec<FieldItem>
//!     Render->>Render: field rows / One of blocks,<br/>recurse into nested objects
//!     Render-->>CLI: HTML
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use schemadoc::{load_spec, render_document, RenderOptions};
//!
//! let spec = load_spec("openapi.yaml").expect("Failed to load spec");
//! let options = RenderOptions::from_env();
//! let html = render_document(&spec, &["Payment".to_string()], Some("card.three-ds"), &options)
//!     .expect("Failed to render");
//! std::fs::write("payment.html", html).expect("Failed to write");
//! ```
//!
//! ## Grouping Example
//!
//! ```
//! use schemadoc::fields::{group_fields, FieldFilter, FieldItem, SelectorPath};
//! use schemadoc::spec::{FieldModel, SchemaModel};
//!
//! let field = |name: &str, oneof: Option<&str>| FieldModel {
//!     name: name.to_string(),
//!     schema: SchemaModel { oneof: oneof.map(String::from), ..Default::default() },
//!     ..Default::default()
//! };
//! let fields = vec![field("a", None), field("b", Some("1")), field("c", Some("1"))];
//!
//! let items = group_fields(&fields, FieldFilter::default(), None);
//! assert!(matches!(&items[1], FieldItem::Oneof(g) if g.items.len() == 2));
//!
//! let items = group_fields(&fields, FieldFilter::default(), SelectorPath::parse("c"));
//! assert_eq!(items[1].as_single_field().map(|f| f.name.as_str()), Some("c"));
//! ```

pub mod cli;
pub mod error;
pub mod fields;
pub mod hot_reload;
pub mod logging;
pub mod options;
pub mod render;
pub mod spec;

pub use error::DocError;
pub use fields::{group_fields, FieldFilter, FieldItem, OneofGroup, SelectorPath};
pub use options::RenderOptions;
pub use render::{render_document, SchemaRenderer};
pub use spec::{build_schema, load_spec, FieldModel, LoadedSpec, SchemaModel};
