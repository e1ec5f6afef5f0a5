//! # Render Module
//!
//! Turns [`SchemaModel`](crate::spec::SchemaModel) trees into HTML property
//! tables using Askama templates from `templates/`.
//!
//! ## Structure
//!
//! ```text
//! render_document
//!   └─ SchemaRenderer::render_object_schema   (object_schema.html)
//!        ├─ render_field                      (field_row.html)
//!        │    └─ render_object_schema         (nested, level + 1)
//!        └─ render_oneof                      (oneof.html)
//!             └─ render_field …
//! ```
//!
//! Rows are rendered bottom-up into strings and inserted unescaped into the
//! parent template; every text value coming from the document goes through
//! Askama's HTML escaping.
//!
//! ## Expansion
//!
//! Nested tables sit in a `<details>` element which is `open` when the field
//! is expanded by default (see [`crate::fields::expand_by_default`]), carries
//! the `x-expanded` hint, or lies on the active selector path.

mod page;
mod schema;
mod templates;

pub use page::*;
pub use schema::*;
pub use templates::*;
