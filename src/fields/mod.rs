//! # Fields Module
//!
//! Shapes the properties of one object schema into rendering units.
//!
//! ## Overview
//!
//! A render pass over an object's fields:
//!
//! 1. **Filter** - drop read-only / write-only fields when asked to
//! 2. **Group** - fields sharing an `x-protobuf-oneof` id become one
//!    [`OneofGroup`] at the position of the first member
//! 3. **Select** - an optional [`SelectorPath`] narrows a group to one branch
//! 4. **Expand** - [`expand_by_default`] decides whether nested detail starts open
//!
//! ```text
//! [a, b(oneof 1), c(oneof 1)]            → [Field(a), Oneof[b, c]]
//! [a, b(oneof 1), c(oneof 1)] + "c"      → [Field(a), Oneof[c]]
//! ```
//!
//! Grouping borrows from the schema model and allocates only the output
//! vector, so it is recomputed on every pass instead of cached.
//!
//! ## Selector matching
//!
//! Segments compare through [`normalize_name`]: case is ignored and `-` / `_`
//! separators are dropped, so `FooBar`, `foo_bar` and `foo-bar` are the same
//! segment.

mod grouping;
mod selector;
#[cfg(test)]
mod tests;

pub use grouping::*;
pub use selector::*;
