//! # CLI Module
//!
//! Command-line interface of the `schemadoc` binary.
//!
//! ## Commands
//!
//! ### `render`
//!
//! Render component schemas to a standalone HTML page:
//!
//! ```bash
//! schemadoc render --spec openapi.yaml --schema Payment --output payment.html
//! ```
//!
//! Options:
//! - `--spec <FILE>` - Path to OpenAPI specification (required)
//! - `--schema <NAME>` - Schema to render, repeatable (default: all)
//! - `--selector <PATH>` - Dotted path narrowing oneof groups, e.g. `card.three-ds`
//! - `--output <FILE>` - Output file (default: stdout)
//!
//! ### `inspect`
//!
//! Print the grouped field tree as indented text:
//!
//! ```bash
//! schemadoc inspect --spec openapi.yaml --schema Payment --selector method
//! ```
//!
//! ### `watch`
//!
//! Re-render the output file whenever the spec changes:
//!
//! ```bash
//! schemadoc watch --spec openapi.yaml --output docs/schemas.html
//! ```
//!
//! ## Display flags
//!
//! All commands accept `--config`, `--skip-read-only`, `--skip-write-only`,
//! `--expansion-level`, `--expand-single-field`, `--show-examples` and
//! `--no-title`. They are applied on top of the config file and the
//! `SCHEMADOC_*` environment variables (see [`crate::options`]).

mod commands;


pub use commands::{inspect_schema, run, run_cli, Cli, Commands, DisplayArgs};
