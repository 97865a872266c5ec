#![forbid(unsafe_code)]
#![deny(warnings, unused_must_use, dead_code, missing_debug_implementations)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! Client model code generator.
//!
//! Takes parsed API model descriptors, resolves `all-of` composition into
//! flattened property and enum lists, and writes one templated source file
//! per model. The pipeline is:
//! 1. Parse: descriptor JSON -> `Model` list (or build models in memory)
//! 2. Resolve: flatten every composition model against the full set
//! 3. Render: model -> source text through a named tera binding
//! 4. Write: format, indent, and persist one file per non-empty model
//!
//! The separation allows:
//! - All composition/reference indirection resolved in one pure step
//! - Template rendering treated as an external collaborator
//! - Emission as plain sequential awaited writes

mod format;
mod model;
mod resolver;
mod templates;
mod writer;

pub use format::{Indent, format_code, format_indentation};
pub use model::{EnumEntry, EnumGroup, EnumValue, ExportKind, Model, parse_models};
pub use resolver::{ModelIndex, Resolved, apply_compositions, resolve};
pub use templates::Templates;
pub use writer::{WriteOptions, mark_all_of_references, write_models};
