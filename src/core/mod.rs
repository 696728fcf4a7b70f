//! The translation compiler.
//!
//! ## Module Structure
//!
//! - `data`: Entries, build inputs and locations shared by every stage
//! - `parsers`: Translation file parsing and discovery
//! - `index`: Canonical key indexing of the default locale
//! - `diff`: Secondary locale vs default locale comparison
//! - `emit`: Generated Rust source for providers and tables
//! - `pipeline`: The pure build function
//! - `session`: Incremental builds over changing inputs
//! - `context`: Project-level driver (config + file discovery)

pub mod context;
pub mod data;
pub mod diff;
pub mod emit;
pub mod index;
pub mod parsers;
pub mod pipeline;
pub mod session;

pub use data::*;
pub use pipeline::{BuildInput, BuildOutput, compile};
pub use session::{BuildDelta, Session};
