//! Textloc - compile YAML translation files into typed Rust lookup tables
//!
//! Textloc reads one translation file per locale, assigns every key of the
//! default locale a stable numeric id, and generates Rust sources: one text
//! provider per locale, an accessor table falling back to the default locale
//! and an optional table of id constants. Key mismatches between locales are
//! reported as diagnostics.
//!
//! It runs as a CLI (`textloc generate`), from a build script
//! ([`build_script::generate_for_build_script`]) or as a library
//! ([`core::compile`], [`core::Session`]).
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: The compiler (parse, index, diff, emit)
//! - `issues`: Diagnostic type definitions and reporting
//! - `runtime`: Types the generated code links against
//! - `artifact_writer`: Write-if-changed sync of an output directory
//! - `build_script`: `build.rs` integration
//! - `utils`: Shared utility functions

pub mod artifact_writer;
pub mod build_script;
pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod runtime;
pub mod utils;
