//! Translation file parsing.
//!
//! - `yaml`: flat `key: value` parser and translation file discovery

pub mod yaml;
