//! Core data types used across all pipeline stages.
//!
//! ## Module Structure
//!
//! - `message`: Translation entries and their locations (LocalizedEntry, IndexedEntry, MessageLocation)
//! - `spec`: Build inputs (ProviderSpec, TableSpec, TranslationFile)

pub mod message;
pub mod spec;

pub use message::{
    AggregatedTranslations, IndexedEntry, IndexedTranslations, LocalizedEntry, MessageContext,
    MessageLocation, ParsedTranslations,
};
pub use spec::{ProviderSpec, TableSpec, TranslationFile};
