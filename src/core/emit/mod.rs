//! Rust source generation for providers, the fallback table and the id table.
//!
//! Every artifact is a self-contained fragment meant for `include!`. Generated
//! code only refers to the runtime through absolute `::textloc::runtime` paths
//! and declares no `use` items, so several artifacts can share one module.
//!
//! ## Module Structure
//!
//! - `provider`: one struct per locale, lookup by resource id
//! - `table`: accessor per key with current -> default fallback
//! - `id_table`: standalone resource id constants
//! - `docs`: per-key documentation blocks
//! - `writer`: indentation-aware line builder

pub mod docs;
pub mod id_table;
pub mod provider;
pub mod table;
pub mod writer;

pub use id_table::emit_id_table;
pub use provider::emit_provider;
pub use table::{emit_table, is_accessor_name, table_type_name};

use crate::utils::to_snake_case;
use writer::SourceWriter;

/// Path of the runtime module as seen from generated code.
pub const RUNTIME_PATH: &str = "::textloc::runtime";

/// First line of every generated artifact.
pub const GENERATED_HEADER: &str = "// @generated by textloc. Do not edit.";

/// Whether a provider is the fallback target of the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// Unknown ids are a programming error.
    Default,
    /// Unknown ids yield `None` so the table can fall back.
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Provider(ProviderKind),
    Table,
    IdTable,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactKind::Provider(ProviderKind::Default) => write!(f, "default provider"),
            ArtifactKind::Provider(ProviderKind::Secondary) => write!(f, "provider"),
            ArtifactKind::Table => write!(f, "table"),
            ArtifactKind::IdTable => write!(f, "id table"),
        }
    }
}

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Output file name (e.g., "english_text_provider.rs").
    pub name: String,
    pub kind: ArtifactKind,
    /// Name of the main type the artifact defines.
    pub type_name: String,
    pub contents: String,
}

impl Artifact {
    fn new(kind: ArtifactKind, type_name: impl Into<String>, contents: String) -> Self {
        let type_name = type_name.into();
        Self {
            name: artifact_name(&type_name),
            kind,
            type_name,
            contents,
        }
    }
}

/// File name of the artifact defining `type_name`.
pub fn artifact_name(type_name: &str) -> String {
    format!("{}.rs", to_snake_case(type_name))
}

fn write_header(w: &mut SourceWriter, namespace: &str, source: Option<&str>) {
    w.line(GENERATED_HEADER);
    if let Some(source) = source {
        w.line(format!("// Source: {}", source));
    }
    if !namespace.is_empty() {
        w.line(format!("// Module: {}", namespace));
    }
    w.blank();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_name() {
        assert_eq!(artifact_name("EnglishTextProvider"), "english_text_provider.rs");
        assert_eq!(artifact_name("LocalizationTable"), "localization_table.rs");
        assert_eq!(artifact_name("R"), "r.rs");
    }

    #[test]
    fn test_artifact_kind_display() {
        assert_eq!(
            ArtifactKind::Provider(ProviderKind::Default).to_string(),
            "default provider"
        );
        assert_eq!(ArtifactKind::IdTable.to_string(), "id table");
    }
}
