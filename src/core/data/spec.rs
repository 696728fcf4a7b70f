use serde::{Deserialize, Serialize};

/// One locale provider declaration.
///
/// Each provider is backed by exactly one translation file, matched by file
/// name. Exactly one provider of a build is the default locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSpec {
    /// Module path the generated provider is included into (e.g., "crate::l10n").
    #[serde(default)]
    pub namespace: String,
    /// Name of the generated provider struct.
    pub class_name: String,
    /// File name of the backing translation file (e.g., "english.yml").
    pub filename: String,
    #[serde(default)]
    pub is_default: bool,
}

impl ProviderSpec {
    pub fn new(
        namespace: impl Into<String>,
        class_name: impl Into<String>,
        filename: impl Into<String>,
        is_default: bool,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            class_name: class_name.into(),
            filename: filename.into(),
            is_default,
        }
    }
}

/// The fallback table declaration. A build has at most one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSpec {
    #[serde(default)]
    pub namespace: String,
    /// User type the table accessor is attached to (e.g., "Localization").
    pub class_name: String,
    /// Method on `class_name` returning the provider of the current locale.
    #[serde(alias = "currentProviderAccessor")]
    pub current_accessor: String,
    /// Method on `class_name` returning the default provider.
    #[serde(alias = "defaultProviderAccessor")]
    pub default_accessor: String,
    /// Name of the generated table accessor method.
    #[serde(default = "default_table_name")]
    pub table_name: String,
    /// Attach per-key documentation listing every locale's text.
    #[serde(default = "default_generate_docs")]
    pub generate_docs: bool,
    /// When set, also generate a standalone resource id table with this name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_class_name: Option<String>,
}

fn default_table_name() -> String {
    "Table".to_string()
}

fn default_generate_docs() -> bool {
    true
}

impl TableSpec {
    pub fn new(
        namespace: impl Into<String>,
        class_name: impl Into<String>,
        current_accessor: impl Into<String>,
        default_accessor: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            class_name: class_name.into(),
            current_accessor: current_accessor.into(),
            default_accessor: default_accessor.into(),
            table_name: default_table_name(),
            generate_docs: default_generate_docs(),
            id_class_name: None,
        }
    }

    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    pub fn with_docs(mut self, generate_docs: bool) -> Self {
        self.generate_docs = generate_docs;
        self
    }

    pub fn with_id_class(mut self, id_class_name: impl Into<String>) -> Self {
        self.id_class_name = Some(id_class_name.into());
        self
    }

    /// The identifier-valued fields, labelled for diagnostics.
    pub fn identifiers(&self) -> [(&'static str, &str); 4] {
        [
            ("className", &self.class_name),
            ("currentAccessor", &self.current_accessor),
            ("defaultAccessor", &self.default_accessor),
            ("tableName", &self.table_name),
        ]
    }
}

/// Raw content of one translation file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranslationFile {
    /// Path as discovered (used in diagnostics).
    pub path: String,
    /// File name without directories (matched against `ProviderSpec::filename`).
    pub name: String,
    pub text: String,
}

impl TranslationFile {
    pub fn new(path: impl Into<String>, name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            text: text.into(),
        }
    }

    /// Build from a path, taking the file name from its last component.
    pub fn from_path(path: impl Into<String>, text: impl Into<String>) -> Self {
        let path = path.into();
        let name = std::path::Path::new(&path)
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.clone());
        Self::new(path, name, text)
    }
}
