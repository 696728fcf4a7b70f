use indexmap::IndexMap;

/// Position information in translation files.
///
/// Represents a specific location in a `.yml` translation file, used for
/// reporting diagnostics against individual keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MessageLocation {
    /// Path to the translation file (e.g., "./translations/polish.yml").
    pub file_path: String,
    /// Line number (1-indexed). `0` means the diagnostic has no line,
    /// e.g. a key that is missing from the file altogether.
    pub line: usize,
    /// Column number (1-indexed, `0` when there is no line).
    pub col: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }

    /// Create with default column (1).
    pub fn with_line(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col: 1,
        }
    }

    /// Create a zero-width location pointing at the file itself.
    pub fn file_only(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            line: 0,
            col: 0,
        }
    }

    /// Create from a 0-based line index as stored in [`LocalizedEntry`].
    pub fn from_line_index(file_path: impl Into<String>, line_index: usize) -> Self {
        Self::with_line(file_path, line_index + 1)
    }

    pub fn has_line(&self) -> bool {
        self.line > 0
    }
}

/// Position with context information in translation files.
///
/// Carries the translation file name (used for matching providers and in
/// messages) and the offending key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    pub location: MessageLocation,
    /// File name without directories (e.g., "polish.yml").
    pub file_name: String,
    /// The translation key (e.g., "greetings").
    pub key: String,
    /// Trimmed text of the offending line, when the location has one.
    pub source_line: Option<String>,
}

impl MessageContext {
    pub fn new(
        location: MessageLocation,
        file_name: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            location,
            file_name: file_name.into(),
            key: key.into(),
            source_line: None,
        }
    }

    pub fn with_source_line(mut self, source_line: impl Into<String>) -> Self {
        self.source_line = Some(source_line.into());
        self
    }

    // Convenience accessors
    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}

/// A single `key: value` line as read from a translation file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedEntry {
    /// Value with one layer of surrounding quotes removed.
    pub text: String,
    /// 0-based index of the line the entry was read from.
    pub line: usize,
    /// Set by a trailing `# untranslatable` comment.
    pub untranslatable: bool,
}

impl LocalizedEntry {
    pub fn new(text: impl Into<String>, line: usize, untranslatable: bool) -> Self {
        Self {
            text: text.into(),
            line,
            untranslatable,
        }
    }
}

/// An entry that has been assigned its stable numeric slot.
///
/// Indices are borrowed from the default locale, so the same key carries the
/// same index in every provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedEntry {
    pub text: String,
    /// 1-based resource id.
    pub index: u32,
    pub untranslatable: bool,
}

impl IndexedEntry {
    pub fn new(text: impl Into<String>, index: u32, untranslatable: bool) -> Self {
        Self {
            text: text.into(),
            index,
            untranslatable,
        }
    }
}

/// Parsed entries of one file, in encounter order of each key's first line.
pub type ParsedTranslations = IndexMap<String, LocalizedEntry>;

/// Indexed entries, in index order.
pub type IndexedTranslations = IndexMap<String, IndexedEntry>;

/// Every file's text for a key: `key -> (file name -> text)`.
///
/// Only used to render documentation on the generated table.
pub type AggregatedTranslations = IndexMap<String, IndexMap<String, String>>;
