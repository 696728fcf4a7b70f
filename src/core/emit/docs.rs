//! Per-key documentation blocks listing every locale's text.

use indexmap::IndexMap;

use crate::core::IndexedEntry;

const UNTRANSLATABLE_NOTE: &str = "*Marked as untranslatable*";

/// Doc lines for one key.
///
/// Translatable keys get a markdown table with a row per file that supplied a
/// text; untranslatable keys get a note followed by the default text.
pub fn key_docs(
    entry: &IndexedEntry,
    translations: Option<&IndexMap<String, String>>,
) -> Vec<String> {
    if entry.untranslatable {
        return vec![
            UNTRANSLATABLE_NOTE.to_string(),
            String::new(),
            escape_markdown(&entry.text),
        ];
    }

    let mut lines = vec![
        "| File | Translation |".to_string(),
        "| --- | --- |".to_string(),
    ];
    for (file_name, text) in translations.into_iter().flatten() {
        lines.push(format!(
            "| {} | {} |",
            escape_markdown(file_name),
            escape_markdown(text)
        ));
    }
    lines
}

/// Backslash-escape the characters that would end a table cell or start a
/// code span or an intra-doc link.
fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '|' | '`' | '[' | ']') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
