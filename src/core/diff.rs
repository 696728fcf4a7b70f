//! Cross-locale comparison of a secondary locale against the default one.

use crate::core::{
    IndexedEntry, IndexedTranslations, MessageContext, MessageLocation, ParsedTranslations,
    TranslationFile,
};
use crate::issues::{ExtraKeyIssue, Issue, MissingKeyIssue, UntranslatableTranslatedIssue};

/// Reindexed entries of one secondary locale plus what was wrong with it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DiffResult {
    pub entries: IndexedTranslations,
    pub issues: Vec<Issue>,
}

/// Re-express `secondary` with the indices of `canonical`.
///
/// `file` is the secondary file (for diagnostics) and `default_file` the name
/// of the default locale's file. Keys missing from `canonical` never receive an
/// index; translations of untranslatable keys are dropped.
pub fn diff_translations(
    canonical: &IndexedTranslations,
    secondary: &ParsedTranslations,
    file: &TranslationFile,
    default_file: &str,
) -> DiffResult {
    let mut result = DiffResult::default();

    for (key, default_entry) in canonical {
        match (secondary.get(key), default_entry.untranslatable) {
            (Some(entry), false) => {
                let text = entry.text.clone();
                let reindexed = IndexedEntry::new(text, default_entry.index, entry.untranslatable);
                result.entries.insert(key.clone(), reindexed);
            }
            (Some(entry), true) => {
                result
                    .issues
                    .push(Issue::UntranslatableTranslated(UntranslatableTranslatedIssue {
                        context: line_context(file, key, entry.line),
                        default_file: default_file.to_string(),
                    }));
            }
            (None, false) => {
                result.issues.push(Issue::MissingKey(MissingKeyIssue {
                    context: MessageContext::new(
                        MessageLocation::file_only(&file.path),
                        &file.name,
                        key,
                    ),
                }));
            }
            (None, true) => {}
        }
    }

    for (key, entry) in secondary {
        if !canonical.contains_key(key) {
            result.issues.push(Issue::ExtraKey(ExtraKeyIssue {
                context: line_context(file, key, entry.line),
                default_file: default_file.to_string(),
            }));
        }
    }

    result
}

fn line_context(file: &TranslationFile, key: &str, line_index: usize) -> MessageContext {
    let context = MessageContext::new(
        MessageLocation::from_line_index(&file.path, line_index),
        &file.name,
        key,
    );
    match file.text.lines().nth(line_index) {
        Some(source_line) => context.with_source_line(source_line.trim()),
        None => context,
    }
}
