//! Canonical key indexing.

use crate::core::{IndexedEntry, IndexedTranslations, ParsedTranslations};

/// Assign 1-based indices to the default locale's keys in encounter order.
pub fn index_translations(default: &ParsedTranslations) -> IndexedTranslations {
    default
        .iter()
        .zip(1u32..)
        .map(|((key, entry), index)| {
            (
                key.clone(),
                IndexedEntry::new(entry.text.clone(), index, entry.untranslatable),
            )
        })
        .collect()
}
