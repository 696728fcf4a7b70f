use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use glob::Pattern;
use walkdir::WalkDir;

use crate::core::{LocalizedEntry, ParsedTranslations, TranslationFile};

/// Comment that marks an entry as untranslatable (compared case-insensitively).
const UNTRANSLATABLE_MARKER: &str = "untranslatable";

/// A warning from scanning translation files.
#[derive(Debug, Clone)]
pub struct TranslationScanWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ScanTranslationsResult {
    pub files: Vec<TranslationFile>,
    pub warnings: Vec<TranslationScanWarning>,
}

/// Parse the text of one translation file.
///
/// Only flat `key: value` lines are understood. Blank lines and lines starting
/// with `#` are skipped, as are lines without an unquoted colon. When a key
/// repeats, the later value wins but the key keeps its first position.
pub fn parse_translations(text: &str) -> ParsedTranslations {
    let mut entries = ParsedTranslations::new();
    for (line_index, line) in text.lines().enumerate() {
        if let Some((key, entry)) = parse_line(line, line_index) {
            entries.insert(key, entry);
        }
    }
    entries
}

fn parse_line(line: &str, line_index: usize) -> Option<(String, LocalizedEntry)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let colon = find_unquoted(line, ':')?;
    let key = line[..colon].trim_end();

    let rest = &line[colon + 1..];
    let (value, comment) = match find_unquoted(rest, '#') {
        Some(hash) => (&rest[..hash], Some(rest[hash + 1..].trim())),
        None => (rest, None),
    };
    let untranslatable =
        comment.is_some_and(|comment| comment.eq_ignore_ascii_case(UNTRANSLATABLE_MARKER));

    Some((
        key.to_string(),
        LocalizedEntry::new(unquote(value.trim()), line_index, untranslatable),
    ))
}

/// Byte offset of the first `needle` outside single or double quotes.
///
/// A quote of one kind is literal while inside a quote of the other kind.
fn find_unquoted(text: &str, needle: char) -> Option<usize> {
    let mut in_single = false;
    let mut in_double = false;
    for (i, c) in text.char_indices() {
        match c {
            '\'' if !in_double => in_single = !in_single,
            '"' if !in_single => in_double = !in_double,
            c if c == needle && !in_single && !in_double => return Some(i),
            _ => {}
        }
    }
    None
}

/// Strip one layer of matching surrounding quotes.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Returns true for `.yml` and `.yaml` files.
pub fn is_translation_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml") | Some("yaml")
    )
}

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Collect every translation file under `root`, sorted by path.
///
/// Ignore patterns are relative to `root`: glob patterns match the relative
/// path, literal patterns match as a path prefix. Files that cannot be read
/// are reported as warnings instead of failing the scan.
pub fn scan_translation_files(
    root: impl AsRef<Path>,
    ignores: &[String],
) -> Result<ScanTranslationsResult> {
    let root = root.as_ref();
    let mut result = ScanTranslationsResult::default();

    if !root.exists() {
        bail!(
            "Translations directory '{}' does not exist.\n\
             Hint: Check your .textlocrc.json 'translationsRoot' setting.",
            root.display()
        );
    }

    if !root.is_dir() {
        bail!("'{}' is not a directory.", root.display());
    }

    let mut literal_ignores: Vec<PathBuf> = Vec::new();
    let mut glob_ignores: Vec<Pattern> = Vec::new();
    for p in ignores {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_ignores.push(pattern),
                Err(e) => tracing::warn!(pattern = %p, error = %e, "invalid ignore pattern"),
            }
        } else {
            literal_ignores.push(root.join(p));
        }
    }

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.warnings.push(TranslationScanWarning {
                    file_path: e
                        .path()
                        .map(|p| p.to_string_lossy().to_string())
                        .unwrap_or_else(|| root.to_string_lossy().to_string()),
                    error: e.to_string(),
                });
                continue;
            }
        };
        let path = entry.path();

        if literal_ignores.iter().any(|ignore| path.starts_with(ignore)) {
            continue;
        }
        let relative = path.strip_prefix(root).unwrap_or(path);
        if glob_ignores
            .iter()
            .any(|p| p.matches_path(relative) || p.matches_path(path))
        {
            tracing::debug!(path = %path.display(), "ignored");
            continue;
        }

        if !entry.file_type().is_file() || !is_translation_file(path) {
            continue;
        }

        let path_str = path.to_string_lossy().to_string();
        match fs::read_to_string(path) {
            Ok(text) => {
                tracing::trace!(path = %path_str, bytes = text.len(), "read translation file");
                result.files.push(TranslationFile::from_path(path_str, text));
            }
            Err(e) => result.warnings.push(TranslationScanWarning {
                file_path: path_str,
                error: format!("Failed to read translation file: {}", e),
            }),
        }
    }

    Ok(result)
}
