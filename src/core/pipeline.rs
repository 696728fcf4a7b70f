//! The build: `(files, providers, tables) -> (artifacts, diagnostics)`.
//!
//! ```text
//! ┌───────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ match specs   │ → │ parse files  │ → │ index + diff │ → │ emit sources │
//! │ to files      │   │ (parallel)   │   │              │   │              │
//! └───────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//! ```
//!
//! The build is a pure function of its inputs. Nothing here fails: every
//! problem becomes a diagnostic and at worst an artifact is not generated.

use std::sync::Arc;

use indexmap::IndexMap;
use rayon::prelude::*;

use crate::core::{
    AggregatedTranslations, MessageContext, MessageLocation, ParsedTranslations, ProviderSpec,
    TableSpec, TranslationFile,
    diff::diff_translations,
    emit::{
        Artifact, ProviderKind, emit_id_table, emit_provider, emit_table, is_accessor_name,
        table_type_name,
    },
    index::index_translations,
    parsers::yaml::parse_translations,
};
use crate::issues::{
    DuplicateArtifactIssue, InvalidIdentifierIssue, Issue, MultipleDefaultProvidersIssue,
    MultipleTablesIssue, NoDefaultProviderIssue, Severity, UnmatchedProviderIssue,
};
use crate::utils::is_valid_identifier;

/// Everything a build needs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildInput {
    pub files: Vec<TranslationFile>,
    pub providers: Vec<ProviderSpec>,
    pub tables: Vec<TableSpec>,
}

/// Everything a build produces.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildOutput {
    /// Providers in declaration order, then the table, then the id table.
    pub artifacts: Vec<Artifact>,
    pub diagnostics: Vec<Issue>,
}

impl BuildOutput {
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn artifact(&self, name: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.name == name)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == severity)
            .count()
    }
}

/// Run a complete build.
pub fn compile(input: &BuildInput) -> BuildOutput {
    compile_with(&input.files, &input.providers, &input.tables, |file| {
        Arc::new(parse_translations(&file.text))
    })
}

/// A provider joined with its translation file.
struct MatchedProvider<'a> {
    spec: &'a ProviderSpec,
    file: &'a TranslationFile,
}

/// Build with a custom parse step, so callers can serve parses from a cache.
pub(crate) fn compile_with<F>(
    files: &[TranslationFile],
    providers: &[ProviderSpec],
    tables: &[TableSpec],
    parse: F,
) -> BuildOutput
where
    F: Fn(&TranslationFile) -> Arc<ParsedTranslations> + Sync,
{
    let mut diagnostics = Vec::new();

    let matched = match_providers(files, providers, &mut diagnostics);
    let table = select_table(tables, &mut diagnostics);

    let defaults: Vec<usize> = matched
        .iter()
        .enumerate()
        .filter(|(_, m)| m.spec.is_default)
        .map(|(i, _)| i)
        .collect();
    let default_pos = match defaults.as_slice() {
        [single] => *single,
        [] => {
            diagnostics.push(Issue::NoDefaultProvider(NoDefaultProviderIssue {
                provider_count: matched.len(),
            }));
            return BuildOutput {
                artifacts: Vec::new(),
                diagnostics,
            };
        }
        many => {
            diagnostics.push(Issue::MultipleDefaultProviders(
                MultipleDefaultProvidersIssue {
                    class_names: many
                        .iter()
                        .map(|&i| matched[i].spec.class_name.clone())
                        .collect(),
                },
            ));
            return BuildOutput {
                artifacts: Vec::new(),
                diagnostics,
            };
        }
    };

    let parsed: Vec<Arc<ParsedTranslations>> = matched.par_iter().map(|m| parse(m.file)).collect();
    tracing::debug!(files = parsed.len(), "parsed translation files");

    let default = &matched[default_pos];
    let default_parsed = &parsed[default_pos];
    let canonical = index_translations(default_parsed);
    tracing::debug!(
        keys = canonical.len(),
        file = %default.file.name,
        "indexed default locale"
    );

    let aggregated = aggregate(&matched, &parsed, default_pos);

    let mut artifacts = ArtifactSet::default();
    for (i, m) in matched.iter().enumerate() {
        let (kind, entries) = if i == default_pos {
            (ProviderKind::Default, canonical.clone())
        } else {
            let diff = diff_translations(&canonical, &parsed[i], m.file, &default.file.name);
            diagnostics.extend(diff.issues);
            (ProviderKind::Secondary, diff.entries)
        };

        if !is_valid_identifier(&m.spec.class_name) {
            diagnostics.push(Issue::InvalidIdentifier(InvalidIdentifierIssue {
                subject: format!("className of provider for {}", m.spec.filename),
                value: m.spec.class_name.clone(),
                context: None,
                skipped: "provider".to_string(),
            }));
            continue;
        }
        artifacts.push(
            emit_provider(m.spec, kind, &m.file.name, &entries),
            &mut diagnostics,
        );
    }

    if let Some(table) = table
        && table_is_valid(table, &mut diagnostics)
    {
        report_invalid_keys(default.file, default_parsed, &mut diagnostics);
        artifacts.push(emit_table(table, &canonical, &aggregated), &mut diagnostics);
        if let Some(id_class) = &table.id_class_name {
            if is_valid_identifier(id_class) {
                artifacts.push(
                    emit_id_table(table, id_class, &canonical, &aggregated),
                    &mut diagnostics,
                );
            } else {
                diagnostics.push(Issue::InvalidIdentifier(InvalidIdentifierIssue {
                    subject: format!("idClassName of table '{}'", table.class_name),
                    value: id_class.clone(),
                    context: None,
                    skipped: "id table".to_string(),
                }));
            }
        }
    }

    let artifacts = artifacts.into_vec();
    tracing::debug!(
        artifacts = artifacts.len(),
        diagnostics = diagnostics.len(),
        "build finished"
    );
    BuildOutput {
        artifacts,
        diagnostics,
    }
}

/// Join providers to files by file name, in provider declaration order.
///
/// When several files share a name, the first one (in input order) is used.
fn match_providers<'a>(
    files: &'a [TranslationFile],
    providers: &'a [ProviderSpec],
    diagnostics: &mut Vec<Issue>,
) -> Vec<MatchedProvider<'a>> {
    let mut by_name: IndexMap<&str, &TranslationFile> = IndexMap::new();
    for file in files {
        if by_name.contains_key(file.name.as_str()) {
            tracing::warn!(
                file = %file.path,
                "another translation file has the same name, ignored"
            );
            continue;
        }
        by_name.insert(&file.name, file);
    }

    let mut matched = Vec::with_capacity(providers.len());
    for spec in providers {
        match by_name.get(spec.filename.as_str()) {
            Some(file) => matched.push(MatchedProvider { spec, file }),
            None => diagnostics.push(Issue::UnmatchedProvider(UnmatchedProviderIssue {
                class_name: spec.class_name.clone(),
                filename: spec.filename.clone(),
            })),
        }
    }
    matched
}

/// The single table of the build, if exactly one is declared.
fn select_table<'a>(
    tables: &'a [TableSpec],
    diagnostics: &mut Vec<Issue>,
) -> Option<&'a TableSpec> {
    match tables {
        [] => None,
        [table] => Some(table),
        many => {
            diagnostics.push(Issue::MultipleTables(MultipleTablesIssue {
                class_names: many.iter().map(|t| t.class_name.clone()).collect(),
            }));
            None
        }
    }
}

fn table_is_valid(table: &TableSpec, diagnostics: &mut Vec<Issue>) -> bool {
    let mut valid = true;
    for (what, value) in table.identifiers() {
        if !is_valid_identifier(value) {
            diagnostics.push(Issue::InvalidIdentifier(InvalidIdentifierIssue {
                subject: format!("{} of table '{}'", what, table.class_name),
                value: value.to_string(),
                context: None,
                skipped: "table and id table".to_string(),
            }));
            valid = false;
        }
    }
    if valid && !is_valid_identifier(&table_type_name(table)) {
        diagnostics.push(Issue::InvalidIdentifier(InvalidIdentifierIssue {
            subject: format!("table type of table '{}'", table.class_name),
            value: table_type_name(table),
            context: None,
            skipped: "table and id table".to_string(),
        }));
        valid = false;
    }
    valid
}

fn report_invalid_keys(
    default_file: &TranslationFile,
    default_parsed: &ParsedTranslations,
    diagnostics: &mut Vec<Issue>,
) {
    for (key, entry) in default_parsed {
        let (subject, skipped) = if !is_valid_identifier(key) {
            ("translation key", "table accessor and id constant")
        } else if !is_accessor_name(key) {
            ("translation key (reserved by the generated table)", "table accessor")
        } else {
            continue;
        };
        diagnostics.push(Issue::InvalidIdentifier(InvalidIdentifierIssue {
            subject: subject.to_string(),
            value: key.clone(),
            context: Some(MessageContext::new(
                MessageLocation::from_line_index(&default_file.path, entry.line),
                &default_file.name,
                key,
            )),
            skipped: skipped.to_string(),
        }));
    }
}

/// Every file's text per key. The default file comes first, then the others
/// in provider declaration order.
fn aggregate(
    matched: &[MatchedProvider<'_>],
    parsed: &[Arc<ParsedTranslations>],
    default_pos: usize,
) -> AggregatedTranslations {
    let order =
        std::iter::once(default_pos).chain((0..matched.len()).filter(|&i| i != default_pos));

    let mut aggregated = AggregatedTranslations::new();
    for i in order {
        for (key, entry) in parsed[i].iter() {
            aggregated
                .entry(key.clone())
                .or_default()
                .insert(matched[i].file.name.clone(), entry.text.clone());
        }
    }
    aggregated
}

/// Artifacts keyed by output name; a later artifact replaces an earlier one
/// with the same name.
#[derive(Default)]
struct ArtifactSet {
    artifacts: IndexMap<String, Artifact>,
}

impl ArtifactSet {
    fn push(&mut self, artifact: Artifact, diagnostics: &mut Vec<Issue>) {
        if let Some(replaced) = self.artifacts.get(&artifact.name) {
            diagnostics.push(Issue::DuplicateArtifact(DuplicateArtifactIssue {
                name: artifact.name.clone(),
                replaced: replaced.type_name.clone(),
                kept: artifact.type_name.clone(),
            }));
        }
        self.artifacts.insert(artifact.name.clone(), artifact);
    }

    fn into_vec(self) -> Vec<Artifact> {
        self.artifacts.into_values().collect()
    }
}
