//! Incremental builds.
//!
//! A [`Session`] keeps the three build inputs separately and remembers the
//! parse of every translation file. Recompiling after a change reparses only
//! the files whose text changed and reports which artifacts actually differ
//! from the previous build, so a driver can skip rewriting unchanged outputs.

use std::{collections::HashMap, sync::Arc};

use rayon::prelude::*;

use crate::core::{
    ParsedTranslations, ProviderSpec, TableSpec, TranslationFile,
    emit::Artifact,
    parsers::yaml::parse_translations,
    pipeline::{BuildOutput, compile_with},
};

/// Artifacts of a compile compared with the previous one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildDelta {
    /// New artifacts and artifacts whose contents changed.
    pub changed: Vec<Artifact>,
    /// Names of artifacts identical to the previous build.
    pub unchanged: Vec<String>,
    /// Names of artifacts the previous build produced and this one does not.
    pub removed: Vec<String>,
}

impl BuildDelta {
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty() && self.removed.is_empty()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    /// Compiles that ran the pipeline.
    pub builds: usize,
    /// Compiles answered from the previous output.
    pub skipped_builds: usize,
    /// Files parsed because they were new or changed.
    pub parsed_files: usize,
    /// Files whose previous parse was reused.
    pub reused_files: usize,
}

#[derive(Debug)]
struct CachedParse {
    text: String,
    parsed: Arc<ParsedTranslations>,
}

#[derive(Debug, Default)]
pub struct Session {
    files: Vec<TranslationFile>,
    providers: Vec<ProviderSpec>,
    tables: Vec<TableSpec>,
    parses: HashMap<String, CachedParse>,
    output: Option<BuildOutput>,
    dirty: bool,
    stats: SessionStats,
}

impl Session {
    pub fn new() -> Self {
        Self {
            dirty: true,
            ..Self::default()
        }
    }

    pub fn set_files(&mut self, files: Vec<TranslationFile>) {
        if self.files != files {
            self.files = files;
            self.dirty = true;
        }
    }

    pub fn set_providers(&mut self, providers: Vec<ProviderSpec>) {
        if self.providers != providers {
            self.providers = providers;
            self.dirty = true;
        }
    }

    pub fn set_tables(&mut self, tables: Vec<TableSpec>) {
        if self.tables != tables {
            self.tables = tables;
            self.dirty = true;
        }
    }

    /// Output of the last compile.
    pub fn output(&self) -> Option<&BuildOutput> {
        self.output.as_ref()
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Compile the current inputs and compare with the previous compile.
    pub fn compile(&mut self) -> BuildDelta {
        if !self.dirty
            && let Some(output) = &self.output
        {
            self.stats.skipped_builds += 1;
            tracing::debug!("inputs unchanged, reusing previous build");
            return BuildDelta {
                changed: Vec::new(),
                unchanged: output.artifacts.iter().map(|a| a.name.clone()).collect(),
                removed: Vec::new(),
            };
        }

        self.refresh_parses();

        let parses = &self.parses;
        let output = compile_with(&self.files, &self.providers, &self.tables, |file| {
            match parses.get(&file.path) {
                Some(cached) if cached.text == file.text => cached.parsed.clone(),
                _ => Arc::new(parse_translations(&file.text)),
            }
        });

        let delta = compare(self.output.as_ref(), &output);
        tracing::debug!(
            changed = delta.changed.len(),
            unchanged = delta.unchanged.len(),
            removed = delta.removed.len(),
            "compiled"
        );
        self.stats.builds += 1;
        self.output = Some(output);
        self.dirty = false;
        delta
    }

    /// Parse new or changed files referenced by a provider; forget files that
    /// are gone.
    fn refresh_parses(&mut self) {
        let wanted: Vec<&TranslationFile> = self
            .files
            .iter()
            .filter(|f| self.providers.iter().any(|p| p.filename == f.name))
            .collect();

        self.parses
            .retain(|path, _| wanted.iter().any(|f| &f.path == path));

        let stale: Vec<&TranslationFile> = wanted
            .into_iter()
            .filter(|f| {
                self.parses
                    .get(&f.path)
                    .is_none_or(|cached| cached.text != f.text)
            })
            .collect();

        let reused = self.parses.len().saturating_sub(
            stale
                .iter()
                .filter(|f| self.parses.contains_key(&f.path))
                .count(),
        );

        let fresh: Vec<(String, CachedParse)> = stale
            .par_iter()
            .map(|f| {
                (
                    f.path.clone(),
                    CachedParse {
                        text: f.text.clone(),
                        parsed: Arc::new(parse_translations(&f.text)),
                    },
                )
            })
            .collect();

        self.stats.parsed_files += fresh.len();
        self.stats.reused_files += reused;
        self.parses.extend(fresh);
    }
}

fn compare(previous: Option<&BuildOutput>, current: &BuildOutput) -> BuildDelta {
    let previous: HashMap<&str, &Artifact> = previous
        .map(|output| {
            output
                .artifacts
                .iter()
                .map(|a| (a.name.as_str(), a))
                .collect()
        })
        .unwrap_or_default();

    let mut delta = BuildDelta::default();
    for artifact in &current.artifacts {
        match previous.get(artifact.name.as_str()) {
            Some(old) if old.contents == artifact.contents => {
                delta.unchanged.push(artifact.name.clone())
            }
            _ => delta.changed.push(artifact.clone()),
        }
    }

    let mut removed: Vec<String> = previous
        .keys()
        .filter(|name| current.artifact(name).is_none())
        .map(|name| name.to_string())
        .collect();
    removed.sort();
    delta.removed = removed;
    delta
}
