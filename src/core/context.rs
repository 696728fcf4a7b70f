use std::{
    cell::OnceCell,
    path::{Component, Path, PathBuf},
};

use anyhow::Result;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        TranslationFile,
        parsers::yaml::scan_translation_files,
        pipeline::{BuildInput, BuildOutput, compile},
    },
    issues::{Issue, ReadErrorIssue},
};

/// Project-level build context: configuration, discovered translation files
/// and the (lazily computed) build output.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--translations-root ./i18n`)
/// 2. `.textlocrc.json` config file
/// 3. Built-in defaults
pub struct BuildContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Config file in use, if any.
    pub config_path: Option<PathBuf>,

    /// Resolved translations directory.
    pub translations_dir: PathBuf,

    /// Resolved artifact output directory.
    pub out_dir: PathBuf,

    /// Every translation file found under `translations_dir`, sorted by path.
    pub files: Vec<TranslationFile>,

    /// Files that could not be read.
    pub read_errors: Vec<ReadErrorIssue>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    output: OnceCell<BuildOutput>,
}

impl BuildContext {
    /// Create a new `BuildContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Config file is invalid
    /// - Translations directory doesn't exist
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root_dir = common_args
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if !config_result.from_file() {
            tracing::info!("no .textlocrc.json found, using default configuration");
        }
        let base_dir = config_result.base_dir.clone();
        let config = config_result.config;

        let translations_dir = match &common_args.translations_root {
            Some(dir) => dir.clone(),
            None => resolve_against(&base_dir, &config.translations_root),
        };
        let out_dir = match &common_args.out_dir {
            Some(dir) => dir.clone(),
            None => resolve_against(&base_dir, &config.out_dir),
        };

        let scan = scan_translation_files(&translations_dir, &config.ignores)?;
        tracing::debug!(
            dir = %translations_dir.display(),
            files = scan.files.len(),
            "scanned translation files"
        );

        let read_errors = scan
            .warnings
            .into_iter()
            .map(|warning| ReadErrorIssue {
                file_path: warning.file_path,
                error: warning.error,
            })
            .collect();

        Ok(Self {
            config,
            config_path: config_result.path,
            translations_dir,
            out_dir,
            files: scan.files,
            read_errors,
            verbose,
            output: OnceCell::new(),
        })
    }

    pub fn input(&self) -> BuildInput {
        BuildInput {
            files: self.files.clone(),
            providers: self.config.providers.clone(),
            tables: self.config.tables.clone(),
        }
    }

    /// Run the build (once).
    pub fn output(&self) -> &BuildOutput {
        self.output.get_or_init(|| compile(&self.input()))
    }

    /// Read errors and build diagnostics, sorted for reporting.
    pub fn diagnostics(&self) -> Vec<Issue> {
        let mut issues: Vec<Issue> = self
            .read_errors
            .iter()
            .cloned()
            .map(Issue::ReadError)
            .chain(self.output().diagnostics.iter().cloned())
            .collect();
        issues.sort();
        issues
    }

    /// Paths whose changes should trigger a rebuild.
    pub fn watched_paths(&self) -> Vec<PathBuf> {
        self.config_path
            .iter()
            .cloned()
            .chain(self.files.iter().map(|f| PathBuf::from(&f.path)))
            .collect()
    }
}

/// Resolve a path from the config file relative to the config's directory.
fn resolve_against(base_dir: &Path, configured: &str) -> PathBuf {
    let p = Path::new(configured);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    let is_cur_dir = base_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        base_dir.join(rel)
    }
}
