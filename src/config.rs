use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::{ProviderSpec, TableSpec};

pub const CONFIG_FILE_NAME: &str = ".textlocrc.json";

/// Module path syntax accepted for `namespace` (e.g., `crate::l10n`).
static NAMESPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(crate|self|super|[A-Za-z_][A-Za-z0-9_]*)(::[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("namespace pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory searched for `.yml` / `.yaml` translation files.
    #[serde(default = "default_translations_root")]
    pub translations_root: String,
    /// Directory the `generate` command writes artifacts into.
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
    /// Paths (relative to `translationsRoot`) to skip; globs or literal prefixes.
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub providers: Vec<ProviderSpec>,
    #[serde(default)]
    pub tables: Vec<TableSpec>,
}

fn default_translations_root() -> String {
    "./translations".to_string()
}

fn default_out_dir() -> String {
    "./src/generated".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translations_root: default_translations_root(),
            out_dir: default_out_dir(),
            ignores: Vec::new(),
            providers: Vec::new(),
            tables: Vec::new(),
        }
    }
}

impl Config {
    /// Configuration written by `textloc init`: an English default locale, a
    /// Polish secondary locale and a `Localization` table.
    pub fn sample() -> Self {
        Self {
            providers: vec![
                ProviderSpec::new("crate::l10n", "EnglishTextProvider", "english.yml", true),
                ProviderSpec::new("crate::l10n", "PolishTextProvider", "polish.yml", false),
            ],
            tables: vec![
                TableSpec::new("crate::l10n", "Localization", "provider", "default_provider")
                    .with_id_class("R"),
            ],
            ..Self::default()
        }
    }

    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` or any `namespace` is
    /// malformed. Identifier problems are left to the build, which reports
    /// them as diagnostics.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        let namespaces = self
            .providers
            .iter()
            .map(|p| (&p.class_name, &p.namespace))
            .chain(self.tables.iter().map(|t| (&t.class_name, &t.namespace)));
        for (class_name, namespace) in namespaces {
            if !namespace.is_empty() && !NAMESPACE_RE.is_match(namespace) {
                bail!(
                    "Invalid namespace \"{}\" for '{}'. Expected a module path such as \"crate::l10n\".",
                    namespace,
                    class_name
                );
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::sample();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// The config file, or None when using defaults.
    pub path: Option<PathBuf>,
    /// Directory relative paths in the config are resolved against.
    pub base_dir: PathBuf,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!(path = %path.display(), "loaded config");
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
                base_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
            base_dir: start_dir.to_path_buf(),
        }),
    }
}
