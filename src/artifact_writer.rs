use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::emit::{Artifact, GENERATED_HEADER};

/// What to do with artifacts that differ from the files on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Write changed artifacts and remove generated files no longer produced.
    Write,
    /// Touch nothing; only report what is out of date.
    Check,
}

/// Outcome of syncing an output directory with a set of artifacts.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WriteReport {
    /// Artifacts written (or, in check mode, that would be written).
    pub written: Vec<String>,
    pub unchanged: Vec<String>,
    /// Previously generated files removed (or that would be removed).
    pub removed: Vec<String>,
}

impl WriteReport {
    /// True when the directory already matched the artifacts.
    pub fn is_up_to_date(&self) -> bool {
        self.written.is_empty() && self.removed.is_empty()
    }
}

/// Bring `out_dir` in line with `artifacts`.
///
/// A file is only rewritten when its bytes differ. Only files starting with
/// the generated header are ever removed.
pub fn write_artifacts(
    out_dir: &Path,
    artifacts: &[Artifact],
    mode: WriteMode,
) -> Result<WriteReport> {
    let mut report = WriteReport::default();

    if mode == WriteMode::Write {
        fs::create_dir_all(out_dir)
            .with_context(|| format!("Failed to create directory: {}", out_dir.display()))?;
    }

    for artifact in artifacts {
        let path = out_dir.join(&artifact.name);
        let current = fs::read_to_string(&path).ok();
        if current.as_deref() == Some(artifact.contents.as_str()) {
            report.unchanged.push(artifact.name.clone());
            continue;
        }

        if mode == WriteMode::Write {
            fs::write(&path, &artifact.contents)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            tracing::info!(path = %path.display(), kind = %artifact.kind, "wrote artifact");
        }
        report.written.push(artifact.name.clone());
    }

    for path in stale_generated_files(out_dir, artifacts)? {
        if mode == WriteMode::Write {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove file: {}", path.display()))?;
            tracing::info!(path = %path.display(), "removed stale artifact");
        }
        if let Some(name) = path.file_name() {
            report.removed.push(name.to_string_lossy().to_string());
        }
    }

    Ok(report)
}

/// Generated files in `out_dir` that none of `artifacts` produces, by name.
fn stale_generated_files(out_dir: &Path, artifacts: &[Artifact]) -> Result<Vec<PathBuf>> {
    if !out_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut stale = Vec::new();
    let entries = fs::read_dir(out_dir)
        .with_context(|| format!("Failed to read directory: {}", out_dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.ends_with(".rs") || artifacts.iter().any(|a| a.name == name) {
            continue;
        }
        let is_generated = fs::read_to_string(&path)
            .map(|text| text.starts_with(GENERATED_HEADER))
            .unwrap_or(false);
        if is_generated {
            stale.push(path);
        }
    }
    stale.sort();
    Ok(stale)
}
