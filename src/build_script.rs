//! `build.rs` integration.
//!
//! ```ignore
//! // build.rs
//! fn main() -> anyhow::Result<()> {
//!     let out_dir = std::env::var("OUT_DIR")?;
//!     textloc::build_script::generate_for_build_script(".", out_dir)
//! }
//!
//! // src/l10n.rs
//! include!(concat!(env!("OUT_DIR"), "/english_text_provider.rs"));
//! include!(concat!(env!("OUT_DIR"), "/localization_table.rs"));
//! ```

use std::{
    io::{self, Write},
    path::Path,
};

use anyhow::{Result, bail};

use crate::{
    artifact_writer::{WriteMode, write_artifacts},
    cli::args::CommonArgs,
    core::context::BuildContext,
    issues::Severity,
};

/// Compile the project at `root` and write its artifacts into `out_dir`.
///
/// Emits `cargo:rerun-if-changed` for the config file and every translation
/// file, and one `cargo:warning` line per diagnostic. Fails when any
/// diagnostic has error severity.
pub fn generate_for_build_script(root: impl AsRef<Path>, out_dir: impl AsRef<Path>) -> Result<()> {
    generate_to(root.as_ref(), out_dir.as_ref(), &mut io::stdout().lock())
}

fn generate_to<W: Write>(root: &Path, out_dir: &Path, writer: &mut W) -> Result<()> {
    let common = CommonArgs {
        root: Some(root.to_path_buf()),
        translations_root: None,
        out_dir: Some(out_dir.to_path_buf()),
        verbose: false,
    };
    let ctx = BuildContext::new(&common)?;

    writeln!(writer, "cargo:rerun-if-changed={}", ctx.translations_dir.display())?;
    for path in ctx.watched_paths() {
        writeln!(writer, "cargo:rerun-if-changed={}", path.display())?;
    }

    let issues = ctx.diagnostics();
    for issue in &issues {
        writeln!(writer, "cargo:warning={}", issue.summary())?;
    }

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    if error_count > 0 {
        bail!(
            "textloc found {} error(s) in {}",
            error_count,
            ctx.translations_dir.display()
        );
    }

    let report = write_artifacts(&ctx.out_dir, &ctx.output().artifacts, WriteMode::Write)?;
    tracing::debug!(
        written = report.written.len(),
        unchanged = report.unchanged.len(),
        "build script finished"
    );
    Ok(())
}
