use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const ENGLISH: &str = "greetings: Hello\nfarewell: Goodbye\nbrand: Textloc # untranslatable\n";
const POLISH: &str = "greetings: Cześć\n";

#[test]
fn test_generate_writes_artifacts() -> Result<()> {
    let test = CliTest::with_translations(ENGLISH, POLISH)?;

    let (code, stdout, _) = run(test.generate_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("missing-key"));
    assert!(stdout.contains("Wrote 4 files to ./src/generated (0 unchanged)"));

    let english = test.read_file("src/generated/english_text_provider.rs")?;
    assert!(english.starts_with("// @generated by textloc. Do not edit.\n"));
    assert!(english.contains("1 => Some(\"Hello\"),"));
    assert!(
        english.contains("impl ::textloc::runtime::DefaultTextProvider for EnglishTextProvider")
    );

    let polish = test.read_file("src/generated/polish_text_provider.rs")?;
    assert!(polish.contains("1 => Some(\"Cześć\"),"));
    assert!(!polish.contains("Goodbye"));

    let table = test.read_file("src/generated/localization_table.rs")?;
    assert!(table.contains("pub fn greetings(&self) -> &'static str"));
    assert!(table.contains("pub fn brand(&self) -> &'static str"));

    let ids = test.read_file("src/generated/r.rs")?;
    assert!(ids.contains("pub const farewell: ::textloc::runtime::StringResourceId"));

    Ok(())
}

#[test]
fn test_generate_is_idempotent() -> Result<()> {
    let test = CliTest::with_translations(ENGLISH, POLISH)?;

    run(test.generate_command())?;
    let first = test.read_file("src/generated/localization_table.rs")?;

    let (code, stdout, _) = run(test.generate_command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Wrote 0 files to ./src/generated (4 unchanged)"));
    assert_eq!(test.read_file("src/generated/localization_table.rs")?, first);

    Ok(())
}

#[test]
fn test_generate_check() -> Result<()> {
    let test = CliTest::with_translations(ENGLISH, POLISH)?;

    let mut check = test.generate_command();
    check.arg("--check");
    let (code, stdout, _) = run(check)?;
    assert_eq!(code, 1);
    assert!(stdout.contains("  - would write r.rs"));
    assert!(!test.root().join("src/generated").exists());

    run(test.generate_command())?;

    let mut check = test.generate_command();
    check.arg("--check");
    let (code, stdout, _) = run(check)?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Generated sources in ./src/generated are up to date"));

    Ok(())
}

#[test]
fn test_generate_removes_stale_artifacts() -> Result<()> {
    let test = CliTest::with_translations(ENGLISH, POLISH)?;
    test.write_file(
        "src/generated/german_text_provider.rs",
        "// @generated by textloc. Do not edit.\n",
    )?;
    test.write_file("src/generated/mod.rs", "include!(\"r.rs\");\n")?;

    let (code, stdout, _) = run(test.generate_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Removed german_text_provider.rs"));
    assert!(!test.root().join("src/generated/german_text_provider.rs").exists());
    assert!(test.root().join("src/generated/mod.rs").exists());

    Ok(())
}

#[test]
fn test_generate_with_errors_writes_nothing() -> Result<()> {
    let test = CliTest::with_translations("type: Type\n", "type: Typ\n")?;

    let (code, stdout, _) = run(test.generate_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("invalid-identifier"));
    assert!(stdout.contains("Build has errors, nothing written to ./src/generated"));
    assert!(!test.root().join("src/generated").exists());

    Ok(())
}

#[test]
fn test_generate_out_dir_override() -> Result<()> {
    let test = CliTest::with_translations(ENGLISH, POLISH)?;

    let mut cmd = test.generate_command();
    cmd.args(["--out-dir", "gen"]);
    let (code, _, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(test.root().join("gen/r.rs").exists());

    Ok(())
}
