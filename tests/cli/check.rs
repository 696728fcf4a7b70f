use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_clean_translations() -> Result<()> {
    let test = CliTest::with_translations(
        "greetings: Hello\nfarewell: Goodbye\n",
        "greetings: Cześć\nfarewell: Do widzenia\n",
    )?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "✓ Checked 2 translation files - no issues found\n");

    Ok(())
}

#[test]
fn test_missing_and_extra_keys() -> Result<()> {
    let test = CliTest::with_translations(
        "greetings: Hello\nfarewell: Goodbye\n",
        "greetings: Cześć\nwelcome: Witaj\n",
    )?;

    let (code, stdout, _) = run(test.check_command())?;

    // Warnings only.
    assert_eq!(code, 0);
    assert!(stdout.contains("warning: \"farewell\"  missing-key"));
    assert!(stdout.contains("warning: \"welcome\"  extra-key"));
    assert!(stdout.contains("--> ./translations/polish.yml:2:1"));
    assert!(stdout.contains("2 | welcome: Witaj"));
    assert!(stdout.contains("2 problems (0 errors, 2 warnings)"));

    Ok(())
}

#[test]
fn test_untranslatable_key_translated() -> Result<()> {
    let test = CliTest::with_translations(
        "brand: Textloc # untranslatable\n",
        "brand: Tekstlok\n",
    )?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("warning: \"brand\"  untranslatable-translated"));

    Ok(())
}

#[test]
fn test_invalid_key_is_an_error() -> Result<()> {
    let test = CliTest::with_translations("type: Type\nname: Name\n", "name: Nazwa\n")?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("error: \"type\"  invalid-identifier"));
    assert!(stdout.contains("--> ./translations/english.yml:1:1"));

    Ok(())
}

#[test]
fn test_unmatched_provider() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".textlocrc.json", crate::CONFIG)?;
    test.write_file("translations/english.yml", "a: A\n")?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("unmatched-provider"));
    assert!(stdout.contains("PolishTextProvider"));

    Ok(())
}

#[test]
fn test_missing_translations_dir() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".textlocrc.json", crate::CONFIG)?;

    let (code, _, stderr) = run(test.check_command())?;

    assert_eq!(code, 2);
    assert!(stderr.contains("does not exist"));

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".textlocrc.json", r#"{ "ignores": ["[*"] }"#)?;

    let (code, _, stderr) = run(test.check_command())?;

    assert_eq!(code, 2);
    assert!(stderr.contains("Invalid glob pattern in 'ignores'"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("generate"));
    assert!(stdout.contains("check"));
    assert!(stdout.contains("init"));

    Ok(())
}
