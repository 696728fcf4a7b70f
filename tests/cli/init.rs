use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "✓ Created .textlocrc.json\n");

    let content = test.read_file(".textlocrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert!(parsed.get("translationsRoot").is_some());
    assert!(parsed.get("outDir").is_some());
    assert_eq!(parsed["providers"].as_array().map(Vec::len), Some(2));
    assert_eq!(parsed["tables"][0]["className"], "Localization");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".textlocrc.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let (code, stdout, stderr) = run(cmd)?;

    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert_eq!(stderr, "error: .textlocrc.json already exists\n");
    assert_eq!(test.read_file(".textlocrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    run(cmd)?;

    test.write_file("translations/english.yml", "greetings: Hello\n")?;
    test.write_file("translations/polish.yml", "greetings: Cześć\n")?;

    let (code, stdout, stderr) = run(test.generate_command())?;
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("Wrote 4 files to ./src/generated"));
    assert!(test.root().join("src/generated/r.rs").exists());

    Ok(())
}
