use anyhow::{Context, Result};
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert!(
        parsed.get("ignores").is_some(),
        "Config should have 'ignores' field"
    );
    assert!(
        parsed.get("contextArg").is_some(),
        "Config should have 'contextArg' field"
    );
    assert!(
        parsed.get("ignoreTestFiles").is_some(),
        "Config should have 'ignoreTestFiles' field"
    );

    // Verify formatting (2-space indentation)
    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());

    assert!(test.root().join(".slogmigrc.json").exists());

    let content = test.read_file(".slogmigrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".slogmigrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("already exists"));

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;

    test.write_file(
        "main.go",
        "package main\n\nimport (\n\t\"github.com/rs/zerolog/log\"\n)\n\nfunc main() {\n\tlog.Info().Msg(\"hi\")\n}\n",
    )?;

    let output = test.migrate_command().output()?;
    assert!(
        output.status.success(),
        "Migrate command should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}
