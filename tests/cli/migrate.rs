use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

const SIMPLE_GO: &str = r#"package main

import (
	"github.com/rs/zerolog/log"
)

func main() {
	log.Info().Str("user", name).Msg("logged in")
}
"#;

const SIMPLE_GO_MIGRATED: &str = r#"package main

import (
	"log/slog"
)

func main() {
	slog.LogAttrs(ctx, slog.LevelInfo, "logged in", slog.String("user", name))
}
"#;

#[test]
fn test_dry_run_leaves_files_untouched() -> Result<()> {
    let test = CliTest::with_file("main.go", SIMPLE_GO)?;

    let output = test.migrate_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("Would rewrite 1 call(s) and 1 import(s) in 1 file(s)."));
    assert!(stdout.contains("--apply"));
    assert_eq!(test.read_file("main.go")?, SIMPLE_GO);

    Ok(())
}

#[test]
fn test_apply_rewrites_files() -> Result<()> {
    let test = CliTest::with_file("main.go", SIMPLE_GO)?;

    let output = test.migrate_command().arg("--apply").output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("Rewrote 1 call(s) and 1 import(s) in 1 file(s)."));
    assert_eq!(test.read_file("main.go")?, SIMPLE_GO_MIGRATED);

    Ok(())
}

#[test]
fn test_apply_is_idempotent() -> Result<()> {
    let test = CliTest::with_file("main.go", SIMPLE_GO)?;

    test.migrate_command().arg("--apply").output()?;
    let output = test.migrate_command().arg("--apply").output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("nothing to migrate"));
    assert_eq!(test.read_file("main.go")?, SIMPLE_GO_MIGRATED);

    Ok(())
}

#[test]
fn test_context_arg_override() -> Result<()> {
    let test = CliTest::with_file("main.go", SIMPLE_GO)?;

    let output = test
        .migrate_command()
        .args(["--apply", "--context-arg", "context.TODO()"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let rewritten = test.read_file("main.go")?;
    assert!(rewritten.contains("slog.LogAttrs(context.TODO(), slog.LevelInfo, \"logged in\""));

    Ok(())
}

#[test]
fn test_context_arg_from_config_file() -> Result<()> {
    let test = CliTest::with_file("main.go", SIMPLE_GO)?;
    test.write_file(".slogmigrc.json", r#"{ "contextArg": "r.Context()" }"#)?;

    let output = test.migrate_command().arg("--apply").output()?;

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let rewritten = test.read_file("main.go")?;
    assert!(rewritten.contains("slog.LogAttrs(r.Context(), slog.LevelInfo, \"logged in\""));

    Ok(())
}

#[test]
fn test_unparseable_file_exits_with_failure() -> Result<()> {
    let test = CliTest::with_file("broken.go", "package main\n\nfunc main() {\n")?;

    let output = test.migrate_command().output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("could not be parsed"));
    // Untouched on disk
    assert_eq!(test.read_file("broken.go")?, "package main\n\nfunc main() {\n");

    Ok(())
}

#[test]
fn test_unconverted_chain_is_reported_not_rewritten() -> Result<()> {
    let source = r#"package main

import (
	"github.com/rs/zerolog/log"
)

func main() {
	log.Info().Dict(dict).Msg("request")
	log.Warn().Msg("plain")
}
"#;
    let test = CliTest::with_file("main.go", source)?;

    let output = test.migrate_command().arg("-v").output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("unconverted zerolog chain"));
    assert!(stdout.contains("main.go:8:2"));
    // The plain chain and the import still count as rewrites
    assert!(stdout.contains("Would rewrite 1 call(s) and 1 import(s) in 1 file(s)."));

    Ok(())
}

#[test]
fn test_vendor_directory_is_ignored() -> Result<()> {
    let test = CliTest::with_file("vendor/dep/dep.go", SIMPLE_GO)?;
    test.write_file("main.go", SIMPLE_GO)?;

    let output = test.migrate_command().arg("--apply").output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("in 1 file(s)."));
    assert_eq!(test.read_file("vendor/dep/dep.go")?, SIMPLE_GO);
    assert_eq!(test.read_file("main.go")?, SIMPLE_GO_MIGRATED);

    Ok(())
}

#[test]
fn test_non_go_files_are_not_scanned() -> Result<()> {
    let test = CliTest::with_file("notes.txt", SIMPLE_GO)?;

    let output = test.migrate_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Checked 0 Go files - nothing to migrate"));

    Ok(())
}
