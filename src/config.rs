use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".slogmigrc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &["**/*_test.go"];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    /// Skip `*_test.go` files. Off by default: test files usually want the
    /// same migration as the code they cover.
    #[serde(default)]
    pub ignore_test_files: bool,
    /// Placeholder expression for the context argument of the rewritten
    /// calls, e.g. "ctx" or "context.TODO()". The tool never resolves a real
    /// context from the enclosing scope.
    #[serde(default = "default_context_arg")]
    pub context_arg: String,
    /// Message literal synthesized for chains finalized with Send().
    #[serde(default = "default_message")]
    pub default_message: String,
}

fn default_ignores() -> Vec<String> {
    ["**/vendor/**", "**/testdata/**"].map(String::from).to_vec()
}

fn default_context_arg() -> String {
    "ctx".to_string()
}

fn default_message() -> String {
    "zerolog event".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: default_ignores(),
            includes: Vec::new(),
            ignore_test_files: false,
            context_arg: default_context_arg(),
            default_message: default_message(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` or `includes` are invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Include patterns without wildcards are literal directory paths and
        // need no validation.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        Ok(())
    }

    /// Load the config discovered from `start_dir`, or defaults if none exists.
    pub fn load_or_default(start_dir: &Path) -> Result<Config> {
        match find_config_file(start_dir) {
            Some(path) => {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let config: Config = serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse {}", path.display()))?;
                config.validate()?;
                Ok(config)
            }
            None => Ok(Config::default()),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
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
