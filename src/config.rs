use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::{CommandTranslator, DEFAULT_EXTENSIONS, DEFAULT_LEDGER_FILE};

pub const CONFIG_FILE_NAME: &str = ".comtransrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Source tree root, relative to the directory holding the config file.
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Review file, relative to the source root.
    #[serde(default = "default_review_file")]
    pub review_file: String,
    /// Extra translator attempts per ledger entry.
    #[serde(default = "default_retries")]
    pub retries: usize,
    /// Custom script patterns by language code, e.g. `{"de": "[äöüß]"}`.
    #[serde(default)]
    pub scripts: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translator: Option<TranslatorConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TranslatorConfig {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl TranslatorConfig {
    pub fn build(&self) -> CommandTranslator {
        CommandTranslator::new(self.program.clone(), self.args.clone())
    }
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

fn default_review_file() -> String {
    DEFAULT_LEDGER_FILE.to_string()
}

fn default_retries() -> usize {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            extensions: default_extensions(),
            ignores: Vec::new(),
            review_file: default_review_file(),
            retries: default_retries(),
            scripts: BTreeMap::new(),
            translator: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for an empty extension list, invalid glob patterns in
    /// `ignores`, or script patterns that do not compile.
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }

        // Only patterns with wildcards are globs; the rest are literal paths.
        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        for (lang, pattern) in &self.scripts {
            Regex::new(pattern).with_context(|| {
                format!("Invalid regex in 'scripts' for \"{}\": \"{}\"", lang, pattern)
            })?;
        }

        if let Some(translator) = &self.translator
            && translator.program.trim().is_empty()
        {
            bail!("'translator.program' must not be empty");
        }

        Ok(())
    }
}

/// Default config written by `--action init`, with an example translator.
pub fn default_config_json() -> Result<String> {
    let config = Config {
        translator: Some(TranslatorConfig {
            program: "trans".to_string(),
            args: vec![
                "-brief".to_string(),
                "{from}:{to}".to_string(),
                "{text}".to_string(),
            ],
        }),
        ..Default::default()
    };
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
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
