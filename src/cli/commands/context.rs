use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::{
    cli::args::Arguments,
    config::{CONFIG_FILE_NAME, Config, load_config},
};

/// Resolved settings for one run: config file values with CLI overrides applied.
pub struct RunContext {
    pub config: Config,
    pub source_root: PathBuf,
    pub ledger_path: PathBuf,
    pub verbose: bool,
}

impl RunContext {
    pub fn new(args: &Arguments, start_dir: &Path) -> Result<Self> {
        let config_result = load_config(start_dir)?;

        if args.verbose && !config_result.from_file() {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let config = config_result.config;
        let source_root = match (&args.src, &config_result.path) {
            (Some(src), _) => src.clone(),
            (None, Some(config_path)) => {
                resolve_from_config(config_path, start_dir, &config.source_root)
            }
            (None, None) => PathBuf::from(&config.source_root),
        };
        let review = args
            .review
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.review_file));
        // Relative review paths live inside the source tree; absolute ones are used as-is.
        let ledger_path = source_root.join(review);

        Ok(Self {
            config,
            source_root,
            ledger_path,
            verbose: args.verbose,
        })
    }
}

/// Resolve a config value against the directory holding the config file.
///
/// Stays relative when the config sits in `start_dir` itself.
fn resolve_from_config(config_path: &Path, start_dir: &Path, value: &str) -> PathBuf {
    match config_path.parent() {
        Some(config_dir) if config_dir != start_dir => config_dir.join(value),
        _ => PathBuf::from(value),
    }
}
