//! CLI argument definitions using clap.
//!
//! ## Actions
//!
//! - `scan`: find comments in the source language and append them to the review file
//! - `write`: copy the source tree and translate the reviewed comments in the copy
//! - `init`: create a `.comtransrc.json` configuration file

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

const LONG_ABOUT: &str = "\
Translate source code comments from one language to another.

Work happens in two phases. `--action scan` looks for `//` comments written
in the --from language and appends them to the review file (review.csv at
the root of the source tree). Open the review file, delete false matches,
and correct or pre-fill translations as needed.

`--action write` then copies the source tree to --dest and replaces each
reviewed comment in the copy with its translation. --dest must not exist
yet and must lie outside the source tree.

Example:

    comtrans --action scan --from ru --src ./engine
    comtrans --action write --from ru --to en --src ./engine --dest ./engine-en";

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = LONG_ABOUT)]
pub struct Arguments {
    /// Phase to run
    #[arg(long, value_enum)]
    pub action: Action,

    /// Language of the comments to find (e.g. ru, zh, ja)
    #[arg(
        long,
        value_name = "LANG",
        required_if_eq_any([("action", "scan"), ("action", "write")])
    )]
    pub from: Option<String>,

    /// Language to translate into (e.g. en)
    #[arg(long, value_name = "LANG", required_if_eq("action", "write"))]
    pub to: Option<String>,

    /// Source tree root (overrides config file)
    #[arg(long, value_name = "PATH")]
    pub src: Option<PathBuf>,

    /// Destination for the translated copy; must not exist yet and must be outside the source tree
    #[arg(long, value_name = "PATH", required_if_eq("action", "write"))]
    pub dest: Option<PathBuf>,

    /// Review file path, relative to the source root (overrides config file)
    #[arg(long, value_name = "PATH")]
    pub review: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Find comments and append them to the review file
    Scan,
    /// Write translations into a copy of the source tree
    Write,
    /// Create a default .comtransrc.json
    Init,
}
