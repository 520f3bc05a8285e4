//! comtrans - translate foreign-language comments in C/C++ source trees
//!
//! Translation runs in two phases. `scan` finds `//` comments written in the
//! source language and appends them to a review file (a CSV ledger) for a
//! human to curate. `write` copies the source tree and replaces each reviewed
//! comment in the copy with its translation.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, actions, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Scan/write pipeline, review ledger, translator
//! - `issues`: Non-fatal problems reported by a run

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
