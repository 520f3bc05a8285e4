//! Core engine: locate comments, keep the review ledger, write translations.
//!
//! ## Module Structure
//!
//! - `walker`: enumerate source files by extension, in sorted order
//! - `script`: per-language script predicates
//! - `locator`: extract `//` comments matching a predicate
//! - `ledger`: append/read the review CSV
//! - `translator`: the translation collaborator
//! - `source_text`: line-addressed comment replacement
//! - `copy`: destination tree copy
//! - `pipeline`: the scan and write phases

pub mod copy;
pub mod error;
pub mod ledger;
pub mod locator;
pub mod pipeline;
pub mod script;
pub mod source_text;
pub mod translator;
pub mod walker;

pub use error::{Error, Result};
pub use ledger::{DEFAULT_LEDGER_FILE, LedgerEntry};
pub use locator::CommentRecord;
pub use pipeline::{ScanOptions, ScanOutcome, WriteOptions, WriteOutcome};
pub use script::ScriptPredicate;
pub use source_text::{DriftReason, SourceText};
pub use translator::{CommandTranslator, TranslateError, Translator};
pub use walker::DEFAULT_EXTENSIONS;
