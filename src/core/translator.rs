//! Translation collaborator.
//!
//! The write phase only depends on the [`Translator`] trait. The shipped
//! implementation runs an external program per comment, so any translation
//! CLI can be plugged in through the config file.

use std::{
    io::{ErrorKind, Write},
    process::{Command, Stdio},
    string::FromUtf8Error,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("failed to start translator '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("translator failed ({status}): {stderr}")]
    Failed { status: String, stderr: String },
    #[error("translator output is not valid UTF-8: {0}")]
    InvalidOutput(#[from] FromUtf8Error),
    #[error("translator returned an empty translation")]
    Empty,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub trait Translator {
    fn translate(&self, text: &str, from: &str, to: &str) -> Result<String, TranslateError>;
}

/// Call the translator, retrying up to `retries` extra times on failure.
///
/// Returns the last error once the attempts are exhausted.
pub fn translate_with_retries(
    translator: &dyn Translator,
    text: &str,
    from: &str,
    to: &str,
    retries: usize,
) -> Result<String, TranslateError> {
    let mut attempt = 0;
    loop {
        match translator.translate(text, from, to) {
            Ok(translation) => return Ok(translation),
            Err(_) if attempt < retries => attempt += 1,
            Err(err) => return Err(err),
        }
    }
}

/// Runs `program args...` for every comment.
///
/// `{from}`, `{to}` and `{text}` in the arguments are replaced before the
/// call; the text is also written to the program's stdin. Trimmed stdout is
/// the translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTranslator {
    program: String,
    args: Vec<String>,
}

impl CommandTranslator {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    fn expand_args(&self, text: &str, from: &str, to: &str) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| {
                arg.replace("{from}", from)
                    .replace("{to}", to)
                    .replace("{text}", text)
            })
            .collect()
    }
}

impl Translator for CommandTranslator {
    fn translate(&self, text: &str, from: &str, to: &str) -> Result<String, TranslateError> {
        let mut child = Command::new(&self.program)
            .args(self.expand_args(text, from, to))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| TranslateError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(text.as_bytes()) {
                // The program may exit without reading its input.
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {}
                other => other?,
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(TranslateError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let translation = String::from_utf8(output.stdout)?.trim().to_string();
        if translation.is_empty() {
            return Err(TranslateError::Empty);
        }
        Ok(translation)
    }
}
