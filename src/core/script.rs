//! Script predicates: decide whether comment text is written in the source language.
//!
//! A language code resolves to a regex over Unicode script classes. The
//! built-in table covers the common non-Latin scripts; any code can be given
//! a custom pattern through the `scripts` config map, which also takes
//! precedence over the built-in entry.

use std::collections::BTreeMap;

use regex::Regex;

use super::error::{Error, Result};

const BUILTIN_SCRIPTS: &[(&[&str], &str)] = &[
    (
        &["ru", "uk", "be", "bg", "sr", "mk", "kk", "ky", "mn", "tg"],
        r"\p{Cyrillic}",
    ),
    (&["zh"], r"\p{Han}"),
    (&["ja"], r"[\p{Hiragana}\p{Katakana}\p{Han}]"),
    (&["ko"], r"\p{Hangul}"),
    (&["el"], r"\p{Greek}"),
    (&["ar", "fa", "ur"], r"\p{Arabic}"),
    (&["he", "yi"], r"\p{Hebrew}"),
    (&["hi", "mr", "ne"], r"\p{Devanagari}"),
    (&["th"], r"\p{Thai}"),
    (&["ka"], r"\p{Georgian}"),
    (&["hy"], r"\p{Armenian}"),
];

#[derive(Debug, Clone)]
pub struct ScriptPredicate {
    pattern: Regex,
}

impl ScriptPredicate {
    /// Resolve the predicate for a language code such as `ru` or `zh-CN`.
    ///
    /// Overrides are checked first, then the built-in table.
    pub fn for_language(code: &str, overrides: &BTreeMap<String, String>) -> Result<Self> {
        let language = normalize_language(code);

        let custom = overrides
            .iter()
            .find(|(key, _)| normalize_language(key) == language)
            .map(|(_, pattern)| pattern.as_str());

        let pattern = match custom {
            Some(pattern) => pattern,
            None => builtin_pattern(&language)
                .ok_or_else(|| Error::UnsupportedLanguage(code.to_string()))?,
        };

        Self::new(&language, pattern)
    }

    pub fn new(language: &str, pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| Error::InvalidScript {
            lang: language.to_string(),
            source,
        })?;
        Ok(Self { pattern })
    }

    /// True when the text contains at least one character of the script.
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Lowercase the code and drop any region suffix (`ru-RU`, `zh_TW`).
pub fn normalize_language(code: &str) -> String {
    code.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

fn builtin_pattern(language: &str) -> Option<&'static str> {
    BUILTIN_SCRIPTS
        .iter()
        .find(|(codes, _)| codes.contains(&language))
        .map(|(_, pattern)| *pattern)
}
