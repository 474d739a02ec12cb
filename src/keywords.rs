//! Keyword normalization for multi-keyword "contains" search filters.
//!
//! Users paste search terms with mixed full-width/half-width whitespace and
//! punctuation; the sanitizer folds that into a canonical comma-separated
//! token list which is stored on the entity and later split into per-token
//! `LIKE` clauses.

use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static COMMA_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",+").unwrap());

/// Accepts a sanitized keyword string: one or more comma-separated runs of
/// word characters, kana (including the prolonged sound mark) or kanji.
/// Callers must sanitize before matching against this gate.
pub static LIKE_KEYWORDS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w\p{Hiragana}\p{Katakana}\p{Han}ー]+(?:,[\w\p{Hiragana}\p{Katakana}\p{Han}ー]+)*$")
        .unwrap()
});

/// Normalizes raw keyword input into a comma-separated token list.
///
/// The steps run in a fixed order, each relying on the previous one:
/// full-width spaces become half-width, whitespace runs become a comma,
/// full-width commas become half-width, comma runs collapse, and leading or
/// trailing separators are trimmed. Idempotent, never fails; an input with
/// no usable tokens produces the empty string.
pub fn sanitize_keywords(raw: &str) -> String {
    let spaced = raw.replace('\u{3000}', " ");
    let separated = WHITESPACE_RUN.replace_all(&spaced, ",");
    let separated = separated.replace(['、', '，'], ",");
    let collapsed = COMMA_RUN.replace_all(&separated, ",");
    collapsed
        .trim_matches(|c: char| c == ',' || c.is_whitespace())
        .to_string()
}

/// Errors produced when attempting to construct a keyword filter.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeywordError {
    /// Sanitized input was empty or contained characters outside the
    /// accepted word/kana/kanji classes.
    #[error("keywords must be comma-separated words")]
    InvalidKeywords,
}

/// Canonical comma-separated keyword filter stored on an entity.
///
/// Construction sanitizes the raw input and gates it through
/// [`LIKE_KEYWORDS_REGEX`], so a value of this type can be trusted by the
/// query layer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct KeywordQuery(String);

impl KeywordQuery {
    /// Sanitizes and validates raw keyword input.
    pub fn new<S: AsRef<str>>(raw: S) -> Result<Self, KeywordError> {
        let sanitized = sanitize_keywords(raw.as_ref());
        if LIKE_KEYWORDS_REGEX.is_match(&sanitized) {
            Ok(Self(sanitized))
        } else {
            Err(KeywordError::InvalidKeywords)
        }
    }

    /// Borrow the canonical string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Iterate over the individual keywords, one per `LIKE` clause.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split(',')
    }
}

impl Display for KeywordQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for KeywordQuery {
    type Error = KeywordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for KeywordQuery {
    type Error = KeywordError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<KeywordQuery> for String {
    fn from(value: KeywordQuery) -> Self {
        value.0
    }
}
