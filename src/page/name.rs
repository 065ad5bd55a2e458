//! Page name validation and canonicalization.
//!
//! A valid page name is a WikiWord: two or more concatenated segments, each
//! starting with an ASCII uppercase letter or digit and followed by at least
//! one more letter or digit, with no separators. Character classes are
//! deliberately ASCII-only; Unicode case rules are not consulted.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::errors::{NameError, NameResult};

/// Unanchored WikiWord pattern, shared with the WikiWords content transform.
///
/// Underscores are excluded from the segment classes, so a token with an
/// inner underscore never qualifies.
pub(crate) const WIKI_WORD_PATTERN: &str = r"[A-Z0-9][A-Za-z0-9]+(?:[A-Z0-9][A-Za-z0-9]+)+";

fn anchored_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!("^{}$", WIKI_WORD_PATTERN)).expect("WikiWord pattern compiles")
    })
}

/// A validated, canonical wiki page name.
///
/// Canonical means underscore-free: `Foo_Bar` and `FooBar` address the same
/// page, on read and write paths alike.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WikiName(String);

impl WikiName {
    /// Canonicalize and validate a raw page name.
    ///
    /// Underscores are stripped before validation. The returned flag is true
    /// when stripping changed the name, so callers can issue a permanent
    /// redirect to the canonical spelling.
    pub fn canonicalize(raw: &str) -> NameResult<(Self, bool)> {
        let stripped: String = raw.chars().filter(|c| *c != '_').collect();
        let changed = stripped.len() != raw.len();
        if anchored_pattern().is_match(&stripped) {
            Ok((WikiName(stripped), changed))
        } else {
            Err(NameError::Invalid(raw.to_string()))
        }
    }

    /// Validate a raw page name, discarding the canonicalization flag.
    pub fn parse(raw: &str) -> NameResult<Self> {
        Self::canonicalize(raw).map(|(name, _)| name)
    }

    /// Returns the canonical name.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL of the page's view mode.
    pub fn view_url(&self) -> String {
        format!("/{}", self.0)
    }

    /// URL of the page's edit mode.
    pub fn edit_url(&self) -> String {
        format!("/{}?mode=edit", self.0)
    }

    /// URL of the page's history listing.
    pub fn history_url(&self) -> String {
        format!("/{}?mode=history", self.0)
    }
}

impl fmt::Display for WikiName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
