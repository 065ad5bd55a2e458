//! Page lifecycle.
//!
//! A page is Absent until the first save: reads of an absent page get
//! synthesized seed content so the editor has something to start from.
//! Once any save happens the page is Present and its content mirrors the
//! newest history entry. There is no delete transition.

use chrono::{DateTime, Utc};

use crate::history::Author;
use crate::html;
use crate::store::PageRecord;

use super::WikiName;

/// A wiki page as seen by readers, whether or not anything has been saved
/// under its name yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    name: WikiName,
    content: String,
    author: Option<Author>,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
    present: bool,
}

impl Page {
    /// A page that does not exist yet.
    ///
    /// New pages start out with a simple title to get the author going.
    pub fn absent(name: WikiName, now: DateTime<Utc>) -> Self {
        let content = format!("<h1>{}</h1>", html::escape(name.as_str()));
        Self {
            name,
            content,
            author: None,
            created: now,
            modified: now,
            present: false,
        }
    }

    /// A page backed by a stored record.
    pub fn present(record: PageRecord) -> Self {
        Self {
            name: record.name,
            content: record.content,
            author: record.author,
            created: record.created,
            modified: record.modified,
            present: true,
        }
    }

    /// Returns the page name.
    #[inline]
    pub fn name(&self) -> &WikiName {
        &self.name
    }

    /// Returns the current content (synthesized for absent pages).
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the author of the latest save, if any.
    #[inline]
    pub fn author(&self) -> Option<&Author> {
        self.author.as_ref()
    }

    /// Returns the creation timestamp.
    #[inline]
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns the last-modified timestamp.
    #[inline]
    pub fn modified(&self) -> DateTime<Utc> {
        self.modified
    }

    /// Returns true if any save has ever happened for this name.
    #[inline]
    pub fn is_present(&self) -> bool {
        self.present
    }
}
