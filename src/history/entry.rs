//! Immutable page history entries.
//!
//! Every save appends exactly one entry. Entries are never mutated or
//! deleted; all fields are private to enforce immutability after
//! construction.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::page::WikiName;

/// Timestamp format used in diff captions and history listings.
const CAPTION_TIME_FORMAT: &str = "%a, %b %d, %Y at %I:%M %p";

/// Display name shown for edits that carry no author.
const ANONYMOUS: &str = "anonymous";

/// Display name of whoever made an edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Author(String);

impl Author {
    pub fn new(nickname: impl Into<String>) -> Self {
        Self(nickname.into())
    }

    /// Returns the author's display name.
    #[inline]
    pub fn nickname(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A malformed history entry identifier.
///
/// Kept distinct from "entry absent" so diff callers can tell a bad request
/// from a normal miss.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed history entry id {0:?}")]
pub struct InvalidEntryId(pub String);

/// Store-assigned identifier of one history entry, unique within the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Mint a fresh identifier. Stores call this when appending.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier from its canonical text form.
    pub fn parse(raw: &str) -> Result<Self, InvalidEntryId> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| InvalidEntryId(raw.to_string()))
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A snapshot waiting to be appended; the store assigns its id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub name: WikiName,
    pub content: String,
    pub author: Option<Author>,
    pub remote_addr: String,
    pub comment: String,
    pub created: DateTime<Utc>,
}

/// One saved snapshot of a page's content plus edit metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    id: EntryId,
    name: WikiName,
    content: String,
    author: Option<Author>,
    remote_addr: String,
    comment: String,
    created: DateTime<Utc>,
}

impl HistoryEntry {
    /// Seals a pending snapshot under a store-assigned id.
    pub fn new(id: EntryId, snapshot: NewEntry) -> Self {
        Self {
            id,
            name: snapshot.name,
            content: snapshot.content,
            author: snapshot.author,
            remote_addr: snapshot.remote_addr,
            comment: snapshot.comment,
            created: snapshot.created,
        }
    }

    /// Returns the entry identifier.
    #[inline]
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Returns the page name.
    #[inline]
    pub fn name(&self) -> &WikiName {
        &self.name
    }

    /// Returns the content snapshot.
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the author, if the edit was not anonymous.
    #[inline]
    pub fn author(&self) -> Option<&Author> {
        self.author.as_ref()
    }

    /// Returns the client address the edit came from.
    #[inline]
    pub fn remote_addr(&self) -> &str {
        &self.remote_addr
    }

    /// Returns the free-text edit comment.
    #[inline]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Returns the creation timestamp.
    #[inline]
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns the author's display name, or the anonymous marker.
    pub fn author_display(&self) -> &str {
        match &self.author {
            Some(author) => author.nickname(),
            None => ANONYMOUS,
        }
    }

    /// Caption used above this entry's diff column.
    pub fn caption(&self) -> String {
        format!(
            "Edited on {} by {}",
            self.created.format(CAPTION_TIME_FORMAT),
            self.author_display()
        )
    }
}
