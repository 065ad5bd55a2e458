//! Append-only page history.
//!
//! Every save of a page appends one [`HistoryEntry`]; the log for a page
//! grows monotonically and no entry is ever removed. For a page that
//! exists, the most recent entry's content equals the current page content.

mod entry;

pub use entry::{Author, EntryId, HistoryEntry, InvalidEntryId, NewEntry};

/// Upper bound on entries returned by a history listing.
pub const HISTORY_FETCH_LIMIT: usize = 1000;
