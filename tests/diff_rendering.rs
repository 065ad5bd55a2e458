//! Version Diff Rendering Tests
//!
//! Diffing two history entries of a page:
//! - Identical contents produce no insert/delete runs.
//! - Columns and captions follow request order, not chronology.
//! - Unknown ids are a normal NotFound outcome; malformed ids are a
//!   caller error; neither panics.

use std::sync::Arc;

use quillwiki::diff::DiffError;
use quillwiki::history::{Author, EntryId};
use quillwiki::page::WikiName;
use quillwiki::store::{MemoryStore, NoopCache};
use quillwiki::wiki::{Wiki, WikiError};

// =============================================================================
// Test Utilities
// =============================================================================

fn wiki() -> Wiki {
    Wiki::new(Arc::new(MemoryStore::new()), Arc::new(NoopCache))
}

fn name(raw: &str) -> WikiName {
    WikiName::parse(raw).unwrap()
}

fn save(wiki: &Wiki, page: &WikiName, content: &str, author: &str) -> String {
    wiki.save(page, content, Some(Author::new(author)), "10.0.0.1", "")
        .unwrap()
        .to_string()
}

// =============================================================================
// Diff Content
// =============================================================================

#[test]
fn test_identical_contents_diff_to_unchanged() {
    let wiki = wiki();
    let page = name("FooBar");
    let v1 = save(&wiki, &page, "same\ncontent\n", "alice");
    let v2 = save(&wiki, &page, "same\ncontent\n", "bob");

    let diff = wiki.diff(&page, &v1, &v2).unwrap();
    assert!(diff.is_unchanged());
    assert_eq!(diff.inserted_runs(), 0);
    assert_eq!(diff.deleted_runs(), 0);
    assert_eq!(diff.rows().len(), 2);
}

#[test]
fn test_changed_contents_produce_runs() {
    let wiki = wiki();
    let page = name("FooBar");
    let v1 = save(&wiki, &page, "one\ntwo\n", "alice");
    let v2 = save(&wiki, &page, "one\ntwo\nthree\n", "bob");

    let diff = wiki.diff(&page, &v1, &v2).unwrap();
    assert_eq!(diff.inserted_runs(), 1);
    assert_eq!(diff.deleted_runs(), 0);
}

#[test]
fn test_captions_follow_request_order_not_chronology() {
    let wiki = wiki();
    let page = name("FooBar");
    let older = save(&wiki, &page, "one\n", "alice");
    let newer = save(&wiki, &page, "two\n", "bob");

    // Request the newer entry on the left: the diff is rendered as asked.
    let reversed = wiki.diff(&page, &newer, &older).unwrap();
    assert!(reversed.caption_left().contains("bob"));
    assert!(reversed.caption_right().contains("alice"));
    assert!(reversed.caption_left().starts_with("Edited on "));
}

#[test]
fn test_swapping_operands_swaps_sides() {
    let wiki = wiki();
    let page = name("FooBar");
    let v1 = save(&wiki, &page, "one\n", "alice");
    let v2 = save(&wiki, &page, "one\nextra\n", "bob");

    let forward = wiki.diff(&page, &v1, &v2).unwrap();
    let backward = wiki.diff(&page, &v2, &v1).unwrap();
    assert_eq!(forward.inserted_runs(), backward.deleted_runs());
    assert_eq!(forward.deleted_runs(), backward.inserted_runs());
}

#[test]
fn test_html_table_carries_both_captions() {
    let wiki = wiki();
    let page = name("FooBar");
    let v1 = save(&wiki, &page, "one\n", "alice");
    let v2 = save(&wiki, &page, "two\n", "bob");

    let html = wiki.diff(&page, &v1, &v2).unwrap().to_html();
    assert!(html.contains("<table class=\"diff\">"));
    assert!(html.contains("by alice"));
    assert!(html.contains("by bob"));
}

#[test]
fn test_anonymous_entries_caption_as_anonymous() {
    let wiki = wiki();
    let page = name("FooBar");
    let v1 = wiki.save(&page, "one\n", None, "10.0.0.1", "").unwrap().to_string();
    let v2 = wiki.save(&page, "two\n", None, "10.0.0.1", "").unwrap().to_string();

    let diff = wiki.diff(&page, &v1, &v2).unwrap();
    assert!(diff.caption_left().ends_with("by anonymous"));
    assert!(diff.caption_right().ends_with("by anonymous"));
}

// =============================================================================
// Error Taxonomy
// =============================================================================

#[test]
fn test_unknown_entry_id_is_not_found() {
    let wiki = wiki();
    let page = name("FooBar");
    let v1 = save(&wiki, &page, "one\n", "alice");
    let missing = EntryId::generate().to_string();

    let err = wiki.diff(&page, &v1, &missing).unwrap_err();
    assert!(matches!(
        err,
        WikiError::Diff(DiffError::EntryNotFound { .. })
    ));
}

#[test]
fn test_entry_of_another_page_is_not_found() {
    let wiki = wiki();
    let foo = name("FooBar");
    let baz = name("BazQux");
    let foo_v = save(&wiki, &foo, "one\n", "alice");
    save(&wiki, &baz, "one\n", "alice");

    // A valid id resolved against the wrong page name misses.
    let err = wiki.diff(&baz, &foo_v, &foo_v).unwrap_err();
    assert!(matches!(
        err,
        WikiError::Diff(DiffError::EntryNotFound { .. })
    ));
}

#[test]
fn test_malformed_entry_id_is_a_caller_error() {
    let wiki = wiki();
    let err = wiki
        .diff(&name("FooBar"), "definitely-not-a-uuid", "also-bad")
        .unwrap_err();
    assert!(matches!(err, WikiError::Diff(DiffError::InvalidEntryId(_))));
}
