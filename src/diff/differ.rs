//! Two-column diff rendering between page snapshots.
//!
//! Contents are split into newline-inclusive lines and aligned with a
//! minimal line-level edit script (Myers, earliest-alignment tie-breaks).
//! The rendering is a two-column HTML table with one caption per side.

use similar::{DiffTag, TextDiff};

use crate::history::HistoryEntry;
use crate::html;

/// How one rendered row relates the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffLineKind {
    /// The line is present on both sides.
    Unchanged,
    /// The line exists only on the right side.
    Inserted,
    /// The line exists only on the left side.
    Deleted,
    /// Left and right lines occupy the same slot but differ.
    Replaced,
}

/// One table row: aligned left/right cells with 1-based line numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRow {
    pub kind: DiffLineKind,
    pub left: Option<(usize, String)>,
    pub right: Option<(usize, String)>,
}

/// A rendered comparison of two snapshots of one page.
///
/// Column order follows the order the entries were requested; comparing a
/// newer entry against an older one renders as asked, not corrected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDiff {
    caption_left: String,
    caption_right: String,
    rows: Vec<DiffRow>,
    inserted_runs: usize,
    deleted_runs: usize,
}

impl PageDiff {
    /// Caption above the left column.
    pub fn caption_left(&self) -> &str {
        &self.caption_left
    }

    /// Caption above the right column.
    pub fn caption_right(&self) -> &str {
        &self.caption_right
    }

    /// All aligned rows, in document order.
    pub fn rows(&self) -> &[DiffRow] {
        &self.rows
    }

    /// Number of insertion runs in the edit script.
    pub fn inserted_runs(&self) -> usize {
        self.inserted_runs
    }

    /// Number of deletion runs in the edit script.
    pub fn deleted_runs(&self) -> usize {
        self.deleted_runs
    }

    /// True when the two snapshots have identical content.
    pub fn is_unchanged(&self) -> bool {
        self.inserted_runs == 0 && self.deleted_runs == 0
    }

    /// Render as a two-column HTML table.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        out.push_str("<table class=\"diff\">\n");
        out.push_str(&format!(
            "  <thead><tr><th class=\"diff_header\" colspan=\"2\">{}</th><th class=\"diff_header\" colspan=\"2\">{}</th></tr></thead>\n",
            html::escape(&self.caption_left),
            html::escape(&self.caption_right)
        ));
        out.push_str("  <tbody>\n");
        for row in &self.rows {
            let class = match row.kind {
                DiffLineKind::Unchanged => "diff_unchanged",
                DiffLineKind::Inserted => "diff_inserted",
                DiffLineKind::Deleted => "diff_deleted",
                DiffLineKind::Replaced => "diff_replaced",
            };
            out.push_str(&format!("    <tr class=\"{}\">", class));
            Self::push_cell(&mut out, row.left.as_ref());
            Self::push_cell(&mut out, row.right.as_ref());
            out.push_str("</tr>\n");
        }
        out.push_str("  </tbody>\n</table>\n");
        out
    }

    fn push_cell(out: &mut String, cell: Option<&(usize, String)>) {
        match cell {
            Some((lineno, line)) => {
                let text = line.trim_end_matches('\n').trim_end_matches('\r');
                out.push_str(&format!(
                    "<td class=\"diff_lineno\">{}</td><td>{}</td>",
                    lineno,
                    html::escape(text)
                ));
            }
            None => out.push_str("<td class=\"diff_lineno\"></td><td></td>"),
        }
    }
}

/// Computes line alignments between two history entries.
pub struct VersionDiffer;

impl VersionDiffer {
    /// Diff `left` against `right`, columns in that order.
    pub fn diff(left: &HistoryEntry, right: &HistoryEntry) -> PageDiff {
        let text_diff = TextDiff::from_lines(left.content(), right.content());
        let old = text_diff.old_slices();
        let new = text_diff.new_slices();

        let mut rows = Vec::new();
        let mut inserted_runs = 0;
        let mut deleted_runs = 0;

        for op in text_diff.ops() {
            match op.tag() {
                DiffTag::Equal => {
                    for (i, j) in op.old_range().zip(op.new_range()) {
                        rows.push(DiffRow {
                            kind: DiffLineKind::Unchanged,
                            left: Some((i + 1, old[i].to_string())),
                            right: Some((j + 1, new[j].to_string())),
                        });
                    }
                }
                DiffTag::Delete => {
                    deleted_runs += 1;
                    for i in op.old_range() {
                        rows.push(DiffRow {
                            kind: DiffLineKind::Deleted,
                            left: Some((i + 1, old[i].to_string())),
                            right: None,
                        });
                    }
                }
                DiffTag::Insert => {
                    inserted_runs += 1;
                    for j in op.new_range() {
                        rows.push(DiffRow {
                            kind: DiffLineKind::Inserted,
                            left: None,
                            right: Some((j + 1, new[j].to_string())),
                        });
                    }
                }
                DiffTag::Replace => {
                    deleted_runs += 1;
                    inserted_runs += 1;
                    let old_range = op.old_range();
                    let new_range = op.new_range();
                    let width = old_range.len().max(new_range.len());
                    for k in 0..width {
                        let left_cell = old_range
                            .clone()
                            .nth(k)
                            .map(|i| (i + 1, old[i].to_string()));
                        let right_cell = new_range
                            .clone()
                            .nth(k)
                            .map(|j| (j + 1, new[j].to_string()));
                        rows.push(DiffRow {
                            kind: DiffLineKind::Replaced,
                            left: left_cell,
                            right: right_cell,
                        });
                    }
                }
            }
        }

        PageDiff {
            caption_left: left.caption(),
            caption_right: right.caption(),
            rows,
            inserted_runs,
            deleted_runs,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::history::{Author, EntryId, NewEntry};
    use crate::page::WikiName;

    use super::*;

    fn entry(content: &str, author: &str, hour: u32) -> HistoryEntry {
        HistoryEntry::new(
            EntryId::generate(),
            NewEntry {
                name: WikiName::parse("FooBar").unwrap(),
                content: content.to_string(),
                author: Some(Author::new(author)),
                remote_addr: "10.0.0.1".to_string(),
                comment: String::new(),
                created: Utc.with_ymd_and_hms(2010, 3, 5, hour, 0, 0).unwrap(),
            },
        )
    }

    #[test]
    fn test_identical_contents_have_no_change_runs() {
        let a = entry("line one\nline two\n", "alice", 9);
        let b = entry("line one\nline two\n", "bob", 10);
        let diff = VersionDiffer::diff(&a, &b);
        assert!(diff.is_unchanged());
        assert_eq!(diff.inserted_runs(), 0);
        assert_eq!(diff.deleted_runs(), 0);
        assert!(diff
            .rows()
            .iter()
            .all(|row| row.kind == DiffLineKind::Unchanged));
        assert_eq!(diff.rows().len(), 2);
    }

    #[test]
    fn test_insertion_is_marked_on_the_right() {
        let a = entry("one\nthree\n", "alice", 9);
        let b = entry("one\ntwo\nthree\n", "bob", 10);
        let diff = VersionDiffer::diff(&a, &b);
        assert_eq!(diff.inserted_runs(), 1);
        assert_eq!(diff.deleted_runs(), 0);
        let inserted: Vec<_> = diff
            .rows()
            .iter()
            .filter(|row| row.kind == DiffLineKind::Inserted)
            .collect();
        assert_eq!(inserted.len(), 1);
        assert!(inserted[0].left.is_none());
        assert_eq!(inserted[0].right.as_ref().unwrap().1, "two\n");
    }

    #[test]
    fn test_deletion_is_marked_on_the_left() {
        let a = entry("one\ntwo\nthree\n", "alice", 9);
        let b = entry("one\nthree\n", "bob", 10);
        let diff = VersionDiffer::diff(&a, &b);
        assert_eq!(diff.deleted_runs(), 1);
        let deleted: Vec<_> = diff
            .rows()
            .iter()
            .filter(|row| row.kind == DiffLineKind::Deleted)
            .collect();
        assert_eq!(deleted.len(), 1);
        assert!(deleted[0].right.is_none());
    }

    #[test]
    fn test_replacement_pairs_lines() {
        let a = entry("one\nold\nthree\n", "alice", 9);
        let b = entry("one\nnew\nthree\n", "bob", 10);
        let diff = VersionDiffer::diff(&a, &b);
        let replaced: Vec<_> = diff
            .rows()
            .iter()
            .filter(|row| row.kind == DiffLineKind::Replaced)
            .collect();
        assert_eq!(replaced.len(), 1);
        assert_eq!(replaced[0].left.as_ref().unwrap().1, "old\n");
        assert_eq!(replaced[0].right.as_ref().unwrap().1, "new\n");
    }

    #[test]
    fn test_captions_follow_argument_order() {
        let a = entry("x\n", "alice", 9);
        let b = entry("y\n", "bob", 10);
        let diff = VersionDiffer::diff(&b, &a);
        assert!(diff.caption_left().contains("bob"));
        assert!(diff.caption_right().contains("alice"));
    }

    #[test]
    fn test_empty_contents_diff_cleanly() {
        let a = entry("", "alice", 9);
        let b = entry("", "bob", 10);
        let diff = VersionDiffer::diff(&a, &b);
        assert!(diff.is_unchanged());
        assert!(diff.rows().is_empty());
    }

    #[test]
    fn test_html_table_escapes_line_content() {
        let a = entry("<script>alert(1)</script>\n", "alice", 9);
        let b = entry("<p>safe</p>\n", "bob", 10);
        let html = VersionDiffer::diff(&a, &b).to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_html_table_has_two_captioned_columns() {
        let a = entry("x\n", "alice", 9);
        let b = entry("y\n", "bob", 10);
        let html = VersionDiffer::diff(&a, &b).to_html();
        assert!(html.starts_with("<table class=\"diff\">"));
        assert_eq!(html.matches("colspan=\"2\"").count(), 2);
        assert!(html.contains("by alice"));
        assert!(html.contains("by bob"));
    }
}
