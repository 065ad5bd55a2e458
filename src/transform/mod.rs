//! Content transform pipeline.
//!
//! Rendering a page for display folds its content through an ordered chain
//! of regex-driven rewrites: bare URLs become anchors, WikiWords become page
//! links classified by an existence lookup, and external hrefs are routed
//! through the referrer-hiding indirection endpoint. The order is
//! load-bearing; see [`TransformPipeline::standard`].
//!
//! A transform is more expressive than plain regex replacement because the
//! replacement runs arbitrary code, e.g. looking a WikiWord up in storage
//! before deciding what kind of link to emit.

mod autolink;
mod errors;
mod hide_referers;
mod oracle;
mod wikiwords;

pub use autolink::AutoLink;
pub use errors::{TransformError, TransformResult};
pub use hide_referers::HideReferers;
pub use oracle::{LinkExistenceOracle, OracleError};
pub use wikiwords::WikiWords;

use regex::{Captures, Regex};

/// One regex-driven rewrite over page content.
pub trait Transform {
    /// Rewrite `content`, replacing every match of this transform's pattern.
    fn run(&self, content: &str) -> TransformResult<String>;
}

/// Replace every leftmost non-overlapping match of `pattern` in `content`
/// with the result of `replace`, leaving everything between matches
/// byte-for-byte untouched.
///
/// Scanning resumes strictly after each match end, so adjacent matches
/// cannot double-fire. Replacement side effects run in match order,
/// left to right. A replacement error aborts the rewrite.
pub fn rewrite<F>(pattern: &Regex, content: &str, mut replace: F) -> TransformResult<String>
where
    F: FnMut(&Captures<'_>) -> TransformResult<String>,
{
    let mut out = String::with_capacity(content.len());
    let mut offset = 0;
    for caps in pattern.captures_iter(content) {
        let matched = caps.get(0).unwrap();
        out.push_str(&content[offset..matched.start()]);
        out.push_str(&replace(&caps)?);
        offset = matched.end();
    }
    out.push_str(&content[offset..]);
    Ok(out)
}

/// An ordered chain of transforms, each seeing the previous one's output.
pub struct TransformPipeline<'a> {
    transforms: Vec<Box<dyn Transform + 'a>>,
}

impl<'a> TransformPipeline<'a> {
    /// An empty pipeline; content passes through unchanged.
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Append a transform to the end of the chain.
    pub fn with(mut self, transform: impl Transform + 'a) -> Self {
        self.transforms.push(Box::new(transform));
        self
    }

    /// The standard wiki chain: AutoLink, then WikiWords over the given
    /// oracle, then HideReferers through `goto_path`.
    ///
    /// WikiWords must run after AutoLink so URL classification sees the
    /// original text, and HideReferers must run last so it catches anchors
    /// produced by the earlier stages as well as literal ones.
    pub fn standard(oracle: &'a dyn LinkExistenceOracle, goto_path: &str) -> Self {
        Self::new()
            .with(AutoLink::new())
            .with(WikiWords::new(oracle))
            .with(HideReferers::new(goto_path))
    }

    /// Fold the chain over `content`.
    pub fn run(&self, content: &str) -> TransformResult<String> {
        let mut acc = content.to_string();
        for transform in &self.transforms {
            acc = transform.run(&acc)?;
        }
        Ok(acc)
    }

    /// Number of transforms in the chain.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Returns true if the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

impl Default for TransformPipeline<'_> {
    fn default() -> Self {
        Self::new()
    }
}
