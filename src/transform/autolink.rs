//! Auto-linking of bare URLs.

use regex::Regex;

use super::{rewrite, Transform, TransformResult};

/// Wraps bare `http://` and `https://` URLs in anchor tags.
///
/// A URL immediately preceded by a double quote is already inside an
/// attribute and is left alone. The URL ends at the first whitespace,
/// angle bracket, parenthesis, ampersand or quote, and never ends with a
/// period, so sentence punctuation stays outside the anchor.
pub struct AutoLink {
    pattern: Regex,
}

impl AutoLink {
    pub fn new() -> Self {
        // No look-behind in the regex crate: the character before the URL is
        // captured and emitted back in front of the anchor.
        let pattern = Regex::new(
            r#"([^"])\b((?:http|https)://[^ \t\n\r<>()&"]+[^ \t\n\r<>()&".])"#,
        )
        .unwrap();
        Self { pattern }
    }
}

impl Default for AutoLink {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for AutoLink {
    fn run(&self, content: &str) -> TransformResult<String> {
        rewrite(&self.pattern, content, |caps| {
            let url = &caps[2];
            Ok(format!(
                r#"{}<a class="autourl" href="{}">{}</a>"#,
                &caps[1], url, url
            ))
        })
    }
}
