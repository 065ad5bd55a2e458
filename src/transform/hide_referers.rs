//! Referrer hiding for external links.

use regex::Regex;
use url::{form_urlencoded, Url};

use super::{rewrite, Transform, TransformResult};

/// Rewrites absolute `href` values to go through the redirect indirection
/// endpoint, so external destinations never see this wiki in their referrer
/// logs.
///
/// Relative hrefs (WikiWord links) never match the pattern and pass through
/// untouched. The pattern catches anchors produced by AutoLink, by
/// WikiWords in principle, and literal anchors already present in content.
pub struct HideReferers {
    pattern: Regex,
    goto_path: String,
}

impl HideReferers {
    pub fn new(goto_path: &str) -> Self {
        Self {
            pattern: Regex::new(r#"href="(http[^"]+)""#).unwrap(),
            goto_path: goto_path.to_string(),
        }
    }
}

impl Transform for HideReferers {
    fn run(&self, content: &str) -> TransformResult<String> {
        rewrite(&self.pattern, content, |caps| {
            let raw = &caps[1];
            match Url::parse(raw) {
                Ok(parsed) => {
                    let query: String = form_urlencoded::Serializer::new(String::new())
                        .append_pair("target", parsed.as_str())
                        .finish();
                    Ok(format!(r#"href="{}?{}""#, self.goto_path, query))
                }
                // A value that merely looks like a URL keeps its href.
                Err(_) => Ok(caps[0].to_string()),
            }
        })
    }
}
