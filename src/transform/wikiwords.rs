//! WikiWord linking.

use std::cell::RefCell;
use std::collections::HashMap;

use regex::Regex;

use crate::page::{WikiName, WIKI_WORD_PATTERN};

use super::{rewrite, LinkExistenceOracle, OracleError, Transform, TransformResult};

/// Turns WikiWord tokens into page links.
///
/// Each match costs one existence lookup: tokens naming an existing page
/// link to it, others link to edit mode with a create hint. Lookups are
/// memoized for the duration of one `run`, so a page mentioned twice is
/// looked up once.
pub struct WikiWords<'a> {
    pattern: Regex,
    oracle: &'a dyn LinkExistenceOracle,
    resolved: RefCell<HashMap<String, bool>>,
}

impl<'a> WikiWords<'a> {
    pub fn new(oracle: &'a dyn LinkExistenceOracle) -> Self {
        Self {
            pattern: Regex::new(WIKI_WORD_PATTERN).unwrap(),
            oracle,
            resolved: RefCell::new(HashMap::new()),
        }
    }

    fn exists(&self, name: &WikiName) -> Result<bool, OracleError> {
        if let Some(known) = self.resolved.borrow().get(name.as_str()) {
            return Ok(*known);
        }
        let known = self.oracle.exists(name)?;
        self.resolved
            .borrow_mut()
            .insert(name.as_str().to_string(), known);
        Ok(known)
    }
}

impl Transform for WikiWords<'_> {
    fn run(&self, content: &str) -> TransformResult<String> {
        // The memo only holds within one run; an entry surviving across
        // runs could shadow a save made in between.
        self.resolved.borrow_mut().clear();
        rewrite(&self.pattern, content, |caps| {
            let token = &caps[0];
            let name = match WikiName::parse(token) {
                Ok(name) => name,
                // The token pattern and the name rules agree, but a token
                // the name rules reject passes through unchanged.
                Err(_) => return Ok(token.to_string()),
            };
            if self.exists(&name)? {
                Ok(format!(
                    r#"<a class="wikiword" href="{}">{}</a>"#,
                    name.view_url(),
                    name
                ))
            } else {
                Ok(format!(
                    r#"<a title="{} does not exist yet. Click to create it." class="wikiword_new" href="{}">{}?</a>"#,
                    name,
                    name.edit_url(),
                    name
                ))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::HashSet;

    use super::*;

    struct FixedOracle {
        known: HashSet<String>,
        lookups: Cell<usize>,
    }

    impl FixedOracle {
        fn with_pages(pages: &[&str]) -> Self {
            Self {
                known: pages.iter().map(|p| p.to_string()).collect(),
                lookups: Cell::new(0),
            }
        }
    }

    impl LinkExistenceOracle for FixedOracle {
        fn exists(&self, name: &WikiName) -> Result<bool, OracleError> {
            self.lookups.set(self.lookups.get() + 1);
            Ok(self.known.contains(name.as_str()))
        }
    }

    struct DownOracle;

    impl LinkExistenceOracle for DownOracle {
        fn exists(&self, _name: &WikiName) -> Result<bool, OracleError> {
            Err(OracleError::Unavailable("datastore offline".to_string()))
        }
    }

    #[test]
    fn test_existing_page_links_to_view() {
        let oracle = FixedOracle::with_pages(&["FooBar"]);
        let out = WikiWords::new(&oracle).run("see FooBar today").unwrap();
        assert_eq!(
            out,
            r#"see <a class="wikiword" href="/FooBar">FooBar</a> today"#
        );
    }

    #[test]
    fn test_missing_page_links_to_edit_with_hint() {
        let oracle = FixedOracle::with_pages(&[]);
        let out = WikiWords::new(&oracle).run("BazQux").unwrap();
        assert_eq!(
            out,
            r#"<a title="BazQux does not exist yet. Click to create it." class="wikiword_new" href="/BazQux?mode=edit">BazQux?</a>"#
        );
    }

    #[test]
    fn test_plain_words_are_not_links() {
        let oracle = FixedOracle::with_pages(&["FooBar"]);
        let out = WikiWords::new(&oracle).run("nothing wiki about this").unwrap();
        assert_eq!(out, "nothing wiki about this");
    }

    #[test]
    fn test_underscored_token_is_not_a_wikiword() {
        let oracle = FixedOracle::with_pages(&["FooBar"]);
        let out = WikiWords::new(&oracle).run("Foo_Bar").unwrap();
        assert_eq!(out, "Foo_Bar");
    }

    #[test]
    fn test_repeated_word_is_looked_up_once() {
        let oracle = FixedOracle::with_pages(&["FooBar"]);
        let transform = WikiWords::new(&oracle);
        transform.run("FooBar and FooBar and FooBar").unwrap();
        assert_eq!(oracle.lookups.get(), 1);
    }

    #[test]
    fn test_memo_resets_between_runs() {
        let oracle = FixedOracle::with_pages(&["FooBar"]);
        let transform = WikiWords::new(&oracle);
        transform.run("FooBar").unwrap();
        transform.run("FooBar").unwrap();
        assert_eq!(oracle.lookups.get(), 2);
    }

    #[test]
    fn test_oracle_failure_propagates() {
        let out = WikiWords::new(&DownOracle).run("FooBar");
        assert!(matches!(
            out,
            Err(super::super::TransformError::LookupUnavailable(_))
        ));
    }

    #[test]
    fn test_distinct_words_each_classified() {
        let oracle = FixedOracle::with_pages(&["FooBar"]);
        let out = WikiWords::new(&oracle).run("FooBar and BazQux").unwrap();
        assert!(out.contains(r#"<a class="wikiword" href="/FooBar">FooBar</a>"#));
        assert!(out.contains(r#"href="/BazQux?mode=edit""#));
    }
}
