//! Search keyword highlighting.
//!
//! Splits text into plain and matched fragments so the UI can wrap matches in
//! highlight markup without touching the DOM after rendering.

use regex::{Regex, RegexBuilder};

/// Classes applied to highlighted matches on the search page.
pub const HIGHLIGHT_CLASS: &str = "text-red-500 border-b border-dashed";

/// A run of text, either matching the keyword or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub matched: bool,
}

impl Fragment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: false,
        }
    }

    fn matched(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: true,
        }
    }
}

/// Case-insensitive matcher for a search keyword.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    /// Build a highlighter; a blank keyword matches nothing.
    pub fn new(keyword: &str) -> Self {
        let keyword = keyword.trim();
        let pattern = if keyword.is_empty() {
            None
        } else {
            RegexBuilder::new(&regex::escape(keyword))
                .case_insensitive(true)
                .build()
                .ok()
        };
        Self { pattern }
    }

    /// Split `text` into fragments; concatenating them yields `text`.
    pub fn fragments(&self, text: &str) -> Vec<Fragment> {
        let Some(pattern) = &self.pattern else {
            return vec![Fragment::plain(text)];
        };

        let mut fragments = Vec::new();
        let mut last = 0;
        for m in pattern.find_iter(text) {
            if m.start() > last {
                fragments.push(Fragment::plain(&text[last..m.start()]));
            }
            fragments.push(Fragment::matched(m.as_str()));
            last = m.end();
        }
        if last < text.len() || fragments.is_empty() {
            fragments.push(Fragment::plain(&text[last..]));
        }

        fragments
    }
}

/// Convenience wrapper for one-off highlighting.
pub fn highlight(text: &str, keyword: &str) -> Vec<Fragment> {
    Highlighter::new(keyword).fragments(text)
}
