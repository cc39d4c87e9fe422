// crates/snowclone_match/src/verify/regex_impl.rs
use anyhow::{Context, Result};
use regex::Regex;

use super::wildcard_to_regex_case_insensitive;

/// Case-insensitive matcher over normalized text.
#[derive(Debug, Clone)]
pub struct RegexVerify {
    rx: Regex,
}

impl RegexVerify {
    fn compile_regex(pat: &str) -> Result<Self> {
        Ok(Self {
            rx: Regex::new(pat).with_context(|| format!("compile regex {pat:?}"))?,
        })
    }

    pub fn compile_wildcard(wildcard: &str) -> Result<Self> {
        let pat = wildcard_to_regex_case_insensitive(wildcard);
        Self::compile_regex(&pat)
    }

    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        self.rx.is_match(text)
    }

    /// First match as byte offsets `(start, end)`.
    #[inline]
    pub fn find(&self, text: &str) -> Option<(usize, usize)> {
        self.rx.find(text).map(|m| (m.start(), m.end()))
    }

    /// Regex source, for tracing.
    pub fn source(&self) -> &str {
        self.rx.as_str()
    }
}
