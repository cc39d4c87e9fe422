use anyhow::{bail, Result};

use crate::normalizer::CharFilter;
use crate::verify::RegexVerify;

/// A snowclone pattern ready for searching and matching.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Case-insensitive matcher over normalized text.
    pub matcher: RegexVerify,
    /// Exact-phrase query for the search provider, e.g. `"X+is+the+new+*"`.
    pub query: String,
    pub filter: CharFilter,
}

/// Compile a wildcard pattern (`*` = one run of non-space chars).
///
/// The matcher is built from the lowercased, space-collapsed pattern; the query keeps
/// the casing as typed.
pub fn compile(pattern: &str, alphabetic_only: bool) -> Result<CompiledPattern> {
    let words: Vec<&str> = pattern.split_whitespace().collect();
    if words.is_empty() {
        bail!("empty snowclone pattern");
    }

    let matcher_src = words.join(" ").to_lowercase();
    let matcher = RegexVerify::compile_wildcard(&matcher_src)?;

    Ok(CompiledPattern {
        matcher,
        query: format!("\"{}\"", words.join("+")),
        filter: CharFilter::from_alphabetic_only(alphabetic_only),
    })
}
