use unicode_normalization::UnicodeNormalization;

/// Set of characters kept by [`normalize`]; everything else becomes a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharFilter {
    /// `a-z` only.
    Alphabetic,
    /// `a-z` and `0-9`.
    #[default]
    Alphanumeric,
}

impl CharFilter {
    pub fn from_alphabetic_only(alphabetic_only: bool) -> Self {
        if alphabetic_only {
            CharFilter::Alphabetic
        } else {
            CharFilter::Alphanumeric
        }
    }

    #[inline]
    pub fn retains(self, c: char) -> bool {
        match self {
            CharFilter::Alphabetic => c.is_ascii_lowercase(),
            CharFilter::Alphanumeric => c.is_ascii_lowercase() || c.is_ascii_digit(),
        }
    }
}

/// NFD, strip accents, lowercase, filter, collapse spaces.
/// Output holds only retained chars separated by single spaces; it is not trimmed.
pub fn normalize(s: &str, filter: CharFilter) -> String {
    let lower = strip_accents(s).to_lowercase();
    let mut out = String::with_capacity(lower.len());
    for c in lower.chars() {
        if filter.retains(c) {
            out.push(c);
        } else if !out.ends_with(' ') {
            out.push(' ');
        }
    }
    out
}

fn strip_accents(s: &str) -> String {
    s.nfd().filter(|c| !is_mark(*c)).collect()
}

fn is_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}
