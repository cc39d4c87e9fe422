use serde::{Deserialize, Serialize};

/// One search hit. Missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
}

impl ResultItem {
    pub fn new(title: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            snippet: snippet.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Title,
    Snippet,
}

/// A snowclone instance found in one result item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Matched substring of the normalized field text.
    pub text: String,
    pub field: MatchField,
}
