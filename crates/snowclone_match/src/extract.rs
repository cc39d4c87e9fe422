use crate::normalizer::normalize;
use crate::pattern::CompiledPattern;
use crate::types::{Match, MatchField, ResultItem};

/// First match in `item`, title before snippet.
/// Once the title matches the snippet is not looked at, so an item counts at most once.
pub fn extract_match(item: &ResultItem, compiled: &CompiledPattern) -> Option<Match> {
    [
        (MatchField::Title, item.title.as_str()),
        (MatchField::Snippet, item.snippet.as_str()),
    ]
    .into_iter()
    .find_map(|(field, raw)| {
        let text = normalize(raw, compiled.filter);
        tracing::debug!(?field, raw = %raw, normalized = %text, "examining result field");
        compiled.matcher.find(&text).map(|(s, e)| Match {
            text: text[s..e].to_string(),
            field,
        })
    })
}

/// Extract from a whole page, preserving item order.
pub fn extract_page<'a, I>(items: I, compiled: &'a CompiledPattern) -> impl Iterator<Item = Match> + 'a
where
    I: IntoIterator<Item = &'a ResultItem>,
    I::IntoIter: 'a,
{
    items
        .into_iter()
        .filter_map(move |item| extract_match(item, compiled))
}
