use std::collections::HashMap;

use crate::types::Match;

/// Occurrence counts per distinct snowclone text.
///
/// Keys remember first-seen order so that ranking is reproducible: ties on count keep
/// the order in which the texts first arrived.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    slots: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, text: &str) {
        match self.slots.get(text) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.slots.insert(text.to_string(), self.entries.len());
                self.entries.push((text.to_string(), 1));
            }
        }
    }

    /// Fold a batch of matches in arrival order.
    pub fn extend<I: IntoIterator<Item = Match>>(&mut self, matches: I) {
        for m in matches {
            self.add(&m.text);
        }
    }

    pub fn count(&self, text: &str) -> u64 {
        self.slots.get(text).map(|&i| self.entries[i].1).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by count descending (stable).
    pub fn ranked(&self) -> Vec<(String, u64)> {
        let mut out = self.entries.clone();
        out.sort_by(|a, b| b.1.cmp(&a.1));
        out
    }

    pub fn into_ranked(mut self) -> Vec<(String, u64)> {
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.entries
    }
}

/// One-shot aggregation over matched texts.
pub fn aggregate<I, S>(texts: I) -> Vec<(String, u64)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = FrequencyTable::new();
    for t in texts {
        table.add(t.as_ref());
    }
    table.into_ranked()
}
