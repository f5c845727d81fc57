//! Stopword lookup
//!
//! Membership is a binary search over a table that is lowercased, sorted by
//! byte order and deduplicated when it is built. The built-in Russian table is
//! constructed once on first use.

use lazy_static::lazy_static;

use super::stopword_list::RUSSIAN_STOPWORDS;

lazy_static! {
    static ref DEFAULT_STOPWORDS: StopwordTable =
        StopwordTable::new(RUSSIAN_STOPWORDS.iter().copied());
}

/// An immutable, sorted list of words to exclude from classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordTable {
    words: Vec<String>,
}

impl StopwordTable {
    /// Builds a table from any list of words. Order and case of the input do not matter.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    /// The built-in Russian stopword table.
    pub fn default_table() -> &'static StopwordTable {
        &DEFAULT_STOPWORDS
    }

    /// Returns true if `word`, lowercased, is in the table.
    pub fn contains(&self, word: &str) -> bool {
        let needle = word.to_lowercase();
        // A miss past the last entry is Err(len), never an index into the table.
        self.words
            .binary_search_by(|probe| probe.as_str().cmp(needle.as_str()))
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Returns true if `word` is a common Russian function word.
pub fn is_stop_word(word: &str) -> bool {
    DEFAULT_STOPWORDS.contains(word)
}

/// Negation of [`is_stop_word`]; the default tokenizer filter.
pub fn is_not_stop_word(word: &str) -> bool {
    !is_stop_word(word)
}
