use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::error::ClassifierError;

/// Weight reported for a token no category has seen.
pub const MIN_TOKEN_WEIGHT: f64 = 0.001;

/// Token and category statistics accumulated by training.
///
/// `token_counts` and `training_counts` are only ever read or written together
/// under the lock held by [`FrequencyModel`]; splitting them across locks would
/// let a reader observe a half-applied training call.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FrequencyTables {
    token_counts: HashMap<String, HashMap<String, u64>>,
    // Ordered so category iteration, and therefore tie-breaking, is stable.
    training_counts: BTreeMap<String, u64>,
}

impl FrequencyTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `token` in `category`.
    pub fn record(&mut self, token: &str, category: &str) {
        let per_category = self.token_counts.entry(token.to_owned()).or_default();
        *per_category.entry(category.to_owned()).or_insert(0) += 1;
    }

    /// Counts one training event for `category`.
    pub fn record_category(&mut self, category: &str) {
        *self.training_counts.entry(category.to_owned()).or_insert(0) += 1;
    }

    pub fn count_in_category(&self, token: &str, category: &str) -> u64 {
        self.token_counts
            .get(token)
            .and_then(|per_category| per_category.get(category))
            .copied()
            .unwrap_or(0)
    }

    /// Occurrences of `token` summed over every known category.
    pub fn total_seen(&self, token: &str) -> u64 {
        self.categories()
            .map(|category| self.count_in_category(token, category))
            .sum()
    }

    /// [`total_seen`](Self::total_seen) as a weight, never lower than [`MIN_TOKEN_WEIGHT`].
    pub fn total_weight(&self, token: &str) -> f64 {
        let weight = self.total_seen(token) as f64;
        if weight > 0.0 {
            weight
        } else {
            MIN_TOKEN_WEIGHT
        }
    }

    /// Known categories in lexicographic order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.training_counts.keys().map(String::as_str)
    }

    pub fn num_categories(&self) -> usize {
        self.training_counts.len()
    }

    /// Number of training calls that named `category`.
    pub fn training_count(&self, category: &str) -> u64 {
        self.training_counts.get(category).copied().unwrap_or(0)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.token_counts.len()
    }

    pub fn training_events(&self) -> u64 {
        self.training_counts.values().sum()
    }
}

/// [`FrequencyTables`] behind a single reader-writer lock.
#[derive(Debug, Default)]
pub struct FrequencyModel {
    tables: RwLock<FrequencyTables>,
}

impl FrequencyModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared access for a whole computation.
    pub fn read(&self) -> Result<RwLockReadGuard<'_, FrequencyTables>, ClassifierError> {
        Ok(self.tables.read()?)
    }

    /// Exclusive access for a whole update.
    pub fn write(&self) -> Result<RwLockWriteGuard<'_, FrequencyTables>, ClassifierError> {
        Ok(self.tables.write()?)
    }

    /// Records every token for `category` plus one training event, atomically.
    pub fn train<I, S>(&self, tokens: I, category: &str) -> Result<(), ClassifierError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tables = self.write()?;
        for token in tokens {
            tables.record(token.as_ref(), category);
        }
        tables.record_category(category);
        Ok(())
    }

    /// A copy of the current tables.
    pub fn snapshot(&self) -> Result<FrequencyTables, ClassifierError> {
        Ok(self.read()?.clone())
    }
}
