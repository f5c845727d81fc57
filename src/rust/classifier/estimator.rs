//! Weighted token probabilities and document scores.
//!
//! Everything here is a pure function of a [`FrequencyTables`] snapshot, so a
//! caller holding the read lock gets a consistent answer for the whole document.

use std::collections::HashMap;

use super::model::FrequencyTables;

/// Weight given to the uniform prior in `Estimator::weighted_prob`.
const PRIOR_WEIGHT: f64 = 1.0;

/// Read-only scoring over one model snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Estimator<'a> {
    tables: &'a FrequencyTables,
}

impl<'a> Estimator<'a> {
    pub fn new(tables: &'a FrequencyTables) -> Self {
        Self { tables }
    }

    /// Uniform probability of any one known category, or 0 with none known.
    pub fn uniform_prior(&self) -> f64 {
        match self.tables.num_categories() {
            0 => 0.0,
            n => 1.0 / n as f64,
        }
    }

    /// Occurrences of `token` in `category` per training event of that category.
    pub fn token_prob(&self, token: &str, category: &str) -> f64 {
        let events = self.tables.training_count(category);
        if events == 0 {
            return 0.0;
        }
        self.tables.count_in_category(token, category) as f64 / events as f64
    }

    /// Blends the token's overall weight under a uniform prior with its
    /// category-specific rate, trusting the rate more the more often the token
    /// has been seen.
    pub fn weighted_prob(&self, token: &str, category: &str) -> f64 {
        let total_seen = self.tables.total_seen(token) as f64;
        let prior = self.tables.total_weight(token) * PRIOR_WEIGHT * self.uniform_prior();
        (prior + total_seen * self.token_prob(token, category)) / (PRIOR_WEIGHT + total_seen)
    }

    /// Product of [`weighted_prob`](Self::weighted_prob) over `tokens`; 1.0 for no tokens.
    pub fn text_prob<S: AsRef<str>>(&self, tokens: &[S], category: &str) -> f64 {
        tokens
            .iter()
            .map(|token| self.weighted_prob(token.as_ref(), category))
            .product()
    }

    /// Document likelihood times the uniform category prior.
    pub fn score<S: AsRef<str>>(&self, tokens: &[S], category: &str) -> f64 {
        self.text_prob(tokens, category) * self.uniform_prior()
    }

    /// Scores every known category, in lexicographic category order.
    pub fn scores<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<(&'a str, f64)> {
        self.tables
            .categories()
            .map(|category| (category, self.score(tokens, category)))
            .collect()
    }

    /// The category with the strictly greatest positive score.
    ///
    /// Ties go to the lexicographically smallest label.
    pub fn best<S: AsRef<str>>(&self, tokens: &[S]) -> Option<(&'a str, f64)> {
        best_of(self.scores(tokens))
    }

    /// Positive scores by category, plus the best one.
    pub fn positive_scores<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> (HashMap<String, f64>, Option<String>) {
        let scores = self.scores(tokens);
        let best = best_of(scores.iter().copied()).map(|(category, _)| category.to_owned());
        let positive = scores
            .into_iter()
            .filter(|(_, score)| *score > 0.0)
            .map(|(category, score)| (category.to_owned(), score))
            .collect();
        (positive, best)
    }
}

fn best_of<'a>(scores: impl IntoIterator<Item = (&'a str, f64)>) -> Option<(&'a str, f64)> {
    let mut best: Option<(&'a str, f64)> = None;
    for (category, score) in scores {
        let current = best.map_or(0.0, |(_, s)| s);
        if score > current {
            best = Some((category, score));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trained(samples: &[(&str, &str)]) -> FrequencyTables {
        let mut tables = FrequencyTables::new();
        for (tokens, category) in samples {
            for token in tokens.split_whitespace() {
                tables.record(token, category);
            }
            tables.record_category(category);
        }
        tables
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_token_prob_uses_training_events() {
        let tables = trained(&[("cat cat dog", "animals"), ("cat", "animals")]);
        let estimator = Estimator::new(&tables);
        // 3 occurrences over 2 training calls, not over 4 tokens
        assert!(approx(estimator.token_prob("cat", "animals"), 1.5));
        assert_eq!(estimator.token_prob("cat", "finance"), 0.0);
    }

    #[test]
    fn test_weighted_prob_formula() {
        let tables = trained(&[("cat sat", "animals"), ("stock", "finance")]);
        let estimator = Estimator::new(&tables);

        // seen once, in this category: (1 * 1/2 + 1 * 1) / 2
        assert!(approx(estimator.weighted_prob("cat", "animals"), 0.75));
        // seen once, elsewhere: (1 * 1/2 + 1 * 0) / 2
        assert!(approx(estimator.weighted_prob("cat", "finance"), 0.25));
        // never seen: (0.001 * 1/2 + 0) / 1
        assert!(approx(estimator.weighted_prob("ghost", "animals"), 0.0005));
    }

    #[test]
    fn test_text_prob_of_no_tokens_is_one() {
        let tables = trained(&[("cat", "animals")]);
        let estimator = Estimator::new(&tables);
        let empty: [&str; 0] = [];
        assert_eq!(estimator.text_prob(&empty, "animals"), 1.0);
    }

    #[test]
    fn test_single_category_score_equals_text_prob() {
        let tables = trained(&[("cat sat", "animals")]);
        let estimator = Estimator::new(&tables);
        let tokens = ["cat", "ghost"];
        assert_eq!(
            estimator.score(&tokens, "animals"),
            estimator.text_prob(&tokens, "animals")
        );
    }

    #[test]
    fn test_prior_is_real_division() {
        let tables = trained(&[("a", "x"), ("b", "y"), ("c", "z")]);
        let estimator = Estimator::new(&tables);
        assert!(approx(estimator.uniform_prior(), 1.0 / 3.0));
        assert!(estimator.score(&["a"], "x") > 0.0);
    }

    #[test]
    fn test_best_prefers_matching_category() {
        let tables = trained(&[("cat sat", "animals"), ("stock rose", "finance")]);
        let estimator = Estimator::new(&tables);
        let (category, score) = estimator.best(&["stock"]).unwrap();
        assert_eq!(category, "finance");
        assert!(approx(score, 0.75 * 0.5));
    }

    #[test]
    fn test_ties_resolve_to_smallest_label() {
        let tables = trained(&[("cat", "b-animals"), ("stock", "a-finance")]);
        let estimator = Estimator::new(&tables);
        let (category, _) = estimator.best(&["cat", "stock"]).unwrap();
        assert_eq!(category, "a-finance");
    }

    #[test]
    fn test_no_categories_no_best() {
        let tables = FrequencyTables::new();
        let estimator = Estimator::new(&tables);
        assert!(estimator.best(&["cat"]).is_none());
        let (scores, best) = estimator.positive_scores(&["cat"]);
        assert!(scores.is_empty());
        assert!(best.is_none());
    }

    #[test]
    fn test_positive_scores_skip_zero() {
        let tables = trained(&[("cat", "animals"), ("stock", "finance")]);
        let estimator = Estimator::new(&tables);
        // Long enough to underflow to zero in every category
        let tokens = vec!["ghost"; 200];
        let (scores, best) = estimator.positive_scores(&tokens);
        assert!(scores.is_empty());
        assert!(best.is_none());

        let (scores, best) = estimator.positive_scores(&["cat"]);
        assert_eq!(scores.len(), 2);
        assert_eq!(best.as_deref(), Some("animals"));
    }
}
