use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use super::builder::ClassifierBuilder;
use super::error::ClassifierError;
use super::estimator::Estimator;
use super::model::FrequencyModel;
use super::{ClassifierInfo, TextClassifier};
use crate::tokenizer::Tokenize;

/// A thread-safe naive-Bayes text classifier.
///
/// # Thread Safety
///
/// Training takes the model's write lock for the whole update; classification
/// holds the read lock for the whole computation. Share it across threads
/// with `Arc`:
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use bayesroute::Classifier;
/// use std::sync::Arc;
/// use std::thread;
///
/// let classifier = Arc::new(Classifier::new());
/// classifier.train("кот сидит на окне", "animals")?;
///
/// let reader = Arc::clone(&classifier);
/// let handle = thread::spawn(move || reader.classify("кот"));
/// classifier.train("акция выросла на бирже", "finance")?;
///
/// let (label, _confidence) = handle.join().unwrap()?;
/// assert_eq!(label, "animals");
/// # Ok(())
/// # }
/// ```
pub struct Classifier {
    model: FrequencyModel,
    tokenizer: Arc<dyn Tokenize>,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Classifier>();
    }
};

impl std::fmt::Debug for Classifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifier").field("model", &self.model).finish_non_exhaustive()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    /// Creates an empty classifier with the standard tokenizer
    pub fn new() -> Self {
        Self::with_tokenizer(Arc::new(crate::tokenizer::StdTokenizer::new()))
    }

    pub(crate) fn with_tokenizer(tokenizer: Arc<dyn Tokenize>) -> Self {
        Self {
            model: FrequencyModel::new(),
            tokenizer,
        }
    }

    /// Creates a new ClassifierBuilder for fluent construction
    pub fn builder() -> ClassifierBuilder {
        ClassifierBuilder::new()
    }

    /// Returns information about the classifier's current state
    pub fn info(&self) -> Result<ClassifierInfo, ClassifierError> {
        let tables = self.model.read()?;
        Ok(ClassifierInfo {
            num_categories: tables.num_categories(),
            category_labels: tables.categories().map(str::to_owned).collect(),
            vocabulary_size: tables.vocabulary_size(),
            training_events: tables.training_events(),
        })
    }

    /// Learns that `document` belongs to `category`.
    ///
    /// Empty documents and empty category names are accepted; either way the
    /// category's training count goes up by one.
    pub fn train(&self, document: &str, category: &str) -> Result<(), ClassifierError> {
        let tokens = self.tokenizer.tokens(document)?;
        debug!("Training '{}' with {} token(s)", category, tokens.len());
        self.model.train(&tokens, category)
    }

    /// Returns the best-scoring category for `document` and its score.
    pub fn classify(&self, document: &str) -> Result<(String, f64), ClassifierError> {
        if document.is_empty() {
            return Err(ClassifierError::EmptyInput);
        }
        let tokens = self.tokenizer.tokens(document)?;

        let tables = self.model.read()?;
        let (category, confidence) = Estimator::new(&tables)
            .best(&tokens)
            .ok_or(ClassifierError::NoMatch)?;
        debug!("Classified as '{}' with confidence {:e}", category, confidence);
        Ok((category.to_owned(), confidence))
    }

    /// Returns every positive category score for `document`, plus the best category.
    ///
    /// The best category is `None` when nothing scored above zero.
    pub fn get_prob(
        &self,
        document: &str,
    ) -> Result<(HashMap<String, f64>, Option<String>), ClassifierError> {
        let tokens = self.tokenizer.tokens(document)?;
        let tables = self.model.read()?;
        Ok(Estimator::new(&tables).positive_scores(&tokens))
    }

    /// Likelihood of `document` under `category`, ignoring the category prior.
    pub fn text_prob(&self, document: &str, category: &str) -> Result<f64, ClassifierError> {
        let tokens = self.tokenizer.tokens(document)?;
        let tables = self.model.read()?;
        Ok(Estimator::new(&tables).text_prob(&tokens, category))
    }

    /// Score of `document` for `category`, as compared by [`classify`](Self::classify).
    pub fn score(&self, document: &str, category: &str) -> Result<f64, ClassifierError> {
        let tokens = self.tokenizer.tokens(document)?;
        let tables = self.model.read()?;
        Ok(Estimator::new(&tables).score(&tokens, category))
    }

    /// Known categories in lexicographic order
    pub fn categories(&self) -> Result<Vec<String>, ClassifierError> {
        Ok(self.model.read()?.categories().map(str::to_owned).collect())
    }

    /// Number of [`train`](Self::train) calls that named `category`
    pub fn training_count(&self, category: &str) -> Result<u64, ClassifierError> {
        Ok(self.model.read()?.training_count(category))
    }

    pub fn count_in_category(&self, token: &str, category: &str) -> Result<u64, ClassifierError> {
        Ok(self.model.read()?.count_in_category(token, category))
    }

    /// Tokens `text` with this classifier's tokenizer.
    pub fn tokens(&self, text: &str) -> Result<Vec<String>, ClassifierError> {
        self.tokenizer.tokens(text)
    }
}

impl TextClassifier for Classifier {
    fn train(&self, document: &str, category: &str) -> Result<(), ClassifierError> {
        Classifier::train(self, document, category)
    }

    fn classify(&self, document: &str) -> Result<(String, f64), ClassifierError> {
        Classifier::classify(self, document)
    }
}
