pub mod builder;
#[allow(clippy::module_inception)]
pub mod classifier;
pub mod error;
pub mod estimator;
pub mod model;

pub use builder::ClassifierBuilder;
pub use classifier::Classifier;
pub use error::ClassifierError;
pub use estimator::Estimator;
pub use model::{FrequencyModel, FrequencyTables, MIN_TOKEN_WEIGHT};

/// The capability set shared by classifiers: learn from labelled text, then label new text.
pub trait TextClassifier: Send + Sync {
    /// Learns that `document` belongs to `category`.
    fn train(&self, document: &str, category: &str) -> Result<(), ClassifierError>;

    /// Returns the most likely category for `document` and its score.
    fn classify(&self, document: &str) -> Result<(String, f64), ClassifierError>;
}

/// Information about a classifier's current state
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierInfo {
    pub num_categories: usize,
    pub category_labels: Vec<String>,
    pub vocabulary_size: usize,
    pub training_events: u64,
}
