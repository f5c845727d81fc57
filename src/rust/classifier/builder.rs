use std::sync::Arc;

use log::info;

use super::classifier::Classifier;
use super::error::ClassifierError;
use crate::runtime::PipelineConfig;
use crate::tokenizer::{StdTokenizer, Tokenize};

/// A builder for constructing a Classifier with a fluent interface.
#[derive(Default)]
pub struct ClassifierBuilder {
    tokenizer: Option<Arc<dyn Tokenize>>,
    pipeline_config: Option<PipelineConfig>,
    training: Vec<(String, String)>,
}

impl ClassifierBuilder {
    /// Creates a new empty ClassifierBuilder instance with default configuration
    ///
    /// # Example
    /// ```
    /// use bayesroute::ClassifierBuilder;
    ///
    /// let builder = ClassifierBuilder::new();
    /// ```
    pub fn new() -> Self {
        Self {
            tokenizer: None,
            pipeline_config: None,
            training: Vec::new(),
        }
    }

    /// Uses a custom tokenizer instead of the standard stopword-filtering pipeline
    ///
    /// # Arguments
    /// * `tokenizer` - Any [`Tokenize`] implementation
    ///
    /// # Returns
    /// * `Result<Self, ClassifierError>` - An error if a tokenizer or pipeline
    ///   configuration was already set
    ///
    /// # Example
    /// ```
    /// use bayesroute::{ClassifierBuilder, StdTokenizer};
    ///
    /// let tokenizer = StdTokenizer::builder().with_filters(vec![]).build()?;
    /// let classifier = ClassifierBuilder::new()
    ///     .with_tokenizer(tokenizer)?
    ///     .build()?;
    /// # Ok::<(), bayesroute::ClassifierError>(())
    /// ```
    pub fn with_tokenizer<T: Tokenize + 'static>(mut self, tokenizer: T) -> Result<Self, ClassifierError> {
        self.ensure_tokenizer_unset()?;
        self.tokenizer = Some(Arc::new(tokenizer));
        Ok(self)
    }

    /// Sets the queue sizes of the standard tokenizer
    ///
    /// # Arguments
    /// * `config` - The PipelineConfig for the scan, filter and transform stages
    ///
    /// # Example
    /// ```
    /// use bayesroute::{ClassifierBuilder, PipelineConfig};
    ///
    /// let config = PipelineConfig { source_buffer: 16, ..Default::default() };
    /// let builder = ClassifierBuilder::new()
    ///     .with_pipeline_config(config);
    /// ```
    pub fn with_pipeline_config(mut self, config: PipelineConfig) -> Result<Self, ClassifierError> {
        self.ensure_tokenizer_unset()?;
        self.pipeline_config = Some(config);
        Ok(self)
    }

    /// Queues a training document, applied in order by [`build`](Self::build)
    ///
    /// # Example
    /// ```
    /// use bayesroute::ClassifierBuilder;
    ///
    /// let classifier = ClassifierBuilder::new()
    ///     .train("кот сидит на окне", "animals")
    ///     .train("акция выросла на бирже", "finance")
    ///     .build()?;
    /// assert_eq!(classifier.categories()?, vec!["animals", "finance"]);
    /// # Ok::<(), bayesroute::ClassifierError>(())
    /// ```
    pub fn train(mut self, document: impl Into<String>, category: impl Into<String>) -> Self {
        self.training.push((document.into(), category.into()));
        self
    }

    fn ensure_tokenizer_unset(&self) -> Result<(), ClassifierError> {
        if self.tokenizer.is_some() || self.pipeline_config.is_some() {
            return Err(ClassifierError::BuildError("Tokenizer already configured".to_string()));
        }
        Ok(())
    }

    /// Builds and returns the final Classifier instance
    ///
    /// # Returns
    /// * `Result<Classifier, ClassifierError>` - The constructed Classifier if successful, or an error if:
    ///   - The pipeline configuration is invalid
    ///   - A queued training document could not be tokenized
    pub fn build(self) -> Result<Classifier, ClassifierError> {
        let tokenizer: Arc<dyn Tokenize> = match (self.tokenizer, self.pipeline_config) {
            (Some(tokenizer), _) => tokenizer,
            (None, Some(config)) => {
                Arc::new(StdTokenizer::builder().with_pipeline_config(config).build()?)
            }
            (None, None) => {
                info!("No tokenizer configured, using the standard pipeline");
                Arc::new(StdTokenizer::new())
            }
        };

        let classifier = Classifier::with_tokenizer(tokenizer);
        for (document, category) in &self.training {
            classifier.train(document, category)?;
        }
        if !self.training.is_empty() {
            info!("Classifier built with {} training document(s)", self.training.len());
        }
        Ok(classifier)
    }
}
