mod pipeline;
mod stopword_list;
mod stopwords;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::info;

use crate::classifier::ClassifierError;
use crate::runtime::PipelineConfig;

pub use pipeline::{mapper, predicate, Mapper, Predicate, TokenStream};
pub use stopwords::{is_not_stop_word, is_stop_word, StopwordTable};

/// Turns raw text into a sequence of normalized tokens.
///
/// Implementations must be deterministic: the classifier tokenizes the same
/// document once per call and relies on getting the same tokens back.
pub trait Tokenize: Send + Sync {
    /// Produces every token of `text` in order.
    fn tokens(&self, text: &str) -> Result<Vec<String>, ClassifierError>;

    /// Counts how many times each token occurs in `text`.
    fn word_counts(&self, text: &str) -> Result<HashMap<String, usize>, ClassifierError> {
        let mut counts = HashMap::new();
        for token in self.tokens(text)? {
            *counts.entry(token).or_insert(0) += 1;
        }
        Ok(counts)
    }
}

/// The standard whitespace tokenizer: scan, filter, then transform, each on its own thread.
///
/// Defaults to dropping Russian stopwords and lowercasing what remains.
///
/// ```rust
/// use bayesroute::StdTokenizer;
///
/// let tokenizer = StdTokenizer::new();
/// let tokens: Vec<String> = tokenizer.tokenize("Кот И собака")?.collect();
/// assert_eq!(tokens, vec!["кот", "собака"]);
/// # Ok::<(), bayesroute::ClassifierError>(())
/// ```
#[derive(Clone)]
pub struct StdTokenizer {
    filters: Vec<Predicate>,
    transforms: Vec<Mapper>,
    config: PipelineConfig,
}

impl fmt::Debug for StdTokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdTokenizer")
            .field("filters", &self.filters.len())
            .field("transforms", &self.transforms.len())
            .field("config", &self.config)
            .finish()
    }
}

impl Default for StdTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl StdTokenizer {
    /// Creates a tokenizer with the default filter, transform and buffer sizes.
    pub fn new() -> Self {
        Self {
            filters: vec![predicate(is_not_stop_word)],
            transforms: vec![mapper(|word| word.to_lowercase())],
            config: PipelineConfig::default(),
        }
    }

    pub fn builder() -> StdTokenizerBuilder {
        StdTokenizerBuilder::new()
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Starts streaming the tokens of `text`.
    ///
    /// Each call starts a fresh pipeline; a stream cannot be rewound.
    pub fn tokenize(&self, text: &str) -> Result<TokenStream, ClassifierError> {
        TokenStream::spawn(text, self.filters.clone(), self.transforms.clone(), &self.config)
    }
}

impl Tokenize for StdTokenizer {
    fn tokens(&self, text: &str) -> Result<Vec<String>, ClassifierError> {
        self.tokenize(text)?.collect_checked()
    }
}

/// A builder for [`StdTokenizer`] with a fluent interface.
#[derive(Clone)]
pub struct StdTokenizerBuilder {
    filters: Option<Vec<Predicate>>,
    transforms: Option<Vec<Mapper>>,
    config: PipelineConfig,
}

impl Default for StdTokenizerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StdTokenizerBuilder {
    pub fn new() -> Self {
        Self {
            filters: None,
            transforms: None,
            config: PipelineConfig::default(),
        }
    }

    /// Sets the capacity of the queue fed by the scanning stage
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.config.source_buffer = size;
        self
    }

    /// Sets the capacity of the queues between filter and transform stages
    pub fn with_relay_buffer_size(mut self, size: usize) -> Self {
        self.config.relay_buffer = size;
        self
    }

    pub fn with_pipeline_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the filter list. An empty list keeps every word.
    pub fn with_filters(mut self, filters: Vec<Predicate>) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Replaces the transform list. An empty list passes words through unchanged.
    pub fn with_transforms(mut self, transforms: Vec<Mapper>) -> Self {
        self.transforms = Some(transforms);
        self
    }

    /// Appends a filter after the current ones (the defaults, if none were set).
    pub fn add_filter(mut self, filter: Predicate) -> Self {
        self.filters
            .get_or_insert_with(|| vec![predicate(is_not_stop_word)])
            .push(filter);
        self
    }

    /// Appends a transform after the current ones (the defaults, if none were set).
    pub fn add_transform(mut self, transform: Mapper) -> Self {
        self.transforms
            .get_or_insert_with(|| vec![mapper(|word| word.to_lowercase())])
            .push(transform);
        self
    }

    /// Filters words against `table` instead of the built-in stopwords.
    pub fn with_stopwords(self, table: StopwordTable) -> Self {
        let table = Arc::new(table);
        self.with_filters(vec![predicate(move |word| !table.contains(word))])
    }

    pub fn build(self) -> Result<StdTokenizer, ClassifierError> {
        self.config.validate()?;
        let defaults = StdTokenizer::new();
        let tokenizer = StdTokenizer {
            filters: self.filters.unwrap_or(defaults.filters),
            transforms: self.transforms.unwrap_or(defaults.transforms),
            config: self.config,
        };
        info!(
            "Tokenizer built: {} filter(s), {} transform(s), buffers {}/{}",
            tokenizer.filters.len(),
            tokenizer.transforms.len(),
            tokenizer.config.source_buffer,
            tokenizer.config.relay_buffer
        );
        Ok(tokenizer)
    }
}
