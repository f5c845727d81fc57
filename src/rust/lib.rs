//! A thread-safe naive-Bayes text classifier for routing and tagging short documents.
//!
//! Text is split on whitespace by a streaming tokenizer pipeline that drops
//! stopwords and lowercases what remains. Training accumulates token counts per
//! category; classification scores every known category with smoothed token
//! probabilities and a uniform category prior.
//!
//! # Basic Usage
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use bayesroute::Classifier;
//!
//! let classifier = Classifier::new();
//! classifier.train("кот сидит на окне", "animals")?;
//! classifier.train("акция выросла на бирже", "finance")?;
//!
//! let (label, confidence) = classifier.classify("кот и акция")?;
//! assert!(label == "animals" || label == "finance");
//! assert!(confidence > 0.0);
//!
//! let (scores, best) = classifier.get_prob("акция")?;
//! assert_eq!(best.as_deref(), Some("finance"));
//! assert!(scores["finance"] > scores["animals"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The classifier can be shared across threads using `Arc`. Training is an
//! exclusive writer; classification runs as a concurrent reader:
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use bayesroute::Classifier;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let classifier = Arc::new(Classifier::new());
//! classifier.train("кот сидит на окне", "animals")?;
//!
//! let mut handles = vec![];
//! for _ in 0..3 {
//!     let classifier = Arc::clone(&classifier);
//!     handles.push(thread::spawn(move || {
//!         classifier.classify("кот").unwrap();
//!     }));
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! # Ok(())
//! # }
//! ```

pub mod classifier;
mod runtime;
pub mod tokenizer;

pub use classifier::{
    Classifier, ClassifierBuilder, ClassifierError, ClassifierInfo, Estimator, FrequencyModel,
    FrequencyTables, TextClassifier,
};
pub use runtime::{PipelineConfig, DEFAULT_RELAY_BUFFER, DEFAULT_SOURCE_BUFFER};
pub use tokenizer::{
    is_not_stop_word, is_stop_word, mapper, predicate, Mapper, Predicate, StdTokenizer,
    StdTokenizerBuilder, StopwordTable, TokenStream, Tokenize,
};

pub fn init_logger() {
    env_logger::init();
}
