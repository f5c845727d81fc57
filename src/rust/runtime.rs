use std::io;
use std::thread::{self, JoinHandle};

use crate::classifier::ClassifierError;

/// Queue capacity of the stage that scans words out of the source text.
pub const DEFAULT_SOURCE_BUFFER: usize = 100;
/// Queue capacity of every filter/transform stage.
pub const DEFAULT_RELAY_BUFFER: usize = 50;

/// Settings for the worker threads and queues of a tokenizer pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Capacity of the queue fed by the scanning stage
    pub source_buffer: usize,
    /// Capacity of the queues fed by the filter and transform stages
    pub relay_buffer: usize,
    /// Prefix for stage thread names
    pub thread_name: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_buffer: DEFAULT_SOURCE_BUFFER,
            relay_buffer: DEFAULT_RELAY_BUFFER,
            thread_name: "bayesroute".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Checks that every queue can hold at least one token.
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if self.source_buffer == 0 {
            return Err(ClassifierError::ValidationError(
                "Source buffer size must be greater than zero".into(),
            ));
        }
        if self.relay_buffer == 0 {
            return Err(ClassifierError::ValidationError(
                "Relay buffer size must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// Starts a named pipeline stage on its own OS thread.
pub(crate) fn spawn_stage<F>(
    config: &PipelineConfig,
    stage: &str,
    body: F,
) -> Result<JoinHandle<()>, ClassifierError>
where
    F: FnOnce() + Send + 'static,
{
    thread::Builder::new()
        .name(format!("{}-{}", config.thread_name, stage))
        .spawn(body)
        .map_err(|e: io::Error| {
            log::error!("Failed to spawn {} stage: {}", stage, e);
            ClassifierError::TokenizerError(format!("Failed to spawn {} stage: {}", stage, e))
        })
}
