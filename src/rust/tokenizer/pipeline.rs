//! Streaming token pipeline
//!
//! Text flows through three stages running on their own threads:
//!
//! 1. scan: splits the source text on whitespace
//! 2. filter: drops words rejected by any predicate
//! 3. transform: applies every mapper in order
//!
//! Stages are connected by bounded queues, so a slow consumer blocks the
//! producers once their queue fills up. Every stage watches a shared
//! [`CancellationToken`]; dropping the [`TokenStream`] cancels it, disconnects
//! the queues and joins the workers.

use std::sync::mpsc::{self, Receiver, SyncSender};
use std::sync::Arc;
use std::thread::JoinHandle;

use log::{debug, error};
use tokio_util::sync::CancellationToken;

use crate::classifier::ClassifierError;
use crate::runtime::{spawn_stage, PipelineConfig};

/// A word filter. Returning false drops the word.
pub type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// A word transformation.
pub type Mapper = Arc<dyn Fn(String) -> String + Send + Sync>;

/// Wraps a closure as a [`Predicate`].
pub fn predicate<F>(f: F) -> Predicate
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wraps a closure as a [`Mapper`].
pub fn mapper<F>(f: F) -> Mapper
where
    F: Fn(String) -> String + Send + Sync + 'static,
{
    Arc::new(f)
}

/// A lazy, finite, non-restartable sequence of tokens.
///
/// Iterating blocks until the next token is available or every stage has
/// finished.
#[derive(Debug)]
pub struct TokenStream {
    tokens: Option<Receiver<String>>,
    workers: Vec<JoinHandle<()>>,
    cancel: CancellationToken,
}

impl TokenStream {
    /// Starts the scan, filter and transform stages for `text`.
    pub(crate) fn spawn(
        text: &str,
        filters: Vec<Predicate>,
        transforms: Vec<Mapper>,
        config: &PipelineConfig,
    ) -> Result<Self, ClassifierError> {
        config.validate()?;
        let cancel = CancellationToken::new();

        if text.trim().is_empty() {
            return Ok(Self { tokens: None, workers: Vec::new(), cancel });
        }

        let mut workers = Vec::with_capacity(3);
        let result = Self::start_stages(text, filters, transforms, config, &cancel, &mut workers);

        match result {
            Ok(tokens) => Ok(Self { tokens: Some(tokens), workers, cancel }),
            Err(e) => {
                // Stages that did start must not outlive the failed stream
                cancel.cancel();
                for worker in workers {
                    let _ = worker.join();
                }
                Err(e)
            }
        }
    }

    fn start_stages(
        text: &str,
        filters: Vec<Predicate>,
        transforms: Vec<Mapper>,
        config: &PipelineConfig,
        cancel: &CancellationToken,
        workers: &mut Vec<JoinHandle<()>>,
    ) -> Result<Receiver<String>, ClassifierError> {
        let (scan_tx, scan_rx) = mpsc::sync_channel(config.source_buffer);
        let source = text.to_owned();
        let token = cancel.clone();
        workers.push(spawn_stage(config, "scan", move || {
            scan(&source, &scan_tx, &token)
        })?);

        let (filter_tx, filter_rx) = mpsc::sync_channel(config.relay_buffer);
        let token = cancel.clone();
        workers.push(spawn_stage(config, "filter", move || {
            relay(scan_rx, &filter_tx, &token, |word| {
                filters.iter().all(|keep| keep(word.as_str())).then_some(word)
            })
        })?);

        let (map_tx, map_rx) = mpsc::sync_channel(config.relay_buffer);
        let token = cancel.clone();
        workers.push(spawn_stage(config, "transform", move || {
            relay(filter_rx, &map_tx, &token, |word| {
                Some(transforms.iter().fold(word, |acc, f| f(acc)))
            })
        })?);

        Ok(map_rx)
    }

    /// Stops every stage and discards any tokens not yet consumed.
    pub fn cancel(mut self) {
        self.shutdown();
    }

    /// Waits for every stage to exit, reporting a stage that panicked.
    ///
    /// Tokens not yet consumed are discarded.
    pub fn finish(mut self) -> Result<(), ClassifierError> {
        self.shutdown_checked()
    }

    /// Drains the stream into a vector and checks that every stage completed.
    pub fn collect_checked(mut self) -> Result<Vec<String>, ClassifierError> {
        let tokens: Vec<String> = self.by_ref().collect();
        self.shutdown_checked()?;
        Ok(tokens)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    fn shutdown_checked(&mut self) -> Result<(), ClassifierError> {
        self.cancel.cancel();
        self.tokens = None;
        let mut panicked = 0;
        for worker in self.workers.drain(..) {
            if worker.join().is_err() {
                panicked += 1;
            }
        }
        if panicked > 0 {
            error!("{} tokenizer stage(s) panicked", panicked);
            return Err(ClassifierError::TokenizerError(format!(
                "{} pipeline stage(s) panicked",
                panicked
            )));
        }
        Ok(())
    }

    fn shutdown(&mut self) {
        if let Err(e) = self.shutdown_checked() {
            debug!("Discarding pipeline failure during shutdown: {}", e);
        }
    }
}

impl Iterator for TokenStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let tokens = self.tokens.as_ref()?;
        match tokens.recv() {
            Ok(token) => Some(token),
            Err(_) => {
                self.tokens = None;
                None
            }
        }
    }
}

impl Drop for TokenStream {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn scan(source: &str, out: &SyncSender<String>, cancel: &CancellationToken) {
    for word in source.split_whitespace() {
        if cancel.is_cancelled() || out.send(word.to_owned()).is_err() {
            return;
        }
    }
}

fn relay<F>(input: Receiver<String>, out: &SyncSender<String>, cancel: &CancellationToken, mut step: F)
where
    F: FnMut(String) -> Option<String>,
{
    for word in input {
        if cancel.is_cancelled() {
            return;
        }
        if let Some(word) = step(word) {
            if out.send(word).is_err() {
                return;
            }
        }
    }
}
