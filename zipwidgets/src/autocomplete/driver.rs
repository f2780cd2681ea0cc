//! Async execution of suggestion lookups.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::SuggestionRequest;
use crate::error::SourceError;
use crate::source::SuggestionSource;

/// A finished lookup, ready for [`super::Autocomplete::apply`].
#[derive(Debug)]
pub struct Completion {
    pub generation: u64,
    pub query: String,
    pub result: Result<Vec<String>, SourceError>,
}

/// Runs suggestion lookups on tokio tasks.
///
/// Issuing a request cancels the one still in flight, so at most one lookup
/// runs at a time. Completions arrive over a channel and are applied by the
/// owner of the [`super::Autocomplete`], which keeps the widget single-writer.
/// Cancellation is best effort; the generation check in `apply` is what
/// guarantees a stale response is never shown.
///
/// Must be used from within a tokio runtime.
pub struct AutocompleteDriver {
    source: Arc<dyn SuggestionSource>,
    debounce: Option<Duration>,
    in_flight: Option<CancellationToken>,
    tx: mpsc::UnboundedSender<Completion>,
    rx: mpsc::UnboundedReceiver<Completion>,
}

impl AutocompleteDriver {
    pub fn new(source: Arc<dyn SuggestionSource>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            source,
            debounce: None,
            in_flight: None,
            tx,
            rx,
        }
    }

    /// Wait this long before sending each request.
    pub fn with_debounce(mut self, debounce: Option<Duration>) -> Self {
        self.debounce = debounce;
        self
    }

    /// Start a lookup, cancelling the previous one.
    pub fn issue(&mut self, request: SuggestionRequest) {
        self.cancel();

        let token = CancellationToken::new();
        self.in_flight = Some(token.clone());

        let source = Arc::clone(&self.source);
        let debounce = self.debounce;
        let tx = self.tx.clone();
        let SuggestionRequest { generation, query } = request;

        tokio::spawn(async move {
            let lookup_query = query.clone();
            let lookup = async move {
                if let Some(delay) = debounce {
                    tokio::time::sleep(delay).await;
                }
                source.suggest(&lookup_query).await
            };

            tokio::select! {
                _ = token.cancelled() => {
                    log::debug!("suggestion lookup cancelled generation={}", generation);
                }
                result = lookup => {
                    // Receiver gone means the driver was dropped.
                    let _ = tx.send(Completion { generation, query, result });
                }
            }
        });
    }

    /// Cancel the in-flight lookup, if any.
    pub fn cancel(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }

    /// Wait for the next completion. Pends until a lookup finishes; cancelled
    /// lookups produce no completion.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        self.rx.recv().await
    }

    /// Wait for the next completion for at most `timeout`.
    pub async fn next_completion_within(&mut self, timeout: Duration) -> Option<Completion> {
        tokio::time::timeout(timeout, self.rx.recv())
            .await
            .ok()
            .flatten()
    }

    /// Wait at most `timeout` for the completion of `generation`.
    ///
    /// Completions of older requests still queued (a lookup that finished
    /// after its caller stopped waiting) are discarded on the way.
    pub async fn completion_for(&mut self, generation: u64, timeout: Duration) -> Option<Completion> {
        let rx = &mut self.rx;
        let wanted = async {
            while let Some(completion) = rx.recv().await {
                if completion.generation == generation {
                    return Some(completion);
                }
                log::debug!(
                    "discarding late completion generation={} waiting for {}",
                    completion.generation,
                    generation
                );
            }
            None
        };
        tokio::time::timeout(timeout, wanted).await.ok().flatten()
    }

    /// A completion that is already available, without waiting.
    pub fn try_completion(&mut self) -> Option<Completion> {
        self.rx.try_recv().ok()
    }
}

impl Drop for AutocompleteDriver {
    fn drop(&mut self) {
        self.cancel();
    }
}
