use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use parking_lot::RwLock;
use samsum_core::{
    classify, normalize_text, opening_greeting, Author, Intent, ListedProduct, Reply,
    TranscriptEntry,
};
use samsum_observability::AppMetrics;
use thiserror::Error;
use tokio::sync::{Mutex, Notify};
use tokio::time::{self, Instant};
use tracing::{info, instrument};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("chat widget is closed")]
    Closed,
}

#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Simulated "typing" pause before the bot entry lands in the
    /// transcript. The storefront uses one second.
    pub typing_delay: Duration,
    /// Products harvested from the host listing page. Stored for parity
    /// with the storefront; the classifier never reads them.
    pub products: Vec<ListedProduct>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            typing_delay: Duration::from_secs(1),
            products: Vec::new(),
        }
    }
}

/// One chat session: the rule table's caller, owner of the append-only
/// transcript. Constructed once per page session; there is no process-wide
/// singleton.
pub struct ChatWidget {
    session_id: String,
    typing_delay: Duration,
    products: Vec<ListedProduct>,
    transcript: RwLock<Vec<TranscriptEntry>>,
    next_seq: AtomicU64,
    // Serializes turns so a second submission waits for the pending reply
    // to land (FIFO; user/bot pairs stay adjacent).
    turn_gate: Mutex<()>,
    closed: AtomicBool,
    close_signal: Notify,
    metrics: Arc<AppMetrics>,
}

impl ChatWidget {
    pub fn new(config: WidgetConfig, metrics: Arc<AppMetrics>) -> Self {
        let widget = Self {
            session_id: Uuid::new_v4().to_string(),
            typing_delay: config.typing_delay,
            products: config.products,
            transcript: RwLock::new(Vec::new()),
            next_seq: AtomicU64::new(0),
            turn_gate: Mutex::new(()),
            closed: AtomicBool::new(false),
            close_signal: Notify::new(),
            metrics,
        };

        // The greeting is emitted unconditionally at session start; it does
        // not pass through the rule table.
        let greeting = opening_greeting();
        widget.append(Author::Bot, greeting.text, greeting.suggestions);
        widget
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn products(&self) -> &[ListedProduct] {
        &self.products
    }

    /// Handle one submitted line: normalize, classify, wait out the typing
    /// delay, append. Empty or whitespace-only input is dropped silently
    /// and leaves the transcript untouched.
    #[instrument(skip(self, raw), fields(session_id = %self.session_id))]
    pub async fn submit(&self, raw: &str) -> Result<Option<Reply>, WidgetError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(WidgetError::Closed);
        }

        let normalized = normalize_text(raw);
        if normalized.is_empty() {
            self.metrics.inc_empty_ignored();
            return Ok(None);
        }

        let _turn = self.turn_gate.lock().await;
        if self.closed.load(Ordering::SeqCst) {
            return Err(WidgetError::Closed);
        }

        // Measured from gate acquisition so queue wait behind an earlier
        // turn's typing delay does not count against this turn.
        let started = Instant::now();

        self.append(Author::User, raw.trim().to_string(), Vec::new());
        let reply = classify(&normalized);

        // Arm the close listener before the sleep so a close racing with
        // this turn cannot be missed.
        let closed = self.close_signal.notified();
        tokio::pin!(closed);
        tokio::select! {
            _ = time::sleep(self.typing_delay) => {}
            _ = &mut closed => {
                // Closed mid-delay: the pending reply is dropped without
                // being appended.
                return Err(WidgetError::Closed);
            }
        }

        self.append(Author::Bot, reply.text.clone(), reply.suggestions.clone());
        if reply.intent == Intent::Unknown {
            self.metrics.inc_fallback();
        }
        self.metrics.inc_message();
        self.metrics.observe_latency(started.elapsed());
        info!(intent = ?reply.intent, "message handled");

        Ok(Some(reply))
    }

    /// A tapped quick-reply label goes through the same path as typed
    /// input; there is no shortcut around classification.
    pub async fn activate_suggestion(&self, label: &str) -> Result<Option<Reply>, WidgetError> {
        self.metrics.inc_suggestion_resubmit();
        self.submit(label).await
    }

    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        self.transcript.read().clone()
    }

    /// Close the widget: later submissions fail and any reply pending its
    /// typing delay is cancelled.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.close_signal.notify_waiters();
    }

    fn append(&self, author: Author, text: String, suggestions: Vec<String>) {
        let entry = TranscriptEntry {
            seq: self.next_seq.fetch_add(1, Ordering::SeqCst),
            at: Utc::now(),
            author,
            text,
            suggestions,
        };
        self.transcript.write().push(entry);
    }
}
