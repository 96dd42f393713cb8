//! Debounced link between editor changes and the analyzer transport.
//!
//! The link owns the (optional) transport and a [`Debouncer`]. Edits are
//! scheduled with [`AnalysisLink::schedule`]; the event loop sleeps until
//! [`AnalysisLink::next_deadline`] and then calls [`AnalysisLink::flush_due`].

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{broadcast, watch};
use tracing::{debug, info, warn};

use crate::debounce::Debouncer;
use crate::traits::AnalysisTransport;
use crate::websocket::{WsConnectionState, WsIncomingMessage, WsOutgoingMessage};

/// What a call to [`AnalysisLink::flush_due`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushOutcome {
    /// Nothing was due
    Idle,
    /// The pending snippet went out on the socket
    Sent,
    /// The pending snippet was due but the socket was not open
    Dropped,
}

pub struct AnalysisLink {
    transport: Option<Arc<dyn AnalysisTransport>>,
    debouncer: Debouncer<String>,
    sent: u64,
    dropped: u64,
}

impl std::fmt::Debug for AnalysisLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisLink")
            .field("connected", &self.transport.is_some())
            .field("pending", &self.debouncer.is_pending())
            .field("sent", &self.sent)
            .field("dropped", &self.dropped)
            .finish()
    }
}

impl AnalysisLink {
    pub fn new(transport: Arc<dyn AnalysisTransport>, delay: Duration) -> Self {
        Self {
            transport: Some(transport),
            debouncer: Debouncer::new(delay),
            sent: 0,
            dropped: 0,
        }
    }

    /// A link whose socket never opened. Every flush is dropped.
    pub fn offline(delay: Duration) -> Self {
        Self {
            transport: None,
            debouncer: Debouncer::new(delay),
            sent: 0,
            dropped: 0,
        }
    }

    pub fn transport(&self) -> Option<&Arc<dyn AnalysisTransport>> {
        self.transport.as_ref()
    }

    pub fn subscribe(&self) -> Option<broadcast::Receiver<WsIncomingMessage>> {
        self.transport.as_ref().map(|t| t.subscribe())
    }

    pub fn state_receiver(&self) -> Option<watch::Receiver<WsConnectionState>> {
        self.transport.as_ref().map(|t| t.state())
    }

    /// Current connection state; `Closed` when there is no transport.
    pub fn connection_state(&self) -> WsConnectionState {
        match &self.transport {
            Some(t) => *t.state().borrow(),
            None => WsConnectionState::Closed,
        }
    }

    pub fn delay(&self) -> Duration {
        self.debouncer.delay()
    }

    /// Queue `code` for sending once edits have been quiet for the delay.
    pub fn schedule(&mut self, code: String, now: Instant) {
        self.debouncer.push(code, now);
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    pub fn has_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn sent_count(&self) -> u64 {
        self.sent
    }

    pub fn dropped_count(&self) -> u64 {
        self.dropped
    }

    /// Send the pending snippet if its window has elapsed.
    pub async fn flush_due(&mut self, now: Instant) -> FlushOutcome {
        let Some(code) = self.debouncer.take_due(now) else {
            return FlushOutcome::Idle;
        };

        let transport = match &self.transport {
            Some(t) if t.is_open() => t,
            _ => {
                debug!("Socket not open, dropping analysis request ({} bytes)", code.len());
                self.dropped += 1;
                return FlushOutcome::Dropped;
            }
        };

        match transport.send(WsOutgoingMessage::analyze(code)).await {
            Ok(()) => {
                self.sent += 1;
                FlushOutcome::Sent
            }
            Err(e) => {
                warn!("Failed to send analysis request: {}", e);
                self.dropped += 1;
                FlushOutcome::Dropped
            }
        }
    }

    /// Discard any pending edit and close the socket, waiting for the close
    /// frame to go out.
    ///
    /// Returns the discarded snippet, if one was waiting.
    pub async fn unmount(&mut self) -> Option<String> {
        let discarded = self.debouncer.cancel();
        if discarded.is_some() {
            debug!("Discarding pending analysis request on unmount");
        }
        if let Some(transport) = self.transport.take() {
            info!("Closing analyzer connection");
            transport.shutdown().await;
        }
        discarded
    }
}
