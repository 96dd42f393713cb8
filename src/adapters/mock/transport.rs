//! Mock analyzer transport for testing.
//!
//! Allows injecting incoming messages (parsed or raw frames), capturing
//! outgoing messages and driving the connection state by hand.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{broadcast, watch, Mutex};

use crate::traits::AnalysisTransport;
use crate::websocket::{
    parse_incoming, WsConnectionState, WsError, WsIncomingMessage, WsOutgoingMessage,
};

/// Mock analyzer transport.
///
/// # Example
///
/// ```ignore
/// use solidlens::adapters::mock::MockTransport;
/// use solidlens::traits::AnalysisTransport;
///
/// let mock = MockTransport::new();
/// let mut rx = mock.subscribe();
/// mock.inject_raw(r#"{"time_complexity": "O(1)"}"#);
/// let msg = rx.recv().await?;
///
/// mock.send(WsOutgoingMessage::analyze("x = 1")).await?;
/// assert_eq!(mock.get_sent_messages().await.len(), 1);
/// ```
#[derive(Clone)]
pub struct MockTransport {
    incoming_tx: broadcast::Sender<WsIncomingMessage>,
    state_tx: Arc<watch::Sender<WsConnectionState>>,
    state_rx: watch::Receiver<WsConnectionState>,
    sent_messages: Arc<Mutex<Vec<WsOutgoingMessage>>>,
    send_should_fail: Arc<Mutex<bool>>,
}

impl MockTransport {
    /// Create a mock in the open state.
    pub fn new() -> Self {
        Self::with_state(WsConnectionState::Open)
    }

    /// Create a mock whose socket never opened.
    pub fn closed() -> Self {
        Self::with_state(WsConnectionState::Closed)
    }

    fn with_state(state: WsConnectionState) -> Self {
        let (incoming_tx, _) = broadcast::channel(100);
        let (state_tx, state_rx) = watch::channel(state);

        Self {
            incoming_tx,
            state_tx: Arc::new(state_tx),
            state_rx,
            sent_messages: Arc::new(Mutex::new(Vec::new())),
            send_should_fail: Arc::new(Mutex::new(false)),
        }
    }

    /// Deliver a message to all subscribers.
    pub fn inject_message(&self, msg: WsIncomingMessage) {
        let _ = self.incoming_tx.send(msg);
    }

    /// Deliver a raw text frame the way the real client does: frames that
    /// fail to parse are dropped. Returns whether the frame was delivered.
    pub fn inject_raw(&self, text: &str) -> bool {
        match parse_incoming(text) {
            Ok(msg) => {
                self.inject_message(msg);
                true
            }
            Err(_) => false,
        }
    }

    pub fn set_state(&self, state: WsConnectionState) {
        let _ = self.state_tx.send(state);
    }

    pub fn simulate_disconnect(&self) {
        self.set_state(WsConnectionState::Closed);
    }

    pub async fn get_sent_messages(&self) -> Vec<WsOutgoingMessage> {
        self.sent_messages.lock().await.clone()
    }

    /// Code payloads of every message sent so far.
    pub async fn sent_code(&self) -> Vec<String> {
        self.sent_messages
            .lock()
            .await
            .iter()
            .map(|msg| match msg {
                WsOutgoingMessage::Analyze(req) => req.code.clone(),
            })
            .collect()
    }

    pub async fn clear_sent_messages(&self) {
        self.sent_messages.lock().await.clear();
    }

    pub async fn set_send_should_fail(&self, should_fail: bool) {
        *self.send_should_fail.lock().await = should_fail;
    }

    pub fn subscriber_count(&self) -> usize {
        self.incoming_tx.receiver_count()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalysisTransport for MockTransport {
    async fn send(&self, msg: WsOutgoingMessage) -> Result<(), WsError> {
        if !self.is_open() {
            return Err(WsError::Disconnected);
        }
        if *self.send_should_fail.lock().await {
            return Err(WsError::SendFailed("Mock send failure".to_string()));
        }

        self.sent_messages.lock().await.push(msg);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<WsIncomingMessage> {
        self.incoming_tx.subscribe()
    }

    fn state(&self) -> watch::Receiver<WsConnectionState> {
        self.state_rx.clone()
    }

    async fn shutdown(&self) {
        self.set_state(WsConnectionState::Closed);
    }
}
