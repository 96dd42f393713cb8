//! Analyzer transport trait abstraction.
//!
//! Provides a trait-based abstraction over the analyzer connection, enabling
//! dependency injection and mocking in tests.

use async_trait::async_trait;
use tokio::sync::{broadcast, watch};

use crate::websocket::{WsConnectionState, WsError, WsIncomingMessage, WsOutgoingMessage};

/// Trait for the analyzer connection.
///
/// Incoming messages are fanned out over a broadcast channel and connection
/// state is published on a watch channel, matching how the event loop
/// multiplexes them with `tokio::select!`.
///
/// # Example
///
/// ```ignore
/// use solidlens::traits::AnalysisTransport;
/// use solidlens::websocket::WsOutgoingMessage;
///
/// async fn analyze<T: AnalysisTransport>(transport: &T, code: &str) {
///     let mut rx = transport.subscribe();
///     if transport.is_open() {
///         transport.send(WsOutgoingMessage::analyze(code)).await?;
///     }
///     let reply = rx.recv().await?;
/// }
/// ```
#[async_trait]
pub trait AnalysisTransport: Send + Sync {
    /// Send a message to the analyzer.
    async fn send(&self, msg: WsOutgoingMessage) -> Result<(), WsError>;

    /// Subscribe to incoming messages.
    ///
    /// Messages received before the subscription are not replayed.
    fn subscribe(&self) -> broadcast::Receiver<WsIncomingMessage>;

    /// Receiver for connection state changes.
    fn state(&self) -> watch::Receiver<WsConnectionState>;

    /// Whether a send right now would reach the socket.
    fn is_open(&self) -> bool {
        matches!(*self.state().borrow(), WsConnectionState::Open)
    }

    /// Close the connection and wait, briefly, for the close handshake to go
    /// out. Further sends fail.
    async fn shutdown(&self);
}
