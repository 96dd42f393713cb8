use std::sync::Arc;
use std::time::Duration;

use futures_util::{Sink, SinkExt, Stream, StreamExt};
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::{self, Message};
use tracing::{debug, error, info, warn};

use super::messages::{parse_incoming, WsIncomingMessage, WsOutgoingMessage};

/// How long [`WsHandle::shutdown`] waits for the close handshake.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(1);

/// WebSocket connection errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WsError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Disconnected from server")]
    Disconnected,
    #[error("Send failed: {0}")]
    SendFailed(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// WebSocket connection state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WsConnectionState {
    #[default]
    Connecting,
    Open,
    Closed,
}

impl WsConnectionState {
    pub fn label(&self) -> &'static str {
        match self {
            WsConnectionState::Connecting => "connecting",
            WsConnectionState::Open => "live",
            WsConnectionState::Closed => "offline",
        }
    }
}

/// Configuration for WebSocket client
#[derive(Debug, Clone)]
pub struct WsClientConfig {
    pub url: String,
    pub connect_timeout: Duration,
}

impl Default for WsClientConfig {
    fn default() -> Self {
        Self {
            url: "ws://127.0.0.1:8000/ws/analyze".to_string(),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl WsClientConfig {
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

/// Cloneable sending half of a [`WsClient`].
#[derive(Debug, Clone)]
pub struct WsHandle {
    outgoing_tx: mpsc::Sender<WsOutgoingMessage>,
    state_rx: watch::Receiver<WsConnectionState>,
    shutdown_tx: Arc<watch::Sender<bool>>,
}

impl WsHandle {
    /// Queue a message for the connection task.
    pub async fn send(&self, msg: WsOutgoingMessage) -> Result<(), WsError> {
        if !self.is_open() {
            return Err(WsError::Disconnected);
        }
        self.outgoing_tx
            .send(msg)
            .await
            .map_err(|e| WsError::SendFailed(e.to_string()))
    }

    pub fn is_open(&self) -> bool {
        matches!(*self.state_rx.borrow(), WsConnectionState::Open)
    }

    pub fn state_receiver(&self) -> watch::Receiver<WsConnectionState> {
        self.state_rx.clone()
    }

    /// Ask the connection task to send a close frame and stop, without
    /// waiting for it.
    pub fn request_shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    /// Ask the connection task to close the socket and wait until it has
    /// stopped, or until [`SHUTDOWN_GRACE`] elapses.
    pub async fn shutdown(&self) {
        info!("Shutting down WebSocket client");
        self.request_shutdown();
        let mut state_rx = self.state_rx.clone();
        let stopped = state_rx.wait_for(|s| *s == WsConnectionState::Closed);
        if tokio::time::timeout(SHUTDOWN_GRACE, stopped).await.is_err() {
            warn!("Connection task still running after {:?}", SHUTDOWN_GRACE);
        }
    }
}

/// WebSocket client for the analyzer backend
pub struct WsClient {
    handle: WsHandle,
    incoming_rx: mpsc::Receiver<WsIncomingMessage>,
}

impl WsClient {
    /// Open the socket.
    ///
    /// Fails with [`WsError::ConnectionFailed`] if the handshake does not
    /// complete within the configured timeout. There is no retry.
    pub async fn connect(config: WsClientConfig) -> Result<Self, WsError> {
        let (ws_stream, _response) =
            tokio::time::timeout(config.connect_timeout, connect_async(config.url.as_str()))
                .await
                .map_err(|_| {
                    WsError::ConnectionFailed(format!(
                        "timed out after {}s",
                        config.connect_timeout.as_secs()
                    ))
                })?
                .map_err(|e| WsError::ConnectionFailed(e.to_string()))?;

        info!("Connected to analyzer at {}", config.url);

        let (ws_sink, ws_stream) = ws_stream.split();

        let (incoming_tx, incoming_rx) = mpsc::channel::<WsIncomingMessage>(100);
        let (outgoing_tx, outgoing_rx) = mpsc::channel::<WsOutgoingMessage>(100);
        let (state_tx, state_rx) = watch::channel(WsConnectionState::Open);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        tokio::spawn(run_connection_loop(
            ws_sink,
            ws_stream,
            incoming_tx,
            outgoing_rx,
            state_tx,
            shutdown_rx,
        ));

        Ok(Self {
            handle: WsHandle {
                outgoing_tx,
                state_rx,
                shutdown_tx: Arc::new(shutdown_tx),
            },
            incoming_rx,
        })
    }

    /// Split into the cloneable handle and the incoming receiver.
    pub fn split(self) -> (WsHandle, mpsc::Receiver<WsIncomingMessage>) {
        (self.handle, self.incoming_rx)
    }
}

/// Pump frames between the socket and the client channels until either side
/// goes away. The connection is never re-established.
async fn run_connection_loop<S, R>(
    mut ws_sink: S,
    mut ws_stream: R,
    incoming_tx: mpsc::Sender<WsIncomingMessage>,
    mut outgoing_rx: mpsc::Receiver<WsOutgoingMessage>,
    state_tx: watch::Sender<WsConnectionState>,
    mut shutdown_rx: watch::Receiver<bool>,
) where
    S: Sink<Message, Error = tungstenite::Error> + Unpin,
    R: Stream<Item = Result<Message, tungstenite::Error>> + Unpin,
{
    loop {
        tokio::select! {
            changed = shutdown_rx.changed() => {
                if changed.is_err() || *shutdown_rx.borrow() {
                    debug!("Shutdown signal received, closing connection");
                    let _ = ws_sink.close().await;
                    break;
                }
            }

            msg = ws_stream.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => match parse_incoming(&text) {
                        Ok(parsed) => {
                            debug!("Received analysis message");
                            if incoming_tx.send(parsed).await.is_err() {
                                warn!("Incoming channel closed, shutting down");
                                break;
                            }
                        }
                        Err(e) => {
                            // Skip malformed frames, the previous analysis stays current
                            warn!("Failed to parse message: {} - {}", e, text);
                        }
                    },
                    Some(Ok(Message::Ping(data))) => {
                        let _ = ws_sink.send(Message::Pong(data)).await;
                    }
                    Some(Ok(Message::Close(_))) => {
                        info!("Received close frame from analyzer");
                        break;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        error!("WebSocket error: {}", e);
                        break;
                    }
                    None => {
                        info!("WebSocket stream ended");
                        break;
                    }
                }
            }

            outgoing = outgoing_rx.recv() => {
                match outgoing {
                    Some(msg) => match serde_json::to_string(&msg) {
                        Ok(json) => {
                            debug!("Sending analyze request ({} bytes)", json.len());
                            if let Err(e) = ws_sink.send(Message::Text(json)).await {
                                error!("Failed to send message: {}", e);
                                break;
                            }
                        }
                        Err(e) => error!("Failed to serialize message: {}", e),
                    },
                    None => {
                        debug!("Outgoing channel closed, closing connection");
                        let _ = ws_sink.close().await;
                        break;
                    }
                }
            }
        }
    }

    info!("Connection loop ended");
    let _ = state_tx.send(WsConnectionState::Closed);
}
