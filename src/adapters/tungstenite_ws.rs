//! Tungstenite-based analyzer transport.
//!
//! Wraps [`WsClient`] and implements the [`AnalysisTransport`] trait.

use async_trait::async_trait;
use tokio::sync::{broadcast, watch};
use tracing::debug;

use crate::traits::AnalysisTransport;
use crate::websocket::{
    WsClient, WsClientConfig, WsConnectionState, WsError, WsHandle, WsIncomingMessage,
    WsOutgoingMessage,
};

/// Analyzer connection over tokio-tungstenite.
///
/// # Example
///
/// ```ignore
/// use solidlens::adapters::TungsteniteWsConnection;
/// use solidlens::traits::AnalysisTransport;
/// use solidlens::websocket::{WsClientConfig, WsOutgoingMessage};
///
/// let connection = TungsteniteWsConnection::connect(WsClientConfig::default()).await?;
/// let mut rx = connection.subscribe();
/// connection.send(WsOutgoingMessage::analyze("x = 1")).await?;
/// ```
pub struct TungsteniteWsConnection {
    handle: WsHandle,
    incoming_tx: broadcast::Sender<WsIncomingMessage>,
}

impl TungsteniteWsConnection {
    /// Connect to the analyzer using the provided configuration.
    pub async fn connect(config: WsClientConfig) -> Result<Self, WsError> {
        let client = WsClient::connect(config).await?;
        let (handle, mut incoming_rx) = client.split();

        let (incoming_tx, _) = broadcast::channel(100);
        let forward_tx = incoming_tx.clone();

        // Forward parsed messages to every subscriber, in arrival order
        tokio::spawn(async move {
            while let Some(msg) = incoming_rx.recv().await {
                // Ignore send errors (no subscribers)
                let _ = forward_tx.send(msg);
            }
            debug!("Incoming forwarder finished");
        });

        Ok(Self {
            handle,
            incoming_tx,
        })
    }

    /// Connect to a specific URL with default timeouts.
    pub async fn connect_to(url: &str) -> Result<Self, WsError> {
        Self::connect(WsClientConfig::default().with_url(url)).await
    }
}

impl Drop for TungsteniteWsConnection {
    fn drop(&mut self) {
        self.handle.request_shutdown();
    }
}

#[async_trait]
impl AnalysisTransport for TungsteniteWsConnection {
    async fn send(&self, msg: WsOutgoingMessage) -> Result<(), WsError> {
        self.handle.send(msg).await
    }

    fn subscribe(&self) -> broadcast::Receiver<WsIncomingMessage> {
        self.incoming_tx.subscribe()
    }

    fn state(&self) -> watch::Receiver<WsConnectionState> {
        self.handle.state_receiver()
    }

    fn is_open(&self) -> bool {
        self.handle.is_open()
    }

    async fn shutdown(&self) {
        self.handle.shutdown().await;
    }
}
