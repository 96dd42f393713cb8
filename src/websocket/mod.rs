//! WebSocket client for the analyzer backend.
//!
//! One socket per session, opened once. There is no reconnection: when the
//! connection closes it stays closed until the dashboard is restarted.

pub mod client;
pub mod messages;

pub use client::{
    WsClient, WsClientConfig, WsConnectionState, WsError, WsHandle, SHUTDOWN_GRACE,
};
pub use messages::{parse_incoming, AnalyzeRequest, WsIncomingMessage, WsOutgoingMessage};
