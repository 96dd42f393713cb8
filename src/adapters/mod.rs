//! Concrete implementations of trait abstractions.
//!
//! - [`TungsteniteWsConnection`] - analyzer transport over tokio-tungstenite
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockTransport`] - message injection and send capture

pub mod mock;
pub mod tungstenite_ws;

pub use mock::MockTransport;
pub use tungstenite_ws::TungsteniteWsConnection;
