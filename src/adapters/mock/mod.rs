//! Mock implementations for testing.
//!
//! - [`MockTransport`] - analyzer connection with message injection

pub mod transport;

pub use transport::MockTransport;
