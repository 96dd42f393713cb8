//! Trait abstractions for dependency injection and testability.
//!
//! - [`AnalysisTransport`] - the analyzer connection, so the dashboard can run
//!   against a real socket or an in-memory mock

pub mod transport;

pub use transport::AnalysisTransport;
