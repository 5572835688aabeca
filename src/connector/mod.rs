//! # Connector Layer
//!
//! Transports implementing [`crate::application::HttpTransport`]:
//! - reqwest for real network calls
//! - an in-process recording transport for tests and dry runs

pub mod adapter;

pub use adapter::*;
