//! # Domain Layer
//!
//! Configuration, request/response models and the query-string rules.
//! This layer knows nothing about the HTTP library in use.

mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
