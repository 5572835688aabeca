//! # Application Layer
//!
//! The autocomplete client and the transport seam it drives.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
