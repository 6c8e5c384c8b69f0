//! Integration tests library for the tronalddump.io client
//!
//! This crate contains shared utilities and helpers for integration testing.

pub mod common;

// Re-export commonly used types for tests
pub use mockito::{Matcher, Server, ServerGuard};
pub use serde_json::{json, Value};
pub use tronald_client::{ClientConfig, TronaldClient};
pub use tronald_core::{Error, Page, Pageable, Quote, QuoteApi};
