//! Async client for the tronalddump.io quotes API.
//!
//! ```no_run
//! use tronald_client::{Pageable, TronaldClient};
//!
//! # async fn run() -> tronald_client::Result<()> {
//! let client = TronaldClient::new()?;
//! let quote = client.get_random_quote(Some("Barack Obama")).await?;
//! println!("{}", quote.value);
//!
//! let page = client.search("wall", Pageable::new(1, 10)?).await?;
//! for quote in &page {
//!     println!("{}: {}", quote.id, quote.value);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod endpoints;
mod error_handling;

pub use client::TronaldClient;
pub use config::ClientConfig;
pub use tronald_core::{
    ApiError, ArgumentError, Error, ErrorCategory, Page, Pageable, PageableBuilder, Quote,
    QuoteApi, Result, TransportError,
};
