//! # tickglow Core
//!
//! Data-fetching core for the tickglow live dashboard.
//!
//! ## Overview
//!
//! This crate owns everything between the wire and the page:
//!
//! - **Validated domain models** for symbols, intervals, and OHLCV bars
//! - **Provider contract** ([`IntradaySource`]) with structured errors
//! - **HTTP client abstraction** over reqwest, mockable in tests
//! - **Yahoo Finance adapter** for the v8 chart endpoint
//! - **Snapshot derivation** — the per-cycle record the page renders
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tickglow_core::{fetch_quote, ReqwestHttpClient, Symbol, YahooAdapter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let adapter = YahooAdapter::new(Arc::new(ReqwestHttpClient::new()));
//!     let symbol = Symbol::parse("AMZN")?;
//!
//!     match fetch_quote(&adapter, &symbol).await? {
//!         Some(snapshot) => println!("{} ${:.2}", snapshot.symbol, snapshot.price),
//!         None => println!("no intraday data (market closed?)"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! The empty-series case is not an error: [`fetch_quote`] returns
//! `Ok(None)` and the caller renders a notice. Transport, status, and
//! parse failures return [`SourceError`] with a
//! [`SourceErrorKind`] classification and abort the cycle that hit them.

pub mod adapters;
pub mod domain;
pub mod error;
pub mod fetcher;
pub mod http_client;
pub mod snapshot;
pub mod source;

// Re-export commonly used types at crate root for convenience.

pub use adapters::YahooAdapter;

pub use domain::{Bar, BarSeries, Interval, Symbol, UtcDateTime};

pub use error::ValidationError;

pub use fetcher::fetch_quote;

pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

pub use snapshot::{QuoteSnapshot, Trend};

pub use source::{IntradayQuote, IntradayRequest, IntradaySource, SourceError, SourceErrorKind};
