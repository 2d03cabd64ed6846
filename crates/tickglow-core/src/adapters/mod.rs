//! Provider adapters.
//!
//! Yahoo Finance is the only upstream the dashboard talks to; the
//! [`crate::source::IntradaySource`] trait is the seam for swapping it
//! out in tests.

mod yahoo;

pub use yahoo::YahooAdapter;
