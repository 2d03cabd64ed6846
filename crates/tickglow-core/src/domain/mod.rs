//! # Domain Models
//!
//! Canonical domain types for tickglow market data.
//!
//! All models are validated at construction: a [`Bar`] with `high < low`
//! or an out-of-range open/close is unrepresentable, and a [`Symbol`] is
//! always a normalized uppercase ticker. Rows a provider returns that
//! fail these invariants are skipped during normalization rather than
//! surfaced to the presentation layer.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Bar`] | OHLCV bar with timestamp |
//! | [`BarSeries`] | Ordered intraday bars for a symbol/interval |
//! | [`Symbol`] | Validated stock symbol |
//! | [`Interval`] | Bar interval (1m, 5m, 15m, 1h, 1d) |
//! | [`UtcDateTime`] | UTC timestamp |

mod interval;
mod models;
mod symbol;
mod timestamp;

pub use interval::Interval;
pub use models::{Bar, BarSeries};
pub use symbol::Symbol;
pub use timestamp::UtcDateTime;
