//! Per-cycle quote snapshot and its derivation rules.
//!
//! A [`QuoteSnapshot`] is rebuilt from scratch on every refresh cycle and
//! discarded at the end of it; nothing here persists or caches. The
//! derivation rules are the dashboard's behavioral contract:
//!
//! - `price` is the close of the most recent bar.
//! - `change` is `price - previous_close`, where a missing previous
//!   close defaults to `price` itself (change and percent both zero).
//! - `change_pct` is `change / previous_close * 100`, guarded to `0`
//!   when the previous close is zero or absent. The guard deliberately
//!   reads a metadata outage as "no change" rather than an error.
//! - `high`/`low` span the whole session series, not the latest bar.
//! - `volume` is the latest bar's volume, not a session sum.

use serde::{Deserialize, Serialize};

use crate::source::IntradayQuote;
use crate::{BarSeries, Symbol};

/// Direction class for the price card.
///
/// Classification is inclusive: a change of exactly zero counts as `Up`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn from_change(change: f64) -> Self {
        if change >= 0.0 {
            Self::Up
        } else {
            Self::Down
        }
    }

    /// Styling class used by the price card markup.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Up => "price-diff-up",
            Self::Down => "price-diff-down",
        }
    }

    pub const fn sign(self) -> &'static str {
        match self {
            Self::Up => "+",
            Self::Down => "-",
        }
    }
}

/// The single transient record describing one refresh cycle's data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSnapshot {
    pub name: String,
    pub symbol: Symbol,
    pub price: f64,
    pub change: f64,
    pub change_pct: f64,
    pub high: f64,
    pub low: f64,
    pub volume: u64,
    pub series: BarSeries,
}

impl QuoteSnapshot {
    /// Derive a snapshot from a provider payload.
    ///
    /// Returns `None` when the intraday series is empty — the expected
    /// market-closed/no-data outcome, handled by the caller as a
    /// first-class absence rather than an error.
    pub fn derive(payload: IntradayQuote) -> Option<Self> {
        let IntradayQuote {
            name,
            previous_close,
            series,
        } = payload;

        let latest = series.latest()?;
        let price = latest.close;
        let volume = latest.volume.unwrap_or(0);

        let previous_close = previous_close.unwrap_or(price);
        let change = price - previous_close;
        let change_pct = if previous_close != 0.0 {
            change / previous_close * 100.0
        } else {
            0.0
        };

        // latest() returned Some, so the extremes exist too.
        let high = series.session_high()?;
        let low = series.session_low()?;

        Some(Self {
            name: name.unwrap_or_else(|| series.symbol.as_str().to_owned()),
            symbol: series.symbol.clone(),
            price,
            change,
            change_pct,
            high,
            low,
            volume,
            series,
        })
    }

    pub fn trend(&self) -> Trend {
        Trend::from_change(self.change)
    }
}
