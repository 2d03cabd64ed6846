//! Provider contract for the dashboard's single upstream call.
//!
//! A source answers one question per refresh cycle: "give me today's
//! intraday series for this symbol, plus whatever issuer metadata you
//! carry alongside it". The response shape is deliberately flat — the
//! snapshot derivation in [`crate::snapshot`] owns every computed field.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{BarSeries, Interval, Symbol};

/// Request payload for the intraday endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntradayRequest {
    pub symbol: Symbol,
    pub interval: Interval,
}

impl IntradayRequest {
    pub fn new(symbol: Symbol, interval: Interval) -> Self {
        Self { symbol, interval }
    }

    /// The dashboard's fixed shape: current trading day at one-minute granularity.
    pub fn current_day(symbol: Symbol) -> Self {
        Self::new(symbol, Interval::OneMinute)
    }
}

/// Normalized intraday payload: the session series plus issuer metadata.
///
/// Both metadata fields are optional; the provider may omit either, and
/// the snapshot derivation defines the fallback for each.
#[derive(Debug, Clone, PartialEq)]
pub struct IntradayQuote {
    pub name: Option<String>,
    pub previous_close: Option<f64>,
    pub series: BarSeries,
}

/// Adapter-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    Unavailable,
    InvalidRequest,
    Internal,
}

/// Structured source error surfaced to the refresh driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
}

impl SourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidRequest,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Internal,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Unavailable => "source.unavailable",
            SourceErrorKind::InvalidRequest => "source.invalid_request",
            SourceErrorKind::Internal => "source.internal",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Source adapter contract.
///
/// Implementations must be `Send + Sync`; the refresh driver holds the
/// adapter across `.await` points.
pub trait IntradaySource: Send + Sync {
    /// Fetches the current trading day's series and issuer metadata.
    ///
    /// An empty series is a valid, expected response (market closed,
    /// unknown symbol) and is **not** an error; callers decide how to
    /// treat it. Transport and parse failures return [`SourceError`].
    fn intraday<'a>(
        &'a self,
        req: IntradayRequest,
    ) -> Pin<Box<dyn Future<Output = Result<IntradayQuote, SourceError>> + Send + 'a>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_day_request_uses_one_minute_bars() {
        let req = IntradayRequest::current_day(Symbol::parse("AMZN").expect("symbol"));
        assert_eq!(req.interval, Interval::OneMinute);
    }

    #[test]
    fn error_display_includes_code() {
        let err = SourceError::unavailable("upstream returned status 502");
        assert_eq!(
            err.to_string(),
            "upstream returned status 502 (source.unavailable)"
        );
    }
}
