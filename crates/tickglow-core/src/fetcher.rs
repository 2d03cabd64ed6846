//! The data fetcher: one provider call, one derived snapshot.

use crate::snapshot::QuoteSnapshot;
use crate::source::{IntradayRequest, IntradaySource, SourceError};
use crate::Symbol;

/// Fetch the current trading day's quote snapshot for one symbol.
///
/// `Ok(None)` means the provider answered but had no intraday data
/// (market closed, unknown symbol) — an expected outcome the caller
/// must render as a notice, not a failure. Every other provider problem
/// propagates as [`SourceError`] and aborts the refresh cycle.
pub async fn fetch_quote(
    source: &dyn IntradaySource,
    symbol: &Symbol,
) -> Result<Option<QuoteSnapshot>, SourceError> {
    let request = IntradayRequest::current_day(symbol.clone());
    let payload = source.intraday(request).await?;
    Ok(QuoteSnapshot::derive(payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::IntradayQuote;
    use crate::{Bar, BarSeries, Interval, UtcDateTime};
    use std::future::Future;
    use std::pin::Pin;

    struct CannedSource {
        payload: Result<IntradayQuote, SourceError>,
    }

    impl IntradaySource for CannedSource {
        fn intraday<'a>(
            &'a self,
            _req: IntradayRequest,
        ) -> Pin<Box<dyn Future<Output = Result<IntradayQuote, SourceError>> + Send + 'a>>
        {
            let payload = self.payload.clone();
            Box::pin(async move { payload })
        }
    }

    fn series(bars: Vec<Bar>) -> BarSeries {
        BarSeries::new(
            Symbol::parse("AMZN").expect("symbol"),
            Interval::OneMinute,
            bars,
        )
    }

    #[tokio::test]
    async fn empty_series_maps_to_absent() {
        let source = CannedSource {
            payload: Ok(IntradayQuote {
                name: None,
                previous_close: Some(100.0),
                series: series(Vec::new()),
            }),
        };

        let snapshot = fetch_quote(&source, &Symbol::parse("AMZN").expect("symbol"))
            .await
            .expect("fetch should succeed");
        assert!(snapshot.is_none());
    }

    #[tokio::test]
    async fn populated_series_yields_snapshot() {
        let ts = UtcDateTime::parse("2024-01-02T14:30:00Z").expect("ts");
        let source = CannedSource {
            payload: Ok(IntradayQuote {
                name: Some(String::from("Amazon.com, Inc.")),
                previous_close: Some(100.0),
                series: series(vec![
                    Bar::new(ts, 100.0, 106.0, 99.0, 105.0, Some(1_000)).expect("bar")
                ]),
            }),
        };

        let snapshot = fetch_quote(&source, &Symbol::parse("AMZN").expect("symbol"))
            .await
            .expect("fetch should succeed")
            .expect("snapshot present");
        assert_eq!(snapshot.price, 105.0);
        assert_eq!(snapshot.change, 5.0);
    }

    #[tokio::test]
    async fn source_errors_propagate() {
        let source = CannedSource {
            payload: Err(SourceError::unavailable("upstream timeout")),
        };

        let err = fetch_quote(&source, &Symbol::parse("AMZN").expect("symbol"))
            .await
            .expect_err("must fail");
        assert!(err.message().contains("upstream timeout"));
    }
}
