use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;

use crate::http_client::{HttpClient, HttpRequest};
use crate::source::{IntradayQuote, IntradayRequest, IntradaySource, SourceError};
use crate::{Bar, BarSeries, Interval, UtcDateTime};

/// Yahoo Finance chart-endpoint adapter.
///
/// One GET per invocation against the public v8 chart endpoint. The same
/// response carries the session series and the issuer metadata the
/// dashboard needs (short name, previous close), so no second call is
/// made. No retry, no caching: every refresh cycle hits upstream fresh.
pub struct YahooAdapter {
    http_client: Arc<dyn HttpClient>,
}

impl YahooAdapter {
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self { http_client }
    }

    fn chart_endpoint(req: &IntradayRequest) -> String {
        let range = match req.interval {
            Interval::OneMinute | Interval::FiveMinutes | Interval::FifteenMinutes => "1d",
            Interval::OneHour => "5d",
            Interval::OneDay => "1mo",
        };

        format!(
            "https://query1.finance.yahoo.com/v8/finance/chart/{}?range={}&interval={}",
            urlencoding::encode(req.symbol.as_str()),
            range,
            req.interval.as_str()
        )
    }

    async fn fetch_chart(&self, req: &IntradayRequest) -> Result<IntradayQuote, SourceError> {
        let request = HttpRequest::get(Self::chart_endpoint(req))
            .with_header("referer", "https://finance.yahoo.com/");

        let response = self.http_client.execute(request).await.map_err(|e| {
            SourceError::unavailable(format!("yahoo transport error: {}", e.message()))
        })?;

        if !response.is_success() {
            return Err(SourceError::unavailable(format!(
                "yahoo returned status {}",
                response.status
            )));
        }

        parse_chart_response(&response.body, req)
    }
}

impl IntradaySource for YahooAdapter {
    fn intraday<'a>(
        &'a self,
        req: IntradayRequest,
    ) -> Pin<Box<dyn Future<Output = Result<IntradayQuote, SourceError>> + Send + 'a>> {
        Box::pin(async move { self.fetch_chart(&req).await })
    }
}

/// Parse the v8 chart payload into the normalized intraday shape.
///
/// An API-level `chart.error` or a missing result block maps to an empty
/// series, not a `SourceError`: "no data for this symbol right now" is
/// the expected market-closed/unknown-symbol outcome and the caller
/// handles it as absence. Only malformed JSON is an internal error.
fn parse_chart_response(body: &str, req: &IntradayRequest) -> Result<IntradayQuote, SourceError> {
    let chart_response: YahooChartResponse = serde_json::from_str(body)
        .map_err(|e| SourceError::internal(format!("failed to parse yahoo chart: {e}")))?;

    let empty = |name: Option<String>, previous_close: Option<f64>| IntradayQuote {
        name,
        previous_close,
        series: BarSeries::new(req.symbol.clone(), req.interval, Vec::new()),
    };

    if chart_response.chart.error.is_some() {
        return Ok(empty(None, None));
    }

    let Some(result) = chart_response.chart.result.into_iter().next() else {
        return Ok(empty(None, None));
    };

    let name = result.meta.short_name.clone();
    let previous_close = result
        .meta
        .previous_close
        .or(result.meta.chart_previous_close);

    let (Some(timestamp), Some(quote)) = (
        result.timestamp,
        result.indicators.quote.into_iter().next(),
    ) else {
        return Ok(empty(name, previous_close));
    };

    let mut bars = Vec::with_capacity(timestamp.len());
    for (i, &ts_value) in timestamp.iter().enumerate() {
        let Ok(ts) = UtcDateTime::from_unix_timestamp(ts_value) else {
            continue;
        };

        // Rows with any missing OHLC field are dropped, as are rows that
        // fail bar validation; the provider interleaves nulls freely.
        if let (Some(Some(open)), Some(Some(high)), Some(Some(low)), Some(Some(close))) = (
            quote.open.get(i),
            quote.high.get(i),
            quote.low.get(i),
            quote.close.get(i),
        ) {
            let volume = quote
                .volume
                .get(i)
                .copied()
                .flatten()
                .and_then(|v| u64::try_from(v).ok());

            if let Ok(bar) = Bar::new(ts, *open, *high, *low, *close, volume) {
                bars.push(bar);
            }
        }
    }

    Ok(IntradayQuote {
        name,
        previous_close,
        series: BarSeries::new(req.symbol.clone(), req.interval, bars),
    })
}

// Yahoo Finance chart API response structures.

#[derive(Debug, Clone, Deserialize)]
struct YahooChartResponse {
    chart: YahooChartData,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartData {
    #[serde(default)]
    result: Vec<YahooChartResult>,
    #[serde(default)]
    error: Option<YahooApiError>,
}

#[derive(Debug, Clone, Deserialize)]
#[allow(dead_code)]
struct YahooApiError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartResult {
    meta: YahooChartMeta,
    timestamp: Option<Vec<i64>>,
    indicators: YahooChartIndicators,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartMeta {
    #[serde(rename = "shortName", default)]
    short_name: Option<String>,
    #[serde(rename = "previousClose", default)]
    previous_close: Option<f64>,
    #[serde(rename = "chartPreviousClose", default)]
    chart_previous_close: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartIndicators {
    quote: Vec<YahooChartQuote>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartQuote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<i64>>,
}
