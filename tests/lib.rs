//! Shared fixtures for the end-to-end dashboard behavior tests.

use std::future::Future;
use std::pin::Pin;

pub use std::sync::Arc;

pub use tickglow_core::{
    fetch_quote, HttpClient, HttpError, HttpRequest, HttpResponse, Symbol, YahooAdapter,
};

/// Transport double that always answers with one canned body.
pub struct StaticHttpClient {
    body: String,
}

impl StaticHttpClient {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

impl HttpClient for StaticHttpClient {
    fn execute<'a>(
        &'a self,
        _request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let response = HttpResponse::ok_json(self.body.clone());
        Box::pin(async move { Ok(response) })
    }
}

/// Build a Yahoo chart payload with flat per-minute bars at the given
/// closes and an optional `previousClose` in the metadata.
pub fn chart_body(previous_close: Option<f64>, closes: &[f64]) -> String {
    let timestamps = (0..closes.len())
        .map(|i| (1_704_206_400 + i as i64 * 60).to_string())
        .collect::<Vec<_>>()
        .join(",");
    fn num_list(closes: &[f64], f: impl Fn(f64) -> f64) -> String {
        closes
            .iter()
            .map(|&c| format!("{:.2}", f(c)))
            .collect::<Vec<_>>()
            .join(",")
    }
    let opens = num_list(closes, |c| c);
    let highs = num_list(closes, |c| c + 1.0);
    let lows = num_list(closes, |c| c - 1.0);
    let close_list = num_list(closes, |c| c);
    let volumes = (0..closes.len())
        .map(|i| (1_000 * (i as u64 + 1)).to_string())
        .collect::<Vec<_>>()
        .join(",");

    let prev = previous_close
        .map(|p| format!(r#""previousClose": {p},"#))
        .unwrap_or_default();

    format!(
        r#"{{
            "chart": {{
                "result": [{{
                    "meta": {{
                        "currency": "USD",
                        "symbol": "AMZN",
                        "shortName": "Amazon.com, Inc.",
                        {prev}
                        "regularMarketPrice": 0.0
                    }},
                    "timestamp": [{timestamps}],
                    "indicators": {{
                        "quote": [{{
                            "open": [{opens}],
                            "high": [{highs}],
                            "low": [{lows}],
                            "close": [{close_list}],
                            "volume": [{volumes}]
                        }}]
                    }}
                }}],
                "error": null
            }}
        }}"#
    )
}

/// Chart payload for a session with no data at all (market closed).
pub fn empty_chart_body() -> String {
    r#"{"chart":{"result":[{"meta":{"shortName":"Amazon.com, Inc."},"indicators":{"quote":[{}]}}],"error":null}}"#
        .to_string()
}

pub fn amzn() -> Symbol {
    Symbol::parse("AMZN").expect("AMZN is valid")
}

pub fn adapter_for(body: String) -> YahooAdapter {
    YahooAdapter::new(Arc::new(StaticHttpClient::new(body)))
}
