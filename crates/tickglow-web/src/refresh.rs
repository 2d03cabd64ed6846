//! The refresh driver: the explicit fetch -> render -> sleep loop.
//!
//! Each cycle rebuilds the complete snapshot and the complete page from
//! scratch and publishes the result as a plain value through a watch
//! channel. There is no incremental update, no jitter, no backoff, and
//! no skip-if-unchanged; the loop only ends when the process dies.

use std::sync::Arc;

use tokio::sync::watch;

use tickglow_core::{fetch_quote, IntradaySource, Symbol, UtcDateTime};

use crate::config::REFRESH_INTERVAL;
use crate::render;

/// Latest rendered page, as published by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    /// No cycle has completed yet.
    Pending,
    /// A complete page: the dashboard, or the no-data notice.
    Ready(String),
    /// The cycle aborted on a provider failure; served as a bare 500.
    Failed(String),
}

/// Run one refresh cycle: fetch, derive, render.
pub async fn run_cycle(source: &dyn IntradaySource, symbol: &Symbol) -> PageState {
    match fetch_quote(source, symbol).await {
        Ok(Some(snapshot)) => {
            log::info!(
                "refreshed {}: price={:.2} change={:+.2} bars={}",
                snapshot.symbol,
                snapshot.price,
                snapshot.change,
                snapshot.series.bars.len()
            );
            PageState::Ready(render::render_dashboard(&snapshot, UtcDateTime::now()))
        }
        Ok(None) => {
            log::warn!("no intraday data for {symbol}; rendering notice");
            PageState::Ready(render::render_notice(&format!(
                "Failed to fetch {symbol} data (market closed or no data)."
            )))
        }
        Err(error) => {
            log::error!("refresh cycle for {symbol} failed: {error}");
            PageState::Failed(error.to_string())
        }
    }
}

/// Drive refresh cycles forever, pausing the full interval between them.
pub async fn run_cycles(
    source: Arc<dyn IntradaySource>,
    symbol: Symbol,
    tx: watch::Sender<PageState>,
) {
    loop {
        let state = run_cycle(source.as_ref(), &symbol).await;
        tx.send_replace(state);
        tokio::time::sleep(REFRESH_INTERVAL).await;
    }
}
