//! Fixed dashboard configuration.
//!
//! The dashboard is deliberately a single-user, single-symbol page: no
//! CLI flags, no query parameters, no environment-driven configuration
//! (the `RUST_LOG` filter read by the logger is the one ambient
//! exception). Changing any of these is a recompile.

use std::time::Duration;

/// The one ticker the dashboard tracks.
pub const DASHBOARD_SYMBOL: &str = "AMZN";

/// Seconds between refresh cycles, also embedded in the page's refresh
/// directive and the on-page note.
pub const REFRESH_INTERVAL_SECS: u64 = 60;

pub const REFRESH_INTERVAL: Duration = Duration::from_secs(REFRESH_INTERVAL_SECS);

/// Local listen address for the page server.
pub const LISTEN_ADDR: &str = "127.0.0.1:8787";
