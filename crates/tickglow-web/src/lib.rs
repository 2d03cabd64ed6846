//! # tickglow Web
//!
//! Presentation layer and refresh driver for the tickglow dashboard.
//!
//! The split follows the data flow, one direction only:
//!
//! - [`render`] — pure snapshot-to-HTML functions (page, chart, formats)
//! - [`refresh`] — the fetch -> render -> sleep cycle and its published
//!   [`refresh::PageState`]
//! - [`server`] — a single-route axum app serving the latest page
//! - [`config`] — the fixed symbol, interval, and listen address
//!
//! The binary (`tickglow`) wires these together; everything here is a
//! library so the behavior is testable without a network or a socket.

pub mod config;
pub mod error;
pub mod refresh;
pub mod render;
pub mod server;

pub use error::DashboardError;
pub use refresh::PageState;
