//! Single-route page server.
//!
//! `GET /` returns whatever the refresh driver last published. The
//! server never fetches or renders anything itself; it is a read-only
//! window onto the driver's latest value.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio::sync::watch;

use crate::refresh::PageState;
use crate::render;

pub fn router(rx: watch::Receiver<PageState>) -> Router {
    Router::new().route("/", get(serve_page)).with_state(rx)
}

async fn serve_page(State(rx): State<watch::Receiver<PageState>>) -> Response {
    let state = rx.borrow().clone();
    match state {
        PageState::Pending => {
            Html(render::render_notice("First refresh in progress.")).into_response()
        }
        PageState::Ready(html) => Html(html).into_response(),
        PageState::Failed(message) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("refresh failed: {message}\n"),
        )
            .into_response(),
    }
}
