use std::sync::Arc;

use tokio::sync::watch;

use tickglow_core::{IntradaySource, ReqwestHttpClient, Symbol, YahooAdapter};
use tickglow_web::config::{DASHBOARD_SYMBOL, LISTEN_ADDR};
use tickglow_web::error::DashboardError;
use tickglow_web::refresh::{self, PageState};
use tickglow_web::server;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(error) = run().await {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code() as i32);
    }
}

async fn run() -> Result<(), DashboardError> {
    let symbol = Symbol::parse(DASHBOARD_SYMBOL)?;
    let source: Arc<dyn IntradaySource> =
        Arc::new(YahooAdapter::new(Arc::new(ReqwestHttpClient::new())));

    let (tx, rx) = watch::channel(PageState::Pending);
    tokio::spawn(refresh::run_cycles(source, symbol, tx));

    let listener = tokio::net::TcpListener::bind(LISTEN_ADDR).await?;
    log::info!("tickglow dashboard listening on http://{LISTEN_ADDR}");
    axum::serve(listener, server::router(rx)).await?;

    Ok(())
}
