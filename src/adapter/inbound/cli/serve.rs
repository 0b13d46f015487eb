//! Handler for `serve`.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::adapter::inbound::cli::command::ServeArgs;
use crate::adapter::inbound::cli::{config, output};
use crate::adapter::inbound::http::{serve, HttpState};
use crate::error::Result;
use crate::infrastructure::bootstrap;

/// Execute `serve`. Runs until Ctrl-C.
pub async fn execute(args: &ServeArgs) -> Result<()> {
    let mut config = config::load(&args.config.path)?;
    if let Some(ref bind) = args.bind {
        config.server.bind = bind.clone();
        config.validate()?;
    }
    super::init_logging(&config, false);

    let provider = bootstrap::build_provider(&config)?;
    let scanner = bootstrap::build_scanner(&config, provider);
    let recorder = bootstrap::build_recorder(&config)?;
    let state = Arc::new(HttpState::new(scanner, recorder, config.selection.clone()));

    let listener = TcpListener::bind(&config.server.bind).await?;

    output::header(env!("CARGO_PKG_VERSION"));
    output::success(&format!(
        "Listening on {}",
        output::highlight(format!("http://{}", config.server.bind))
    ));
    output::note("GET /offers, POST /bets, GET /health");

    serve(listener, state, async {
        let _ = tokio::signal::ctrl_c().await;
        info!("Shutdown signal received");
    })
    .await
}
