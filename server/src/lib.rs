//! Serves the single-page application shell for every route of the table so
//! history-mode URLs survive a reload, and the built assets for everything
//! else.

pub mod config;
pub mod error;
pub mod logging;
pub mod shell;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

pub use config::{Config, Environment};
pub use error::ServerError;
pub use shell::{app, ShellState};

pub async fn serve(config: Config) -> Result<(), ServerError> {
    let table = route_table::build();
    for conflict in table.conflicts() {
        warn!("{conflict}");
    }

    let state = Arc::new(ShellState::load(table, config.dist_dir()).await?);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let local = listener.local_addr()?;

    info!(env = ?config.env, dist = %state.dist_dir().display(), "listening on http://{local}");

    axum::serve(listener, app(state)).await?;
    Ok(())
}
