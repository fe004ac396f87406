use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::State,
    handler::HandlerWithoutStateExt,
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};
use route_table::RouteTable;
use tokio::fs;
use tower_http::{
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{debug, Level};

use crate::error::ServerError;

pub const INDEX: &str = "index.html";

/// Level of the per-request spans and response events, visible under the
/// default `tower_http=info` filter.
pub const TRACE_LEVEL: Level = Level::INFO;

#[derive(Debug)]
pub struct ShellState {
    table: RouteTable,
    dist_dir: PathBuf,
}

impl ShellState {
    /// Fails when the dist directory has no `index.html` to serve.
    pub async fn load(table: RouteTable, dist_dir: impl Into<PathBuf>) -> Result<Self, ServerError> {
        let dist_dir = dist_dir.into();
        let index = dist_dir.join(INDEX);
        if !fs::try_exists(&index).await.unwrap_or(false) {
            return Err(ServerError::MissingShell(index));
        }

        Ok(ShellState { table, dist_dir })
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn dist_dir(&self) -> &Path {
        &self.dist_dir
    }

    pub fn index_path(&self) -> PathBuf {
        self.dist_dir.join(INDEX)
    }

    /// Paths answered with the app shell: every canonical and alias path,
    /// plus the same path with a trailing slash. Each appears once.
    pub fn shell_paths(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut paths = Vec::new();
        for (path, _) in self.table.paths() {
            let slashed = format!("{path}/");
            let variants = if path == "/" {
                vec![path.to_string()]
            } else {
                vec![path.to_string(), slashed]
            };
            for variant in variants {
                if seen.insert(variant.clone()) {
                    paths.push(variant);
                }
            }
        }
        paths
    }
}

pub fn app(state: Arc<ShellState>) -> Router {
    async fn not_found() -> StatusCode {
        StatusCode::NOT_FOUND
    }

    let serve_dir = ServeDir::new(state.dist_dir()).not_found_service(not_found.into_service());

    let mut router = Router::new();
    for path in state.shell_paths() {
        debug!(path = %path, "serving app shell");
        router = router.route(&path, get(shell));
    }

    router
        .fallback_service(serve_dir)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(TRACE_LEVEL))
                .on_response(DefaultOnResponse::new().level(TRACE_LEVEL)),
        )
        .with_state(state)
}

async fn shell(State(state): State<Arc<ShellState>>) -> Result<Html<String>, ServerError> {
    let path = state.index_path();
    let html = fs::read_to_string(&path)
        .await
        .map_err(|source| ServerError::ReadShell { path, source })?;
    Ok(Html(html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use route_table::{NavigationMode, RouteDescriptor, ViewRef};

    fn state(table: RouteTable) -> ShellState {
        ShellState {
            table,
            dist_dir: PathBuf::from("dist"),
        }
    }

    #[test]
    fn shell_paths_include_aliases_and_slashed_forms() {
        let state = state(route_table::build());
        assert_eq!(state.shell_paths(), vec!["/", "/Home", "/Home/", "/Begin", "/Begin/"]);
    }

    #[test]
    fn shell_paths_skip_duplicates() {
        let table = RouteTable::new(
            NavigationMode::History,
            vec![
                RouteDescriptor::new("A", "/a", ViewRef::new("A")),
                RouteDescriptor::new("B", "/b", ViewRef::new("B")).alias("/a"),
            ],
        );
        assert_eq!(state(table).shell_paths(), vec!["/a", "/a/", "/b", "/b/"]);
    }

    #[tokio::test]
    async fn load_requires_index() {
        let dir = tempfile::tempdir().unwrap();
        let err = ShellState::load(route_table::build(), dir.path()).await.unwrap_err();
        assert!(matches!(err, ServerError::MissingShell(ref p) if p.ends_with(INDEX)));

        std::fs::write(dir.path().join(INDEX), "<html></html>").unwrap();
        assert!(ShellState::load(route_table::build(), dir.path()).await.is_ok());
    }
}
