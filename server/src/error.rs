use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("no app shell at {0}, build the client first")]
    MissingShell(PathBuf),
    #[error("failed to read app shell {path}: {source}")]
    ReadShell {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        error!("{self}");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
