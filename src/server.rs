use std::net::SocketAddr;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::Method,
    response::{IntoResponse, Response},
    routing::any,
};

use crate::response::{EvalResponse, Reply, handle};

/// Path the evaluator is mounted at.
pub const PARSE_PATH: &str = "/api/parse";

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind:      SocketAddr,
    /// Parenthesis nesting limit applied to every request.
    pub max_depth: usize,
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Builds the router serving [`PARSE_PATH`].
///
/// Every method is routed to the handler so that non-`POST` requests get the
/// JSON `405` body rather than an empty one.
pub fn router(config: ServerConfig) -> Router {
    Router::new().route(PARSE_PATH, any(parse))
                 .with_state(config)
}

async fn parse(State(config): State<ServerConfig>, method: Method, body: Bytes) -> Reply {
    let reply = handle(&method, &body, config.max_depth);

    match &reply.body {
        EvalResponse::Success { expression, result, .. } => {
            tracing::debug!(%expression, result, "evaluated expression");
        },
        EvalResponse::Failure { expression, error } => {
            tracing::debug!(%expression, %error, "expression failed to evaluate");
        },
        EvalResponse::Rejected { error } => {
            tracing::warn!(%method, status = reply.status.as_u16(), %error, "rejected request");
        },
    }

    reply
}

/// Binds the listener and serves until Ctrl-C.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("HTTP server bound on {}", listener.local_addr()?);

    axum::serve(listener, router(config)).with_graceful_shutdown(shutdown_signal())
                                         .await
                                         .map_err(|e| anyhow::anyhow!(e))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("HTTP server shutting down gracefully");
}
