//! Tempus JSON-RPC Server
//!
//! Line-delimited JSON-RPC 2.0 over stdio.
//!
//! Methods:
//! - initialize / ping: lifecycle
//! - period: decomposition, weekday counts and words for two endpoints
//! - range: values stepped from start to end by a unit
//! - intersect: overlap of a period with others
//! - locales: available word-list locales
//!
//! Configuration:
//! - RUST_LOG: log filter (default "info"), logs go to stderr
//! - TEMPUS_LOCALE / TEMPUS_SEPARATOR: default humanization options

mod methods;
mod rpc;

use std::io::IsTerminal;

use methods::Server;
use rpc::{RpcError, RpcRequest, RpcResponse};
use tempus_locale::{LocaleRegistry, WordsOptions};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    let server = Server::new(LocaleRegistry::standard(), WordsOptions::from_env());

    tracing::info!(version = methods::SERVER_VERSION, "Tempus server started");
    tracing::info!(
        locale = %server.defaults().locale,
        separator = ?server.defaults().separator,
        "Default words options"
    );

    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();

    tracing::info!("Server ready, waiting for requests...");

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                tracing::info!("Client disconnected (EOF)");
                break;
            }
            Err(e) => {
                tracing::error!(error = %e, "Error reading input");
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        tracing::debug!(bytes = line.len(), "Received");

        let response = match serde_json::from_str::<RpcRequest>(line) {
            Ok(request) => {
                tracing::debug!(method = %request.method, "Processing");
                let response = server.handle_request(&request);

                // Notifications (no id) get no response
                if request.id.is_none() {
                    tracing::debug!(method = %request.method, "Notification processed");
                    continue;
                }
                response
            }
            Err(e) => {
                tracing::warn!(error = %e, "Error parsing request");
                RpcResponse::failure(None, RpcError::parse_error(e))
            }
        };

        let text = match serde_json::to_string(&response) {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, "Error serializing response");
                let fallback = RpcResponse::failure(response.id.clone(), methods::internal_error(e.to_string()));
                match serde_json::to_string(&fallback) {
                    Ok(text) => text,
                    Err(_) => continue,
                }
            }
        };

        if let Err(e) = write_line(&mut stdout, &text).await {
            tracing::error!(error = %e, "Error writing response");
            break;
        }
    }

    tracing::info!("Server shutting down");
}

async fn write_line(stdout: &mut io::Stdout, text: &str) -> std::io::Result<()> {
    stdout.write_all(text.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await
}
