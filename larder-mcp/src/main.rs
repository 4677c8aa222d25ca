//! Larder MCP Server
//!
//! MCP Server implementing spec 2025-11-25 over newline-delimited
//! JSON-RPC on stdin/stdout. Logs go to stderr.
//!
//! Tools:
//! - parse_measurement: Parse a measurement and show it in both systems
//! - render_measurement: Render a measurement in one system
//! - add_measurements: Add measurements exactly
//! - scale_measurement: Multiply a measurement by a rational factor
//! - shopping_list: Merge the ingredients of stored recipes
//! - scale_recipe: Scale a stored recipe by factor or servings
//! - list_units: List units and their spellings
//!
//! Resources:
//! - larder://recipes/{name} - A recipe document from LARDER_DATA_PATH

mod config;
mod server;
mod store;
mod tools;

use std::process::ExitCode;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;
use server::{decode_request, Server, PROTOCOL_VERSION, SERVER_VERSION};

fn init_logging() {
    // stdout carries the protocol
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, "Larder MCP server started");
    info!(path = %config.data_path.display(), system = %config.system, "configuration loaded");

    let server = Server::new(config);
    let recipes = server.store().list();
    info!(count = recipes.len(), "recipes available");
    for r in &recipes {
        debug!(name = %r.name, path = %r.path, title = ?r.title, "recipe");
    }

    match serve(&server).await {
        Ok(()) => {
            info!("Server shutting down");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("I/O error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn serve(server: &Server) -> io::Result<()> {
    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();

    info!("Server ready, waiting for requests");

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        debug!(bytes = line.len(), "received");

        let response = match decode_request(line) {
            Ok(request) => {
                debug!(method = %request.method, "processing");
                let response = server.handle_request(&request);

                // Notifications (no id) should NOT receive a response
                if request.id.is_none() {
                    debug!(method = %request.method, "notification processed");
                    continue;
                }
                response
            }
            Err(response) => {
                if let Some(ref error) = response.error {
                    warn!(code = error.code, "Invalid JSON-RPC message: {}", error.message);
                }
                response
            }
        };

        let json = match serde_json::to_string(&response) {
            Ok(json) => json,
            Err(e) => {
                error!("cannot serialize response: {}", e);
                continue;
            }
        };

        stdout.write_all(json.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    info!("Client disconnected (EOF)");
    Ok(())
}
