//! yulduzweb crate entrypoint.
//!
//! Starts the Tokio runtime, reads the configuration once from the
//! environment and launches the web server defined in the `server` module.
//! Keep this file minimal — most application logic lives in `server`,
//! `config`, and `html`.
//!
/// HTTP server implementation and request handling
mod server;
/// Configuration management and settings
mod config;
/// HTML rendering and page generation
mod html;

/// Entry point for the async Tokio runtime
#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = config::Config::from_env();
    server::run(config).await
}
