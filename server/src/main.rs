use std::process::ExitCode;

use clap::Parser;
use tokio::net::TcpListener;
use todo_server::{Config, ServerError};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match start(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "todo server failed");
            ExitCode::FAILURE
        }
    }
}

async fn start(config: Config) -> Result<(), ServerError> {
    let addr = config.addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let store = config.initial_store();
    info!(addr = %listener.local_addr()?, todos = store.len(), "todo server listening");
    todo_server::run(listener, store).await
}
