//! HTTP front end for the in-memory todo store.
//!
//! # Design
//! One `TodoStore` lives behind a single `tokio::sync::RwLock` shared as axum
//! state. Reads take the read lock; create, update and delete hold the write
//! lock for the whole lookup-then-mutate sequence.

use std::{future::Future, sync::Arc};

use axum::{routing::get, Router};
use todo_core::TodoStore;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{error, info};

pub mod config;
pub mod error;
pub mod handlers;

pub use config::Config;
pub use error::{ApiError, ServerError, NOT_FOUND_DETAIL};
pub use handlers::Message;

pub type SharedStore = Arc<RwLock<TodoStore>>;

/// Router over the seeded store.
pub fn app() -> Router {
    app_with_store(TodoStore::seeded())
}

pub fn app_with_store(store: TodoStore) -> Router {
    let store: SharedStore = Arc::new(RwLock::new(store));
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/todos/{todo_id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .with_state(store)
}

/// Serves until Ctrl-C or SIGTERM, then drains in-flight requests.
pub async fn run(listener: TcpListener, store: TodoStore) -> Result<(), ServerError> {
    serve(listener, store, shutdown_signal()).await
}

/// Serves until `shutdown` resolves, then drains in-flight requests.
pub async fn serve<F>(listener: TcpListener, store: TodoStore, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app_with_store(store))
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("todo server stopped");
    Ok(())
}

/// Resolves on the first of Ctrl-C or, on Unix, SIGTERM. A handler that
/// cannot be installed never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = sigterm => {}
    }
    info!("shutdown signal received, draining connections");
}
