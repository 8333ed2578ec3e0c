//! Web layer - The journal page over HTTP
//!
//! Routes:
//! - GET  /        - Entry form and weekly view
//! - POST /        - Submit an entry (urlencoded `date`, `title`, `content`)
//! - GET  /health  - Liveness probe

pub mod render;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use crate::error::{JournalError, Result};
use crate::infrastructure::SqliteEntryStore;

pub use routes::{router, WebError};
pub use state::AppState;

/// Bind `addr` and serve until the process is stopped
pub async fn serve(store: SqliteEntryStore, addr: &str) -> Result<()> {
    let addr: SocketAddr = addr
        .parse()
        .map_err(|_| JournalError::Config(format!("Invalid bind address: '{}'", addr)))?;

    let app = router(AppState::new(store));
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");
    println!("Serving work journal on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
