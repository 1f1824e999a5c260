//! HTTP server command implementation

use tokio::net::TcpListener;
use tracing::info;

use crate::{engine::Assembler, server, Result};

/// Handle `serve`: bind and run until Ctrl-C.
pub async fn handle_serve(assembler: Assembler, bind: &str) -> Result<()> {
    let listener = TcpListener::bind(bind).await?;
    info!(addr = %listener.local_addr()?, "sleepy api listening");

    server::serve(listener, assembler).await
}
