//! Serve command - serve a built frontend bundle

use std::{net::SocketAddr, path::Path};

use color_eyre::eyre::{Result, bail};

use crate::server::create_router;

/// Run the serve command.
pub async fn run(dist_dir: &Path, port: u16) -> Result<()> {
    if !dist_dir.join("index.html").is_file() {
        bail!(
            "{} has no index.html; build the frontend first",
            dist_dir.display()
        );
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(dir = %dist_dir.display(), %addr, "Serving site");
    println!("Serving {} at http://{addr}", dist_dir.display());

    axum::serve(listener, create_router(dist_dir)).await?;
    Ok(())
}
