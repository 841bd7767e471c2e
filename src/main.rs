//! `folio` entrypoint.
//!
//! In the browser (`wasm32`) this mounts the Leptos app. Natively it runs a
//! small preview server for the built site.

#[cfg(not(target_arch = "wasm32"))]
mod preview;

#[cfg(target_arch = "wasm32")]
fn main() {
    client::mount();
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), preview::PreviewError> {
    tracing_subscriber::fmt::init();

    let config = preview::PreviewConfig::from_env()?;
    let app = preview::router(&config);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .map_err(preview::PreviewError::Bind)?;

    tracing::info!(port = config.port, dist = %config.dist_dir.display(), "folio preview listening");
    axum::serve(listener, app).await.map_err(preview::PreviewError::Serve)
}
