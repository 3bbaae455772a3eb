use tokio::sync::mpsc;

use crate::app::App;

pub mod app;
pub mod configs;
pub mod errors;
pub mod services;

/// Drains raw frames from the transport collaborator until the channel
/// closes. Rejected frames are logged and dropped; nothing here is fatal.
pub async fn run(mut app: App, mut frames: mpsc::Receiver<Vec<u8>>) {
    tracing::info!(identity = %app.identity(), "node running");

    while let Some(frame) = frames.recv().await {
        if let Err(e) = app.handle_frame(&frame) {
            tracing::warn!(error = %e, "frame dropped");
        }
    }

    let stats = app.stats();
    tracing::info!(
        received = stats.received,
        routed = stats.routed,
        "frame source closed, shutting down"
    );
}
