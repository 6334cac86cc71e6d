//! Devcard Client (headless)
//!
//! Connects to a devcards server with an identity taken from the
//! environment, applies the update stream to an in-memory document, and logs
//! every mutation. Useful for watching a card run from a terminal, and for
//! exercising the full receive path against a real server.
//!
//! # Usage
//!
//! ```bash
//! # Watch a card (the server assigns connection ids; pick any unused one)
//! DEVCARD_CLIENT_ID=term-1 DEVCARD_PROJECT=myproject DEVCARD_NAME=DevcardDemo \
//!     devcard-client
//!
//! # Against a non-default server, with verbose logging
//! DEVCARD_SERVER=localhost:9000 RUST_LOG=debug devcard-client
//! ```
//!
//! # Environment Variables
//!
//! - `DEVCARD_SERVER`: server address (default: localhost:50051)
//! - `DEVCARD_CLIENT_ID`: connection id (empty = static preview, stays inert)
//! - `DEVCARD_CLIENT_KIND`: client kind (default: cli)
//! - `DEVCARD_URL`: page URL echoed to the server
//! - `DEVCARD_PROJECT` / `DEVCARD_NAME`: card coordinates
//! - `RUST_LOG`: log level (trace, debug, info, warn, error)

use tracing::{info, warn};

use devcard_client::{ClientConfig, LiveClient, MemoryDocument, RenderTarget};

/// Render target that applies updates to an in-memory document and logs each
/// mutation, standing in for a real page surface.
struct MonitorSurface {
    doc: MemoryDocument,
}

impl MonitorSurface {
    fn new() -> Self {
        Self {
            doc: MemoryDocument::new(),
        }
    }
}

impl RenderTarget for MonitorSurface {
    fn clear(&mut self) {
        info!("clear");
        self.doc.clear();
    }

    fn set_title(&mut self, title: &str) {
        info!(title = %title, "set title");
        self.doc.set_title(title);
    }

    fn ensure_cell(&mut self, cell_id: &str) {
        self.doc.ensure_cell(cell_id);
    }

    fn set_cell_content(&mut self, cell_id: &str, html: &str) {
        info!(cell = %cell_id, bytes = html.len(), "set cell content");
        self.doc.set_cell_content(cell_id, html);
    }

    fn append_to_cell(&mut self, cell_id: &str, html: &str) {
        info!(cell = %cell_id, bytes = html.len(), "append to cell");
        self.doc.append_to_cell(cell_id, html);
    }

    fn set_status_bar(&mut self, html: &str) {
        info!(status = %html, "status bar");
        self.doc.set_status_bar(html);
    }

    fn append_status_bar(&mut self, html: &str) {
        info!(status = %html, "status bar (append)");
        self.doc.append_status_bar(html);
    }

    fn scroll_offset(&self) -> i64 {
        self.doc.scroll_offset()
    }

    fn set_scroll_offset(&mut self, offset: i64) {
        self.doc.set_scroll_offset(offset);
    }

    fn scroll_into_view(&mut self, id: &str) {
        info!(target = %id, "jump");
        self.doc.scroll_into_view(id);
    }

    fn notify(&mut self, text: &str) {
        warn!(notice = %text, "server notice");
        self.doc.notify(text);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("devcard_client=info".parse()?),
        )
        .with_target(true)
        .init();

    let config = ClientConfig::from_env();
    if !config.identity.is_live() {
        warn!("DEVCARD_CLIENT_ID is empty; nothing to watch (static preview mode)");
        return Ok(());
    }

    info!(
        server = %config.server_addr,
        project = %config.identity.project_name,
        card = %config.identity.card_name,
        "starting devcard client"
    );

    let mut client = LiveClient::new(config, MonitorSurface::new());
    client.run().await?;

    let doc = client.into_target().doc;
    info!(
        cells = doc.cells().len(),
        "stream ended; final document summary"
    );
    Ok(())
}
