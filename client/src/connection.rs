//! Live Connection
//!
//! Owns the lifecycle of the one streaming connection a devcard page has:
//! connect with the session identity in the handshake query, hand every text
//! frame to the dispatcher in arrival order, and on close post a single
//! reload notice to the status bar. There is no automatic reconnect - the
//! server addresses pages by connection id, so a lost connection means the
//! page reloads and re-registers.

use futures::StreamExt;
use thiserror::Error;
use tokio_tungstenite::{connect_async, tungstenite};
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::dispatch::Dispatcher;
use crate::render::RenderTarget;
use crate::session::SessionIdentity;
use crate::tooling::{ToolingClient, ToolingError};

/// Status bar fragment appended when the connection is lost. Byte-compatible
/// with the markup the server's stylesheet expects.
pub const CONNECTION_LOST_NOTICE: &str =
    " <code class=\"err\">connection lost: <a href=\"javascript:location.reload()\">reload</a></code>";

/// Lifecycle of the streaming connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionState {
    /// No connection attempted yet (or ever, for static previews).
    Idle,
    /// Handshake in progress.
    Connecting,
    /// Receiving frames.
    Open,
    /// Terminal: the connection ended or could not be established.
    Closed,
}

/// Failure to establish or keep the streaming connection.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The handshake failed; the host cannot reach the server or the server
    /// refused the upgrade.
    #[error("unable to establish streaming connection: {0}")]
    Connect(#[from] tungstenite::Error),
}

/// The connection-and-dispatch component of a devcard page.
///
/// Generic over the [`RenderTarget`] so the full receive path can run
/// against an in-memory document in tests.
pub struct LiveClient<T: RenderTarget> {
    identity: SessionIdentity,
    server_addr: String,
    dispatcher: Dispatcher<T>,
    tooling: ToolingClient,
    state: ConnectionState,
    lost_notice_posted: bool,
}

impl<T: RenderTarget> LiveClient<T> {
    /// Create a client from configuration and a render target.
    pub fn new(config: ClientConfig, target: T) -> Self {
        let tooling = ToolingClient::new(&config.server_addr, &config.identity);
        Self {
            identity: config.identity,
            server_addr: config.server_addr,
            dispatcher: Dispatcher::new(target),
            tooling,
            state: ConnectionState::Idle,
            lost_notice_posted: false,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// The render target, shared.
    pub fn target(&self) -> &T {
        self.dispatcher.target()
    }

    /// The render target, exclusive.
    pub fn target_mut(&mut self) -> &mut T {
        self.dispatcher.target_mut()
    }

    /// Consume the client, returning the render target.
    pub fn into_target(self) -> T {
        self.dispatcher.into_target()
    }

    /// Connect and process frames until the server closes the connection.
    ///
    /// For a static preview identity (empty connection id) this returns
    /// immediately without connecting and the state stays [`ConnectionState::Idle`].
    /// A clean or abnormal close both end in [`ConnectionState::Closed`] with
    /// exactly one reload notice appended to the status bar, and `run`
    /// returns `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Connect`] when the connection cannot be
    /// established at all; a user-visible notice has already been posted by
    /// the time the error is returned.
    pub async fn run(&mut self) -> Result<(), ClientError> {
        if !self.identity.is_live() {
            debug!("static preview, not connecting");
            return Ok(());
        }

        self.state = ConnectionState::Connecting;
        let uri = self.identity.handshake_uri(&self.server_addr);
        info!(uri = %uri, "connecting");

        let (ws, _) = match connect_async(&uri).await {
            Ok(conn) => conn,
            Err(err) => {
                self.state = ConnectionState::Closed;
                self.dispatcher
                    .target_mut()
                    .notify(&format!("unable to connect to {}: {err}", self.server_addr));
                return Err(err.into());
            }
        };
        self.state = ConnectionState::Open;

        let (_sink, mut stream) = ws.split();
        while let Some(frame) = stream.next().await {
            match frame {
                Ok(tungstenite::Message::Text(payload)) => {
                    if let Err(err) = self.dispatcher.handle_frame(&payload) {
                        warn!(error = %err, "frame not applied");
                    }
                }
                Ok(tungstenite::Message::Close(_)) => break,
                Ok(_) => {} // binary/ping/pong frames carry no updates
                Err(err) => {
                    warn!(error = %err, "connection error");
                    break;
                }
            }
        }

        self.post_connection_lost();
        self.state = ConnectionState::Closed;
        info!("connection closed");
        Ok(())
    }

    /// Ask the server for this card's debug snippet and surface the full
    /// response to the user.
    ///
    /// # Errors
    ///
    /// Returns [`ToolingError`] if the request fails; nothing is surfaced in
    /// that case and the stream is unaffected.
    pub async fn request_debug_artifact(&mut self) -> Result<(), ToolingError> {
        let body = self.tooling.debug_artifact().await?;
        self.dispatcher.target_mut().notify(&body);
        Ok(())
    }

    /// Ask the server to open this card's source in the editor, surfacing
    /// the response only when the server reports a problem.
    ///
    /// # Errors
    ///
    /// Returns [`ToolingError`] if the request fails.
    pub async fn open_in_editor(&mut self) -> Result<(), ToolingError> {
        if let Some(body) = self.tooling.open_in_editor().await? {
            self.dispatcher.target_mut().notify(&body);
        }
        Ok(())
    }

    /// Append the reload notice to the status bar, once.
    ///
    /// Repeated close observations must not stack notices.
    fn post_connection_lost(&mut self) {
        if self.lost_notice_posted {
            return;
        }
        self.lost_notice_posted = true;
        self.dispatcher
            .target_mut()
            .append_status_bar(CONNECTION_LOST_NOTICE);
    }
}
