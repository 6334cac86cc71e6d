//! Session Identity
//!
//! The fixed set of identifying parameters a devcard page is loaded with.
//! The server embeds these values into the page once, at render time; the
//! client carries them verbatim into the WebSocket handshake query and the
//! paths of the two server-side tooling requests.
//!
//! There are no ambient globals here: the identity is constructed once and
//! handed to the components that need it ([`LiveClient`], [`ToolingClient`]).
//!
//! [`LiveClient`]: crate::connection::LiveClient
//! [`ToolingClient`]: crate::tooling::ToolingClient

/// Immutable identity of one devcard page view.
///
/// All fields are substituted into URIs exactly as given. The server is the
/// sole producer of these values and is responsible for their encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionIdentity {
    /// Connection id assigned by the server for this page view.
    ///
    /// An empty id means "static preview": the page renders whatever was
    /// delivered with it and no live connection is ever attempted.
    pub connection_id: String,
    /// Kind of client the server rendered the page for (e.g. `cli`).
    pub connection_kind: String,
    /// The page's own URL, echoed back to the server on handshake.
    pub source_url: String,
    /// Project the devcard belongs to.
    pub project_name: String,
    /// Name of the devcard itself.
    pub card_name: String,
}

impl SessionIdentity {
    /// Whether this identity can carry a live connection.
    ///
    /// An empty `connection_id` marks a static preview; the connection
    /// component stays inert for such identities.
    #[must_use]
    pub fn is_live(&self) -> bool {
        !self.connection_id.is_empty()
    }

    /// Build the WebSocket handshake URI for the given server address.
    ///
    /// Parameter order and raw substitution match what the server expects;
    /// values are not percent-encoded here.
    #[must_use]
    pub fn handshake_uri(&self, server_addr: &str) -> String {
        format!(
            "ws://{}/ws?clientId={}&clientKind={}&url={}&projectName={}&devcardName={}",
            server_addr,
            self.connection_id,
            self.connection_kind,
            self.source_url,
            self.project_name,
            self.card_name,
        )
    }
}
