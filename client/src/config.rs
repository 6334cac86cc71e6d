//! Client Configuration
//!
//! Environment-driven configuration for the headless client binary. A
//! browser page gets its session identity templated into it by the server;
//! the headless client reads the same values from the environment instead.

use crate::session::SessionIdentity;

/// Configuration for a [`LiveClient`](crate::connection::LiveClient).
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Devcards server address as host:port.
    pub server_addr: String,
    /// Identity embedded into the handshake and tooling requests.
    pub identity: SessionIdentity,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// - `DEVCARD_SERVER`: server address (default: `localhost:50051`, the
    ///   server's default port)
    /// - `DEVCARD_CLIENT_ID`: connection id (default: empty, i.e. static
    ///   preview - the client stays inert without one)
    /// - `DEVCARD_CLIENT_KIND`: client kind (default: `cli`)
    /// - `DEVCARD_URL`: source URL echoed on handshake
    /// - `DEVCARD_PROJECT`: project name
    /// - `DEVCARD_NAME`: devcard name
    #[must_use]
    pub fn from_env() -> Self {
        let server_addr =
            std::env::var("DEVCARD_SERVER").unwrap_or_else(|_| "localhost:50051".to_string());
        Self {
            identity: SessionIdentity {
                connection_id: std::env::var("DEVCARD_CLIENT_ID").unwrap_or_default(),
                connection_kind: std::env::var("DEVCARD_CLIENT_KIND")
                    .unwrap_or_else(|_| "cli".to_string()),
                source_url: std::env::var("DEVCARD_URL").unwrap_or_default(),
                project_name: std::env::var("DEVCARD_PROJECT").unwrap_or_default(),
                card_name: std::env::var("DEVCARD_NAME").unwrap_or_default(),
            },
            server_addr,
        }
    }
}
