//! Devcard Client - Live-Update Rendering for Devcards
//!
//! This crate is the client half of a devcards setup: it holds one streaming
//! WebSocket connection to a devcards server, receives typed update messages,
//! and applies them to a devcard document - a live report composed of named
//! cells, a title, and a status bar, rebuilt incrementally as the server
//! re-runs the card.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     devcards server                       │
//! │   renders cells, re-runs cards, owns /debug and /open     │
//! └────────────┬─────────────────────────────┬───────────────┘
//!              │ /ws (update frames, down)   │ HTTP one-shots
//! ┌────────────┼─────────────────────────────┼───────────────┐
//! │            ▼         LiveClient          ▼               │
//! │  ┌──────────────┐   ┌────────────┐   ┌───────────────┐  │
//! │  │  connection  │──▶│ Dispatcher │   │ ToolingClient │  │
//! │  │  (frame loop)│   │ (+ scroll  │   │ /debug /open  │  │
//! │  └──────────────┘   │   state)   │   └───────────────┘  │
//! │                     └─────┬──────┘                       │
//! │                           ▼  RenderTarget                │
//! │            title · cells · status bar · stdout/stderr    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`UpdateMessage`]: the tagged union of everything the server can send
//! - [`RenderTarget`]: the abstract devcard document the dispatcher mutates
//! - [`Dispatcher`]: exhaustive-match dispatch plus the saved scroll offset
//! - [`LiveClient`]: connection lifecycle and the two tooling one-shots
//! - [`MemoryDocument`]: in-memory document for tests and headless use
//!
//! # Quick Start
//!
//! ```ignore
//! use devcard_client::{ClientConfig, LiveClient, MemoryDocument};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ClientConfig::from_env();
//!     let mut client = LiveClient::new(config, MemoryDocument::new());
//!     client.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Trust Boundary
//!
//! All HTML passing through this crate is pre-rendered and pre-trusted: the
//! server escapes, the client applies verbatim. See [`render`].

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod connection;
pub mod dispatch;
pub mod messages;
pub mod render;
pub mod session;
pub mod tooling;

// Re-exports for convenience
pub use config::ClientConfig;
pub use connection::{ClientError, ConnectionState, LiveClient, CONNECTION_LOST_NOTICE};
pub use dispatch::Dispatcher;
pub use messages::{parse_frame, FrameError, UpdateMessage};
pub use render::{title_markup, MemoryDocument, RenderTarget, TITLE_EDITOR_PREFIX};
pub use session::SessionIdentity;
pub use tooling::{ToolingClient, ToolingError};
