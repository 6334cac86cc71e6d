//! Update Messages
//!
//! Messages sent from the devcards server to the page client. These represent
//! every way the server can mutate the live document: cell content, title,
//! status bar, and viewport position.
//!
//! # Design Philosophy
//!
//! The client is a pure renderer: it applies what the server tells it to and
//! has no rendering logic of its own. The wire format is a self-describing
//! JSON record tagged by `msgType`; here that becomes a sum type so dispatch
//! is an exhaustive match rather than a string switch. Unknown wire fields
//! are ignored; an unknown `msgType` is a [`FrameError::UnsupportedKind`],
//! never a silent drop.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One update message from the server to the page.
///
/// HTML payloads are pre-rendered and pre-trusted by contract: the server
/// escapes what needs escaping, and this layer passes markup through
/// untouched. Adding escaping here would change observable behavior.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "msgType", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum UpdateMessage {
    /// Empty the cell container, status bar, and stdout/stderr regions.
    ///
    /// Drops all cell identities; does NOT touch the saved scroll offset.
    Clear,

    /// Replace the title region's content.
    SetTitle {
        /// New title, inserted after the fixed editor-link prefix.
        title: String,
    },

    /// Create a cell if absent, then unconditionally set its content.
    AppendCell {
        /// Opaque cell id assigned by the server.
        cell_id: String,
        /// Pre-rendered cell content.
        html: String,
    },

    /// Append markup to an existing cell's content.
    AppendToCell {
        /// Opaque cell id assigned by the server.
        cell_id: String,
        /// Pre-rendered markup to append.
        html: String,
    },

    /// Replace an existing cell's content.
    SetCellContent {
        /// Opaque cell id assigned by the server.
        cell_id: String,
        /// Pre-rendered cell content.
        html: String,
    },

    /// Replace the status bar's content.
    SetStatusBarContent {
        /// Pre-rendered status bar content.
        html: String,
    },

    /// Capture the current viewport offset into the session scroll state.
    SaveScrollPosition,

    /// Scroll the viewport back to the saved session offset.
    RestoreScrollPosition,

    /// Scroll the viewport so the named region is visible.
    Jump {
        /// Id of the region to bring into view.
        id: String,
    },
}

/// The `msgType` tags this client recognizes, in dispatch-table order.
const KNOWN_KINDS: &[&str] = &[
    "clear",
    "setTitle",
    "appendCell",
    "appendToCell",
    "setCellContent",
    "setStatusBarContent",
    "saveScrollPosition",
    "restoreScrollPosition",
    "jump",
];

/// Why an inbound frame could not be turned into an [`UpdateMessage`].
#[derive(Debug, Error)]
pub enum FrameError {
    /// The payload is not valid JSON.
    #[error("malformed frame payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The payload is valid JSON but carries no string `msgType` field.
    #[error("frame payload has no msgType field")]
    MissingKind,

    /// The `msgType` is not in the recognized set.
    ///
    /// Per protocol this must be reported to the user and must not mutate
    /// any state.
    #[error("unsupported message type: {0}")]
    UnsupportedKind(String),

    /// A recognized kind whose required fields are missing or mistyped.
    #[error("invalid {kind} frame: {detail}")]
    InvalidFields {
        /// The recognized `msgType` tag.
        kind: String,
        /// Deserializer diagnostic.
        detail: String,
    },
}

/// Parse one raw text frame into a typed message.
///
/// Unknown fields in the payload are ignored. The error distinguishes
/// malformed payloads (a transport-level concern, logged and dropped by the
/// dispatcher) from unsupported kinds (reported to the user, per protocol).
///
/// # Errors
///
/// Returns a [`FrameError`] describing which of the above failed.
pub fn parse_frame(payload: &str) -> Result<UpdateMessage, FrameError> {
    let value: serde_json::Value = serde_json::from_str(payload)?;
    match UpdateMessage::deserialize(&value) {
        Ok(msg) => Ok(msg),
        Err(err) => match value.get("msgType").and_then(serde_json::Value::as_str) {
            None => Err(FrameError::MissingKind),
            Some(kind) if KNOWN_KINDS.contains(&kind) => Err(FrameError::InvalidFields {
                kind: kind.to_string(),
                detail: err.to_string(),
            }),
            Some(kind) => Err(FrameError::UnsupportedKind(kind.to_string())),
        },
    }
}
