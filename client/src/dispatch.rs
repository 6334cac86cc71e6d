//! Message Dispatch
//!
//! Routes typed update messages to a [`RenderTarget`] and owns the one piece
//! of session state the protocol has: the saved scroll offset.
//!
//! Frames are applied strictly in arrival order, one at a time, on a single
//! task; an update's effects are fully applied before the next frame is
//! looked at. That single-mutator rule is why none of this needs locks.

use tracing::warn;

use crate::messages::{parse_frame, FrameError, UpdateMessage};
use crate::render::RenderTarget;

/// Applies update messages to a render target.
///
/// The dispatcher holds the Session Scroll State: a single offset written by
/// `saveScrollPosition` and read by `restoreScrollPosition`. A `clear`
/// message resets the document but deliberately leaves this offset alone -
/// the server clears and rebuilds the document on every re-run and then
/// restores the viewport to where the user was.
pub struct Dispatcher<T: RenderTarget> {
    target: T,
    saved_scroll_offset: i64,
}

impl<T: RenderTarget> Dispatcher<T> {
    /// Create a dispatcher over a render target. The saved offset starts
    /// at 0.
    pub fn new(target: T) -> Self {
        Self {
            target,
            saved_scroll_offset: 0,
        }
    }

    /// The render target, shared.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// The render target, exclusive.
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Consume the dispatcher, returning the render target.
    pub fn into_target(self) -> T {
        self.target
    }

    /// Apply one typed message.
    ///
    /// The match is exhaustive: unrecognized kinds never reach this point,
    /// they are rejected during parsing (see [`Dispatcher::handle_frame`]).
    pub fn apply(&mut self, msg: UpdateMessage) {
        match msg {
            UpdateMessage::Clear => self.target.clear(),
            UpdateMessage::SetTitle { title } => self.target.set_title(&title),
            UpdateMessage::AppendCell { cell_id, html } => {
                // Create-then-set, unconditionally: a repeated appendCell
                // keeps the cell's position but overwrites its content.
                self.target.ensure_cell(&cell_id);
                self.target.set_cell_content(&cell_id, &html);
            }
            UpdateMessage::AppendToCell { cell_id, html } => {
                self.target.append_to_cell(&cell_id, &html);
            }
            UpdateMessage::SetCellContent { cell_id, html } => {
                self.target.set_cell_content(&cell_id, &html);
            }
            UpdateMessage::SetStatusBarContent { html } => self.target.set_status_bar(&html),
            UpdateMessage::SaveScrollPosition => {
                self.saved_scroll_offset = self.target.scroll_offset();
            }
            UpdateMessage::RestoreScrollPosition => {
                self.target.set_scroll_offset(self.saved_scroll_offset);
            }
            UpdateMessage::Jump { id } => self.target.scroll_into_view(&id),
        }
    }

    /// Parse and apply one raw text frame.
    ///
    /// Failures are isolated per frame and never stop the stream:
    ///
    /// - an unsupported `msgType` is reported to the user and applied to
    ///   nothing;
    /// - a recognized kind with missing fields is reported and dropped;
    /// - a malformed payload is logged and dropped.
    ///
    /// # Errors
    ///
    /// The frame's [`FrameError`] is also returned so callers can log it
    /// with connection context; by the time it is returned the user-facing
    /// reporting has already happened.
    pub fn handle_frame(&mut self, payload: &str) -> Result<(), FrameError> {
        match parse_frame(payload) {
            Ok(msg) => {
                self.apply(msg);
                Ok(())
            }
            Err(err) => {
                match &err {
                    FrameError::UnsupportedKind(kind) => {
                        self.target.notify(&format!("unsupported message type: {kind}"));
                    }
                    FrameError::InvalidFields { kind, detail } => {
                        self.target.notify(&format!("invalid {kind} message: {detail}"));
                    }
                    FrameError::Malformed(_) | FrameError::MissingKind => {
                        warn!(error = %err, "dropping undecodable frame");
                    }
                }
                Err(err)
            }
        }
    }
}
