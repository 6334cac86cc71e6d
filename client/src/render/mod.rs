//! Render Target
//!
//! Abstraction over the devcard document the dispatcher mutates. A devcard
//! page is a title, a container of named cells, a status bar, and two
//! auxiliary stdout/stderr regions; the trait below exposes exactly the
//! operations the update protocol needs, so the dispatcher can be driven
//! against an in-memory document in tests as easily as against a real
//! rendering surface.
//!
//! # Trust Boundary
//!
//! Every markup-accepting operation takes pre-rendered, pre-trusted HTML.
//! The server escapes what needs escaping before it sends; this layer never
//! sanitizes. That contract is load-bearing: devcard cells routinely carry
//! server-rendered `<code>`, `<img>`, and inline-styled fragments.

pub mod memory;

pub use memory::MemoryDocument;

/// Region id of the title singleton in the server's page template.
pub const TITLE_REGION: &str = "-devcard-title";
/// Region id of the cell container.
pub const CELLS_REGION: &str = "-devcard-cells";
/// Region id of the status bar.
pub const STATUS_BAR_REGION: &str = "-devcard-status-bar";
/// Region id of the auxiliary stdout region.
pub const STDOUT_REGION: &str = "-devcard-stdout";
/// Region id of the auxiliary stderr region.
pub const STDERR_REGION: &str = "-devcard-stderr";

/// Fixed markup prepended to every title: the clickable open-in-editor
/// affordance. Kept byte-compatible with the server's stylesheet.
pub const TITLE_EDITOR_PREFIX: &str =
    "<a style=\"text-decoration:none\" href=\"javascript:openInEditor()\">\u{1F4C2}</a> ";

/// Compose the full title-region markup for a title text.
///
/// Single source of truth for the prefix concatenation; every
/// [`RenderTarget::set_title`] implementation renders exactly this.
#[must_use]
pub fn title_markup(title: &str) -> String {
    format!("{TITLE_EDITOR_PREFIX}{title}")
}

/// An abstract devcard document.
///
/// All operations are synchronous and atomic from the dispatcher's point of
/// view; the dispatcher is the only mutator (see [`crate::dispatch`]), so no
/// locking is needed at this seam.
pub trait RenderTarget {
    /// Empty the cell container (dropping all cell identities), the status
    /// bar, and the stdout/stderr regions. Never fails; absent regions are
    /// individually skipped.
    fn clear(&mut self);

    /// Replace the title region with [`title_markup`]`(title)`.
    fn set_title(&mut self, title: &str);

    /// Create an empty cell as the last child of the cell container if no
    /// cell with this id exists. Idempotent: an existing cell and its
    /// content are left untouched. Cells are only ever appended, never
    /// reordered.
    fn ensure_cell(&mut self, cell_id: &str);

    /// Replace a cell's content. Unknown ids are silently ignored; the
    /// protocol guarantees [`RenderTarget::ensure_cell`] has run before the
    /// first content write for any server-created cell.
    fn set_cell_content(&mut self, cell_id: &str, html: &str);

    /// Append markup to a cell's content. Same id precondition as
    /// [`RenderTarget::set_cell_content`].
    fn append_to_cell(&mut self, cell_id: &str, html: &str);

    /// Replace the status bar's content.
    fn set_status_bar(&mut self, html: &str);

    /// Append markup to the status bar's content.
    fn append_status_bar(&mut self, html: &str);

    /// Sample the current vertical scroll offset of the viewport.
    fn scroll_offset(&self) -> i64;

    /// Move the viewport to a vertical scroll offset.
    fn set_scroll_offset(&mut self, offset: i64);

    /// Scroll the viewport so the named region is visible. Unknown ids are
    /// silently ignored.
    fn scroll_into_view(&mut self, id: &str);

    /// Show a blocking-style notice to the user.
    ///
    /// Used for unsupported-message reports, tooling responses, and fatal
    /// transport failures. Plain text, not markup.
    fn notify(&mut self, text: &str);
}
