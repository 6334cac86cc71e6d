//! In-Memory Document
//!
//! A [`RenderTarget`] backed by owned strings. This is what the headless
//! monitor binary renders into, and what every dispatcher test asserts
//! against - no real rendering surface required.

use super::{title_markup, RenderTarget};

/// One named cell in the cell container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Opaque id assigned by the server.
    pub id: String,
    /// Current pre-rendered content.
    pub html: String,
}

/// An in-memory devcard document.
///
/// Cells live in a `Vec` so insertion order is the document order, matching
/// the append-only placement the protocol requires.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    title: String,
    cells: Vec<Cell>,
    status_bar: String,
    stdout: String,
    stderr: String,
    scroll_offset: i64,
    notices: Vec<String>,
}

impl MemoryDocument {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current title-region markup (prefix included).
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Cells in document order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Content of the cell with the given id, if it exists.
    #[must_use]
    pub fn cell_content(&self, cell_id: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|c| c.id == cell_id)
            .map(|c| c.html.as_str())
    }

    /// Current status bar markup.
    #[must_use]
    pub fn status_bar(&self) -> &str {
        &self.status_bar
    }

    /// Current stdout region content.
    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Current stderr region content.
    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Notices shown to the user, oldest first.
    #[must_use]
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    fn cell_mut(&mut self, cell_id: &str) -> Option<&mut Cell> {
        self.cells.iter_mut().find(|c| c.id == cell_id)
    }
}

impl RenderTarget for MemoryDocument {
    fn clear(&mut self) {
        self.cells.clear();
        self.status_bar.clear();
        self.stdout.clear();
        self.stderr.clear();
    }

    fn set_title(&mut self, title: &str) {
        self.title = title_markup(title);
    }

    fn ensure_cell(&mut self, cell_id: &str) {
        if self.cell_mut(cell_id).is_none() {
            self.cells.push(Cell {
                id: cell_id.to_string(),
                html: String::new(),
            });
        }
    }

    fn set_cell_content(&mut self, cell_id: &str, html: &str) {
        if let Some(cell) = self.cell_mut(cell_id) {
            cell.html = html.to_string();
        }
    }

    fn append_to_cell(&mut self, cell_id: &str, html: &str) {
        if let Some(cell) = self.cell_mut(cell_id) {
            cell.html.push_str(html);
        }
    }

    fn set_status_bar(&mut self, html: &str) {
        self.status_bar = html.to_string();
    }

    fn append_status_bar(&mut self, html: &str) {
        self.status_bar.push_str(html);
    }

    fn scroll_offset(&self) -> i64 {
        self.scroll_offset
    }

    fn set_scroll_offset(&mut self, offset: i64) {
        self.scroll_offset = offset;
    }

    fn scroll_into_view(&mut self, _id: &str) {
        // No viewport to move; jump targets are meaningful only on a real
        // rendering surface.
    }

    fn notify(&mut self, text: &str) {
        self.notices.push(text.to_string());
    }
}
