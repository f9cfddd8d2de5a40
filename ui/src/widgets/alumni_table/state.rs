//! State for the alumni table widget.

use alumni_business::{ColumnId, SortState};

/// State owned by one mounted alumni table.
#[derive(Debug, Clone, Default)]
pub struct AlumniTableState {
    /// Active sort; starts unsorted and is never reset.
    sort: SortState,
    /// Rendered position of the row under the pointer last frame.
    pub(crate) hovered_row: Option<usize>,
    /// Input time of the first frame the table was drawn.
    shown_at: Option<f64>,
}

impl AlumniTableState {
    /// Create a new, unsorted table state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Rendered position of the row under the pointer, if any.
    pub fn hovered_row(&self) -> Option<usize> {
        self.hovered_row
    }

    /// Advance the sort cycle for `column`.
    pub fn toggle_sort(&mut self, column: ColumnId) {
        self.sort.toggle(column);
    }

    /// Seconds since the first frame, recording `now` as that frame if
    /// the table has not been drawn yet.
    pub(crate) fn elapsed_since_shown(&mut self, now: f64) -> f64 {
        now - *self.shown_at.get_or_insert(now)
    }
}
