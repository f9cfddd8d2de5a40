//! Sort state for the alumni table.
//!
//! At most one column is sorted at a time. Toggling a column cycles
//! ascending, descending, then unsorted.

use std::cmp::Ordering;

use crate::{AlumniRecord, ColumnId};

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Suffix appended to a sorted column's header.
    pub const fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => " ▲",
            Self::Descending => " ▼",
        }
    }
}

/// A single sort entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSort {
    pub column: ColumnId,
    pub descending: bool,
}

impl ColumnSort {
    pub const fn direction(self) -> SortDirection {
        if self.descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    /// Orders two records by this column.
    ///
    /// Values compare lower-cased. Only the value comparison is reversed for
    /// descending order; callers break ties on input position.
    pub fn compare(self, a: &AlumniRecord, b: &AlumniRecord) -> Ordering {
        let a = a.value(self.column).to_lowercase();
        let b = b.value(self.column).to_lowercase();
        let ordering = a.cmp(&b);
        if self.descending {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

/// Sort state owned by the table widget for its whole lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    entries: Vec<ColumnSort>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active sort entry, if any.
    pub fn active(&self) -> Option<ColumnSort> {
        self.entries.first().copied()
    }

    /// Current direction of `column`, `None` when it is not sorted.
    pub fn direction(&self, column: ColumnId) -> Option<SortDirection> {
        self.entries
            .iter()
            .find(|entry| entry.column == column)
            .map(|entry| entry.direction())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Advances `column` through unsorted → ascending → descending → unsorted.
    ///
    /// Sorting a new column replaces whatever column was sorted before.
    pub fn toggle(&mut self, column: ColumnId) {
        let next = match self.direction(column) {
            None => Some(ColumnSort {
                column,
                descending: false,
            }),
            Some(SortDirection::Ascending) => Some(ColumnSort {
                column,
                descending: true,
            }),
            Some(SortDirection::Descending) => None,
        };

        self.entries.clear();
        self.entries.extend(next);
        log::debug!("sort state for {column:?} is now {next:?}");
    }
}
