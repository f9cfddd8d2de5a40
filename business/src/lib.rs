//! Alumni directory table logic, independent of any UI toolkit.
//!
//! The table is a three-stage pipeline over an immutable record slice:
//! core rows, the global filter, then the sort for the active column.

mod column;
mod dataset;
mod filter;
mod record;
mod row_model;
mod sorting;

pub use column::ColumnId;
pub use dataset::{DatasetError, load_records, parse_records};
pub use filter::matches_global_filter;
pub use record::AlumniRecord;
pub use row_model::{VisibleRow, core_rows, filtered_rows, sorted_rows, visible_rows};
pub use sorting::{ColumnSort, SortDirection, SortState};
