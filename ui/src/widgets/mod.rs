pub mod alumni_table;
mod search_box;

pub use alumni_table::{AlumniTableState, TableResponse, alumni_table};
pub use search_box::{SEARCH_HINT, search_box};
