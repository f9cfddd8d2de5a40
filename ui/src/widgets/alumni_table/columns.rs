//! Column sizing for the alumni table.

use egui::Margin;

/// Narrowest a column may shrink to.
pub const MIN_COLUMN_WIDTH: f32 = 80.0;

/// Padding inside header cells.
pub const HEADER_MARGIN: Margin = Margin::symmetric(16, 10);

/// Padding inside data cells.
pub const CELL_MARGIN: Margin = Margin::symmetric(16, 10);

/// Width of the line drawn under each cell.
pub const BORDER_WIDTH: f32 = 1.0;
