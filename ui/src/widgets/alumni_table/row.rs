//! Row rendering for the alumni table.

use alumni_business::{AlumniRecord, ColumnId};
use egui::{Color32, Frame, Rect, Ui};

use super::cells::{render_linkedin_cell, render_name_cell, render_text_cell};
use super::columns::CELL_MARGIN;
use crate::utils::colors::TablePalette;

/// Result of rendering an alumni row.
#[derive(Debug)]
pub struct AlumniRowResult {
    /// Area covered by the row's cells.
    pub rect: Rect,
    /// The pointer is over this row.
    pub hovered: bool,
    /// The LinkedIn link in this row was activated.
    pub opened_link: Option<String>,
}

/// Background of a grid row; grid row 0 is the header and has none.
///
/// Data rows are striped by their rendered position, so the stripes do not
/// move with the input order.
#[inline]
pub fn grid_row_fill(
    grid_row: usize,
    hovered: Option<usize>,
    palette: &TablePalette,
) -> Option<Color32> {
    let position = grid_row.checked_sub(1)?;
    Some(palette.row_fill(position, hovered == Some(position)))
}

/// Renders one record as a grid row, one cell per column.
pub fn render_alumni_row(
    ui: &mut Ui,
    record: &AlumniRecord,
    palette: &TablePalette,
) -> AlumniRowResult {
    let mut opened_link = None;
    let mut rect = Rect::NOTHING;

    for column in ColumnId::ALL {
        let cell = Frame::NONE.inner_margin(CELL_MARGIN).show(ui, |ui| match column {
            ColumnId::Name => render_name_cell(ui, &record.name, palette),
            ColumnId::Linkedin => {
                let url = record.linkedin_url();
                if render_linkedin_cell(ui, url, palette) {
                    opened_link = url.map(str::to_owned);
                }
            }
            other => render_text_cell(ui, record.value(other), palette),
        });
        rect = rect.union(cell.response.rect);
    }

    AlumniRowResult {
        rect,
        hovered: ui.rect_contains_pointer(rect),
        opened_link,
    }
}
