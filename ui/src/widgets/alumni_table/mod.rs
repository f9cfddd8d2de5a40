//! Sortable, globally filterable alumni table.
//!
//! This module contains the table rendering logic split into smaller,
//! focused components:
//! - `columns`: Column widths and cell padding
//! - `header`: Header row with the sort toggle on Name
//! - `row`: Data row rendering and hover tracking
//! - `cells`: Cell rendering functions for each column type
//! - `fade`: Entrance animation timing
//! - `state`: Sort state and per-frame bookkeeping

mod cells;
pub mod columns;
pub mod fade;
mod header;
mod row;
mod state;

use alumni_business::{AlumniRecord, ColumnId, visible_rows};
use egui::{Grid, ScrollArea, Ui};

use crate::utils::colors::TablePalette;
use cells::draw_row_borders;
use fade::fade_in_opacity;
use header::render_table_header;
use row::{grid_row_fill, render_alumni_row};

pub use cells::LINKEDIN_ICON;
pub use state::AlumniTableState;

/// What happened while the table was drawn this frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableResponse {
    /// The Name header was clicked and the sort state advanced.
    pub sort_changed: bool,
    /// URL of a LinkedIn link activated this frame.
    pub opened_link: Option<String>,
    /// Input indices of the rendered rows, top to bottom.
    pub rendered_rows: Vec<usize>,
}

/// Draws the alumni table for `records` filtered by `query`.
///
/// The table scrolls in both directions inside the space it is given.
/// `query` belongs to the caller and is only read. The sort state lives in
/// `state` and changes when the Name header is clicked; the new order shows
/// from the next frame.
pub fn alumni_table(
    ui: &mut Ui,
    state: &mut AlumniTableState,
    records: &[AlumniRecord],
    query: &str,
) -> TableResponse {
    let now = ui.input(|i| i.time);
    let opacity = fade_in_opacity(state.elapsed_since_shown(now));
    if opacity < 1.0 {
        ui.ctx().request_repaint();
    }

    let palette = TablePalette::for_visuals(ui.visuals());
    let rows = visible_rows(records, query, state.sort());
    let hovered = state.hovered_row;

    let mut response = TableResponse {
        rendered_rows: rows.iter().map(|row| row.index).collect(),
        ..Default::default()
    };
    let mut clicked_column = None;
    let mut next_hovered = None;

    ui.scope(|ui| {
        ui.multiply_opacity(opacity);

        ScrollArea::both()
            .id_salt("alumni_table_scroll")
            .show(ui, |ui| {
                let mut row_bottoms = Vec::with_capacity(rows.len() + 1);

                let grid = Grid::new("alumni_table")
                    .num_columns(ColumnId::ALL.len())
                    .spacing([0.0, 0.0])
                    .min_col_width(columns::MIN_COLUMN_WIDTH)
                    .with_row_color(move |grid_row, _style| {
                        grid_row_fill(grid_row, hovered, palette)
                    })
                    .show(ui, |ui| {
                        let header = render_table_header(ui, state.sort(), palette);
                        clicked_column = header.clicked;
                        row_bottoms.push(header.rect.bottom());
                        ui.end_row();

                        for (position, row) in rows.iter().enumerate() {
                            let result = render_alumni_row(ui, row.record, palette);
                            ui.end_row();

                            row_bottoms.push(result.rect.bottom());
                            if result.hovered {
                                next_hovered = Some(position);
                            }
                            if let Some(url) = result.opened_link {
                                log::debug!("opening LinkedIn profile {url}");
                                response.opened_link = Some(url);
                            }
                        }
                    });

                draw_row_borders(ui, grid.response.rect, &row_bottoms, palette.border);
            });
    });

    if next_hovered != state.hovered_row {
        state.hovered_row = next_hovered;
        ui.ctx().request_repaint();
    }

    if let Some(column) = clicked_column {
        state.toggle_sort(column);
        response.sort_changed = true;
        ui.ctx().request_repaint();
    }

    response
}
