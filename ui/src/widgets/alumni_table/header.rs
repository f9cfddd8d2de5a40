//! Table header rendering for the alumni table.

use alumni_business::{ColumnId, SortState};
use egui::{Button, Frame, Rect, RichText, Ui};

use super::columns::HEADER_MARGIN;
use crate::utils::colors::TablePalette;

/// Header text for `column`, with the sort indicator when it is sorted.
pub(super) fn header_label(column: ColumnId, sort: &SortState) -> String {
    match sort.direction(column) {
        Some(direction) => format!("{}{}", column.header(), direction.indicator()),
        None => column.header().to_owned(),
    }
}

/// Result of rendering the header row.
pub(super) struct HeaderResult {
    /// Column whose header was clicked this frame.
    pub clicked: Option<ColumnId>,
    pub rect: Rect,
}

/// Renders the header row with bold labels; Name is a sort toggle button.
pub(super) fn render_table_header(
    ui: &mut Ui,
    sort: &SortState,
    palette: &TablePalette,
) -> HeaderResult {
    let mut clicked = None;
    let mut rect = Rect::NOTHING;

    for column in ColumnId::ALL {
        let cell = Frame::NONE.inner_margin(HEADER_MARGIN).show(ui, |ui| {
            let text = RichText::new(header_label(column, sort))
                .strong()
                .color(palette.header_text);

            if column.is_sortable() {
                if ui.add(Button::new(text).frame(false)).clicked() {
                    clicked = Some(column);
                }
            } else {
                ui.label(text);
            }
        });
        rect = rect.union(cell.response.rect);
    }

    HeaderResult { clicked, rect }
}
