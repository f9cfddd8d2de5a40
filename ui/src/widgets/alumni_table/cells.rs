//! Cell rendering functions for the alumni table.

use egui::{Color32, Hyperlink, Label, Rect, RichText, Stroke, Ui};

use crate::utils::colors::TablePalette;

/// Text of the LinkedIn badge.
pub const LINKEDIN_ICON: &str = "in";

/// The LinkedIn badge: bold monospace `in` on a filled background.
pub fn linkedin_badge(palette: &TablePalette) -> RichText {
    RichText::new(LINKEDIN_ICON)
        .strong()
        .monospace()
        .color(palette.link_text)
        .background_color(palette.link)
}

/// Renders the Name cell in emphasized text.
#[inline]
pub fn render_name_cell(ui: &mut Ui, name: &str, palette: &TablePalette) {
    ui.add(Label::new(RichText::new(name).strong().color(palette.strong_text)).selectable(false));
}

/// Renders a plain text cell.
#[inline]
pub fn render_text_cell(ui: &mut Ui, value: &str, palette: &TablePalette) {
    ui.add(Label::new(RichText::new(value).color(palette.text)).selectable(false));
}

/// Renders the LinkedIn cell.
///
/// Nothing is drawn without a URL. Otherwise a single link opens `url` in a
/// new tab; returns `true` when it was activated this frame.
#[inline]
pub fn render_linkedin_cell(ui: &mut Ui, url: Option<&str>, palette: &TablePalette) -> bool {
    let Some(url) = url else {
        return false;
    };

    ui.add(Hyperlink::from_label_and_url(linkedin_badge(palette), url).open_in_new_tab(true))
        .clicked()
}

/// Draws the line under each row, spanning the full table width.
#[inline]
pub fn draw_row_borders(ui: &Ui, table_rect: Rect, row_bottoms: &[f32], color: Color32) {
    let stroke = Stroke::new(super::columns::BORDER_WIDTH, color);
    for &y in row_bottoms {
        ui.painter().hline(table_rect.x_range(), y, stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::colors::{DARK_TABLE, LIGHT_TABLE};

    #[test]
    fn test_badge_keeps_link_label() {
        assert_eq!(linkedin_badge(&LIGHT_TABLE).text(), LINKEDIN_ICON);
        assert_eq!(linkedin_badge(&DARK_TABLE).text(), LINKEDIN_ICON);
    }
}
