//! Shared color palettes for the UI.
//!
//! Every table color has a light and a dark variant; the active one follows
//! `egui::Visuals::dark_mode`.

use egui::{Color32, Visuals};

/// Colors used by the alumni table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TablePalette {
    /// Background of rows at an even zero-based position.
    pub row_even: Color32,
    /// Background of rows at an odd zero-based position.
    pub row_odd: Color32,
    /// Background of the row under the pointer.
    pub row_hover: Color32,
    pub header_text: Color32,
    /// Emphasized cell text (the Name column).
    pub strong_text: Color32,
    pub text: Color32,
    pub border: Color32,
    /// Fill of the LinkedIn badge.
    pub link: Color32,
    /// Text drawn on the LinkedIn badge.
    pub link_text: Color32,
}

/// Light theme: white and gray-50 stripes on gray-200 borders.
pub const LIGHT_TABLE: TablePalette = TablePalette {
    row_even: Color32::WHITE,
    row_odd: Color32::from_rgb(249, 250, 251),
    row_hover: Color32::from_rgb(243, 244, 246),
    header_text: Color32::from_rgb(17, 24, 39),
    strong_text: Color32::from_rgb(17, 24, 39),
    text: Color32::from_rgb(55, 65, 81),
    border: Color32::from_rgb(229, 231, 235),
    link: Color32::from_rgb(10, 102, 194),
    link_text: Color32::WHITE,
};

/// Dark theme: gray-800 stripes, the odd ones at half opacity.
pub const DARK_TABLE: TablePalette = TablePalette {
    row_even: Color32::from_rgb(31, 41, 55),
    row_odd: Color32::from_rgba_premultiplied(16, 21, 28, 128),
    row_hover: Color32::from_rgba_premultiplied(28, 33, 41, 128),
    header_text: Color32::WHITE,
    strong_text: Color32::WHITE,
    text: Color32::from_rgb(209, 213, 219),
    border: Color32::from_rgb(55, 65, 81),
    link: Color32::from_rgb(112, 181, 249),
    link_text: Color32::from_rgb(17, 24, 39),
};

impl TablePalette {
    /// Picks the palette matching the current theme.
    pub fn for_visuals(visuals: &Visuals) -> &'static Self {
        if visuals.dark_mode {
            &DARK_TABLE
        } else {
            &LIGHT_TABLE
        }
    }

    /// Background for the row at `position` in the rendered order.
    #[inline]
    pub fn row_fill(&self, position: usize, hovered: bool) -> Color32 {
        if hovered {
            self.row_hover
        } else if position % 2 == 0 {
            self.row_even
        } else {
            self.row_odd
        }
    }
}
