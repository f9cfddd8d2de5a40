use egui::{Response, TextEdit, Ui};

/// Placeholder shown while the search box is empty.
pub const SEARCH_HINT: &str = "Search alumni...";

/// Single-line search input that edits the caller's query in place.
pub fn search_box(ui: &mut Ui, query: &mut String) -> Response {
    ui.add(
        TextEdit::singleline(query)
            .hint_text(SEARCH_HINT)
            .desired_width(280.0),
    )
}
