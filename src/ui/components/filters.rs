//! Filter form component renderer.
//!
//! Renders the search, category and tag fields inside one bordered box. The
//! focused field is marked with `▸` and a cursor block, and the box border
//! takes the focus color.

use crate::app::FocusField;
use crate::ui::helpers::{position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;

/// Horizontal margin for the filter box (spaces on left and right).
const FILTER_BOX_MARGIN: usize = 2;

/// Width of the field label column, including the focus marker.
const LABEL_WIDTH: usize = 12;

/// Renders the filter box at the specified row.
///
/// # Returns
///
/// The next available row position (row + 5, since the box uses 5 lines)
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────────────┐ [margin]
/// [margin] │ ▸ Search:  chicken█      │ [margin]
/// [margin] │   Category ‹ Classic ›   │ [margin]
/// [margin] │   Tags:    Pun, Dad      │ [margin]
/// [margin] └──────────────────────────┘ [margin]
/// ```
pub fn render_filter_bar(row: usize, filters: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(FILTER_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    print_edge(row, '┌', '┐', inner_width, &theme.colors.focus_border);

    let category = format!("‹ {} ›", filters.category);
    let fields = [
        (FocusField::Search, "Search:", filters.search.as_str()),
        (FocusField::Category, "Category:", category.as_str()),
        (FocusField::Tags, "Tags:", filters.tags.as_str()),
    ];

    for (offset, (field, label, value)) in fields.into_iter().enumerate() {
        let focused = filters.focus == field;
        print_field(row + 1 + offset, label, value, focused, field == FocusField::Search, theme, inner_width);
    }

    print_edge(row + 4, '└', '┘', inner_width, &theme.colors.focus_border);

    row + 5
}

fn print_edge(row: usize, left: char, right: char, inner_width: usize, color: &str) {
    position_cursor(row, 1);
    print!("{}", " ".repeat(FILTER_BOX_MARGIN));
    print!("{}", Theme::fg(color));
    print!("{left}{}{right}", "─".repeat(inner_width));
    print!("{}", Theme::reset());
}

fn print_field(
    row: usize,
    label: &str,
    value: &str,
    focused: bool,
    shows_cursor: bool,
    theme: &Theme,
    inner_width: usize,
) {
    position_cursor(row, 1);
    print!("{}", " ".repeat(FILTER_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.focus_border));
    print!("│");

    let marker = if focused { " ▸ " } else { "   " };
    let label_text = format!("{marker}{label:<width$}", width = LABEL_WIDTH - 3);

    if focused {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.focus_border));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{label_text}");
    print!("{}", Theme::reset());

    let cursor = if focused && shows_cursor { "█" } else { "" };
    let value_width = inner_width.saturating_sub(LABEL_WIDTH + text_width(cursor) + 1);
    let value_text = truncate(value, value_width);

    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!(" {value_text}{cursor}");
    let used = LABEL_WIDTH + 1 + text_width(&value_text) + text_width(cursor);
    print!("{}", " ".repeat(inner_width.saturating_sub(used)));

    print!("{}", Theme::fg(&theme.colors.focus_border));
    print!("│");
    print!("{}", Theme::reset());
}
