//! Tag selector component renderer.
//!
//! Renders the visible window of tag options as a checklist, with the cursor
//! row in selection colors and fuzzy match highlighting for the narrowing
//! query.

use crate::ui::helpers::{self, position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{TagItem, TagPickerInfo};

/// Horizontal margin, aligned with the filter box.
const PICKER_MARGIN: usize = 2;

/// Renders the tag picker starting at the specified row.
///
/// # Returns
///
/// The next available row position.
///
/// # Layout
///
/// ```text
/// ┌─ Filter: pu ──────────────┐
/// │ [x] Pun                   │
/// │ [ ] Pumpkin               │
/// └───────────────────────────┘
/// ```
pub fn render_tag_picker(row: usize, picker: &TagPickerInfo, theme: &Theme, cols: usize) -> usize {
    let inner_width = cols.saturating_sub(PICKER_MARGIN * 2 + 2);

    let title = if picker.query.is_empty() {
        "─ Tags ".to_string()
    } else {
        format!("─ Filter: {} ", picker.query)
    };
    let title = truncate(&title, inner_width);

    position_cursor(row, 1);
    print!("{}", " ".repeat(PICKER_MARGIN));
    print!("{}", Theme::fg(&theme.colors.border));
    print!("┌{title}{}┐", "─".repeat(inner_width.saturating_sub(text_width(&title))));
    print!("{}", Theme::reset());

    let mut current_row = row + 1;

    if let Some(placeholder) = &picker.placeholder {
        position_cursor(current_row, 1);
        print!("{}", " ".repeat(PICKER_MARGIN));
        print_side(theme);
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        let text = truncate(&format!(" {placeholder}"), inner_width);
        print!("{text}{}", " ".repeat(inner_width.saturating_sub(text_width(&text))));
        print!("{}", Theme::reset());
        print_side(theme);
        current_row += 1;
    }

    for item in &picker.items {
        current_row = render_tag_row(current_row, item, theme, inner_width);
    }

    position_cursor(current_row, 1);
    print!("{}", " ".repeat(PICKER_MARGIN));
    print!("{}", Theme::fg(&theme.colors.border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    current_row + 1
}

fn print_side(theme: &Theme) {
    print!("{}", Theme::fg(&theme.colors.border));
    print!("│");
    print!("{}", Theme::reset());
}

/// Renders one checklist row; the cursor row is filled with selection colors.
fn render_tag_row(row: usize, item: &TagItem, theme: &Theme, inner_width: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", " ".repeat(PICKER_MARGIN));
    print_side(theme);

    if item.is_cursor {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let check = if item.is_checked { " [x] " } else { " [ ] " };
    print!("{check}");

    let label = truncate(&item.label, inner_width.saturating_sub(text_width(check)));
    helpers::render_highlighted_text(&label, &item.highlight_ranges, theme, item.is_cursor);

    let used = text_width(check) + text_width(&label);
    print!("{}", " ".repeat(inner_width.saturating_sub(used)));
    print!("{}", Theme::reset());

    print_side(theme);
    row + 1
}
