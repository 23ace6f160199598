//! Loading, error and joke panel renderers.
//!
//! Only one panel is drawn per frame; the caller picks it from
//! [`PanelView`](crate::ui::viewmodel::PanelView). Each renderer stays within
//! the rows it is given and returns the next free row.

use crate::ui::helpers::{position_cursor, print_centered, text_width, truncate, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::JokeView;

/// Left indent of joke text.
const INDENT: usize = 4;

/// Renders the centered loading message.
pub fn render_loading(row: usize, message: &str, theme: &Theme, cols: usize) -> usize {
    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.loading_fg));
    print_centered(message, cols);
    print!("{}", Theme::reset());
    row + 2
}

/// Renders the error message, wrapped and centered.
pub fn render_error(row: usize, message: &str, theme: &Theme, cols: usize, max_rows: usize) -> usize {
    let mut current_row = row + 1;
    let last_row = row + max_rows;

    print!("{}", Theme::bold());
    for line in wrap_text(message, cols.saturating_sub(INDENT * 2)) {
        if current_row >= last_row {
            break;
        }
        position_cursor(current_row, 1);
        print!("{}", Theme::fg(&theme.colors.error_fg));
        print_centered(&line, cols);
        current_row += 1;
    }
    print!("{}", Theme::reset());

    current_row
}

/// Renders a joke: badge, setup, punchline, tag labels and metadata.
///
/// # Layout
///
/// ```text
///     [ classic ]
///
///     Why did the chicken cross the road?
///
///     To get to the other side.
///
///     pun  dad  +2
///     #7 · added 2024-03-01
/// ```
///
/// Lines that do not fit in `max_rows` are dropped from the bottom.
pub fn render_joke(row: usize, joke: &JokeView, theme: &Theme, cols: usize, max_rows: usize) -> usize {
    let width = cols.saturating_sub(INDENT * 2);
    let last_row = row + max_rows;
    let mut current_row = row + 1;

    if let Some(badge) = &joke.category_badge {
        if current_row < last_row {
            position_cursor(current_row, INDENT + 1);
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.badge_fg));
            print!("{}", Theme::bg(&theme.colors.badge_bg));
            print!(" {} ", truncate(badge, width.saturating_sub(2)));
            print!("{}", Theme::reset());
        }
        current_row += 2;
    }

    let setup_style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.text_normal));
    current_row = print_wrapped(current_row, last_row, &joke.setup, &setup_style, width);
    current_row += 1;

    let punchline_style = format!("{}{}", Theme::italic(), Theme::fg(&theme.colors.punchline_fg));
    current_row = print_wrapped(current_row, last_row, &joke.punchline, &punchline_style, width);

    if !joke.tags.is_empty() || joke.meta.is_some() {
        current_row += 1;
    }

    if !joke.tags.is_empty() && current_row < last_row {
        position_cursor(current_row, INDENT + 1);
        let shown = visible_tag_count(&joke.tags, width);
        for tag in &joke.tags[..shown] {
            print!("{}", Theme::fg(&theme.colors.tag_fg));
            print!("{}", Theme::bg(&theme.colors.tag_bg));
            print!(" {tag} ");
            print!("{}", Theme::reset());
            print!(" ");
        }
        let hidden = joke.tags.len() - shown;
        if hidden > 0 {
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("+{hidden}");
            print!("{}", Theme::reset());
        }
        current_row += 1;
    }

    if let Some(meta) = &joke.meta {
        if current_row < last_row {
            position_cursor(current_row, INDENT + 1);
            print!("{}", Theme::dim());
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("{}", truncate(meta, width));
            print!("{}", Theme::reset());
            current_row += 1;
        }
    }

    current_row
}

fn print_wrapped(row: usize, last_row: usize, text: &str, style: &str, width: usize) -> usize {
    let mut current_row = row;
    for line in wrap_text(text, width) {
        if current_row >= last_row {
            break;
        }
        position_cursor(current_row, INDENT + 1);
        print!("{style}{line}{}", Theme::reset());
        current_row += 1;
    }
    current_row
}

/// Number of leading tag labels that fit in `width`, leaving room for a
/// `+N` marker whenever some are left out.
fn visible_tag_count(tags: &[String], width: usize) -> usize {
    let mut used = 0;
    for (i, tag) in tags.iter().enumerate() {
        let label_width = text_width(tag) + 2;
        let remaining = tags.len() - i - 1;
        let marker_width = if remaining == 0 {
            0
        } else {
            text_width(&format!("+{remaining}"))
        };
        if used + label_width + marker_width > width {
            return i;
        }
        used += label_width + 1;
    }
    tags.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn all_tags_shown_when_they_fit() {
        assert_eq!(visible_tag_count(&tags(&["pun", "dad", "science"]), 40), 3);
    }

    #[test]
    fn overflow_leaves_room_for_marker() {
        let tags = tags(&["pun", "dad", "science"]);
        let shown = visible_tag_count(&tags, 12);
        assert_eq!(shown, 1);
        let hidden = tags.len() - shown;
        assert!(shown * 6 + text_width(&format!("+{hidden}")) <= 12);
    }

    #[test]
    fn wide_labels_count_display_columns() {
        assert_eq!(visible_tag_count(&tags(&["日本語", "pun"]), 10), 1);
        assert_eq!(visible_tag_count(&tags(&["日本語", "pun"]), 9), 0);
    }
}
