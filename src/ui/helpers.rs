//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple UI
//! components: cursor positioning, fuzzy match highlighting and fitting text
//! into a fixed number of columns.
//!
//! Widths are terminal display columns (`unicode-width`): `é` occupies one
//! column, CJK ideographs and most emoji occupy two.
//!
//! # Example
//!
//! ```rust
//! use jokebox::ui::helpers::{truncate, wrap_text};
//!
//! assert_eq!(wrap_text("Why did the chicken cross the road?", 16),
//!            vec!["Why did the", "chicken cross", "the road?"]);
//! assert_eq!(truncate("knock-knock", 6), "knock…");
//! ```

use crate::ui::theme::Theme;
use textwrap::{Options, WrapAlgorithm};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of terminal columns `text` occupies.
#[must_use]
pub fn text_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Shortens `text` to at most `width` columns, ending with `…` when cut.
///
/// A wide character that would straddle the limit is dropped entirely.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut cut = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        cut.push(c);
    }
    cut.push('…');
    cut
}

/// Splits `text` into lines of at most `width` columns.
///
/// Breaks happen at word boundaries; a single word wider than `width` is
/// split across lines. Blank input yields no lines.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let options = Options::new(width.max(1)).wrap_algorithm(WrapAlgorithm::FirstFit);
    textwrap::wrap(text, options)
        .into_iter()
        .map(std::borrow::Cow::into_owned)
        .collect()
}

/// Prints `text` horizontally centered in `cols`, padded to the full width.
pub fn print_centered(text: &str, cols: usize) {
    let text = truncate(text, cols);
    let len = text_width(&text);
    let padding = cols.saturating_sub(len) / 2;
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
}

/// Renders text with highlighted character ranges for fuzzy matches.
///
/// Highlighted sections use match highlight colors unless the row is under
/// the cursor, in which case the selection colors take precedence.
///
/// # Parameters
///
/// * `text` - The text to render
/// * `ranges` - Character index ranges to highlight `(start, end)` (inclusive start, exclusive end)
/// * `theme` - Active color theme for highlight colors
/// * `is_cursor` - Whether the row is under the cursor (disables match highlighting)
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_cursor: bool,
) {
    if ranges.is_empty() || is_cursor {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}
