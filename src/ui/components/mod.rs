//! Composable UI component renderers.
//!
//! Each component is responsible for rendering a specific part of the
//! interface, starting at a given row and returning the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`filters`]: Search, category and tag fields
//! - [`tag_picker`]: Tag checklist with fuzzy narrowing
//! - [`panel`]: Loading, error and joke panels
//! - [`empty`]: Empty state message
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Filter box - 5 lines]
//! [Tag picker - while the tag field has focus]
//! [Border]
//! [Visible panel]
//! [Blank padding to fill screen]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod filters;
mod footer;
mod header;
mod panel;
mod tag_picker;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{PanelView, UIViewModel};

use empty::render_empty_state;
use filters::render_filter_bar;
use footer::render_footer;
use header::render_header;
use panel::{render_error, render_joke, render_loading};
use tag_picker::render_tag_picker;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full layout.
///
/// The footer and its border are pinned to the last two rows; the panel gets
/// whatever is left between the form and the footer.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_filter_bar(current_row, &vm.filters, theme, cols);
    if let Some(picker) = &vm.tag_picker {
        current_row = render_tag_picker(current_row, picker, theme, cols);
    }
    current_row = render_border(current_row, &theme.colors.border, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);
    let panel_rows = border_row.saturating_sub(current_row);

    match &vm.panel {
        PanelView::Loading { message } => {
            render_loading(current_row, message, theme, cols);
        }
        PanelView::Error { message } => {
            render_error(current_row, message, theme, cols, panel_rows);
        }
        PanelView::Joke(joke) => {
            render_joke(current_row, joke, theme, cols, panel_rows);
        }
        PanelView::Empty(empty) => {
            render_empty_state(current_row, empty, theme, cols);
        }
    }

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
