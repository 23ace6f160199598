//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! # Example
//!
//! ```rust
//! use jokebox::api::ApiClient;
//! use jokebox::app::{AppState, FilterForm};
//! use jokebox::ui::{render, Theme};
//!
//! let state = AppState::new(ApiClient::default(), FilterForm::default(), Theme::default());
//! render(&state, 24, 80); // Renders to stdout
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// # Output
///
/// Prints ANSI-styled output to stdout using `print!`.
/// Does not clear the screen or manage cursor position.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    tracing::trace!(
        rows = rows,
        cols = cols,
        panel = ?state.view.visible_panel(),
        "rendering"
    );

    components::render_layout(&viewmodel, &state.theme, cols, rows);
}
