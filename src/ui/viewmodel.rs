//! View model types representing renderable UI state.
//!
//! View models are computed from `AppState` by `AppState::compute_viewmodel()`
//! and consumed by the renderer. They hold display-ready strings and flags
//! only; no business logic.
//!
//! # Example
//!
//! ```rust
//! use jokebox::app::FocusField;
//! use jokebox::ui::viewmodel::*;
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " Jokebox ".to_string() },
//!     filters: FilterBarInfo {
//!         search: "chicken".to_string(),
//!         category: "Any".to_string(),
//!         tags: "None".to_string(),
//!         focus: FocusField::Search,
//!     },
//!     tag_picker: None,
//!     panel: PanelView::Loading { message: "Loading...".to_string() },
//!     footer: FooterInfo { keybindings: "Esc: close".to_string() },
//! };
//! assert!(matches!(vm.panel, PanelView::Loading { .. }));
//! ```

use crate::app::FocusField;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Header information (title).
    pub header: HeaderInfo,

    /// Filter form summary.
    pub filters: FilterBarInfo,

    /// Tag selector list, present while the tag field has focus.
    pub tag_picker: Option<TagPickerInfo>,

    /// The one visible panel.
    pub panel: PanelView,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the focused field.
    pub keybindings: String,
}

/// Filter form display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBarInfo {
    /// Search text as typed.
    pub search: String,
    /// Category label, or "Any".
    pub category: String,
    /// Comma-separated selected tag labels, or "None".
    pub tags: String,
    /// Field that has keyboard focus.
    pub focus: FocusField,
}

/// Tag selector display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPickerInfo {
    /// Narrowing query.
    pub query: String,
    /// Visible window of options.
    pub items: Vec<TagItem>,
    /// Shown instead of items when there is nothing to list.
    pub placeholder: Option<String>,
}

/// One row of the tag selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagItem {
    /// Capitalized label.
    pub label: String,
    /// Whether the tag is part of the filter.
    pub is_checked: bool,
    /// Whether the cursor is on this row.
    pub is_cursor: bool,
    /// Character ranges matching the narrowing query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// The visible panel and its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView {
    /// A request is in flight.
    Loading { message: String },
    /// The last request failed.
    Error { message: String },
    /// A joke is displayed.
    Joke(JokeView),
    /// Nothing to show yet.
    Empty(EmptyState),
}

/// Joke panel display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeView {
    pub setup: String,
    pub punchline: String,
    /// Category badge; `None` hides it.
    pub category_badge: Option<String>,
    /// Tag labels in insertion order.
    pub tags: Vec<String>,
    /// Secondary line such as "#42 · added 2024-03-01".
    pub meta: Option<String>,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
