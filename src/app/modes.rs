//! Input focus state for the filter form.
//!
//! The form has three fields, visited in order with Tab. Focus decides how
//! key presses are interpreted: typed characters go to the search text in
//! [`FocusField::Search`], narrow the tag list in [`FocusField::Tags`], and
//! are ignored on the category selector.
//!
//! # Example
//!
//! ```rust
//! use jokebox::app::FocusField;
//!
//! let focus = FocusField::Search;
//! assert_eq!(focus.next(), FocusField::Category);
//! assert_eq!(focus.previous(), FocusField::Tags);
//! ```

/// The form field that receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusField {
    /// Free-text search box.
    #[default]
    Search,

    /// Category selector (Left/Right cycle through choices).
    Category,

    /// Tag selector (Up/Down move, Space toggles, typing filters).
    Tags,
}

impl FocusField {
    /// Field that Tab moves to.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Search => Self::Category,
            Self::Category => Self::Tags,
            Self::Tags => Self::Search,
        }
    }

    /// Field that Shift+Tab moves to.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Search => Self::Tags,
            Self::Category => Self::Search,
            Self::Tags => Self::Category,
        }
    }
}
