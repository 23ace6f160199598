//! View state controller.
//!
//! [`ViewController`] owns the single active [`ViewState`] and the rendered
//! contents of the joke panel. Panel visibility is derived from the state, so
//! exactly one of the four panels is visible at any time by construction.
//!
//! The joke panel keeps its rendered fields between transitions, the way a
//! page keeps its elements while they are hidden. [`ViewController::display_joke`]
//! therefore clears the previously rendered tags before adding the new ones.
//!
//! # Example
//!
//! ```rust
//! use jokebox::app::view::{Panel, ViewController};
//! use jokebox::domain::Joke;
//!
//! let mut view = ViewController::default();
//! assert_eq!(view.visible_panel(), Panel::Empty);
//!
//! view.show_loading();
//! view.display_joke(Joke::new("setup", "punchline"));
//! assert_eq!(view.visible_panel(), Panel::Result);
//! assert_eq!(view.current_joke().map(|j| j.setup.as_str()), Some("setup"));
//! ```

use crate::domain::Joke;

/// The single active panel variant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// A joke request is in flight.
    Loading,
    /// The last joke request failed; holds the message to show.
    Error(String),
    /// A joke is displayed.
    Result(Joke),
    /// Nothing requested yet, or the form was cleared.
    #[default]
    Empty,
}

/// Panel identifiers, one per [`ViewState`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Loading,
    Error,
    Result,
    Empty,
}

impl Panel {
    /// Every panel, in layout order.
    pub const ALL: [Self; 4] = [Self::Loading, Self::Error, Self::Result, Self::Empty];
}

/// Rendered contents of the joke panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JokePanel {
    pub setup: String,
    pub punchline: String,
    /// Category badge; `None` hides it.
    pub category_badge: Option<String>,
    /// Tag labels in insertion order.
    pub tags: Vec<String>,
}

/// Owns the active view state and the rendered panels.
#[derive(Debug, Clone, Default)]
pub struct ViewController {
    state: ViewState,
    joke_panel: JokePanel,
    error_message: String,
}

impl ViewController {
    /// Switches to the loading panel.
    pub fn show_loading(&mut self) {
        tracing::debug!("showing loading panel");
        self.state = ViewState::Loading;
    }

    /// Renders `joke` into the joke panel and makes it the visible one.
    pub fn display_joke(&mut self, joke: Joke) {
        tracing::debug!(
            joke_id = ?joke.id,
            has_category = joke.category().is_some(),
            tag_count = joke.tags().len(),
            "displaying joke"
        );

        self.joke_panel.setup.clone_from(&joke.setup);
        self.joke_panel.punchline.clone_from(&joke.punchline);
        self.joke_panel.category_badge = joke.category().map(str::to_string);

        self.joke_panel.tags.clear();
        for tag in joke.tags() {
            self.joke_panel.tags.push(tag.clone());
        }

        self.state = ViewState::Result(joke);
    }

    /// Renders `message` into the error panel and makes it the visible one.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error_message = message.into();
        tracing::debug!(message = %self.error_message, "showing error panel");
        self.state = ViewState::Error(self.error_message.clone());
    }

    /// Switches to the empty panel and forgets the current joke.
    pub fn show_empty(&mut self) {
        tracing::debug!("showing empty panel");
        self.state = ViewState::Empty;
    }

    /// The active view state.
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// The joke currently on display, if the result panel is visible.
    #[must_use]
    pub const fn current_joke(&self) -> Option<&Joke> {
        match &self.state {
            ViewState::Result(joke) => Some(joke),
            _ => None,
        }
    }

    /// The panel that is currently visible.
    #[must_use]
    pub const fn visible_panel(&self) -> Panel {
        match self.state {
            ViewState::Loading => Panel::Loading,
            ViewState::Error(_) => Panel::Error,
            ViewState::Result(_) => Panel::Result,
            ViewState::Empty => Panel::Empty,
        }
    }

    /// Returns `true` if `panel` is the visible one.
    #[must_use]
    pub fn is_visible(&self, panel: Panel) -> bool {
        self.visible_panel() == panel
    }

    /// Rendered joke panel contents (meaningful while [`Panel::Result`] is visible).
    #[must_use]
    pub const fn joke_panel(&self) -> &JokePanel {
        &self.joke_panel
    }

    /// Rendered error message (meaningful while [`Panel::Error`] is visible).
    #[must_use]
    pub fn error_message(&self) -> &str {
        &self.error_message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged_joke(tags: &[&str]) -> Joke {
        let mut joke = Joke::new("setup", "punchline");
        joke.tags = Some(tags.iter().map(|t| (*t).to_string()).collect());
        joke
    }

    fn visible_count(view: &ViewController) -> usize {
        Panel::ALL.iter().filter(|p| view.is_visible(**p)).count()
    }

    #[test]
    fn starts_empty() {
        let view = ViewController::default();
        assert_eq!(view.visible_panel(), Panel::Empty);
        assert!(view.current_joke().is_none());
    }

    #[test]
    fn second_joke_without_tags_clears_rendered_tags() {
        let mut view = ViewController::default();
        view.display_joke(tagged_joke(&["pun", "dad"]));
        assert_eq!(view.joke_panel().tags, vec!["pun", "dad"]);

        view.display_joke(Joke::new("another", "one"));
        assert!(view.joke_panel().tags.is_empty());
    }

    #[test]
    fn tags_keep_insertion_order_and_do_not_accumulate() {
        let mut view = ViewController::default();
        let joke = tagged_joke(&["b", "a", "c"]);
        view.display_joke(joke.clone());
        view.display_joke(joke);
        assert_eq!(view.joke_panel().tags, vec!["b", "a", "c"]);
    }

    #[test]
    fn category_badge_hidden_when_absent() {
        let mut view = ViewController::default();
        let mut joke = Joke::new("a", "b");
        joke.category = Some("classic".into());
        view.display_joke(joke);
        assert_eq!(view.joke_panel().category_badge.as_deref(), Some("classic"));

        view.display_joke(Joke::new("c", "d"));
        assert_eq!(view.joke_panel().category_badge, None);
    }

    #[test]
    fn exactly_one_panel_after_any_sequence() {
        let mut view = ViewController::default();
        assert_eq!(visible_count(&view), 1);

        view.show_loading();
        assert_eq!(visible_count(&view), 1);
        view.show_error("boom");
        assert_eq!(visible_count(&view), 1);
        view.display_joke(tagged_joke(&["x"]));
        assert_eq!(visible_count(&view), 1);
        view.show_loading();
        view.show_loading();
        assert_eq!(visible_count(&view), 1);
        view.show_empty();
        assert_eq!(visible_count(&view), 1);
        assert_eq!(view.visible_panel(), Panel::Empty);
    }

    #[test]
    fn error_then_empty_drops_joke() {
        let mut view = ViewController::default();
        view.display_joke(Joke::new("a", "b"));
        view.show_error("No jokes");
        assert_eq!(view.state(), &ViewState::Error("No jokes".into()));
        assert_eq!(view.error_message(), "No jokes");
        assert!(view.current_joke().is_none());

        view.show_empty();
        assert!(view.current_joke().is_none());
    }
}
