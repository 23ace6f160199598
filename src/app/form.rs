//! Filter form state: search text, category selector and tag selector.
//!
//! The form is the terminal counterpart of the search inputs. It is read at
//! submit time by [`FilterForm::to_filter`], and wiped by [`FilterForm::reset`]
//! on Clear.
//!
//! The tag selector can be narrowed by typing while it has focus. Narrowing
//! uses fuzzy matching on the displayed label; the cursor always indexes the
//! narrowed list, never the full one.

use super::modes::FocusField;
use crate::domain::{tag_label, Filter, TagList};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Category choices offered when the configuration does not list any.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["general", "programming", "classic", "knock-knock"];

/// One entry of the tag selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOption {
    /// Value sent to the server.
    pub value: String,
    /// Display label, first letter capitalized.
    pub label: String,
    pub selected: bool,
}

impl TagOption {
    fn new(value: String) -> Self {
        Self {
            label: tag_label(&value),
            value,
            selected: false,
        }
    }
}

/// Search form inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterForm {
    /// Raw search text as typed.
    pub search: String,
    /// Category choices, in selector order.
    pub categories: Vec<String>,
    /// Index into `categories`; `None` means "any category".
    pub category_index: Option<usize>,
    /// Tag selector entries, in server order.
    pub tag_options: Vec<TagOption>,
    /// Narrowing query for the tag selector.
    pub tag_query: String,
    /// Cursor position within [`FilterForm::visible_tags`].
    pub tag_cursor: usize,
    /// Field receiving keyboard input.
    pub focus: FocusField,
}

impl Default for FilterForm {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES.iter().map(ToString::to_string).collect())
    }
}

impl FilterForm {
    /// Creates an empty form offering `categories`.
    #[must_use]
    pub const fn new(categories: Vec<String>) -> Self {
        Self {
            search: String::new(),
            categories,
            category_index: None,
            tag_options: Vec::new(),
            tag_query: String::new(),
            tag_cursor: 0,
            focus: FocusField::Search,
        }
    }

    /// Selected category value, if any.
    #[must_use]
    pub fn selected_category(&self) -> Option<&str> {
        self.category_index
            .and_then(|i| self.categories.get(i))
            .map(String::as_str)
    }

    /// Advances the category selector: any → first → … → last → any.
    pub fn next_category(&mut self) {
        self.category_index = match self.category_index {
            None if self.categories.is_empty() => None,
            None => Some(0),
            Some(i) if i + 1 < self.categories.len() => Some(i + 1),
            Some(_) => None,
        };
    }

    /// Moves the category selector backwards: any → last → … → first → any.
    pub fn previous_category(&mut self) {
        self.category_index = match self.category_index {
            None => self.categories.len().checked_sub(1),
            Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    /// Replaces the tag selector entries.
    ///
    /// Selections survive for values present in both the old and new lists.
    pub fn set_tags(&mut self, tags: TagList) {
        let previously_selected = self.selected_tags();
        self.tag_options = tags
            .into_iter()
            .map(|value| {
                let mut option = TagOption::new(value);
                option.selected = previously_selected.contains(&option.value);
                option
            })
            .collect();
        self.clamp_tag_cursor();

        tracing::debug!(tag_count = self.tag_options.len(), "tag selector populated");
    }

    /// Indices into `tag_options` that match the narrowing query, in order.
    #[must_use]
    pub fn visible_tags(&self) -> Vec<usize> {
        let query = self.effective_tag_query();
        if query.is_empty() {
            return (0..self.tag_options.len()).collect();
        }

        let matcher = tag_matcher();
        self.tag_options
            .iter()
            .enumerate()
            .filter(|(_, option)| matcher.fuzzy_match(&option.label, query).is_some())
            .map(|(i, _)| i)
            .collect()
    }

    /// The narrowing query as matched: surrounding whitespace ignored.
    #[must_use]
    pub fn effective_tag_query(&self) -> &str {
        self.tag_query.trim()
    }

    /// Appends a character to the tag narrowing query.
    pub fn push_tag_query(&mut self, c: char) {
        self.tag_query.push(c);
        self.clamp_tag_cursor();
    }

    /// Removes the last character of the tag narrowing query.
    pub fn pop_tag_query(&mut self) {
        self.tag_query.pop();
        self.clamp_tag_cursor();
    }

    /// Moves the tag cursor down, wrapping to the top.
    pub fn move_tag_cursor_down(&mut self) {
        let count = self.visible_tags().len();
        if count == 0 {
            return;
        }
        self.tag_cursor = (self.tag_cursor + 1) % count;
    }

    /// Moves the tag cursor up, wrapping to the bottom.
    pub fn move_tag_cursor_up(&mut self) {
        let count = self.visible_tags().len();
        if count == 0 {
            return;
        }
        self.tag_cursor = if self.tag_cursor == 0 {
            count - 1
        } else {
            self.tag_cursor - 1
        };
    }

    /// Toggles the tag under the cursor, returning it.
    pub fn toggle_tag_at_cursor(&mut self) -> Option<&TagOption> {
        let index = *self.visible_tags().get(self.tag_cursor)?;
        let option = self.tag_options.get_mut(index)?;
        option.selected = !option.selected;
        Some(&*option)
    }

    /// Selected tag values, in selector order.
    #[must_use]
    pub fn selected_tags(&self) -> Vec<String> {
        self.tag_options
            .iter()
            .filter(|option| option.selected)
            .map(|option| option.value.clone())
            .collect()
    }

    /// Builds the filter to submit. Blank inputs are omitted.
    #[must_use]
    pub fn to_filter(&self) -> Filter {
        Filter::new(
            &self.search,
            self.selected_category().unwrap_or_default(),
            self.selected_tags(),
        )
    }

    /// Resets every input to empty/unselected and focuses the search box.
    ///
    /// The tag options themselves stay; only their selection is cleared.
    pub fn reset(&mut self) {
        self.search.clear();
        self.category_index = None;
        for option in &mut self.tag_options {
            option.selected = false;
        }
        self.tag_query.clear();
        self.tag_cursor = 0;
        self.focus = FocusField::Search;
    }

    fn clamp_tag_cursor(&mut self) {
        let count = self.visible_tags().len();
        self.tag_cursor = self.tag_cursor.min(count.saturating_sub(1));
    }
}

/// Case-insensitive matcher used for both narrowing and highlighting tags.
#[must_use]
pub fn tag_matcher() -> SkimMatcherV2 {
    SkimMatcherV2::default().ignore_case()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with_tags(tags: &[&str]) -> FilterForm {
        let mut form = FilterForm::default();
        form.set_tags(tags.iter().map(|t| (*t).to_string()).collect());
        form
    }

    #[test]
    fn tag_options_are_capitalized() {
        let form = form_with_tags(&["pun", "dad"]);
        let labels: Vec<&str> = form.tag_options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Pun", "Dad"]);
        assert_eq!(form.tag_options[0].value, "pun");
    }

    #[test]
    fn category_cycles_through_any() {
        let mut form = FilterForm::new(vec!["classic".into(), "programming".into()]);
        assert_eq!(form.selected_category(), None);
        form.next_category();
        assert_eq!(form.selected_category(), Some("classic"));
        form.next_category();
        assert_eq!(form.selected_category(), Some("programming"));
        form.next_category();
        assert_eq!(form.selected_category(), None);
        form.previous_category();
        assert_eq!(form.selected_category(), Some("programming"));
    }

    #[test]
    fn no_categories_stays_any() {
        let mut form = FilterForm::new(Vec::new());
        form.next_category();
        form.previous_category();
        assert_eq!(form.selected_category(), None);
    }

    #[test]
    fn filter_trims_and_omits_blanks() {
        let mut form = form_with_tags(&["pun", "dad"]);
        form.search = "  chicken  ".into();
        let filter = form.to_filter();
        assert_eq!(filter.search.as_deref(), Some("chicken"));
        assert!(filter.category.is_none());
        assert!(filter.tags.is_none());
    }

    #[test]
    fn toggled_tags_follow_selector_order() {
        let mut form = form_with_tags(&["pun", "dad", "science"]);
        form.move_tag_cursor_down();
        form.move_tag_cursor_down();
        form.toggle_tag_at_cursor();
        form.move_tag_cursor_down();
        form.toggle_tag_at_cursor();
        assert_eq!(form.selected_tags(), vec!["pun", "science"]);
        assert_eq!(form.to_filter().tags, Some(vec!["pun".to_string(), "science".to_string()]));
    }

    #[test]
    fn narrowing_query_limits_visible_tags() {
        let mut form = form_with_tags(&["pun", "dad", "programming"]);
        for c in "pr".chars() {
            form.push_tag_query(c);
        }
        let visible: Vec<&str> = form
            .visible_tags()
            .into_iter()
            .map(|i| form.tag_options[i].value.as_str())
            .collect();
        assert_eq!(visible, vec!["programming"]);

        form.toggle_tag_at_cursor();
        assert_eq!(form.selected_tags(), vec!["programming"]);

        form.pop_tag_query();
        form.pop_tag_query();
        assert_eq!(form.visible_tags().len(), 3);
    }

    #[test]
    fn narrowing_ignores_case_and_padding() {
        let mut form = form_with_tags(&["pun", "dad"]);
        for c in " PU ".chars() {
            form.push_tag_query(c);
        }
        assert_eq!(form.effective_tag_query(), "PU");
        assert_eq!(form.visible_tags(), vec![0]);
    }

    #[test]
    fn cursor_clamps_when_list_shrinks() {
        let mut form = form_with_tags(&["pun", "dad", "science"]);
        form.move_tag_cursor_up();
        assert_eq!(form.tag_cursor, 2);
        form.push_tag_query('d');
        assert_eq!(form.tag_cursor, 0);
    }

    #[test]
    fn toggle_on_empty_selector_is_noop() {
        let mut form = FilterForm::default();
        assert!(form.toggle_tag_at_cursor().is_none());
        form.move_tag_cursor_down();
        assert_eq!(form.tag_cursor, 0);
    }

    #[test]
    fn reset_clears_every_input() {
        let mut form = form_with_tags(&["pun", "dad"]);
        form.search = "road".into();
        form.next_category();
        form.toggle_tag_at_cursor();
        form.push_tag_query('d');
        form.focus = FocusField::Tags;

        form.reset();

        assert!(form.search.is_empty());
        assert_eq!(form.selected_category(), None);
        assert!(form.selected_tags().is_empty());
        assert!(form.tag_query.is_empty());
        assert_eq!(form.focus, FocusField::Search);
        assert_eq!(form.tag_options.len(), 2);
        assert!(form.to_filter().is_empty());
    }

    #[test]
    fn reloading_tags_keeps_surviving_selection() {
        let mut form = form_with_tags(&["pun", "dad"]);
        form.toggle_tag_at_cursor();
        form.set_tags(vec!["dad".into(), "pun".into(), "science".into()]);
        assert_eq!(form.selected_tags(), vec!["pun"]);
    }
}
