//! Application state management and view model computation.
//!
//! [`AppState`] is the single owner of everything the plugin knows: the view
//! controller (which panel is visible, the current joke), the filter form, the
//! API client and the request generation counter. It is built once by
//! [`crate::initialize`] and mutated only by the event handler.
//!
//! # Request Generations
//!
//! Each joke request is stamped with the next generation number. A completion
//! is applied only if its generation is still the latest one issued; anything
//! older is a superseded request and is dropped. Clear also advances the
//! generation, so a request that was in flight when the form was cleared
//! cannot bring a joke back.
//!
//! # Example
//!
//! ```rust
//! use jokebox::api::ApiClient;
//! use jokebox::app::AppState;
//! use jokebox::app::form::FilterForm;
//! use jokebox::ui::Theme;
//!
//! let state = AppState::new(ApiClient::default(), FilterForm::default(), Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.tag_picker.is_none());
//! ```

use super::form::{tag_matcher, FilterForm};
use super::modes::FocusField;
use super::view::{ViewController, ViewState};
use crate::api::ApiClient;
use crate::ui::helpers::text_width;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    EmptyState, FilterBarInfo, FooterInfo, HeaderInfo, JokeView, PanelView, TagItem,
    TagPickerInfo, UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;

/// Rows the tag picker may occupy, including its frame.
const TAG_PICKER_MAX_ROWS: usize = 8;

/// Rows taken by everything except the tag picker and the panel.
const CHROME_ROWS: usize = 11;

/// Columns of the filter box not available to a field value.
const FILTER_VALUE_OVERHEAD: usize = 19;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Active panel and the current joke.
    pub view: ViewController,

    /// Search, category and tag inputs.
    pub form: FilterForm,

    /// Request builder for the configured API root.
    pub client: ApiClient,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Generation of the most recently issued joke request.
    pub latest_generation: u64,

    /// Whether the host has granted `WebAccess`; requests are only sent once it has.
    pub web_access: bool,
}

impl AppState {
    /// Creates the state with the empty panel showing.
    #[must_use]
    pub fn new(client: ApiClient, form: FilterForm, theme: Theme) -> Self {
        Self {
            view: ViewController::default(),
            form,
            client,
            theme,
            latest_generation: 0,
            web_access: false,
        }
    }

    /// Reserves the generation number for a new joke request.
    pub fn next_generation(&mut self) -> u64 {
        self.latest_generation += 1;
        self.latest_generation
    }

    /// Returns `true` if a completion with `generation` should be applied.
    #[must_use]
    pub const fn is_current(&self, generation: u64) -> bool {
        generation == self.latest_generation
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width for summarizing selected tags
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        UIViewModel {
            header: self.compute_header(),
            filters: self.compute_filter_bar(cols),
            tag_picker: (self.form.focus == FocusField::Tags)
                .then(|| self.compute_tag_picker(rows)),
            panel: self.compute_panel(),
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let tag_count = self.form.tag_options.len();
        let title = if tag_count == 0 {
            " Jokebox ".to_string()
        } else {
            format!(" Jokebox ({tag_count} tags) ")
        };
        HeaderInfo { title }
    }

    fn compute_filter_bar(&self, cols: usize) -> FilterBarInfo {
        let tags: Vec<&str> = self
            .form
            .tag_options
            .iter()
            .filter(|option| option.selected)
            .map(|option| option.label.as_str())
            .collect();

        FilterBarInfo {
            search: self.form.search.clone(),
            category: self
                .form
                .selected_category()
                .map_or_else(|| "Any".to_string(), crate::domain::tag_label),
            tags: summarize_tags(&tags, cols.saturating_sub(FILTER_VALUE_OVERHEAD)),
            focus: self.form.focus,
        }
    }

    /// Computes the visible window of the tag selector.
    ///
    /// The window is centered on the cursor and shifted back when it would run
    /// past the end of the list.
    fn compute_tag_picker(&self, rows: usize) -> TagPickerInfo {
        let visible = self.form.visible_tags();

        if visible.is_empty() {
            let placeholder = if self.form.tag_options.is_empty() {
                "No tags available"
            } else {
                "No tags match"
            };
            return TagPickerInfo {
                query: self.form.tag_query.clone(),
                items: vec![],
                placeholder: Some(placeholder.to_string()),
            };
        }

        let available_rows = Self::tag_window_rows(rows);

        let mut window_start = self.form.tag_cursor.saturating_sub(available_rows / 2);
        let window_end = (window_start + available_rows).min(visible.len());
        if window_end - window_start < available_rows && visible.len() >= available_rows {
            window_start = window_end.saturating_sub(available_rows);
        }

        let matcher = (!self.form.effective_tag_query().is_empty()).then(tag_matcher);

        let items = visible[window_start..window_end]
            .iter()
            .enumerate()
            .filter_map(|(relative, &index)| {
                let option = self.form.tag_options.get(index)?;
                Some(TagItem {
                    label: option.label.clone(),
                    is_checked: option.selected,
                    is_cursor: window_start + relative == self.form.tag_cursor,
                    highlight_ranges: matcher.as_ref().map_or_else(Vec::new, |m| {
                        self.compute_highlight_ranges(&option.label, m)
                    }),
                })
            })
            .collect();

        TagPickerInfo {
            query: self.form.tag_query.clone(),
            items,
            placeholder: None,
        }
    }

    /// Rows left for tag entries once chrome and picker frame are accounted for.
    fn tag_window_rows(rows: usize) -> usize {
        rows.saturating_sub(CHROME_ROWS)
            .min(TAG_PICKER_MAX_ROWS)
            .saturating_sub(2)
            .max(1)
    }

    /// Computes character index ranges to highlight for fuzzy match visualization.
    ///
    /// Consecutive matched indices are coalesced into `(start, end)` ranges
    /// with an exclusive end.
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        let Some((_score, indices)) = matcher.fuzzy_indices(text, self.form.effective_tag_query()) else {
            return vec![];
        };

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for idx in indices {
            match ranges.last_mut() {
                Some((_, end)) if *end == idx => *end = idx + 1,
                _ => ranges.push((idx, idx + 1)),
            }
        }
        ranges
    }

    fn compute_panel(&self) -> PanelView {
        match self.view.state() {
            ViewState::Loading => PanelView::Loading {
                message: "Loading a joke...".to_string(),
            },
            ViewState::Error(message) => PanelView::Error {
                message: message.clone(),
            },
            ViewState::Result(joke) => {
                let panel = self.view.joke_panel();
                let meta = match (joke.id, joke.created_at) {
                    (Some(id), Some(created)) => {
                        Some(format!("#{id} · added {}", created.format("%Y-%m-%d")))
                    }
                    (Some(id), None) => Some(format!("#{id}")),
                    (None, Some(created)) => Some(format!("added {}", created.format("%Y-%m-%d"))),
                    (None, None) => None,
                };
                PanelView::Joke(JokeView {
                    setup: panel.setup.clone(),
                    punchline: panel.punchline.clone(),
                    category_badge: panel.category_badge.clone(),
                    tags: panel.tags.clone(),
                    meta,
                })
            }
            ViewState::Empty => PanelView::Empty(EmptyState {
                message: "Ready for a laugh?".to_string(),
                subtitle: "Type a search and press Enter, or Ctrl+r for a random joke".to_string(),
            }),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.form.focus {
            FocusField::Search => {
                "Enter: search  Ctrl+r: random  Ctrl+l: clear  Tab: next field  Esc: close"
            }
            FocusField::Category => {
                "←/→: category  Enter: search  Ctrl+r: random  Ctrl+l: clear  Tab: next field  Esc: close"
            }
            FocusField::Tags => {
                "↑/↓: move  Space: toggle  Type to filter  Enter: search  Ctrl+r: random  Tab: next field"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Joins tag labels, replacing those that do not fit in `width` with `+N more`.
fn summarize_tags(labels: &[&str], width: usize) -> String {
    if labels.is_empty() {
        return "None".to_string();
    }

    let full = labels.join(", ");
    if text_width(&full) <= width {
        return full;
    }

    let mut shown = String::new();
    let mut count = 0;
    for label in labels {
        let candidate = if shown.is_empty() {
            (*label).to_string()
        } else {
            format!("{shown}, {label}")
        };
        let suffix = format!(" +{} more", labels.len() - count - 1);
        if text_width(&candidate) + text_width(&suffix) > width {
            break;
        }
        shown = candidate;
        count += 1;
    }

    let hidden = labels.len() - count;
    if shown.is_empty() {
        format!("+{hidden} more")
    } else {
        format!("{shown} +{hidden} more")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Joke;

    fn state() -> AppState {
        AppState::new(ApiClient::default(), FilterForm::default(), Theme::default())
    }

    #[test]
    fn generations_increase_and_only_latest_is_current() {
        let mut state = state();
        let first = state.next_generation();
        let second = state.next_generation();
        assert!(second > first);
        assert!(state.is_current(second));
        assert!(!state.is_current(first));
    }

    #[test]
    fn empty_panel_by_default() {
        let vm = state().compute_viewmodel(24, 80);
        assert!(matches!(vm.panel, PanelView::Empty(_)));
        assert_eq!(vm.filters.category, "Any");
        assert_eq!(vm.filters.tags, "None");
    }

    #[test]
    fn selected_tags_are_summarized_to_fit() {
        assert_eq!(summarize_tags(&["Pun", "Dad"], 40), "Pun, Dad");
        assert_eq!(summarize_tags(&["Pun", "Dad", "Science"], 16), "Pun, Dad +1 more");
        assert_eq!(summarize_tags(&["Programming", "Dad"], 5), "+2 more");
        assert_eq!(summarize_tags(&["日本", "Pun"], 8), "+2 more");
    }

    #[test]
    fn joke_panel_shows_badge_tags_and_meta() {
        let mut state = state();
        let mut joke: Joke = serde_json::from_str(
            r#"{"id":7,"setup":"s","punchline":"p","category":"classic","tags":["pun"],"created_at":"2024-03-01T10:00:00Z"}"#,
        )
        .unwrap();
        joke.updated_at = None;
        state.view.display_joke(joke);

        let PanelView::Joke(view) = state.compute_viewmodel(24, 80).panel else {
            panic!("expected joke panel");
        };
        assert_eq!(view.category_badge.as_deref(), Some("classic"));
        assert_eq!(view.tags, vec!["pun"]);
        assert_eq!(view.meta.as_deref(), Some("#7 · added 2024-03-01"));
    }

    #[test]
    fn tag_picker_only_when_focused() {
        let mut state = state();
        state.form.set_tags(vec!["pun".into(), "dad".into()]);
        assert!(state.compute_viewmodel(24, 80).tag_picker.is_none());

        state.form.focus = FocusField::Tags;
        let picker = state.compute_viewmodel(24, 80).tag_picker.unwrap();
        let labels: Vec<&str> = picker.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Pun", "Dad"]);
        assert!(picker.items[0].is_cursor);
    }

    #[test]
    fn uppercase_padded_query_still_highlights() {
        let mut state = state();
        state.form.set_tags(vec!["pun".into(), "dad".into()]);
        state.form.focus = FocusField::Tags;
        for c in "PU ".chars() {
            state.form.push_tag_query(c);
        }

        let picker = state.compute_viewmodel(24, 80).tag_picker.unwrap();
        assert_eq!(picker.items.len(), 1);
        assert_eq!(picker.items[0].label, "Pun");
        assert_eq!(picker.items[0].highlight_ranges, vec![(0, 2)]);
    }

    #[test]
    fn tag_picker_highlights_query_matches() {
        let mut state = state();
        state.form.set_tags(vec!["science".into()]);
        state.form.focus = FocusField::Tags;
        state.form.push_tag_query('s');
        state.form.push_tag_query('c');

        let picker = state.compute_viewmodel(24, 80).tag_picker.unwrap();
        assert_eq!(picker.items.len(), 1);
        assert_eq!(picker.items[0].highlight_ranges, vec![(0, 2)]);
    }

    #[test]
    fn tag_picker_window_follows_cursor() {
        let mut state = state();
        state.form.set_tags((0..30).map(|i| format!("tag{i}")).collect());
        state.form.focus = FocusField::Tags;
        for _ in 0..29 {
            state.form.move_tag_cursor_down();
        }

        let picker = state.compute_viewmodel(24, 80).tag_picker.unwrap();
        assert_eq!(picker.items.len(), TAG_PICKER_MAX_ROWS - 2);
        assert!(picker.items.last().unwrap().is_cursor);
        assert_eq!(picker.items.last().unwrap().label, "Tag29");
    }

    #[test]
    fn tag_picker_placeholder_without_tags() {
        let mut state = state();
        state.form.focus = FocusField::Tags;
        let picker = state.compute_viewmodel(24, 80).tag_picker.unwrap();
        assert_eq!(picker.placeholder.as_deref(), Some("No tags available"));
    }
}
