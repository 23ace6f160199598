//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user intents,
//! form input and request completions, translating them into state changes
//! and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState`, `ViewController` and `FilterForm`
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Intents**: `Search`, `Random`, `Clear`, `Startup`, `CloseFocus`
//! - **Permissions**: `Startup` (granted), `PermissionDenied`
//! - **Input**: `Char`, `Backspace`, focus and selector movement, `ToggleTag`
//! - **Completions**: `JokeResponse`, `TagsResponse`
//!
//! # Example
//!
//! ```rust
//! use jokebox::app::{handle_event, Action, AppState, Event};
//! use jokebox::app::form::FilterForm;
//! use jokebox::api::ApiClient;
//! use jokebox::ui::Theme;
//!
//! let mut state = AppState::new(ApiClient::default(), FilterForm::default(), Theme::default());
//! handle_event(&mut state, &Event::Startup)?;
//! let (_, actions) = handle_event(&mut state, &Event::Random)?;
//! assert!(matches!(&actions[..], [Action::Fetch(_)]));
//! # Ok::<(), jokebox::JokeboxError>(())
//! ```

use super::modes::FocusField;
use crate::api::{decode_joke, decode_tags, ApiError, HttpResponse};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::Filter;

/// Events triggered by user input or request completions.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Submits the form: fetch a joke matching the current inputs.
    Search,

    /// Fetches a joke with no filter at all.
    Random,

    /// Resets every input and shows the empty panel.
    Clear,

    /// Plugin is ready to make requests: load tags, show the empty panel.
    Startup,

    /// The host refused `WebAccess`.
    PermissionDenied,

    /// Hides the plugin pane.
    CloseFocus,

    /// Character typed into the focused field.
    Char(char),

    /// Deletes the last character of the focused field.
    Backspace,

    /// Moves focus to the next field.
    FocusNext,

    /// Moves focus to the previous field.
    FocusPrevious,

    /// Advances the category selector.
    CategoryNext,

    /// Moves the category selector backwards.
    CategoryPrevious,

    /// Moves the tag cursor down.
    TagCursorDown,

    /// Moves the tag cursor up.
    TagCursorUp,

    /// Toggles the tag under the cursor.
    ToggleTag,

    /// Completion of a joke request.
    JokeResponse {
        /// Generation stamped on the request when it was issued.
        generation: u64,
        response: HttpResponse,
    },

    /// Completion of the tag list request.
    TagsResponse { response: HttpResponse },
}

/// Processes an event and returns the render flag and actions to execute.
///
/// This is the central state transition function. It pattern-matches the
/// event, mutates state accordingly, and returns whether the UI needs a
/// redraw together with the actions to perform.
///
/// # Errors
///
/// Returns an error if a request URL cannot be built. Request failures are
/// not errors here: joke failures become the error panel and tag failures
/// are logged.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type for debugging.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Search => {
            let filter = state.form.to_filter();
            tracing::debug!(
                search = ?filter.search,
                category = ?filter.category,
                tags = ?filter.tags,
                "search submitted"
            );
            request_joke(state, &filter)
        }
        Event::Random => {
            tracing::debug!("random joke requested");
            request_joke(state, &Filter::random())
        }
        Event::Clear => {
            state.form.reset();
            state.view.show_empty();
            let invalidated = state.next_generation();
            tracing::debug!(generation = invalidated, "form cleared");
            Ok((true, vec![]))
        }
        Event::Startup => {
            state.web_access = true;
            state.view.show_empty();
            let request = state.client.tags_request()?;
            tracing::debug!(url = %request.url, "loading tags");
            Ok((true, vec![Action::Fetch(request)]))
        }
        Event::PermissionDenied => {
            state.web_access = false;
            state.view.show_error(ApiError::NoWebAccess.user_message());
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Char(c) => {
            match state.form.focus {
                FocusField::Search => {
                    state.form.search.push(*c);
                    tracing::trace!(search = %state.form.search, char = %c, "search text updated");
                }
                FocusField::Tags => {
                    state.form.push_tag_query(*c);
                    tracing::trace!(query = %state.form.tag_query, "tag query updated");
                }
                FocusField::Category => return Ok((false, vec![])),
            }
            Ok((true, vec![]))
        }
        Event::Backspace => {
            match state.form.focus {
                FocusField::Search => {
                    state.form.search.pop();
                }
                FocusField::Tags => state.form.pop_tag_query(),
                FocusField::Category => return Ok((false, vec![])),
            }
            Ok((true, vec![]))
        }
        Event::FocusNext => {
            state.form.focus = state.form.focus.next();
            Ok((true, vec![]))
        }
        Event::FocusPrevious => {
            state.form.focus = state.form.focus.previous();
            Ok((true, vec![]))
        }
        Event::CategoryNext => {
            state.form.next_category();
            Ok((true, vec![]))
        }
        Event::CategoryPrevious => {
            state.form.previous_category();
            Ok((true, vec![]))
        }
        Event::TagCursorDown => {
            state.form.move_tag_cursor_down();
            Ok((true, vec![]))
        }
        Event::TagCursorUp => {
            state.form.move_tag_cursor_up();
            Ok((true, vec![]))
        }
        Event::ToggleTag => {
            let Some(option) = state.form.toggle_tag_at_cursor() else {
                return Ok((false, vec![]));
            };
            tracing::debug!(tag = %option.value, selected = option.selected, "tag toggled");
            Ok((true, vec![]))
        }
        Event::JokeResponse {
            generation,
            response,
        } => {
            if !state.is_current(*generation) {
                tracing::debug!(
                    generation = generation,
                    latest = state.latest_generation,
                    status = response.status,
                    "dropping stale joke response"
                );
                return Ok((false, vec![]));
            }

            match decode_joke(response) {
                Ok(joke) => state.view.display_joke(joke),
                Err(error) => {
                    let detail = match &error {
                        ApiError::Http { detail, .. } => detail.as_deref(),
                        _ => None,
                    };
                    tracing::warn!(
                        error = %error,
                        status = ?error.status(),
                        detail = ?detail,
                        "joke request failed"
                    );
                    state.view.show_error(error.user_message());
                }
            }
            Ok((true, vec![]))
        }
        Event::TagsResponse { response } => match decode_tags(response) {
            Ok(tags) => {
                tracing::debug!(tag_count = tags.len(), "tags loaded");
                state.form.set_tags(tags);
                Ok((true, vec![]))
            }
            Err(error) => {
                tracing::warn!(error = %error, status = ?error.status(), "failed to load tags");
                Ok((false, vec![]))
            }
        },
    }
}

/// Shows the loading panel and emits a joke request under a fresh generation.
///
/// Without web access the host would drop the request and never answer, so
/// the error panel is shown instead and nothing is sent.
fn request_joke(state: &mut AppState, filter: &Filter) -> Result<(bool, Vec<Action>)> {
    if !state.web_access {
        tracing::warn!("joke requested without web access");
        state.view.show_error(ApiError::NoWebAccess.user_message());
        return Ok((true, vec![]));
    }

    let generation = state.next_generation();
    let request = state.client.joke_request(filter, generation)?;
    state.view.show_loading();
    Ok((true, vec![Action::Fetch(request)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::app::form::FilterForm;
    use crate::app::view::Panel;
    use crate::ui::Theme;

    fn state() -> AppState {
        let mut state = AppState::new(ApiClient::default(), FilterForm::default(), Theme::default());
        state.web_access = true;
        state
    }

    fn fetched_url(actions: &[Action]) -> &str {
        match actions {
            [Action::Fetch(request)] => &request.url,
            other => panic!("expected one fetch, got {other:?}"),
        }
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut state = state();
        handle_event(&mut state, &Event::Char('h')).unwrap();
        handle_event(&mut state, &Event::Char('i')).unwrap();
        assert_eq!(state.form.search, "hi");

        handle_event(&mut state, &Event::FocusNext).unwrap();
        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert_eq!(state.form.search, "hi");

        handle_event(&mut state, &Event::FocusNext).unwrap();
        handle_event(&mut state, &Event::Char('p')).unwrap();
        assert_eq!(state.form.tag_query, "p");
        handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(state.form.tag_query.is_empty());
    }

    #[test]
    fn search_sends_selected_category() {
        let mut state = state();
        handle_event(&mut state, &Event::CategoryNext).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Search).unwrap();
        assert!(fetched_url(&actions).ends_with("/joke?category=general"));
        assert_eq!(state.view.visible_panel(), Panel::Loading);
    }

    #[test]
    fn http_error_status_is_shown() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::Random).unwrap();
        let Action::Fetch(request) = &actions[0] else {
            panic!("expected fetch");
        };

        handle_event(
            &mut state,
            &Event::JokeResponse {
                generation: request.context.generation,
                response: HttpResponse::json(500, r#"{"error":"internal_error","message":"db down"}"#),
            },
        )
        .unwrap();

        assert_eq!(state.view.error_message(), "HTTP error! status: 500");
    }

    #[test]
    fn toggle_without_tags_does_not_render() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::ToggleTag).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn close_focus_emits_action() {
        let (render, actions) = handle_event(&mut state(), &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn joke_request_before_permission_shows_error() {
        let mut state = AppState::new(ApiClient::default(), FilterForm::default(), Theme::default());

        for event in [Event::Search, Event::Random] {
            let (render, actions) = handle_event(&mut state, &event).unwrap();
            assert!(render);
            assert!(actions.is_empty());
            assert_eq!(state.view.visible_panel(), Panel::Error);
            assert_eq!(state.view.error_message(), ApiError::NoWebAccess.to_string());
        }
    }

    #[test]
    fn denied_permission_blocks_requests_until_granted() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::PermissionDenied).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert!(!state.web_access);
        assert_eq!(state.view.visible_panel(), Panel::Error);

        let (_, actions) = handle_event(&mut state, &Event::Random).unwrap();
        assert!(actions.is_empty());
        assert_ne!(state.view.visible_panel(), Panel::Loading);

        handle_event(&mut state, &Event::Startup).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Random).unwrap();
        assert_eq!(actions.len(), 1);
        assert_eq!(state.view.visible_panel(), Panel::Loading);
    }
}
