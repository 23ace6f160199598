//! Zellij plugin wrapper and entry point.
//!
//! This is the thin integration layer between the Jokebox library and the
//! Zellij plugin system. It translates Zellij events into library events,
//! runs them through [`handle_event`], and executes the returned actions.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `WebRequestResult` and `PermissionRequestResult`
//! 3. **Permission Result**: `Event::Startup` loads the tag list once granted;
//!    `Event::PermissionDenied` shows why no joke can be fetched
//! 4. **Update**: Handle events, delegate to library layer
//! 5. **Render**: Call library render function
//!
//! # Keybindings
//!
//! Global:
//! - `Enter`: Search with the current filters
//! - `Ctrl+r`: Random joke
//! - `Ctrl+l`: Clear the form
//! - `Tab` / `Shift+Tab`: Next / previous field
//! - `Esc`: Close plugin
//!
//! Category field:
//! - `Left` / `Right`: Cycle categories
//!
//! Tags field:
//! - `Up` / `Down`: Move the cursor
//! - `Space`: Toggle the tag under the cursor
//! - Typing narrows the list
//!
//! # Request Routing
//!
//! Every `web_request` carries a [`RequestContext`] in its context map. The
//! matching `WebRequestResult` is routed by that context to
//! `Event::JokeResponse` or `Event::TagsResponse`; results with an unknown
//! context are ignored.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use jokebox::api::{ApiRequest, HttpResponse, RequestContext, RequestKind};
use jokebox::{handle_event, Action, Config, Event, FocusField};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: jokebox::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: jokebox::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// Requests `WebAccess` for the joke API.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        jokebox::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(base_url = %config.base_url, "parsed configuration");
        self.app = jokebox::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, headers, body, context) => {
                match Self::map_web_request_result(status, headers, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                match permissions {
                    PermissionStatus::Granted => {
                        tracing::debug!("web access granted - starting up");
                        Event::Startup
                    }
                    PermissionStatus::Denied => {
                        tracing::warn!("web access denied - jokes cannot be fetched");
                        Event::PermissionDenied
                    }
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        jokebox::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events, depending on the focused field.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('r') => Some(Event::Random),
                BareKey::Char('l') => Some(Event::Clear),
                _ => None,
            };
        }
        if key.bare_key == BareKey::Tab && key.has_modifiers(&[KeyModifier::Shift]) {
            return Some(Event::FocusPrevious);
        }

        let focus = self.app.form.focus;
        Some(match key.bare_key {
            BareKey::Esc => Event::CloseFocus,
            BareKey::Enter => Event::Search,
            BareKey::Tab => Event::FocusNext,
            BareKey::Backspace => Event::Backspace,
            BareKey::Right if focus == FocusField::Category => Event::CategoryNext,
            BareKey::Left if focus == FocusField::Category => Event::CategoryPrevious,
            BareKey::Down if focus == FocusField::Tags => Event::TagCursorDown,
            BareKey::Up if focus == FocusField::Tags => Event::TagCursorUp,
            BareKey::Char(' ') if focus == FocusField::Tags => Event::ToggleTag,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Routes a completed request by the context it was issued with.
    fn map_web_request_result(
        status: u16,
        headers: BTreeMap<String, String>,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let Some(request) = RequestContext::from_map(context) else {
            tracing::debug!(status = status, "ignoring web request result without jokebox context");
            return None;
        };

        tracing::debug!(
            kind = request.kind.as_str(),
            generation = request.generation,
            status = status,
            body_len = body.len(),
            "web request completed"
        );

        let response = HttpResponse {
            status,
            headers,
            body,
        };

        Some(match request.kind {
            RequestKind::Joke => Event::JokeResponse {
                generation: request.generation,
                response,
            },
            RequestKind::Tags => Event::TagsResponse { response },
        })
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::Fetch(request) => {
                tracing::debug!(url = %request.url, "issuing web request");
                web_request(
                    &request.url,
                    HttpVerb::Get,
                    ApiRequest::headers(),
                    vec![],
                    request.context.to_map(),
                );
            }
        }
    }
}
