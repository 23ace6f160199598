//! Jokebox: a Zellij plugin for browsing and searching a joke collection.
//!
//! Jokebox talks to a joke REST API and provides:
//! - Free-text search combined with category and tag filters
//! - Random jokes with a single keystroke
//! - A tag selector populated from the server, narrowed by fuzzy matching
//! - Loading, error, result and empty panels, exactly one visible at a time

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Filter form and view state                       │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                       │
//! ┌───────────────────────┐           ┌───────────────────────┐
//! │ UI Layer (ui/)        │           │ API Layer (api/)      │
//! │ - Rendering           │           │ - Request URLs        │
//! │ - Theming             │           │ - Response decoding   │
//! │ - Components          │           │ - Request context     │
//! └───────────────────────┘           └───────────────────────┘
//!         │                                       │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Joke, Filter, errors (domain/)                   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to a rotating OTLP file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/jokebox.wasm" {
//!         base_url "http://localhost:8080/api/v1"
//!         categories "general,programming,classic,knock-knock"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load**: parse configuration, initialize tracing, build
//!    `AppState`, request `WebAccess`, subscribe to events
//! 2. **Permission Granted**: `Event::Startup` shows the empty panel and
//!    fetches the tag list
//! 3. **User Input**: Search, Random and Clear go through [`handle_event`];
//!    fetches come back as `WebRequestResult` and are routed by their context
//!
//! # Example
//!
//! ```rust
//! use jokebox::api::HttpResponse;
//! use jokebox::app::Panel;
//! use jokebox::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::Startup)?;
//!
//! let (_, actions) = handle_event(&mut state, &Event::Random)?;
//! let Action::Fetch(request) = &actions[0] else { unreachable!() };
//!
//! let response = HttpResponse::json(200, r#"{"setup":"Knock knock","punchline":"Who's there?"}"#);
//! handle_event(&mut state, &Event::JokeResponse {
//!     generation: request.context.generation,
//!     response,
//! })?;
//! assert_eq!(state.view.visible_panel(), Panel::Result);
//! # Ok::<(), jokebox::JokeboxError>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, FocusField};
pub use domain::{Joke, JokeboxError, Result};
pub use ui::Theme;

use api::ApiClient;
use app::form::{FilterForm, DEFAULT_CATEGORIES};
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API root; `/joke` and `/tags` are appended to it.
    ///
    /// Default: `http://localhost:8080/api/v1`
    pub base_url: String,

    /// Category choices offered by the category selector, in order.
    ///
    /// Default: `general`, `programming`, `classic`, `knock-knock`
    pub categories: Vec<String>,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: api::DEFAULT_BASE_URL.to_string(),
            categories: DEFAULT_CATEGORIES.iter().map(ToString::to_string).collect(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `base_url`: trimmed; blank falls back to the default
    /// - `categories`: comma-separated, blanks dropped; empty falls back to the default
    /// - `theme`, `theme_file`, `trace_level`: taken as-is when non-blank
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use jokebox::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("base_url".to_string(), "https://jokes.example.com/api/v1".to_string());
    /// map.insert("categories".to_string(), "classic, programming,".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.base_url, "https://jokes.example.com/api/v1");
    /// assert_eq!(config.categories, vec!["classic", "programming"]);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let non_blank = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        let categories = config
            .get("categories")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|v: &Vec<String>| !v.is_empty())
            .unwrap_or(defaults.categories);

        Self {
            base_url: non_blank("base_url").unwrap_or(defaults.base_url),
            categories,
            theme_name: non_blank("theme"),
            theme_file: non_blank("theme_file"),
            trace_level: non_blank("trace_level"),
        }
    }
}

/// Builds the application state from configuration.
///
/// Nothing here is fatal: an unloadable theme falls back to the default
/// theme and an invalid `base_url` falls back to the default API root, each
/// with a warning in the trace log.
///
/// The state starts on the empty panel; tags are fetched once the plugin
/// has web access (`Event::Startup`).
///
/// # Example
///
/// ```rust
/// use jokebox::{initialize, Config};
///
/// let config = Config {
///     base_url: "not a url".to_string(),
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.client.base_url(), "http://localhost:8080/api/v1");
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing jokebox plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            let path = infrastructure::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let client = ApiClient::new(&config.base_url).unwrap_or_else(|e| {
        tracing::warn!(base_url = %config.base_url, error = %e, "invalid base_url, using default");
        ApiClient::default()
    });

    tracing::debug!(
        base_url = %client.base_url(),
        categories = ?config.categories,
        theme = %theme.name,
        "configuration applied"
    );

    AppState::new(client, FilterForm::new(config.categories.clone()), theme)
}
