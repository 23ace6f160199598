//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the API and
//! domain layers. It implements the event-driven architecture that powers
//! the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → web_request
//!                           ↑                                            ↓
//!                           └──────────── WebRequestResult ──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`form`]: Search, category and tag inputs
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Form focus state
//! - [`state`]: Central application state container and view model computation
//! - [`view`]: The four mutually exclusive panels and the current joke
//!
//! # Example
//!
//! ```rust
//! use jokebox::app::{handle_event, AppState, Event};
//! use jokebox::app::form::FilterForm;
//! use jokebox::api::ApiClient;
//! use jokebox::ui::Theme;
//!
//! let mut state = AppState::new(ApiClient::default(), FilterForm::default(), Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::Startup)?;
//! assert!(should_render);
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), jokebox::JokeboxError>(())
//! ```

pub mod actions;
pub mod form;
pub mod handler;
pub mod modes;
pub mod state;
pub mod view;

pub use actions::Action;
pub use form::{FilterForm, TagOption};
pub use handler::{handle_event, Event};
pub use modes::FocusField;
pub use state::AppState;
pub use view::{Panel, ViewController, ViewState};
