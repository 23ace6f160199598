//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to Zellij directly. It mutates state and
//! returns a `Vec<Action>`; the plugin shim executes them in order, turning
//! [`Action::Fetch`] into a `web_request` call whose completion comes back
//! later as an event.
//!
//! # Example
//!
//! ```rust
//! use jokebox::api::ApiClient;
//! use jokebox::app::Action;
//!
//! let request = ApiClient::default().tags_request().unwrap();
//! let actions = vec![Action::Fetch(request)];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::api::ApiRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly asks to leave (Esc).
    CloseFocus,

    /// Issues an HTTP GET through the host.
    ///
    /// The request's context is echoed back with the completion so it can be
    /// routed to the joke or tag handler.
    Fetch(ApiRequest),
}
