//! Domain layer for the Jokebox plugin.
//!
//! Core types shared by the API client, the application state machine and
//! the renderer. Nothing here depends on Zellij.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`joke`]: The `Joke` entity received from the API
//! - [`filter`]: Search constraints sent with a joke query
//!
//! # Examples
//!
//! ```
//! use jokebox::domain::Filter;
//!
//! let filter = Filter::new(" chicken ", "", Vec::<String>::new());
//! assert_eq!(filter.search.as_deref(), Some("chicken"));
//! assert!(filter.category.is_none());
//! ```

pub mod error;
pub mod filter;
pub mod joke;

pub use error::{JokeboxError, Result};
pub use filter::Filter;
pub use joke::{tag_label, Joke, TagList};
