//! Joke API client.
//!
//! Zellij performs HTTP on the plugin's behalf, so the client is split in
//! two halves around the host:
//!
//! ```text
//! Filter → ApiClient::joke_request → ApiRequest ─┐
//!                                                │  web_request (Zellij)
//! Joke / ApiError ← decode_joke ← HttpResponse ←─┘  WebRequestResult
//! ```
//!
//! The [`RequestContext`] travels with each request through the host and
//! identifies the completion when it comes back.
//!
//! # Modules
//!
//! - [`client`]: URL construction for the `/joke` and `/tags` endpoints
//! - [`context`]: Request tagging carried through Zellij's context map
//! - [`response`]: Decoding of raw responses into domain values
//! - [`error`]: Request failure kinds and their user-facing messages

pub mod client;
pub mod context;
pub mod error;
pub mod response;

pub use client::{ApiClient, ApiRequest, DEFAULT_BASE_URL};
pub use context::{RequestContext, RequestKind};
pub use error::ApiError;
pub use response::{decode_joke, decode_tags, HttpResponse};
