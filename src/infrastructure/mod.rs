//! Infrastructure layer for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`; paths from
//! the plugin configuration must be mapped through it before use.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, trace_file_path};
