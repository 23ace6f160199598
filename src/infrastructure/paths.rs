//! Path utilities for the Zellij sandbox environment.

use std::path::PathBuf;

/// File name of the OTLP trace log.
const TRACE_FILE_NAME: &str = "jokebox-otlp.json";

/// Returns the data directory for Jokebox files.
///
/// The directory is `/host/.local/share/zellij/jokebox` in the Zellij sandbox.
/// `/host` points to the cwd of the last focused terminal, or the folder where
/// Zellij was started, which is usually the home directory.
///
/// # Examples
///
/// ```
/// use jokebox::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/jokebox"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("jokebox")
}

/// Path of the rotating OTLP trace file inside [`get_data_dir`].
#[must_use]
pub fn trace_file_path() -> PathBuf {
    get_data_dir().join(TRACE_FILE_NAME)
}

/// Expands tilde paths to use the `/host` prefix for Zellij sandbox.
///
/// # Examples
///
/// ```
/// use jokebox::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_file_lives_in_data_dir() {
        assert_eq!(
            trace_file_path(),
            PathBuf::from("/host/.local/share/zellij/jokebox/jokebox-otlp.json")
        );
    }

    #[test]
    fn tilde_inside_path_is_untouched() {
        assert_eq!(expand_tilde("/tmp/~backup"), "/tmp/~backup");
    }
}
