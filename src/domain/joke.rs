//! Joke domain model.
//!
//! A [`Joke`] is decoded from the API response body and never mutated
//! afterwards. Only `setup` and `punchline` are required; everything else is
//! metadata the server may or may not send.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ordered list of tag names offered by the server.
pub type TagList = Vec<String>;

/// A joke as returned by `GET /joke`.
///
/// # Fields
///
/// - `id`: Server identifier, when provided
/// - `setup`: First line of the joke
/// - `punchline`: Second line of the joke
/// - `category`: Optional category badge
/// - `tags`: Optional tag labels, in server order
/// - `created_at` / `updated_at`: Server timestamps, when provided
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub setup: String,
    pub punchline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Joke {
    /// Creates a joke with only the two required lines.
    ///
    /// # Examples
    ///
    /// ```
    /// use jokebox::domain::Joke;
    ///
    /// let joke = Joke::new("Why did the chicken cross the road?", "To get to the other side.");
    /// assert!(joke.category.is_none());
    /// assert!(joke.tags().is_empty());
    /// ```
    #[must_use]
    pub fn new(setup: impl Into<String>, punchline: impl Into<String>) -> Self {
        Self {
            id: None,
            setup: setup.into(),
            punchline: punchline.into(),
            category: None,
            tags: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Returns the category if it is present and non-blank.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Returns the joke's tags, or an empty slice when the server sent none.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
}

/// Formats a tag value for display by upper-casing its first character.
///
/// The value sent to the server is never changed; only the label is.
///
/// # Examples
///
/// ```
/// use jokebox::domain::tag_label;
///
/// assert_eq!(tag_label("pun"), "Pun");
/// assert_eq!(tag_label("dad"), "Dad");
/// assert_eq!(tag_label(""), "");
/// ```
#[must_use]
pub fn tag_label(tag: &str) -> String {
    let mut chars = tag.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_minimal_joke() {
        let joke: Joke = serde_json::from_str(
            r#"{"setup":"Why did the chicken cross the road?","punchline":"To get to the other side.","category":"classic"}"#,
        )
        .unwrap();

        assert_eq!(joke.setup, "Why did the chicken cross the road?");
        assert_eq!(joke.category(), Some("classic"));
        assert!(joke.tags().is_empty());
        assert!(joke.id.is_none());
    }

    #[test]
    fn decodes_full_server_joke() {
        let joke: Joke = serde_json::from_str(
            r#"{
                "id": 42,
                "setup": "I'm reading a book about anti-gravity.",
                "punchline": "It's impossible to put down.",
                "category": null,
                "tags": ["pun", "science"],
                "created_at": "2024-03-01T10:15:30.123456Z",
                "updated_at": "2024-03-02T08:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(joke.id, Some(42));
        assert_eq!(joke.category(), None);
        assert_eq!(joke.tags(), ["pun".to_string(), "science".to_string()]);
        assert!(joke.created_at.is_some());
    }

    #[test]
    fn null_tags_are_empty() {
        let joke: Joke =
            serde_json::from_str(r#"{"setup":"a","punchline":"b","tags":null}"#).unwrap();
        assert!(joke.tags().is_empty());
    }

    #[test]
    fn blank_category_is_hidden() {
        let mut joke = Joke::new("a", "b");
        joke.category = Some("   ".to_string());
        assert_eq!(joke.category(), None);
    }

    #[test]
    fn tag_label_handles_multibyte_first_char() {
        assert_eq!(tag_label("élan"), "Élan");
        assert_eq!(tag_label("knock-knock"), "Knock-knock");
    }
}
