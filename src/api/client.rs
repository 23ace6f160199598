//! URL construction for the joke API.
//!
//! [`ApiClient`] owns the validated base URL and turns a [`Filter`] into a
//! fully encoded request. Query encoding is `application/x-www-form-urlencoded`,
//! the same rules a browser's `URLSearchParams` applies.

use super::context::{RequestContext, RequestKind};
use crate::domain::{Filter, JokeboxError, Result};
use std::collections::BTreeMap;
use url::Url;

/// API root used when the plugin configuration does not set `base_url`.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";

/// A GET request ready to be handed to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// Absolute, encoded request URL.
    pub url: String,
    /// Identity echoed back with the completion.
    pub context: RequestContext,
}

impl ApiRequest {
    /// Headers sent with every request.
    #[must_use]
    pub fn headers() -> BTreeMap<String, String> {
        BTreeMap::from([("Accept".to_string(), "application/json".to_string())])
    }
}

/// Builds requests against a joke API root such as `http://host/api/v1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiClient {
    /// Creates a client for the given API root.
    ///
    /// # Errors
    ///
    /// Returns [`JokeboxError::Config`] if `base_url` is not an absolute
    /// `http`/`https` URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use jokebox::api::ApiClient;
    ///
    /// let client = ApiClient::new("https://jokes.example.com/api/v1/").unwrap();
    /// assert_eq!(client.base_url(), "https://jokes.example.com/api/v1");
    /// assert!(ApiClient::new("/api/v1").is_err());
    /// ```
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed)
            .map_err(|e| JokeboxError::Config(format!("invalid base_url {trimmed:?}: {e}")))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(JokeboxError::Config(format!(
                "base_url must use http or https, got {:?}",
                parsed.scheme()
            )));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// The API root without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds `GET {base}/joke` with the filter's non-empty fields as query.
    ///
    /// An empty filter yields a URL with no query string at all.
    ///
    /// # Errors
    ///
    /// Returns [`JokeboxError::Config`] if the endpoint URL cannot be parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use jokebox::api::ApiClient;
    /// use jokebox::domain::Filter;
    ///
    /// let client = ApiClient::default();
    /// let request = client.joke_request(&Filter::new("chicken", "", Vec::<String>::new()), 1).unwrap();
    /// assert_eq!(request.url, "http://localhost:8080/api/v1/joke?search=chicken");
    /// ```
    pub fn joke_request(&self, filter: &Filter, generation: u64) -> Result<ApiRequest> {
        let mut url = self.endpoint("joke")?;

        let pairs = filter.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        tracing::debug!(url = %url, generation = generation, "built joke request");

        Ok(ApiRequest {
            url: url.into(),
            context: RequestContext {
                kind: RequestKind::Joke,
                generation,
            },
        })
    }

    /// Builds `GET {base}/tags`.
    ///
    /// # Errors
    ///
    /// Returns [`JokeboxError::Config`] if the endpoint URL cannot be parsed.
    pub fn tags_request(&self) -> Result<ApiRequest> {
        let url = self.endpoint("tags")?;
        Ok(ApiRequest {
            url: url.into(),
            context: RequestContext {
                kind: RequestKind::Tags,
                generation: 0,
            },
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let raw = format!("{}/{path}", self.base_url);
        Url::parse(&raw).map_err(|e| JokeboxError::Config(format!("invalid endpoint {raw:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_of(request: &ApiRequest) -> Option<String> {
        Url::parse(&request.url).unwrap().query().map(str::to_string)
    }

    #[test]
    fn search_only_query() {
        let request = ApiClient::default()
            .joke_request(&Filter::new("chicken", "", Vec::<String>::new()), 1)
            .unwrap();
        assert_eq!(query_of(&request).as_deref(), Some("search=chicken"));
        assert_eq!(request.context.kind, RequestKind::Joke);
        assert_eq!(request.context.generation, 1);
    }

    #[test]
    fn random_request_has_no_query() {
        let request = ApiClient::default().joke_request(&Filter::random(), 3).unwrap();
        assert_eq!(request.url, "http://localhost:8080/api/v1/joke");
        assert!(!request.url.contains('?'));
    }

    #[test]
    fn every_field_is_form_encoded() {
        let filter = Filter::new("cross the road", "knock-knock", ["pun", "dad"]);
        let request = ApiClient::default().joke_request(&filter, 2).unwrap();
        assert_eq!(
            query_of(&request).as_deref(),
            Some("search=cross+the+road&category=knock-knock&tags=pun%2Cdad")
        );
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let filter = Filter::new("a&b=c", "", Vec::<String>::new());
        let request = ApiClient::default().joke_request(&filter, 1).unwrap();
        let url = Url::parse(&request.url).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("search".to_string(), "a&b=c".to_string())]);
    }

    #[test]
    fn tags_endpoint() {
        let client = ApiClient::new("https://jokes.example.com/api/v1/").unwrap();
        let request = client.tags_request().unwrap();
        assert_eq!(request.url, "https://jokes.example.com/api/v1/tags");
        assert_eq!(request.context.kind, RequestKind::Tags);
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(matches!(ApiClient::new("api/v1"), Err(JokeboxError::Config(_))));
        assert!(matches!(ApiClient::new("ftp://example.com"), Err(JokeboxError::Config(_))));
    }
}
