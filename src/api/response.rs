//! Decoding of raw HTTP responses.
//!
//! Zellij reports every completion as a status code, a header map and a body.
//! When the request never reached a server the host still reports a result:
//! status 400 with no headers and the transport error as the body. That
//! shape, and any status outside the HTTP range, is treated as a network
//! failure rather than a server answer.

use super::error::ApiError;
use crate::domain::{Joke, TagList};
use serde::Deserialize;
use std::collections::BTreeMap;

/// A completed request as reported by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Builds a JSON response, as a server would send it.
    #[must_use]
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            headers: BTreeMap::from([(
                "content-type".to_string(),
                "application/json".to_string(),
            )]),
            body: body.as_bytes().to_vec(),
        }
    }

    /// Builds the result Zellij reports when the request could not be sent.
    #[must_use]
    pub fn transport_failure(reason: &str) -> Self {
        Self {
            status: 400,
            headers: BTreeMap::new(),
            body: reason.as_bytes().to_vec(),
        }
    }

    /// Returns `true` for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    fn is_transport_failure(&self) -> bool {
        !(100..=599).contains(&self.status) || (self.status == 400 && self.headers.is_empty())
    }

    fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).trim().to_string()
    }
}

#[derive(Debug, Deserialize)]
struct TagsEnvelope {
    #[serde(default)]
    tags: Option<TagList>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: String,
    #[serde(default)]
    message: Option<String>,
}

/// Classifies a non-success response.
fn failure(response: &HttpResponse) -> ApiError {
    if response.is_transport_failure() {
        let reason = response.body_text();
        return ApiError::Network(if reason.is_empty() {
            "no response from server".to_string()
        } else {
            reason
        });
    }

    let detail = serde_json::from_slice::<ErrorEnvelope>(&response.body)
        .ok()
        .map(|envelope| envelope.message.unwrap_or(envelope.error));

    ApiError::Http {
        status: response.status,
        detail,
    }
}

/// Interprets the completion of a `GET /joke` request.
///
/// # Errors
///
/// - [`ApiError::NotFound`] for 404
/// - [`ApiError::Network`] when the request never got an answer
/// - [`ApiError::Http`] for any other non-2xx status
/// - [`ApiError::Decode`] for a 2xx body that is not a joke
///
/// # Examples
///
/// ```
/// use jokebox::api::{decode_joke, ApiError, HttpResponse};
///
/// let response = HttpResponse::json(404, r#"{"error":"not_found"}"#);
/// assert_eq!(decode_joke(&response), Err(ApiError::NotFound));
/// ```
pub fn decode_joke(response: &HttpResponse) -> Result<Joke, ApiError> {
    if response.is_success() {
        return serde_json::from_slice(&response.body).map_err(|e| ApiError::Decode(e.to_string()));
    }

    if response.status == 404 && !response.is_transport_failure() {
        return Err(ApiError::NotFound);
    }

    Err(failure(response))
}

/// Interprets the completion of a `GET /tags` request.
///
/// A body without a `tags` field (or with `"tags": null`) yields an empty list.
///
/// # Errors
///
/// Returns [`ApiError::Network`], [`ApiError::Http`] or [`ApiError::Decode`]
/// under the same rules as [`decode_joke`]; a 404 is an ordinary `Http` error.
pub fn decode_tags(response: &HttpResponse) -> Result<TagList, ApiError> {
    if !response.is_success() {
        return Err(failure(response));
    }

    serde_json::from_slice::<TagsEnvelope>(&response.body)
        .map(|envelope| envelope.tags.unwrap_or_default())
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_decodes_joke() {
        let response = HttpResponse::json(
            200,
            r#"{"setup":"Why did the chicken cross the road?","punchline":"To get to the other side.","category":"classic"}"#,
        );
        let joke = decode_joke(&response).unwrap();
        assert_eq!(joke.punchline, "To get to the other side.");
        assert_eq!(joke.category(), Some("classic"));
    }

    #[test]
    fn not_found_is_friendly() {
        let response = HttpResponse::json(
            404,
            r#"{"error":"not_found","message":"No jokes found matching your criteria"}"#,
        );
        assert_eq!(decode_joke(&response), Err(ApiError::NotFound));
    }

    #[test]
    fn other_statuses_keep_server_detail() {
        let response = HttpResponse::json(
            500,
            r#"{"error":"internal_error","message":"An internal error occurred"}"#,
        );
        assert_eq!(
            decode_joke(&response),
            Err(ApiError::Http {
                status: 500,
                detail: Some("An internal error occurred".to_string()),
            })
        );

        let response = HttpResponse::json(429, "Too Many Requests");
        assert_eq!(
            decode_joke(&response),
            Err(ApiError::Http { status: 429, detail: None })
        );
    }

    #[test]
    fn bad_request_from_server_is_http_error() {
        let response = HttpResponse::json(400, r#"{"error":"invalid_input"}"#);
        assert_eq!(
            decode_joke(&response),
            Err(ApiError::Http {
                status: 400,
                detail: Some("invalid_input".to_string()),
            })
        );
    }

    #[test]
    fn host_transport_failure_is_network_error() {
        let response = HttpResponse::transport_failure("Connection refused (os error 111)");
        assert_eq!(
            decode_joke(&response),
            Err(ApiError::Network("Connection refused (os error 111)".to_string()))
        );

        let response = HttpResponse { status: 0, ..HttpResponse::default() };
        assert!(matches!(decode_joke(&response), Err(ApiError::Network(_))));
    }

    #[test]
    fn garbage_success_body_is_decode_error() {
        let response = HttpResponse::json(200, "<html>oops</html>");
        assert!(matches!(decode_joke(&response), Err(ApiError::Decode(_))));
    }

    #[test]
    fn tags_decode_and_default_to_empty() {
        let response = HttpResponse::json(200, r#"{"tags":["pun","dad"]}"#);
        assert_eq!(decode_tags(&response).unwrap(), vec!["pun", "dad"]);

        assert!(decode_tags(&HttpResponse::json(200, "{}")).unwrap().is_empty());
        assert!(decode_tags(&HttpResponse::json(200, r#"{"tags":null}"#)).unwrap().is_empty());
    }

    #[test]
    fn tags_failures_are_errors() {
        let response = HttpResponse::json(500, r#"{"error":"internal_error"}"#);
        assert!(matches!(decode_tags(&response), Err(ApiError::Http { status: 500, .. })));
        assert!(matches!(
            decode_tags(&HttpResponse::transport_failure("")),
            Err(ApiError::Network(_))
        ));
    }
}
