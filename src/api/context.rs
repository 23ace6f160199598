//! Request tagging through Zellij's web request context.
//!
//! `web_request` accepts a `BTreeMap<String, String>` that Zellij hands back
//! untouched in the matching `WebRequestResult`. Jokebox stores the request
//! kind and its generation there so completions can be routed and stale ones
//! discarded.

use std::collections::BTreeMap;

const KIND_KEY: &str = "jokebox_request";
const GENERATION_KEY: &str = "generation";

/// Which endpoint a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// `GET /joke`
    Joke,
    /// `GET /tags`
    Tags,
}

impl RequestKind {
    /// Value stored in the context map.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Joke => "joke",
            Self::Tags => "tags",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "joke" => Some(Self::Joke),
            "tags" => Some(Self::Tags),
            _ => None,
        }
    }
}

/// Identity of an outstanding request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    /// Endpoint the request targets.
    pub kind: RequestKind,
    /// Sequence number; only the newest joke request is applied.
    pub generation: u64,
}

impl RequestContext {
    /// Encodes the context into the map passed to `web_request`.
    #[must_use]
    pub fn to_map(self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (KIND_KEY.to_string(), self.kind.as_str().to_string()),
            (GENERATION_KEY.to_string(), self.generation.to_string()),
        ])
    }

    /// Decodes a context map from a `WebRequestResult`.
    ///
    /// Returns `None` for results that were not issued by Jokebox.
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Option<Self> {
        let kind = RequestKind::parse(map.get(KIND_KEY)?)?;
        let generation = map.get(GENERATION_KEY)?.parse().ok()?;
        Some(Self { kind, generation })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_survives_the_host_map() {
        let ctx = RequestContext { kind: RequestKind::Joke, generation: 7 };
        assert_eq!(RequestContext::from_map(&ctx.to_map()), Some(ctx));
    }

    #[test]
    fn foreign_context_is_ignored() {
        let mut map = BTreeMap::new();
        map.insert("something".to_string(), "else".to_string());
        assert_eq!(RequestContext::from_map(&map), None);

        map.insert(KIND_KEY.to_string(), "weather".to_string());
        map.insert(GENERATION_KEY.to_string(), "1".to_string());
        assert_eq!(RequestContext::from_map(&map), None);
    }

    #[test]
    fn malformed_generation_is_ignored() {
        let mut map = RequestContext { kind: RequestKind::Tags, generation: 0 }.to_map();
        map.insert(GENERATION_KEY.to_string(), "latest".to_string());
        assert_eq!(RequestContext::from_map(&map), None);
    }
}
