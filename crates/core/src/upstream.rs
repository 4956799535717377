use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Header carrying the canonical card page URL
pub const CARD_URL_HEADER: &str = "x-scryfall-card";

/// Header carrying the card image URL
pub const CARD_IMAGE_HEADER: &str = "x-scryfall-card-image";

/// Normalized upstream HTTP response
///
/// Built once per request and never modified afterwards. Header names are
/// stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    status_code: u16,
    headers: BTreeMap<String, String>,
    body: String,
}

impl UpstreamResponse {
    pub fn new<I, K, V>(status_code: u16, headers: I, body: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            status_code,
            headers: headers
                .into_iter()
                .map(|(name, value)| (name.as_ref().to_ascii_lowercase(), value.into()))
                .collect(),
            body: body.into(),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// True only for HTTP 200
    pub fn is_ok(&self) -> bool {
        self.status_code == 200
    }

    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Search endpoint success payload
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SearchList {
    pub data: Option<Vec<SearchCard>>,
    #[serde(default)]
    pub total_cards: u64,
}

/// Single card entry in a search result
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SearchCard {
    pub name: String,
    pub set_name: String,
    pub scryfall_uri: String,
}

/// Upstream error payload
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct UpstreamError {
    pub details: Option<String>,
}
