//! Query shaping and URL construction
//!
//! Pure functions for turning variant-specific query parameters into request URLs.

/// Default upstream API base
pub const DEFAULT_BASE_URL: &str = "https://api.scryfall.com";

/// Ordered query parameters for a single upstream request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryDescriptor {
    params: Vec<(String, String)>,
}

impl QueryDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter, keeping insertion order
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Look up the first value for `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Serialize as a percent-encoded `name=value&...` string
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Upstream endpoints used by the response variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Fuzzy single-card lookup
    pub named: String,
    /// Full-text multi-result search
    pub search: String,
}

impl Endpoints {
    /// Derive both endpoints from an API base URL
    ///
    /// Trailing slashes on `base` are ignored, so "https://api.scryfall.com/"
    /// and "https://api.scryfall.com" produce the same endpoints.
    pub fn from_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            named: format!("{base}/cards/named"),
            search: format!("{base}/cards/search"),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_base(DEFAULT_BASE_URL)
    }
}

/// Join an endpoint and its serialized query
pub fn build_url(endpoint: &str, query: &QueryDescriptor) -> String {
    if query.is_empty() {
        endpoint.to_string()
    } else {
        format!("{endpoint}?{}", query.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_preserves_order() {
        let query = QueryDescriptor::new()
            .param("fuzzy", "opt")
            .param("format", "text");
        assert_eq!(query.to_query_string(), "fuzzy=opt&format=text");
    }

    #[test]
    fn test_query_string_encodes_values() {
        let query = QueryDescriptor::new().param("q", "++Jace, the Mind Sculptor");
        assert_eq!(
            query.to_query_string(),
            "q=%2B%2BJace%2C%20the%20Mind%20Sculptor"
        );
    }

    #[test]
    fn test_get_returns_first_match() {
        let query = QueryDescriptor::new().param("a", "1").param("a", "2");
        assert_eq!(query.get("a"), Some("1"));
        assert_eq!(query.get("b"), None);
    }

    #[test]
    fn test_endpoints_from_base() {
        let endpoints = Endpoints::from_base("http://127.0.0.1:8080/");
        assert_eq!(endpoints.named, "http://127.0.0.1:8080/cards/named");
        assert_eq!(endpoints.search, "http://127.0.0.1:8080/cards/search");
    }

    #[test]
    fn test_default_endpoints() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.named, "https://api.scryfall.com/cards/named");
    }

    #[test]
    fn test_build_url_without_query() {
        assert_eq!(
            build_url("https://api.scryfall.com/cards/named", &QueryDescriptor::new()),
            "https://api.scryfall.com/cards/named"
        );
    }

    #[test]
    fn test_build_url_with_query() {
        let query = QueryDescriptor::new().param("fuzzy", "bolt");
        assert_eq!(
            build_url("https://api.scryfall.com/cards/named", &query),
            "https://api.scryfall.com/cards/named?fuzzy=bolt"
        );
    }
}
