//! Authorization header set attached to every dashboard request.

use reqwest::header::HeaderName;

pub use reqwest::header::{ACCEPT, ACCESS_CONTROL_ALLOW_HEADERS, AUTHORIZATION, CONTENT_TYPE};

const JSON: &str = "application/json";

/// Immutable, ordered set of request headers.
#[derive(Clone, PartialEq, Eq)]
pub struct HeaderSet {
    entries: Vec<(HeaderName, String)>,
}

impl HeaderSet {
    /// Build the dashboard header set around an authorization value.
    ///
    /// The value is used verbatim: no prefix is added and empty values are kept.
    /// `Access-Control-Allow-Headers` is a CORS response header and is only
    /// added when `send_allow_headers` is set.
    pub fn authorized(authorization: impl Into<String>, send_allow_headers: bool) -> Self {
        let mut entries = vec![
            (AUTHORIZATION, authorization.into()),
            (CONTENT_TYPE, JSON.to_string()),
            (ACCEPT, JSON.to_string()),
        ];
        if send_allow_headers {
            entries.push((ACCESS_CONTROL_ALLOW_HEADERS, "*".to_string()));
        }
        Self { entries }
    }

    /// Look up a header value (case-insensitive name).
    pub fn get(&self, name: impl AsRef<str>) -> Option<&str> {
        let name = name.as_ref();
        self.entries
            .iter()
            .find(|(n, _)| n.as_str().eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The `Authorization` value.
    pub fn authorization(&self) -> Option<&str> {
        self.get(AUTHORIZATION)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Credentials stay out of logs and panic messages.
impl std::fmt::Debug for HeaderSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(n, v)| {
                let shown = if *n == AUTHORIZATION { "<redacted>" } else { v.as_str() };
                (n.as_str(), shown)
            }))
            .finish()
    }
}
