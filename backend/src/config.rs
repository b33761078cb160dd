//! Public connection settings for the hosted backend.
//!
//! The host server reads these from its environment and serves them at
//! `/api/config`; the browser client fetches them at startup. Only the public
//! anon key travels this way, never a service key.

use serde::{Deserialize, Serialize};

/// Base URL and anon key for the hosted backend project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Project base URL, e.g. `https://abc.backend.example`. No trailing `/`.
    pub backend_url: String,
    /// Public anon key sent as `apikey` on every request.
    pub anon_key: String,
}

impl BackendConfig {
    /// Build a config, trimming surrounding whitespace and trailing slashes from the URL.
    #[must_use]
    pub fn new(backend_url: &str, anon_key: &str) -> Self {
        Self {
            backend_url: backend_url.trim().trim_end_matches('/').to_owned(),
            anon_key: anon_key.trim().to_owned(),
        }
    }

    /// Absolute URL for a backend-relative path such as `/auth/v1/user`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.backend_url)
        } else {
            format!("{}/{path}", self.backend_url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_trailing_slashes() {
        let cfg = BackendConfig::new(" https://x.example/// ", " key ");
        assert_eq!(cfg.backend_url, "https://x.example");
        assert_eq!(cfg.anon_key, "key");
    }

    #[test]
    fn url_joins_with_and_without_leading_slash() {
        let cfg = BackendConfig::new("https://x.example", "k");
        assert_eq!(cfg.url("/auth/v1/user"), "https://x.example/auth/v1/user");
        assert_eq!(cfg.url("rest/v1/states"), "https://x.example/rest/v1/states");
    }

    #[test]
    fn serializes_with_snake_case_keys() {
        let cfg = BackendConfig::new("https://x.example", "k");
        let json = serde_json::to_value(&cfg).unwrap();
        assert_eq!(json, serde_json::json!({ "backend_url": "https://x.example", "anon_key": "k" }));
    }
}
