use std::env;

use url::Url;

use crate::error::ConfigError;

pub const API_BASE_URL_ENV: &str = "EDU_API_BASE_URL";
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Where the backend lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    /// Parse and normalise a base URL.
    ///
    /// The stored URL always ends with `/` so relative endpoint paths join
    /// underneath it instead of replacing its last segment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the value is not an absolute http(s) URL.
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        let mut base_url = Url::parse(trimmed).map_err(|source| ConfigError::InvalidUrl {
            value: trimmed.to_owned(),
            source,
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(base_url.scheme().to_owned()));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { base_url })
    }

    /// Read `EDU_API_BASE_URL`, falling back to the local development backend.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the variable is set to an unusable URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(API_BASE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::new(&value),
            _ => Self::new(DEFAULT_API_BASE_URL),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path such as `/courses/teacher` against the base.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if the joined URL is invalid.
    pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = ApiConfig::new(DEFAULT_API_BASE_URL).unwrap();
        assert_eq!(config.base_url().as_str(), "http://127.0.0.1:8000/");
    }

    #[test]
    fn endpoints_join_under_a_prefixed_base() {
        let config = ApiConfig::new("https://school.example/api").unwrap();
        assert_eq!(
            config.endpoint("/courses/teacher").unwrap().as_str(),
            "https://school.example/api/courses/teacher"
        );
        assert_eq!(
            config.endpoint("/users/").unwrap().as_str(),
            "https://school.example/api/users/"
        );
    }

    #[test]
    fn rejects_garbage_and_non_http_schemes() {
        assert!(matches!(
            ApiConfig::new("not a url"),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            ApiConfig::new("ftp://example.com"),
            Err(ConfigError::UnsupportedScheme(scheme)) if scheme == "ftp"
        ));
    }
}
