use anyhow::{Context, Result};
use secrecy::SecretString;
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://chat.stream-io-api.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(6);

/// Connection settings for [`crate::api::client::ChatClient`].
#[derive(Debug)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: String,
    /// Server token, sent verbatim in the `Authorization` header.
    pub token: SecretString,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: &str, api_key: &str, token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            token: SecretString::from(token.to_string()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read STREAM_KEY, STREAM_TOKEN, STREAM_BASE_URL and STREAM_TIMEOUT_SECS.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("STREAM_KEY").context(
            "STREAM_KEY environment variable not set\n\n\
             Please set the API key of your chat application:\n  \
             export STREAM_KEY=your-api-key",
        )?;

        let token = env::var("STREAM_TOKEN").context(
            "STREAM_TOKEN environment variable not set\n\n\
             Please set a server-side token for your application:\n  \
             export STREAM_TOKEN=your-server-token\n\n\
             Tokens are issued by your backend; streamq does not sign them.",
        )?;

        let base_url = env::var("STREAM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let mut config = Self::new(&base_url, &api_key, &token);

        if let Ok(secs) = env::var("STREAM_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .with_context(|| format!("STREAM_TIMEOUT_SECS must be a whole number of seconds, got '{}'", secs))?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = ClientConfig::new("http://localhost:3030/", "key", "token");
        assert_eq!(config.base_url, "http://localhost:3030");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.token.expose_secret(), "token");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let config = ClientConfig::new(DEFAULT_BASE_URL, "key", "super-secret-token");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret-token"));
    }
}
