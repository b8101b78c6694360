use crate::config::ClientConfig;
use crate::error::RequestError;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Method;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::Instant;
use tracing::debug;

const CLIENT_HEADER: &str = concat!("streamq-rust-", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    code: Option<i64>,
    message: Option<String>,
}

/// Performs one authenticated request and returns the decoded JSON body.
///
/// Object safe, so a queried channel can hold on to the executor that
/// produced it without knowing the concrete client.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<Value, RequestError>;
}

#[derive(Debug, Clone)]
pub struct ChatClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ChatClient {
    pub fn new(config: &ClientConfig) -> Result<Self, RequestError> {
        let mut auth = HeaderValue::from_str(config.token.expose_secret())?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert("stream-auth-type", HeaderValue::from_static("jwt"));
        headers.insert("x-stream-client", HeaderValue::from_static(CLIENT_HEADER));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Send a request to `{base_url}/{path}` and decode the body into `T`.
    ///
    /// `api_key` is always added to the query string. Any non-2xx status is
    /// an error; there are no retries.
    pub async fn make_request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<T, RequestError> {
        let url = format!("{}/{}", self.base_url, path);

        debug!(method = %method, url = %url, "sending request");
        if !query.is_empty() {
            let query_str = query
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join("&");
            debug!(query = %query_str, "request query");
        }

        let mut request = self
            .client
            .request(method, &url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(query);
        if let Some(body) = body {
            request = request.json(body);
        }

        let start = Instant::now();
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        debug!(
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            bytes = text.len(),
            "received response"
        );

        if !status.is_success() {
            return Err(status_error(status.as_u16(), &text));
        }

        serde_json::from_str::<T>(&text).map_err(|source| RequestError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

#[async_trait]
impl RequestExecutor for ChatClient {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<Value, RequestError> {
        self.make_request(method, path, query, body).await
    }
}

fn status_error(status: u16, body: &str) -> RequestError {
    let parsed = serde_json::from_str::<ApiErrorResponse>(body).ok();
    let code = parsed.as_ref().and_then(|e| e.code);
    let server_message = parsed
        .and_then(|e| e.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| "no error message returned".to_string());

    let hint = match status {
        401 => {
            "\n\nThe server rejected the credentials.\n\
             Check that STREAM_TOKEN is a valid server token for STREAM_KEY."
        }
        403 => "\n\nThe token is not allowed to perform this request.",
        404 => "\n\nThe resource does not exist. Check STREAM_BASE_URL.",
        429 => "\n\nRate limited. Please wait a moment before trying again.",
        _ => "",
    };

    RequestError::Status {
        status,
        code,
        message: format!("{}{}", server_message, hint),
    }
}
