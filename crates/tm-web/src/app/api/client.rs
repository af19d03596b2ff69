//! HTTP client for the travel management backend.
//!
//! Every attempt is raced against a timer. GET requests are retried on
//! transport failures; anything that changes data is sent exactly once.

use std::{future::Future, pin::pin, time::Duration};

use futures::future::{Either, select};
use reqwest::{Method, RequestBuilder, Url};
use serde::{Serialize, de::DeserializeOwned};

use crate::{app::config::ClientConfig, app::utils::sleep, error::ApiError};

/// Form fields or query parameters, in order. Keys may repeat.
pub type Fields = [(&'static str, String)];

/// Shared client injected into the component tree through context.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
    get_retries: u32,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.timeout == other.timeout && self.get_retries == other.get_retries
    }
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            timeout: config.request_timeout,
            get_retries: config.get_retries,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET and decode a JSON body, retrying transport failures.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &Fields) -> Result<T, ApiError> {
        let body = retry_idempotent(self.get_retries, || self.execute(self.http.get(self.url(path)).query(query))).await?;
        decode(&body)
    }

    /// POST a JSON body and return the reply text as is.
    pub async fn post_json_text<B: Serialize + ?Sized>(&self, path: &str, query: &Fields, body: &B) -> Result<String, ApiError> {
        self.execute(self.http.post(self.url(path)).query(query).json(body)).await
    }

    /// Send form fields (`application/x-www-form-urlencoded`) and return the reply text.
    pub async fn send_form(&self, method: Method, path: &str, fields: &Fields) -> Result<String, ApiError> {
        self.execute(self.http.request(method, self.url(path)).form(fields)).await
    }

    /// Send a bodiless request with query parameters and return the reply text.
    pub async fn send_query(&self, method: Method, path: &str, query: &Fields) -> Result<String, ApiError> {
        self.execute(self.http.request(method, self.url(path)).query(query)).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(self.http.delete(self.url(path))).await.map(|_| ())
    }

    /// Send one request under the configured timeout and return the body of a
    /// successful response.
    async fn execute(&self, request: RequestBuilder) -> Result<String, ApiError> {
        with_timeout(self.timeout, async move {
            let response = request.send().await?;
            let status = response.status();
            let body = response.text().await?;

            if status.is_success() {
                Ok(body)
            } else {
                tracing::debug!(status = status.as_u16(), body = %body, "backend returned an error");
                Err(ApiError::from_status(status.as_u16(), &body))
            }
        })
        .await
    }
}

/// Percent-encode a value for use as a single path segment (usernames, mostly).
pub fn encode_segment(raw: &str) -> String {
    let Ok(mut url) = Url::parse("http://segment.local/") else {
        return raw.to_string();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear().push(raw);
    }
    url.path().trim_start_matches('/').to_string()
}

/// Decode a JSON body, logging what could not be parsed.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::warn!(error = %e, "failed to decode response body");
        ApiError::from(e)
    })
}

/// Resolve `future`, or fail with [`ApiError::Timeout`] once `after` elapses.
pub async fn with_timeout<T, F>(after: Duration, future: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    let future = pin!(future);
    let timer = pin!(sleep(after));

    match select(future, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(ApiError::Timeout { after }),
    }
}

/// Run `attempt`, repeating it up to `retries` more times while it fails with
/// a retryable error.
pub async fn retry_idempotent<T, F, Fut>(retries: u32, mut attempt: F) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut tries = 0;
    loop {
        match attempt().await {
            Err(e) if e.is_retryable() && tries < retries => {
                tries += 1;
                tracing::warn!(error = %e, attempt = tries, "retrying request");
            }
            result => return result,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[tokio::test]
    async fn test_with_timeout_passes_fast_results() {
        let result = with_timeout(Duration::from_secs(5), async { Ok::<_, ApiError>(7) }).await;
        assert_eq!(result, Ok(7));
    }

    #[tokio::test(start_paused = true)]
    async fn test_with_timeout_expires() {
        let result: Result<(), ApiError> = with_timeout(Duration::from_millis(50), async {
            sleep(Duration::from_secs(60)).await;
            Ok(())
        })
        .await;
        assert_eq!(
            result,
            Err(ApiError::Timeout {
                after: Duration::from_millis(50)
            })
        );
    }

    #[tokio::test]
    async fn test_retry_once_after_network_error() {
        let calls = Cell::new(0);
        let result = retry_idempotent(1, || {
            calls.set(calls.get() + 1);
            let n = calls.get();
            async move {
                if n == 1 {
                    Err(ApiError::Network("connection reset".to_string()))
                } else {
                    Ok("ok")
                }
            }
        })
        .await;
        assert_eq!(result, Ok("ok"));
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn test_retry_gives_up_after_budget() {
        let calls = Cell::new(0);
        let result: Result<(), ApiError> = retry_idempotent(1, || {
            calls.set(calls.get() + 1);
            async {
                Err(ApiError::Timeout {
                    after: Duration::from_secs(15),
                })
            }
        })
        .await;
        assert!(matches!(result, Err(ApiError::Timeout { .. })));
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn test_status_errors_are_not_retried() {
        let calls = Cell::new(0);
        let result: Result<(), ApiError> = retry_idempotent(3, || {
            calls.set(calls.get() + 1);
            async { Err(ApiError::from_status(500, "boom")) }
        })
        .await;
        assert!(matches!(result, Err(ApiError::Server { status: 500, .. })));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new(&ClientConfig::from_overrides(Some("http://api.local/"), None));
        assert_eq!(client.url("/api/bookings"), "http://api.local/api/bookings");
        assert_eq!(client.url("users/login"), "http://api.local/users/login");
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("ana.silva"), "ana.silva");
        assert_eq!(encode_segment("ana silva/1"), "ana%20silva%2F1");
        assert_eq!(encode_segment("zoë"), "zo%C3%AB");
        assert_eq!(encode_segment("a?b#c%"), "a%3Fb%23c%25");
    }

    #[test]
    fn test_decode_errors_are_classified() {
        let result: Result<Vec<i64>, ApiError> = decode("not json");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
