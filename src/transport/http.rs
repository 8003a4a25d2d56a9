/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::{STATUS_OK, USER_AGENT};
use crate::error::{AppError, TransportError};
use crate::model::request::{Endpoint, ModelRequest};
use crate::transport::interface::Transport;
use crate::transport::retry::RetryConfig;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method, Response, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// [`Transport`] sending model requests over HTTP
///
/// - `GET`/`DELETE` parameters travel in the query string, `POST`/`PUT`
///   parameters as a form body
/// - every request waits on the shared rate limiter first
/// - `429 Too Many Requests` is retried according to the [`RetryConfig`]
/// - a JSON body whose `status` is not `"ok"` is reported as
///   [`TransportError::Server`]
pub struct HttpTransport {
    http_client: Client,
    config: Arc<Config>,
    rate_limiter: RateLimiter,
    retry: RetryConfig,
}

impl HttpTransport {
    /// Creates a transport from configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Base URL, timeout and rate limit settings
    ///
    /// # Returns
    ///
    /// A transport retrying `429` responses per [`RetryConfig::default`]
    ///
    /// # Example
    ///
    /// ```ignore
    /// use wl_model::prelude::*;
    ///
    /// let transport = HttpTransport::new(Config::new())?
    ///     .with_retry(RetryConfig::with_max_retries(5));
    /// ```
    ///
    /// # Errors
    /// `Transport(Http)` if the HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        let rate_limiter = RateLimiter::new(&config.rate_limiter);

        Ok(Self {
            http_client,
            config: Arc::new(config),
            rate_limiter,
            retry: RetryConfig::default(),
        })
    }

    /// Replaces the retry configuration
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Absolute URL of an endpoint
    #[must_use]
    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            endpoint.path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(&self, request: &ModelRequest) -> Result<Value, TransportError> {
        let url = self.url(&request.endpoint);
        let response = make_http_request(
            &self.http_client,
            &self.rate_limiter,
            &request.endpoint.method,
            &url,
            &request.params,
            &self.retry,
        )
        .await?;
        parse_response(response).await
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.config.rest_api.base_url)
            .field("retry", &self.retry)
            .finish()
    }
}

/// Sends one request with rate limiting and retry on `429`
///
/// # Returns
/// * `Ok(Response)` - the first successful response
/// * `Err(TransportError)` - network failure, exhausted retries, or any other
///   non-success status
pub async fn make_http_request(
    client: &Client,
    rate_limiter: &RateLimiter,
    method: &Method,
    url: &str,
    params: &[(String, String)],
    retry_config: &RetryConfig,
) -> Result<Response, TransportError> {
    let mut retry_count = 0;

    loop {
        rate_limiter.wait().await;

        debug!("{} {}", method, url);
        let request = client
            .request(method.clone(), url)
            .header(ACCEPT, "application/json");
        let request = if *method == Method::GET || *method == Method::DELETE {
            request.query(params)
        } else {
            request.form(params)
        };

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            retry_count += 1;
            if retry_config.allows(retry_count) {
                warn!(
                    "Rate limit exceeded (attempt {}). Waiting {:?} before retry...",
                    retry_count,
                    retry_config.delay()
                );
                tokio::time::sleep(retry_config.delay()).await;
                continue;
            }
            error!("Rate limit exceeded after {} attempts", retry_count);
            return Err(TransportError::RateLimitExceeded);
        }

        let body = response.text().await.unwrap_or_default();
        error!("Request failed with status {}: {}", status, body);
        return Err(match serde_json::from_str::<Value>(&body) {
            Ok(payload) => match server_error(&payload) {
                Some(server) => server,
                None => TransportError::Status { status, body },
            },
            Err(_) => TransportError::Status { status, body },
        });
    }
}

async fn parse_response(response: Response) -> Result<Value, TransportError> {
    let body = response.text().await?;
    let payload: Value = serde_json::from_str(&body)
        .map_err(|e| TransportError::InvalidPayload(format!("{e}: {body}")))?;

    match server_error(&payload) {
        Some(e) => {
            warn!("Server reported an error: {}", e);
            Err(e)
        }
        None => Ok(payload),
    }
}

/// Error carried by an API payload whose `status` is present and not `"ok"`
fn server_error(payload: &Value) -> Option<TransportError> {
    let status = payload.get("status").and_then(Value::as_str)?;
    if status == STATUS_OK {
        return None;
    }
    let message = payload
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    Some(TransportError::Server {
        status: status.to_string(),
        message,
    })
}
