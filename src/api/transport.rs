use std::{fmt, time::Duration, time::Instant};

use async_trait::async_trait;
use reqwest::{Client, Url, header};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    api::{
        error::{ApiError, invalid_request, transport_error},
        http_common::Endpoint,
    },
    config::ApiConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => f.write_str("GET"),
            HttpMethod::Post => f.write_str("POST"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub endpoint: Endpoint,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn get(endpoint: Endpoint) -> Self {
        Self {
            method: HttpMethod::Get,
            endpoint,
            query: Vec::new(),
            body: None,
        }
    }

    pub fn post(endpoint: Endpoint, body: Value) -> Self {
        Self {
            method: HttpMethod::Post,
            endpoint,
            query: Vec::new(),
            body: Some(body),
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request to the backend.
///
/// Implementations return `Err` only when no HTTP response was obtained;
/// non-2xx statuses come back as ordinary responses.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
    timeout: Option<Duration>,
}

impl ReqwestTransport {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = parse_base_url(&config.base_url)?;
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(30))
            .build()
            .map_err(|err| transport_error(format!("failed to build http client: {}", err)))?;

        Ok(Self {
            client,
            base_url,
            timeout: config.request_timeout_ms.map(Duration::from_millis),
        })
    }

    pub fn url_for(&self, endpoint: &Endpoint) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| invalid_request(format!("base url {} cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .extend(endpoint.segments());
        Ok(url)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = self.url_for(&request.endpoint)?;
        let endpoint = request.endpoint.to_string();
        let request_id = Uuid::now_v7().to_string();
        let started = Instant::now();

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
        }
        .header("x-request-id", request_id.as_str());

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder
                .header(header::CONTENT_TYPE, "application/json")
                .json(body);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(|err| {
            tracing::warn!(
                target: "api",
                request_id = %request_id,
                method = %request.method,
                endpoint = %endpoint,
                timeout = err.is_timeout(),
                error = %err,
                "backend_request_failed"
            );
            transport_error(format!("{} {} failed: {}", request.method, endpoint, err))
                .with_endpoint(endpoint.clone())
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|err| {
            transport_error(format!("failed to read response body: {}", err))
                .with_endpoint(endpoint.clone())
                .with_status(status)
        })?;

        tracing::debug!(
            target: "api",
            request_id = %request_id,
            method = %request.method,
            endpoint = %endpoint,
            status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "backend_request_completed"
        );

        Ok(HttpResponse { status, body })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let url = Url::parse(raw.trim())
        .map_err(|err| invalid_request(format!("invalid api base url '{}': {}", raw, err)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid_request(format!(
            "api base url must use http or https, got '{}'",
            url.scheme()
        )));
    }
    Ok(url)
}
