//! HTTP client
//!
//! A deliberately small wrapper over reqwest. It knows how to issue one
//! authenticated GET against the identity-provider API and hand back the
//! fully-read body plus response headers; everything about *which* URLs to
//! fetch lives in the pagination module.

use crate::auth::SswsToken;
use crate::error::{Error, Result};
use bytes::Bytes;
use reqwest::header::{HeaderMap, ACCEPT, CONTENT_TYPE, HOST};
use reqwest::Client;
use std::collections::HashMap;
use url::Url;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        // The upstream API expects these on every request.
        let mut default_headers = HashMap::new();
        default_headers.insert(ACCEPT.to_string(), "application/json".to_string());
        default_headers.insert(CONTENT_TYPE.to_string(), "application/json".to_string());

        Self {
            default_headers,
            user_agent: format!("okta-export/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// A fully-read page response. The status code has already been verified as
/// 2xx; the headers are kept for Link-header pagination.
#[derive(Debug)]
pub struct RawPage {
    /// Raw, undecoded response body
    pub body: Bytes,
    /// Response headers
    pub headers: HeaderMap,
}

/// HTTP client for the identity-provider API
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    token: Option<SswsToken>,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration and no token
    pub fn new() -> Self {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Self {
        // No timeout is configured: the transport default applies, and a hung
        // request blocks the whole export.
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            config,
            token: None,
        }
    }

    /// Create a client that authenticates with an SSWS token
    pub fn with_token(config: HttpClientConfig, token: Option<SswsToken>) -> Self {
        let mut client = Self::with_config(config);
        client.token = token;
        client
    }

    /// Issue a single GET and read the response to completion.
    ///
    /// The `Host` header is derived from the URL's authority; a URL that
    /// cannot be parsed or has no authority is rejected up front. Transport
    /// failures and non-2xx statuses are both fatal; the status error
    /// carries the URL and the already-read body.
    pub async fn get_page(&self, url: &str) -> Result<RawPage> {
        let parsed = Url::parse(url)?;
        let host = host_header(&parsed)?;

        let mut req = self.client.get(parsed);
        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }
        req = req.header(HOST, host);
        if let Some(ref token) = self.token {
            req = token.apply(req);
        }

        let response = req.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();

        // The body is consumed on every path, success or failure, so the
        // connection is released before the next request is issued.
        let body = response.bytes().await?;

        if !is_success(status) {
            return Err(Error::http_status(
                status,
                url,
                String::from_utf8_lossy(&body).into_owned(),
            ));
        }

        Ok(RawPage { body, headers })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("has_token", &self.token.is_some())
            .finish_non_exhaustive()
    }
}

/// True iff the status code is in [200, 300)
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Derive the `Host` header value from a URL's authority component.
///
/// The literal authority string is used (port included when present), not a
/// normalized hostname. URLs without an authority are rejected.
pub fn host_header(url: &Url) -> Result<String> {
    let authority = url.authority();
    if authority.is_empty() {
        return Err(Error::MissingAuthority {
            url: url.to_string(),
        });
    }
    Ok(authority.to_string())
}
