//! Export configuration
//!
//! Defaults mirror the deployment this tool was originally written for; every
//! value can be overridden from the command line.

use crate::auth::SswsToken;
use std::path::{Path, PathBuf};

/// Default listing endpoint. The page size is appended as the `limit` value.
pub const DEFAULT_BASE_URL: &str = "https://auth.isovalent.com/api/v1/users?limit=";

/// Default number of users requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 200;

/// Default email domain suffix excluded from the export
pub const DEFAULT_EXCLUDE_DOMAIN: &str = "isovalent.com";

/// Default output file, written to the working directory
pub const DEFAULT_OUTPUT: &str = "users.csv";

/// Configuration for one export run
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Unparameterized listing endpoint; the page size is appended verbatim
    pub base_url: String,
    /// Page size requested per call. Sent as-is; the API is trusted to
    /// accept it.
    pub page_size: u32,
    /// Email domain suffix whose accounts are excluded from the export
    pub exclude_domain: String,
    /// Output CSV path, truncated and recreated on every run
    pub output: PathBuf,
    /// API token. `None` is left for the caller to judge; the engine sends
    /// unauthenticated requests rather than inventing a placeholder.
    pub token: Option<SswsToken>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            exclude_domain: DEFAULT_EXCLUDE_DOMAIN.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            token: None,
        }
    }
}

impl ExportConfig {
    /// Create a config with the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the listing endpoint
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the excluded email domain suffix
    #[must_use]
    pub fn with_exclude_domain(mut self, domain: impl Into<String>) -> Self {
        self.exclude_domain = domain.into();
        self
    }

    /// Set the output path
    #[must_use]
    pub fn with_output(mut self, path: impl AsRef<Path>) -> Self {
        self.output = path.as_ref().to_path_buf();
        self
    }

    /// Set the API token
    #[must_use]
    pub fn with_token(mut self, token: SswsToken) -> Self {
        self.token = Some(token);
        self
    }

    /// URL of the first page: the listing endpoint with the page size
    /// appended
    pub fn first_page_url(&self) -> String {
        format!("{}{}", self.base_url, self.page_size)
    }
}
