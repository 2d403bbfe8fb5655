//! Export orchestration
//!
//! Fetch → decode → filter → write, in that strict order. The output file is
//! only created once every page has been fetched and every body decoded, so
//! a failure anywhere leaves no partial CSV behind.

use crate::config::ExportConfig;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::model;
use crate::output;
use crate::pagination::Paginator;
use std::time::Instant;
use tracing::{debug, info};

/// Counters for one export run
#[derive(Debug, Clone, Default)]
pub struct ExportStats {
    /// Pages fetched before the next-link chain ran out
    pub pages_fetched: usize,
    /// Users decoded across all pages
    pub users_decoded: usize,
    /// Users that survived the domain filter and were written
    pub users_written: usize,
    /// Wall-clock duration of the run
    pub duration_ms: u64,
}

/// Runs the full export sequence described by an [`ExportConfig`]
pub struct ExportEngine {
    config: ExportConfig,
}

impl ExportEngine {
    /// Create an engine for the given configuration
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Execute the export and return its counters
    pub async fn run(&self) -> Result<ExportStats> {
        let start = Instant::now();
        debug!(url = %self.config.first_page_url(), "starting export");

        let client =
            HttpClient::with_token(HttpClientConfig::default(), self.config.token.clone());
        let paginator = Paginator::new(client);

        let pages = paginator
            .fetch_all(&self.config.base_url, &self.config.page_size.to_string())
            .await?;
        let users = model::decode_pages(&pages)?;

        let keep = users
            .iter()
            .filter(|user| !user.email_in_domain(&self.config.exclude_domain));
        let users_written = output::write_users(&self.config.output, keep)?;

        #[allow(clippy::cast_possible_truncation)]
        let stats = ExportStats {
            pages_fetched: pages.len(),
            users_decoded: users.len(),
            users_written,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            pages = stats.pages_fetched,
            users = stats.users_decoded,
            written = stats.users_written,
            output = %self.config.output.display(),
            "export complete"
        );

        Ok(stats)
    }
}
