//! CLI runner - executes the export

use crate::auth::SswsToken;
use crate::cli::commands::Cli;
use crate::config::ExportConfig;
use crate::engine::ExportEngine;
use crate::error::{Error, Result};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the export described by the command line.
    ///
    /// Token absence is decided here, at the outermost caller: it is fatal,
    /// and nothing below this point ever substitutes a placeholder
    /// credential.
    pub async fn run(&self) -> Result<()> {
        let token = SswsToken::resolve(self.cli.token.as_deref()).ok_or(Error::MissingToken)?;

        let config = ExportConfig::new()
            .with_base_url(&self.cli.base_url)
            .with_page_size(self.cli.page_size)
            .with_exclude_domain(&self.cli.exclude_domain)
            .with_output(&self.cli.output)
            .with_token(token);

        ExportEngine::new(config).run().await?;
        Ok(())
    }
}
