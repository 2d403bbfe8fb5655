//! # okta-export
//!
//! Fetches every user record from a paginated identity-provider API, filters
//! out internal-domain accounts, and writes the remainder to a CSV file.
//!
//! ## Architecture
//!
//! ```text
//! CLI (clap) → Runner → ExportEngine
//!                           │
//!        ┌─────────┬────────┴────────┬──────────┐
//!        │  Auth   │    Pagination   │  Output  │
//!        │  SSWS   │ Link rel="next" │   CSV    │
//!        └─────────┴─────────────────┴──────────┘
//!                    HTTP (reqwest)
//! ```
//!
//! The fetch loop is strictly sequential (the next page URL is only known
//! after the previous response has been parsed) and all-or-nothing: any
//! transport failure, non-2xx status, or malformed page aborts the run
//! before the output file is touched. There is no retry, backoff, rate
//! limiting, or concurrent fetching.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// SSWS token authentication
pub mod auth;

/// Export configuration
pub mod config;

/// HTTP client
pub mod http;

/// Pagination fetch loop
pub mod pagination;

/// User schema and page decoding
pub mod model;

/// CSV output
pub mod output;

/// Export orchestration
pub mod engine;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ExportConfig;
pub use engine::{ExportEngine, ExportStats};
pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
