//! HTTP client module
//!
//! Provides the thin HTTP layer the paginator drives: a reqwest wrapper that
//! applies the headers the upstream API requires, reads response bodies to
//! completion, and classifies status codes.
//!
//! There is deliberately no retry, backoff, rate limiting, or request timeout
//! here; one failed request fails the whole export.

mod client;

pub use client::{host_header, is_success, HttpClient, HttpClientConfig, RawPage};

#[cfg(test)]
mod tests;
