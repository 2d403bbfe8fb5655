//! Pagination module
//!
//! The identity-provider API pages its user listing with RFC5988-style
//! `Link` response headers. This module owns the sequential fetch loop:
//! issue an authenticated GET, accumulate the raw body, follow the
//! `rel="next"` target extracted from the headers, stop when none remains.
//!
//! Exactly one request is outstanding at any time; the next URL is only
//! known once the previous response has been parsed.

mod link;
mod paginator;

pub use link::{extract_next_url, next_url_from_headers};
pub use paginator::{PageResponse, Paginator};
