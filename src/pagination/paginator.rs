//! The fetch loop

use super::link::next_url_from_headers;
use crate::error::Result;
use crate::http::{HttpClient, RawPage};
use bytes::Bytes;
use tracing::{debug, info};

/// One page of the listing: the raw body plus the next URL extracted from
/// the response headers. Produced per HTTP call and consumed immediately by
/// the loop.
#[derive(Debug)]
pub struct PageResponse {
    /// Raw, undecoded response body
    pub body: Bytes,
    /// Target of the `rel="next"` link, when the response carried one
    pub next_url: Option<String>,
}

impl From<RawPage> for PageResponse {
    fn from(raw: RawPage) -> Self {
        let next_url = next_url_from_headers(&raw.headers);
        Self {
            body: raw.body,
            next_url,
        }
    }
}

/// Walks the paginated listing endpoint until the next-link chain runs out
pub struct Paginator {
    client: HttpClient,
}

impl Paginator {
    /// Create a paginator over the given client
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Fetch every page, starting from `initial_url` with the page-size value
    /// appended verbatim, and return the raw bodies in pagination order.
    ///
    /// The page-size value is not validated; the caller is trusted to pass a
    /// protocol-acceptable value. Any failure, transport or non-2xx status alike,
    /// aborts the whole fetch with no partial result: an error on page N
    /// discards pages 1..N-1.
    pub async fn fetch_all(&self, initial_url: &str, page_size_param: &str) -> Result<Vec<Bytes>> {
        let mut bodies = Vec::new();
        let mut url = format!("{initial_url}{page_size_param}");

        loop {
            let page: PageResponse = self.client.get_page(&url).await?.into();
            info!(%url, "fetched page");
            bodies.push(page.body);

            match page.next_url {
                Some(next) => url = next,
                None => break,
            }
        }

        debug!(pages = bodies.len(), "pagination complete");
        Ok(bodies)
    }
}
