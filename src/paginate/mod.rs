//! Pagination engine
//!
//! Turns a paginated, rate-limited collection endpoint into a lazy, ordered
//! stream of items.
//!
//! # Overview
//!
//! [`paginate`] drives one page fetch at a time, flattens each page's item
//! list into a single output sequence, and advances the cursor from the
//! server's `meta.pagination` block. Rate-limit errors are retried in place
//! up to [`MAX_RETRIES`] times with [`backoff`]; every other error ends the
//! stream immediately. Nothing is fetched ahead of demand, so dropping the
//! stream stops all further requests.

mod backoff;
mod types;

pub use backoff::backoff;
pub use types::{PageResponse, PaginationMeta};

use crate::error::{Error, Result};
use crate::types::{FilterParams, QueryPairs};
use async_trait::async_trait;
use futures::stream::{self, Stream, TryStreamExt};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};


/// Maximum rate-limit retries per page. Fixed; deliberately not exposed as
/// a knob on [`paginate`].
pub const MAX_RETRIES: u32 = 3;

/// Fetches one page of a collection endpoint.
///
/// The engine is written against this seam; [`crate::transport::Transport`]
/// is the production implementation.
#[async_trait]
pub trait PageFetch: Send + Sync {
    /// Fetch `path` with the given query pairs and return the raw page.
    ///
    /// A rate-limited response surfaces as [`Error::RateLimited`]; any other
    /// non-success outcome as its own error variant.
    async fn fetch_page(&self, path: &str, query: &QueryPairs) -> Result<PageResponse>;
}

/// Per-run cursor state. Lives inside the stream, nothing is shared
/// across runs.
struct PageCursor {
    path: String,
    items_key: String,
    filters: FilterParams,
    page: u32,
    has_more: bool,
}

/// Lazily iterate every item of a paginated collection.
///
/// Items are yielded in strict page-ascending, within-page order, exactly as
/// the server sent them. The stream is forward-only and not restartable;
/// call again for a fresh run. `filters` are copied and replayed on every
/// page request with the engine's own `page` parameter injected (a caller
/// supplied `page` filter is overwritten).
pub fn paginate<'f, T, F>(
    fetcher: &'f F,
    path: &str,
    items_key: &str,
    filters: &FilterParams,
) -> impl Stream<Item = Result<T>> + 'f
where
    T: DeserializeOwned + 'f,
    F: PageFetch + ?Sized,
{
    let cursor = PageCursor {
        path: path.to_string(),
        items_key: items_key.to_string(),
        filters: filters.clone(),
        page: 1,
        has_more: true,
    };

    stream::try_unfold(cursor, move |mut cursor| async move {
        if !cursor.has_more {
            return Ok::<_, Error>(None);
        }

        let page = fetch_page_with_retry(fetcher, &cursor).await?;
        let items: Vec<T> = page.items(&cursor.items_key)?;
        debug!(
            "Fetched page {} of {} ({} items)",
            cursor.page,
            cursor.path,
            items.len()
        );

        // A response without pagination metadata is a complete single-page
        // collection.
        match page.pagination().and_then(|meta| meta.next_page) {
            Some(next) => cursor.page = next,
            None => cursor.has_more = false,
        }

        Ok(Some((items, cursor)))
    })
    .map_ok(|items| stream::iter(items.into_iter().map(Ok)))
    .try_flatten()
}

/// Eagerly drain [`paginate`] into a `Vec`.
///
/// Either the complete, ordered result or the first error; a failure
/// mid-run discards the items fetched so far.
pub async fn fetch_all<T, F>(
    fetcher: &F,
    path: &str,
    items_key: &str,
    filters: &FilterParams,
) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    F: PageFetch + ?Sized,
{
    paginate(fetcher, path, items_key, filters).try_collect().await
}

/// Fetch one page, absorbing up to [`MAX_RETRIES`] rate-limit refusals.
///
/// The retry budget is local to this call, so a successful page resets it
/// for the next one.
async fn fetch_page_with_retry<F>(fetcher: &F, cursor: &PageCursor) -> Result<PageResponse>
where
    F: PageFetch + ?Sized,
{
    let mut query = cursor.filters.to_query_pairs();
    query.retain(|(key, _)| key != "page");
    query.push(("page".to_string(), cursor.page.to_string()));

    let mut retries = 0u32;
    loop {
        match fetcher.fetch_page(&cursor.path, &query).await {
            Ok(page) => return Ok(page),
            Err(Error::RateLimited {
                retry_after_seconds,
            }) if retries < MAX_RETRIES => {
                retries += 1;
                let wait = backoff(retry_after_seconds, retries);
                warn!(
                    "Rate limited on page {} of {}, retry {}/{}, waiting {:?}",
                    cursor.page, cursor.path, retries, MAX_RETRIES, wait
                );
                tokio::time::sleep(wait).await;
            }
            Err(err) => return Err(err),
        }
    }
}
