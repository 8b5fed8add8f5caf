use futures::future::join_all;
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::FETCH_DELAY_MILLIS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    pub url: String,
    pub data: String,
}

/// Simulates fetching `url`, suspending for a fixed delay.
pub async fn fetch_data(url: &str) -> FetchResult {
    debug!("Fetching {}", url);
    tokio::time::sleep(Duration::from_millis(FETCH_DELAY_MILLIS)).await;

    FetchResult {
        url: url.to_string(),
        data: format!("Data from {}", url),
    }
}

/// Fetches every URL concurrently on the current task.
///
/// All fetches are polled together, so their delays overlap, and the results
/// come back in the same order as `urls`. Dropping the returned future drops
/// the in-flight fetches with it.
pub async fn process_urls<I>(urls: I) -> Vec<FetchResult>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let urls: Vec<I::Item> = urls.into_iter().collect();
    let futures = urls.iter().map(|url| fetch_data(url.as_ref()));
    let results = join_all(futures).await;

    debug!("Fetched {} results", results.len());
    results
}
