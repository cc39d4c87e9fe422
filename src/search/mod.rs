pub mod fetcher;
pub mod google;
pub mod plan;

use async_trait::async_trait;
use serde::Deserialize;
use snowclone_match::ResultItem;

use crate::error::FetchError;

pub use fetcher::{fetch_all, FetchOptions, FetchSummary};
pub use google::GoogleCustomSearch;
pub use plan::PagePlan;

/// One page request. `start` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub query: String,
    pub start: u32,
    pub num: u32,
    pub site: Option<String>,
}

/// One page of results. A response without `items` is an empty page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub items: Vec<ResultItem>,
}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, req: &PageRequest) -> Result<SearchPage, FetchError>;
}
