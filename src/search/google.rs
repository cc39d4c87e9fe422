// path: src/search/google.rs
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::{PageRequest, SearchPage, SearchProvider};
use crate::config::SearchCredentials;
use crate::error::FetchError;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Google Custom Search JSON API client.
pub struct GoogleCustomSearch {
    client: Client,
    creds: SearchCredentials,
}

impl GoogleCustomSearch {
    pub fn new(creds: SearchCredentials) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("snowclone/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, creds })
    }

    fn params(&self, req: &PageRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("key", self.creds.api_key.clone()),
            ("cx", self.creds.engine_id.clone()),
            ("q", req.query.clone()),
            ("start", req.start.to_string()),
            ("num", req.num.to_string()),
        ];
        if let Some(site) = &req.site {
            params.push(("siteSearch", site.clone()));
            params.push(("siteSearchFilter", "i".to_string()));
        }
        params
    }
}

#[async_trait]
impl SearchProvider for GoogleCustomSearch {
    async fn search(&self, req: &PageRequest) -> Result<SearchPage, FetchError> {
        tracing::trace!(
            q = %req.query,
            start = req.start,
            num = req.num,
            site = ?req.site,
            endpoint = %self.creds.endpoint,
            "search request"
        );

        let resp = self
            .client
            .get(&self.creds.endpoint)
            .query(&self.params(req))
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        tracing::trace!(status = status.as_u16(), body = %body, "search response");

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}
