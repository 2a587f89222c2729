use anyhow::{Context, Result, bail};
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// DuckDuckGo's plain-HTML result page, parseable without JavaScript.
const SEARCH_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

pub const DEFAULT_MAX_RESULTS: usize = 5;

/// One ranked provider result, re-serialized with the provider's own
/// record shape (title / href / body).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub href: String,
    pub body: String,
}

#[derive(Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SearchClient {
    pub fn new() -> Result<Self> {
        Self::with_endpoint(SEARCH_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .timeout(Duration::from_secs(30))
            .build()
            .context("failed to build search client")?;
        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
        })
    }

    /// Total operation: a provider failure becomes a single descriptive
    /// result entry instead of an error.
    pub async fn search(&self, query: &str, max_results: usize) -> Vec<SearchResult> {
        match self.try_search(query, max_results).await {
            Ok(results) => results,
            Err(e) => {
                warn!(query = %query, error = %e, "search provider failed");
                vec![SearchResult {
                    title: format!("Error searching: {:#}", e),
                    href: String::new(),
                    body: String::new(),
                }]
            }
        }
    }

    async fn try_search(&self, query: &str, max_results: usize) -> Result<Vec<SearchResult>> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("q", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            bail!("HTTP status {}", status.as_u16());
        }

        let html = response
            .text()
            .await
            .context("failed to read provider response")?;
        Ok(parse_results(&html, max_results))
    }
}

/// Pull ranked results out of the provider's HTML markup. An empty list is
/// a valid outcome (no hits), not a failure.
pub fn parse_results(html: &str, max_results: usize) -> Vec<SearchResult> {
    let doc = Html::parse_document(html);
    let result_sel = Selector::parse("div.result").unwrap();
    let title_sel = Selector::parse("a.result__a").unwrap();
    let snippet_sel = Selector::parse(".result__snippet").unwrap();

    let mut results = Vec::new();
    for block in doc.select(&result_sel) {
        let Some(anchor) = block.select(&title_sel).next() else {
            continue;
        };
        let title = anchor.text().collect::<String>().trim().to_string();
        let href = anchor.value().attr("href").unwrap_or("").to_string();
        let body = block
            .select(&snippet_sel)
            .next()
            .map(|s| s.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        if title.is_empty() || href.is_empty() {
            continue;
        }
        results.push(SearchResult { title, href, body });
        if results.len() >= max_results {
            break;
        }
    }
    results
}
