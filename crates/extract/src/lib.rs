pub mod fetcher;
pub mod text;

pub use fetcher::{FetchConfig, HttpFetcher, PageFetcher};
pub use text::{extract_text, normalize_whitespace, truncate_chars};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Plain-text content extracted from one fetched page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedDocument {
    pub source_url: String,
    pub text: String,
}

/// Fetches a page and reduces it to readable plain text.
///
/// Generic over the transport so tests can inject a fake fetcher.
pub struct ContentExtractor<F: PageFetcher> {
    fetcher: F,
    max_chars: usize,
}

impl ContentExtractor<HttpFetcher> {
    /// Extractor backed by a real HTTP client.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self {
            fetcher,
            max_chars: config.max_chars,
        })
    }
}

impl<F: PageFetcher> ContentExtractor<F> {
    pub fn with_fetcher(fetcher: F, max_chars: usize) -> Self {
        Self { fetcher, max_chars }
    }

    /// Fallible variant for callers that need to tell a fetch failure apart
    /// from a page that genuinely has little content.
    pub async fn try_fetch_and_extract(&self, url: &str) -> Result<ExtractedDocument> {
        let html = self.fetcher.fetch(url).await?;
        let text = normalize_whitespace(&extract_text(&html));
        Ok(ExtractedDocument {
            source_url: url.to_string(),
            text: truncate_chars(&text, self.max_chars),
        })
    }

    /// Total operation: any failure becomes a descriptive error document
    /// naming the requested URL. Never panics, never propagates an error.
    pub async fn fetch_and_extract(&self, url: &str) -> ExtractedDocument {
        match self.try_fetch_and_extract(url).await {
            Ok(doc) => doc,
            Err(e) => {
                warn!(url = %url, error = %e, "fetch failed");
                ExtractedDocument {
                    source_url: url.to_string(),
                    text: format!("Error fetching URL {}: {:#}", url, e),
                }
            }
        }
    }
}
