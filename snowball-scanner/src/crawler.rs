use crate::client::ClientConfig;
use crate::error::{Result, ScanError};
use crate::parse::{parse_listing, parse_relations};
use crate::result::{Candidate, RelationsPage};
use crate::source::RelationSource;
use reqwest::Client;
use std::time::Instant;
use tracing::debug;
use url::Url;

/// HTTP-backed [`RelationSource`] for whosdatedwho-style profile pages.
pub struct Crawler {
    client: Client,
    config: ClientConfig,
}

impl Crawler {
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .connect_timeout(config.timeout / 2)
            .pool_idle_timeout(std::time::Duration::from_secs(90))
            .tcp_keepalive(std::time::Duration::from_secs(60))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self { client, config })
    }

    /// GET a page, returning the final URL (after redirects) and the body.
    async fn fetch_page(&self, url: Url) -> Result<(Url, String)> {
        debug!("Fetching {}", url);

        let start = Instant::now();
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().clone();
        let body = response.text().await?;
        debug!(
            "Fetched {} ({} bytes in {:?})",
            final_url,
            body.len(),
            start.elapsed()
        );

        Ok((final_url, body))
    }
}

impl RelationSource for Crawler {
    fn profile_link(&self, slug: &str) -> Result<String> {
        Ok(self.config.profile_url(slug)?.to_string())
    }

    async fn fetch_listing(&self, letter: char, limit: usize) -> Result<Vec<Candidate>> {
        let url = self.config.listing_url(letter)?;
        let (page_url, body) = self.fetch_page(url).await?;
        parse_listing(&body, &page_url, limit)
    }

    async fn fetch_relations(&self, link: &str) -> Result<RelationsPage> {
        let url = Url::parse(link)
            .or_else(|_| self.config.base_url.join(link))
            .map_err(|e| ScanError::InvalidUrl(format!("{}: {}", link, e)))?;
        let (page_url, body) = self.fetch_page(url).await?;
        parse_relations(&body, &page_url)
    }
}
