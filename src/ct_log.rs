use reqwest::Client;
use tracing::{debug, info};

use crate::blacklist::HostnameList;
use crate::error::{SyncError, SyncResult};
use crate::USER_AGENT;

/// List of real-world onion sites seen in certificate transparency logs
pub const DEFAULT_CT_LOG_URL: &str =
    "https://raw.githubusercontent.com/alecmuffett/real-world-onion-sites/master/ct-log.txt";

/// Downloads the plaintext CT log hostname list
#[derive(Debug, Clone)]
pub struct CtLogFetcher {
    http_client: Client,
    url: String,
}

impl CtLogFetcher {
    pub fn new(url: impl Into<String>) -> SyncResult<Self> {
        let http_client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http_client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches the list, one hostname per line
    pub async fn fetch(&self) -> SyncResult<HostnameList> {
        debug!("Fetching CT log hostnames from {}", self.url);

        let response = self.http_client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(SyncError::UnexpectedStatus {
                url: self.url.clone(),
                status: response.status(),
            });
        }

        let body = response.text().await?;
        let hostnames = parse_hostname_lines(&body);

        info!("pulled {} real world hostnames from {}", hostnames.len(), self.url);
        Ok(hostnames)
    }
}

/// Parses a newline-delimited hostname list.
///
/// Lines are trimmed and blank lines are skipped, so a trailing newline
/// never yields an empty hostname. Repeated lines keep their first position.
pub fn parse_hostname_lines(body: &str) -> HostnameList {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
