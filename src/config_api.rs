use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info};
use url::Url;

use crate::blacklist::{HostnameList, HostnameRecord};
use crate::USER_AGENT;
use crate::error::{SyncError, SyncResult};

/// Key of the forbidden hostnames config
pub const FORBIDDEN_HOSTNAMES_KEY: &str = "forbidden-hostnames";

const APPLICATION_JSON: &str = "application/json";

/// Result of a PUT to the configuration API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    Accepted { status: StatusCode },
    Rejected { status: StatusCode, message: String },
}

impl PublishOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Accepted { status } | Self::Rejected { status, .. } => *status,
        }
    }
}

impl std::fmt::Display for PublishOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accepted { status } => write!(f, "accepted ({status})"),
            Self::Rejected { status, message } if message.is_empty() => {
                write!(f, "rejected ({status})")
            }
            Self::Rejected { status, message } => write!(f, "rejected ({status}): {message}"),
        }
    }
}

/// Client for the key/value endpoints of the configuration API
#[derive(Debug, Clone)]
pub struct ConfigApiClient {
    http_client: Client,
    base_url: String,
}

impl ConfigApiClient {
    pub fn new(base_url: &Url) -> SyncResult<Self> {
        let http_client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http_client,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Parses `base_url` before building the client
    pub fn from_str_url(base_url: &str) -> SyncResult<Self> {
        Self::new(&Url::parse(base_url)?)
    }

    pub fn endpoint(&self, key: &str) -> String {
        format!("{}/config/{}", self.base_url, key)
    }

    /// Reads and decodes the value stored under `key`
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> SyncResult<T> {
        let url = self.endpoint(key);
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header(ACCEPT, APPLICATION_JSON)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SyncError::UnexpectedStatus {
                url,
                status: response.status(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Replaces the value stored under `key`.
    ///
    /// Transport failures are errors; any HTTP response is reported
    /// through the returned [`PublishOutcome`].
    pub async fn set<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> SyncResult<PublishOutcome> {
        let url = self.endpoint(key);
        let body = serde_json::to_vec(value)?;
        debug!("PUT {} ({} bytes)", url, body.len());

        let response = self
            .http_client
            .put(&url)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(ACCEPT, APPLICATION_JSON)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(PublishOutcome::Accepted { status });
        }

        let message = match response.text().await {
            Ok(message) => message,
            Err(e) => {
                debug!("Failed to read rejection body from {}: {}", url, e);
                String::new()
            }
        };
        Ok(PublishOutcome::Rejected {
            status,
            message: message.trim().to_string(),
        })
    }

    pub async fn forbidden_hostnames(&self) -> SyncResult<Vec<HostnameRecord>> {
        let hostnames: Vec<HostnameRecord> = self.get(FORBIDDEN_HOSTNAMES_KEY).await?;
        info!(
            "there is {} forbidden hostnames defined in the configuration API",
            hostnames.len()
        );
        Ok(hostnames)
    }

    /// Overwrites the whole forbidden list with `hostnames`
    pub async fn set_forbidden_hostnames(
        &self,
        hostnames: &HostnameList,
    ) -> SyncResult<PublishOutcome> {
        self.set(FORBIDDEN_HOSTNAMES_KEY, hostnames).await
    }
}
