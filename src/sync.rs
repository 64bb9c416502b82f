use tracing::{error, info};

use crate::blacklist::{inject_custom_hostnames, merge_existing};
use crate::config_api::{ConfigApiClient, PublishOutcome};
use crate::ct_log::CtLogFetcher;
use crate::error::{SyncError, SyncResult};

/// Summary of a completed sync run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub fetched: usize,
    pub custom_added: usize,
    pub existing: usize,
    pub total: usize,
    pub outcome: PublishOutcome,
}

impl SyncReport {
    /// Turns a rejected publish into [`SyncError::PublishRejected`]
    pub fn into_result(self) -> SyncResult<Self> {
        match self.outcome {
            PublishOutcome::Accepted { .. } => Ok(self),
            PublishOutcome::Rejected { status, message } => {
                Err(SyncError::PublishRejected { status, message })
            }
        }
    }
}

/// Pulls the CT log list, adds the custom hostnames and the ones already
/// forbidden, then pushes the merged list back to the configuration API.
#[derive(Debug, Clone)]
pub struct BlacklistSync {
    ct_log: CtLogFetcher,
    config_api: ConfigApiClient,
    custom_hostnames: Vec<String>,
}

impl BlacklistSync {
    pub fn new(
        ct_log: CtLogFetcher,
        config_api: ConfigApiClient,
        custom_hostnames: Vec<String>,
    ) -> Self {
        Self {
            ct_log,
            config_api,
            custom_hostnames,
        }
    }

    /// Runs every stage in sequence. A failed fetch aborts the run before
    /// anything is published.
    pub async fn run(&self) -> SyncResult<SyncReport> {
        let mut hostnames = self.ct_log.fetch().await?;
        let fetched = hostnames.len();

        let custom_added = inject_custom_hostnames(&mut hostnames, &self.custom_hostnames);
        info!("added {} custom hostnames", custom_added);

        let existing = self.config_api.forbidden_hostnames().await?;
        merge_existing(&mut hostnames, &existing);
        info!("there is {} forbidden hostnames now", hostnames.len());

        let outcome = self.config_api.set_forbidden_hostnames(&hostnames).await?;
        match &outcome {
            PublishOutcome::Accepted { .. } => info!("successfully updated forbidden hostnames"),
            PublishOutcome::Rejected { .. } => {
                error!("failed to update forbidden hostnames: {}", outcome)
            }
        }

        Ok(SyncReport {
            fetched,
            custom_added,
            existing: existing.len(),
            total: hostnames.len(),
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn report(outcome: PublishOutcome) -> SyncReport {
        SyncReport {
            fetched: 1,
            custom_added: 0,
            existing: 0,
            total: 1,
            outcome,
        }
    }

    #[test]
    fn test_accepted_report_is_ok() {
        let accepted = report(PublishOutcome::Accepted {
            status: StatusCode::OK,
        });

        assert_eq!(accepted.clone().into_result().unwrap(), accepted);
    }

    #[test]
    fn test_rejected_report_is_an_error() {
        let rejected = report(PublishOutcome::Rejected {
            status: StatusCode::BAD_REQUEST,
            message: "bad payload".to_string(),
        });

        let err = rejected.into_result().unwrap_err();
        assert!(matches!(
            &err,
            SyncError::PublishRejected { status, message }
                if *status == StatusCode::BAD_REQUEST && message == "bad payload"
        ));
        assert_eq!(
            err.to_string(),
            "Configuration API rejected the update (400 Bad Request): bad payload"
        );
    }
}
