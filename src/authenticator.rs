use std::time::Duration;

use tracing::{debug, info};

use crate::api::nicru::NicruConnector;
use crate::api::{ApiConnector, DnsApi, TxtRecord, TxtRecordSpec};
use crate::credentials::Credentials;
use crate::error::{PluginError, PluginResult};
use crate::solver::{
    DEFAULT_PROPAGATION_SECS, Dns01Solver, TXT_RECORD_TTL, ValidationRequest, extract_name,
};

/// DNS-01 solver for zones hosted on nic.ru DNS hosting.
///
/// Every operation opens a fresh authenticated session, stages
/// its record changes and publishes them with a single commit.
pub struct Authenticator {
    connector: Box<dyn ApiConnector>,
    propagation: Duration,
}

impl Authenticator {
    /// Solver talking to the production nic.ru API.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self::with_connector(Box::new(NicruConnector::new(credentials)))
    }

    /// Solver over any [`ApiConnector`].
    #[must_use]
    pub fn with_connector(connector: Box<dyn ApiConnector>) -> Self {
        Self {
            connector,
            propagation: Duration::from_secs(DEFAULT_PROPAGATION_SECS),
        }
    }

    /// Override the propagation wait reported to callers.
    #[must_use]
    pub fn propagation(mut self, wait: Duration) -> Self {
        self.propagation = wait;
        self
    }

    fn connect(&self) -> PluginResult<Box<dyn DnsApi>> {
        self.connector
            .connect()
            .map_err(|source| PluginError::RecordOperation {
                operation: "get token",
                source,
            })
    }
}

impl Dns01Solver for Authenticator {
    fn perform(&self, request: &ValidationRequest) -> PluginResult<()> {
        let api = self.connect()?;
        let name = extract_name(&request.validation_name, api.default_zone());
        debug!(
            "publishing TXT {name} in zone {} for {}",
            api.default_zone(),
            request.domain
        );

        let record = TxtRecordSpec::new(&name, &request.validation_token, TXT_RECORD_TTL);
        api.add_record(&record)
            .map_err(|source| PluginError::RecordOperation {
                operation: "add record",
                source,
            })?;
        api.commit().map_err(|source| PluginError::RecordOperation {
            operation: "commit",
            source,
        })?;

        info!("TXT record {name} committed for {}", request.domain);
        Ok(())
    }

    fn cleanup(&self, request: &ValidationRequest) -> PluginResult<()> {
        let api = self.connect()?;
        let name = extract_name(&request.validation_name, api.default_zone());

        let records = api
            .records()
            .map_err(|source| PluginError::RecordOperation {
                operation: "list records",
                source,
            })?;
        let matching: Vec<TxtRecord> = records.into_iter().filter(|r| r.name == name).collect();
        if matching.is_empty() {
            debug!("no TXT record named {name} left to remove");
            return Ok(());
        }

        for record in &matching {
            debug!("deleting TXT record {} (id {})", record.name, record.id);
            api.delete_record(record.id)
                .map_err(|source| PluginError::RecordOperation {
                    operation: "delete record",
                    source,
                })?;
        }
        api.commit().map_err(|source| PluginError::RecordOperation {
            operation: "commit",
            source,
        })?;

        info!("removed {} TXT record(s) named {name}", matching.len());
        Ok(())
    }

    fn propagation_timeout(&self) -> Duration {
        self.propagation
    }
}
