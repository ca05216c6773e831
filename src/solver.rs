use std::time::Duration;

use crate::error::PluginResult;

/// TTL for published challenge TXT records, in seconds. ACME
/// validation records are short-lived, so this stays low.
pub const TXT_RECORD_TTL: u32 = 60;

/// Default wait between publishing a record and handing control
/// back to the ACME orchestrator, in seconds. nic.ru slave
/// servers need a commit cycle to pick staged changes up.
pub const DEFAULT_PROPAGATION_SECS: u64 = 120;

/// One DNS-01 validation attempt, as handed over by the ACME
/// orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRequest {
    /// Domain the certificate is requested for.
    pub domain: String,
    /// Fully-qualified name the TXT record must appear under,
    /// usually `_acme-challenge.<domain>`.
    pub validation_name: String,
    /// Key authorization digest to publish as the record value.
    pub validation_token: String,
}

impl ValidationRequest {
    #[must_use]
    pub fn new(domain: &str, validation_name: &str, validation_token: &str) -> Self {
        Self {
            domain: domain.to_string(),
            validation_name: validation_name.to_string(),
            validation_token: validation_token.to_string(),
        }
    }
}

/// A solver that can publish and withdraw DNS-01 challenge
/// records.
pub trait Dns01Solver {
    /// Publish the validation TXT record for `request`.
    fn perform(&self, request: &ValidationRequest) -> PluginResult<()>;

    /// Remove the validation TXT record again. Must succeed when
    /// the record is already gone.
    fn cleanup(&self, request: &ValidationRequest) -> PluginResult<()>;

    /// How long the orchestrator should wait after `perform`
    /// before asking the ACME server to validate.
    fn propagation_timeout(&self) -> Duration {
        Duration::from_secs(DEFAULT_PROPAGATION_SECS)
    }
}

/// Derive the zone-relative record name from a fully-qualified
/// validation name.
///
/// Strips a trailing `.<zone>` when present, then a leading
/// `*.`. Matching is exact, no case folding or dot handling
/// beyond that.
///
/// ```
/// use nicru_dns01::solver::extract_name;
///
/// assert_eq!(
///     extract_name("_acme-challenge.test.example.com", "example.com"),
///     "_acme-challenge.test"
/// );
/// ```
#[must_use]
pub fn extract_name(fqdn: &str, zone: &str) -> String {
    let suffix = format!(".{zone}");
    let name = fqdn.strip_suffix(suffix.as_str()).unwrap_or(fqdn);
    let name = name.strip_prefix("*.").unwrap_or(name);
    name.to_string()
}
