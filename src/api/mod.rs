pub mod nicru;

use crate::cmd::CmdError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors coming out of a registrar API client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP call itself never produced a response.
    #[error(transparent)]
    Transport(#[from] CmdError),

    /// The token endpoint rejected the credentials.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The registrar answered with a failed status.
    #[error("API error {code}: {message}")]
    Api { code: String, message: String },

    /// A response arrived but could not be understood.
    #[error("unexpected response: {0}")]
    Parse(String),
}

/// A TXT record as listed by the registrar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxtRecord {
    /// Registrar-assigned record id, used for deletion.
    pub id: u64,
    /// Zone-relative record name.
    pub name: String,
    /// Record content.
    pub value: String,
}

/// A TXT record to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxtRecordSpec {
    /// Zone-relative record name.
    pub name: String,
    /// Record content.
    pub value: String,
    /// Record TTL in seconds.
    pub ttl: u32,
}

impl TxtRecordSpec {
    #[must_use]
    pub fn new(name: &str, value: &str, ttl: u32) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            ttl,
        }
    }
}

/// The slice of a registrar DNS API this plugin needs. Mutations
/// are staged server-side and only published by `commit`.
pub trait DnsApi {
    /// Acquire an access token for the session.
    fn get_token(&mut self) -> ApiResult<()>;

    /// Zone this session was opened for.
    fn default_zone(&self) -> &str;

    /// List the TXT records currently in the zone.
    fn records(&self) -> ApiResult<Vec<TxtRecord>>;

    /// Stage creation of a TXT record.
    fn add_record(&self, record: &TxtRecordSpec) -> ApiResult<()>;

    /// Stage deletion of the record with this id.
    fn delete_record(&self, id: u64) -> ApiResult<()>;

    /// Publish all staged changes to the zone.
    fn commit(&self) -> ApiResult<()>;
}

/// Opens an authenticated API session. One session is opened per
/// challenge operation, so a failed token exchange surfaces
/// before any record is touched.
pub trait ApiConnector {
    fn connect(&self) -> ApiResult<Box<dyn DnsApi>>;
}
