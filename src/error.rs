use crate::api::ApiError;

pub type PluginResult<T> = Result<T, PluginError>;

#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{operation} error: {source}")]
    RecordOperation {
        operation: &'static str,
        #[source]
        source: ApiError,
    },
}
