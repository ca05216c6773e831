use nicru_dns01::cmd::CmdError;
use nicru_dns01::{ApiError, PluginError};

#[test]
fn display_config() {
    let err = PluginError::Config("missing credential properties: scope".into());
    assert_eq!(
        err.to_string(),
        "configuration error: missing credential properties: scope"
    );
}

#[test]
fn display_record_operation_with_api_failure() {
    let err = PluginError::RecordOperation {
        operation: "add record",
        source: ApiError::Api {
            code: "4097".into(),
            message: "Parent zone was not found.".into(),
        },
    };
    assert_eq!(
        err.to_string(),
        "add record error: API error 4097: Parent zone was not found."
    );
}

#[test]
fn display_record_operation_with_auth_failure() {
    let err = PluginError::RecordOperation {
        operation: "get token",
        source: ApiError::Auth("Client authentication failed".into()),
    };
    assert_eq!(
        err.to_string(),
        "get token error: authentication failed: Client authentication failed"
    );
}

#[test]
fn record_operation_source_is_the_api_error() {
    use std::error::Error;

    let err = PluginError::RecordOperation {
        operation: "commit",
        source: ApiError::Parse("bad DNS-master response".into()),
    };
    let source = err.source().map(ToString::to_string);
    assert_eq!(
        source,
        Some("unexpected response: bad DNS-master response".into())
    );
}

#[test]
fn transport_errors_convert_from_cmd_errors() {
    let err: ApiError = CmdError::NotFound("curl".into()).into();
    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.to_string(), "command not found: curl");
}

#[test]
fn display_cmd_failed() {
    let err = CmdError::Failed {
        command: "curl -s -S -K - https://api.nic.ru/oauth/token".into(),
        detail: "curl: (6) Could not resolve host: api.nic.ru".into(),
    };
    assert_eq!(
        err.to_string(),
        "command failed: curl -s -S -K - https://api.nic.ru/oauth/token: \
         curl: (6) Could not resolve host: api.nic.ru"
    );
}
