use std::fs;
use std::path::Path;

use nicru_dns01::credentials::parse_conf_value;
use nicru_dns01::{Credentials, PluginError};

const CONF: &str = "\
client_id = app-id
client_secret = app-secret
username = 370001/NIC-D
password = hunter2
scope = GET:/dns-master/.+
service = myservice
zone = example.com
";

#[test]
fn parse_full_conf() {
    let creds = Credentials::from_conf(CONF).unwrap();
    assert_eq!(creds.client_id, "app-id");
    assert_eq!(creds.username, "370001/NIC-D");
    assert_eq!(creds.scope, "GET:/dns-master/.+");
    assert_eq!(creds.service, "myservice");
    assert_eq!(creds.zone, "example.com");
}

#[test]
fn certbot_prefixed_keys() {
    let conf = "\
dns_nicru_client_id = app-id
dns_nicru_client_secret = app-secret
dns_nicru_username = 370001/NIC-D
dns_nicru_password = hunter2
dns_nicru_scope = GET:/dns-master/.+
dns_nicru_service = myservice
dns_nicru_zone = example.com
";
    let creds = Credentials::from_conf(conf).unwrap();
    assert_eq!(creds.client_id, "app-id");
    assert_eq!(creds.zone, "example.com");
}

#[test]
fn missing_keys_are_reported_together() {
    let conf = "\
client_id = app-id
username = 370001/NIC-D
password = hunter2
service = myservice
zone = example.com
";
    let err = Credentials::from_conf(conf).unwrap_err();
    assert_eq!(
        err.to_string(),
        "configuration error: missing credential properties: client_secret, scope"
    );
}

#[test]
fn empty_value_counts_as_missing() {
    let conf = CONF.replace("password = hunter2", "password =");
    let err = Credentials::from_conf(&conf).unwrap_err();
    assert!(err.to_string().contains("password"));
}

#[test]
fn comments_and_section_headers_are_skipped() {
    let conf = format!("# nic.ru API access\n[nicru]\n; from the partner portal\n{CONF}");
    let creds = Credentials::from_conf(&conf).unwrap();
    assert_eq!(creds.client_id, "app-id");
}

#[test]
fn debug_hides_the_secrets() {
    let creds = Credentials::from_conf(CONF).unwrap();
    let debug = format!("{creds:?}");
    assert!(debug.contains("<REDACTED>"));
    assert!(debug.contains("app-id"));
    assert!(!debug.contains("app-secret"));
    assert!(!debug.contains("hunter2"));
    // All seven fields are shown, none elided
    assert!(!debug.contains(".."));
}

#[test]
fn from_file_reads_a_conf() {
    let path = std::env::temp_dir().join(format!("nicru-dns01-conf-{}.ini", std::process::id()));
    fs::write(&path, CONF).unwrap();
    let creds = Credentials::from_file(&path).unwrap();
    fs::remove_file(&path).ok();
    assert_eq!(creds.zone, "example.com");
}

#[test]
fn missing_file_is_a_config_error() {
    let err = Credentials::from_file(Path::new("/nonexistent/nicru.ini")).unwrap_err();
    assert!(matches!(err, PluginError::Config(_)));
    assert!(err.to_string().contains("/nonexistent/nicru.ini"));
}

#[test]
fn conf_value_spaces_around_equals() {
    assert_eq!(
        parse_conf_value("key = value with spaces\n", "key"),
        Some("value with spaces".into())
    );
}

#[test]
fn conf_value_missing_key() {
    assert_eq!(parse_conf_value("key = value\n", "other"), None);
}

#[test]
fn conf_value_empty_content() {
    assert_eq!(parse_conf_value("", "key"), None);
}
