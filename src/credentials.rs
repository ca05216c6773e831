use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{PluginError, PluginResult};

/// Credentials and zone coordinates for the nic.ru API, read
/// from an INI-style file.
///
/// Keys may also carry the `dns_nicru_` prefix used by certbot
/// credential files, so an existing file works unchanged.
#[derive(Clone)]
pub struct Credentials {
    /// OAuth application id.
    pub client_id: String,
    /// OAuth application secret.
    pub client_secret: String,
    /// Account username (`NNNNNNN/NIC-D` form).
    pub username: String,
    /// Account password.
    pub password: String,
    /// OAuth scope (e.g. `GET:/dns-master/.+`).
    pub scope: String,
    /// DNS hosting service name.
    pub service: String,
    /// Zone the challenge records live in.
    pub zone: String,
}

impl Credentials {
    pub fn from_file(path: &Path) -> PluginResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| PluginError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_conf(&content)
    }

    /// Parse credentials out of file content. Every required key
    /// must be present and non-empty; all gaps are reported in one
    /// error rather than one at a time.
    pub fn from_conf(content: &str) -> PluginResult<Self> {
        let mut missing = Vec::new();
        let mut lookup = |key: &'static str| {
            conf_value(content, key).unwrap_or_else(|| {
                missing.push(key);
                String::new()
            })
        };

        let credentials = Self {
            client_id: lookup("client_id"),
            client_secret: lookup("client_secret"),
            username: lookup("username"),
            password: lookup("password"),
            scope: lookup("scope"),
            service: lookup("service"),
            zone: lookup("zone"),
        };

        if missing.is_empty() {
            Ok(credentials)
        } else {
            Err(PluginError::Config(format!(
                "missing credential properties: {}",
                missing.join(", ")
            )))
        }
    }
}

fn conf_value(content: &str, key: &str) -> Option<String> {
    parse_conf_value(content, key)
        .or_else(|| parse_conf_value(content, &format!("dns_nicru_{key}")))
        .filter(|value| !value.is_empty())
}

// client_secret and password stay out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &redacted(&self.client_secret))
            .field("username", &self.username)
            .field("password", &redacted(&self.password))
            .field("scope", &self.scope)
            .field("service", &self.service)
            .field("zone", &self.zone)
            .finish()
    }
}

const fn redacted(_secret: &str) -> &'static str {
    "<REDACTED>"
}

/// Extract a value from an INI-style config string.
///
/// Lines are `key = value`. Comments (`#` or `;`) and `[section]`
/// headers are skipped, so both flat files and sectioned ones
/// parse the same way.
#[must_use]
pub fn parse_conf_value(content: &str, key: &str) -> Option<String> {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty()
            || trimmed.starts_with('#')
            || trimmed.starts_with(';')
            || trimmed.starts_with('[')
        {
            continue;
        }
        if let Some((k, v)) = trimmed.split_once('=') {
            if k.trim() == key {
                return Some(v.trim().to_string());
            }
        }
    }
    None
}
