use std::fmt;

use quick_xml::escape::escape;
use serde::Deserialize;
use tracing::debug;

use crate::api::{ApiConnector, ApiError, ApiResult, DnsApi, TxtRecord, TxtRecordSpec};
use crate::cmd;
use crate::credentials::Credentials;

const OAUTH_TOKEN_URL: &str = "https://api.nic.ru/oauth/token";
const DNS_MASTER_API: &str = "https://api.nic.ru/dns-master";

/// nic.ru DNS-master client using the REST API via curl.
///
/// Record mutations are staged on the server and only become
/// visible on the name servers after `commit`. The curl config
/// travels over stdin so tokens and passwords never show up in
/// the process list.
pub struct NicruApi {
    credentials: Credentials,
    default_service: String,
    default_zone: String,
    token: Option<String>,
}

impl NicruApi {
    #[must_use]
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            default_service: credentials.service.clone(),
            default_zone: credentials.zone.clone(),
            credentials: credentials.clone(),
            token: None,
        }
    }

    fn records_url(&self) -> String {
        format!(
            "{DNS_MASTER_API}/services/{}/zones/{}/records",
            self.default_service, self.default_zone
        )
    }

    fn commit_url(&self) -> String {
        format!(
            "{DNS_MASTER_API}/services/{}/zones/{}/commit",
            self.default_service, self.default_zone
        )
    }

    fn bearer(&self) -> ApiResult<&str> {
        self.token
            .as_deref()
            .ok_or_else(|| ApiError::Auth("no access token for this session".into()))
    }

    /// Issue a DNS-master request and parse the XML envelope.
    fn request(&self, method: &str, url: &str, body: Option<&str>) -> ApiResult<XmlData> {
        let token = self.bearer()?;

        let mut config = config_line("request", method);
        config.push_str(&config_line(
            "header",
            &format!("Authorization: Bearer {token}"),
        ));
        if let Some(body) = body {
            config.push_str(&config_line("header", "Content-Type: application/xml"));
            config.push_str(&config_line("data", body));
        }

        debug!("{method} {url}");
        let response =
            cmd::run_with_stdin("curl", &["-s", "-S", "-K", "-", url], config.as_bytes())?;
        parse_response(&response)
    }
}

impl fmt::Debug for NicruApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The bearer token is as secret as the password.
        f.debug_struct("NicruApi")
            .field("credentials", &self.credentials)
            .field("default_service", &self.default_service)
            .field("default_zone", &self.default_zone)
            .field("token", &self.token.as_ref().map(|_| "<REDACTED>"))
            .finish()
    }
}

impl DnsApi for NicruApi {
    fn get_token(&mut self) -> ApiResult<()> {
        debug!("requesting access token for {}", self.credentials.username);

        let creds = &self.credentials;
        let mut config = config_line("request", "POST");
        config.push_str(&config_line("data", "grant_type=password"));
        for (key, value) in [
            ("username", &creds.username),
            ("password", &creds.password),
            ("scope", &creds.scope),
            ("client_id", &creds.client_id),
            ("client_secret", &creds.client_secret),
        ] {
            config.push_str(&config_line("data-urlencode", &format!("{key}={value}")));
        }

        let response = cmd::run_with_stdin(
            "curl",
            &["-s", "-S", "-K", "-", OAUTH_TOKEN_URL],
            config.as_bytes(),
        )?;
        self.token = Some(parse_token_response(&response)?);
        debug!("access token acquired");
        Ok(())
    }

    fn default_zone(&self) -> &str {
        &self.default_zone
    }

    fn records(&self) -> ApiResult<Vec<TxtRecord>> {
        let data = self.request("GET", &self.records_url(), None)?;
        collect_txt_records(data)
    }

    fn add_record(&self, record: &TxtRecordSpec) -> ApiResult<()> {
        let body = txt_record_body(record);
        self.request("PUT", &self.records_url(), Some(&body))?;
        Ok(())
    }

    fn delete_record(&self, id: u64) -> ApiResult<()> {
        let url = format!("{}/{id}", self.records_url());
        self.request("DELETE", &url, None)?;
        Ok(())
    }

    fn commit(&self) -> ApiResult<()> {
        self.request("POST", &self.commit_url(), None)?;
        Ok(())
    }
}

/// Opens authenticated sessions against the production nic.ru
/// endpoints.
#[derive(Debug)]
pub struct NicruConnector {
    credentials: Credentials,
}

impl NicruConnector {
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl ApiConnector for NicruConnector {
    fn connect(&self) -> ApiResult<Box<dyn DnsApi>> {
        let mut api = NicruApi::new(&self.credentials);
        api.get_token()?;
        Ok(Box::new(api))
    }
}

#[derive(Debug, Deserialize)]
struct XmlResponse {
    status: String,
    #[serde(default)]
    errors: Option<XmlErrors>,
    #[serde(default)]
    data: Option<XmlData>,
}

#[derive(Debug, Default, Deserialize)]
struct XmlErrors {
    #[serde(rename = "error", default)]
    errors: Vec<XmlError>,
}

#[derive(Debug, Deserialize)]
struct XmlError {
    #[serde(rename = "@code", default)]
    code: Option<String>,
    #[serde(rename = "$text", default)]
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct XmlData {
    #[serde(rename = "zone", default)]
    zones: Vec<XmlZone>,
}

#[derive(Debug, Deserialize)]
struct XmlZone {
    #[serde(rename = "rr", default)]
    records: Vec<XmlRecord>,
}

#[derive(Debug, Deserialize)]
struct XmlRecord {
    #[serde(rename = "@id", default)]
    id: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    txt: Option<XmlTxt>,
}

#[derive(Debug, Default, Deserialize)]
struct XmlTxt {
    #[serde(rename = "string", default)]
    strings: Vec<String>,
}

fn parse_response(body: &str) -> ApiResult<XmlData> {
    let response: XmlResponse = quick_xml::de::from_str(body)
        .map_err(|e| ApiError::Parse(format!("bad DNS-master response: {e}")))?;
    if response.status == "success" {
        Ok(response.data.unwrap_or_default())
    } else {
        Err(api_failure(response))
    }
}

fn api_failure(response: XmlResponse) -> ApiError {
    let first = response.errors.unwrap_or_default().errors.into_iter().next();
    let Some(error) = first else {
        return ApiError::Api {
            code: "unknown".to_string(),
            message: format!("status {}", response.status),
        };
    };
    ApiError::Api {
        code: error.code.unwrap_or_else(|| "unknown".to_string()),
        message: error.text.unwrap_or_default(),
    }
}

fn collect_txt_records(data: XmlData) -> ApiResult<Vec<TxtRecord>> {
    let mut records = Vec::new();
    for zone in data.zones {
        for rr in zone.records {
            if rr.kind != "TXT" {
                continue;
            }
            let id = rr
                .id
                .as_deref()
                .and_then(|raw| raw.parse::<u64>().ok())
                .ok_or_else(|| {
                    ApiError::Parse(format!("TXT record '{}' has no usable id", rr.name))
                })?;
            // Long TXT payloads come split into multiple strings.
            let value = rr.txt.map_or_else(String::new, |txt| txt.strings.concat());
            records.push(TxtRecord {
                id,
                name: rr.name,
                value,
            });
        }
    }
    Ok(records)
}

fn parse_token_response(body: &str) -> ApiResult<String> {
    let parsed: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| ApiError::Parse(format!("token response is not JSON: {e}")))?;
    if let Some(token) = parsed["access_token"].as_str() {
        return Ok(token.to_string());
    }
    let detail = parsed["error_description"]
        .as_str()
        .or_else(|| parsed["error"].as_str())
        .unwrap_or("no access_token in response");
    Err(ApiError::Auth(detail.to_string()))
}

fn txt_record_body(record: &TxtRecordSpec) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <request><rr-list><rr>\
         <name>{}</name><ttl>{}</ttl><type>TXT</type>\
         <txt><string>{}</string></txt>\
         </rr></rr-list></request>",
        escape(&record.name),
        record.ttl,
        escape(&record.value)
    )
}

fn config_line(option: &str, value: &str) -> String {
    format!("{option} = \"{}\"\n", curl_quote(value))
}

/// Quote a value for a double-quoted curl config entry.
fn curl_quote(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
