//! DNS-01 challenge solver for zones hosted at nic.ru.
//!
//! Publishes and removes ACME validation TXT records through the
//! nic.ru DNS-master REST API, so certificates for zones on
//! nic.ru DNS hosting can be issued with the `dns-01` challenge.
//! Ships as a library plus a hook binary for certbot's
//! `--manual-auth-hook` and `--manual-cleanup-hook`.
//!
//! # Overview
//!
//! [`Authenticator`] implements [`Dns01Solver`]: `perform`
//! publishes the validation TXT record, `cleanup` withdraws it
//! again. Each operation exchanges the configured credentials for
//! an OAuth access token, stages its record changes and publishes
//! them with a single zone commit, the way the DNS-master API
//! expects.
//!
//! The registrar API sits behind the [`ApiConnector`] and
//! [`DnsApi`] traits, so the record logic can be driven against
//! a fake registrar in tests.
//!
//! # Credentials file
//!
//! An INI-style file with the OAuth application, account and zone
//! coordinates:
//!
//! ```ini
//! client_id = 9GTfJsSpmfxJcgNDmxuqIcQsSWDUVvRA
//! client_secret = ...
//! username = 370001/NIC-D
//! password = ...
//! scope = GET:/dns-master/.+
//! service = myservice
//! zone = example.com
//! ```
//!
//! Keys carrying the `dns_nicru_` prefix used by certbot
//! credential files are accepted as well.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use nicru_dns01::{Authenticator, Credentials, Dns01Solver, ValidationRequest};
//!
//! fn main() -> anyhow::Result<()> {
//!     let credentials = Credentials::from_file(Path::new("/etc/letsencrypt/nicru.ini"))?;
//!     let solver = Authenticator::new(credentials);
//!
//!     let request = ValidationRequest::new(
//!         "example.com",
//!         "_acme-challenge.example.com",
//!         "gX4ZT5zkbMFN6i0jB9AV-dwDhjMhb2Yw9sDjZaQjW8Q",
//!     );
//!     solver.perform(&request)?;
//!     std::thread::sleep(solver.propagation_timeout());
//!     // ... let the ACME server validate, then:
//!     solver.cleanup(&request)?;
//!     Ok(())
//! }
//! ```
//!
//! As certbot hooks:
//!
//! ```sh
//! certbot certonly --manual --preferred-challenges dns \
//!     --manual-auth-hook "nicru-dns01 perform -c /etc/letsencrypt/nicru.ini" \
//!     --manual-cleanup-hook "nicru-dns01 cleanup -c /etc/letsencrypt/nicru.ini" \
//!     -d example.com
//! ```

// Allow noisy pedantic lints that don't add value for a small
// plugin crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod api;
pub mod authenticator;
pub mod cmd;
pub mod credentials;
pub mod error;
pub mod solver;

pub use api::ApiConnector;
pub use api::ApiError;
pub use api::DnsApi;
pub use api::TxtRecord;
pub use api::TxtRecordSpec;
pub use api::nicru::NicruApi;
pub use api::nicru::NicruConnector;
pub use authenticator::Authenticator;
pub use credentials::Credentials;
pub use credentials::parse_conf_value;
pub use error::PluginError;
pub use error::PluginResult;
pub use solver::Dns01Solver;
pub use solver::ValidationRequest;
pub use solver::extract_name;
