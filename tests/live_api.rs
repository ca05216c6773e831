//! Integration test: publish and remove a real challenge record
//! through the nic.ru API.
//!
//! Needs a credentials file pointed at by `NICRU_CREDENTIALS`
//! for a zone you control. Skipped in normal `cargo test` runs
//! unless the `integration` feature is enabled.

#![cfg(feature = "integration")]

use std::path::Path;

use nicru_dns01::{Authenticator, Credentials, Dns01Solver, ValidationRequest};

#[test]
fn perform_and_cleanup_round_trip() {
    let path = std::env::var("NICRU_CREDENTIALS").expect("NICRU_CREDENTIALS not set");
    let credentials =
        Credentials::from_file(Path::new(&path)).expect("credentials file did not parse");
    let zone = credentials.zone.clone();

    let solver = Authenticator::new(credentials);
    let request = ValidationRequest::new(
        &zone,
        &format!("_acme-challenge.{zone}"),
        "nicru-dns01-integration-test",
    );

    solver.perform(&request).expect("perform failed");
    solver.cleanup(&request).expect("cleanup failed");
}
