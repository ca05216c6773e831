//! Publishes a throwaway validation record and removes it again.
//!
//! Expects the path of a nic.ru credentials file as the only
//! argument. Both steps commit to the live zone, so point this at a
//! test zone.

use std::env;
use std::path::Path;

use nicru_dns01::{Authenticator, Credentials, Dns01Solver, ValidationRequest};

fn main() -> anyhow::Result<()> {
    let path = env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: manual_roundtrip <credentials-file>"))?;
    let credentials = Credentials::from_file(Path::new(&path))?;
    let zone = credentials.zone.clone();

    let solver = Authenticator::new(credentials);
    let request = ValidationRequest::new(
        &zone,
        &format!("_acme-challenge.{zone}"),
        "not-a-real-acme-token",
    );

    solver.perform(&request)?;
    println!("published TXT record for _acme-challenge.{zone}");

    solver.cleanup(&request)?;
    println!("removed it again");
    Ok(())
}
