//! Prints every TXT record in the configured zone.
//!
//! Expects the path of a nic.ru credentials file as the only
//! argument.

use std::env;
use std::path::Path;

use nicru_dns01::{ApiConnector, Credentials, NicruConnector};

fn main() -> anyhow::Result<()> {
    let path = env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: list_txt_records <credentials-file>"))?;
    let credentials = Credentials::from_file(Path::new(&path))?;

    let api = NicruConnector::new(credentials).connect()?;
    for record in api.records()? {
        println!("{:>8}  {}  {}", record.id, record.name, record.value);
    }
    Ok(())
}
