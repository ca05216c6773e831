use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use nicru_dns01::solver::DEFAULT_PROPAGATION_SECS;
use nicru_dns01::{Authenticator, Credentials, Dns01Solver, ValidationRequest};

#[derive(Parser)]
#[command(name = "nicru-dns01")]
#[command(about = "certbot DNS-01 hooks for zones hosted at nic.ru", version)]
struct Cli {
    /// Increase log detail (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Publish the validation TXT record and wait out propagation
    Perform {
        #[command(flatten)]
        challenge: ChallengeArgs,

        /// Seconds to sleep after committing the record
        #[arg(long, default_value_t = DEFAULT_PROPAGATION_SECS)]
        propagation_seconds: u64,
    },

    /// Remove the validation TXT record again
    Cleanup {
        #[command(flatten)]
        challenge: ChallengeArgs,
    },
}

#[derive(Args)]
struct ChallengeArgs {
    /// Path to the nic.ru credentials INI file
    #[arg(short, long, value_name = "FILE")]
    credentials: PathBuf,

    /// Domain under validation
    #[arg(long, env = "CERTBOT_DOMAIN")]
    domain: String,

    /// Validation token to publish
    #[arg(long, env = "CERTBOT_VALIDATION", hide_env_values = true)]
    validation: String,

    /// Record name to use instead of `_acme-challenge.<domain>`
    #[arg(long)]
    validation_name: Option<String>,
}

impl ChallengeArgs {
    fn request(&self) -> ValidationRequest {
        let name = self
            .validation_name
            .clone()
            .unwrap_or_else(|| format!("_acme-challenge.{}", self.domain));
        ValidationRequest::new(&self.domain, &name, &self.validation)
    }

    fn solver(&self) -> anyhow::Result<Authenticator> {
        let credentials = Credentials::from_file(&self.credentials)?;
        Ok(Authenticator::new(credentials))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Command::Perform {
            challenge,
            propagation_seconds,
        } => {
            let solver = challenge
                .solver()?
                .propagation(Duration::from_secs(propagation_seconds));
            solver.perform(&challenge.request())?;

            // certbot asks the ACME server to validate as soon as
            // the hook returns, so the wait happens here.
            let wait = solver.propagation_timeout();
            if !wait.is_zero() {
                info!("waiting {}s for DNS propagation", wait.as_secs());
                thread::sleep(wait);
            }
            Ok(())
        }
        Command::Cleanup { challenge } => {
            challenge.solver()?.cleanup(&challenge.request())?;
            Ok(())
        }
    }
}

// Hook output goes to stderr; certbot owns stdout.
fn init_tracing(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
