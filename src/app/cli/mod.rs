//! CLI Adapter.

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, RunOutcome};
use crate::app::config::ConfigInputs;
use crate::domain::AppError;

const EXAMPLES: &str = "\
Examples:
  # minimal, if you configure your env for everything
  $ webhookup

  # specify just events, run inside a git project with an origin remote,
  # use your env for the rest
  $ webhookup -e status,push

  # run inside a git project with an origin remote
  $ webhookup -t <token> -h https://my.webhook.host.com -s <super-secret> -e status,push

  # ignore the working directory, specify owner & repository
  $ webhookup -o cdaringe -r webhookup

  # delete every webhook of the repository
  $ webhookup --purge";

#[derive(Parser)]
#[command(name = "webhookup")]
#[command(version)]
#[command(about = "Create or purge GitHub repository webhooks", long_about = None)]
#[command(after_long_help = EXAMPLES, disable_help_flag = true)]
struct Cli {
    /// GitHub API endpoint [env: GITHUB_ENDPOINT] [default: https://api.github.com]
    #[arg(short = 'g', long)]
    github: Option<String>,
    /// Repository owner/org, inferred from the origin remote if omitted [env: GITHUB_OWNER]
    #[arg(short = 'o', long)]
    owner: Option<String>,
    /// Repository name, inferred from the origin remote if omitted [env: GITHUB_REPOSITORY]
    #[arg(short = 'r', long)]
    repository: Option<String>,
    /// GitHub API token with admin:repo_hook permission [env: WEBHOOK_GITHUB_TOKEN, GITHUB_TOKEN]
    #[arg(short = 't', long)]
    token: Option<String>,
    /// URL where your webhook listener lives [env: WEBHOOK_ENDPOINT]
    #[arg(short = 'h', long)]
    endpoint: Option<String>,
    /// Webhook secret your listener uses to verify deliveries [env: WEBHOOK_SECRET]
    #[arg(short = 's', long)]
    secret: Option<String>,
    /// Comma-separated list of events, e.g. `status,push` [env: WEBHOOK_EVENTS]
    #[arg(short = 'e', long)]
    events: Option<String>,
    /// Delete all webhooks for the repository
    #[arg(short = 'p', long)]
    purge: bool,
    /// Print help
    #[arg(long, action = ArgAction::HelpLong)]
    help: Option<bool>,
}

impl From<Cli> for ConfigInputs {
    fn from(cli: Cli) -> Self {
        ConfigInputs {
            github: cli.github,
            owner: cli.owner,
            repository: cli.repository,
            token: cli.token,
            endpoint: cli.endpoint,
            secret: cli.secret,
            events: cli.events,
            purge: cli.purge,
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging();

    let inputs = ConfigInputs::from(cli);
    let result = api::resolve_config(&inputs).and_then(|config| api::run(&config));

    match result {
        Ok(RunOutcome::Created(outcome)) => {
            println!("✅ Created webhook {} on {}", outcome.hook.id, outcome.repository);
        }
        Ok(RunOutcome::Purged(outcome)) => {
            let count = outcome.deleted.len();
            println!("✅ Deleted {} webhook(s) from {}", count, outcome.repository);
        }
        Err(e) => {
            report(&e);
            std::process::exit(1);
        }
    }
}

fn report(error: &AppError) {
    if error.is_input_error() {
        eprintln!("{}", error);
    } else {
        eprintln!("Error: {}", error);
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default: warn).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
