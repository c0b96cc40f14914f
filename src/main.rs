//! contact - send a message through the portfolio contact relay
//!
//! CLI binary driving the contact form submission core.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

#[derive(Parser)]
#[command(name = "contact")]
#[command(about = "Send a message through the portfolio contact relay")]
#[command(version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the contact form and send it
    Send {
        /// Your name
        #[arg(long)]
        name: Option<String>,

        /// Your email address
        #[arg(long)]
        email: Option<String>,

        /// Message subject
        #[arg(long)]
        subject: Option<String>,

        /// Message body
        #[arg(long)]
        message: Option<String>,

        /// Relay endpoint (overrides CONTACT_RELAY_URL)
        #[arg(long)]
        endpoint: Option<String>,

        /// Dry run - validate and show the request without sending it
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the resolved relay configuration
    Config,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("folio_contact=debug,contact=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        None => {
            // Default: interactive form
            cli::run_send(cli::SendOptions::default()).await?;
        }
        Some(Commands::Send {
            name,
            email,
            subject,
            message,
            endpoint,
            dry_run,
        }) => {
            cli::run_send(cli::SendOptions {
                name,
                email,
                subject,
                message,
                endpoint,
                dry_run,
            })
            .await?;
        }
        Some(Commands::Config) => {
            cli::run_config()?;
        }
    }

    Ok(())
}
