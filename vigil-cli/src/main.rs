//! Vigil CLI
//!
//! Watches a single Jenkins job and raises a desktop notification when its
//! current build finishes. Clicking the notification opens the build console
//! in the default browser; the process then exits.

mod browser;
mod config;
mod notify;
mod watcher;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::notify::Interaction;
use crate::watcher::BuildWatcher;
use vigil_client::JenkinsClient;
use vigil_core::build::{BuildOutcome, BuildStatus};
use vigil_core::job::JobRef;

#[derive(Parser)]
#[command(name = "vigil")]
#[command(about = "Desktop notifier for Jenkins build completion", long_about = None)]
struct Cli {
    /// Job path on the Jenkins server (e.g. /job/myapp)
    job_path: String,

    /// Jenkins server URL
    #[arg(
        long,
        env = "VIGIL_SERVER_URL",
        default_value = "http://localhost:8080"
    )]
    server_url: String,

    /// Seconds between polls of the job's last-build endpoint
    #[arg(long, env = "VIGIL_POLL_INTERVAL", default_value_t = 15)]
    poll_interval: u64,

    /// Seconds to wait for a reaction to the completion notification
    #[arg(long, env = "VIGIL_NOTIFY_TIMEOUT", default_value_t = 60)]
    notify_timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vigil_cli=info,vigil_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config::new(cli.server_url, JobRef::new(cli.job_path))
        .with_poll_interval(Duration::from_secs(cli.poll_interval))
        .with_notify_timeout(Duration::from_secs(cli.notify_timeout));
    config.validate().context("Invalid configuration")?;

    info!(
        "Loaded configuration: job={}, server_url={}",
        config.job, config.server_url
    );

    let http_client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;
    let client = JenkinsClient::with_client(config.server_url.clone(), http_client);

    println!(
        "{}",
        format!(
            "Watching {} on {}...",
            config.job.short_name(),
            client.base_url()
        )
        .bold()
    );

    let watcher = BuildWatcher::new(config.clone(), client.clone());
    let status = watcher.run().await?;

    print_summary(&status);

    let interaction = notify::show_finished(&config.job, &status, config.notify_timeout).await?;

    match interaction {
        Interaction::Clicked => {
            info!("Notification clicked");
            browser::open_console(&client.console_url(&config.job))?;
        }
        Interaction::Dismissed => info!("Notification dismissed"),
        Interaction::TimedOut => info!("No reaction to the notification; exiting"),
    }

    Ok(())
}

/// Prints the completion summary
fn print_summary(status: &BuildStatus) {
    let label = status
        .result
        .map(|r| r.to_string())
        .unwrap_or_else(|| "UNKNOWN".to_string());

    let label_colored = match status.result {
        Some(BuildOutcome::Success) => label.green(),
        Some(BuildOutcome::Unstable) => label.yellow(),
        Some(BuildOutcome::Aborted) | Some(BuildOutcome::NotBuilt) => label.dimmed(),
        Some(BuildOutcome::Failure) | None => label.red(),
    };

    match status.number {
        Some(number) => println!("{} Build #{}: {}", "▸".cyan(), number, label_colored),
        None => println!("{} Build: {}", "▸".cyan(), label_colored),
    }

    if let Some(started) = status.timestamp {
        println!(
            "  Started: {}",
            started.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
        );
    }
}
