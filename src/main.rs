mod config;
mod lookup;
mod output;
mod session;
mod util;

use clap::Parser;
use config::LookupConfig;
use session::Session;

#[derive(Parser)]
#[command(name = "ipinfo")]
#[command(version)]
#[command(about = "Looks up geolocation and ownership details for IPs and domains.")]
struct CommandLine {
    /// IPs or domains to look up; prompts interactively when omitted
    targets: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse();

    // Diagnostics go to stderr; lookup output owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ipinfo=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = LookupConfig::load().await?;
    let session = Session::new(config)?;

    if commands.targets.is_empty() {
        session.interactive().await
    } else {
        session.batch(&commands.targets).await
    }
}
