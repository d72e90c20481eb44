use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sports_roster::cli::{self, Cli};
use sports_roster::{Roster, Store};

/// Initialize tracing on stderr so stdout carries only command output
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "sports_roster=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let store = match cli.data_file {
        Some(path) => Store::new(path),
        None => Store::open_default()?,
    };
    tracing::debug!("Using data file {}", store.path().display());

    let mut roster = Roster::open(store);
    let mut stdout = std::io::stdout().lock();
    cli::execute(cli.command, &mut roster, &mut stdout)?;

    Ok(())
}
