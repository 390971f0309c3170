use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;
use tu::{run, Cli, Config, SubjectResolver, SystemOpener};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn launch(cli: Cli) -> Result<()> {
    let resolver = SubjectResolver::new(Config::from_home()?);
    let opener = SystemOpener::default();
    run(cli, &resolver, &opener, &mut std::io::stdout().lock())
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = launch(cli) {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
