use clap::Parser;

use version_exporter::config::Cli;
use version_exporter::{logging, server};

fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config();
    let _log_guard = logging::init(&config.log)?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(server::run_server(config))
}
