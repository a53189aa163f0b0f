use anyhow::Result;
use clap::Parser;

use id3scan::cli::Cli;
use id3scan::formatters::Writer;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_level())),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut writer = Writer::stdout();
    id3scan::run(&cli, &mut writer)
}
