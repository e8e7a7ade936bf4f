use anyhow::Result;
use clap::Parser;
use insider_risk::cli::Cli;
use log::LevelFilter;
use std::io::Write;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    insider_risk::commands::run(cli, &mut out)?;
    out.flush()?;
    Ok(())
}

// RUST_LOG, when set, overrides the -v level
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
