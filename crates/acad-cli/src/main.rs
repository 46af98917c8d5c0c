#![allow(clippy::unused_async)]

use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;
mod progress;
mod ui;

#[cfg(test)]
mod testing;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("acad error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(&flags)?;
    ui::init(&flags);

    // Schema output needs neither config nor a data directory.
    if let cli::Commands::Schema(args) = &cli.command {
        return commands::schema::handle(args, &flags);
    }

    let config = acad_config::AcadConfig::load_with_dotenv()
        .context("failed to load acad configuration")?;
    context::warn_unconfigured(&config);

    let mut ctx = context::AppContext::init(config, flags.data_dir.as_deref())
        .context("failed to initialize acad application context")?;
    tracing::debug!(data_dir = %ctx.data_dir.display(), "using data directory");

    commands::dispatch::dispatch(cli.command, &mut ctx, &flags).await
}

/// Default log level when `ACAD_LOG` is unset. `--quiet` wins over `--verbose`.
const fn log_level(flags: &cli::GlobalFlags) -> &'static str {
    if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        "warn"
    }
}

fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("ACAD_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level(flags)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{cli::Cli, log_level};

    fn level_for(args: &[&str]) -> &'static str {
        let cli = Cli::try_parse_from(args).unwrap();
        log_level(&cli.global_flags())
    }

    #[test]
    fn verbose_flag_selects_debug_logging() {
        assert_eq!(level_for(&["acad", "--verbose", "dashboard"]), "debug");
        assert_eq!(level_for(&["acad", "dashboard"]), "warn");
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(level_for(&["acad", "-q", "-v", "dashboard"]), "error");
    }
}
