// recibo - terminal entry form for receipt amounts
//
// Wiring only: parse the CLI, load configuration, initialize logging, and
// hand off to either a one-shot subcommand or the interactive form. All
// actual behavior lives in the library.

use anyhow::Result;
use clap::Parser;
use recibo::cli::{self, Cli};
use recibo::config::Config;
use recibo::logging::{LogBuffer, TuiLogLayer};
use recibo::tui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let args = Cli::parse();

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();
    let config = Config::from_env();

    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("recibo={}", config.log_level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    match args.command {
        Some(command) => {
            // One-shot mode: plain stderr logging, stdout stays clean for
            // the command's own output
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();

            cli::run(command, &config)
        }
        None => {
            // TUI mode: capture logs to a buffer so they render inside the
            // form instead of garbling the alternate screen.
            //
            // The appender guard must outlive the form so file logs flush.
            let log_buffer = LogBuffer::new();
            let _file_guard = init_tui_logging(&config, &log_buffer, filter);

            tui::run(&config, log_buffer)
        }
    }
}

/// Initialize tracing for TUI mode, optionally with a rotating file layer
fn init_tui_logging(
    config: &Config,
    log_buffer: &LogBuffer,
    filter: EnvFilter,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    if config.log_to_file {
        if let Err(e) = std::fs::create_dir_all(&config.log_dir) {
            eprintln!(
                "Warning: could not create log directory {:?}: {}",
                config.log_dir, e
            );
        } else {
            let file_appender = tracing_appender::rolling::daily(&config.log_dir, "recibo.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
                .init();
            return Some(guard);
        }
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(TuiLogLayer::new(log_buffer.clone()))
        .init();
    None
}
