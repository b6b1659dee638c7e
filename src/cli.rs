// CLI module - command-line argument parsing and handlers
//
// One-shot subcommands beside the interactive form:
// - format: raw text -> canonical text, numeric value, written-out clause
// - words: amount -> written-out clause only
// - config --show/--reset/--path: config file management
//
// `--json` emits one object holding canonical text, numeric value and the
// clause together, all derived from the same parse, so downstream consumers
// never re-derive one from another.

use crate::config::{Config, VERSION};
use crate::money::formatter::{normalize, to_number};
use crate::money::verbalizer::verbalize;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

/// Receipt amount entry - canonical formatting and "por extenso" clause
#[derive(Parser)]
#[command(name = "recibo")]
#[command(version = VERSION)]
#[command(about = "Terminal form for receipt amounts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format raw input into canonical amount text
    Format {
        /// Raw amount text, comma as the decimal separator (e.g. "1234,5")
        raw: String,

        /// Emit JSON with canonical text, numeric value and clause
        #[arg(long)]
        json: bool,
    },

    /// Spell an amount out in words
    Words {
        /// Amount text, comma as the decimal separator (e.g. "1.234,50")
        amount: String,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Handle a one-shot subcommand
pub fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Format { raw, json } => handle_format(&raw, json, config),
        Commands::Words { amount } => handle_words(&amount),
        Commands::Config { show, reset, path } => {
            handle_config(show, reset, path, config);
            Ok(())
        }
    }
}

fn handle_format(raw: &str, json: bool, config: &Config) -> Result<()> {
    let canonical = normalize(raw);
    let amount = to_number(&canonical).context("amount does not fit on a receipt")?;
    let clause = verbalize(amount);

    if json {
        let out = serde_json::json!({
            "canonical": canonical,
            "value": amount.to_f64(),
            "words": clause,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        let shown = if canonical.is_empty() {
            config.placeholder.as_str()
        } else {
            canonical.as_str()
        };
        println!("{} {}", config.symbol, shown);
        println!("{}.{:02}", amount.units(), amount.cents_part());
        println!("{clause}");
    }
    Ok(())
}

fn handle_words(amount: &str) -> Result<()> {
    let amount = to_number(&normalize(amount)).context("amount does not fit on a receipt")?;
    println!("{}", verbalize(amount));
    Ok(())
}

fn handle_config(show: bool, reset: bool, path: bool, config: &Config) {
    if path {
        match Config::config_path() {
            Some(p) => println!("{}", p.display()),
            None => println!("Could not determine config path"),
        }
    } else if show {
        print!("{}", config.to_toml());
    } else if reset {
        match Config::config_path() {
            Some(p) => {
                if let Some(parent) = p.parent() {
                    let _ = std::fs::create_dir_all(parent);
                }
                match std::fs::write(&p, Config::default().to_toml()) {
                    Ok(()) => println!("Config reset: {}", p.display()),
                    Err(e) => eprintln!("Could not write {}: {}", p.display(), e),
                }
            }
            None => eprintln!("Could not determine config path"),
        }
    } else {
        // No flag provided, show usage
        println!("Usage: recibo config [--show|--reset|--path]");
        println!();
        println!("Options:");
        println!("  --show   Display effective configuration");
        println!("  --reset  Reset config file to defaults");
        println!("  --path   Show config file path");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_format_parses() {
        let cli = Cli::parse_from(["recibo", "format", "1234,5", "--json"]);
        match cli.command {
            Some(Commands::Format { raw, json }) => {
                assert_eq!(raw, "1234,5");
                assert!(json);
            }
            _ => panic!("expected format subcommand"),
        }
    }

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::parse_from(["recibo"]);
        assert!(cli.command.is_none());
    }
}
