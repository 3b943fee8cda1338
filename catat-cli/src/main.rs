use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use catat_core::calendar::today_in;
use catat_parse::{parse_period_detailed, route};

mod chat;
mod config;
mod export;
mod ledger;
mod reply;
mod session;
mod state;

use export::Format;

#[derive(Parser, Debug)]
#[command(name = "catat", version, about = "Expense notes from Indonesian chat messages")]
struct Cli {
    /// Log parser decisions to stderr (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (default: $CATAT_HOME/config.toml or ~/.catat/config.toml)
    #[arg(long, global = true, env = "CATAT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Route one message and print what it is
    Parse {
        /// Message text (joined with spaces)
        message: Vec<String>,

        /// Read the message from stdin instead (keeps line breaks)
        #[arg(long)]
        stdin: bool,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Parse a period description like "jan 2024 hingga jun 2025"
    Period {
        #[arg(required = true)]
        args: Vec<String>,
    },

    /// Talk to the bookkeeping bot on stdin
    Chat {
        /// Sender id checked against the access whitelist
        #[arg(long, default_value = "local")]
        sender: String,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,

    /// Print the effective config
    Show,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Parse {
            message,
            stdin,
            format,
        } => {
            let text = if stdin {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("read stdin")?;
                buf
            } else {
                message.join(" ")
            };
            if text.trim().is_empty() {
                bail!("empty message (pass text or --stdin)");
            }

            let routed = route(&text);
            match format {
                Format::Text => println!("{}", export::text(&routed)),
                Format::Json => export::write_json(&routed, std::io::stdout().lock())?,
                Format::Csv => {
                    let cfg = config::load_config(config_path)?;
                    let today = today_in(&cfg.locale.timezone)?;
                    export::write_csv(&routed, today, std::io::stdout().lock())?;
                }
            }
        }

        Command::Period { args } => {
            let args = args.join(" ");
            let period = parse_period_detailed(&args)
                .with_context(|| format!("not a period: {args}"))?;
            println!("{}", export::period_text(&period));
        }

        Command::Chat { sender } => {
            let cfg = config::load_config(config_path)?;
            chat::run_chat(&cfg, &sender)?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config(config_path)?,
            ConfigCommand::Show => {
                let cfg = config::load_config(config_path)?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}
