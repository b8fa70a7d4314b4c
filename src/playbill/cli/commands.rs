//! # CLI Layer
//!
//! The only place that knows about terminal I/O, logging setup and process
//! exit. Everything else is a call into the library.
//!
//! ## Structure
//!
//! - `run()`: parse, set up logging, build the context, dispatch
//! - `init_context()`: loads config and applies flag overrides
//! - `handle_*()`: per-command handlers that call the library and print

use super::render::print_transcript;
use super::setup::{Cli, Commands};
use clap::Parser;
use log::debug;
use playbill::config::PlaybillConfig;
use playbill::error::Result;
use playbill::script::{self, Script};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_DIR: &str = ".playbill";

struct AppContext {
    config: PlaybillConfig,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Run { script }) => handle_run(&ctx, script.as_deref()),
        Some(Commands::Script) => handle_script(),
        None => handle_run(&ctx, None),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = cli.config_dir.clone().unwrap_or_else(|| {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(DEFAULT_CONFIG_DIR)
    });
    debug!("loading config from {}", config_dir.display());

    let mut config = PlaybillConfig::load(&config_dir)?;
    if cli.no_separators {
        config.show_separators = false;
    }
    if cli.quiet_observers {
        config.announce_observers = false;
    }

    let use_color = !cli.no_color && console::Term::stdout().features().colors_supported();

    Ok(AppContext { config, use_color })
}

fn handle_run(ctx: &AppContext, script_path: Option<&Path>) -> Result<()> {
    let screening = match script_path {
        Some(path) => {
            debug!("loading script from {}", path.display());
            Script::load(path)?
        }
        None => Script::default_screening(),
    };

    let transcript = script::run(&screening, &ctx.config)?;
    print_transcript(&transcript, ctx.use_color);
    Ok(())
}

fn handle_script() -> Result<()> {
    println!("{}", Script::default_screening().to_json()?);
    Ok(())
}
