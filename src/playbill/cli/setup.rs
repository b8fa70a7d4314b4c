use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "playbill", bin_name = "playbill", version)]
#[command(about = "Run a screening and print what the observers saw", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.json (defaults to ./.playbill)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub config_dir: Option<PathBuf>,

    /// Suppress separator lines
    #[arg(long, global = true, help_heading = "Options")]
    pub no_separators: bool,

    /// Suppress "adding Observer" lines
    #[arg(long, global = true, help_heading = "Options")]
    pub quiet_observers: bool,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run a screening script (the default)
    #[command(display_order = 1)]
    Run {
        /// Load the script from a JSON file instead of the built-in screening
        #[arg(long, value_name = "FILE")]
        script: Option<PathBuf>,
    },

    /// Print the built-in screening script as JSON
    #[command(display_order = 2)]
    Script,
}
