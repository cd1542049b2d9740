use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "zam",
    bin_name = "zam",
    version,
    disable_help_subcommand = true,
    after_help = "Filters are named after their URL parameters:\n  article mission auteur amendement gouvernemental objet avis\n  reponse table emptytable modified dossierDeBanc"
)]
#[command(about = "Replay amendment list filters from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Page snapshot (JSON) to filter
    #[arg(short, long, global = true, value_name = "FILE", help_heading = "Options")]
    pub page: Option<PathBuf>,

    /// Page URL whose query holds the filters to restore
    #[arg(short, long, global = true, value_name = "URL", help_heading = "Options")]
    pub url: Option<String>,

    /// Print JSON instead of a table
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Configuration file (TOML)
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List visible rows (default)
    #[command(alias = "ls")]
    List {
        /// Also show hidden rows and what hides them
        #[arg(short, long)]
        all: bool,
    },

    /// Type a value into a filter (no value clears it)
    Set {
        filter: String,
        #[arg(default_value = "")]
        value: String,
    },

    /// Activate a cyclic filter button (objet, avis, reponse, modified, dossierDeBanc)
    Cycle {
        filter: String,

        /// Number of activations
        #[arg(short = 'n', long, default_value_t = 1)]
        times: usize,
    },

    /// Check a checkbox filter (gouvernemental, emptytable)
    Check {
        filter: String,

        /// Uncheck instead
        #[arg(long)]
        off: bool,
    },

    /// Keep rows carrying every given tag (no tag clears the selection)
    Tags { tags: Vec<String> },

    /// Check rows by amendement number and show the group actions
    Select {
        /// Amendement numbers
        nums: Vec<String>,

        /// Click "select all" first
        #[arg(short, long)]
        all: bool,

        /// Group action link to fill with the selection
        #[arg(long, value_name = "URL")]
        link: Option<String>,
    },
}
