//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::config::TreeStyle;

/// Describe networks of computers and their hardware as tree diagrams
#[derive(Parser, Debug)]
#[command(name = "netinv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the network tree of an inventory manifest
    Render {
        /// Inventory manifest (default: configured inventory)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// Diagram style (default: configured style)
        #[arg(short, long, value_enum)]
        style: Option<TreeStyle>,
    },

    /// Print the subtree of one computer
    Find {
        /// Computer name (exact, case-sensitive)
        name: String,
        /// Inventory manifest (default: configured inventory)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// Diagram style (default: configured style)
        #[arg(short, long, value_enum)]
        style: Option<TreeStyle>,
    },

    /// Show counts and totals
    Summary {
        /// Inventory manifest (default: configured inventory)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Build the reference network, clone it and modify the clone
    Demo,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective config
    Show,

    /// Create global config template
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Show config path
    Path,
}
