//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::domain::{CategoryId, LanguageId};

/// Flat-to-tree category ordering: pre-order sequencing, indented labels and breadcrumb paths
#[derive(Parser, Debug)]
#[command(name = "cattree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print categories in tree order
    Sort {
        /// Category file (TOML)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Parent id whose children start the tree
        #[arg(long)]
        root_parent_id: Option<CategoryId>,
        /// Drop categories whose parent is not in the file
        #[arg(long)]
        ignore_orphans: bool,
    },

    /// Show categories as indented labels
    Tree {
        /// Category file (TOML)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Indentation unit
        #[arg(long)]
        indent: Option<String>,
        /// Language for localized names
        #[arg(short, long)]
        language: Option<LanguageId>,
        /// Hide aliases
        #[arg(long)]
        no_alias: bool,
        /// Draw tree lines instead of indentation
        #[arg(long)]
        graph: bool,
    },

    /// Print the breadcrumb path of one category
    Path {
        /// Category file (TOML)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Category id
        id: CategoryId,
        /// Language for localized names
        #[arg(short, long)]
        language: Option<LanguageId>,
        /// Separator between path elements
        #[arg(short, long)]
        separator: Option<String>,
        /// Alias pattern, {alias} is replaced by the alias
        #[arg(long)]
        alias_pattern: Option<String>,
    },

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
    /// Show effective settings
    Show,
    /// Print a config template
    Template,
    /// Print the global config path
    Path,
}
