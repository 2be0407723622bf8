//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Treeview data tools: stratify flat records and build widget payloads
#[derive(Parser, Debug)]
#[command(name = "rstreeview")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug output, repeat for more verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a nested forest from flat records and print it as JSON
    Stratify {
        /// Flat records file: JSON array of {id, label, caption?, disabled?, parent?}
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Build the treeview payload for a mount point and print it as JSON
    Payload {
        /// Flat records file: JSON array of {id, label, caption?, disabled?, parent?}
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// Allow multiple selection
        #[arg(short, long)]
        multiple: bool,

        /// Initially selected item id (repeatable)
        #[arg(short, long)]
        selected: Vec<String>,

        /// Initially expanded item id (repeatable; omit entirely to
        /// auto-expand the ancestors of selected items)
        #[arg(short, long, num_args = 0..)]
        expanded: Option<Vec<String>>,
    },

    /// Print the forest as a tree on the terminal
    Show {
        /// Flat records file: JSON array of {id, label, caption?, disabled?, parent?}
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
