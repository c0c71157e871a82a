use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tagsmith")]
#[command(about = "Build and maintain Dungeondraft tag files", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace directory holding the working document and session
    #[arg(short, long, global = true, default_value = ".tagsmith")]
    pub dir: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a tag workspace in the current directory
    Init,

    /// Load an existing tag file as the working document
    #[command(alias = "i")]
    Import {
        /// The previously exported tag file
        file: PathBuf,
    },

    /// Choose or create a tag and make it active
    #[command(alias = "u")]
    Use {
        /// The tag to work on
        tag: String,
    },

    /// Choose the asset folder files are drawn from
    Folder {
        /// Folder containing the asset files
        path: PathBuf,
    },

    /// List tags
    #[command(alias = "ls")]
    Tags,

    /// Add a tag without making it active
    Add {
        /// The tag to add
        tag: String,
    },

    /// Remove a tag and its entire selection
    #[command(alias = "rm")]
    Remove {
        /// The tag to remove
        tag: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// Replace the active tag's selection with exactly the given paths
    #[command(alias = "s")]
    Select {
        /// Paths relative to the asset folder (e.g. goblin/idle.png)
        #[arg(required = true, num_args = 1..)]
        paths: Vec<String>,
    },

    /// Add paths to the active tag's selection
    #[command(alias = "t")]
    Tag {
        /// Paths relative to the asset folder
        #[arg(required = true, num_args = 1..)]
        paths: Vec<String>,
    },

    /// Remove paths from the active tag's selection
    Untag {
        /// Paths relative to the asset folder
        #[arg(required = true, num_args = 1..)]
        paths: Vec<String>,
    },

    /// Show the selection for the active (or a named) tag
    Show {
        /// Tag to show instead of the active one
        tag: Option<String>,
    },

    /// List files in the asset folder, marking the active tag's selection
    Scan,

    /// Rewrite every stored path under a new prefix
    Prefix {
        /// The new prefix (e.g. "textures/")
        new_prefix: String,
    },

    /// Print the tag file as it will be exported
    #[command(alias = "p")]
    Preview,

    /// Write the tag file artifact
    #[command(alias = "x")]
    Export {
        /// Output path (defaults to the configured export file name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (export-filename or scan-extensions)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
