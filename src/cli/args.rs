//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum, ValueHint};

use crate::domain::DataFormat;

/// Render documentation navigation trees into sidebar and content-frame markup
#[derive(Parser, Debug)]
#[command(name = "navtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Project directory for local config (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub project_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Navigation data format override.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Json,
    Yaml,
    Toml,
}

impl From<FormatArg> for DataFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => DataFormat::Json,
            FormatArg::Yaml => DataFormat::Yaml,
            FormatArg::Toml => DataFormat::Toml,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render navigation data to page markup
    Render {
        /// Navigation data file (.json, .yaml, .yml, .toml)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Write to file instead of stdout (default: config `output`)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
        /// Force input format instead of detecting from extension
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
        /// Render only the nested list, without the page shell
        #[arg(long)]
        nav_only: bool,
        /// Print to stdout even if config sets an output file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// Show navigation data as tree
    Tree {
        /// Navigation data file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Force input format instead of detecting from extension
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
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
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Create global config
        #[arg(short, long)]
        global: bool,
    },

    /// Show config paths
    Path,

    /// Edit config file
    Edit {
        /// Edit global config
        #[arg(short, long)]
        global: bool,
    },
}
