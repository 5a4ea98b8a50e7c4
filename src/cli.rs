use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use deployinfo::config::OutputFormat;

/// deployinfo - resolve a build target's deploy info into installable packages
#[derive(Parser, Debug)]
#[command(name = "deployinfo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to ./deployinfo.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Shorthand for --format json
    #[arg(long, global = true, conflicts_with = "format")]
    pub json: bool,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to look for build outputs
#[derive(Args, Debug, Clone, Default)]
pub struct LookupArgs {
    /// Directory descriptor paths are relative to
    #[arg(long)]
    pub execution_root: Option<PathBuf>,

    /// Build output tree (relative paths are taken from the execution root)
    #[arg(long)]
    pub output_root: Option<PathBuf>,

    /// File suffix of the deploy info output
    #[arg(long)]
    pub suffix: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a target's deploy info into manifests and packages
    Plan {
        /// Build target label, e.g. //java/com/app:app
        target: String,

        #[command(flatten)]
        lookup: LookupArgs,
    },

    /// Print the path of a target's deploy info file
    Locate {
        /// Build target label, e.g. //java/com/app:app
        target: String,

        #[command(flatten)]
        lookup: LookupArgs,
    },

    /// Decode a deploy info file and print its contents
    Dump {
        /// Path to a deploy info file
        file: PathBuf,
    },
}

impl Cli {
    /// Explicit format choice, if any flag asked for one
    pub fn format_override(&self) -> Option<OutputFormat> {
        if self.json {
            Some(OutputFormat::Json)
        } else {
            self.format
        }
    }
}
