use std::path::PathBuf;

use arrange_model::{SortColumn, SortSpecification};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "arrangectl",
    version,
    about = "Sort directory listings and manage named sort presets"
)]
pub struct Cli {
    /// Preset document to read and write (overrides config and
    /// ARRANGE_PRESETS_FILE)
    #[arg(long, global = true, value_name = "PATH")]
    pub presets_file: Option<PathBuf>,

    /// Configuration file (TOML or JSON)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List a directory in the requested order
    Sort(SortArgs),
    /// Manage saved sort presets
    Presets {
        #[command(subcommand)]
        action: PresetAction,
    },
    /// Print the effective configuration and where it came from
    Config,
}

#[derive(Debug, Args)]
pub struct SortArgs {
    /// Directory to list
    pub dir: PathBuf,

    /// Start from a saved preset; flags below still override it
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    #[command(flatten)]
    pub order: OrderArgs,

    /// Disable numeric-aware name comparison
    #[arg(long)]
    pub no_natural: bool,

    /// Compare text columns case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    /// Include dotfiles
    #[arg(long)]
    pub hidden: bool,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Flags shared by `sort` and `presets save`.
#[derive(Debug, Args)]
pub struct OrderArgs {
    /// Column to sort by: name, size, type, modified, created, extension
    #[arg(long, value_name = "COLUMN")]
    pub column: Option<SortColumn>,

    /// Sort in descending order
    #[arg(long)]
    pub descending: bool,

    /// Mix directories in with files instead of listing them first
    #[arg(long)]
    pub no_folders_first: bool,
}

impl OrderArgs {
    /// Overlay the flags that were given on top of `base`.
    pub fn apply_to(&self, mut spec: SortSpecification) -> SortSpecification {
        if let Some(column) = self.column {
            spec.column = column;
        }
        if self.descending {
            spec.ascending = false;
        }
        if self.no_folders_first {
            spec.folders_first = false;
        }
        spec
    }
}

#[derive(Debug, Subcommand)]
pub enum PresetAction {
    /// List saved presets in creation order
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show one preset as JSON
    Show { name: String },
    /// Save the given ordering under NAME, replacing any preset with that name
    Save {
        name: String,
        #[command(flatten)]
        order: OrderArgs,
    },
    /// Delete a preset; deleting a missing preset is not an error
    Delete { name: String },
}
