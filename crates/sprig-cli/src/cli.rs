//! Command-line interface definition.
//!
//! ```bash
//! # Compile an export into ./site/components/*.astro and ./site/index.astro
//! sprig compile landing.json --out site
//!
//! # Two stages, with the analysis edited in between
//! sprig analyze landing.json > frames.json
//! sprig generate frames.json --out site
//!
//! # Print the file key and embed URL of a design link
//! sprig file-key https://www.figma.com/file/AbC123/Landing
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sprig")]
#[command(version)]
#[command(about = "Compile design exports into Astro components", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log every frame decision
    #[arg(short = 'v', long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze and generate in one step
    Compile {
        /// Design export (JSON); `-` reads stdin
        input: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
        #[command(flatten)]
        options: OptionArgs,
    },

    /// Print the analyzed frames as JSON
    Analyze {
        /// Design export (JSON); `-` reads stdin
        input: PathBuf,
        #[command(flatten)]
        options: OptionArgs,
    },

    /// Generate components from analyzed frames
    Generate {
        /// Analyzed frames (JSON), as printed by `analyze`; `-` reads stdin
        frames: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
        #[command(flatten)]
        options: OptionArgs,
    },

    /// Print the file key and embed URL of a design link
    FileKey {
        url: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Directory to write `index.astro` and the components into
    #[arg(short, long, default_value = ".", conflicts_with = "json")]
    pub out: PathBuf,

    /// Print the compilation as JSON instead of writing files
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct OptionArgs {
    /// Options file (JSON); flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Page title
    #[arg(long, env = "SPRIG_PAGE_TITLE")]
    pub title: Option<String>,

    /// Leave the Tailwind script out of the page head
    #[arg(long)]
    pub no_tailwind: bool,
}
