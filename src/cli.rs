use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::formatting::ColorMode;
use crate::io::OutputFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Highlighted sentences with a legend and grade summary
    Terminal,
    /// Machine-readable report
    Json,
    /// Markdown tables
    Markdown,
}

fn parse_color_mode(value: &str) -> Result<ColorMode, String> {
    ColorMode::parse(value)
        .ok_or_else(|| format!("invalid color mode '{value}' (expected auto, always, or never)"))
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Terminal => OutputFormat::Terminal,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Markdown => OutputFormat::Markdown,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "storyscribe")]
#[command(about = "Highlight complex and passive sentences and estimate reading grade", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a story draft for readability
    Analyze {
        /// Text file to analyze; reads stdin when omitted or "-"
        path: Option<PathBuf>,

        /// Output format (defaults to the config file's default_format)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Word count above which a sentence is complex
        #[arg(long = "complex-threshold", value_parser = clap::value_parser!(u32).range(1..))]
        complex_threshold: Option<u32>,

        /// When to color terminal output: auto, always, never
        #[arg(long, value_name = "WHEN", value_parser = parse_color_mode, conflicts_with = "plain")]
        color: Option<ColorMode>,

        /// Plain output: no colors, no emoji
        #[arg(long)]
        plain: bool,

        /// Increase log verbosity (-v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Write a default .storyscribe.toml in the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Commands::Analyze { verbosity, .. } => *verbosity,
            Commands::Init { .. } => 0,
        }
    }
}
