//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum, ValueHint};
use clap_complete::Shell;

/// Render work-breakdown outlines as radial mind maps, markdown lists, or ASCII trees
#[derive(Parser, Debug)]
#[command(name = "wbsmap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Outline document to render (default from settings: data/outline.json)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Path for the exported artifact (defaults per format)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Png)]
    pub format: Format,

    /// Resolution in dots per plan unit (raster output only)
    #[arg(long, default_value_t = 300)]
    pub dpi: u32,

    /// Enable debug output (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Show author and version
    #[arg(long)]
    pub info: bool,
}

/// Export formats for the rendered outline.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Radial mind-map diagram, raster
    Png,
    /// Radial mind-map diagram, vector
    Svg,
    /// Nested markdown list
    Markdown,
    /// Box-drawing text tree
    Ascii,
}

impl Format {
    /// Default artifact file name for this format.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Format::Png => "wbs-map.png",
            Format::Svg => "wbs-map.svg",
            Format::Markdown => "wbs-map.md",
            Format::Ascii => "wbs-diagram.txt",
        }
    }

    /// Whether this format goes through the radial layout engine.
    pub fn needs_layout(&self) -> bool {
        matches!(self, Format::Png | Format::Svg)
    }
}
