//! Command-line definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use placard_render::{Align, Rgba};
use placard_studio::{FontFilter, SchemeKind, Template};

/// Placard - styled text banners from the command line
#[derive(Parser, Debug)]
#[command(name = "placard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// API key for the suggestion service
    /// (falls back to PLACARD_API_KEY, then OPENAI_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render text to a PNG banner
    #[command(alias = "r")]
    Render(Box<RenderArgs>),

    /// Suggest banner texts for a description
    #[command(alias = "s")]
    Suggest(SuggestArgs),

    /// List catalog font families
    Fonts(FontsArgs),

    /// List quick-start templates
    Templates,

    /// Write the preview placeholder image
    Placeholder(PlaceholderArgs),
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Banner text; `\n` starts a new line
    pub text: Option<String>,

    /// Read the text from a file (`-` for stdin)
    #[arg(short = 'T', long = "text-file", conflicts_with_all = ["text", "random_text"])]
    pub text_file: Option<PathBuf>,

    /// Use a random banner phrase
    #[arg(long, conflicts_with = "text")]
    pub random_text: bool,

    /// Start from a JSON design file
    #[arg(short = 'd', long)]
    pub design: Option<PathBuf>,

    /// Apply a template before the other options
    #[arg(short = 't', long)]
    pub template: Option<Template>,

    /// Pick colors from a palette
    #[arg(long, value_enum)]
    pub scheme: Option<SchemeArg>,

    /// Seed for random picks (defaults to the clock)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Font family name, file name or path
    #[arg(short = 'f', long)]
    pub font: Option<String>,

    /// Font size in pixels (40-150)
    #[arg(short = 's', long)]
    pub size: Option<u32>,

    /// Background color (#RRGGBB or name)
    #[arg(long = "bg")]
    pub background: Option<Rgba>,

    /// Text color (#RRGGBB or name)
    #[arg(long = "fg")]
    pub foreground: Option<Rgba>,

    /// Alignment: left, center, right
    #[arg(short = 'a', long)]
    pub align: Option<Align>,

    /// Horizontal padding in pixels (20-150)
    #[arg(long)]
    pub padding: Option<f32>,

    /// Line spacing factor (1.0-3.0)
    #[arg(long)]
    pub line_spacing: Option<f32>,

    /// Canvas width
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height
    #[arg(long)]
    pub height: Option<u32>,

    /// Extra directory to search for fonts (repeatable)
    #[arg(long = "font-dir")]
    pub font_dirs: Vec<PathBuf>,

    /// Output file (defaults to design_N.png in the output directory)
    #[arg(short = 'o', long)]
    pub out: Option<PathBuf>,

    /// Output directory for numbered designs
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Skip the design feedback request
    #[arg(long)]
    pub no_feedback: bool,
}

#[derive(Parser, Debug)]
pub struct SuggestArgs {
    /// What the banner is for
    #[arg(required = true)]
    pub prompt: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct FontsArgs {
    /// all, sans-serif, serif, monospace, casual, bold
    #[arg(short = 'c', long, default_value = "all")]
    pub category: FontFilter,

    /// Extra directory to search for fonts (repeatable)
    #[arg(long = "font-dir")]
    pub font_dirs: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct PlaceholderArgs {
    /// Family named on the placeholder
    #[arg(short = 'f', long)]
    pub font: Option<String>,

    #[arg(short = 'o', long, default_value = "placeholder.png")]
    pub out: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SchemeArg {
    Suggested,
    HighContrast,
}

impl From<SchemeArg> for SchemeKind {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Suggested => SchemeKind::Suggested,
            SchemeArg::HighContrast => SchemeKind::HighContrast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "placard", "render", "HELLO", "--bg", "#2C3E50", "--fg", "white", "-a", "center", "-t", "elegant",
        ])
        .unwrap();
        let Commands::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.text.as_deref(), Some("HELLO"));
        assert_eq!(args.background, Some(Rgba::rgb(0x2C, 0x3E, 0x50)));
        assert_eq!(args.foreground, Some(Rgba::white()));
        assert_eq!(args.align, Some(Align::Center));
        assert_eq!(args.template, Some(Template::Elegant));
    }

    #[test]
    fn test_parse_rejects_bad_color() {
        assert!(Cli::try_parse_from(["placard", "render", "HI", "--bg", "nope"]).is_err());
    }

    #[test]
    fn test_parse_fonts_category() {
        let cli = Cli::try_parse_from(["placard", "fonts", "-c", "bold"]).unwrap();
        let Commands::Fonts(args) = cli.command else {
            panic!("expected fonts");
        };
        assert_eq!(args.category, FontFilter::Bold);
    }

    #[test]
    fn test_global_api_key() {
        let cli = Cli::try_parse_from(["placard", "suggest", "bakery", "slogan", "--api-key", "sk-x"]).unwrap();
        assert_eq!(cli.api_key.as_deref(), Some("sk-x"));
    }
}
