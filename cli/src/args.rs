//! CLI argument parsing with clap.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use logo_rendr::{Charset, ColorMode, RenderOptions};

/// Subcommand assumed when the first argument is not one.
const DEFAULT_COMMAND: &str = "convert";

/// Arguments that are handled by the top-level parser itself.
const TOP_LEVEL: &[&str] = &["convert", "init", "help", "-h", "--help", "-V", "--version"];

/// Convert images to ASCII art for CLI branding
#[derive(Parser, Debug)]
#[command(name = "cli-logo")]
#[command(version, about = "Convert images to ASCII art for CLI branding", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert an image to ASCII art (default)
    Convert(ConvertArgs),
    /// Create a branded CLI wrapper with your logo
    Init(InitArgs),
}

/// Options shared by every command that renders an image
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Color mode
    #[arg(short, long, default_value = "truecolor")]
    pub color: ColorChoice,

    /// Character set
    #[arg(short = 's', long, default_value = "blocks")]
    pub charset: CharsetChoice,

    /// Invert brightness mapping
    #[arg(short, long)]
    pub invert: bool,

    /// Treat white background as transparent
    #[arg(short, long)]
    pub bg_transparent: bool,

    /// White threshold (0-255)
    #[arg(long, default_value_t = 250)]
    pub bg_threshold: u8,
}

impl RenderArgs {
    pub fn to_options(&self, width: u32) -> RenderOptions {
        RenderOptions {
            width,
            color_mode: self.color.into(),
            charset: self.charset.into(),
            invert: self.invert,
            background_transparent: self.bg_transparent,
            background_threshold: u32::from(self.bg_threshold),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Path to the image file
    pub image: PathBuf,

    /// Width in characters
    #[arg(short, long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    #[command(flatten)]
    pub render: RenderArgs,

    /// Add a title below the logo
    #[arg(short, long)]
    pub title: Option<String>,

    /// Version to display with title
    #[arg(short = 'v', long)]
    pub ver: Option<String>,

    /// Subtitle text
    #[arg(long)]
    pub subtitle: Option<String>,

    /// Save output to file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Generate reusable JavaScript code
    #[arg(long)]
    pub code: bool,
}

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Path to the image file
    pub image: PathBuf,

    /// Name for your CLI (used for output file)
    pub name: String,

    /// Width in characters
    #[arg(short, long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    #[command(flatten)]
    pub render: RenderArgs,

    /// Title to display (defaults to the CLI name)
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Version to display
    #[arg(short = 'v', long, default_value = "1.0.0")]
    pub ver: String,

    /// Subtitle text
    #[arg(long)]
    pub subtitle: Option<String>,

    /// Shell to use (default: $SHELL)
    #[arg(long)]
    pub shell: Option<String>,

    /// Wrapper type
    #[arg(long = "type", default_value = "both")]
    pub kind: WrapperType,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,
}

/// Terminal color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    None,
    #[value(name = "256")]
    Ansi256,
    #[default]
    Truecolor,
}

impl From<ColorChoice> for ColorMode {
    fn from(c: ColorChoice) -> Self {
        match c {
            ColorChoice::None => ColorMode::None,
            ColorChoice::Ansi256 => ColorMode::Indexed256,
            ColorChoice::Truecolor => ColorMode::Truecolor,
        }
    }
}

/// Character set for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CharsetChoice {
    Detailed,
    Simple,
    #[default]
    Blocks,
}

impl From<CharsetChoice> for Charset {
    fn from(c: CharsetChoice) -> Self {
        match c {
            CharsetChoice::Detailed => Charset::Detailed,
            CharsetChoice::Simple => Charset::Simple,
            CharsetChoice::Blocks => Charset::Blocks,
        }
    }
}

/// Which wrapper scripts `init` writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum WrapperType {
    Bash,
    Node,
    #[default]
    Both,
}

/// Insert the default subcommand when none is given
///
/// `cli-logo logo.png -w 40` is treated as `cli-logo convert logo.png -w 40`.
pub fn with_default_command<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().collect();
    let needs_default = match args.get(1).and_then(|arg| arg.to_str()) {
        Some(first) => !TOP_LEVEL.contains(&first),
        // Non UTF-8 paths can only be an image argument
        None => args.len() > 1,
    };
    if needs_default {
        args.insert(1, OsString::from(DEFAULT_COMMAND));
    }
    args
}
