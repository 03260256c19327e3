use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use folio_pdf::{Base14, Margins, PageFormat};

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// More log output, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Typeset a plain text file
    Text(TextArgs),
    /// Put a PNG or JPEG image on a page
    Image(ImageArgs),
}

#[derive(Args)]
pub struct TextArgs {
    pub file: PathBuf,

    #[command(flatten)]
    pub page: PageArgs,

    /// One of the 14 standard fonts, e.g. Helvetica or Times-Roman
    #[arg(long, default_value = "Helvetica")]
    pub font: Base14,

    /// Font size in points
    #[arg(long, default_value_t = 12.0)]
    pub size: f64,

    /// Line width in characters
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Margins in cm: one value, or top,right,bottom,left
    #[arg(long, default_value = "2.5", value_parser = parse_margins)]
    pub margins: Margins,

    /// Stretch lines to the full width between the margins. Paragraph breaks
    /// are not kept, and the last line of every page stays left aligned
    #[arg(long)]
    pub justify: bool,
}

#[derive(Args)]
pub struct ImageArgs {
    pub file: PathBuf,

    #[command(flatten)]
    pub page: PageArgs,

    /// Margins in cm: one value, or top,right,bottom,left
    #[arg(long, default_value = "2.54", value_parser = parse_margins)]
    pub margins: Margins,
}

#[derive(Args)]
pub struct PageArgs {
    /// Output file, defaults to the input name with a .pdf extension
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::A4)]
    pub format: Format,

    /// Compress content streams
    #[arg(long)]
    pub compress: bool,

    /// Clockwise page rotation: 90, 180 or 270
    #[arg(long)]
    pub rotate: Option<i64>,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub author: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Format {
    A4,
    Letter,
}

impl From<Format> for PageFormat {
    fn from(value: Format) -> Self {
        match value {
            Format::A4 => PageFormat::A4,
            Format::Letter => PageFormat::LETTER,
        }
    }
}

fn parse_margins(source: &str) -> Result<Margins, String> {
    let values = source
        .split(',')
        .map(|value| {
            value
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("invalid margin: {value:?}"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    match values.as_slice() {
        [all] => Ok(Margins::uniform(*all)),
        [top, right, bottom, left] => Ok(Margins::new(*top, *right, *bottom, *left)),
        _ => Err(format!("expected 1 or 4 margins, got {}", values.len())),
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
