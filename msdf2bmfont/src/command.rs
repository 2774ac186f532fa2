//! The command line interface.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use write_bmfont::{Format, RecordOrder};

use crate::{convert, ConvertOptions, Error};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Convert msdf-atlas-gen JSON font descriptions into BMFont files."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert an MSDF JSON description into a BMFont file
    Convert(ConvertArgs),
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// The MSDF JSON file written by msdf-atlas-gen.
    pub source: PathBuf,

    /// The file name of the atlas image, as it should appear in the font.
    #[arg(long)]
    pub image: String,

    /// The BMFont encoding to write.
    #[arg(long, value_enum, default_value_t = OutputFormat::Xml)]
    pub format: OutputFormat,

    /// Where to write the font; defaults to the source path with a `.fnt`
    /// extension.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write characters in ascending codepoint order instead of glyph order.
    #[arg(long)]
    pub sort: bool,
}

/// The BMFont encodings.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Xml,
    Text,
    Binary,
}

impl From<OutputFormat> for Format {
    fn from(src: OutputFormat) -> Format {
        match src {
            OutputFormat::Xml => Format::Xml,
            OutputFormat::Text => Format::Text,
            OutputFormat::Binary => Format::Binary,
        }
    }
}

impl ConvertArgs {
    /// The path the font will be written to.
    pub fn destination(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_destination(&self.source))
    }

    fn record_order(&self) -> RecordOrder {
        if self.sort {
            RecordOrder::Ascending
        } else {
            RecordOrder::Insertion
        }
    }
}

/// `font.json` becomes `font.fnt`.
fn default_destination(source: &Path) -> PathBuf {
    source.with_extension("fnt")
}

/// Run a command, returning the path of the file it wrote.
pub fn run(command: Command) -> Result<PathBuf, Error> {
    match command {
        Command::Convert(args) => run_convert(&args),
    }
}

fn run_convert(args: &ConvertArgs) -> Result<PathBuf, Error> {
    let font = read_msdf::read_font_from_path(&args.source).map_err(|source| Error::Read {
        path: args.source.clone(),
        source,
    })?;
    let bitmap = convert(&font, &ConvertOptions::new(args.image.as_str()));

    let destination = args.destination();
    log::debug!(
        "writing {:?} to {}",
        args.format,
        destination.display()
    );
    Format::from(args.format)
        .writer(args.record_order())
        .write_font_to_path(&bitmap, &destination)
        .map_err(|source| Error::Write {
            path: destination.clone(),
            source,
        })?;
    Ok(destination)
}
