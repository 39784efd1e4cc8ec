use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use dotfont::{export_charset, format_c_array, rasterize, rasterize_str, write_c_source, FontResource};

use crate::console::render_preview;
mod console;

#[derive(Parser)]
#[command(name = "dotfont", about = "Convert dot font glyphs into C array initializers")]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Args)]
struct FontArgs {
    /// Path to a TrueType/OpenType dot font
    #[arg(short, long)]
    font: PathBuf,
    /// Square matrix size in pixels
    #[arg(short, long, default_value = "8")]
    size: usize,
    /// Font point size (defaults to the matrix size)
    #[arg(long)]
    point_size: Option<u32>,
}

impl FontArgs {
    fn open(&self) -> Result<FontResource> {
        let point_size = self.point_size.unwrap_or(self.size as u32);
        Ok(FontResource::open(&self.font, point_size)?)
    }
}

#[derive(Subcommand)]
enum Cmd {
    /// Convert a single character into a 2-D array
    Char {
        #[command(flatten)]
        font: FontArgs,
        #[arg(short, long)]
        text: String,
        /// Also print a text preview of the glyph
        #[arg(long)]
        preview: bool,
    },
    /// Convert every character of a string into a 3-D array
    #[command(name = "string")]
    Text {
        #[command(flatten)]
        font: FontArgs,
        #[arg(short, long)]
        text: String,
        #[arg(long)]
        preview: bool,
    },
    /// Export the A-Z, a-z, 0-9, ! and ? set as a C source file
    Export {
        #[command(flatten)]
        font: FontArgs,
        /// Array name (defaults to font_data_<size>)
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long, default_value = "array.c")]
        output: PathBuf,
        /// Comment line placed above the declaration
        #[arg(long)]
        title: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    match cli.command {
        Cmd::Char {
            font,
            text,
            preview,
        } => {
            let mut chars = text.trim().chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                bail!("enter exactly one character, got {text:?}");
            };
            let resource = font.open()?;
            let Some(matrix) = rasterize(ch, &resource, font.size) else {
                log::warn!("{ch:?} has no glyph in {}", resource.path().display());
                return Ok(());
            };
            let matrices = [matrix];
            if preview {
                println!("{}\n", render_preview(&matrices));
            }
            println!("{}", format_c_array(&matrices));
        }
        Cmd::Text {
            font,
            text,
            preview,
        } => {
            let text = text.trim();
            if text.is_empty() {
                bail!("text is empty");
            }
            let resource = font.open()?;
            let matrices = rasterize_str(text, &resource, font.size);
            if matrices.is_empty() {
                log::warn!("no character of {text:?} has a glyph in {}", resource.path().display());
                return Ok(());
            }
            if preview {
                println!("{}\n", render_preview(&matrices));
            }
            println!("{}", format_c_array(&matrices));
        }
        Cmd::Export {
            font,
            name,
            output,
            title,
        } => {
            let resource = font.open()?;
            let size = font.size;
            let name = name.unwrap_or_else(|| format!("font_data_{size}"));
            let title = title.unwrap_or_else(|| format!("{size}x{size} Font Data ({})", resource.name()));
            let declaration = export_charset(&resource, size, &name);
            if declaration.is_empty() {
                bail!("{} has no glyphs for the export set", resource.path().display());
            }
            write_c_source(BufWriter::new(File::create(&output)?), &title, &declaration)?;
            eprintln!("Exported {name} ({size}x{size}) -> {}", output.display());
        }
    }
    Ok(())
}
