//! Moss Pole Guide CLI
//!
//! Usage:
//!   moss-pole-guide [OPTIONS] [FILE]
//!
//! Options:
//!   -f, --format <FORMAT>   Input format (json, toml); guessed from the extension
//!   -x, --example <NAME>    Render a bundled example instead of FILE
//!   -l, --list-examples     List bundled examples
//!   -o, --output <KIND>     svg, json, data-uri or html
//!   --seed <N>              Reproducible moss texture
//!   --schema                Show the document reference
//!   --new-pole              Print a starter pole entry
//!   -h, --help              Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process;

use base64::Engine;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use moss_pole_guide::{
    load_document, presets, render_document, Document, InputFormat, Pole, RenderConfig,
    RenderError, SvgConfig,
};

#[derive(Parser)]
#[command(name = "moss-pole-guide")]
#[command(about = "Render moss pole care guides as SVG")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Input format; guessed from the file extension when omitted
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Render a bundled example instead of reading input
    #[arg(short = 'x', long, conflicts_with = "input")]
    example: Option<String>,

    /// List bundled examples
    #[arg(short, long)]
    list_examples: bool,

    /// What to write to stdout
    #[arg(short, long, value_enum, default_value_t = OutputKind::Svg)]
    output: OutputKind,

    /// Seed for the moss texture, for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Prepend an XML declaration
    #[arg(long)]
    standalone: bool,

    /// Write SVG without indentation
    #[arg(long)]
    compact: bool,

    /// Font family for all guide text
    #[arg(long)]
    font: Option<String>,

    /// Show the document reference
    #[arg(long)]
    schema: bool,

    /// Print a starter pole entry to paste into a document
    #[arg(long)]
    new_pole: bool,

    /// Log pipeline details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Toml,
}

impl From<FormatArg> for InputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => InputFormat::Json,
            FormatArg::Toml => InputFormat::Toml,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputKind {
    /// The SVG document
    Svg,
    /// The validated document with defaults filled in
    Json,
    /// A base64 data URI of the SVG
    DataUri,
    /// A printable HTML page containing the SVG
    Html,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.schema {
        print_schema();
        return;
    }

    if cli.new_pole {
        match serde_json::to_string_pretty(&Pole::template()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    if cli.list_examples {
        for preset in presets::PRESETS {
            println!("{:<30} {}", preset.slug, preset.title);
        }
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && cli.example.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let document = match load(&cli) {
        Ok(doc) => doc,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(1);
        }
    };

    let output = match cli.output {
        OutputKind::Json => serde_json::to_string_pretty(&document).map_err(|e| e.to_string()),
        OutputKind::Svg => render_svg(&cli, &document),
        OutputKind::DataUri => render_svg(&cli, &document).map(|svg| data_uri(&svg)),
        OutputKind::Html => render_svg(&cli, &document).map(|svg| print_page(&svg)),
    };

    match output {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn render_svg(cli: &Cli, document: &Document) -> Result<String, String> {
    let mut svg_config = SvgConfig::default()
        .with_standalone(cli.standalone)
        .with_pretty_print(!cli.compact);
    if let Some(font) = &cli.font {
        svg_config = svg_config.with_font_family(font.as_str());
    }
    let mut config = RenderConfig::new().with_svg(svg_config);
    config.seed = cli.seed;

    render_document(document, &config).map_err(|e| e.to_string())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

/// Read, parse and validate the requested document, formatting any error for the terminal
fn load(cli: &Cli) -> Result<Document, String> {
    if let Some(slug) = &cli.example {
        let preset = presets::find(slug).ok_or_else(|| {
            format!(
                "Unknown example '{}'. Run --list-examples to see what is available.",
                slug
            )
        })?;
        return preset.load().map_err(|e| format!("Error: {}", e));
    }

    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => return Err(format!("Error reading file '{}': {}", path.display(), e)),
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                return Err(format!("Error reading from stdin: {}", e));
            }
            (buffer, "<stdin>".to_string())
        }
    };

    let format = match (cli.format, &cli.input) {
        (Some(arg), _) => arg.into(),
        (None, Some(path)) => InputFormat::from_path(path),
        (None, None) => InputFormat::Json,
    };
    tracing::debug!(?format, %filename, bytes = source.len(), "loading document");

    load_document(&source, format).map_err(|e| match e {
        RenderError::Parse(err) => err.format(&source, &filename),
        RenderError::Schema(err) => {
            let mut out = format!("Validation failed for '{}':", filename);
            for field in &err.errors {
                out.push_str(&format!("\n  - {}", field));
            }
            out
        }
        other => format!("Error: {}", other),
    })
}

fn data_uri(svg: &str) -> String {
    format!(
        "data:image/svg+xml;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(svg)
    )
}

fn print_page(svg: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Moss Pole Guide</title>
    <style>@media print {{ body {{ margin: 0; }} }}</style>
  </head>
  <body>
{}
  </body>
</html>"#,
        svg
    )
}

fn print_intro() {
    println!(
        r#"Moss Pole Guide - care guide diagrams for climbing plants

USAGE:
    moss-pole-guide [OPTIONS] [FILE]
    cat guide.json | moss-pole-guide

OPTIONS:
    -f, --format         Input format: json or toml
    -x, --example        Render a bundled example
    -l, --list-examples  List bundled examples
    -o, --output         svg (default), json, data-uri, html
    --seed               Reproducible moss texture
    --standalone         Prepend an XML declaration
    --compact            No indentation
    --font               Font family for guide text
    --schema             Document reference
    --new-pole           Starter pole entry as JSON
    -v, --verbose        Log pipeline details
    -h, --help           Print help

QUICK START:
    moss-pole-guide --example default > guide.svg

Run --schema for the document format."#
    );
}

fn print_schema() {
    println!(
        r##"MOSS POLE GUIDE DOCUMENT
========================

Documents are JSON or TOML with two top-level keys.

config (required)
-----------------
visual
    backgroundColor   "#RRGGBB"        default "#FFFFFF"
    textColor         "#RRGGBB"        default "#333333"
    algaePercentage   integer 0-100    default 10
    polesPerRow       integer 1-4      default 4
title
    enabled           boolean          default true
    text              non-empty text   default "Moss Pole Care Guide"
careTips
    enabled           boolean          default true
    tips              list of text     default four general tips

Every section may be omitted and takes its defaults.

poles (required, at least one)
------------------------------
    name                non-empty text
    humidityTop         "DD-DD"        e.g. "70-80", shown as 70-80%
    humidityMiddle      "DD-DD"
    humidityBottom      "DD-DD"
    potColor            "#RRGGBB"      optional, default "#cc7f63"
    displaySensorPlace  boolean        optional, default false

Unknown keys are ignored."##
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri_decodes_to_svg() {
        let uri = data_uri("<svg/>");
        let encoded = uri.strip_prefix("data:image/svg+xml;base64,").unwrap();
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .unwrap();
        assert_eq!(decoded, b"<svg/>");
    }

    #[test]
    fn test_print_page_wraps_svg() {
        let page = print_page("<svg/>");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<body>\n<svg/>\n  </body>"));
    }

    #[test]
    fn test_output_kinds_parse() {
        let cli = Cli::parse_from(["moss-pole-guide", "--output", "data-uri", "--new-pole"]);
        assert!(cli.output == OutputKind::DataUri);
        assert!(cli.new_pole);
    }
}
