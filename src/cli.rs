use crate::config::load_config;
use crate::ir::{parse_keywords, rank_keywords, related_keywords, summarize};
use crate::layout::compute_layout;
use crate::layout_dump::write_layout_dump;
use crate::logging;
use crate::render::{render_svg, write_output_svg};
use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "kwcloud", version, about = "Lay out popular search keywords as a word cloud")]
pub struct Args {
    /// Input file (JSON array or `keyword,count` lines) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout for SVG and JSON if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (theme, themeVariables, cloud, carousel)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// How many top-ranked keywords to place
    #[arg(short = 'n', long = "top")]
    pub top: Option<usize>,

    /// Only place keywords other than this one
    #[arg(long = "relatedTo")]
    pub related_to: Option<String>,

    /// Canvas width
    #[arg(short = 'w', long = "width")]
    pub width: Option<f64>,

    /// Canvas height
    #[arg(short = 'H', long = "height")]
    pub height: Option<f64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
    Json,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut config = load_config(args.config.as_deref())?;
    if let Some(width) = args.width {
        config.cloud.width = width;
        config.render.width = width as f32;
    }
    if let Some(height) = args.height {
        config.cloud.height = height;
        config.render.height = height as f32;
    }
    if let Some(top) = args.top {
        config.cloud.top_n = top;
    }

    let input = read_input(args.input.as_deref())?;
    let stats = parse_keywords(&input)?;
    if stats.is_empty() {
        return Err(anyhow::anyhow!("No keywords found in input"));
    }
    let summary = summarize(&stats);
    tracing::info!(
        total_searches = summary.total_searches,
        keywords = summary.keyword_count,
        "loaded keyword stats"
    );

    let ranked = match args.related_to.as_deref() {
        Some(keyword) => related_keywords(&stats, keyword, config.cloud.top_n),
        None => rank_keywords(&stats, config.cloud.top_n),
    };
    let layout = compute_layout(&ranked, &config.cloud);
    if !layout.dropped.is_empty() {
        tracing::warn!(
            dropped = layout.dropped.len(),
            placed = layout.placed.len(),
            "some keywords did not fit on the canvas"
        );
    }

    match args.output_format {
        OutputFormat::Svg => {
            let svg = render_svg(&layout, &config.theme);
            write_output_svg(&svg, args.output.as_deref())?;
        }
        OutputFormat::Json => {
            write_layout_dump(args.output.as_deref(), &layout, &config.cloud)?;
        }
        OutputFormat::Png => {
            let output = ensure_output(&args.output, "png")?;
            write_png(&layout, &output, &config)?;
        }
    }

    Ok(())
}

#[cfg(feature = "png")]
fn write_png(
    layout: &crate::layout::CloudLayout,
    output: &Path,
    config: &crate::config::Config,
) -> Result<()> {
    let svg = render_svg(layout, &config.theme);
    crate::render::write_output_png(&svg, output, &config.render, &config.theme)
}

#[cfg(not(feature = "png"))]
fn write_png(
    _layout: &crate::layout::CloudLayout,
    _output: &Path,
    _config: &crate::config::Config,
) -> Result<()> {
    Err(anyhow::anyhow!("PNG output requires the `png` feature"))
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path
        && path != Path::new("-")
    {
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!("Output path required for {} output", ext))
}
