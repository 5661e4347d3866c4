use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;
use stackbar::options::{self, defaults};
use stackbar::path::{self, Tree};
use stackbar::surface::grid::parse_px;
use stackbar::{Scene, Surface, normalize, render, storage};

#[derive(Parser, Debug)]
#[command(
    name = "stackbar",
    version,
    about = "Render stacked bar charts to HTML or SVG"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a chart from a data file.
    Render(RenderArgs),
    /// Print the default option tree as JSON.
    Options,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Data file: JSON array (flat or nested) or CSV (one row per bar).
    #[arg(short, long)]
    data: PathBuf,
    /// JSON file with option overrides (flat dotted keys or nested objects).
    #[arg(short, long)]
    options: Option<PathBuf>,
    /// Single override, e.g. --set title.text=Sales or --set values.precision=2.
    /// Values are parsed as JSON, falling back to a plain string.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,
    /// Output file (.html or .svg).
    #[arg(long)]
    out: PathBuf,
    /// Chart width in pixels (overrides chart.width).
    #[arg(long)]
    width: Option<u32>,
    /// Chart height in pixels (overrides chart.height).
    #[arg(long)]
    height: Option<u32>,
}

fn parse_set(entry: &str) -> Result<(String, Value)> {
    let (key, raw) = entry
        .split_once('=')
        .ok_or_else(|| anyhow!("invalid --set {entry:?}, expected KEY=VALUE"))?;
    let key = key.trim();
    if key.is_empty() {
        anyhow::bail!("invalid --set {entry:?}, empty key");
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Options => cmd_options(),
    }
}

fn cmd_options() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(defaults())?);
    Ok(())
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let raw = storage::load_data(&args.data)?;

    let mut overrides: Tree = match args.options.as_ref() {
        Some(p) => path::expand(&storage::load_options(p)?),
        None => Tree::new(),
    };
    for entry in &args.set {
        let (key, value) = parse_set(entry)?;
        let keys: Vec<&str> = key.split('.').collect();
        path::set_path(&mut overrides, &keys, value);
    }
    if let Some(w) = args.width {
        path::set_path(&mut overrides, &["chart", "width"], Value::String(format!("{w}px")));
    }
    if let Some(h) = args.height {
        path::set_path(&mut overrides, &["chart", "height"], Value::String(format!("{h}px")));
    }

    let settings = options::settings_for(&overrides).context("resolving options")?;
    let dimension = |name: &str, fallback: f64| {
        settings
            .chart
            .style
            .get(name)
            .and_then(|v| parse_px(v))
            .unwrap_or(fallback)
    };
    let mut scene = Scene::new(dimension("width", 600.0), dimension("height", 400.0));
    let root = scene.root();

    let data = normalize(&raw);
    let chart = render::render(&data, &settings, &mut scene, root)?;
    let size = scene.measure(chart)?;
    storage::save_chart(&scene, &args.out)?;

    eprintln!(
        "Wrote {}x{} chart ({} bars, {} segments each) to {}",
        size.width,
        size.height,
        data.series_count,
        data.max_subseries_length,
        args.out.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_values_parse_as_json_or_string() {
        assert_eq!(parse_set("values.precision=2").unwrap().1, Value::from(2));
        assert_eq!(parse_set("title.text=Sales").unwrap().1, Value::from("Sales"));
        assert_eq!(
            parse_set("bars.colors=[\"red\",\"blue\"]").unwrap().1,
            serde_json::json!(["red", "blue"])
        );
        assert!(parse_set("nope").is_err());
        assert!(parse_set("=1").is_err());
    }
}
