use crate::data::RawSeries;
use crate::export::{self, ExportFormat};
use crate::path::Tree;
use crate::surface::Scene;
use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, StringRecord};
use std::fs;
use std::path::Path;

/// Load chart data from `.json` (flat or nested array) or `.csv`.
///
/// CSV: one record per series, one column per subseries. A header row is
/// skipped when its first cell is not a number. A file with a single column
/// is read as a single-series list.
pub fn load_data<P: AsRef<Path>>(path: P) -> Result<RawSeries> {
    let path = path.as_ref();
    match extension(path).as_deref() {
        Some("json") => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
        }
        Some("csv") => load_csv(path),
        other => bail!(
            "unsupported data format: {} (expected .json or .csv)",
            other.unwrap_or("<none>")
        ),
    }
}

fn load_csv(path: &Path) -> Result<RawSeries> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        if i == 0 && is_header(&record) {
            log::debug!("skipping header row in {}", path.display());
            continue;
        }
        let row = record
            .iter()
            .filter(|cell| !cell.is_empty())
            .map(|cell| {
                cell.parse::<f64>()
                    .with_context(|| format!("line {}: not a number: {cell:?}", i + 1))
            })
            .collect::<Result<Vec<_>>>()?;
        rows.push(row);
    }

    let single_column = rows.iter().all(|r| r.len() <= 1);
    if single_column {
        Ok(RawSeries::Single(
            rows.into_iter().map(|r| r.first().copied().unwrap_or(0.0)).collect(),
        ))
    } else {
        Ok(RawSeries::Multi(rows))
    }
}

fn is_header(record: &StringRecord) -> bool {
    record
        .get(0)
        .is_some_and(|cell| !cell.is_empty() && cell.parse::<f64>().is_err())
}

/// Load an options object (flat dotted keys, nested objects, or both).
pub fn load_options<P: AsRef<Path>>(path: P) -> Result<Tree> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let value: serde_json::Value =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    match value {
        serde_json::Value::Object(map) => Ok(map),
        other => bail!("options must be a JSON object, found {}", kind(&other)),
    }
}

/// Save a mounted scene as `.html` or `.svg`, picked by extension.
pub fn save_chart<P: AsRef<Path>>(scene: &Scene, path: P) -> Result<()> {
    let path = path.as_ref();
    let body = match ExportFormat::from_path(path) {
        Some(ExportFormat::Html) => export::to_html(scene),
        Some(ExportFormat::Svg) => export::to_svg(scene)?,
        None => bail!("unsupported output format: {} (expected .html or .svg)", path.display()),
    };
    fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}

fn kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
