//! Raw series input and its normalized, rectangular form.

use serde::{Deserialize, Deserializer, Serialize};

use crate::path::{max, max_len, pad_right, sum};

/// Chart input: one bar per top-level entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawSeries {
    /// One value per bar.
    Single(Vec<f64>),
    /// One stack of sub-series values per bar; rows may be ragged.
    Multi(Vec<Vec<f64>>),
}

impl RawSeries {
    /// Number of bars.
    pub fn len(&self) -> usize {
        match self {
            Self::Single(values) => values.len(),
            Self::Multi(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn from_entries(entries: Vec<RawEntry>) -> Self {
        // The first entry decides the shape of the whole input.
        match entries.first() {
            Some(RawEntry::Row(_)) => Self::Multi(
                entries
                    .into_iter()
                    .map(|entry| match entry {
                        RawEntry::Value(v) => vec![v],
                        RawEntry::Row(row) => row,
                    })
                    .collect(),
            ),
            _ => Self::Single(
                entries
                    .into_iter()
                    .map(|entry| match entry {
                        RawEntry::Value(v) => v,
                        RawEntry::Row(row) => sum(&row),
                    })
                    .collect(),
            ),
        }
    }
}

impl From<Vec<f64>> for RawSeries {
    fn from(values: Vec<f64>) -> Self {
        Self::Single(values)
    }
}

impl From<Vec<Vec<f64>>> for RawSeries {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Self::Multi(rows)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Value(f64),
    Row(Vec<f64>),
}

impl<'de> Deserialize<'de> for RawSeries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<RawEntry>::deserialize(deserializer)?;
        Ok(Self::from_entries(entries))
    }
}

/// Rectangular, sum-normalized view of a [`RawSeries`].
///
/// Every matrix row holds `max_subseries_length` values (zero-padded on the
/// right) followed by one remainder entry, so each row sums to `global_max`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedData {
    pub is_multi_series: bool,
    pub series_count: usize,
    pub max_subseries_length: usize,
    pub global_max: f64,
    pub matrix: Vec<Vec<f64>>,
}

impl NormalizedData {
    /// Padded values of one bar, without the remainder entry.
    pub fn values(&self, series: usize) -> &[f64] {
        let row = &self.matrix[series];
        &row[..row.len() - 1]
    }

    /// Gap between the bar's total and the global max.
    pub fn remainder(&self, series: usize) -> f64 {
        self.matrix[series].last().copied().unwrap_or(0.0)
    }

    /// Palette slot of a segment: sub-series position when stacked, bar position otherwise.
    pub fn color_index(&self, series: usize, subseries: usize) -> usize {
        if self.is_multi_series {
            subseries
        } else {
            series
        }
    }

    /// How many distinct color slots the chart uses.
    pub fn color_count(&self) -> usize {
        if self.is_multi_series {
            self.max_subseries_length
        } else {
            self.series_count
        }
    }
}

/// Trim the values whose running total would overflow, so the row sums to at
/// most `f64::MAX`. Returns whether anything was trimmed.
fn cap_to_finite_sum(row: &mut [f64]) -> bool {
    let mut total = 0.0;
    let mut trimmed = false;
    for value in row.iter_mut() {
        if (total + *value).is_finite() {
            total += *value;
            continue;
        }
        trimmed = true;
        *value = f64::MAX - total;
        if (total + *value).is_finite() {
            total += *value;
        } else {
            *value = 0.0;
        }
    }
    trimmed
}

/// Build the padded matrix and its aggregates. Never fails; empty input yields
/// `series_count = 0` and `global_max = 0`.
pub fn normalize(raw: &RawSeries) -> NormalizedData {
    let mut clamped = 0usize;
    let mut clean = |v: f64| {
        if v.is_finite() && v >= 0.0 {
            v
        } else {
            clamped += 1;
            0.0
        }
    };

    let (is_multi_series, mut rows): (bool, Vec<Vec<f64>>) = match raw {
        RawSeries::Single(values) => (false, values.iter().map(|v| vec![clean(*v)]).collect()),
        RawSeries::Multi(rows) => (
            true,
            rows.iter()
                .map(|row| row.iter().map(|v| clean(*v)).collect())
                .collect(),
        ),
    };
    if clamped > 0 {
        log::warn!("{clamped} negative or non-finite value(s) clamped to 0");
    }
    let capped = rows
        .iter_mut()
        .map(|row| cap_to_finite_sum(row))
        .filter(|trimmed| *trimmed)
        .count();
    if capped > 0 {
        log::warn!("{capped} bar(s) trimmed to keep their total finite");
    }

    let sums: Vec<f64> = rows.iter().map(|row| sum(row)).collect();
    let global_max = match max(&sums) {
        m if m.is_finite() => m,
        _ => 0.0,
    };
    let max_subseries_length = max_len(&rows);

    let matrix = rows
        .iter()
        .zip(&sums)
        .map(|(row, row_sum)| {
            let mut padded = pad_right(row, 0.0, max_subseries_length);
            padded.push((global_max - row_sum).max(0.0));
            padded
        })
        .collect();

    NormalizedData {
        is_multi_series,
        series_count: rows.len(),
        max_subseries_length,
        global_max,
        matrix,
    }
}
