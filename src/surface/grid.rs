//! Grid track templates and child placement.
//!
//! Grammar (a small subset of CSS grid):
//!
//! ```text
//! template  := ( "[" name* "]" | size )*
//! size      := <number> ( "px" | "fr" | "%" )?
//! placement := line ( "/" ( line | "span" <n> ) )?
//! line      := <integer> | name <n>?
//! ```
//!
//! Bare numbers are pixels. Negative integers count from the last line.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackSize {
    Px(f64),
    Fr(f64),
    Percent(f64),
}

/// Parsed template: `sizes.len() + 1` lines, each with its names.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrackList {
    pub sizes: Vec<TrackSize>,
    pub line_names: Vec<Vec<String>>,
}

impl TrackList {
    /// A single flexible track spanning the whole axis.
    pub fn single() -> Self {
        Self {
            sizes: vec![TrackSize::Fr(1.0)],
            line_names: vec![Vec::new(), Vec::new()],
        }
    }

    /// Offsets of every line from the container start.
    ///
    /// Fixed tracks are laid out first; flexible tracks share what is left. A
    /// flex total below 1 only claims that fraction of the free space.
    pub fn resolve(&self, available: f64) -> Vec<f64> {
        let mut fixed = 0.0;
        let mut flex = 0.0;
        for size in &self.sizes {
            match *size {
                TrackSize::Px(px) => fixed += px,
                TrackSize::Percent(p) => fixed += available * p / 100.0,
                TrackSize::Fr(fr) => flex += fr,
            }
        }
        let free = (available - fixed).max(0.0);
        let unit = if flex > 0.0 { free / flex.max(1.0) } else { 0.0 };

        let mut lines = Vec::with_capacity(self.sizes.len() + 1);
        let mut at = 0.0;
        lines.push(at);
        for size in &self.sizes {
            at += match *size {
                TrackSize::Px(px) => px,
                TrackSize::Percent(p) => available * p / 100.0,
                TrackSize::Fr(fr) => fr * unit,
            };
            lines.push(at);
        }
        lines
    }

    /// Zero-based index of a line reference, if it exists.
    pub fn line_index(&self, line: &LineRef) -> Option<usize> {
        let count = self.line_names.len();
        match line {
            LineRef::Number(n) if *n > 0 => {
                let idx = (*n - 1) as usize;
                (idx < count).then_some(idx)
            }
            LineRef::Number(n) if *n < 0 => count.checked_sub(n.unsigned_abs() as usize),
            LineRef::Number(_) => None,
            LineRef::Named(name, nth) => self
                .line_names
                .iter()
                .enumerate()
                .filter(|(_, names)| names.iter().any(|n| n == name))
                .nth(nth.saturating_sub(1))
                .map(|(idx, _)| idx),
        }
    }

    /// Zero-based `(start, end)` line pair covered by `placement`.
    pub fn span_of(&self, placement: &Placement) -> Option<(usize, usize)> {
        let start = self.line_index(&placement.start)?;
        let end = match &placement.end {
            PlacementEnd::Line(line) => self.line_index(line)?,
            PlacementEnd::Span(n) => start + n,
        };
        let last = self.line_names.len().saturating_sub(1);
        (end > start && end <= last).then_some((start, end))
    }
}

pub fn parse_template(template: &str) -> Result<TrackList> {
    let fail = |reason: &str| Error::Template {
        template: template.to_string(),
        reason: reason.to_string(),
    };

    let mut list = TrackList {
        sizes: Vec::new(),
        line_names: vec![Vec::new()],
    };
    let mut rest = template.trim_start();
    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix('[') {
            let close = after.find(']').ok_or_else(|| fail("unclosed '['"))?;
            let names = after[..close].split_whitespace().map(str::to_string);
            if let Some(line) = list.line_names.last_mut() {
                line.extend(names);
            }
            rest = &after[close + 1..];
        } else {
            let end = rest
                .find(|c: char| c.is_whitespace() || c == '[')
                .unwrap_or(rest.len());
            let size = parse_size(&rest[..end]).ok_or_else(|| fail("bad track size"))?;
            list.sizes.push(size);
            list.line_names.push(Vec::new());
            rest = &rest[end..];
        }
        rest = rest.trim_start();
    }
    Ok(list)
}

fn parse_size(token: &str) -> Option<TrackSize> {
    let (number, ctor): (&str, fn(f64) -> TrackSize) = if let Some(n) = token.strip_suffix("px") {
        (n, TrackSize::Px)
    } else if let Some(n) = token.strip_suffix("fr") {
        (n, TrackSize::Fr)
    } else if let Some(n) = token.strip_suffix('%') {
        (n, TrackSize::Percent)
    } else {
        (token, TrackSize::Px)
    };
    let value: f64 = number.trim().parse().ok()?;
    (value.is_finite() && value >= 0.0).then(|| ctor(value))
}

/// Parse a plain pixel length (`"12px"` or `"12"`).
pub fn parse_px(value: &str) -> Option<f64> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value);
    number.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[derive(Debug, Clone, PartialEq)]
pub enum LineRef {
    /// 1-based; negative counts from the end.
    Number(i32),
    /// Named line and 1-based occurrence.
    Named(String, usize),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlacementEnd {
    Line(LineRef),
    Span(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub start: LineRef,
    pub end: PlacementEnd,
}

impl Placement {
    /// From the first to the last line.
    pub fn full() -> Self {
        Self {
            start: LineRef::Number(1),
            end: PlacementEnd::Line(LineRef::Number(-1)),
        }
    }
}

pub fn parse_placement(value: &str) -> Result<Placement> {
    let fail = |reason: &str| Error::Template {
        template: value.to_string(),
        reason: reason.to_string(),
    };
    let (start, end) = match value.split_once('/') {
        Some((start, end)) => (start, Some(end)),
        None => (value, None),
    };
    let start = parse_line(start).ok_or_else(|| fail("bad start line"))?;
    let end = match end.map(str::trim) {
        None => PlacementEnd::Span(1),
        Some(end) => match end.strip_prefix("span") {
            Some(n) => {
                let n: usize = n.trim().parse().map_err(|_| fail("bad span"))?;
                PlacementEnd::Span(n.max(1))
            }
            None => PlacementEnd::Line(parse_line(end).ok_or_else(|| fail("bad end line"))?),
        },
    };
    Ok(Placement { start, end })
}

fn parse_line(token: &str) -> Option<LineRef> {
    let mut parts = token.split_whitespace();
    let first = parts.next()?;
    let second = parts.next();
    if parts.next().is_some() {
        return None;
    }
    if let Ok(n) = first.parse::<i32>() {
        return second.is_none().then_some(LineRef::Number(n));
    }
    let nth = match second {
        Some(n) => n.parse::<usize>().ok().filter(|n| *n > 0)?,
        None => 1,
    };
    Some(LineRef::Named(first.to_string(), nth))
}
