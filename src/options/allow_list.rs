//! Declarative table of the options a caller may override.
//!
//! Every `(component, property)` pair a user can set is listed here together
//! with the namespace it lands in (direct setting or style property) and the
//! shape its value must have. Pairs matched by no entry are dropped.

use serde_json::Value;

/// Chart components addressable from the option tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentId {
    Chart,
    Title,
    YAxisTitle,
    YAxisLabels,
    Bars,
    Values,
    Gridlines,
    Legend,
    XAxisLabels,
    Classes,
}

impl ComponentId {
    pub const ALL: [Self; 10] = [
        Self::Chart,
        Self::Title,
        Self::YAxisTitle,
        Self::YAxisLabels,
        Self::Bars,
        Self::Values,
        Self::Gridlines,
        Self::Legend,
        Self::XAxisLabels,
        Self::Classes,
    ];

    /// Key used for this component in option trees.
    pub fn key(self) -> &'static str {
        match self {
            Self::Chart => "chart",
            Self::Title => "title",
            Self::YAxisTitle => "yAxisTitle",
            Self::YAxisLabels => "yAxisLabels",
            Self::Bars => "bars",
            Self::Values => "values",
            Self::Gridlines => "gridlines",
            Self::Legend => "legend",
            Self::XAxisLabels => "xAxisLabels",
            Self::Classes => "classes",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }
}

/// Namespace an accepted option lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Semantic setting stored at `tree[component][property]`.
    Direct,
    /// Visual property stored at `tree[component].style[property]`.
    Style,
}

/// Shape a value must have to be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    Bool,
    Number,
    Text,
    /// A string out of a fixed set.
    OneOf(&'static [&'static str]),
    TextList,
    /// Exactly three non-negative numbers.
    NumberTriple,
    /// Any string, number or bool (style values).
    Scalar,
}

impl ValueShape {
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::Bool => value.is_boolean(),
            Self::Number => value.as_f64().is_some_and(f64::is_finite),
            Self::Text => value.is_string(),
            Self::OneOf(choices) => value.as_str().is_some_and(|s| choices.contains(&s)),
            Self::TextList => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
            Self::NumberTriple => value.as_array().is_some_and(|items| {
                items.len() == 3
                    && items
                        .iter()
                        .all(|v| v.as_f64().is_some_and(|n| n.is_finite() && n >= 0.0))
            }),
            Self::Scalar => value.is_string() || value.is_number() || value.is_boolean(),
        }
    }
}

/// One row of the allow-list.
#[derive(Debug, Clone, Copy)]
pub struct AllowListEntry {
    pub components: &'static [ComponentId],
    pub properties: &'static [&'static str],
    pub kind: OptionKind,
    pub shape: ValueShape,
}

impl AllowListEntry {
    pub fn matches(&self, component: ComponentId, property: &str) -> bool {
        self.components.contains(&component) && self.properties.contains(&property)
    }
}

use ComponentId::*;

const TEXT_BEARING: &[ComponentId] = &[
    Chart,
    Title,
    YAxisTitle,
    YAxisLabels,
    Values,
    Legend,
    XAxisLabels,
];

const DRAWABLE: &[ComponentId] = &[
    Chart,
    Title,
    YAxisTitle,
    YAxisLabels,
    Values,
    Gridlines,
    Legend,
    XAxisLabels,
];

const CLASSED: &[ComponentId] = &[
    Chart,
    Title,
    YAxisTitle,
    YAxisLabels,
    Bars,
    Values,
    Gridlines,
    Legend,
    XAxisLabels,
];

/// Font and text color properties shared by every text-bearing component.
pub const FONT_PROPERTIES: &[&str] = &[
    "color",
    "font-family",
    "font-size",
    "font-weight",
    "font-style",
    "text-decoration",
];

pub const VALUE_POSITIONS: &[&str] = &["top", "center", "bottom"];

/// Default allow-list.
pub static ALLOW_LIST: &[AllowListEntry] = &[
    AllowListEntry {
        components: DRAWABLE,
        properties: &["draw"],
        kind: OptionKind::Direct,
        shape: ValueShape::Bool,
    },
    AllowListEntry {
        components: CLASSED,
        properties: &["class"],
        kind: OptionKind::Direct,
        shape: ValueShape::Text,
    },
    AllowListEntry {
        components: &[Chart],
        properties: &["locale"],
        kind: OptionKind::Direct,
        shape: ValueShape::Text,
    },
    AllowListEntry {
        components: &[Title, YAxisTitle],
        properties: &["text"],
        kind: OptionKind::Direct,
        shape: ValueShape::Text,
    },
    AllowListEntry {
        components: &[Legend, XAxisLabels],
        properties: &["text"],
        kind: OptionKind::Direct,
        shape: ValueShape::TextList,
    },
    AllowListEntry {
        components: &[YAxisLabels, Values],
        properties: &["precision"],
        kind: OptionKind::Direct,
        shape: ValueShape::Number,
    },
    AllowListEntry {
        components: &[Values],
        properties: &["position"],
        kind: OptionKind::Direct,
        shape: ValueShape::OneOf(VALUE_POSITIONS),
    },
    AllowListEntry {
        components: &[Values],
        properties: &["minHeight"],
        kind: OptionKind::Direct,
        shape: ValueShape::Number,
    },
    AllowListEntry {
        components: &[Gridlines],
        properties: &["interval"],
        kind: OptionKind::Direct,
        shape: ValueShape::Number,
    },
    AllowListEntry {
        components: &[Gridlines],
        properties: &["color"],
        kind: OptionKind::Direct,
        shape: ValueShape::Text,
    },
    AllowListEntry {
        components: &[Bars],
        properties: &["colors"],
        kind: OptionKind::Direct,
        shape: ValueShape::TextList,
    },
    AllowListEntry {
        components: &[Bars],
        properties: &["gaps"],
        kind: OptionKind::Direct,
        shape: ValueShape::NumberTriple,
    },
    AllowListEntry {
        components: TEXT_BEARING,
        properties: FONT_PROPERTIES,
        kind: OptionKind::Style,
        shape: ValueShape::Scalar,
    },
    AllowListEntry {
        components: &[Chart],
        properties: &["width", "height", "background-color"],
        kind: OptionKind::Style,
        shape: ValueShape::Scalar,
    },
    AllowListEntry {
        components: &[Gridlines],
        properties: &["opacity"],
        kind: OptionKind::Style,
        shape: ValueShape::Scalar,
    },
];

/// First entry of `table` accepting `(component, property)`; `None` means unlisted.
pub fn classify<'a>(
    table: &'a [AllowListEntry],
    component: ComponentId,
    property: &str,
) -> Option<&'a AllowListEntry> {
    table.iter().find(|entry| entry.matches(component, property))
}

/// Every `(component, property)` pair claimed by more than one entry.
///
/// First match wins in [`classify`], so a non-empty result means some entry is
/// partly shadowed. The shipped table must return nothing here.
pub fn overlapping_pairs(table: &[AllowListEntry]) -> Vec<(ComponentId, &'static str)> {
    let mut out = Vec::new();
    for (i, entry) in table.iter().enumerate() {
        for &component in entry.components {
            for &property in entry.properties {
                let claimed_earlier = table[..i]
                    .iter()
                    .any(|earlier| earlier.matches(component, property));
                if claimed_earlier && !out.contains(&(component, property)) {
                    out.push((component, property));
                }
            }
        }
    }
    out
}
