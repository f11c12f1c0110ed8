use serde::Serialize;
use std::fmt;

use crate::palette::HexColor;

/// A single style parameter value.
///
/// `Display` renders the value the way a matplotlib style file spells it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// A hex value or a named color such as `white`, `none` or `inherit`.
    Color(String),
    TextList(Vec<String>),
    Pair(f64, f64),
    ColorCycle(Vec<HexColor>),
}

impl StyleValue {
    pub fn color(value: impl Into<String>) -> Self {
        StyleValue::Color(value.into())
    }

    pub fn text_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StyleValue::TextList(items.into_iter().map(Into::into).collect())
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StyleValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Numeric view of `Int` and `Float` values.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StyleValue::Int(i) => Some(*i as f64),
            StyleValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_cycle(&self) -> Option<&[HexColor]> {
        match self {
            StyleValue::ColorCycle(colors) => Some(colors.as_slice()),
            _ => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Bool(true) => f.write_str("True"),
            StyleValue::Bool(false) => f.write_str("False"),
            StyleValue::Int(i) => write!(f, "{i}"),
            StyleValue::Float(x) => write!(f, "{x}"),
            StyleValue::Text(s) => f.write_str(s),
            // '#' starts a comment in style files
            StyleValue::Color(s) => f.write_str(s.strip_prefix('#').unwrap_or(s.as_str())),
            StyleValue::TextList(items) => f.write_str(&items.join(", ")),
            StyleValue::Pair(a, b) => write!(f, "{a}, {b}"),
            StyleValue::ColorCycle(colors) => {
                let quoted: Vec<String> = colors.iter().map(|c| format!("'{}'", c.digits())).collect();
                write!(f, "cycler('color', [{}])", quoted.join(", "))
            }
        }
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        StyleValue::Bool(value)
    }
}

impl From<i64> for StyleValue {
    fn from(value: i64) -> Self {
        StyleValue::Int(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Float(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<HexColor> for StyleValue {
    fn from(value: HexColor) -> Self {
        StyleValue::Color(value.to_string())
    }
}

impl From<Vec<HexColor>> for StyleValue {
    fn from(value: Vec<HexColor>) -> Self {
        StyleValue::ColorCycle(value)
    }
}

impl From<(f64, f64)> for StyleValue {
    fn from((a, b): (f64, f64)) -> Self {
        StyleValue::Pair(a, b)
    }
}
