use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::dict::StyleDict;
use crate::error::{Error, Result};

/// Where plots will be shown. Scales line, tick and font geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotContext {
    Print,
    #[default]
    Notebook,
    Presentation,
}

impl PlotContext {
    pub const ALL: [PlotContext; 3] = [PlotContext::Print, PlotContext::Notebook, PlotContext::Presentation];

    pub fn scale(self) -> f64 {
        match self {
            PlotContext::Print => 0.8,
            PlotContext::Notebook => 1.0,
            PlotContext::Presentation => 1.5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PlotContext::Print => "print",
            PlotContext::Notebook => "notebook",
            PlotContext::Presentation => "presentation",
        }
    }
}

impl fmt::Display for PlotContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for PlotContext {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PlotContext::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| Error::InvalidContext(s.to_string()))
    }
}

/// Geometry parameters at notebook scale.
pub const GEOMETRY_BASE: [(&str, f64); 14] = [
    ("axes.linewidth", 1.0),
    ("grid.linewidth", 0.75),
    ("lines.linewidth", 1.5),
    ("lines.markersize", 6.0),
    ("patch.linewidth", 1.0),
    ("hatch.linewidth", 1.0),
    ("xtick.major.width", 1.0),
    ("ytick.major.width", 1.0),
    ("xtick.minor.width", 0.75),
    ("ytick.minor.width", 0.75),
    ("xtick.major.size", 6.0),
    ("ytick.major.size", 6.0),
    ("xtick.minor.size", 4.0),
    ("ytick.minor.size", 4.0),
];

pub const BASE_FONT_SIZE: f64 = 14.0;

const TITLE_PAD_PER_FONT_SIZE: f64 = 1.2;

/// Scaled geometry plus `font.size` and `axes.titlepad`.
///
/// Fonts take `font_scale` on top of the context scale; the title pad
/// follows the context scale only.
pub fn plotting_context(context: PlotContext, font_scale: f64) -> StyleDict {
    let scale = context.scale();
    let mut dict: StyleDict = GEOMETRY_BASE
        .iter()
        .map(|&(key, base)| (key, base * scale))
        .collect();
    dict.set("font.size", scale * BASE_FONT_SIZE * font_scale);
    dict.set("axes.titlepad", BASE_FONT_SIZE * TITLE_PAD_PER_FONT_SIZE * scale);
    dict
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(dict: &StyleDict, key: &str) -> f64 {
        dict.get(key).and_then(|v| v.as_f64()).unwrap()
    }

    #[test]
    fn parses_known_contexts() {
        assert_eq!("print".parse::<PlotContext>().unwrap(), PlotContext::Print);
        assert_eq!("notebook".parse::<PlotContext>().unwrap(), PlotContext::Notebook);
        assert_eq!("presentation".parse::<PlotContext>().unwrap(), PlotContext::Presentation);
    }

    #[test]
    fn rejects_unknown_context() {
        let err = "bogus".parse::<PlotContext>().unwrap_err();
        assert!(matches!(err, Error::InvalidContext(_)));
        assert!(err.to_string().contains("must be one of print, notebook, presentation"));
        for near_miss in ["Print", " notebook", "PRESENTATION"] {
            assert!(near_miss.parse::<PlotContext>().is_err(), "{near_miss:?}");
        }
    }

    #[test]
    fn notebook_is_identity() {
        let dict = plotting_context(PlotContext::Notebook, 1.0);
        for (key, base) in GEOMETRY_BASE {
            assert_eq!(number(&dict, key), base, "{key}");
        }
        assert_eq!(number(&dict, "font.size"), 14.0);
    }

    #[test]
    fn print_and_presentation_scale_geometry() {
        let notebook = plotting_context(PlotContext::Notebook, 1.0);
        let print = plotting_context(PlotContext::Print, 1.0);
        let presentation = plotting_context(PlotContext::Presentation, 1.0);
        for (key, _) in GEOMETRY_BASE {
            assert_eq!(number(&print, key), number(&notebook, key) * 0.8, "{key}");
            assert_eq!(number(&presentation, key), number(&notebook, key) * 1.5, "{key}");
        }
    }

    #[test]
    fn font_scale_only_touches_font_size() {
        let plain = plotting_context(PlotContext::Presentation, 1.0);
        let big = plotting_context(PlotContext::Presentation, 2.0);
        assert_eq!(number(&big, "font.size"), 1.5 * 14.0 * 2.0);
        assert_eq!(number(&big, "axes.titlepad"), number(&plain, "axes.titlepad"));
        assert_eq!(number(&big, "lines.linewidth"), number(&plain, "lines.linewidth"));
    }
}
