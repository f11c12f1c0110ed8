//! Where composed themes go.
//!
//! [`StyleSink`] is the single seam through which a theme leaves the crate.
//! [`RcParams`] is the process-wide parameter registry the entry points
//! write to; [`MplStyleWriter`] renders a theme as a matplotlib style file.

use log::Level::{Debug, Info};
use std::collections::BTreeMap;
use std::io::Write;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use crate::error::{Error, Result};
use crate::sink_log;
use crate::theme::{base_theme, compose_theme, Style, StyleDict, StyleValue, ThemeOptions};

pub trait StyleSink {
    /// Push every entry of `params`. Entries already present are replaced.
    fn update(&mut self, params: &StyleDict) -> Result<()>;
}

/// Parameter names the registry accepts.
pub const KNOWN_KEYS: &[&str] = &[
    "axes.axisbelow",
    "axes.edgecolor",
    "axes.facecolor",
    "axes.grid",
    "axes.grid.axis",
    "axes.grid.which",
    "axes.labelcolor",
    "axes.labelpad",
    "axes.labelsize",
    "axes.labelweight",
    "axes.linewidth",
    "axes.prop_cycle",
    "axes.spines.bottom",
    "axes.spines.left",
    "axes.spines.right",
    "axes.spines.top",
    "axes.titlecolor",
    "axes.titlelocation",
    "axes.titlepad",
    "axes.titlesize",
    "axes.titleweight",
    "figure.dpi",
    "figure.facecolor",
    "figure.figsize",
    "figure.titlesize",
    "figure.titleweight",
    "font.family",
    "font.sans-serif",
    "font.size",
    "font.weight",
    "grid.alpha",
    "grid.color",
    "grid.linestyle",
    "grid.linewidth",
    "hatch.color",
    "hatch.linewidth",
    "legend.edgecolor",
    "legend.facecolor",
    "legend.fancybox",
    "legend.fontsize",
    "legend.framealpha",
    "legend.frameon",
    "legend.labelcolor",
    "legend.loc",
    "legend.title_fontsize",
    "lines.linewidth",
    "lines.markersize",
    "patch.edgecolor",
    "patch.force_edgecolor",
    "patch.linewidth",
    "savefig.dpi",
    "savefig.pad_inches",
    "text.color",
    "xtick.color",
    "xtick.direction",
    "xtick.labelsize",
    "xtick.major.pad",
    "xtick.major.size",
    "xtick.major.width",
    "xtick.minor.pad",
    "xtick.minor.size",
    "xtick.minor.visible",
    "xtick.minor.width",
    "ytick.color",
    "ytick.direction",
    "ytick.labelsize",
    "ytick.major.pad",
    "ytick.major.size",
    "ytick.major.width",
    "ytick.minor.pad",
    "ytick.minor.size",
    "ytick.minor.visible",
    "ytick.minor.width",
];

/// Global style parameters, keyed by name.
#[derive(Debug, Default)]
pub struct RcParams {
    params: BTreeMap<String, StyleValue>,
}

impl RcParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_known_key(key: &str) -> bool {
        KNOWN_KEYS.binary_search(&key).is_ok()
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.params.get(key)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn clear(&mut self) {
        self.params.clear();
    }
}

impl StyleSink for RcParams {
    /// Rejects the whole update if any key is unknown.
    fn update(&mut self, params: &StyleDict) -> Result<()> {
        if let Some(bad) = params.keys().find(|k| !Self::is_known_key(k)) {
            return Err(Error::UnknownStyleKey(bad.to_string()));
        }
        for (key, value) in params {
            self.params.insert(key.clone(), value.clone());
        }
        sink_log!(Debug, "rc params updated with {} entries", params.len());
        Ok(())
    }
}

/// Writes `key: value` lines in matplotlib style-file syntax.
#[derive(Debug)]
pub struct MplStyleWriter<W: Write> {
    out: W,
}

impl<W: Write> MplStyleWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StyleSink for MplStyleWriter<W> {
    fn update(&mut self, params: &StyleDict) -> Result<()> {
        for (key, value) in params {
            writeln!(self.out, "{key}: {value}")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

static RC_PARAMS: LazyLock<Mutex<RcParams>> = LazyLock::new(|| Mutex::new(RcParams::new()));

/// Lock the process-wide registry.
///
/// The lock only guards the map. Callers composing themes from several
/// threads still have to order those calls themselves.
pub fn rc_params() -> MutexGuard<'static, RcParams> {
    RC_PARAMS.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Push `params` into the process-wide registry.
pub fn apply_theme(params: &StyleDict) -> Result<()> {
    rc_params().update(params)
}

/// Compose `style` from the shared base theme and push it into `sink`.
pub fn apply_style_to<S: StyleSink + ?Sized>(
    sink: &mut S,
    style: Style,
    options: &ThemeOptions,
) -> Result<()> {
    let theme = compose_theme(style, base_theme(), options)?;
    sink.update(&theme)?;
    sink_log!(Info, "applied {} theme ({} parameters)", style, theme.len());
    Ok(())
}

pub fn light_theme(options: &ThemeOptions) -> Result<()> {
    apply_style_to(&mut *rc_params(), Style::Light, options)
}

pub fn dark_theme(options: &ThemeOptions) -> Result<()> {
    apply_style_to(&mut *rc_params(), Style::Dark, options)
}
