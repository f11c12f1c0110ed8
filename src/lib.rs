//! Named color palettes and light/dark plot themes.
//!
//! Palettes are static tables. A theme is composed into a flat
//! [`StyleDict`] and pushed through a [`StyleSink`], either the
//! process-wide [`RcParams`] registry or a style-file writer.
//!
//! ```no_run
//! use qstyles::{light_theme, ThemeOptions};
//!
//! light_theme(&ThemeOptions::default().with_palette("cat_bright"))?;
//! # Ok::<(), qstyles::Error>(())
//! ```

pub mod error;
pub mod logging;
pub mod palette;
pub mod sink;
pub mod theme;

pub use error::{Error, Result};
pub use palette::{select_palette, HexColor, Variant};
pub use sink::{
    apply_style_to, apply_theme, dark_theme, light_theme, rc_params, MplStyleWriter, RcParams,
    StyleSink,
};
pub use theme::{compose_theme, base_theme, PlotContext, Style, StyleDict, StyleValue, ThemeOptions};
