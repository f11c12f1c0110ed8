use log::Level::{Debug, Info};

use super::context::{plotting_context, PlotContext};
use super::dict::StyleDict;
use super::options::ThemeOptions;
use super::value::StyleValue;
use crate::error::{Error, Result};
use crate::palette::tables::GREY;
use crate::palette::{select_palette, HexColor, Shade, Variant, DEFAULT_PALETTE};
use crate::theme_log;

pub type Style = Variant;

pub const PROP_CYCLE_KEY: &str = "axes.prop_cycle";
pub const GRID_KEY: &str = "axes.grid";

/// Typography, tick, legend and figure settings shared by every theme.
pub fn base_theme() -> StyleDict {
    StyleDict::new()
        .with("font.family", StyleValue::text_list(["sans-serif"]))
        .with("font.sans-serif", StyleValue::text_list(["Inter", "Helvetica", "sans-serif"]))
        .with("axes.titleweight", "bold")
        .with("axes.labelpad", 8.0)
        .with("axes.labelweight", 600i64)
        .with("axes.labelsize", "medium")
        .with("axes.titlesize", "x-large")
        .with("axes.grid.which", "major")
        .with("xtick.labelsize", "small")
        .with("ytick.labelsize", "small")
        .with("xtick.major.size", 8.25)
        .with("xtick.minor.size", 4.125)
        .with("xtick.major.pad", 6.0)
        .with("xtick.minor.pad", 6.0)
        .with("xtick.direction", "out")
        .with("xtick.minor.visible", false)
        .with("ytick.major.pad", 6.0)
        .with("ytick.minor.pad", 6.0)
        .with("ytick.direction", "out")
        .with("ytick.minor.visible", false)
        .with("grid.alpha", 0.75)
        .with("grid.linestyle", ":")
        .with("legend.fontsize", "small")
        .with("legend.title_fontsize", "medium")
        .with("legend.fancybox", true)
        .with("legend.frameon", true)
        .with("legend.framealpha", 1.0)
        .with("figure.figsize", (8.0, 6.0))
        .with("figure.titleweight", 600i64)
        .with("savefig.pad_inches", 0.2)
        .with("figure.titlesize", "larger")
}

struct Furniture {
    background: StyleValue,
    foreground: HexColor,
    title: HexColor,
    legend_edge: HexColor,
    grid: HexColor,
}

fn furniture_settings(f: Furniture) -> StyleDict {
    StyleDict::new()
        .with("patch.edgecolor", f.background.clone())
        .with("patch.force_edgecolor", true)
        .with("text.color", f.foreground)
        .with("axes.titlecolor", f.title)
        .with("axes.edgecolor", f.foreground)
        .with("axes.labelcolor", f.foreground)
        .with("axes.facecolor", f.background.clone())
        .with("xtick.color", f.foreground)
        .with("ytick.color", f.foreground)
        .with("grid.color", f.grid)
        .with("legend.edgecolor", f.legend_edge)
        .with("legend.labelcolor", f.foreground)
        .with("legend.facecolor", StyleValue::color("inherit"))
        .with("figure.facecolor", f.background)
        .with("hatch.color", GREY.get(Shade::S50))
}

/// Dark text and axes on a white background.
pub fn light_settings() -> StyleDict {
    furniture_settings(Furniture {
        background: StyleValue::color("white"),
        foreground: GREY.get(Shade::S800),
        title: GREY.get(Shade::S900),
        legend_edge: GREY.get(Shade::S700),
        grid: GREY.get(Shade::S300),
    })
}

/// Light text and axes on a near-black background.
pub fn dark_settings() -> StyleDict {
    furniture_settings(Furniture {
        background: GREY.get(Shade::S900).into(),
        foreground: GREY.get(Shade::S100),
        title: GREY.get(Shade::S50),
        legend_edge: GREY.get(Shade::S200),
        grid: GREY.get(Shade::S700),
    })
}

pub fn minimal_settings() -> StyleDict {
    StyleDict::new()
        .with(GRID_KEY, false)
        .with("axes.spines.top", false)
        .with("axes.spines.right", false)
        .with("legend.edgecolor", StyleValue::color("none"))
}

/// Build the full parameter set for `style` on top of `base`.
///
/// Options are validated before `base` is extended, so an error leaves the
/// caller with nothing half-built.
pub fn compose_theme(style: Style, base: StyleDict, options: &ThemeOptions) -> Result<StyleDict> {
    let context = match options.context.as_deref() {
        Some(name) => name.parse::<PlotContext>()?,
        None => PlotContext::default(),
    };
    if !(options.font_scale.is_finite() && options.font_scale > 0.0) {
        return Err(Error::InvalidFontScale(options.font_scale));
    }
    let palette = options.palette.as_deref().unwrap_or(DEFAULT_PALETTE);
    let cycle = select_palette(palette, style)?;

    theme_log!(
        Info,
        "composing {} theme: palette={}, context={}, grid={}, minimal={}",
        style,
        palette,
        context,
        options.grid,
        options.minimal
    );

    let mut theme = base;
    theme.set(PROP_CYCLE_KEY, cycle);
    theme.merge(plotting_context(context, options.font_scale));
    theme.set(GRID_KEY, options.grid);
    theme.merge(match style {
        Style::Light => light_settings(),
        Style::Dark => dark_settings(),
    });
    // last, so nothing above can bring the chrome back
    if options.minimal {
        theme.merge(minimal_settings());
    }

    theme_log!(Debug, "{} theme has {} parameters", style, theme.len());
    Ok(theme)
}
