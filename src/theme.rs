mod composer;
mod context;
mod dict;
mod options;
mod value;

pub use composer::{
    base_theme, compose_theme, dark_settings, light_settings, minimal_settings, Style, GRID_KEY,
    PROP_CYCLE_KEY,
};
pub use context::{plotting_context, PlotContext, BASE_FONT_SIZE, GEOMETRY_BASE};
pub use dict::StyleDict;
pub use options::ThemeOptions;
pub use value::StyleValue;
