mod catalog;
mod color;
pub mod tables;

pub use catalog::{
    palette_names, select_palette, Catalog, Family, PaletteEntry, Variant, CATALOG,
    CATALOG_VERSION, DEFAULT_PALETTE, MONOCHROME_CYCLE_LEN,
};
pub use color::HexColor;
pub use tables::{Gradient, HueTable, Shade, ShadeTable};
