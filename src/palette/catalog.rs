use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::color::HexColor;
use super::tables::{
    Gradient, HueTable, ShadeTable, BRIGHT, COLORFUL_DARK, COLORFUL_LIGHT, GREEN, PLUM,
    PLUM_GREEN, PURPLE_TEAL, VIOLET,
};
use crate::error::{Error, Result};
use log::Level::Debug;

/// Number of colors a monochrome palette contributes to a color cycle.
pub const MONOCHROME_CYCLE_LEN: usize = 5;

/// Palette used when a theme is composed without naming one.
pub const DEFAULT_PALETTE: &str = "violet";

/// Light or dark look. Selects the theme's furniture colors and the slice
/// of a monochrome palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Light,
    Dark,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Light => f.pad("light"),
            Variant::Dark => f.pad("dark"),
        }
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Variant::Light),
            "dark" => Ok(Variant::Dark),
            _ => Err(Error::UnknownStyle(s.to_string())),
        }
    }
}

#[derive(Debug)]
pub enum Family {
    Sequential(&'static ShadeTable),
    /// A light/dark pair; palettes without a pair point both at one table.
    Categorical {
        light: &'static HueTable,
        dark: &'static HueTable,
    },
    Diverging(&'static Gradient),
}

impl Family {
    pub fn kind(&self) -> &'static str {
        match self {
            Family::Sequential(_) => "sequential",
            Family::Categorical { .. } => "categorical",
            Family::Diverging(_) => "diverging",
        }
    }

    fn colors(&self, variant: Variant) -> Vec<HexColor> {
        match self {
            Family::Diverging(gradient) => gradient.stops.to_vec(),
            Family::Categorical { light, dark } => match variant {
                Variant::Light => light.colors(),
                Variant::Dark => dark.colors(),
            },
            Family::Sequential(table) => {
                let colors = table.colors();
                match variant {
                    // lightest shades, lowest ordinal first
                    Variant::Dark => colors[..MONOCHROME_CYCLE_LEN].to_vec(),
                    // darkest shades, highest ordinal first
                    Variant::Light => colors[colors.len() - MONOCHROME_CYCLE_LEN..]
                        .iter()
                        .rev()
                        .copied()
                        .collect(),
                }
            }
        }
    }
}

#[derive(Debug)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub family: Family,
}

#[derive(Debug)]
pub struct Catalog {
    pub version: u32,
    pub entries: &'static [PaletteEntry],
}

impl Catalog {
    pub fn find(&self, name: &str) -> Option<&'static PaletteEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}

pub const CATALOG_VERSION: u32 = 1;

pub static CATALOG: Catalog = Catalog {
    version: CATALOG_VERSION,
    entries: &[
        PaletteEntry { name: "violet", family: Family::Sequential(&VIOLET) },
        PaletteEntry { name: "plum", family: Family::Sequential(&PLUM) },
        PaletteEntry { name: "green", family: Family::Sequential(&GREEN) },
        PaletteEntry {
            name: "cat_colorful",
            family: Family::Categorical { light: &COLORFUL_LIGHT, dark: &COLORFUL_DARK },
        },
        PaletteEntry {
            name: "cat_bright",
            family: Family::Categorical { light: &BRIGHT, dark: &BRIGHT },
        },
        PaletteEntry { name: "plum_green", family: Family::Diverging(&PLUM_GREEN) },
        PaletteEntry { name: "purple_teal", family: Family::Diverging(&PURPLE_TEAL) },
    ],
};

/// Resolve a palette identifier to the ordered colors of its cycle.
pub fn select_palette(name: &str, variant: Variant) -> Result<Vec<HexColor>> {
    let entry = CATALOG
        .find(name)
        .ok_or_else(|| Error::UnknownPalette(name.to_string()))?;
    let colors = entry.family.colors(variant);
    crate::palette_log!(
        Debug,
        "selected {} palette {} ({}): {} colors",
        entry.family.kind(),
        name,
        variant,
        colors.len()
    );
    Ok(colors)
}

pub fn palette_names() -> impl Iterator<Item = &'static str> {
    CATALOG.entries.iter().map(|e| e.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::tables::Shade;
    use std::collections::HashSet;

    fn monochrome() -> impl Iterator<Item = (&'static str, &'static ShadeTable)> {
        CATALOG.entries.iter().filter_map(|e| match e.family {
            Family::Sequential(table) => Some((e.name, table)),
            _ => None,
        })
    }

    #[test]
    fn dark_variant_takes_lowest_shades_ascending() {
        for (name, table) in monochrome() {
            let got = select_palette(name, Variant::Dark).unwrap();
            let want: Vec<HexColor> = Shade::ALL[..5].iter().map(|&s| table.get(s)).collect();
            assert_eq!(got, want, "{name}");
        }
    }

    #[test]
    fn light_variant_takes_highest_shades_descending() {
        for (name, table) in monochrome() {
            let got = select_palette(name, Variant::Light).unwrap();
            let want: Vec<HexColor> = [Shade::S900, Shade::S800, Shade::S700, Shade::S600, Shade::S500]
                .iter()
                .map(|&s| table.get(s))
                .collect();
            assert_eq!(got, want, "{name}");
        }
    }

    #[test]
    fn variants_are_disjoint_for_distinct_tables() {
        for (name, table) in monochrome() {
            let distinct: HashSet<HexColor> = table.colors().iter().copied().collect();
            if distinct.len() != 10 {
                continue;
            }
            let light: HashSet<HexColor> =
                select_palette(name, Variant::Light).unwrap().into_iter().collect();
            let dark: HashSet<HexColor> =
                select_palette(name, Variant::Dark).unwrap().into_iter().collect();
            assert!(light.is_disjoint(&dark), "{name}");
        }
    }

    #[test]
    fn diverging_ignores_variant() {
        let light = select_palette("plum_green", Variant::Light).unwrap();
        let dark = select_palette("plum_green", Variant::Dark).unwrap();
        assert_eq!(light, PLUM_GREEN.stops);
        assert_eq!(light, dark);
        assert_eq!(select_palette("purple_teal", Variant::Dark).unwrap().len(), 16);
    }

    #[test]
    fn categorical_keeps_insertion_order() {
        let bright = select_palette("cat_bright", Variant::Light).unwrap();
        assert_eq!(bright, ["#648FFF", "#785EF0", "#DC267F", "#FE6100", "#FFB000"]);
        assert_eq!(bright, select_palette("cat_bright", Variant::Dark).unwrap());
    }

    #[test]
    fn categorical_pair_follows_variant() {
        assert_eq!(select_palette("cat_colorful", Variant::Light).unwrap()[0], "#A543EF");
        assert_eq!(select_palette("cat_colorful", Variant::Dark).unwrap()[0], "#C276FC");
    }

    #[test]
    fn unknown_palette_is_an_error() {
        for name in ["", "teal", "cat_colorful_light", "Violet"] {
            assert!(matches!(
                select_palette(name, Variant::Light),
                Err(Error::UnknownPalette(n)) if n == name
            ));
        }
    }

    #[test]
    fn variant_parsing() {
        assert_eq!("dark".parse::<Variant>().unwrap(), Variant::Dark);
        assert_eq!("light".parse::<Variant>().unwrap(), Variant::Light);
        for bad in ["dim", "Dark", " light "] {
            assert!(matches!(bad.parse::<Variant>(), Err(Error::UnknownStyle(_))), "{bad:?}");
        }
    }

    #[test]
    fn catalog_names_are_unique() {
        let names: Vec<&str> = palette_names().collect();
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(names.len(), unique.len());
        assert!(names.contains(&DEFAULT_PALETTE));
    }
}
