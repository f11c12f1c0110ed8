//! Static color tables.
//!
//! Sequential tables are monochrome 50-900 scales, categorical tables are
//! ordered named hues and diverging tables are ordered gradients. `GREY` is
//! the base scale the themes draw chart furniture from.

use super::color::HexColor;

/// Brightness level of a shade table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
}

impl Shade {
    /// Every level, lowest ordinal first.
    pub const ALL: [Shade; 10] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
    ];

    pub fn value(self) -> u16 {
        match self {
            Shade::S50 => 50,
            Shade::S100 => 100,
            Shade::S200 => 200,
            Shade::S300 => 300,
            Shade::S400 => 400,
            Shade::S500 => 500,
            Shade::S600 => 600,
            Shade::S700 => 700,
            Shade::S800 => 800,
            Shade::S900 => 900,
        }
    }

    pub fn from_value(value: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.value() == value)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One color per [`Shade`], stored lowest ordinal first. Shade 50 is the
/// lightest end of every table.
#[derive(Debug)]
pub struct ShadeTable {
    pub name: &'static str,
    shades: [HexColor; 10],
}

impl ShadeTable {
    pub fn get(&self, shade: Shade) -> HexColor {
        self.shades[shade.index()]
    }

    /// `(shade, color)` pairs, lowest ordinal first.
    pub fn iter(&self) -> impl Iterator<Item = (Shade, HexColor)> + '_ {
        Shade::ALL.into_iter().zip(self.shades.iter().copied())
    }

    pub fn colors(&self) -> &[HexColor; 10] {
        &self.shades
    }
}

/// Named hues; the order of `hues` is the cycling order.
#[derive(Debug)]
pub struct HueTable {
    pub name: &'static str,
    pub hues: &'static [(&'static str, HexColor)],
}

impl HueTable {
    pub fn colors(&self) -> Vec<HexColor> {
        self.hues.iter().map(|&(_, color)| color).collect()
    }
}

#[derive(Debug)]
pub struct Gradient {
    pub name: &'static str,
    pub stops: &'static [HexColor],
}

const fn shades(name: &'static str, hex: [&str; 10]) -> ShadeTable {
    let mut out = [HexColor::from_rgb([0, 0, 0]); 10];
    let mut i = 0;
    while i < 10 {
        out[i] = HexColor::lit(hex[i]);
        i += 1;
    }
    ShadeTable { name, shades: out }
}

// Sequential

pub static VIOLET: ShadeTable = shades(
    "violet",
    [
        "#E2D4FF", "#AF8AFF", "#9559FF", "#672BEC", "#4D1EB7", "#46209B", "#3F1E8A", "#2E1466",
        "#200E48", "#160048",
    ],
);

pub static PLUM: ShadeTable = shades(
    "plum",
    [
        "#CE82BF", "#EDCFE7", "#DEAAD4", "#CE82BF", "#C05DAC", "#B2399A", "#973083", "#7E286D",
        "#652058", "#501A45",
    ],
);

pub static GREEN: ShadeTable = shades(
    "green",
    [
        "#A7BF7B", "#DEE7CD", "#C3D4A5", "#A7BF7B", "#8DAC54", "#749A2E", "#638327", "#526D21",
        "#42581A", "#344515",
    ],
);

// Categorical

pub static COLORFUL_LIGHT: HueTable = HueTable {
    name: "colorful_light",
    hues: &[
        ("Purple", HexColor::lit("#A543EF")),
        ("Magenta", HexColor::lit("#9F1853")),
        ("Yellow", HexColor::lit("#9C7110")),
        ("Blue", HexColor::lit("#002D9C")),
        ("Teal", HexColor::lit("#12847C")),
        ("Cyan", HexColor::lit("#153167")),
    ],
};

pub static COLORFUL_DARK: HueTable = HueTable {
    name: "colorful_dark",
    hues: &[
        ("Purple", HexColor::lit("#C276FC")),
        ("Magenta", HexColor::lit("#D12771")),
        ("Yellow", HexColor::lit("#FEB000")),
        ("Blue", HexColor::lit("#4589FF")),
        ("Teal", HexColor::lit("#11AA9F")),
        ("Cyan", HexColor::lit("#5073B7")),
    ],
};

pub static BRIGHT: HueTable = HueTable {
    name: "bright",
    hues: &[
        ("Blue", HexColor::lit("#648FFF")),
        ("Purple", HexColor::lit("#785EF0")),
        ("Magenta", HexColor::lit("#DC267F")),
        ("Orange", HexColor::lit("#FE6100")),
        ("Golden", HexColor::lit("#FFB000")),
    ],
};

// Diverging

pub static PLUM_GREEN: Gradient = Gradient {
    name: "plum_green",
    stops: &[
        HexColor::lit("#30003A"),
        HexColor::lit("#611770"),
        HexColor::lit("#86599B"),
        HexColor::lit("#E1C9E2"),
        HexColor::lit("#D1EEC9"),
        HexColor::lit("#4BA24F"),
        HexColor::lit("#19672A"),
        HexColor::lit("#063615"),
    ],
};

pub static PURPLE_TEAL: Gradient = Gradient {
    name: "purple_teal",
    stops: &[
        HexColor::lit("#491D8B"),
        HexColor::lit("#6929C4"),
        HexColor::lit("#8A3FFC"),
        HexColor::lit("#A56EFF"),
        HexColor::lit("#BE95FF"),
        HexColor::lit("#D4BBFF"),
        HexColor::lit("#E8DAFF"),
        HexColor::lit("#F6F2FF"),
        HexColor::lit("#D9FBFB"),
        HexColor::lit("#9EF0F0"),
        HexColor::lit("#3DDBD9"),
        HexColor::lit("#08BDBA"),
        HexColor::lit("#009D9A"),
        HexColor::lit("#007D79"),
        HexColor::lit("#005D5D"),
        HexColor::lit("#004144"),
    ],
};

// Base

pub static GREY: ShadeTable = shades(
    "grey",
    [
        "#F9F9FA", "#EBECEE", "#DDDEE2", "#C3C6CD", "#AAAEBB", "#8C929F", "#707785", "#555B66",
        "#3C4048", "#25272C",
    ],
);

pub static SHADE_TABLES: [&ShadeTable; 4] = [&VIOLET, &PLUM, &GREEN, &GREY];
