use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A 6-digit RGB color, written as `#RRGGBB`.
///
/// Values are stored decoded, so every `HexColor` that exists is well formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor([u8; 3]);

const fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

const fn decode(s: &str) -> Option<[u8; 3]> {
    let bytes = s.as_bytes();
    if bytes.len() != 7 || bytes[0] != b'#' {
        return None;
    }
    let mut rgb = [0u8; 3];
    let mut i = 0;
    while i < 3 {
        let hi = match hex_digit(bytes[1 + 2 * i]) {
            Some(v) => v,
            None => return None,
        };
        let lo = match hex_digit(bytes[2 + 2 * i]) {
            Some(v) => v,
            None => return None,
        };
        rgb[i] = hi * 16 + lo;
        i += 1;
    }
    Some(rgb)
}

impl HexColor {
    /// Table literal constructor. Only used in `const` position, where a
    /// malformed literal fails the build.
    pub(crate) const fn lit(s: &str) -> Self {
        match decode(s) {
            Some(rgb) => Self(rgb),
            None => panic!("malformed hex color literal"),
        }
    }

    pub const fn from_rgb(rgb: [u8; 3]) -> Self {
        Self(rgb)
    }

    pub fn parse(s: &str) -> Result<Self, Error> {
        decode(s.trim())
            .map(Self)
            .ok_or_else(|| Error::InvalidHex(s.to_string()))
    }

    pub fn to_rgb(self) -> [u8; 3] {
        self.0
    }

    /// The `RRGGBB` digits without the leading `#`, as style files expect.
    pub fn digits(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0[0], self.0[1], self.0[2])
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0[0], self.0[1], self.0[2])
    }
}

impl FromStr for HexColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl PartialEq<&str> for HexColor {
    fn eq(&self, other: &&str) -> bool {
        decode(other).is_some_and(|rgb| rgb == self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_upper_and_lower_case() {
        let a = HexColor::parse("#648fff").unwrap();
        let b = HexColor::parse("#648FFF").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_rgb(), [0x64, 0x8F, 0xFF]);
        assert_eq!(a.to_string(), "#648FFF");
        assert_eq!(a.digits(), "648FFF");
    }

    #[test]
    fn rejects_malformed_values() {
        for bad in ["648FFF", "#648FF", "#648FFFF", "#GG8FFF", "", "#"] {
            assert!(
                matches!(HexColor::parse(bad), Err(Error::InvalidHex(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn compares_against_str() {
        assert_eq!(HexColor::lit("#25272C"), "#25272c");
        assert!(HexColor::lit("#25272C") != "#25272D");
    }
}
