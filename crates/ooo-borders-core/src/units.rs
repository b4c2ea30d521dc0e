//! Length unit conversion
//!
//! Every unit is defined by an exact rational factor to millimetres. The
//! pairwise conversion factors are reduced integer ratios, so converting
//! never accumulates error from intermediate floating point factors.
//!
//! ```rust
//! use ooo_borders_core::units::{UnitConvert, UnitLength};
//!
//! assert_eq!(UnitConvert::to_twips(0.75, UnitLength::Pt), 15.0);
//! assert_eq!(UnitConvert::convert_pt_mm100(1.0), 35);
//! ```

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::error::Error;
use crate::names::NameTable;

/// Length units understood by the office suite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum UnitLength {
    /// 1/100 mm
    Mm100 = 0,
    /// 1/10 mm
    Mm10,
    /// Millimetre
    Mm,
    /// Centimetre
    Cm,
    /// Metre
    M,
    /// Kilometre
    Km,
    /// English Metric Unit: 1/360000 cm
    Emu,
    /// Twentieth of a point
    Twip,
    /// Point: 1/72 in
    Pt,
    /// Pica: 1/6 in
    Pc,
    /// 1/1000 in
    In1000,
    /// 1/100 in
    In100,
    /// 1/10 in
    In10,
    /// Inch
    In,
    /// Foot
    Ft,
    /// Mile
    Mi,
    /// PPT master unit: 1/576 in
    Master,
    /// Pixel: 15 twip (96 ppi)
    Px,
    /// Character: 210 twip
    Ch,
    /// Line: 312 twip
    Line,
}

/// Number of length units
const UNIT_COUNT: usize = 20;

impl UnitLength {
    /// All units in table order
    pub const ALL: [UnitLength; UNIT_COUNT] = [
        UnitLength::Mm100,
        UnitLength::Mm10,
        UnitLength::Mm,
        UnitLength::Cm,
        UnitLength::M,
        UnitLength::Km,
        UnitLength::Emu,
        UnitLength::Twip,
        UnitLength::Pt,
        UnitLength::Pc,
        UnitLength::In1000,
        UnitLength::In100,
        UnitLength::In10,
        UnitLength::In,
        UnitLength::Ft,
        UnitLength::Mi,
        UnitLength::Master,
        UnitLength::Px,
        UnitLength::Ch,
        UnitLength::Line,
    ];

    /// Size of one unit in millimetres, as `(numerator, denominator)`
    const fn to_mm(self) -> (u64, u64) {
        match self {
            UnitLength::Mm100 => (1, 100),
            UnitLength::Mm10 => (1, 10),
            UnitLength::Mm => (1, 1),
            UnitLength::Cm => (10, 1),
            UnitLength::M => (1000, 1),
            UnitLength::Km => (1_000_000, 1),
            UnitLength::Emu => (1, 36_000),
            UnitLength::Twip => (254, 10 * 1440),
            UnitLength::Pt => (254, 10 * 72),
            UnitLength::Pc => (254, 10 * 6),
            UnitLength::In1000 => (254, 10_000),
            UnitLength::In100 => (254, 1000),
            UnitLength::In10 => (254, 100),
            UnitLength::In => (254, 10),
            UnitLength::Ft => (254 * 12, 10),
            UnitLength::Mi => (254 * 12 * 5280, 10),
            UnitLength::Master => (254, 10 * 576),
            UnitLength::Px => (254 * 15, 10 * 1440),
            UnitLength::Ch => (254 * 210, 10 * 1440),
            UnitLength::Line => (254 * 312, 10 * 1440),
        }
    }

    /// Short unit symbol
    pub fn symbol(self) -> &'static str {
        match self {
            UnitLength::Mm100 => "mm100",
            UnitLength::Mm10 => "mm10",
            UnitLength::Mm => "mm",
            UnitLength::Cm => "cm",
            UnitLength::M => "m",
            UnitLength::Km => "km",
            UnitLength::Emu => "emu",
            UnitLength::Twip => "twip",
            UnitLength::Pt => "pt",
            UnitLength::Pc => "pc",
            UnitLength::In1000 => "in1000",
            UnitLength::In100 => "in100",
            UnitLength::In10 => "in10",
            UnitLength::In => "in",
            UnitLength::Ft => "ft",
            UnitLength::Mi => "mi",
            UnitLength::Master => "master",
            UnitLength::Px => "px",
            UnitLength::Ch => "ch",
            UnitLength::Line => "line",
        }
    }
}

impl fmt::Display for UnitLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

static UNIT_NAMES: Lazy<NameTable<UnitLength>> = Lazy::new(|| {
    let mut entries: Vec<(&str, UnitLength)> =
        UnitLength::ALL.iter().map(|u| (u.symbol(), *u)).collect();
    entries.extend_from_slice(&[
        ("point", UnitLength::Pt),
        ("points", UnitLength::Pt),
        ("dxa", UnitLength::Twip),
        ("twips", UnitLength::Twip),
        ("millimeter", UnitLength::Mm),
        ("centimeter", UnitLength::Cm),
        ("inch", UnitLength::In),
        ("pixel", UnitLength::Px),
    ]);
    NameTable::new("length unit", &entries)
});

impl FromStr for UnitLength {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UNIT_NAMES.lookup(s)
    }
}

/// A reduced `mul / div` pair converting one unit into another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MulDiv {
    mul: u64,
    div: u64,
}

fn gcd(mut m: u64, mut n: u64) -> u64 {
    while n != 0 {
        let r = m % n;
        m = n;
        n = r;
    }
    m
}

/// `TABLE[from][to]` converts a value in `from` units into `to` units
static TABLE: Lazy<[[MulDiv; UNIT_COUNT]; UNIT_COUNT]> = Lazy::new(|| {
    let mut table = [[MulDiv { mul: 1, div: 1 }; UNIT_COUNT]; UNIT_COUNT];
    for (i, from) in UnitLength::ALL.iter().enumerate() {
        let (fm, fd) = from.to_mm();
        for (j, to) in UnitLength::ALL.iter().enumerate() {
            let (tm, td) = to.to_mm();
            let mul = fm * td;
            let div = fd * tm;
            let g = gcd(mul, div);
            table[i][j] = MulDiv {
                mul: mul / g,
                div: div / g,
            };
        }
    }
    table
});

/// Unit conversion helpers
///
/// None of the `convert*` functions round unless their name says so; callers
/// round at the point of storage.
pub struct UnitConvert;

impl UnitConvert {
    /// Convert `num` from one unit to another: `num * (mul / div)`
    pub fn convert(num: f64, from: UnitLength, to: UnitLength) -> f64 {
        let md = TABLE[from as usize][to as usize];
        num * (md.mul as f64 / md.div as f64)
    }

    /// Convert `num` to twips
    pub fn to_twips(num: f64, from: UnitLength) -> f64 {
        Self::convert(num, from, UnitLength::Twip)
    }

    /// Convert twips to 1/100 mm
    pub fn convert_twip_mm100(num: f64) -> f64 {
        Self::convert(num, UnitLength::Twip, UnitLength::Mm100)
    }

    /// Convert points to 1/100 mm, rounded
    pub fn convert_pt_mm100(num: f64) -> i32 {
        Self::convert(num, UnitLength::Pt, UnitLength::Mm100).round() as i32
    }

    /// Convert 1/100 mm to points
    pub fn convert_mm100_pt(num: f64) -> f64 {
        Self::convert(num, UnitLength::Mm100, UnitLength::Pt)
    }

    /// Convert millimetres to 1/100 mm, rounded
    pub fn convert_mm_mm100(num: f64) -> i32 {
        Self::convert(num, UnitLength::Mm, UnitLength::Mm100).round() as i32
    }

    /// Convert 1/100 mm to millimetres
    pub fn convert_mm100_mm(num: f64) -> f64 {
        Self::convert(num, UnitLength::Mm100, UnitLength::Mm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_pt_twip() {
        assert_eq!(UnitConvert::to_twips(1.0, UnitLength::Pt), 20.0);
        assert_eq!(UnitConvert::to_twips(0.75, UnitLength::Pt), 15.0);
        assert_close(
            UnitConvert::convert(60.0, UnitLength::Twip, UnitLength::Pt),
            3.0,
        );
    }

    #[test]
    fn test_pt_mm100() {
        assert_close(
            UnitConvert::convert(1.0, UnitLength::Pt, UnitLength::Mm100),
            2540.0 / 72.0,
        );
        assert_eq!(UnitConvert::convert_pt_mm100(0.75), 26);
        assert_eq!(UnitConvert::convert_pt_mm100(1.0), 35);
        assert_close(UnitConvert::convert_mm100_pt(2540.0), 72.0);
    }

    #[test]
    fn test_twip_mm100() {
        assert_close(UnitConvert::convert_twip_mm100(72.0), 127.0);
        assert_close(UnitConvert::convert_twip_mm100(15.0), 15.0 * 127.0 / 72.0);
    }

    #[test]
    fn test_metric() {
        assert_eq!(UnitConvert::convert_mm_mm100(2.5), 250);
        assert_close(UnitConvert::convert_mm100_mm(250.0), 2.5);
        assert_close(UnitConvert::convert(1.0, UnitLength::Km, UnitLength::Cm), 100_000.0);
    }

    #[test]
    fn test_imperial() {
        assert_close(UnitConvert::convert(1.0, UnitLength::In, UnitLength::Pt), 72.0);
        assert_close(UnitConvert::convert(1.0, UnitLength::Ft, UnitLength::In), 12.0);
        assert_close(UnitConvert::convert(1.0, UnitLength::Mi, UnitLength::Ft), 5280.0);
        assert_close(UnitConvert::convert(1.0, UnitLength::In, UnitLength::Px), 96.0);
        assert_close(UnitConvert::convert(1.0, UnitLength::In, UnitLength::Emu), 914_400.0);
    }

    #[test]
    fn test_table_is_reduced() {
        let md = TABLE[UnitLength::Pt as usize][UnitLength::Twip as usize];
        assert_eq!(md, MulDiv { mul: 20, div: 1 });
        let md = TABLE[UnitLength::Twip as usize][UnitLength::Mm100 as usize];
        assert_eq!(md, MulDiv { mul: 127, div: 72 });
        for unit in UnitLength::ALL {
            let md = TABLE[unit as usize][unit as usize];
            assert_eq!(md, MulDiv { mul: 1, div: 1 });
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("pt".parse::<UnitLength>(), Ok(UnitLength::Pt));
        assert_eq!("MM100".parse::<UnitLength>(), Ok(UnitLength::Mm100));
        assert_eq!("Twips".parse::<UnitLength>(), Ok(UnitLength::Twip));
        assert!("furlong".parse::<UnitLength>().is_err());
    }
}
