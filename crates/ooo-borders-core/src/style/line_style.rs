//! Border line style and named line sizes

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::error::Error;
use crate::names::NameTable;
use crate::uno_types::border_line_style as uno;

/// Border line styles, mirroring `com.sun.star.table.BorderLineStyle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderLineStyle {
    /// No border line
    None,
    /// Solid line
    #[default]
    Solid,
    /// Dotted line
    Dotted,
    /// Dashed line
    Dashed,
    /// Finely dashed line
    FineDashed,
    /// Repetition of one dash and one dot
    DashDot,
    /// Repetition of one dash and two dots
    DashDotDot,
    /// Double line. Both lines and the gap are equal and vary equally with the total width.
    Double,
    /// Two fixed thin lines separated by a variable gap
    DoubleThin,
    /// Thin line outside, thick line inside, small gap
    ThinThickSmallGap,
    /// Thin line outside, thick line inside, medium gap
    ThinThickMediumGap,
    /// Thin line outside, thick line inside, large gap
    ThinThickLargeGap,
    /// Thick line outside, thin line inside, small gap
    ThickThinSmallGap,
    /// Thick line outside, thin line inside, medium gap
    ThickThinMediumGap,
    /// Thick line outside, thin line inside, large gap
    ThickThinLargeGap,
    /// 3D embossed line
    Embossed,
    /// 3D engraved line
    Engraved,
    /// Outset line
    Outset,
    /// Inset line
    Inset,
    /// Upper bound of the valid style values. Not a drawable style.
    BorderLineStyleMax,
}

impl BorderLineStyle {
    /// Every drawable style, in UNO constant order, followed by `None`
    pub const ALL: [BorderLineStyle; 19] = [
        BorderLineStyle::Solid,
        BorderLineStyle::Dotted,
        BorderLineStyle::Dashed,
        BorderLineStyle::Double,
        BorderLineStyle::ThinThickSmallGap,
        BorderLineStyle::ThinThickMediumGap,
        BorderLineStyle::ThinThickLargeGap,
        BorderLineStyle::ThickThinSmallGap,
        BorderLineStyle::ThickThinMediumGap,
        BorderLineStyle::ThickThinLargeGap,
        BorderLineStyle::Embossed,
        BorderLineStyle::Engraved,
        BorderLineStyle::Outset,
        BorderLineStyle::Inset,
        BorderLineStyle::FineDashed,
        BorderLineStyle::DoubleThin,
        BorderLineStyle::DashDot,
        BorderLineStyle::DashDotDot,
        BorderLineStyle::None,
    ];

    /// The `LineStyle` value written into `BorderLine2`
    pub fn to_uno(self) -> i16 {
        match self {
            BorderLineStyle::None => uno::NONE,
            BorderLineStyle::Solid => uno::SOLID,
            BorderLineStyle::Dotted => uno::DOTTED,
            BorderLineStyle::Dashed => uno::DASHED,
            BorderLineStyle::Double => uno::DOUBLE,
            BorderLineStyle::ThinThickSmallGap => uno::THINTHICK_SMALLGAP,
            BorderLineStyle::ThinThickMediumGap => uno::THINTHICK_MEDIUMGAP,
            BorderLineStyle::ThinThickLargeGap => uno::THINTHICK_LARGEGAP,
            BorderLineStyle::ThickThinSmallGap => uno::THICKTHIN_SMALLGAP,
            BorderLineStyle::ThickThinMediumGap => uno::THICKTHIN_MEDIUMGAP,
            BorderLineStyle::ThickThinLargeGap => uno::THICKTHIN_LARGEGAP,
            BorderLineStyle::Embossed => uno::EMBOSSED,
            BorderLineStyle::Engraved => uno::ENGRAVED,
            BorderLineStyle::Outset => uno::OUTSET,
            BorderLineStyle::Inset => uno::INSET,
            BorderLineStyle::FineDashed => uno::FINE_DASHED,
            BorderLineStyle::DoubleThin => uno::DOUBLE_THIN,
            BorderLineStyle::DashDot => uno::DASH_DOT,
            BorderLineStyle::DashDotDot => uno::DASH_DOT_DOT,
            BorderLineStyle::BorderLineStyleMax => uno::BORDER_LINE_STYLE_MAX,
        }
    }

    /// Map a `LineStyle` value read from `BorderLine2` back to a style.
    ///
    /// `BORDER_LINE_STYLE_MAX` shares its value with `DASH_DOT_DOT` and
    /// resolves to the drawable style.
    pub fn from_uno(value: i16) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.to_uno() == value)
    }

    /// True for styles drawn as one line with no gap
    pub fn is_single_line(self) -> bool {
        matches!(
            self,
            BorderLineStyle::Solid
                | BorderLineStyle::Dotted
                | BorderLineStyle::Dashed
                | BorderLineStyle::FineDashed
                | BorderLineStyle::DashDot
                | BorderLineStyle::DashDotDot
        )
    }

    /// Canonical snake_case name
    pub fn name(self) -> &'static str {
        match self {
            BorderLineStyle::None => "none",
            BorderLineStyle::Solid => "solid",
            BorderLineStyle::Dotted => "dotted",
            BorderLineStyle::Dashed => "dashed",
            BorderLineStyle::FineDashed => "fine_dashed",
            BorderLineStyle::DashDot => "dash_dot",
            BorderLineStyle::DashDotDot => "dash_dot_dot",
            BorderLineStyle::Double => "double",
            BorderLineStyle::DoubleThin => "double_thin",
            BorderLineStyle::ThinThickSmallGap => "thin_thick_small_gap",
            BorderLineStyle::ThinThickMediumGap => "thin_thick_medium_gap",
            BorderLineStyle::ThinThickLargeGap => "thin_thick_large_gap",
            BorderLineStyle::ThickThinSmallGap => "thick_thin_small_gap",
            BorderLineStyle::ThickThinMediumGap => "thick_thin_medium_gap",
            BorderLineStyle::ThickThinLargeGap => "thick_thin_large_gap",
            BorderLineStyle::Embossed => "embossed",
            BorderLineStyle::Engraved => "engraved",
            BorderLineStyle::Outset => "outset",
            BorderLineStyle::Inset => "inset",
            BorderLineStyle::BorderLineStyleMax => "border_line_style_max",
        }
    }
}

impl fmt::Display for BorderLineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// BORDER_LINE_STYLE_MAX has no name.
static STYLE_NAMES: Lazy<NameTable<BorderLineStyle>> = Lazy::new(|| {
    let entries: Vec<(&str, BorderLineStyle)> = BorderLineStyle::ALL
        .iter()
        .map(|s| (s.name(), *s))
        .collect();
    NameTable::new("border line style", &entries)
});

impl FromStr for BorderLineStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        STYLE_NAMES.lookup(s)
    }
}

/// Named line widths offered by the office suite's border dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineSize {
    /// 0.05pt
    Hairline,
    /// 0.5pt
    VeryThin,
    /// 0.75pt
    Thin,
    /// 1.5pt
    Medium,
    /// 2.25pt
    Thick,
    /// 4.5pt
    ExtraThick,
}

impl LineSize {
    pub const ALL: [LineSize; 6] = [
        LineSize::Hairline,
        LineSize::VeryThin,
        LineSize::Thin,
        LineSize::Medium,
        LineSize::Thick,
        LineSize::ExtraThick,
    ];

    /// Width in points
    pub const fn pt(self) -> f64 {
        match self {
            LineSize::Hairline => 0.05,
            LineSize::VeryThin => 0.5,
            LineSize::Thin => 0.75,
            LineSize::Medium => 1.5,
            LineSize::Thick => 2.25,
            LineSize::ExtraThick => 4.5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LineSize::Hairline => "hairline",
            LineSize::VeryThin => "very_thin",
            LineSize::Thin => "thin",
            LineSize::Medium => "medium",
            LineSize::Thick => "thick",
            LineSize::ExtraThick => "extra_thick",
        }
    }
}

impl From<LineSize> for f64 {
    fn from(size: LineSize) -> f64 {
        size.pt()
    }
}

static SIZE_NAMES: Lazy<NameTable<LineSize>> = Lazy::new(|| {
    let entries: Vec<(&str, LineSize)> = LineSize::ALL.iter().map(|s| (s.name(), *s)).collect();
    NameTable::new("line size", &entries)
});

impl FromStr for LineSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SIZE_NAMES.lookup(s)
    }
}
