//! Border line width decomposition
//!
//! A border line style with two strokes is drawn as an outer line, a gap and
//! an inner line. Given the total width of the border, each style decides how
//! much of it goes to each part. Some parts scale with the total width, the
//! others have a fixed size in twips.
//!
//! ```rust
//! use ooo_borders_core::style::{border_widths, BorderLineStyle, BorderWidths};
//!
//! let widths = border_widths(60, BorderLineStyle::Double).unwrap();
//! assert_eq!(widths, BorderWidths { outer: 20, inner: 20, gap: 20 });
//! ```

use std::ops::BitOr;

use crate::error::{Error, Result};

use super::BorderLineStyle;

/// Fixed inner line of thin-thick small gap, in twips
pub const THINTHICK_SMALLGAP_LINE2: f64 = 15.0;
/// Fixed gap of thin-thick small gap, in twips
pub const THINTHICK_SMALLGAP_GAP: f64 = 15.0;
/// Fixed outer line of thin-thick large gap, in twips
pub const THINTHICK_LARGEGAP_LINE1: f64 = 30.0;
/// Fixed inner line of thin-thick large gap, in twips
pub const THINTHICK_LARGEGAP_LINE2: f64 = 15.0;
/// Fixed outer line of thick-thin small gap, in twips
pub const THICKTHIN_SMALLGAP_LINE1: f64 = 15.0;
/// Fixed gap of thick-thin small gap, in twips
pub const THICKTHIN_SMALLGAP_GAP: f64 = 15.0;
/// Fixed outer line of thick-thin large gap, in twips
pub const THICKTHIN_LARGEGAP_LINE1: f64 = 15.0;
/// Fixed inner line of thick-thin large gap, in twips
pub const THICKTHIN_LARGEGAP_LINE2: f64 = 30.0;
/// Fixed outer line of outset, in twips
pub const OUTSET_LINE1: f64 = 15.0;
/// Fixed inner line of inset, in twips
pub const INSET_LINE2: f64 = 15.0;

/// Which parts of a border line scale with the total width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BorderWidthFlags(u8);

impl BorderWidthFlags {
    /// Nothing scales
    pub const NONE: Self = Self(0);
    /// The outer line scales
    pub const CHANGE_LINE1: Self = Self(1);
    /// The inner line scales
    pub const CHANGE_LINE2: Self = Self(2);
    /// The gap scales
    pub const CHANGE_DIST: Self = Self(4);
    /// Everything scales
    pub const CHANGE_ALL: Self = Self(1 | 2 | 4);

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for BorderWidthFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Width rule for one border line style.
///
/// A rate whose flag is set is a fraction of the total width; otherwise it
/// is a fixed size in twips that is subtracted from the scaling parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderWidthImpl {
    flags: BorderWidthFlags,
    rate1: f64,
    rate2: f64,
    rate_gap: f64,
}

impl BorderWidthImpl {
    pub const fn new(flags: BorderWidthFlags, rate1: f64, rate2: f64, rate_gap: f64) -> Self {
        Self {
            flags,
            rate1,
            rate2,
            rate_gap,
        }
    }

    /// Look up the width rule of a style.
    ///
    /// `None` gets an all-zero rule. `BorderLineStyleMax` has no rule.
    pub fn for_style(style: BorderLineStyle) -> Result<Self> {
        use BorderLineStyle as S;
        use BorderWidthFlags as F;

        let rule = match style {
            S::None => Self::new(F::NONE, 0.0, 0.0, 0.0),
            S::Solid | S::Dotted | S::Dashed | S::FineDashed | S::DashDot | S::DashDotDot => {
                Self::new(F::CHANGE_LINE1, 1.0, 0.0, 0.0)
            }
            S::Double => Self::new(F::CHANGE_ALL, 1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0),
            S::DoubleThin => Self::new(F::CHANGE_DIST, 10.0, 10.0, 1.0),
            S::ThinThickSmallGap => Self::new(
                F::CHANGE_LINE1,
                1.0,
                THINTHICK_SMALLGAP_LINE2,
                THINTHICK_SMALLGAP_GAP,
            ),
            S::ThinThickMediumGap => Self::new(F::CHANGE_ALL, 0.5, 0.25, 0.25),
            S::ThinThickLargeGap => Self::new(
                F::CHANGE_DIST,
                THINTHICK_LARGEGAP_LINE1,
                THINTHICK_LARGEGAP_LINE2,
                1.0,
            ),
            S::ThickThinSmallGap => Self::new(
                F::CHANGE_LINE2,
                THICKTHIN_SMALLGAP_LINE1,
                1.0,
                THICKTHIN_SMALLGAP_GAP,
            ),
            S::ThickThinMediumGap => Self::new(F::CHANGE_ALL, 0.25, 0.5, 0.25),
            S::ThickThinLargeGap => Self::new(
                F::CHANGE_DIST,
                THICKTHIN_LARGEGAP_LINE1,
                THICKTHIN_LARGEGAP_LINE2,
                1.0,
            ),
            // Word compat: 0.75pt up to 3pt and then 3pt
            S::Embossed | S::Engraved => Self::new(F::CHANGE_ALL, 0.25, 0.25, 0.5),
            S::Outset => Self::new(F::CHANGE_DIST | F::CHANGE_LINE2, OUTSET_LINE1, 0.5, 0.5),
            S::Inset => Self::new(F::CHANGE_DIST | F::CHANGE_LINE1, 0.5, INSET_LINE2, 0.5),
            S::BorderLineStyleMax => return Err(Error::InvalidStyle(style)),
        };
        Ok(rule)
    }

    pub fn flags(&self) -> BorderWidthFlags {
        self.flags
    }

    /// Size of a part that does not scale, or 0 if it does
    fn fixed(&self, flag: BorderWidthFlags, rate: f64) -> i64 {
        if self.flags.contains(flag) {
            0
        } else {
            rate as i64
        }
    }

    /// Scaled part: `rate * width` rounded half up, less the fixed parts
    fn scaled(rate: f64, width: i64, fixed: i64) -> i64 {
        let part = (rate * width as f64 + 0.5) as i64;
        (part - fixed).max(0)
    }

    /// Outer line width in twips for a total `width` in twips
    pub fn line1(&self, width: i64) -> i64 {
        if !self.flags.contains(BorderWidthFlags::CHANGE_LINE1) {
            return self.rate1 as i64;
        }
        let fixed = self.fixed(BorderWidthFlags::CHANGE_LINE2, self.rate2)
            + self.fixed(BorderWidthFlags::CHANGE_DIST, self.rate_gap);
        let result = Self::scaled(self.rate1, width, fixed);
        if result == 0 && self.rate1 > 0.0 && width > 0 {
            // a 1 twip double border is drawn as a 1 twip single border
            1
        } else {
            result
        }
    }

    /// Inner line width in twips for a total `width` in twips
    pub fn line2(&self, width: i64) -> i64 {
        if !self.flags.contains(BorderWidthFlags::CHANGE_LINE2) {
            return self.rate2 as i64;
        }
        let fixed = self.fixed(BorderWidthFlags::CHANGE_LINE1, self.rate1)
            + self.fixed(BorderWidthFlags::CHANGE_DIST, self.rate_gap);
        Self::scaled(self.rate2, width, fixed)
    }

    /// Gap width in twips for a total `width` in twips
    pub fn gap(&self, width: i64) -> i64 {
        if !self.flags.contains(BorderWidthFlags::CHANGE_DIST) {
            return self.rate_gap as i64;
        }
        let fixed = self.fixed(BorderWidthFlags::CHANGE_LINE1, self.rate1)
            + self.fixed(BorderWidthFlags::CHANGE_LINE2, self.rate2);
        Self::scaled(self.rate_gap, width, fixed)
    }

    /// All three parts for a total `width` in twips
    pub fn widths(&self, width: i64) -> BorderWidths {
        BorderWidths {
            outer: self.line1(width),
            inner: self.line2(width),
            gap: self.gap(width),
        }
    }

    /// Recover the total width from three parts.
    ///
    /// Returns `None` when the parts can't come from this rule: a fixed part
    /// has the wrong size, or the scaling parts imply different totals.
    pub fn guess_width(&self, line1: i64, line2: i64, gap: i64) -> Option<i64> {
        let parts = [
            (BorderWidthFlags::CHANGE_LINE1, line1, self.rate1),
            (BorderWidthFlags::CHANGE_LINE2, line2, self.rate2),
            (BorderWidthFlags::CHANGE_DIST, gap, self.rate_gap),
        ];

        let mut guessed: Option<i64> = None;
        for (flag, tested, rate) in parts {
            if self.flags.contains(flag) {
                if rate <= 0.0 {
                    continue;
                }
                let total = (tested as f64 / rate).round() as i64;
                match guessed {
                    Some(prev) if (prev - total).abs() > 1 => return None,
                    Some(_) => {}
                    None => guessed = Some(total),
                }
            } else if tested != rate as i64 {
                return None;
            }
        }
        Some(line1 + line2 + gap)
    }
}

/// The three parts of a border line, in twips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderWidths {
    /// Outer line width
    pub outer: i64,
    /// Inner line width
    pub inner: i64,
    /// Distance between the lines
    pub gap: i64,
}

impl BorderWidths {
    /// Sum of the three parts
    pub fn total(&self) -> i64 {
        self.outer + self.inner + self.gap
    }
}

/// Split a total border width in twips into outer line, inner line and gap.
pub fn border_widths(total_twips: i64, style: BorderLineStyle) -> Result<BorderWidths> {
    if total_twips < 0 {
        tracing::warn!(total_twips, "negative border width");
        return Err(Error::InvalidWidth(total_twips as f64));
    }
    let rule = BorderWidthImpl::for_style(style)?;
    let widths = rule.widths(total_twips);
    tracing::trace!(
        %style,
        total_twips,
        outer = widths.outer,
        inner = widths.inner,
        gap = widths.gap,
        "computed border widths"
    );
    Ok(widths)
}
