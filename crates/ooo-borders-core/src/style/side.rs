//! One side of a border

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};
use crate::units::{UnitConvert, UnitLength};
use crate::uno_types::{border_line_style, BorderLine, BorderLine2};

use super::border_width::border_widths;
use super::color;
use super::{BorderLineStyle, LineSize};

/// Widest border line the office suite accepts, in points
pub const MAX_WIDTH_PT: f64 = 9.0;

/// Slack above [`MAX_WIDTH_PT`] for widths computed in floating point
const WIDTH_TOLERANCE: f64 = 1e-7;

/// A single border edge: style, color and width.
///
/// The outer line, inner line and gap widths are computed from the style and
/// width when the side is built and stored in 1/100 mm, ready to be written
/// as a `BorderLine2`. Sides are immutable; the `with_*` methods return a new
/// side.
///
/// Two sides are equal when their `BorderLine2` records are equal.
///
/// ```rust
/// use ooo_borders_core::style::{BorderLineStyle, Side};
///
/// let side = Side::new(BorderLineStyle::Double, 0xFF0000, 3.0).unwrap();
/// let line = side.border_line2();
/// assert_eq!(line.outer_line_width, 35);
/// assert_eq!(line.inner_line_width, 35);
/// assert_eq!(line.line_distance, 35);
/// assert_eq!(line.line_width, 106);
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Side {
    style: BorderLineStyle,
    width_pt: f64,
    line: BorderLine2,
}

impl Side {
    /// A side with no border line. Applying it removes an existing border.
    pub const EMPTY: Side = Side {
        style: BorderLineStyle::None,
        width_pt: 0.0,
        line: BorderLine2 {
            color: 0,
            inner_line_width: 0,
            outer_line_width: 0,
            line_distance: 0,
            line_style: border_line_style::NONE,
            line_width: 0,
        },
    };

    /// Create a side.
    ///
    /// `width` is in points and accepts a [`LineSize`]. A zero width draws
    /// no line.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidColor`] if `color` is negative
    /// - [`Error::InvalidWidth`] if `width` is outside `0..=9` points
    /// - [`Error::InvalidStyle`] for [`BorderLineStyle::BorderLineStyleMax`]
    pub fn new(style: BorderLineStyle, color: i32, width: impl Into<f64>) -> Result<Self> {
        let width_pt = width.into();

        if color < 0 {
            tracing::warn!(color, "rejected negative border color");
            return Err(Error::InvalidColor(color));
        }
        if !(0.0..=MAX_WIDTH_PT + WIDTH_TOLERANCE).contains(&width_pt) {
            tracing::warn!(width_pt, "rejected border width");
            return Err(Error::InvalidWidth(width_pt));
        }

        let twips = UnitConvert::to_twips(width_pt, UnitLength::Pt).round() as i64;
        let widths = border_widths(twips, style)?;

        let line = BorderLine2 {
            color,
            inner_line_width: twip_to_mm100(widths.inner),
            outer_line_width: twip_to_mm100(widths.outer),
            line_distance: twip_to_mm100(widths.gap),
            line_style: style.to_uno(),
            line_width: UnitConvert::convert_pt_mm100(width_pt),
        };
        tracing::debug!(%style, color, width_pt, ?line, "built border side");

        Ok(Self {
            style,
            width_pt,
            line,
        })
    }

    /// The empty side; see [`Side::EMPTY`].
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Rebuild a side from a `BorderLine2` record.
    ///
    /// The record's widths are kept as they are rather than recomputed.
    pub fn from_border_line2(record: &BorderLine2) -> Result<Self> {
        let style = BorderLineStyle::from_uno(record.line_style)
            .ok_or(Error::UnknownLineStyle(record.line_style))?;

        let pt = UnitConvert::convert_mm100_pt(f64::from(record.line_width));
        let mut width_pt = (pt * 100.0).round() / 100.0;
        if width_pt > MAX_WIDTH_PT
            && record.line_width <= UnitConvert::convert_pt_mm100(MAX_WIDTH_PT)
        {
            width_pt = MAX_WIDTH_PT;
        }

        let mut side = Self::new(style, record.color, width_pt)?;
        side.line = *record;
        Ok(side)
    }

    pub fn style(&self) -> BorderLineStyle {
        self.style
    }

    pub fn color(&self) -> i32 {
        self.line.color
    }

    /// Nominal width in points
    pub fn width_pt(&self) -> f64 {
        self.width_pt
    }

    /// Nominal width in 1/100 mm
    pub fn line_width(&self) -> i32 {
        self.line.line_width
    }

    /// Outer line width in 1/100 mm
    pub fn outer_line_width(&self) -> i16 {
        self.line.outer_line_width
    }

    /// Inner line width in 1/100 mm
    pub fn inner_line_width(&self) -> i16 {
        self.line.inner_line_width
    }

    /// Distance between the lines in 1/100 mm
    pub fn line_distance(&self) -> i16 {
        self.line.line_distance
    }

    /// True when no line is drawn
    pub fn is_empty(&self) -> bool {
        self.style == BorderLineStyle::None
            || (self.line.outer_line_width == 0 && self.line.inner_line_width == 0)
    }

    pub fn border_line2(&self) -> BorderLine2 {
        self.line
    }

    pub fn border_line(&self) -> BorderLine {
        self.line.to_border_line()
    }

    /// Copy with a different style. Widths are recomputed.
    pub fn with_style(&self, style: BorderLineStyle) -> Result<Self> {
        Self::new(style, self.color(), self.width_pt)
    }

    /// Copy with a different color. Widths are unchanged.
    pub fn with_color(&self, color: i32) -> Result<Self> {
        if color < 0 {
            return Err(Error::InvalidColor(color));
        }
        let mut side = *self;
        side.line.color = color;
        Ok(side)
    }

    /// Copy with a different width in points. Widths are recomputed.
    pub fn with_width(&self, width: impl Into<f64>) -> Result<Self> {
        Self::new(self.style, self.color(), width)
    }

    pub fn line_none(&self) -> Result<Self> {
        self.with_style(BorderLineStyle::None)
    }

    pub fn line_solid(&self) -> Result<Self> {
        self.with_style(BorderLineStyle::Solid)
    }

    pub fn line_dotted(&self) -> Result<Self> {
        self.with_style(BorderLineStyle::Dotted)
    }

    pub fn line_dashed(&self) -> Result<Self> {
        self.with_style(BorderLineStyle::Dashed)
    }

    pub fn line_fine_dashed(&self) -> Result<Self> {
        self.with_style(BorderLineStyle::FineDashed)
    }

    pub fn line_dash_dot(&self) -> Result<Self> {
        self.with_style(BorderLineStyle::DashDot)
    }

    pub fn line_dash_dot_dot(&self) -> Result<Self> {
        self.with_style(BorderLineStyle::DashDotDot)
    }

    pub fn line_double(&self) -> Result<Self> {
        self.with_style(BorderLineStyle::Double)
    }

    /// Two fixed thin lines separated by a variable gap
    pub fn line_double_thin(&self) -> Result<Self> {
        self.with_style(BorderLineStyle::DoubleThin)
    }

    pub fn line_thin_thick_small_gap(&self) -> Result<Self> {
        self.with_style(BorderLineStyle::ThinThickSmallGap)
    }

    pub fn line_thin_thick_medium_gap(&self) -> Result<Self> {
        self.with_style(BorderLineStyle::ThinThickMediumGap)
    }

    pub fn line_thin_thick_large_gap(&self) -> Result<Self> {
        self.with_style(BorderLineStyle::ThinThickLargeGap)
    }

    pub fn line_thick_thin_small_gap(&self) -> Result<Self> {
        self.with_style(BorderLineStyle::ThickThinSmallGap)
    }

    pub fn line_thick_thin_medium_gap(&self) -> Result<Self> {
        self.with_style(BorderLineStyle::ThickThinMediumGap)
    }

    pub fn line_thick_thin_large_gap(&self) -> Result<Self> {
        self.with_style(BorderLineStyle::ThickThinLargeGap)
    }

    pub fn line_embossed(&self) -> Result<Self> {
        self.with_style(BorderLineStyle::Embossed)
    }

    pub fn line_engraved(&self) -> Result<Self> {
        self.with_style(BorderLineStyle::Engraved)
    }

    pub fn line_outset(&self) -> Result<Self> {
        self.with_style(BorderLineStyle::Outset)
    }

    pub fn line_inset(&self) -> Result<Self> {
        self.with_style(BorderLineStyle::Inset)
    }
}

fn twip_to_mm100(twips: i64) -> i16 {
    UnitConvert::convert_twip_mm100(twips as f64).round() as i16
}

impl Default for Side {
    /// Thin (0.75pt) solid black line
    fn default() -> Self {
        Self {
            style: BorderLineStyle::Solid,
            width_pt: LineSize::Thin.pt(),
            line: BorderLine2 {
                color: color::standard_color::BLACK,
                inner_line_width: 0,
                outer_line_width: 26,
                line_distance: 0,
                line_style: border_line_style::SOLID,
                line_width: 26,
            },
        }
    }
}

impl PartialEq for Side {
    fn eq(&self, other: &Self) -> bool {
        self.line == other.line
    }
}

impl Eq for Side {}

impl Hash for Side {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.line.hash(state);
    }
}

impl PartialEq<BorderLine2> for Side {
    fn eq(&self, other: &BorderLine2) -> bool {
        self.line == *other
    }
}

impl From<Side> for BorderLine2 {
    fn from(side: Side) -> Self {
        side.line
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}pt #{}",
            self.style,
            self.width_pt,
            color::to_hex(self.line.color)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_solid_thin() {
        let side = Side::new(BorderLineStyle::Solid, 0x000000, 0.75).unwrap();
        // 15 twips
        assert_eq!(side.outer_line_width(), 26);
        assert_eq!(side.inner_line_width(), 0);
        assert_eq!(side.line_distance(), 0);
        assert_eq!(side.line_width(), 26);
        assert_eq!(side.border_line2().line_style, border_line_style::SOLID);
    }

    #[test]
    fn test_double() {
        let side = Side::new(BorderLineStyle::Double, 0xFF0000, 3.0).unwrap();
        // 20 twips each
        assert_eq!(side.outer_line_width(), 35);
        assert_eq!(side.inner_line_width(), 35);
        assert_eq!(side.line_distance(), 35);
        assert_eq!(side.line_width(), 106);
        assert_eq!(side.color(), 0xFF0000);
    }

    #[test]
    fn test_width_bounds() {
        assert!(Side::new(BorderLineStyle::Solid, 0, 9.0).is_ok());
        assert!(Side::new(BorderLineStyle::Solid, 0, 0.0).is_ok());
        assert_eq!(
            Side::new(BorderLineStyle::Solid, 0, 9.000001),
            Err(Error::InvalidWidth(9.000001))
        );
        assert_eq!(
            Side::new(BorderLineStyle::Solid, 0, -0.5),
            Err(Error::InvalidWidth(-0.5))
        );
        assert!(matches!(
            Side::new(BorderLineStyle::Solid, 0, f64::NAN),
            Err(Error::InvalidWidth(_))
        ));
    }

    #[test]
    fn test_invalid_color() {
        assert_eq!(
            Side::new(BorderLineStyle::Solid, -1, 1.0),
            Err(Error::InvalidColor(-1))
        );
        let side = Side::default();
        assert_eq!(side.with_color(-5), Err(Error::InvalidColor(-5)));
    }

    #[test]
    fn test_invalid_style() {
        assert_eq!(
            Side::new(BorderLineStyle::BorderLineStyleMax, 0, 1.0),
            Err(Error::InvalidStyle(BorderLineStyle::BorderLineStyleMax))
        );
    }

    #[test]
    fn test_line_size_width() {
        let side = Side::new(BorderLineStyle::Dashed, 0, LineSize::Medium).unwrap();
        assert_eq!(side.width_pt(), 1.5);
        // 30 twips
        assert_eq!(side.outer_line_width(), 53);
    }

    #[test]
    fn test_default() {
        let expected = Side::new(BorderLineStyle::Solid, 0, LineSize::Thin).unwrap();
        assert_eq!(Side::default(), expected);
        assert_eq!(Side::default().width_pt(), 0.75);
    }

    #[test]
    fn test_empty() {
        let empty = Side::empty();
        assert_eq!(empty.style(), BorderLineStyle::None);
        assert_eq!(empty.width_pt(), 0.0);
        assert_eq!(empty.color(), 0);
        assert!(empty.is_empty());
        assert_eq!(empty.border_line2(), BorderLine2::none());
        assert_eq!(empty, Side::new(BorderLineStyle::None, 0, 0.0).unwrap());
    }

    #[test]
    fn test_none_ignores_width() {
        let side = Side::new(BorderLineStyle::None, 0, 4.5).unwrap();
        assert_eq!(side.outer_line_width(), 0);
        assert_eq!(side.inner_line_width(), 0);
        assert_eq!(side.line_distance(), 0);
        assert!(side.is_empty());
    }

    #[test]
    fn test_with_style() {
        let side = Side::new(BorderLineStyle::Solid, 0x0000FF, 3.0).unwrap();
        let double = side.with_style(BorderLineStyle::Double).unwrap();
        assert_eq!(double.style(), BorderLineStyle::Double);
        assert_eq!(double.color(), 0x0000FF);
        assert_eq!(double.width_pt(), 3.0);
        assert_eq!(double.outer_line_width(), 35);
        assert_eq!(side.line_double().unwrap(), double);
        // original is untouched
        assert_eq!(side.outer_line_width(), 106);
    }

    #[test]
    fn test_with_color() {
        let side = Side::new(BorderLineStyle::Double, 0, 3.0).unwrap();
        let red = side.with_color(0xFF0000).unwrap();
        assert_eq!(red.outer_line_width(), side.outer_line_width());
        assert_eq!(red.inner_line_width(), side.inner_line_width());
        assert_eq!(red.line_distance(), side.line_distance());
        assert_ne!(red, side);
    }

    #[test]
    fn test_with_width() {
        let side = Side::new(BorderLineStyle::Solid, 0, 0.75).unwrap();
        let wide = side.with_width(3.0).unwrap();
        assert_eq!(wide.outer_line_width(), 106);
        assert_eq!(wide.line_width(), 106);
        assert!(side.with_width(10.0).is_err());
    }

    #[test]
    fn test_equality() {
        let a = Side::new(BorderLineStyle::Dotted, 0x123456, 2.25).unwrap();
        let b = Side::new(BorderLineStyle::Dotted, 0x123456, 2.25).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, b.border_line2());
        assert_ne!(a, a.line_dashed().unwrap());
    }

    #[test]
    fn test_from_border_line2() {
        let side = Side::new(BorderLineStyle::ThickThinSmallGap, 0x00FF00, 3.0).unwrap();
        let rebuilt = Side::from_border_line2(&side.border_line2()).unwrap();
        assert_eq!(rebuilt, side);
        assert_eq!(rebuilt.style(), BorderLineStyle::ThickThinSmallGap);
        assert_eq!(rebuilt.width_pt(), 3.0);

        let max = Side::new(BorderLineStyle::Solid, 0, MAX_WIDTH_PT).unwrap();
        let rebuilt = Side::from_border_line2(&max.border_line2()).unwrap();
        assert_eq!(rebuilt.width_pt(), MAX_WIDTH_PT);

        let mut record = side.border_line2();
        record.line_style = 99;
        assert_eq!(
            Side::from_border_line2(&record),
            Err(Error::UnknownLineStyle(99))
        );
    }

    #[test]
    fn test_border_line() {
        let side = Side::new(BorderLineStyle::Double, 0xFF0000, 3.0).unwrap();
        let line = side.border_line();
        assert_eq!(line.color, 0xFF0000);
        assert_eq!(line.outer_line_width, 35);
        assert_eq!(line.inner_line_width, 35);
        assert_eq!(line.line_distance, 35);
    }

    #[test]
    fn test_display() {
        let side = Side::new(BorderLineStyle::Double, 0xFF0000, 3.0).unwrap();
        assert_eq!(side.to_string(), "double 3pt #FF0000");
    }
}
