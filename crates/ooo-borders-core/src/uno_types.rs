//! UNO record types for border lines.
//!
//! This module defines Rust representations of the UNO structs and constant
//! groups that border lines are written into. Field names and units follow the
//! IDL exactly: every width is in 1/100 mm.

// ============================================================================
// UNO Structs
// ============================================================================

/// `com.sun.star.table.BorderLine2` — describes a border line on a cell,
/// paragraph or table.
///
/// Wire format: Struct(Long color, Short innerLineWidth, Short outerLineWidth,
///                     Short lineDistance, Short lineStyle, Long lineWidth)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "PascalCase")
)]
pub struct BorderLine2 {
    pub color: i32,
    pub inner_line_width: i16,
    pub outer_line_width: i16,
    pub line_distance: i16,
    pub line_style: i16,
    pub line_width: i32,
}

impl BorderLine2 {
    /// Create a "no border" value.
    pub fn none() -> Self {
        Self {
            line_style: border_line_style::NONE,
            ..Self::default()
        }
    }

    /// Field names and values in wire order.
    pub fn fields(&self) -> [(&'static str, i32); 6] {
        [
            ("Color", self.color),
            ("InnerLineWidth", i32::from(self.inner_line_width)),
            ("OuterLineWidth", i32::from(self.outer_line_width)),
            ("LineDistance", i32::from(self.line_distance)),
            ("LineStyle", i32::from(self.line_style)),
            ("LineWidth", self.line_width),
        ]
    }

    /// Drop the `LineStyle`/`LineWidth` extension, keeping the legacy fields.
    pub fn to_border_line(&self) -> BorderLine {
        BorderLine {
            color: self.color,
            inner_line_width: self.inner_line_width,
            outer_line_width: self.outer_line_width,
            line_distance: self.line_distance,
        }
    }
}

/// `com.sun.star.table.BorderLine` — the legacy border line record.
///
/// Wire format: Struct(Long color, Short innerLineWidth, Short outerLineWidth,
///                     Short lineDistance)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "PascalCase")
)]
pub struct BorderLine {
    pub color: i32,
    pub inner_line_width: i16,
    pub outer_line_width: i16,
    pub line_distance: i16,
}

// ============================================================================
// UNO Constants
// ============================================================================

/// `com.sun.star.table.BorderLineStyle` — border line style constants.
///
/// IDL constants group (NOT a sequential enum). `NONE` is the 0x7FFF sentinel
/// and `BORDER_LINE_STYLE_MAX` aliases the last drawable style.
pub mod border_line_style {
    pub const SOLID: i16 = 0;
    pub const DOTTED: i16 = 1;
    pub const DASHED: i16 = 2;
    pub const DOUBLE: i16 = 3;
    pub const THINTHICK_SMALLGAP: i16 = 4;
    pub const THINTHICK_MEDIUMGAP: i16 = 5;
    pub const THINTHICK_LARGEGAP: i16 = 6;
    pub const THICKTHIN_SMALLGAP: i16 = 7;
    pub const THICKTHIN_MEDIUMGAP: i16 = 8;
    pub const THICKTHIN_LARGEGAP: i16 = 9;
    pub const EMBOSSED: i16 = 10;
    pub const ENGRAVED: i16 = 11;
    pub const OUTSET: i16 = 12;
    pub const INSET: i16 = 13;
    pub const FINE_DASHED: i16 = 14;
    pub const DOUBLE_THIN: i16 = 15;
    pub const DASH_DOT: i16 = 16;
    pub const DASH_DOT_DOT: i16 = 17;
    pub const BORDER_LINE_STYLE_MAX: i16 = 17;
    pub const NONE: i16 = 0x7FFF;
}

/// Fully-qualified UNO type names for the border structs.
pub mod struct_type_names {
    pub const BORDER_LINE: &str = "com.sun.star.table.BorderLine";
    pub const BORDER_LINE2: &str = "com.sun.star.table.BorderLine2";
}

/// Property names that accept a `BorderLine2` value.
pub mod border_property_names {
    pub const LEFT_BORDER: &str = "LeftBorder";
    pub const RIGHT_BORDER: &str = "RightBorder";
    pub const TOP_BORDER: &str = "TopBorder";
    pub const BOTTOM_BORDER: &str = "BottomBorder";
    /// Diagonal from top-left to bottom-right
    pub const DIAGONAL_TLBR: &str = "DiagonalTLBR2";
    /// Diagonal from bottom-left to top-right
    pub const DIAGONAL_BLTR: &str = "DiagonalBLTR2";
}

// ============================================================================
// Tests
// ============================================================================
