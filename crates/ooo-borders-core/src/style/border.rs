//! Border sets

use crate::uno_types::{border_property_names as names, BorderLine2};

use super::{BorderLineStyle, Side};
use crate::error::Result;

/// Borders of a cell, paragraph or table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Borders {
    /// Left border
    pub left: Option<Side>,
    /// Right border
    pub right: Option<Side>,
    /// Top border
    pub top: Option<Side>,
    /// Bottom border
    pub bottom: Option<Side>,
    /// Diagonal from top-left to bottom-right
    pub diagonal_down: Option<Side>,
    /// Diagonal from bottom-left to top-right
    pub diagonal_up: Option<Side>,
}

impl Borders {
    /// Create a border set with no borders
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the four outer borders to the same side
    pub fn all(side: Side) -> Self {
        Self {
            left: Some(side),
            right: Some(side),
            top: Some(side),
            bottom: Some(side),
            diagonal_down: None,
            diagonal_up: None,
        }
    }

    /// Four outer borders of the given style, color and width in points
    pub fn outline(style: BorderLineStyle, color: i32, width: impl Into<f64>) -> Result<Self> {
        Ok(Self::all(Side::new(style, color, width)?))
    }

    /// Every border set to [`Side::EMPTY`]. Applying it removes existing borders.
    pub fn clear() -> Self {
        Self {
            diagonal_down: Some(Side::EMPTY),
            diagonal_up: Some(Side::EMPTY),
            ..Self::all(Side::EMPTY)
        }
    }

    /// Set the left border
    pub fn with_left(mut self, side: Side) -> Self {
        self.left = Some(side);
        self
    }

    /// Set the right border
    pub fn with_right(mut self, side: Side) -> Self {
        self.right = Some(side);
        self
    }

    /// Set the top border
    pub fn with_top(mut self, side: Side) -> Self {
        self.top = Some(side);
        self
    }

    /// Set the bottom border
    pub fn with_bottom(mut self, side: Side) -> Self {
        self.bottom = Some(side);
        self
    }

    /// Set the top-left to bottom-right diagonal
    pub fn with_diagonal_down(mut self, side: Side) -> Self {
        self.diagonal_down = Some(side);
        self
    }

    /// Set the bottom-left to top-right diagonal
    pub fn with_diagonal_up(mut self, side: Side) -> Self {
        self.diagonal_up = Some(side);
        self
    }

    /// Check if no border is set
    pub fn is_empty(&self) -> bool {
        self.left.is_none()
            && self.right.is_none()
            && self.top.is_none()
            && self.bottom.is_none()
            && self.diagonal_down.is_none()
            && self.diagonal_up.is_none()
    }

    /// Property name and `BorderLine2` value for every border that is set
    pub fn properties(&self) -> Vec<(&'static str, BorderLine2)> {
        [
            (names::LEFT_BORDER, self.left),
            (names::RIGHT_BORDER, self.right),
            (names::TOP_BORDER, self.top),
            (names::BOTTOM_BORDER, self.bottom),
            (names::DIAGONAL_TLBR, self.diagonal_down),
            (names::DIAGONAL_BLTR, self.diagonal_up),
        ]
        .into_iter()
        .filter_map(|(name, side)| side.map(|s| (name, s.border_line2())))
        .collect()
    }
}
