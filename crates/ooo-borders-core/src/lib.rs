//! # ooo-borders-core
//!
//! Border line construction for LibreOffice documents.
//!
//! A border edge is described by a style, a color and a width in points. The
//! office suite stores it as a `com.sun.star.table.BorderLine2` record whose
//! outer line, inner line and gap widths depend on the style. This crate
//! computes those records:
//! - [`UnitConvert`] - Length unit conversion (pt, twip, 1/100 mm, ...)
//! - [`BorderWidthImpl`] - Splitting a total width into outer/inner/gap
//! - [`Side`] - A validated, immutable border edge
//! - [`Borders`] - A set of edges mapped to their UNO property names
//!
//! ## Example
//!
//! ```rust
//! use ooo_borders_core::{BorderLineStyle, Borders, Side};
//!
//! let side = Side::new(BorderLineStyle::Double, 0xFF0000, 3.0).unwrap();
//! assert_eq!(side.outer_line_width(), 35);
//!
//! let borders = Borders::all(side);
//! for (name, line) in borders.properties() {
//!     println!("{name}: {line:?}");
//! }
//! ```

pub mod error;
mod names;
pub mod style;
pub mod units;
pub mod uno_types;

pub use error::{Error, Result};
pub use style::{
    border_widths, BorderLineStyle, BorderWidthImpl, BorderWidths, Borders, LineSize, Side,
};
pub use units::{UnitConvert, UnitLength};
pub use uno_types::{BorderLine, BorderLine2};
