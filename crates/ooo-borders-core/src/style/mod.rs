//! Border styling types
//!
//! This module contains types for border lines:
//! - [`BorderLineStyle`] - Line style
//! - [`LineSize`] - Named line widths
//! - [`BorderWidthImpl`] - Per-style width decomposition
//! - [`Side`] - One border edge
//! - [`Borders`] - A full set of border edges

mod border;
pub mod border_width;
pub mod color;
mod line_style;
mod side;

pub use border::Borders;
pub use border_width::{border_widths, BorderWidthFlags, BorderWidthImpl, BorderWidths};
pub use line_style::{BorderLineStyle, LineSize};
pub use side::{Side, MAX_WIDTH_PT};
