//! Color values for border lines
//!
//! UNO stores colors as a `long` holding `0xRRGGBB`. Negative values are not
//! valid colors for a border line.

/// Pack RGB components into a UNO color value
pub const fn rgb(r: u8, g: u8, b: u8) -> i32 {
    ((r as i32) << 16) | ((g as i32) << 8) | b as i32
}

/// Split a UNO color value into RGB components
pub const fn to_rgb(color: i32) -> (u8, u8, u8) {
    (
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
    )
}

/// Parse a hex color (e.g., "#FF0000", "FF0000" or "0xFF0000")
pub fn from_hex(hex: &str) -> Option<i32> {
    let hex = hex.trim();
    let hex = hex
        .strip_prefix('#')
        .or_else(|| hex.strip_prefix("0x"))
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex);

    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(rgb(r, g, b))
}

/// Format a UNO color value as a hex string (without # prefix)
pub fn to_hex(color: i32) -> String {
    let (r, g, b) = to_rgb(color);
    format!("{:02X}{:02X}{:02X}", r, g, b)
}

/// Named colors
pub mod standard_color {
    use super::rgb;

    pub const BLACK: i32 = rgb(0, 0, 0);
    pub const WHITE: i32 = rgb(255, 255, 255);
    pub const RED: i32 = rgb(255, 0, 0);
    pub const GREEN: i32 = rgb(0, 255, 0);
    pub const BLUE: i32 = rgb(0, 0, 255);
    pub const YELLOW: i32 = rgb(255, 255, 0);
    pub const GRAY: i32 = rgb(128, 128, 128);
    pub const LIGHT_GRAY: i32 = rgb(192, 192, 192);
    pub const DARK_GRAY: i32 = rgb(64, 64, 64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(from_hex("#FF0000"), Some(0xFF0000));
        assert_eq!(from_hex("00ff00"), Some(0x00FF00));
        assert_eq!(from_hex("0x0000FF"), Some(0x0000FF));
        assert_eq!(from_hex("#FFF"), None);
        assert_eq!(from_hex("GG0000"), None);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(standard_color::RED), "FF0000");
        assert_eq!(to_hex(rgb(1, 2, 3)), "010203");
    }

    #[test]
    fn test_to_rgb() {
        assert_eq!(to_rgb(standard_color::YELLOW), (255, 255, 0));
        assert_eq!(to_rgb(standard_color::BLACK), (0, 0, 0));
    }
}
