//! Fixed point coordinates
//!
//! Polygon vertices are held in 1/16 pixel units. Conversion from pixel
//! space truncates toward zero, so a vertex that lands exactly on a pixel
//! boundary belongs to the cell below/right of it only when it is positive.

/// Fixed point coordinate, [`SUBPIXEL_SCALE`] units per pixel
pub type Fine = i64;

/// Number of fractional bits in a [`Fine`] value
pub const SUBPIXEL_SHIFT: u32 = 4;
/// Fine units per pixel
pub const SUBPIXEL_SCALE: Fine = 1 << SUBPIXEL_SHIFT;

/// Convert a pixel coordinate to fine units, truncating toward zero
///
///     use rasterfill::fixed::to_fine;
///     assert_eq!(to_fine(1.5), 24);
///     assert_eq!(to_fine(1.99), 31);
///     assert_eq!(to_fine(-0.99), -15);
///
pub fn to_fine(v: f64) -> Fine {
    (v * SUBPIXEL_SCALE as f64) as Fine
}

/// Pixel a fine coordinate falls in (division truncates toward zero)
pub fn coarse(v: Fine) -> Fine {
    v / SUBPIXEL_SCALE
}

/// Offset of a fine coordinate within its pixel (sign follows `v`)
pub fn fine(v: Fine) -> Fine {
    v % SUBPIXEL_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn truncation() {
        assert_eq!(to_fine(0.0), 0);
        assert_eq!(to_fine(2.0), 32);
        assert_eq!(to_fine(2.0624), 32);
        assert_eq!(to_fine(2.0625), 33);
        assert_eq!(to_fine(-2.03), -32);
    }
    #[test]
    fn coarse_fine() {
        assert_eq!(coarse(33), 2);
        assert_eq!(fine(33), 1);
        assert_eq!(coarse(-1), 0);
        assert_eq!(coarse(-17), -1);
        assert_eq!(fine(-17), -1);
        assert_eq!(coarse(15), 0);
        assert_eq!(coarse(16), 1);
    }
}
