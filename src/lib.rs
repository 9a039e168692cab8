//! Scan conversion and fill compositing for 2D raster images
//!
//! # Example
//!
//!     use rasterfill::{Pixfmt, PixelAccess, Color, poly_aa};
//!
//!     let mut pix = Pixfmt::<u8>::new(10, 10, 3);
//!     pix.clear(&Color::white());
//!     let tri = [(1.0, 1.0), (8.0, 1.0), (1.0, 8.0)];
//!     poly_aa(&mut pix, &tri, &Color::rgb(255, 0, 0));
//!     assert_eq!(pix.get_pixel(1, 1), Some(Color::rgba(255, 0, 0, 0)));
//!     assert_eq!(pix.get_pixel(8, 8), Some(Color::rgba(255, 255, 255, 0)));
//!
//! How does this work
//!
//!   Shape -> Coverage -> Compositing
//!
//!   poly_aa / arc_aa
//!     poly_aa_coverage()     -- intervals between sorted vertex y values
//!       mark_updown()        -- left/right edge pairs per interval
//!       render_slice_scanline()
//!         pixel_coverage()   -- trapezoid area right of an edge
//!     flush                  -- ppix_norm() or Render::fill_span()
//!   flood_fill / flood_cfill
//!     flood_mask()           -- span stack, Bitmap, bounding box
//!     paint                  -- put_pixel() or Render::fill_span()
//!   arc / arc_cfill
//!     MinMax -> HLines       -- per row extents, then spans
//!   circle_out / arc_out     -- Bresenham, put_pixel()
//!   circle_out_aa / arc_out_aa -- Wu, ppix_norm()
//!

pub mod error;
pub mod fixed;
pub mod color;
pub mod math;
pub mod buffer;
pub mod pixfmt;
pub mod fill;
pub mod render;
pub mod bitmap;
pub mod hlines;
pub mod scan;
pub mod polygon;
pub mod flood;
pub mod circle;
pub mod arc;
pub mod boxes;
pub mod ppm;

pub use error::*;
pub use color::*;
pub use math::*;
pub use buffer::*;
pub use pixfmt::*;
pub use fill::*;
pub use render::*;
pub use bitmap::*;
pub use hlines::*;
pub use scan::*;
pub use polygon::*;
pub use flood::*;
pub use circle::*;
pub use arc::*;
pub use boxes::*;

/// Access to the pixels of an image
///
/// Coordinates outside of the image are never an error: single pixel
/// reads return `None`, writes return `false` and row calls return a
/// short count.
pub trait PixelAccess {
    /// Image width in pixels
    fn width(&self) -> i64;
    /// Image height in pixels
    fn height(&self) -> i64;
    /// Samples per pixel, 1 to 4
    fn channels(&self) -> usize;
    /// Bits per sample
    fn bits(&self) -> u32;
    fn get_pixel(&self, x: i64, y: i64) -> Option<Color>;
    fn put_pixel(&mut self, x: i64, y: i64, c: &Color) -> bool;
    fn get_fpixel(&self, x: i64, y: i64) -> Option<Fcolor>;
    fn put_fpixel(&mut self, x: i64, y: i64, c: &Fcolor) -> bool;

    /// Read pixels `x0 .. x1` of row `y` into `out`
    ///
    /// Returns the number of pixels read
    fn get_row(&self, x0: i64, x1: i64, y: i64, out: &mut [Color]) -> usize {
        if !self.row_in_range(x0, y) {
            return 0;
        }
        let x1 = x1.min(self.width());
        let mut n = 0;
        for (x, o) in (x0..x1).zip(out.iter_mut()) {
            match self.get_pixel(x, y) {
                Some(c) => *o = c,
                None => break,
            }
            n += 1;
        }
        n
    }
    /// Write `row` to pixels `x0 .. x1` of row `y`
    ///
    /// Returns the number of pixels written
    fn put_row(&mut self, x0: i64, x1: i64, y: i64, row: &[Color]) -> usize {
        if !self.row_in_range(x0, y) {
            return 0;
        }
        let x1 = x1.min(self.width());
        let mut n = 0;
        for (x, c) in (x0..x1).zip(row.iter()) {
            if !self.put_pixel(x, y, c) {
                break;
            }
            n += 1;
        }
        n
    }
    /// Read pixels `x0 .. x1` of row `y` as double colors
    fn get_frow(&self, x0: i64, x1: i64, y: i64, out: &mut [Fcolor]) -> usize {
        if !self.row_in_range(x0, y) {
            return 0;
        }
        let x1 = x1.min(self.width());
        let mut n = 0;
        for (x, o) in (x0..x1).zip(out.iter_mut()) {
            match self.get_fpixel(x, y) {
                Some(c) => *o = c,
                None => break,
            }
            n += 1;
        }
        n
    }
    /// Write double colors to pixels `x0 .. x1` of row `y`
    fn put_frow(&mut self, x0: i64, x1: i64, y: i64, row: &[Fcolor]) -> usize {
        if !self.row_in_range(x0, y) {
            return 0;
        }
        let x1 = x1.min(self.width());
        let mut n = 0;
        for (x, c) in (x0..x1).zip(row.iter()) {
            if !self.put_fpixel(x, y, c) {
                break;
            }
            n += 1;
        }
        n
    }
    #[doc(hidden)]
    fn row_in_range(&self, x0: i64, y: i64) -> bool {
        y >= 0 && y < self.height() && x0 >= 0 && x0 < self.width()
    }
}

/// Raw 8-bit sample data of an image
pub trait PixelData {
    fn pixeldata(&self) -> &[u8];
}

/// Color generator used by the compositor
///
/// `channels` is the fill channel count: image channels plus one for gray
/// and RGB images, so the last fill channel is always alpha.
pub trait Fill {
    /// Generate `out.len()` colors starting at (`x`,`y`)
    fn fill_with_color(&self, x: i64, y: i64, channels: usize, out: &mut [Color]);
    /// Generate `out.len()` double colors starting at (`x`,`y`)
    fn fill_with_fcolor(&self, x: i64, y: i64, channels: usize, out: &mut [Fcolor]) {
        let mut tmp = vec![Color::default(); out.len()];
        self.fill_with_color(x, y, channels, &mut tmp);
        for (o, c) in out.iter_mut().zip(tmp.into_iter()) {
            *o = Fcolor::from(c);
        }
    }
    /// Custom blending, replacing the coverage blend of [Render]
    fn combiner(&self) -> Option<&dyn Combiner> {
        None
    }
}
