//! Axis aligned rectangles
//!
//! Corners are inclusive: `(x1,y1)-(x2,y2)` covers `x2-x1+1` columns.

use crate::color::Color;
use crate::render::Render;
use crate::Fill;
use crate::PixelAccess;

use log::debug;

/// Clip an inclusive box to the image, None if nothing is left
fn clip_box<I: PixelAccess + ?Sized>(im: &I, x1: i64, y1: i64, x2: i64,
                                     y2: i64) -> Option<(i64, i64, i64, i64)> {
    if x1 > x2 || y1 > y2 || x2 < 0 || y2 < 0 || x1 >= im.width() || y1 >= im.height() {
        return None;
    }
    Some((x1.max(0), y1.max(0), x2.min(im.width() - 1), y2.min(im.height() - 1)))
}

/// Fill a rectangle with a plain color, replacing the pixels
///
///     use rasterfill::{Pixfmt, PixelAccess, Color, box_filled};
///
///     let mut pix = Pixfmt::<u8>::new(5, 5, 1);
///     box_filled(&mut pix, -3, 1, 1, 10, &Color::gray(9));
///     assert_eq!(pix.get_pixel(1, 4).map(|c| c.channel[0]), Some(9));
///     assert_eq!(pix.get_pixel(2, 4).map(|c| c.channel[0]), Some(0));
///     assert_eq!(pix.get_pixel(0, 0).map(|c| c.channel[0]), Some(0));
///
pub fn box_filled<I: PixelAccess + ?Sized>(im: &mut I, x1: i64, y1: i64, x2: i64, y2: i64,
                                           color: &Color) {
    debug!("box_filled: ({}, {}) - ({}, {}) color {:?}", x1, y1, x2, y2, color);
    if let Some((x1, y1, x2, y2)) = clip_box(im, x1, y1, x2, y2) {
        let row = vec![*color; (x2 - x1 + 1) as usize];
        for y in y1..=y2 {
            im.put_row(x1, x2 + 1, y, &row);
        }
    }
}

/// Fill a rectangle through `fill`
pub fn box_cfill<I, F>(im: &mut I, x1: i64, y1: i64, x2: i64, y2: i64, fill: &F)
where I: PixelAccess + ?Sized, F: Fill + ?Sized
{
    debug!("box_cfill: ({}, {}) - ({}, {})", x1, y1, x2, y2);
    if let Some((x1, y1, x2, y2)) = clip_box(im, x1, y1, x2, y2) {
        let width = (x2 - x1 + 1) as usize;
        let mut r = Render::new(im, width);
        for y in y1..=y2 {
            r.fill_span(x1, y, width, None, fill);
        }
    }
}

/// Draw the one pixel outline of a rectangle
pub fn box_outline<I: PixelAccess + ?Sized>(im: &mut I, x1: i64, y1: i64, x2: i64, y2: i64,
                                            color: &Color) {
    debug!("box_outline: ({}, {}) - ({}, {}) color {:?}", x1, y1, x2, y2, color);
    for x in x1..=x2 {
        im.put_pixel(x, y1, color);
        im.put_pixel(x, y2, color);
    }
    for y in y1..=y2 {
        im.put_pixel(x1, y, color);
        im.put_pixel(x2, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pixfmt;

    fn count(pix: &Pixfmt<u8>) -> usize {
        let mut n = 0;
        for y in 0..pix.height() {
            for x in 0..pix.width() {
                if pix.get_pixel(x, y).map(|c| c.channel[0]) != Some(0) {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn outline() {
        let mut pix = Pixfmt::<u8>::new(6, 6, 1);
        box_outline(&mut pix, 1, 1, 4, 3, &Color::gray(1));
        assert_eq!(count(&pix), 10);
        assert_eq!(pix.get_pixel(2, 2).map(|c| c.channel[0]), Some(0));
    }

    #[test]
    fn empty_boxes() {
        let mut pix = Pixfmt::<u8>::new(6, 6, 1);
        box_filled(&mut pix, 3, 3, 2, 4, &Color::gray(1));
        box_filled(&mut pix, 6, 0, 9, 4, &Color::gray(1));
        box_filled(&mut pix, -4, -4, -1, 2, &Color::gray(1));
        assert_eq!(count(&pix), 0);
        box_filled(&mut pix, 0, 0, 5, 5, &Color::gray(1));
        assert_eq!(count(&pix), 36);
    }
}
