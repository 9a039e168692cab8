//! Filled arcs (pie slices)
//!
//! The hard edged variants collect the outline into per row extents and
//! paint them as horizontal spans. The antialiased variants approximate
//! the slice with a polygon and hand it to the polygon scan converter.

use std::f64::consts::PI;

use crate::color::Color;
use crate::hlines::{HLines, MinMax};
use crate::polygon::{poly_aa, poly_aa_fill};
use crate::Fill;
use crate::PixelAccess;

use log::{debug, trace};

/// Angle between arc samples of the hard edged arcs, in degrees
pub const ARC_STEP: f64 = 0.01;
/// Fewest curve segments of an antialiased arc
pub const MIN_CIRCLE_STEPS: i64 = 8;
/// Most curve segments of an antialiased arc
pub const MAX_CIRCLE_STEPS: i64 = 8000;

fn arc_point(x: i64, y: i64, rad: f64, d: f64) -> (i64, i64) {
    let a = d * PI / 180.0;
    ((x as f64 + 0.5 + rad * a.cos()) as i64,
     (y as f64 + 0.5 + rad * a.sin()) as i64)
}

/// Extents of the slice `d1 ..= d2` (d1 <= d2), added to `hlines`
fn arc_minmax(hlines: &mut HLines, lines: i64, x: i64, y: i64, rad: f64, d1: f64, d2: f64) {
    trace!("arc_minmax: ({}, {}) rad {} {} .. {}", x, y, rad, d1, d2);
    let mut dot = MinMax::new(lines);
    let (x1, y1) = arc_point(x, y, rad, d1);
    dot.line(x, y, x1, y1);
    let mut f = d1;
    while f <= d2 {
        let (ax, ay) = arc_point(x, y, rad, f);
        dot.add(ax, ay);
        f += ARC_STEP;
    }
    let (x2, y2) = arc_point(x, y, rad, d2);
    dot.line(x, y, x2, y2);
    dot.to_hlines(hlines);
}

fn arc_hlines<I: PixelAccess + ?Sized>(im: &I, x: i64, y: i64, rad: f64,
                                       d1: f64, d2: f64) -> HLines {
    let mut hlines = HLines::for_image(im);
    let lines = im.height();
    if d1 <= d2 {
        arc_minmax(&mut hlines, lines, x, y, rad, d1, d2);
    } else {
        arc_minmax(&mut hlines, lines, x, y, rad, d1, 360.0);
        arc_minmax(&mut hlines, lines, x, y, rad, 0.0, d2);
    }
    hlines
}

/// Fill the pie slice from `d1` to `d2` degrees with a plain color
///
/// When `d1` is greater than `d2` the slice wraps through 0 degrees.
///
///     use rasterfill::{Pixfmt, PixelAccess, Color, arc};
///
///     let mut pix = Pixfmt::<u8>::new(20, 20, 1);
///     arc(&mut pix, 10, 10, 5.0, 0.0, 90.0, &Color::gray(255));
///     assert_eq!(pix.get_pixel(12, 12).map(|c| c.channel[0]), Some(255));
///     assert_eq!(pix.get_pixel(8, 8).map(|c| c.channel[0]), Some(0));
///
pub fn arc<I: PixelAccess + ?Sized>(im: &mut I, x: i64, y: i64, rad: f64,
                                    d1: f64, d2: f64, color: &Color) {
    debug!("arc: ({}, {}) rad {} {} .. {} color {:?}", x, y, rad, d1, d2, color);
    let hlines = arc_hlines(im, x, y, rad, d1, d2);
    hlines.fill_color(im, color);
}

/// Fill the pie slice from `d1` to `d2` degrees through `fill`
pub fn arc_cfill<I, F>(im: &mut I, x: i64, y: i64, rad: f64, d1: f64, d2: f64, fill: &F)
where I: PixelAccess + ?Sized, F: Fill + ?Sized
{
    debug!("arc_cfill: ({}, {}) rad {} {} .. {}", x, y, rad, d1, d2);
    let hlines = arc_hlines(im, x, y, rad, d1, d2);
    hlines.fill_fill(im, fill);
}

/// Polygon approximating the pie slice: the center followed by points
/// along the arc, about one per pixel of arc length
pub fn arc_poly(x: f64, y: f64, rad: f64, d1: f64, d2: f64) -> Vec<(f64, f64)> {
    let d1 = d1 % 360.0;
    let mut d2 = d2;
    if d1 == 0.0 && d2 >= 360.0 {
        d2 = 360.0;
    } else {
        d2 %= 360.0;
        if d2 < d1 {
            d2 += 360.0;
        }
    }
    let d1_rad = d1 * PI / 180.0;
    let d2_rad = d2 * PI / 180.0;

    let steps = ((rad * (d2_rad - d1_rad)) as i64).max(MIN_CIRCLE_STEPS).min(MAX_CIRCLE_STEPS);
    let angle_inc = (d2_rad - d1_rad) / steps as f64;

    let mut points = Vec::with_capacity(steps as usize + 2);
    points.push((x, y));
    for i in 0..=steps {
        let a = d1_rad + angle_inc * i as f64;
        points.push((x + rad * a.cos(), y + rad * a.sin()));
    }
    points
}

/// Fill the antialiased pie slice from `d1` to `d2` degrees
///
/// A slice starting at 0 and spanning 360 degrees or more is a full
/// circle.
pub fn arc_aa<I: PixelAccess + ?Sized>(im: &mut I, x: f64, y: f64, rad: f64,
                                       d1: f64, d2: f64, color: &Color) {
    debug!("arc_aa: ({}, {}) rad {} {} .. {} color {:?}", x, y, rad, d1, d2, color);
    let points = arc_poly(x, y, rad, d1, d2);
    poly_aa(im, &points, color);
}

/// Fill the antialiased pie slice from `d1` to `d2` degrees through `fill`
pub fn arc_aa_cfill<I, F>(im: &mut I, x: f64, y: f64, rad: f64, d1: f64, d2: f64, fill: &F)
where I: PixelAccess + ?Sized, F: Fill + ?Sized
{
    debug!("arc_aa_cfill: ({}, {}) rad {} {} .. {}", x, y, rad, d1, d2);
    let points = arc_poly(x, y, rad, d1, d2);
    poly_aa_fill(im, &points, fill);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poly_steps() {
        let p = arc_poly(0.0, 0.0, 1.0, 0.0, 90.0);
        assert_eq!(p.len(), 1 + MIN_CIRCLE_STEPS as usize + 1);
        assert_eq!(p[0], (0.0, 0.0));
        assert_eq!(p[1], (1.0, 0.0));

        let p = arc_poly(0.0, 0.0, 100.0, 0.0, 360.0);
        assert_eq!(p.len(), 2 + (100.0 * 2.0 * PI) as usize);
        let last = p[p.len() - 1];
        assert!((last.0 - 100.0).abs() < 1e-9 && last.1.abs() < 1e-9);
    }

    #[test]
    fn poly_wraps() {
        let p = arc_poly(0.0, 0.0, 50.0, 270.0, 90.0);
        let first = p[1];
        let last = p[p.len() - 1];
        assert!(first.0.abs() < 1e-9 && (first.1 + 50.0).abs() < 1e-9);
        assert!(last.0.abs() < 1e-9 && (last.1 - 50.0).abs() < 1e-9);
    }

    #[test]
    fn hlines_per_row() {
        let pix = crate::Pixfmt::<u8>::new(20, 20, 1);
        let h = arc_hlines(&pix, 10, 10, 5.0, 0.0, 90.0);
        assert!(h.segments(9).is_empty());
        assert_eq!(h.segments(10).len(), 1);
        assert_eq!(h.segments(10)[0].min_x, 10);
        assert_eq!(h.segments(15)[0].min_x, 10);
        assert!(h.segments(16).is_empty());
    }
}
