//! Circle and arc outlines
//!
//! Hard edged outlines use the Bresenham midpoint circle, antialiased
//! ones Wu's algorithm. Arcs restrict the eight symmetric octant points
//! to an angle range by mapping each point onto a monotonic position
//! along the circle: with `scale = r + 1` the quadrant boundaries at
//! 90, 180, 270 and 360 degrees sit at `scale * 2, 4, 6, 8`.

use std::f64::consts::PI;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::math::ppix_norm;
use crate::PixelAccess;

use log::{debug, warn};

fn invalid(what: &'static str) -> Error {
    warn!("{}", what);
    Error::InvalidParameter(what)
}

/// Fraction of the pixel at row `j` lying outside a circle of radius `r`
pub fn cover(r: i64, j: i64) -> f64 {
    let rjsq = ((r * r - j * j) as f64).sqrt();
    rjsq.ceil() - rjsq
}

/// Position of `angle` (degrees, 0 to 360) along the arc position scale
pub fn arc_seg(angle: f64, scale: i64) -> i64 {
    let mut seg = ((angle + 45.0) / 90.0) as i64;
    let remains = angle - seg as f64 * 90.0;
    while seg > 4 {
        seg -= 4;
    }
    if seg == 4 && remains > 0.0 {
        seg = 0;
    }
    (scale as f64 * (seg as f64 * 2.0 + (remains * PI / 180.0).sin())) as i64
}

/// Bring an angle into [0,360)
fn normalize_angle(d: f64) -> f64 {
    let d = if d < 0.0 { d + 360.0 * ((-d + 359.0) / 360.0).floor() } else { d };
    d % 360.0
}

/// Ranges of the arc position scale covered by `d1 .. d2`
fn arc_ranges(d1: f64, d2: f64, scale: i64) -> Vec<(i64, i64)> {
    let seg_d1 = arc_seg(normalize_angle(d1), scale);
    let seg_d2 = arc_seg(normalize_angle(d2), scale);
    if seg_d2 < seg_d1 {
        vec![(0, seg_d2), (seg_d1, scale * 8)]
    } else {
        vec![(seg_d1, seg_d2)]
    }
}

/// Draw a one pixel circle outline centered at (`xc`,`yc`)
///
/// A zero radius plots the center pixel.
pub fn circle_out<I: PixelAccess + ?Sized>(im: &mut I, xc: i64, yc: i64, r: i64,
                                           color: &Color) -> Result<()> {
    debug!("circle_out: ({}, {}) r {} color {:?}", xc, yc, r, color);
    if r < 0 {
        return Err(invalid("circle: radius must be non-negative"));
    }
    im.put_pixel(xc + r, yc, color);
    im.put_pixel(xc - r, yc, color);
    im.put_pixel(xc, yc + r, color);
    im.put_pixel(xc, yc - r, color);

    let (mut x, mut y) = (0, r);
    let (mut dx, mut dy) = (1, -2 * r);
    let mut err = 1 - r;
    while x < y {
        if err >= 0 {
            y -= 1;
            dy += 2;
            err += dy;
        }
        x += 1;
        dx += 2;
        err += dx;
        im.put_pixel(xc + x, yc + y, color);
        im.put_pixel(xc + x, yc - y, color);
        im.put_pixel(xc - x, yc + y, color);
        im.put_pixel(xc - x, yc - y, color);
        if x != y {
            im.put_pixel(xc + y, yc + x, color);
            im.put_pixel(xc + y, yc - x, color);
            im.put_pixel(xc - y, yc + x, color);
            im.put_pixel(xc - y, yc - x, color);
        }
    }
    Ok(())
}

fn with_alpha(color: &Color, alpha: i64) -> Color {
    let mut work = *color;
    work.channel[3] = (i64::from(color.channel[3]) * alpha / 255) as u8;
    work
}

/// Draw an antialiased circle outline centered at (`xc`,`yc`)
///
///     use rasterfill::{Pixfmt, Color, circle_out_aa, Error};
///
///     let mut pix = Pixfmt::<u8>::new(20, 20, 3);
///     assert!(circle_out_aa(&mut pix, 10, 10, 6, &Color::white()).is_ok());
///     assert!(matches!(circle_out_aa(&mut pix, 10, 10, 0, &Color::white()),
///                      Err(Error::InvalidParameter(_))));
///
pub fn circle_out_aa<I: PixelAccess + ?Sized>(im: &mut I, xc: i64, yc: i64, r: i64,
                                              color: &Color) -> Result<()> {
    debug!("circle_out_aa: ({}, {}) r {} color {:?}", xc, yc, r, color);
    if r <= 0 {
        return Err(invalid("circle: radius must be positive"));
    }
    ppix_norm(im, xc + r, yc, color);
    ppix_norm(im, xc - r, yc, color);
    ppix_norm(im, xc, yc + r, color);
    ppix_norm(im, xc, yc - r, color);

    let (mut i, mut j) = (r, 0);
    let mut t = 0.0;
    while i > j + 1 {
        j += 1;
        let d = cover(r, j);
        let cv = (d * 255.0 + 0.5) as i64;
        let inv_cv = 255 - cv;
        if d < t {
            i -= 1;
        }
        if inv_cv != 0 {
            let work = with_alpha(color, inv_cv);
            for &(px, py) in &[(i, j), (-i, j), (i, -j), (-i, -j)] {
                ppix_norm(im, xc + px, yc + py, &work);
            }
            if i != j {
                for &(px, py) in &[(j, i), (-j, i), (j, -i), (-j, -i)] {
                    ppix_norm(im, xc + px, yc + py, &work);
                }
            }
        }
        if cv != 0 && i > j {
            let work = with_alpha(color, cv);
            let k = i - 1;
            for &(px, py) in &[(k, j), (-k, j), (k, -j), (-k, -j)] {
                ppix_norm(im, xc + px, yc + py, &work);
            }
            if j != k {
                for &(px, py) in &[(j, k), (-j, k), (j, -k), (-j, -k)] {
                    ppix_norm(im, xc + px, yc + py, &work);
                }
            }
        }
        t = d;
    }
    Ok(())
}

/// Draw a one pixel arc outline from `d1` to `d2` degrees
///
/// Angles grow clockwise from the positive x axis (y grows downward).
/// A range of a full turn or more draws the whole circle.
pub fn arc_out<I: PixelAccess + ?Sized>(im: &mut I, xc: i64, yc: i64, r: i64,
                                        d1: f64, d2: f64, color: &Color) -> Result<()> {
    debug!("arc_out: ({}, {}) r {} {} .. {} color {:?}", xc, yc, r, d1, d2, color);
    if r <= 0 {
        return Err(invalid("arc: radius must be positive"));
    }
    if d1 + 360.0 <= d2 {
        return circle_out(im, xc, yc, r, color);
    }
    let scale = r + 1;
    let (seg1, seg2, seg3, seg4) = (scale * 2, scale * 4, scale * 6, scale * 8);

    for (start, end) in arc_ranges(d1, d2, scale) {
        let on = |v: i64| start <= v && end >= v;
        if start == 0 {
            im.put_pixel(xc + r, yc, color);
        }
        if on(seg1) {
            im.put_pixel(xc, yc + r, color);
        }
        if on(seg2) {
            im.put_pixel(xc - r, yc, color);
        }
        if on(seg3) {
            im.put_pixel(xc, yc - r, color);
        }
        let (mut x, mut y) = (r, 0);
        let (mut dx, mut dy) = (-2 * r, 1);
        let mut err = 1 - r;
        while y < x {
            if err >= 0 {
                x -= 1;
                dx += 2;
                err += dx;
            }
            y += 1;
            dy += 2;
            err += dy;
            let sin_th = y;
            let points = [
                (sin_th, x, y),
                (seg1 - sin_th, y, x),
                (seg1 + sin_th, -y, x),
                (seg2 - sin_th, -x, y),
                (seg2 + sin_th, -x, -y),
                (seg3 - sin_th, -y, -x),
                (seg3 + sin_th, y, -x),
                (seg4 - sin_th, x, -y),
            ];
            for &(pos, px, py) in points.iter() {
                if on(pos) {
                    im.put_pixel(xc + px, yc + py, color);
                }
            }
        }
    }
    Ok(())
}

/// Draw an antialiased arc outline from `d1` to `d2` degrees
pub fn arc_out_aa<I: PixelAccess + ?Sized>(im: &mut I, xc: i64, yc: i64, r: i64,
                                           d1: f64, d2: f64, color: &Color) -> Result<()> {
    debug!("arc_out_aa: ({}, {}) r {} {} .. {} color {:?}", xc, yc, r, d1, d2, color);
    if r <= 0 {
        return Err(invalid("arc: radius must be positive"));
    }
    if d1 + 360.0 <= d2 {
        return circle_out_aa(im, xc, yc, r, color);
    }
    let scale = r + 1;
    let (seg1, seg2, seg3, seg4) = (scale * 2, scale * 4, scale * 6, scale * 8);

    for (start, end) in arc_ranges(d1, d2, scale) {
        let on = |v: i64| start <= v && end >= v;
        let (mut i, mut j) = (r, 0);
        let mut t = 0.0;
        if start == 0 {
            ppix_norm(im, xc + i, yc + j, color);
        }
        if on(seg1) {
            ppix_norm(im, xc + j, yc + i, color);
        }
        if on(seg2) {
            ppix_norm(im, xc - i, yc + j, color);
        }
        if on(seg3) {
            ppix_norm(im, xc + j, yc - i, color);
        }
        while i > j + 1 {
            j += 1;
            let d = cover(r, j);
            let cv = (d * 255.0 + 0.5) as i64;
            let inv_cv = 255 - cv;
            if d < t {
                i -= 1;
            }
            let sin_th = j;
            // Octant points of (a, b), the swapped half only when a != b
            let mut plot = |a: i64, b: i64, work: &Color| {
                let main = [(sin_th, a, b), (seg2 - sin_th, -a, b),
                            (seg4 - sin_th, a, -b), (seg2 + sin_th, -a, -b)];
                let swapped = [(seg1 - sin_th, b, a), (seg1 + sin_th, -b, a),
                               (seg3 + sin_th, b, -a), (seg3 - sin_th, -b, -a)];
                for &(pos, px, py) in main.iter() {
                    if on(pos) {
                        ppix_norm(im, xc + px, yc + py, work);
                    }
                }
                if a != b {
                    for &(pos, px, py) in swapped.iter() {
                        if on(pos) {
                            ppix_norm(im, xc + px, yc + py, work);
                        }
                    }
                }
            };
            if inv_cv != 0 {
                plot(i, j, &with_alpha(color, inv_cv));
            }
            if cv != 0 && i > j {
                plot(i - 1, j, &with_alpha(color, cv));
            }
            t = d;
        }
    }
    Ok(())
}
