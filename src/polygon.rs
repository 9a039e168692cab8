//! Antialiased polygon scan conversion
//!
//! Vertices are converted to fine coordinates and sorted by y. Between
//! two consecutive distinct vertex y values (an interval) the set of
//! crossing edges does not change; the crossings are sorted by x and
//! taken in left/right pairs. For every output scanline inside the
//! interval each pair adds the area between its two edges to the
//! per column accumulator, which is flushed once a full scanline
//! (16 fine rows) has been accumulated.

use crate::color::Color;
use crate::fixed::{coarse, fine, to_fine, Fine, SUBPIXEL_SCALE};
use crate::math::ppix_norm;
use crate::render::Render;
use crate::scan::SsScanline;
use crate::Fill;
use crate::PixelAccess;

use log::{debug, trace, warn};

/// Polygon vertex in fine coordinates
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub n: usize,
    pub x: Fine,
    pub y: Fine,
}

/// Polygon edge in fine coordinates
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Line {
    pub n: usize,
    pub x1: Fine,
    pub y1: Fine,
    pub x2: Fine,
    pub y2: Fine,
    pub minx: Fine,
    pub maxx: Fine,
    pub miny: Fine,
    pub maxy: Fine,
    /// Direction of the edge, 0 for vertical edges
    pub updown: i32,
}

impl Line {
    pub fn new(n: usize, x1: Fine, y1: Fine, x2: Fine, y2: Fine) -> Self {
        Line {
            n,
            x1,
            y1,
            x2,
            y2,
            minx: x1.min(x2),
            maxx: x1.max(x2),
            miny: y1.min(y2),
            maxy: y1.max(y2),
            updown: 0,
        }
    }
    /// x of the edge at `y`, in integer arithmetic
    pub fn eval_at_y(&self, y: Fine) -> f64 {
        let t = self.y2 - self.y1;
        if t != 0 {
            (((y - self.y1) * self.x2 + (self.y2 - y) * self.x1) / t) as f64
        } else {
            (self.x1 + self.x2) as f64 / 2.0
        }
    }
    /// y of the edge at `x`, in integer arithmetic
    pub fn eval_at_x(&self, x: Fine) -> f64 {
        let t = self.x2 - self.x1;
        if t != 0 {
            (((x - self.x1) * self.y2 + (self.x2 - x) * self.y1) / t) as f64
        } else {
            (self.y1 + self.y2) as f64 / 2.0
        }
    }
    fn direction(&self) -> i32 {
        if self.x1 == self.x2 {
            0
        } else if self.x1 > self.x2 {
            if self.y1 > self.y2 { -1 } else { 1 }
        } else if self.y1 > self.y2 {
            1
        } else {
            -1
        }
    }
}

/// Edge crossing an interval, `x` evaluated at the interval middle
#[derive(Debug, Copy, Clone)]
struct Slice {
    n: usize,
    x: f64,
}

/// Edges crossing the interval `minc .. maxc`, horizontal edges skipped
fn lines_in_interval(lset: &[Line], minc: Fine, maxc: Fine, out: &mut Vec<Slice>) {
    out.clear();
    let mid = (minc + maxc) / 2;
    for l in lset {
        if l.maxy > minc && l.miny < maxc && l.miny != l.maxy {
            out.push(Slice { n: l.n, x: l.eval_at_y(mid) });
        }
    }
    out.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

fn mark_updown(lset: &mut [Line], tllist: &[Slice]) {
    for pair in tllist.chunks(2) {
        for s in pair {
            let l = &mut lset[s.n];
            l.updown = l.direction();
        }
        if pair.len() != 2 {
            warn!("poly_aa: odd number of line crossings, polygon is not simple");
        }
    }
}

fn trap_square(xlen: Fine, ylen: Fine, xl: f64, yl: f64) -> i32 {
    ((xlen * ylen) as f64 - (xl * yl) / 2.0) as i32
}

/// Area of the box `minx..maxx` x `miny..maxy` right of `line`, in
/// fine units squared
pub fn pixel_coverage(line: &Line, minx: Fine, maxx: Fine, miny: Fine, maxy: Fine) -> i32 {
    let (lycross, rycross, l, r) = if line.updown == 0 {
        (0.0, 0.0, false, false)
    } else {
        let ly = line.eval_at_x(minx);
        let ry = line.eval_at_x(maxx);
        let (fminy, fmaxy) = (miny as f64, maxy as f64);
        (ly, ry, ly >= fminy && ly <= fmaxy, ry >= fminy && ry <= fmaxy)
    };
    let (w, h) = ((maxx - minx) as f64, (maxy - miny) as f64);
    let (fminx, fmaxx) = (minx as f64, maxx as f64);
    let (fminy, fmaxy) = (miny as f64, maxy as f64);
    let v = match (l, r) {
        (true, true) => {
            if line.updown == 1 {
                w * (2.0 * fmaxy - lycross - rycross) / 2.0
            } else {
                w * (lycross + rycross - 2.0 * fminy) / 2.0
            }
        }
        (false, false) => {
            h * (2.0 * fmaxx - line.eval_at_y(miny) - line.eval_at_y(maxy)) / 2.0
        }
        (true, false) => {
            return if line.updown == 1 {
                trap_square(maxx - minx, maxy - miny, line.eval_at_y(miny) - fminx, lycross - fminy)
            } else {
                trap_square(maxx - minx, maxy - miny, line.eval_at_y(maxy) - fminx, fmaxy - lycross)
            };
        }
        (false, true) => {
            if line.updown == 1 {
                (fmaxx - line.eval_at_y(maxy)) * (fmaxy - rycross) / 2.0
            } else {
                (fmaxx - line.eval_at_y(miny)) * (rycross - fminy) / 2.0
            }
        }
    };
    v as i32
}

/// Add the area between edges `l` and `r` for fine rows `miny..maxy`
fn render_slice_scanline(ss: &mut SsScanline, l: &Line, r: &Line, miny: Fine, maxy: Fine) {
    let (l0, l1) = (l.eval_at_y(maxy), l.eval_at_y(miny));
    let (r0, r1) = (r.eval_at_y(maxy), r.eval_at_y(miny));
    let lminx = l0.min(l1) as Fine;
    let lmaxx = l0.max(l1) as Fine;
    let rminx = r0.min(r1) as Fine;
    let rmaxx = r0.max(r1) as Fine;

    let startpix = coarse(lminx).max(0);
    let stoppix = coarse(rmaxx - 1).min(ss.width() as Fine - 1);

    for cpix in startpix..=stoppix {
        let lt = coarse(lmaxx - 1) >= cpix;
        let rt = coarse(rminx) <= cpix;
        let px0 = cpix * SUBPIXEL_SCALE;
        let px1 = px0 + SUBPIXEL_SCALE;

        let a = if lt { pixel_coverage(l, px0, px1, miny, maxy) } else { 0 };
        let b = if lt { 0 } else { (SUBPIXEL_SCALE * (maxy - miny)) as i32 };
        let c = if rt { pixel_coverage(r, px0, px1, miny, maxy) } else { 0 };
        ss.line[cpix as usize] += a + b - c;
    }
}

/// Accumulate polygon coverage, handing each finished scanline to `flush`
///
/// `flush` receives the row index and the accumulated coverage of a
/// `width` pixel row. Rows outside `0..height` are never produced.
/// Fewer than two points draw nothing.
///
///     use rasterfill::poly_aa_coverage;
///
///     let square = [(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)];
///     let mut rows = vec![];
///     poly_aa_coverage(4, 4, &square, |y, ss| {
///         rows.push((y, ss.coverage(0), ss.coverage(1), ss.coverage(2)));
///     });
///     assert_eq!(rows, vec![(1, 0, 255, 255), (2, 0, 255, 255)]);
///
pub fn poly_aa_coverage<F>(width: i64, height: i64, points: &[(f64, f64)], mut flush: F)
where F: FnMut(i64, &SsScanline)
{
    let n = points.len();
    if n < 2 || width <= 0 || height <= 0 {
        return;
    }
    let pset: Vec<Point> = points.iter().enumerate()
        .map(|(i, &(x, y))| Point { n: i, x: to_fine(x), y: to_fine(y) })
        .collect();
    let mut lset: Vec<Line> = (0..n)
        .map(|i| {
            let (p, q) = (&pset[i], &pset[(i + 1) % n]);
            Line::new(i, p.x, p.y, q.x, q.y)
        })
        .collect();
    let mut sorted = pset.clone();
    sorted.sort_by_key(|p| p.y);

    let mut templine = SsScanline::new(width as usize);
    let mut tllist = Vec::with_capacity(n);
    let mut pending = None;

    for pair in sorted.windows(2) {
        let (a, b) = (pair[0].y, pair[1].y);
        if a == b {
            continue;
        }
        let startscan = coarse(a).max(0);
        let stopscan = coarse(b + SUBPIXEL_SCALE - 1).min(height);

        lines_in_interval(&lset, a, b, &mut tllist);
        mark_updown(&mut lset, &tllist);
        trace!("poly_aa: interval {} .. {} rows {} .. {} crossings {}",
               a, b, startscan, stopscan, tllist.len());

        for cscl in startscan..stopscan {
            let row_top = cscl * SUBPIXEL_SCALE;
            let row_bottom = row_top + SUBPIXEL_SCALE;
            let scan_miny = a.max(row_top);
            let scan_maxy = b.min(row_bottom);

            for lr in tllist.chunks_exact(2) {
                render_slice_scanline(&mut templine, &lset[lr[0].n], &lset[lr[1].n],
                                      scan_miny, scan_maxy);
            }
            if fine(scan_maxy) == 0 {
                flush(cscl, &templine);
                templine.reset();
                pending = None;
            } else {
                pending = Some(cscl);
            }
        }
    }
    if let Some(y) = pending {
        flush(y, &templine);
    }
}

/// Fill a polygon with a plain color
///
/// Each pixel is blended with `color`, its alpha scaled by the pixel
/// coverage. Pixels with no coverage are not touched. `color` is RGBA
/// whatever the image layout, see [ppix_norm](crate::ppix_norm).
pub fn poly_aa<I: PixelAccess + ?Sized>(im: &mut I, points: &[(f64, f64)], color: &Color) {
    debug!("poly_aa: {} points color {:?}", points.len(), color);
    let (w, h) = (im.width(), im.height());
    let alpha = u32::from(color.channel[3]);
    poly_aa_coverage(w, h, points, |y, ss| {
        for x in 0..ss.width() {
            let tv = u32::from(ss.coverage(x));
            if tv == 0 {
                continue;
            }
            let mut work = *color;
            work.channel[3] = (alpha * tv / 255) as u8;
            ppix_norm(im, x as i64, y, &work);
        }
    });
}

/// Fill a polygon through a [Fill]
///
/// Each scanline is composited between its first and last covered pixel.
pub fn poly_aa_fill<I, F>(im: &mut I, points: &[(f64, f64)], fill: &F)
where I: PixelAccess + ?Sized, F: Fill + ?Sized
{
    debug!("poly_aa_fill: {} points", points.len());
    let (w, h) = (im.width(), im.height());
    let mut cover = vec![0u8; w.max(0) as usize];
    let mut r = Render::new(im, w.max(0) as usize);
    poly_aa_coverage(w, h, points, |y, ss| {
        if let Some((left, right)) = ss.extent() {
            for x in left..right {
                cover[x - left] = ss.coverage(x);
            }
            r.fill_span(left as i64, y, right - left, Some(&cover[..right - left]), fill);
        }
    });
}
