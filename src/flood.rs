//! Flood fill
//!
//! Span stack region growing: every stack frame holds a run of pixels
//! on the row above or below an already filled run, together with the
//! bounds of that parent run. Popping a frame scans its row for matching
//! runs, marks them in a [Bitmap] and pushes continuations in the same
//! direction, plus reversed ones for the parts that stick out past the
//! parent so regions curling back are found too.

use crate::bitmap::Bitmap;
use crate::color::Color;
use crate::error::{Error, Result};
use crate::render::Render;
use crate::Fill;
use crate::PixelAccess;

use log::{debug, trace, warn};

#[derive(Debug, Copy, Clone)]
struct SpanFrame {
    l: i64,
    r: i64,
    dadl: i64,
    dadr: i64,
    y: i64,
    dir: i64,
}

/// Pixels selected by a flood fill
#[derive(Debug, Clone)]
pub struct FloodRegion {
    /// Selected pixels, the size of the image
    pub mask: Bitmap,
    pub xmin: i64,
    pub xmax: i64,
    pub ymin: i64,
    pub ymax: i64,
}

impl FloodRegion {
    /// Bounding box (xmin, xmax, ymin, ymax), inclusive
    pub fn bbox(&self) -> (i64, i64, i64, i64) {
        (self.xmin, self.xmax, self.ymin, self.ymax)
    }
    /// Number of selected pixels
    pub fn count(&self) -> usize {
        self.mask.count()
    }
    /// Horizontal runs of selected pixels as (y, x_start, x_end exclusive)
    pub fn runs(&self) -> Vec<(i64, i64, i64)> {
        let mut out = vec![];
        for y in self.ymin..=self.ymax {
            let mut x = self.xmin;
            while x <= self.xmax {
                if !self.mask.test(x, y) {
                    x += 1;
                    continue;
                }
                let start = x;
                while x <= self.xmax && self.mask.test(x, y) {
                    x += 1;
                }
                out.push((y, start, x));
            }
        }
        out
    }
}

struct Grower<'a, I: PixelAccess + ?Sized, P: Fn(&Color) -> bool> {
    im: &'a I,
    matches: P,
    btm: Bitmap,
    stack: Vec<SpanFrame>,
    bbox: (i64, i64, i64, i64),
}

impl<'a, I: PixelAccess + ?Sized, P: Fn(&Color) -> bool> Grower<'a, I, P> {
    fn inside(&self, x: i64, y: i64) -> bool {
        !self.btm.test(x, y) && self.im.get_pixel(x, y).map_or(false, |c| (self.matches)(&c))
    }
    fn set(&mut self, x: i64, y: i64) {
        self.btm.set(x, y);
        let b = &mut self.bbox;
        b.0 = b.0.min(x);
        b.1 = b.1.max(x);
        b.2 = b.2.min(y);
        b.3 = b.3.max(y);
    }
    fn push(&mut self, l: i64, r: i64, dadl: i64, dadr: i64, y: i64, dir: i64) {
        let ny = y + dir;
        if ny >= 0 && ny < self.im.height() {
            self.stack.push(SpanFrame { l, r, dadl, dadr, y: ny, dir });
        }
    }
    fn stack_span(&mut self, dir: i64, dadl: i64, dadr: i64, lx: i64, rx: i64, y: i64) {
        let (pushl, pushr) = (lx - 1, rx + 1);
        self.push(lx, rx, pushl, pushr, y, dir);
        if rx > dadr {
            self.push(dadr + 1, rx, pushl, pushr, y, -dir);
        }
        if lx < dadl {
            self.push(lx, dadl - 1, pushl, pushr, y, -dir);
        }
    }
    fn grow(&mut self, seedx: i64, seedy: i64) {
        let w = self.im.width();
        let mut ltx = seedx;
        while ltx > 0 && self.inside(ltx - 1, seedy) {
            ltx -= 1;
        }
        let mut rtx = seedx;
        while rtx < w - 1 && self.inside(rtx + 1, seedy) {
            rtx += 1;
        }
        for x in ltx..=rtx {
            self.set(x, seedy);
        }
        self.push(ltx, rtx, ltx, rtx, seedy, 1);
        self.push(ltx, rtx, ltx, rtx, seedy, -1);

        while let Some(f) = self.stack.pop() {
            let SpanFrame { l, r: rx, dadl, dadr, y, dir } = f;
            trace!("flood: pop y {} {} .. {} dir {}", y, l, rx, dir);
            let mut lx = l;
            let mut x = lx + 1;
            let mut was_in = false;
            if lx >= 0 && self.inside(lx, y) {
                was_in = true;
                self.set(lx, y);
                lx -= 1;
                while lx >= 0 && self.inside(lx, y) {
                    self.set(lx, y);
                    lx -= 1;
                }
                // First pixel of the span
                lx += 1;
            }
            while x <= w - 1 {
                if was_in {
                    if self.inside(x, y) {
                        self.set(x, y);
                    } else {
                        self.stack_span(dir, dadl, dadr, lx, x - 1, y);
                        was_in = false;
                    }
                } else {
                    if x > rx {
                        break;
                    }
                    if self.inside(x, y) {
                        self.set(x, y);
                        was_in = true;
                        lx = x;
                    }
                }
                x += 1;
            }
            if was_in {
                self.stack_span(dir, dadl, dadr, lx, x - 1, y);
            }
        }
    }
}

/// Select the 4-connected region around (`x`,`y`)
///
/// Without a border color the region is every pixel equal to the seed
/// pixel; with one it is every pixel not equal to the border. Colors are
/// compared over the image channels.
pub fn flood_mask<I: PixelAccess + ?Sized>(im: &I, x: i64, y: i64,
                                           border: Option<&Color>) -> Result<FloodRegion> {
    let seed = match im.get_pixel(x, y) {
        Some(c) => c,
        None => {
            warn!("flood: seed ({}, {}) outside of image", x, y);
            return Err(Error::OutOfRange { x, y });
        }
    };
    let channels = im.channels();
    let btm = Bitmap::new(im.width(), im.height());
    let bbox = (x, x, y, y);
    let (mask, bbox) = match border {
        None => {
            let matches = move |c: &Color| c.eq_channels(&seed, channels);
            let mut g = Grower { im, matches, btm, stack: vec![], bbox };
            g.grow(x, y);
            (g.btm, g.bbox)
        }
        Some(border) => {
            let border = *border;
            let matches = move |c: &Color| !c.eq_channels(&border, channels);
            let mut g = Grower { im, matches, btm, stack: vec![], bbox };
            g.grow(x, y);
            (g.btm, g.bbox)
        }
    };
    let (xmin, xmax, ymin, ymax) = bbox;
    debug!("flood: seed ({}, {}) bbox x {} .. {} y {} .. {}", x, y, xmin, xmax, ymin, ymax);
    Ok(FloodRegion { mask, xmin, xmax, ymin, ymax })
}

fn paint_color<I: PixelAccess + ?Sized>(im: &mut I, region: &FloodRegion, color: &Color) {
    for (y, x0, x1) in region.runs() {
        for x in x0..x1 {
            im.put_pixel(x, y, color);
        }
    }
}

fn paint_fill<I, F>(im: &mut I, region: &FloodRegion, fill: &F)
where I: PixelAccess + ?Sized, F: Fill + ?Sized
{
    let mut r = Render::new(im, (region.xmax - region.xmin + 1) as usize);
    for (y, x0, x1) in region.runs() {
        r.fill_span(x0, y, (x1 - x0) as usize, None, fill);
    }
}

/// Fill the region of pixels equal to the seed pixel with `color`
///
///     use rasterfill::{Pixfmt, PixelAccess, Color, flood_fill};
///
///     let mut pix = Pixfmt::<u8>::new(5, 5, 3);
///     let region = flood_fill(&mut pix, 2, 2, &Color::white()).unwrap();
///     assert_eq!(region.bbox(), (0, 4, 0, 4));
///     assert_eq!(pix.get_pixel(4, 4), Some(Color::rgba(255, 255, 255, 0)));
///
pub fn flood_fill<I: PixelAccess + ?Sized>(im: &mut I, x: i64, y: i64,
                                           color: &Color) -> Result<FloodRegion> {
    debug!("flood_fill: seed ({}, {}) color {:?}", x, y, color);
    let region = flood_mask(im, x, y, None)?;
    paint_color(im, &region, color);
    Ok(region)
}

/// Fill the region of pixels equal to the seed pixel through `fill`
pub fn flood_cfill<I, F>(im: &mut I, x: i64, y: i64, fill: &F) -> Result<FloodRegion>
where I: PixelAccess + ?Sized, F: Fill + ?Sized
{
    debug!("flood_cfill: seed ({}, {})", x, y);
    let region = flood_mask(im, x, y, None)?;
    paint_fill(im, &region, fill);
    Ok(region)
}

/// Fill the region bounded by `border` colored pixels with `color`
pub fn flood_fill_border<I: PixelAccess + ?Sized>(im: &mut I, x: i64, y: i64, color: &Color,
                                                  border: &Color) -> Result<FloodRegion> {
    debug!("flood_fill_border: seed ({}, {}) color {:?} border {:?}", x, y, color, border);
    let region = flood_mask(im, x, y, Some(border))?;
    paint_color(im, &region, color);
    Ok(region)
}

/// Fill the region bounded by `border` colored pixels through `fill`
pub fn flood_cfill_border<I, F>(im: &mut I, x: i64, y: i64, fill: &F,
                                border: &Color) -> Result<FloodRegion>
where I: PixelAccess + ?Sized, F: Fill + ?Sized
{
    debug!("flood_cfill_border: seed ({}, {}) border {:?}", x, y, border);
    let region = flood_mask(im, x, y, Some(border))?;
    paint_fill(im, &region, fill);
    Ok(region)
}
