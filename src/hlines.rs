//! Horizontal span accumulation
//!
//! Shapes without antialiasing are described as a set of horizontal
//! segments per scanline first and painted afterwards.

use crate::color::Color;
use crate::render::Render;
use crate::Fill;
use crate::PixelAccess;

use log::trace;
use smallvec::SmallVec;

/// A run of `width` pixels starting at `min_x`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HlineSeg {
    pub min_x: i64,
    pub width: i64,
}

/// Sparse per scanline segment lists
///
/// Segments are appended in the order they are added; overlapping
/// segments are kept and painted more than once.
#[derive(Debug, Clone)]
pub struct HLines {
    start_y: i64,
    limit_y: i64,
    start_x: i64,
    limit_x: i64,
    rows: Vec<SmallVec<[HlineSeg; 4]>>,
}

impl HLines {
    /// Segment lists for rows `start_y .. start_y+count_y`, clipped to
    /// columns `start_x .. start_x+count_x`
    pub fn new(start_y: i64, count_y: i64, start_x: i64, count_x: i64) -> Self {
        let count_y = count_y.max(0);
        HLines {
            start_y,
            limit_y: start_y + count_y,
            start_x,
            limit_x: start_x + count_x.max(0),
            rows: vec![SmallVec::new(); count_y as usize],
        }
    }
    /// Segment lists covering an image
    pub fn for_image<I: PixelAccess + ?Sized>(im: &I) -> Self {
        Self::new(0, im.height(), 0, im.width())
    }
    /// Append the run `min_x .. min_x+width` to row `y`
    ///
    /// Runs outside the clip range are dropped, partial runs are clipped.
    pub fn add(&mut self, y: i64, min_x: i64, width: i64) {
        if width <= 0 || y < self.start_y || y >= self.limit_y {
            return;
        }
        let mut min_x = min_x;
        let mut x_limit = min_x + width;
        if x_limit <= self.start_x || min_x >= self.limit_x {
            return;
        }
        min_x = min_x.max(self.start_x);
        x_limit = x_limit.min(self.limit_x);
        let row = &mut self.rows[(y - self.start_y) as usize];
        row.push(HlineSeg { min_x, width: x_limit - min_x });
    }
    /// Segments of row `y`
    pub fn segments(&self, y: i64) -> &[HlineSeg] {
        if y < self.start_y || y >= self.limit_y {
            return &[];
        }
        &self.rows[(y - self.start_y) as usize]
    }
    /// Iterate over (`y`, segment) in row order
    pub fn iter(&self) -> impl Iterator<Item = (i64, &HlineSeg)> + '_ {
        let start_y = self.start_y;
        self.rows.iter().enumerate().flat_map(move |(i, row)| {
            row.iter().map(move |seg| (start_y + i as i64, seg))
        })
    }
    /// Paint every segment with a plain color
    pub fn fill_color<I: PixelAccess + ?Sized>(&self, im: &mut I, color: &Color) {
        for (y, seg) in self.iter() {
            trace!("hlines: y {} x {} width {}", y, seg.min_x, seg.width);
            for x in seg.min_x..seg.min_x + seg.width {
                im.put_pixel(x, y, color);
            }
        }
    }
    /// Paint every segment through the compositor
    pub fn fill_fill<I, F>(&self, im: &mut I, fill: &F)
    where I: PixelAccess + ?Sized, F: Fill + ?Sized
    {
        let mut r = Render::new(im, (self.limit_x - self.start_x) as usize);
        for (y, seg) in self.iter() {
            trace!("hlines: y {} x {} width {}", y, seg.min_x, seg.width);
            r.fill_span(seg.min_x, y, seg.width as usize, None, fill);
        }
    }
}

/// Minimum and maximum x per row
#[derive(Debug, Clone)]
pub struct MinMax {
    rows: Vec<Option<(i64, i64)>>,
}

impl MinMax {
    /// Extents for rows `0 .. lines`
    pub fn new(lines: i64) -> Self {
        MinMax { rows: vec![None; lines.max(0) as usize] }
    }
    /// Widen row `y` to include `x`, rows outside are ignored
    pub fn add(&mut self, x: i64, y: i64) {
        if y < 0 || y >= self.rows.len() as i64 {
            return;
        }
        let r = &mut self.rows[y as usize];
        *r = match *r {
            None => Some((x, x)),
            Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
        };
    }
    /// Extent of row `y`
    pub fn get(&self, y: i64) -> Option<(i64, i64)> {
        if y < 0 {
            return None;
        }
        self.rows.get(y as usize).cloned().flatten()
    }
    /// Walk a digital line from (`x1`,`y1`) to (`x2`,`y2`)
    ///
    /// Steps one pixel at a time along the major axis, rounding the
    /// minor coordinate.
    pub fn line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) {
        if x1 == x2 && y1 == y2 {
            self.add(x1, y1);
            return;
        }
        let alpha = (y2 - y1) as f64 / (x2 - x1) as f64;
        if alpha.abs() <= 1.0 {
            let (x1, y1, x2) = if x2 < x1 { (x2, y2, x1) } else { (x1, y1, x2) };
            let mut dsec = y1 as f64;
            for x in x1..=x2 {
                self.add(x, (dsec + 0.5) as i64);
                dsec += alpha;
            }
        } else {
            let alpha = 1.0 / alpha;
            let (x1, y1, y2) = if y2 < y1 { (x2, y2, y1) } else { (x1, y1, y2) };
            let mut dsec = x1 as f64;
            for y in y1..=y2 {
                self.add((dsec + 0.5) as i64, y);
                dsec += alpha;
            }
        }
    }
    /// One segment per non empty row
    pub fn to_hlines(&self, hlines: &mut HLines) {
        for (y, r) in self.rows.iter().enumerate() {
            if let Some((lo, hi)) = *r {
                hlines.add(y as i64, lo, hi - lo + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Pixfmt, SolidFill};

    #[test]
    fn add_clips() {
        let mut h = HLines::new(0, 4, 0, 10);
        h.add(1, -3, 5);
        h.add(1, 8, 10);
        h.add(1, 2, 3);
        h.add(1, 10, 2);
        h.add(5, 0, 2);
        h.add(2, 3, 0);
        assert_eq!(h.segments(1), &[HlineSeg { min_x: 0, width: 2 },
                                    HlineSeg { min_x: 8, width: 2 },
                                    HlineSeg { min_x: 2, width: 3 }]);
        assert!(h.segments(2).is_empty());
        assert!(h.segments(7).is_empty());
        assert_eq!(h.iter().count(), 3);
    }

    #[test]
    fn overlapping_segments_paint_once_each() {
        let mut pix = Pixfmt::<u8>::new(6, 2, 1);
        let mut h = HLines::for_image(&pix);
        h.add(0, 1, 3);
        h.add(0, 2, 3);
        h.fill_color(&mut pix, &Color::gray(200));
        let row : Vec<u8> = (0..6).filter_map(|x| pix.get_pixel(x, 0)).map(|c| c.channel[0]).collect();
        assert_eq!(row, vec![0, 200, 200, 200, 200, 0]);

        h.add(1, 4, 9);
        h.fill_fill(&mut pix, &SolidFill::new(&Color::white()));
        assert_eq!(pix.get_pixel(5, 1).map(|c| c.channel[0]), Some(255));
        assert_eq!(pix.get_pixel(3, 1).map(|c| c.channel[0]), Some(0));
    }

    #[test]
    fn minmax_line() {
        let mut m = MinMax::new(10);
        m.line(0, 0, 4, 2);
        assert_eq!(m.get(0), Some((0, 0)));
        assert_eq!(m.get(1), Some((1, 2)));
        assert_eq!(m.get(2), Some((3, 4)));
        m.line(5, 5, 5, 5);
        assert_eq!(m.get(5), Some((5, 5)));
        m.line(7, 9, 7, 6);
        assert_eq!(m.get(8), Some((7, 7)));
        assert_eq!(m.get(3), None);
        assert_eq!(m.get(-1), None);

        let mut h = HLines::new(0, 10, 0, 10);
        m.to_hlines(&mut h);
        assert_eq!(h.segments(1), &[HlineSeg { min_x: 1, width: 2 }]);
    }
}
