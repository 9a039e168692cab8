//! Fills
//!
//! Color generators consumed by [Render](crate::Render), and the blend
//! modes a fill may bring along to replace the plain coverage blend.

use crate::color::*;
use crate::Fill;

/// Custom blending of generated fill colors onto image pixels
///
/// `channels` is the image channel count. For gray and RGB images the
/// source alpha lives in the extra channel at index `channels`, for
/// gray+alpha and RGBA images at `channels - 1`.
pub trait Combiner {
    fn combine(&self, dest: &mut [Color], src: &[Color], channels: usize);
    fn combinef(&self, dest: &mut [Fcolor], src: &[Fcolor], channels: usize);
}

/// Blend modes
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Combine {
    /// Straight alpha "over"
    Normal,
    Multiply,
    Add,
    Subtract,
    /// Absolute difference
    Diff,
    Lighten,
    Darken,
}

impl Combine {
    fn mix(self, d: u8, s: u8) -> u8 {
        let (d, s) = (u32::from(d), u32::from(s));
        let v = match self {
            Combine::Normal => s,
            Combine::Multiply => d * s / 255,
            Combine::Add => (d + s).min(255),
            Combine::Subtract => d.saturating_sub(s),
            Combine::Diff => if d > s { d - s } else { s - d },
            Combine::Lighten => d.max(s),
            Combine::Darken => d.min(s),
        };
        v as u8
    }
    fn mixf(self, d: f64, s: f64) -> f64 {
        match self {
            Combine::Normal => s,
            Combine::Multiply => d * s,
            Combine::Add => (d + s).min(1.0),
            Combine::Subtract => (d - s).max(0.0),
            Combine::Diff => (d - s).abs(),
            Combine::Lighten => d.max(s),
            Combine::Darken => d.min(s),
        }
    }
}

fn has_alpha(channels: usize) -> bool {
    channels == 2 || channels == 4
}

impl Combiner for Combine {
    fn combine(&self, dest: &mut [Color], src: &[Color], channels: usize) {
        if has_alpha(channels) {
            let ac = channels - 1;
            for (d, s) in dest.iter_mut().zip(src.iter()) {
                let sa = u32::from(s.channel[ac]);
                if sa == 0 {
                    continue;
                }
                let remains = 255 - sa;
                let orig = u32::from(d.channel[ac]);
                let dest_alpha = sa + remains * orig / 255;
                for ch in 0..ac {
                    let v = u32::from(self.mix(d.channel[ch], s.channel[ch]));
                    d.channel[ch] = ((sa * v + remains * u32::from(d.channel[ch]) * orig / 255)
                                     / dest_alpha) as u8;
                }
                d.channel[ac] = dest_alpha as u8;
            }
        } else {
            for (d, s) in dest.iter_mut().zip(src.iter()) {
                let sa = u32::from(s.channel[channels]);
                if sa == 0 {
                    continue;
                }
                let remains = 255 - sa;
                for ch in 0..channels {
                    let v = u32::from(self.mix(d.channel[ch], s.channel[ch]));
                    d.channel[ch] = ((v * sa + u32::from(d.channel[ch]) * remains) / 255) as u8;
                }
            }
        }
    }
    fn combinef(&self, dest: &mut [Fcolor], src: &[Fcolor], channels: usize) {
        if has_alpha(channels) {
            let ac = channels - 1;
            for (d, s) in dest.iter_mut().zip(src.iter()) {
                let sa = s.channel[ac];
                if sa <= 0.0 {
                    continue;
                }
                let remains = 1.0 - sa;
                let orig = d.channel[ac];
                let dest_alpha = sa + remains * orig;
                for ch in 0..ac {
                    let v = self.mixf(d.channel[ch], s.channel[ch]);
                    d.channel[ch] = (sa * v + remains * d.channel[ch] * orig) / dest_alpha;
                }
                d.channel[ac] = dest_alpha;
            }
        } else {
            for (d, s) in dest.iter_mut().zip(src.iter()) {
                let sa = s.channel[channels];
                if sa <= 0.0 {
                    continue;
                }
                for ch in 0..channels {
                    let v = self.mixf(d.channel[ch], s.channel[ch]);
                    d.channel[ch] = v * sa + d.channel[ch] * (1.0 - sa);
                }
            }
        }
    }
}

/// Reduce an RGBA color to gray+alpha for fills of 2 or fewer channels
fn adapt_fill_color(c: &Color, channels: usize) -> Color {
    let mut work = [*c];
    if channels <= 2 {
        adapt_colors(2, 4, &mut work);
    }
    work[0]
}

fn adapt_fill_fcolor(c: &Fcolor, channels: usize) -> Fcolor {
    let mut work = [*c];
    if channels <= 2 {
        adapt_fcolors(2, 4, &mut work);
    }
    work[0]
}

/// Single color fill
///
///     use rasterfill::{Pixfmt, PixelAccess, Color, SolidFill, box_cfill};
///
///     let mut pix = Pixfmt::<u8>::new(4, 4, 3);
///     let fill = SolidFill::new(&Color::rgb(0, 0, 255));
///     box_cfill(&mut pix, 0, 0, 1, 1, &fill);
///     assert_eq!(pix.get_pixel(1, 1), Some(Color::rgba(0, 0, 255, 0)));
///
#[derive(Debug, Clone)]
pub struct SolidFill {
    color: Color,
    fcolor: Fcolor,
    combine: Option<Combine>,
}

impl SolidFill {
    /// Fill replacing pixels according to coverage
    pub fn new(color: &Color) -> Self {
        Self { color: *color, fcolor: Fcolor::from(*color), combine: None }
    }
    /// Fill with a blend mode
    pub fn with_combine(color: &Color, combine: Combine) -> Self {
        Self { combine: Some(combine), ..Self::new(color) }
    }
    /// Fill from a double color
    pub fn from_fcolor(fcolor: &Fcolor, combine: Option<Combine>) -> Self {
        Self { color: Color::from(*fcolor), fcolor: *fcolor, combine }
    }
}

impl Fill for SolidFill {
    fn fill_with_color(&self, _x: i64, _y: i64, channels: usize, out: &mut [Color]) {
        let c = adapt_fill_color(&self.color, channels);
        for o in out.iter_mut() {
            *o = c;
        }
    }
    fn fill_with_fcolor(&self, _x: i64, _y: i64, channels: usize, out: &mut [Fcolor]) {
        let c = adapt_fill_fcolor(&self.fcolor, channels);
        for o in out.iter_mut() {
            *o = c;
        }
    }
    fn combiner(&self) -> Option<&dyn Combiner> {
        self.combine.as_ref().map(|c| c as &dyn Combiner)
    }
}

/// Built in 8x8 hatch patterns
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Hatch {
    Check1x1,
    Check2x2,
    Check4x4,
    VLine1,
    VLine2,
    HLine1,
    HLine2,
    Slash1,
    Slosh1,
    Cross1,
    Dots1,
    Dots4,
}

impl Hatch {
    /// Pattern rows, most significant bit is the leftmost pixel
    pub fn pattern(self) -> [u8; 8] {
        match self {
            Hatch::Check1x1 => [0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55],
            Hatch::Check2x2 => [0xCC, 0xCC, 0x33, 0x33, 0xCC, 0xCC, 0x33, 0x33],
            Hatch::Check4x4 => [0xF0, 0xF0, 0xF0, 0xF0, 0x0F, 0x0F, 0x0F, 0x0F],
            Hatch::VLine1 => [0x10; 8],
            Hatch::VLine2 => [0x30; 8],
            Hatch::HLine1 => [0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00],
            Hatch::HLine2 => [0x00, 0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00, 0x00],
            Hatch::Slash1 => [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80],
            Hatch::Slosh1 => [0x80, 0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x01],
            Hatch::Cross1 => [0x10, 0x10, 0x10, 0xFF, 0x10, 0x10, 0x10, 0x10],
            Hatch::Dots1 => [0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
            Hatch::Dots4 => [0x88, 0x00, 0x00, 0x00, 0x88, 0x00, 0x00, 0x00],
        }
    }
}

/// Two color 8x8 pattern fill
#[derive(Debug, Clone)]
pub struct HatchFill {
    fg: Color,
    bg: Color,
    pattern: [u8; 8],
    dx: i64,
    dy: i64,
    combine: Option<Combine>,
}

impl HatchFill {
    /// Pattern fill with one of the built in patterns
    pub fn new(fg: &Color, bg: &Color, hatch: Hatch) -> Self {
        Self::with_pattern(fg, bg, hatch.pattern())
    }
    /// Pattern fill with custom pattern rows
    pub fn with_pattern(fg: &Color, bg: &Color, pattern: [u8; 8]) -> Self {
        Self { fg: *fg, bg: *bg, pattern, dx: 0, dy: 0, combine: None }
    }
    /// Shift the pattern origin, offsets are taken modulo 8
    pub fn offset(mut self, dx: i64, dy: i64) -> Self {
        self.dx = dx & 7;
        self.dy = dy & 7;
        self
    }
    /// Set blend mode
    pub fn combine(mut self, combine: Combine) -> Self {
        self.combine = Some(combine);
        self
    }
    /// Is the pattern bit for pixel (`x`,`y`) set
    pub fn is_fg(&self, x: i64, y: i64) -> bool {
        let row = self.pattern[((y + self.dy) & 7) as usize];
        row & (0x80 >> ((x + self.dx) & 7)) != 0
    }
}

impl Fill for HatchFill {
    fn fill_with_color(&self, x: i64, y: i64, channels: usize, out: &mut [Color]) {
        let fg = adapt_fill_color(&self.fg, channels);
        let bg = adapt_fill_color(&self.bg, channels);
        for (i, o) in out.iter_mut().enumerate() {
            *o = if self.is_fg(x + i as i64, y) { fg } else { bg };
        }
    }
    fn combiner(&self) -> Option<&dyn Combiner> {
        self.combine.as_ref().map(|c| c as &dyn Combiner)
    }
}

/// Linear gradient between two points
///
/// Pixel centers are projected onto the segment from (`x1`,`y1`) to
/// (`x2`,`y2`); positions before the start take the start color, after
/// the end the end color.
#[derive(Debug, Clone)]
pub struct GradientFill {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    start: Fcolor,
    end: Fcolor,
    combine: Option<Combine>,
}

impl GradientFill {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, start: &Fcolor, end: &Fcolor) -> Self {
        Self { x1, y1, x2, y2, start: *start, end: *end, combine: None }
    }
    /// Set blend mode
    pub fn combine(mut self, combine: Combine) -> Self {
        self.combine = Some(combine);
        self
    }
    /// Gradient parameter in [0,1] at pixel (`x`,`y`)
    pub fn position(&self, x: i64, y: i64) -> f64 {
        let (dx, dy) = (self.x2 - self.x1, self.y2 - self.y1);
        let len2 = dx * dx + dy * dy;
        if len2 == 0.0 {
            return 0.0;
        }
        let px = x as f64 + 0.5 - self.x1;
        let py = y as f64 + 0.5 - self.y1;
        ((px * dx + py * dy) / len2).max(0.0).min(1.0)
    }
}

impl Fill for GradientFill {
    fn fill_with_color(&self, x: i64, y: i64, channels: usize, out: &mut [Color]) {
        let mut work = vec![Fcolor::default(); out.len()];
        self.fill_with_fcolor(x, y, channels, &mut work);
        for (o, c) in out.iter_mut().zip(work.into_iter()) {
            *o = Color::from(c);
        }
    }
    fn fill_with_fcolor(&self, x: i64, y: i64, channels: usize, out: &mut [Fcolor]) {
        for (i, o) in out.iter_mut().enumerate() {
            let t = self.position(x + i as i64, y);
            let mut c = Fcolor::default();
            for ch in 0..4 {
                c.channel[ch] = self.start.channel[ch] * (1.0 - t) + self.end.channel[ch] * t;
            }
            *o = adapt_fill_fcolor(&c, channels);
        }
    }
    fn combiner(&self) -> Option<&dyn Combiner> {
        self.combine.as_ref().map(|c| c as &dyn Combiner)
    }
}
