//! Render compositor
//!
//! The single place where span coverage and a [Fill] become pixel writes.

use crate::color::*;
use crate::Fill;
use crate::PixelAccess;

use log::trace;

/// Number of channels a fill generates for an image of `channels`
///
/// Gray and RGB images get an extra alpha channel
pub fn fill_channels(channels: usize) -> usize {
    if channels == 1 || channels == 3 {
        channels + 1
    } else {
        channels
    }
}

/// Compositor writing fill spans into an image
///
/// Owns scratch rows for one drawing call. 8-bit rows are used when
/// the image has 8 or fewer bits per sample, double rows otherwise.
///
///     use rasterfill::{Pixfmt, PixelAccess, Color, SolidFill, Render};
///
///     let mut pix = Pixfmt::<u8>::new(3, 1, 1);
///     {
///         let mut r = Render::new(&mut pix, 3);
///         let fill = SolidFill::new(&Color::white());
///         r.fill_span(0, 0, 3, Some(&[0, 128, 255]), &fill);
///     }
///     let row : Vec<u8> = (0..3).filter_map(|x| pix.get_pixel(x, 0))
///         .map(|c| c.channel[0]).collect();
///     assert_eq!(row, vec![0, 128, 255]);
///
pub struct Render<'a, I: PixelAccess + ?Sized> {
    im: &'a mut I,
    line: Vec<Color>,
    fill_line: Vec<Color>,
    fline: Vec<Fcolor>,
    fill_fline: Vec<Fcolor>,
}

impl<'a, I: PixelAccess + ?Sized> Render<'a, I> {
    /// Compositor for spans up to `max_width` pixels wide
    pub fn new(im: &'a mut I, max_width: usize) -> Self {
        let mut r = Render {
            im,
            line: vec![],
            fill_line: vec![],
            fline: vec![],
            fill_fline: vec![],
        };
        r.reserve(max_width);
        r
    }
    fn reserve(&mut self, width: usize) {
        if self.im.bits() <= 8 {
            if self.line.len() < width {
                self.line.resize(width, Color::default());
                self.fill_line.resize(width, Color::default());
            }
        } else if self.fline.len() < width {
            self.fline.resize(width, Fcolor::default());
            self.fill_fline.resize(width, Fcolor::default());
        }
    }
    /// Composite `width` pixels of `fill` starting at (`x`,`y`)
    ///
    /// `cover` holds one coverage value per pixel, None is full coverage.
    /// The span is clipped to the image and zero coverage at either end
    /// is skipped. If the fill has a [Combiner](crate::Combiner) the
    /// coverage scales the fill alpha and the combiner does the blending.
    pub fn fill_span<F: Fill + ?Sized>(&mut self, x: i64, y: i64, width: usize,
                                       cover: Option<&[u8]>, fill: &F) {
        if y < 0 || y >= self.im.height() {
            return;
        }
        let mut x = x;
        let mut width = width as i64;
        let mut cover = cover;
        if let Some(c) = cover {
            width = width.min(c.len() as i64);
        }
        if x < 0 {
            width += x;
            if width <= 0 {
                return;
            }
            cover = cover.map(|c| &c[(-x) as usize..]);
            x = 0;
        }
        if x + width > self.im.width() {
            width = self.im.width() - x;
        }
        if width <= 0 {
            return;
        }
        if let Some(c) = cover {
            let mut c = &c[..width as usize];
            while let Some((&0, rest)) = c.split_first() {
                c = rest;
                x += 1;
            }
            while let Some((&0, rest)) = c.split_last() {
                c = rest;
            }
            if c.is_empty() {
                return;
            }
            width = c.len() as i64;
            cover = Some(c);
        }
        trace!("fill_span: x {} y {} width {}", x, y, width);
        let n = width as usize;
        self.reserve(n);
        if self.im.bits() <= 8 {
            self.fill_span_8(x, y, n, cover, fill);
        } else {
            self.fill_span_double(x, y, n, cover, fill);
        }
    }

    fn fill_span_8<F: Fill + ?Sized>(&mut self, x: i64, y: i64, n: usize,
                                     cover: Option<&[u8]>, fill: &F) {
        let ch = self.im.channels();
        let fc = fill_channels(ch);
        let x1 = x + n as i64;
        let fill_line = &mut self.fill_line[..n];
        let line = &mut self.line[..n];
        fill.fill_with_color(x, y, fc, fill_line);
        if let Some(comb) = fill.combiner() {
            if let Some(cover) = cover {
                for (s, &cv) in fill_line.iter_mut().zip(cover.iter()) {
                    if cv != 255 {
                        let a = &mut s.channel[fc - 1];
                        *a = (u32::from(*a) * u32::from(cv) / 255) as u8;
                    }
                }
            }
            let got = self.im.get_row(x, x1, y, line);
            comb.combine(&mut line[..got], &fill_line[..got], ch);
            self.im.put_row(x, x + got as i64, y, &line[..got]);
        } else if let Some(cover) = cover {
            let got = self.im.get_row(x, x1, y, line);
            for ((d, s), &cv) in line[..got].iter_mut().zip(fill_line.iter()).zip(cover.iter()) {
                if cv == 255 {
                    *d = *s;
                } else if cv != 0 {
                    let cv = u32::from(cv);
                    for k in 0..ch {
                        d.channel[k] = ((u32::from(d.channel[k]) * (255 - cv)
                                         + u32::from(s.channel[k]) * cv) / 255) as u8;
                    }
                }
            }
            self.im.put_row(x, x + got as i64, y, &line[..got]);
        } else {
            self.im.put_row(x, x1, y, fill_line);
        }
    }

    fn fill_span_double<F: Fill + ?Sized>(&mut self, x: i64, y: i64, n: usize,
                                          cover: Option<&[u8]>, fill: &F) {
        let ch = self.im.channels();
        let fc = fill_channels(ch);
        let x1 = x + n as i64;
        let fill_line = &mut self.fill_fline[..n];
        let line = &mut self.fline[..n];
        fill.fill_with_fcolor(x, y, fc, fill_line);
        if let Some(comb) = fill.combiner() {
            if let Some(cover) = cover {
                for (s, &cv) in fill_line.iter_mut().zip(cover.iter()) {
                    if cv != 255 {
                        s.channel[fc - 1] *= f64::from(cv) / 255.0;
                    }
                }
            }
            let got = self.im.get_frow(x, x1, y, line);
            comb.combinef(&mut line[..got], &fill_line[..got], ch);
            self.im.put_frow(x, x + got as i64, y, &line[..got]);
        } else if let Some(cover) = cover {
            let got = self.im.get_frow(x, x1, y, line);
            for ((d, s), &cv) in line[..got].iter_mut().zip(fill_line.iter()).zip(cover.iter()) {
                if cv == 255 {
                    *d = *s;
                } else if cv != 0 {
                    let t = f64::from(cv) / 255.0;
                    for k in 0..ch {
                        let v = d.channel[k] * (1.0 - t) + s.channel[k] * t;
                        d.channel[k] = v.max(0.0).min(1.0);
                    }
                }
            }
            self.im.put_frow(x, x + got as i64, y, &line[..got]);
        } else {
            self.im.put_frow(x, x1, y, fill_line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Combine, Pixfmt, SolidFill};

    fn row(pix: &Pixfmt<u8>, y: i64) -> Vec<u8> {
        (0..pix.width()).filter_map(|x| pix.get_pixel(x, y)).map(|c| c.channel[0]).collect()
    }

    #[test]
    fn channel_counts() {
        assert_eq!(fill_channels(1), 2);
        assert_eq!(fill_channels(2), 2);
        assert_eq!(fill_channels(3), 4);
        assert_eq!(fill_channels(4), 4);
    }

    #[test]
    fn clipped_span() {
        let mut pix = Pixfmt::<u8>::new(4, 2, 1);
        let fill = SolidFill::new(&Color::white());
        {
            let mut r = Render::new(&mut pix, 2);
            r.fill_span(-2, 0, 4, Some(&[255, 255, 100, 200]), &fill);
            r.fill_span(3, 1, 5, None, &fill);
            r.fill_span(0, 2, 4, None, &fill);
            r.fill_span(-5, 1, 3, None, &fill);
        }
        assert_eq!(row(&pix, 0), vec![100, 200, 0, 0]);
        assert_eq!(row(&pix, 1), vec![0, 0, 0, 255]);
    }

    #[test]
    fn combine_scales_alpha() {
        let mut pix = Pixfmt::<u8>::new(2, 1, 3);
        pix.clear(&Color::black());
        let fill = SolidFill::with_combine(&Color::rgb(255, 0, 0), Combine::Normal);
        Render::new(&mut pix, 2).fill_span(0, 0, 2, Some(&[128, 255]), &fill);
        assert_eq!(pix.get_pixel(0, 0), Some(Color::rgba(128, 0, 0, 0)));
        assert_eq!(pix.get_pixel(1, 0), Some(Color::rgba(255, 0, 0, 0)));
    }

    #[test]
    fn double_image() {
        let mut pix = Pixfmt::<f64>::new(3, 1, 3);
        let fill = SolidFill::new(&Color::white());
        Render::new(&mut pix, 3).fill_span(0, 0, 3, Some(&[0, 51, 255]), &fill);
        assert_eq!(pix.get_fpixel(0, 0), Some(Fcolor::rgba(0.0, 0.0, 0.0, 0.0)));
        let c = pix.get_fpixel(1, 0).map(|c| c.channel[1]).unwrap_or(0.0);
        assert!((c - 0.2).abs() < 1e-9);
        assert_eq!(pix.get_fpixel(2, 0), Some(Fcolor::rgba(1.0, 1.0, 1.0, 0.0)));
    }
}
