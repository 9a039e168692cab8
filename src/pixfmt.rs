//! Pixel Format
//!
//! In-memory images with 8-bit or double samples, reached by the drawing
//! code only through [PixelAccess].

use std::path::Path;

use crate::buffer::RenderingBuffer;
use crate::color::*;

use crate::PixelAccess;
use crate::PixelData;

/// Storage type of a single channel sample
pub trait Sample: Copy + Default + PartialEq + std::fmt::Debug {
    /// Sample depth in bits
    const BITS: u32;
    fn from_u8(v: u8) -> Self;
    fn to_u8(self) -> u8;
    fn from_f64(v: f64) -> Self;
    fn to_f64(self) -> f64;
}

impl Sample for u8 {
    const BITS: u32 = 8;
    fn from_u8(v: u8) -> Self { v }
    fn to_u8(self) -> u8 { self }
    fn from_f64(v: f64) -> Self { cu8(v.max(0.0).min(1.0)) }
    fn to_f64(self) -> f64 { cf64(self) }
}

impl Sample for f64 {
    const BITS: u32 = 64;
    fn from_u8(v: u8) -> Self { cf64(v) }
    fn to_u8(self) -> u8 { cu8(self.max(0.0).min(1.0)) }
    fn from_f64(v: f64) -> Self { v }
    fn to_f64(self) -> f64 { self }
}

/// Pixel Format Wrapper around raw sample data
///
/// 1 to 4 channels: gray, gray+alpha, RGB or RGBA
#[derive(Debug, Clone)]
pub struct Pixfmt<T> {
    rbuf: RenderingBuffer<T>,
}

impl<T: Sample> Pixfmt<T> {
    /// Create new image of width * height * channels, all samples zero
    ///
    ///     use rasterfill::{Pixfmt, PixelAccess};
    ///
    ///     let pix = Pixfmt::<f64>::new(4, 3, 3);
    ///     assert_eq!(pix.width(), 4);
    ///     assert_eq!(pix.height(), 3);
    ///     assert_eq!(pix.bits(), 64);
    ///
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        if width == 0 || height == 0 {
            panic!("Cannot create pixfmt with 0 width or height");
        }
        if channels == 0 || channels > 4 {
            panic!("Cannot create pixfmt with {} channels", channels);
        }
        Self { rbuf: RenderingBuffer::new(width, height, channels) }
    }
    /// Set every pixel to `c`
    pub fn clear(&mut self, c: &Color) {
        let n = self.rbuf.channels;
        for px in self.rbuf.data.chunks_mut(n) {
            for (s, &v) in px.iter_mut().zip(c.channel.iter()) {
                *s = T::from_u8(v);
            }
        }
    }
}

impl<T: Sample> PixelAccess for Pixfmt<T> {
    fn width(&self) -> i64 {
        self.rbuf.width as i64
    }
    fn height(&self) -> i64 {
        self.rbuf.height as i64
    }
    fn channels(&self) -> usize {
        self.rbuf.channels
    }
    fn bits(&self) -> u32 {
        T::BITS
    }
    fn get_pixel(&self, x: i64, y: i64) -> Option<Color> {
        let p = self.rbuf.pixel(x, y)?;
        let mut c = Color::default();
        for (o, &s) in c.channel.iter_mut().zip(p.iter()) {
            *o = s.to_u8();
        }
        Some(c)
    }
    fn put_pixel(&mut self, x: i64, y: i64, c: &Color) -> bool {
        match self.rbuf.pixel_mut(x, y) {
            Some(p) => {
                for (s, &v) in p.iter_mut().zip(c.channel.iter()) {
                    *s = T::from_u8(v);
                }
                true
            }
            None => false,
        }
    }
    fn get_fpixel(&self, x: i64, y: i64) -> Option<Fcolor> {
        let p = self.rbuf.pixel(x, y)?;
        let mut c = Fcolor::default();
        for (o, &s) in c.channel.iter_mut().zip(p.iter()) {
            *o = s.to_f64();
        }
        Some(c)
    }
    fn put_fpixel(&mut self, x: i64, y: i64, c: &Fcolor) -> bool {
        match self.rbuf.pixel_mut(x, y) {
            Some(p) => {
                for (s, &v) in p.iter_mut().zip(c.channel.iter()) {
                    *s = T::from_f64(v);
                }
                true
            }
            None => false,
        }
    }
}

impl Pixfmt<u8> {
    /// Write image to a file, format chosen by the file extension
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<(), std::io::Error> {
        let b = &self.rbuf;
        crate::ppm::write_file(&b.data, b.width, b.height, b.channels, filename)
    }
}

/// Access Pixeldata from a Pixfmt<u8>
impl PixelData for Pixfmt<u8> {
    fn pixeldata(&self) -> &[u8] {
        &self.rbuf.data
    }
}

#[cfg(test)]
mod tests {
    use crate::{Color, Fcolor, PixelAccess, PixelData, Pixfmt};

    #[test]
    fn pixfmt_test() {
        let mut p = Pixfmt::<u8>::new(10, 10, 3);
        assert_eq!(p.pixeldata().len(), 300);

        assert!(p.put_pixel(0, 0, &Color::rgb(1, 2, 3)));
        assert_eq!(p.get_pixel(0, 0), Some(Color::rgba(1, 2, 3, 0)));
        assert!(!p.put_pixel(10, 0, &Color::black()));
        assert!(!p.put_pixel(0, -1, &Color::black()));
        assert_eq!(p.get_pixel(-1, 0), None);

        p.clear(&Color::white());
        assert!(p.pixeldata().iter().all(|&v| v == 255));
    }

    #[test]
    fn rows() {
        let mut p = Pixfmt::<u8>::new(4, 2, 1);
        let row = [Color::gray(10), Color::gray(20), Color::gray(30)];
        assert_eq!(p.put_row(2, 5, 1, &row), 2);
        let mut out = [Color::default(); 4];
        assert_eq!(p.get_row(0, 4, 1, &mut out), 4);
        assert_eq!(out[2].channel[0], 10);
        assert_eq!(out[3].channel[0], 20);
        assert_eq!(p.get_row(0, 4, 2, &mut out), 0);
        assert_eq!(p.get_row(-1, 4, 0, &mut out), 0);
    }

    #[test]
    fn double_samples() {
        let mut p = Pixfmt::<f64>::new(2, 1, 4);
        assert!(p.put_fpixel(0, 0, &Fcolor::rgba(0.25, 0.5, 1.0, 1.0)));
        assert_eq!(p.get_fpixel(0, 0), Some(Fcolor::rgba(0.25, 0.5, 1.0, 1.0)));
        assert_eq!(p.get_pixel(0, 0), Some(Color::rgba(64, 128, 255, 255)));
        assert!(p.put_pixel(1, 0, &Color::rgba(255, 0, 0, 255)));
        assert_eq!(p.get_fpixel(1, 0), Some(Fcolor::rgba(1.0, 0.0, 0.0, 1.0)));
    }
}
