//! Colors
//!
//! Channels are positional: a gray image reads channel 0, a gray+alpha
//! image reads channels 0 and 1, RGB reads 0..3 and RGBA 0..4.

/// Convert an f64 [0,1] sample to a u8 [0,255] sample
pub fn cu8(v: f64) -> u8 {
    (v * 255.0 + 0.5) as u8
}

/// Convert a u8 [0,255] sample to an f64 [0,1] sample
pub fn cf64(v: u8) -> f64 {
    f64::from(v) / 255.0
}

/// Luminance of an RGB triple
pub fn rgb_to_gray(r: f64, g: f64, b: f64) -> f64 {
    r * 0.222 + g * 0.707 + b * 0.071
}

/// Color with up to four 8-bit channels
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    pub channel: [u8; 4],
}

impl Color {
    /// Create new color
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { channel: [r, g, b, a] }
    }
    /// Create new opaque color
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }
    /// Opaque gray laid out as (gray, alpha), for direct writes to 1 and
    /// 2 channel images
    pub fn gray(g: u8) -> Self {
        Self::rgba(g, 255, 0, 0)
    }
    /// White Color (255,255,255,255)
    pub fn white() -> Self {
        Self::rgb(255, 255, 255)
    }
    /// Black Color (0,0,0,255)
    pub fn black() -> Self {
        Self::rgb(0, 0, 0)
    }
    /// Compare the first `channels` samples
    pub fn eq_channels(&self, other: &Color, channels: usize) -> bool {
        self.channel[..channels] == other.channel[..channels]
    }
}

impl From<Fcolor> for Color {
    fn from(c: Fcolor) -> Color {
        let mut out = Color::default();
        for (o, &v) in out.channel.iter_mut().zip(c.channel.iter()) {
            *o = cu8(v.max(0.0).min(1.0));
        }
        out
    }
}

/// Color with up to four f64 channels in [0,1]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Fcolor {
    pub channel: [f64; 4],
}

impl Fcolor {
    /// Create new color
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Fcolor { channel: [r, g, b, a] }
    }
    /// Create new opaque color
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, 1.0)
    }
}

impl From<Color> for Fcolor {
    fn from(c: Color) -> Fcolor {
        let mut out = Fcolor::default();
        for (o, &v) in out.channel.iter_mut().zip(c.channel.iter()) {
            *o = cf64(v);
        }
        out
    }
}

/// Convert colors between channel layouts in place
///
/// Dropping alpha composites over black; dropping color keeps the
/// luminance. Adding alpha makes the color opaque.
///
///     use rasterfill::{Color, adapt_colors};
///
///     let mut c = [Color::rgba(200, 100, 0, 255)];
///     adapt_colors(3, 4, &mut c);
///     assert_eq!(&c[0].channel[..3], &[200, 100, 0]);
///
pub fn adapt_colors(out_channels: usize, in_channels: usize, colors: &mut [Color]) {
    if out_channels == in_channels {
        return;
    }
    for c in colors.iter_mut() {
        let ch = &mut c.channel;
        let (r, g, b) = (f64::from(ch[0]), f64::from(ch[1]), f64::from(ch[2]));
        match (in_channels, out_channels) {
            (1, 2) => ch[1] = 255,
            (1, 3) => { ch[1] = ch[0]; ch[2] = ch[0]; }
            (1, 4) => { ch[1] = ch[0]; ch[2] = ch[0]; ch[3] = 255; }
            (2, 1) => ch[0] = (u32::from(ch[0]) * u32::from(ch[1]) / 255) as u8,
            (2, 3) => {
                let v = (u32::from(ch[0]) * u32::from(ch[1]) / 255) as u8;
                *ch = [v, v, v, 0];
            }
            (2, 4) => { let (v, a) = (ch[0], ch[1]); *ch = [v, v, v, a]; }
            (3, 1) => ch[0] = (rgb_to_gray(r, g, b) + 0.5) as u8,
            (3, 2) => { ch[0] = (rgb_to_gray(r, g, b) + 0.5) as u8; ch[1] = 255; }
            (3, 4) => ch[3] = 255,
            (4, 1) => {
                let a = f64::from(ch[3]);
                ch[0] = (rgb_to_gray(r, g, b) * a / 255.0 + 0.5) as u8;
            }
            (4, 2) => { ch[0] = (rgb_to_gray(r, g, b) + 0.5) as u8; ch[1] = ch[3]; }
            (4, 3) => {
                let a = u32::from(ch[3]);
                for v in ch[..3].iter_mut() {
                    *v = (u32::from(*v) * a / 255) as u8;
                }
            }
            _ => {}
        }
    }
}

/// Convert f64 colors between channel layouts in place
///
/// Same conversions as [adapt_colors]
pub fn adapt_fcolors(out_channels: usize, in_channels: usize, colors: &mut [Fcolor]) {
    if out_channels == in_channels {
        return;
    }
    for c in colors.iter_mut() {
        let ch = &mut c.channel;
        match (in_channels, out_channels) {
            (1, 2) => ch[1] = 1.0,
            (1, 3) => { ch[1] = ch[0]; ch[2] = ch[0]; }
            (1, 4) => { ch[1] = ch[0]; ch[2] = ch[0]; ch[3] = 1.0; }
            (2, 1) => ch[0] *= ch[1],
            (2, 3) => { let v = ch[0] * ch[1]; *ch = [v, v, v, 0.0]; }
            (2, 4) => { let (v, a) = (ch[0], ch[1]); *ch = [v, v, v, a]; }
            (3, 1) => ch[0] = rgb_to_gray(ch[0], ch[1], ch[2]),
            (3, 2) => { ch[0] = rgb_to_gray(ch[0], ch[1], ch[2]); ch[1] = 1.0; }
            (3, 4) => ch[3] = 1.0,
            (4, 1) => ch[0] = rgb_to_gray(ch[0], ch[1], ch[2]) * ch[3],
            (4, 2) => { ch[0] = rgb_to_gray(ch[0], ch[1], ch[2]); ch[1] = ch[3]; }
            (4, 3) => {
                let a = ch[3];
                for v in ch[..3].iter_mut() {
                    *v *= a;
                }
            }
            _ => {}
        }
    }
}
