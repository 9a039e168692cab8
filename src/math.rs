use crate::color::{adapt_colors, Color};
use crate::PixelAccess;

/// Clamp an accumulated coverage value to [0,255]
pub fn saturate(v: i32) -> u8 {
    if v > 255 {
        255
    } else if v > 0 {
        v as u8
    } else {
        0
    }
}

/// Composite a straight alpha color onto the pixel at (`x`,`y`)
///
/// `col` is read as RGBA; for 1 and 2 channel images it is first reduced
/// to gray+alpha. Destination alpha (2 and 4 channel images) is combined
/// with standard "over" blending, a fully opaque source replaces the
/// pixel, and a fully transparent source leaves it untouched.
///
/// Returns false when nothing was written.
///
///     use rasterfill::{Pixfmt, PixelAccess, Color, ppix_norm};
///
///     let mut pix = Pixfmt::<u8>::new(1, 1, 3);
///     ppix_norm(&mut pix, 0, 0, &Color::rgba(255, 255, 255, 128));
///     assert_eq!(pix.get_pixel(0, 0), Some(Color::rgba(128, 128, 128, 0)));
///
pub fn ppix_norm<I: PixelAccess + ?Sized>(im: &mut I, x: i64, y: i64, col: &Color) -> bool {
    if col.channel[3] == 0 {
        return false;
    }
    let mut src = match im.get_pixel(x, y) {
        Some(c) => c,
        None => return false,
    };
    match im.channels() {
        1 => {
            let mut work = [*col];
            adapt_colors(2, 4, &mut work);
            let work = work[0].channel;
            let remains = 255 - u32::from(work[1]);
            src.channel[0] = ((u32::from(src.channel[0]) * remains
                               + u32::from(work[0]) * u32::from(work[1])) / 255) as u8;
            im.put_pixel(x, y, &src)
        }
        2 => {
            let mut work = [*col];
            adapt_colors(2, 4, &mut work);
            let work = work[0];
            if work.channel[1] == 255 {
                return im.put_pixel(x, y, &work);
            }
            let (wv, wa) = (u32::from(work.channel[0]), u32::from(work.channel[1]));
            let (sv, sa) = (u32::from(src.channel[0]), u32::from(src.channel[1]));
            let remains = 255 - wa;
            let dest_alpha = wa + remains * sa / 255;
            src.channel[0] = ((wa * wv + remains * sv * sa / 255) / dest_alpha) as u8;
            src.channel[1] = dest_alpha as u8;
            im.put_pixel(x, y, &src)
        }
        3 => {
            let alpha = u32::from(col.channel[3]);
            let remains = 255 - alpha;
            for ch in 0..3 {
                src.channel[ch] = ((u32::from(src.channel[ch]) * remains
                                    + u32::from(col.channel[ch]) * alpha) / 255) as u8;
            }
            im.put_pixel(x, y, &src)
        }
        4 => {
            let alpha = u32::from(col.channel[3]);
            if alpha == 255 {
                return im.put_pixel(x, y, col);
            }
            let remains = 255 - alpha;
            let sa = u32::from(src.channel[3]);
            let dest_alpha = alpha + remains * sa / 255;
            for ch in 0..3 {
                src.channel[ch] = ((alpha * u32::from(col.channel[ch])
                                    + remains * u32::from(src.channel[ch]) * sa / 255)
                                   / dest_alpha) as u8;
            }
            src.channel[3] = dest_alpha as u8;
            im.put_pixel(x, y, &src)
        }
        _ => false,
    }
}
