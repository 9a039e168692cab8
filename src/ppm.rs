//! Reading and writing of image files
//!
//! Used to inspect rendered images and to compare them against reference
//! files; the file format follows the file extension (png, ppm, pgm).
//!
use std::path::Path;

use image::ColorType;

/// Read an image file as 8-bit RGB
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize),image::ImageError> {
    let img = image::open(filename)?.to_rgb();
    let (w, h) = img.dimensions();
    let buf = img.into_raw();
    Ok((buf, w as usize, h as usize))
}

fn color_type(channels: usize) -> Result<ColorType, std::io::Error> {
    match channels {
        1 => Ok(ColorType::Gray(8)),
        2 => Ok(ColorType::GrayA(8)),
        3 => Ok(ColorType::RGB(8)),
        4 => Ok(ColorType::RGBA(8)),
        _ => Err(std::io::Error::new(std::io::ErrorKind::InvalidInput,
                                     format!("cannot write image with {} channels", channels))),
    }
}

/// Write 8-bit samples of `channels` per pixel to an image file
pub fn write_file<P: AsRef<Path>>(buf: &[u8], width: usize, height: usize, channels: usize,
                                  filename: P) -> Result<(), std::io::Error> {
    let ct = color_type(channels)?;
    image::save_buffer(filename, buf, width as u32, height as u32, ct)
}

/// Compare two image files pixel by pixel
///
/// Differences are logged at debug level
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool,image::ImageError> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        return Ok(false);
    }
    if d1.len() != d2.len() {
        log::debug!("img_diff: files not equal length");
        return Ok(false);
    }
    let mut flag = true;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            log::debug!("img_diff: {} [{},{},{}]: {} {}", i, (i/3)%w1, (i/3)/w1, i%3, v1, v2);
            flag = false;
        }
    }
    Ok(flag)
}
