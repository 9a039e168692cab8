
use std::path::PathBuf;

use rasterfill::ppm::{img_diff, read_file, write_file};
use rasterfill::{Color, PixelData, Pixfmt};
use rasterfill::{circle_out, poly_aa};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn tmp(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("rasterfill-{}-{}", std::process::id(), name))
}

#[test]
fn png_round_trip() {
    init();
    let mut pix = Pixfmt::<u8>::new(24, 16, 3);
    pix.clear(&Color::white());
    poly_aa(&mut pix, &[(2.0, 2.0), (20.0, 3.0), (9.0, 14.0)], &Color::rgb(0, 90, 160));
    let a = tmp("round_trip.png");
    pix.to_file(&a).unwrap();

    let (data, w, h) = read_file(&a).unwrap();
    assert_eq!((w, h), (24, 16));
    assert_eq!(&data[..], pix.pixeldata());
    assert!(img_diff(&a, &a).unwrap());

    let mut other = pix.clone();
    circle_out(&mut other, 12, 8, 4, &Color::rgb(255, 0, 0)).unwrap();
    let b = tmp("round_trip_other.png");
    other.to_file(&b).unwrap();
    assert!(!img_diff(&a, &b).unwrap());

    let _ = std::fs::remove_file(&a);
    let _ = std::fs::remove_file(&b);
}

#[test]
fn gray_and_alpha_files() {
    init();
    let mut pix = Pixfmt::<u8>::new(5, 5, 1);
    pix.clear(&Color::gray(200));
    let g = tmp("gray.png");
    pix.to_file(&g).unwrap();
    let (data, _, _) = read_file(&g).unwrap();
    assert!(data.iter().all(|&v| v == 200));

    let pix = Pixfmt::<u8>::new(5, 5, 4);
    let r = tmp("rgba.png");
    assert!(pix.to_file(&r).is_ok());

    let _ = std::fs::remove_file(&g);
    let _ = std::fs::remove_file(&r);
}

#[test]
fn bad_channel_count() {
    init();
    let buf = vec![0u8; 5 * 2 * 2];
    assert!(write_file(&buf, 2, 2, 5, tmp("bad.png")).is_err());
}
