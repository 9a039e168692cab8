
use rasterfill::{Color, Error, Fcolor, PixelAccess, PixelData, Pixfmt};
use rasterfill::{box_cfill, box_outline, flood_cfill, flood_cfill_border, flood_fill, flood_fill_border};
use rasterfill::{GradientFill, SolidFill};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn gray(pix: &Pixfmt<u8>, x: i64, y: i64) -> u8 {
    pix.get_pixel(x, y).map(|c| c.channel[0]).unwrap_or(0)
}

#[test]
fn isolated_pixel() {
    init();
    let mut pix = Pixfmt::<u8>::new(5, 5, 1);
    pix.put_pixel(2, 2, &Color::gray(50));
    let r = flood_fill(&mut pix, 2, 2, &Color::gray(9)).unwrap();
    assert_eq!(r.count(), 1);
    assert_eq!(r.bbox(), (2, 2, 2, 2));
    assert_eq!(gray(&pix, 2, 2), 9);
    assert_eq!(gray(&pix, 1, 2), 0);
}

#[test]
fn whole_image() {
    init();
    let mut pix = Pixfmt::<u8>::new(9, 4, 3);
    let r = flood_fill(&mut pix, 8, 3, &Color::rgb(1, 2, 3)).unwrap();
    assert_eq!(r.bbox(), (0, 8, 0, 3));
    assert_eq!(r.count(), 36);
    assert!(pix.pixeldata().chunks(3).all(|p| p == [1, 2, 3]));
}

#[test]
fn u_shape() {
    init();
    let mut pix = Pixfmt::<u8>::new(7, 6, 1);
    for y in 0..=3 {
        pix.put_pixel(3, y, &Color::gray(255));
    }
    let r = flood_fill(&mut pix, 0, 0, &Color::gray(7)).unwrap();
    assert_eq!(r.count(), 38);
    assert_eq!(r.bbox(), (0, 6, 0, 5));
    assert_eq!(gray(&pix, 6, 0), 7);
    assert_eq!(gray(&pix, 3, 2), 255);
    assert_eq!(gray(&pix, 3, 4), 7);
}

#[test]
fn inside_border() {
    init();
    let mut pix = Pixfmt::<u8>::new(8, 8, 1);
    let border = Color::gray(255);
    box_outline(&mut pix, 1, 1, 6, 6, &border);
    pix.put_pixel(4, 4, &Color::gray(30));
    let r = flood_fill_border(&mut pix, 3, 3, &Color::gray(100), &border).unwrap();
    // Pixels of any color other than the border are part of the region
    assert_eq!(r.count(), 16);
    assert_eq!(r.bbox(), (2, 5, 2, 5));
    assert_eq!(gray(&pix, 4, 4), 100);
    assert_eq!(gray(&pix, 1, 1), 255);
    assert_eq!(gray(&pix, 0, 0), 0);

    let mut pix = Pixfmt::<u8>::new(8, 8, 3);
    let border = Color::rgb(255, 0, 0);
    box_outline(&mut pix, 1, 1, 6, 6, &border);
    let r = flood_cfill_border(&mut pix, 0, 0, &SolidFill::new(&Color::rgb(0, 0, 255)), &border)
        .unwrap();
    assert_eq!(r.count(), 28);
    assert_eq!(pix.get_pixel(7, 7), Some(Color::rgba(0, 0, 255, 0)));
    assert_eq!(pix.get_pixel(3, 3), Some(Color::rgba(0, 0, 0, 0)));
}

#[test]
fn seed_out_of_range() {
    init();
    let mut pix = Pixfmt::<u8>::new(5, 5, 1);
    assert_eq!(flood_fill(&mut pix, 5, 0, &Color::gray(1)).err(),
               Some(Error::OutOfRange { x: 5, y: 0 }));
    assert_eq!(flood_cfill(&mut pix, 0, -2, &SolidFill::new(&Color::white())).err(),
               Some(Error::OutOfRange { x: 0, y: -2 }));
    assert!(pix.pixeldata().iter().all(|&v| v == 0));
}

#[test]
fn gradient_matches_box() {
    init();
    let g = GradientFill::new(0.0, 0.0, 6.0, 5.0,
                              &Fcolor::rgb(1.0, 0.0, 0.0), &Fcolor::rgb(0.0, 0.0, 1.0));
    let mut a = Pixfmt::<u8>::new(6, 5, 3);
    let mut b = Pixfmt::<u8>::new(6, 5, 3);
    flood_cfill(&mut a, 2, 2, &g).unwrap();
    box_cfill(&mut b, 0, 0, 5, 4, &g);
    assert_eq!(a.pixeldata(), b.pixeldata());
    assert_ne!(a.get_pixel(0, 0), a.get_pixel(5, 4));
}

#[test]
fn double_samples() {
    init();
    let mut pix = Pixfmt::<f64>::new(4, 4, 4);
    pix.put_pixel(1, 0, &Color::rgba(255, 255, 255, 255));
    pix.put_pixel(1, 1, &Color::rgba(255, 255, 255, 255));
    let r = flood_cfill(&mut pix, 0, 0, &SolidFill::new(&Color::rgba(0, 255, 0, 255))).unwrap();
    assert_eq!(r.count(), 14);
    assert_eq!(pix.get_fpixel(3, 3), Some(Fcolor::rgba(0.0, 1.0, 0.0, 1.0)));
    assert_eq!(pix.get_fpixel(1, 1), Some(Fcolor::rgba(1.0, 1.0, 1.0, 1.0)));
}
