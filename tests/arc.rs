
use rasterfill::{Color, Fcolor, PixelAccess, PixelData, Pixfmt};
use rasterfill::{arc, arc_aa, arc_aa_cfill, arc_cfill, arc_poly, poly_aa};
use rasterfill::{Combine, GradientFill, SolidFill};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn gray(pix: &Pixfmt<u8>, x: i64, y: i64) -> u8 {
    pix.get_pixel(x, y).map(|c| c.channel[0]).unwrap_or(0)
}

#[test]
fn quarter_slice() {
    init();
    let mut pix = Pixfmt::<u8>::new(20, 20, 1);
    arc(&mut pix, 10, 10, 5.0, 0.0, 90.0, &Color::gray(255));
    assert_eq!(gray(&pix, 12, 12), 255);
    assert_eq!(gray(&pix, 10, 10), 255);
    assert_eq!(gray(&pix, 15, 10), 255);
    assert_eq!(gray(&pix, 10, 15), 255);
    assert_eq!(gray(&pix, 8, 8), 0);
    assert_eq!(gray(&pix, 12, 8), 0);
    assert_eq!(gray(&pix, 8, 12), 0);
    assert_eq!(gray(&pix, 15, 15), 0);
}

#[test]
fn slice_wraps_through_zero() {
    init();
    let mut pix = Pixfmt::<u8>::new(20, 20, 1);
    arc(&mut pix, 10, 10, 5.0, 315.0, 45.0, &Color::gray(255));
    assert_eq!(gray(&pix, 13, 10), 255);
    assert_eq!(gray(&pix, 13, 9), 255);
    assert_eq!(gray(&pix, 13, 11), 255);
    assert_eq!(gray(&pix, 7, 10), 0);
    assert_eq!(gray(&pix, 10, 14), 0);
}

#[test]
fn slice_clipped() {
    init();
    let mut pix = Pixfmt::<u8>::new(8, 8, 3);
    arc(&mut pix, 0, 0, 20.0, 0.0, 360.0, &Color::white());
    assert!(pix.pixeldata().iter().all(|&v| v == 255));
}

#[test]
fn fill_matches_color() {
    init();
    let mut a = Pixfmt::<u8>::new(20, 20, 3);
    let mut b = Pixfmt::<u8>::new(20, 20, 3);
    let c = Color::rgb(90, 10, 200);
    arc(&mut a, 9, 9, 7.0, 30.0, 200.0, &c);
    arc_cfill(&mut b, 9, 9, 7.0, 30.0, 200.0, &SolidFill::new(&c));
    assert_eq!(a.pixeldata(), b.pixeldata());
}

#[test]
fn antialiased_slice() {
    init();
    let mut pix = Pixfmt::<u8>::new(20, 20, 1);
    arc_aa(&mut pix, 10.0, 10.0, 5.0, 0.0, 90.0, &Color::white());
    assert_eq!(gray(&pix, 12, 12), 255);
    assert_eq!(gray(&pix, 8, 8), 0);
    assert_eq!(gray(&pix, 9, 12), 0);
    // Pixels on the rim are partially covered
    let rim = gray(&pix, 13, 13);
    assert!(rim > 0 && rim < 255, "rim {}", rim);
}

#[test]
fn antialiased_matches_polygon() {
    init();
    let mut a = Pixfmt::<u8>::new(30, 30, 3);
    let mut b = Pixfmt::<u8>::new(30, 30, 3);
    let c = Color::rgb(200, 40, 40);
    arc_aa(&mut a, 15.0, 15.0, 10.0, 100.0, 10.0, &c);
    poly_aa(&mut b, &arc_poly(15.0, 15.0, 10.0, 100.0, 10.0), &c);
    assert_eq!(a.pixeldata(), b.pixeldata());
    let mut d = Pixfmt::<u8>::new(30, 30, 3);
    arc_aa_cfill(&mut d, 15.0, 15.0, 10.0, 100.0, 10.0, &SolidFill::new(&c));
    assert_eq!(a.pixeldata(), d.pixeldata());
}

#[test]
fn gradient_slice() {
    init();
    let mut pix = Pixfmt::<u8>::new(20, 20, 3);
    pix.clear(&Color::rgb(255, 255, 255));
    let g = GradientFill::new(0.0, 0.0, 20.0, 0.0,
                              &Fcolor::rgb(0.0, 0.0, 0.0), &Fcolor::rgb(0.0, 0.0, 0.0))
        .combine(Combine::Multiply);
    arc_aa_cfill(&mut pix, 10.0, 10.0, 8.0, 0.0, 360.0, &g);
    assert_eq!(pix.get_pixel(10, 10), Some(Color::rgba(0, 0, 0, 0)));
    assert_eq!(pix.get_pixel(0, 0), Some(Color::rgba(255, 255, 255, 0)));
}
