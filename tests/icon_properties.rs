use std::fs;
use std::path::PathBuf;

use image::RgbaImage;
use noticon::{Color, IconSpec};

const BACKGROUND: [u8; 4] = [0x60, 0x96, 0xFD, 0xFF];

/// Spec that forces the built-in fallback font, making the render
/// deterministic on machines with or without system fonts.
fn fallback_spec() -> IconSpec {
    IconSpec {
        font_path: PathBuf::from("/nonexistent/font/path.ttf"),
        ..Default::default()
    }
}

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("noticon-{}-{}", tag, std::process::id()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn decode(png: &[u8]) -> RgbaImage {
    image::load_from_memory_with_format(png, image::ImageFormat::Png)
        .expect("decode PNG")
        .to_rgba8()
}

fn assert_background_corners(img: &RgbaImage) {
    let (w, h) = (img.width(), img.height());
    for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
        assert_eq!(img.get_pixel(x, y).0, BACKGROUND, "corner ({}, {})", x, y);
    }
}

fn assert_glyph_in_central_region(img: &RgbaImage) {
    let mut inked = false;
    for y in 32..64 {
        for x in 32..64 {
            if img.get_pixel(x, y).0 != BACKGROUND {
                inked = true;
            }
        }
    }
    assert!(inked, "no glyph pixel found in the central region");
}

#[test]
fn render_twice_is_byte_identical() {
    let spec = fallback_spec();
    let first = noticon::generate(&spec).expect("render");
    let second = noticon::generate(&spec).expect("render");
    assert_eq!(first.png_data, second.png_data);
}

#[test]
fn default_spec_renders_expected_dimensions_and_colors() {
    // Uses whichever font the machine provides; the properties hold with
    // the system font and with the fallback alike.
    let icon = noticon::generate(&IconSpec::default()).expect("render");
    assert_eq!((icon.width, icon.height), (96, 96));

    let img = decode(&icon.png_data);
    assert_eq!((img.width(), img.height()), (96, 96));
    assert_background_corners(&img);
    assert_glyph_in_central_region(&img);
}

#[test]
fn missing_font_still_produces_a_complete_icon() {
    let icon = noticon::generate(&fallback_spec()).expect("fallback render");
    let img = decode(&icon.png_data);
    assert_eq!((img.width(), img.height()), (96, 96));
    assert_background_corners(&img);
    assert_glyph_in_central_region(&img);
    // The fallback glyph covers the exact canvas center
    assert_ne!(img.get_pixel(48, 48).0, BACKGROUND);
}

#[test]
fn custom_palette_and_glyph_flow_through() {
    let spec = IconSpec {
        background: Color::rgb(0x10, 0x20, 0x30),
        glyph: '7',
        glyph_color: Color::rgb(0xFF, 0x00, 0x00),
        ..fallback_spec()
    };
    let img = decode(&noticon::generate(&spec).expect("render").png_data);
    assert_eq!(img.get_pixel(0, 0).0, [0x10, 0x20, 0x30, 0xFF]);
    let red_inked = img.pixels().any(|p| p.0 == [0xFF, 0x00, 0x00, 0xFF]);
    assert!(red_inked, "glyph fill color not found on canvas");
}

#[test]
fn write_is_idempotent_and_overwrites() {
    let dir = temp_dir("write");
    let out = dir.join("notification-icon.png");

    // Pre-existing junk is overwritten unconditionally
    fs::write(&out, b"stale contents").expect("seed output file");

    let spec = IconSpec {
        output_path: out.clone(),
        ..fallback_spec()
    };
    noticon::write_icon(&spec).expect("first write");
    let first = fs::read(&out).expect("read output");

    noticon::write_icon(&spec).expect("second write");
    let second = fs::read(&out).expect("read output");

    assert_eq!(first, second);
    let img = decode(&first);
    assert_eq!((img.width(), img.height()), (96, 96));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_output_directory_is_fatal_and_not_created() {
    let dir = temp_dir("nodir");
    let missing = dir.join("does-not-exist");
    let spec = IconSpec {
        output_path: missing.join("notification-icon.png"),
        ..fallback_spec()
    };

    let err = noticon::write_icon(&spec).unwrap_err();
    assert!(matches!(err, noticon::Error::Io(_)));
    assert!(!missing.exists(), "output directory must not be created");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn glyph_missing_from_every_font_is_an_error() {
    let spec = IconSpec {
        glyph: '∑',
        ..fallback_spec()
    };
    let err = noticon::generate(&spec).unwrap_err();
    assert!(matches!(err, noticon::Error::MissingGlyph('∑')));
}
