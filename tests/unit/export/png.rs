use std::path::PathBuf;

use super::*;
use crate::foundation::core::Rgba8;

fn out_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_export").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn export_reports_the_file_size_and_roundtrips_pixels() {
    let mut canvas = Canvas::new(8, 4).unwrap();
    canvas.fill_background_gradient(Rgba8::from_hex(0x2196F3), Rgba8::from_hex(0x0D47A1));

    let path = out_dir("roundtrip").join("out.png");
    let _ = std::fs::remove_file(&path);
    let bytes = export_png(&canvas, &path).unwrap();
    assert_eq!(bytes, std::fs::metadata(&path).unwrap().len());
    assert!(bytes > 0);

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (8, 4));
    assert_eq!(img.as_raw().as_slice(), canvas.to_straight_rgba8().as_slice());
}

#[test]
fn transparent_pixels_survive_encoding() {
    let canvas = Canvas::new(3, 3).unwrap();
    let png = encode_png(&canvas).unwrap();
    let img = image::load_from_memory(&png).unwrap().to_rgba8();
    assert!(img.pixels().all(|p| p.0[3] == 0));
}

#[test]
fn unwritable_destination_is_an_io_error_without_side_effects() {
    let canvas = Canvas::new(2, 2).unwrap();
    let dir = out_dir("unwritable");
    let path = dir.join("missing-subdir").join("out.png");

    let err = export_png(&canvas, &path).unwrap_err();
    assert!(err.is_io(), "{err}");
    assert!(!path.exists());
    assert!(!dir.join("missing-subdir").exists());

    // A directory cannot be overwritten by a file either.
    let err = export_png(&canvas, &dir).unwrap_err();
    assert!(matches!(err, ArtError::Io { .. }));
}
