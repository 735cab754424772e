// Host-side tests for image decoding and load bookkeeping.

use gallery_core::constants::MAX_TEXTURE_DIM;
use gallery_core::*;
use std::io::Cursor;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    });
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .expect("encode png");
    buf
}

#[test]
fn decodes_png_into_rgba() {
    let decoded = decode_image("tiny.png", &png_bytes(4, 2)).expect("decodes");
    assert_eq!((decoded.width, decoded.height), (4, 2));
    assert_eq!((decoded.source_width, decoded.source_height), (4, 2));
    assert_eq!(decoded.rgba.len(), 4 * 2 * 4);
    // pixel (1, 1)
    let i = (1 * 4 + 1) * 4;
    assert_eq!(&decoded.rgba[i..i + 4], &[1, 1, 128, 255]);
}

#[test]
fn oversized_images_are_downscaled_but_keep_source_size() {
    let decoded = decode_image("wide.png", &png_bytes(3000, 10)).expect("decodes");
    assert_eq!(decoded.width, MAX_TEXTURE_DIM);
    assert!(decoded.height >= 1 && decoded.height < 10);
    assert_eq!((decoded.source_width, decoded.source_height), (3000, 10));
    assert_eq!(decoded.rgba.len(), (decoded.width * decoded.height * 4) as usize);
}

#[test]
fn garbage_bytes_fail_with_decode_error() {
    let Err(err) = decode_image("broken.jpg", b"definitely not an image") else {
        panic!("garbage decoded as an image");
    };
    assert!(matches!(err, LoadError::Decode { ref filename, .. } if filename == "broken.jpg"));
    assert!(err.to_string().contains("broken.jpg"));
}

#[test]
fn tracker_settles_exactly_once() {
    let mut tracker = LoadTracker::new(3);
    assert!(!tracker.is_settled());
    assert!(!tracker.record(LoadOutcome::Loaded));
    assert!(!tracker.record(LoadOutcome::Failed));
    assert!(tracker.record(LoadOutcome::Loaded));
    assert!(tracker.is_settled());
    assert!(!tracker.record(LoadOutcome::Loaded));
    assert_eq!((tracker.loaded(), tracker.failed()), (2, 1));
}

#[test]
fn tracker_settlement_does_not_depend_on_order() {
    use LoadOutcome::{Failed, Loaded};
    let orders = [
        [Loaded, Loaded, Failed, Loaded],
        [Failed, Loaded, Loaded, Loaded],
        [Loaded, Failed, Failed, Failed],
        [Failed, Failed, Failed, Failed],
    ];
    for order in orders {
        let mut tracker = LoadTracker::new(order.len());
        let fired: Vec<bool> = order.iter().map(|&o| tracker.record(o)).collect();
        assert_eq!(fired, vec![false, false, false, true], "order {:?}", order);
    }
}

#[test]
fn empty_catalog_is_settled_from_the_start() {
    let mut tracker = LoadTracker::new(0);
    assert!(tracker.is_settled());
    assert!(!tracker.record(LoadOutcome::Loaded));
}
