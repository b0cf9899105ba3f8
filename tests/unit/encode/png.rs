use super::*;

#[test]
fn unpremultiply_restores_straight_channels() {
    let premul = [128, 64, 0, 128, 0, 0, 0, 0, 10, 20, 30, 255];
    let straight = unpremultiply_rgba8(&premul);
    assert_eq!(&straight[0..4], &[255, 128, 0, 128]);
    assert_eq!(&straight[4..8], &[0, 0, 0, 0]);
    assert_eq!(&straight[8..12], &[10, 20, 30, 255]);
}

#[test]
fn png_keeps_alpha_and_dimensions() {
    let mut frame = FrameRGBA::transparent(3, 2);
    frame.data[0..4].copy_from_slice(&[255, 255, 255, 255]);
    frame.data[4..8].copy_from_slice(&[64, 64, 64, 128]);

    let bytes = PngEncoder.encode(&frame).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");

    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (3, 2));
    assert_eq!(decoded.get_pixel(0, 0).0, [255, 255, 255, 255]);
    assert_eq!(decoded.get_pixel(1, 0).0, [128, 128, 128, 128]);
    assert_eq!(decoded.get_pixel(2, 1).0[3], 0);
}

#[test]
fn mismatched_buffer_is_a_render_error() {
    let frame = FrameRGBA {
        width: 4,
        height: 4,
        data: vec![0; 10],
        premultiplied: true,
    };
    let err = PngEncoder.encode(&frame).unwrap_err();
    assert!(matches!(err, RevealError::Render(_)));
}
