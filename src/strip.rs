use image::{DynamicImage, RgbaImage};

/// Replace every near-white pixel of `rgba` with a fully transparent one.
///
/// A pixel is near-white only when red, green and blue each exceed
/// `threshold`; two bright channels out of three are not enough. The cutoff
/// is binary, so anti-aliased subject edges keep an opaque fringe. That is
/// accepted behavior, matched to the product-photo sources this feeds on.
pub fn strip_near_white_in_place(rgba: &mut [u8], threshold: u8) {
    debug_assert!(rgba.len().is_multiple_of(4));
    for px in rgba.chunks_exact_mut(4) {
        if px[0] > threshold && px[1] > threshold && px[2] > threshold {
            px.copy_from_slice(&[255, 255, 255, 0]);
        }
    }
}

/// Coerce `img` to RGBA8 and strip its near-white background.
///
/// Pixels below the cutoff pass through byte-identical, decoded alpha
/// included; the pass is idempotent and `threshold == 255` is a no-op.
pub fn strip_near_white(img: &DynamicImage, threshold: u8) -> RgbaImage {
    let mut rgba = img.to_rgba8();
    strip_near_white_in_place(&mut rgba, threshold);
    rgba
}
