use anyhow::Context as _;
use image::{RgbaImage, imageops};

use crate::{
    blur_cpu,
    error::VitrineResult,
    model::{BackdropSpec, Canvas},
};

/// Build the canvas-sized background layer.
///
/// A readable photo source is cover-fit scaled, center-cropped to the canvas
/// and Gaussian-blurred. A missing or unset source falls back to the flat
/// fill with no blur; that branch is recoverable, not a failure.
pub fn build(spec: &BackdropSpec, canvas: Canvas) -> VitrineResult<RgbaImage> {
    let Some(source) = spec.source.as_deref().filter(|p| p.exists()) else {
        tracing::info!(fill = ?spec.fill, "no backdrop source, using flat fill");
        return Ok(RgbaImage::from_pixel(
            canvas.width,
            canvas.height,
            image::Rgba(spec.fill),
        ));
    };

    tracing::info!(source = %source.display(), "loading backdrop");
    let bg = image::open(source)
        .with_context(|| format!("decode backdrop '{}'", source.display()))?
        .to_rgba8();

    let (src_w, src_h) = bg.dimensions();
    let (new_w, new_h) = cover_size(src_w, src_h, canvas);
    let scaled = imageops::resize(&bg, new_w, new_h, imageops::FilterType::Lanczos3);

    let left = (new_w - canvas.width) / 2;
    let top = (new_h - canvas.height) / 2;
    let cropped = imageops::crop_imm(&scaled, left, top, canvas.width, canvas.height).to_image();

    blur_cpu::blur_image(&cropped, spec.blur_radius)
}

/// Scale `(src_w, src_h)` preserving aspect ratio so it covers the canvas in
/// both dimensions: the tighter dimension lands exactly on the canvas, the
/// other is equal or larger. Float ratio compare with floor truncation.
pub(crate) fn cover_size(src_w: u32, src_h: u32, canvas: Canvas) -> (u32, u32) {
    let src_ratio = f64::from(src_w) / f64::from(src_h);
    let canvas_ratio = f64::from(canvas.width) / f64::from(canvas.height);

    if src_ratio > canvas_ratio {
        let new_h = canvas.height;
        let new_w = (f64::from(new_h) * src_ratio) as u32;
        (new_w.max(canvas.width), new_h)
    } else {
        let new_w = canvas.width;
        let new_h = (f64::from(new_w) / src_ratio) as u32;
        (new_w, new_h.max(canvas.height))
    }
}
