use std::path::{Path, PathBuf};

use image::{RgbaImage, imageops};

use crate::{
    backdrop, composite_cpu,
    error::{VitrineError, VitrineResult},
    model::{Canvas, CompositeSpec, SubjectFit},
    strip,
};

/// Run one composite: load the foreground, strip its background, build the
/// backdrop, resize, paste centered and write the PNG. Exactly one file is
/// written per run; an existing output is overwritten.
///
/// Returns the output path on success. A foreground missing from both its
/// primary and fallback location is [`VitrineError::MissingInput`], so callers
/// can treat it as a quiet stop rather than a processing failure.
#[tracing::instrument(skip(spec), fields(output = %spec.output.display()))]
pub fn run(spec: &CompositeSpec) -> VitrineResult<PathBuf> {
    spec.validate()?;

    let fg_path = resolve_foreground(spec)?;
    tracing::info!(foreground = %fg_path.display(), "loading foreground");
    let fg = image::open(fg_path)
        .map_err(|e| VitrineError::decode(format!("decode '{}': {e}", fg_path.display())))?;

    let subject = match spec.threshold {
        Some(threshold) => {
            tracing::info!(threshold, "removing near-white background");
            strip::strip_near_white(&fg, threshold)
        }
        None => fg.to_rgba8(),
    };

    let backdrop = backdrop::build(&spec.backdrop, spec.canvas)?;

    let (src_w, src_h) = subject.dimensions();
    let (target_w, target_h) = fit_size(src_w, src_h, spec.canvas, spec.scale, spec.fit)?;
    tracing::info!(target_w, target_h, "resizing subject");
    let resized = imageops::resize(&subject, target_w, target_h, imageops::FilterType::Lanczos3);

    let x = (i64::from(spec.canvas.width) - i64::from(target_w)) / 2;
    let y = (i64::from(spec.canvas.height) - i64::from(target_h)) / 2;

    let mut out = backdrop;
    composite_cpu::paste_over(&mut out, &resized, x, y);

    write_png(&out, &spec.output)?;
    tracing::info!(output = %spec.output.display(), "composite written");
    Ok(spec.output.clone())
}

fn resolve_foreground(spec: &CompositeSpec) -> VitrineResult<&Path> {
    if spec.foreground.exists() {
        return Ok(&spec.foreground);
    }
    if let Some(fallback) = spec.foreground_fallback.as_deref()
        && fallback.exists()
    {
        tracing::warn!(
            missing = %spec.foreground.display(),
            fallback = %fallback.display(),
            "foreground missing, using fallback path"
        );
        return Ok(fallback);
    }
    Err(VitrineError::MissingInput(spec.foreground.clone()))
}

/// Target subject size for the given fit mode. Floor rounding throughout,
/// aspect ratio preserved from the source dimensions.
pub fn fit_size(
    src_w: u32,
    src_h: u32,
    canvas: Canvas,
    scale: f32,
    fit: SubjectFit,
) -> VitrineResult<(u32, u32)> {
    if src_w == 0 || src_h == 0 {
        return Err(VitrineError::validation("subject has zero-sized dimensions"));
    }
    let aspect = f64::from(src_w) / f64::from(src_h);
    let scale = f64::from(scale);

    let mut target_w = (f64::from(canvas.width) * scale) as u32;
    let mut target_h = (f64::from(target_w) / aspect) as u32;

    if matches!(fit, SubjectFit::Contain) && f64::from(target_h) > f64::from(canvas.height) * scale
    {
        target_h = (f64::from(canvas.height) * scale) as u32;
        target_w = (f64::from(target_h) * aspect) as u32;
    }

    if target_w == 0 || target_h == 0 {
        return Err(VitrineError::validation("subject resizes to zero pixels"));
    }
    Ok((target_w, target_h))
}

fn write_png(img: &RgbaImage, path: &Path) -> VitrineResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            VitrineError::write(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }

    image::save_buffer_with_format(
        path,
        img.as_raw(),
        img.width(),
        img.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| VitrineError::write(format!("write png '{}': {e}", path.display())))
}
