use image::RgbaImage;

use crate::error::{VitrineError, VitrineResult};

/// Separable clamp-to-edge Gaussian blur over a straight RGBA8 buffer.
///
/// `radius` is the kernel half-width; `sigma` defaults to `radius / 2` when
/// not supplied. Radius 0 returns the input unchanged.
pub fn blur_rgba8(
    src: &[u8],
    width: u32,
    height: u32,
    radius: u32,
    sigma: Option<f32>,
) -> VitrineResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| VitrineError::validation("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(VitrineError::validation(
            "blur_rgba8 expects src matching width*height*4",
        ));
    }
    if radius == 0 || width == 0 || height == 0 {
        return Ok(src.to_vec());
    }

    let sigma = sigma.unwrap_or(radius as f32 / 2.0);
    let kernel = gaussian_kernel(radius, sigma)?;

    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];
    axis_pass(src, &mut tmp, width, height, &kernel, Axis::X);
    axis_pass(&tmp, &mut out, width, height, &kernel, Axis::Y);
    Ok(out)
}

/// Blur an image in place with the default radius-derived sigma.
pub fn blur_image(img: &RgbaImage, radius: u32) -> VitrineResult<RgbaImage> {
    let (w, h) = img.dimensions();
    let blurred = blur_rgba8(img.as_raw(), w, h, radius, None)?;
    RgbaImage::from_raw(w, h, blurred)
        .ok_or_else(|| VitrineError::validation("blurred buffer has wrong length"))
}

fn gaussian_kernel(radius: u32, sigma: f32) -> VitrineResult<Vec<f32>> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(VitrineError::validation("blur sigma must be > 0"));
    }

    let r = radius as i32;
    let denom = 2.0 * f64::from(sigma) * f64::from(sigma);
    let weights: Vec<f64> = (-r..=r)
        .map(|i| {
            let x = f64::from(i);
            (-x * x / denom).exp()
        })
        .collect();
    let sum: f64 = weights.iter().sum();
    if sum <= 0.0 {
        return Err(VitrineError::validation("gaussian kernel sum is zero"));
    }

    Ok(weights.into_iter().map(|w| (w / sum) as f32).collect())
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

fn axis_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, kernel: &[f32], axis: Axis) {
    let radius = (kernel.len() / 2) as i32;
    let w = width as i32;
    let h = height as i32;
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0.0f32; 4];
            for (ki, &kw) in kernel.iter().enumerate() {
                let d = ki as i32 - radius;
                let (sx, sy) = match axis {
                    Axis::X => ((x + d).clamp(0, w - 1), y),
                    Axis::Y => (x, (y + d).clamp(0, h - 1)),
                };
                let idx = ((sy * w + sx) as usize) * 4;
                for c in 0..4 {
                    acc[c] += kw * f32::from(src[idx + c]);
                }
            }
            let out_idx = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out_idx + c] = (acc[c] + 0.5).clamp(0.0, 255.0) as u8;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_0_is_identity() {
        let src = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
        let out = blur_rgba8(&src, 1, 2, 0, None).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn constant_image_is_unchanged() {
        let (w, h) = (4u32, 3u32);
        let px = [10u8, 20, 30, 255];
        let src = px.repeat((w * h) as usize);
        let out = blur_rgba8(&src, w, h, 3, None).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn energy_spreads_from_single_pixel() {
        let (w, h) = (5u32, 5u32);
        let mut src = vec![0u8; (w * h * 4) as usize];
        let center = ((2 * w + 2) * 4) as usize;
        src[center..center + 4].copy_from_slice(&[255, 255, 255, 255]);

        let out = blur_rgba8(&src, w, h, 2, Some(1.2)).unwrap();

        let nonzero = out.chunks_exact(4).filter(|px| px[3] != 0).count();
        assert!(nonzero > 1);

        let sum_a: u32 = out.chunks_exact(4).map(|px| u32::from(px[3])).sum();
        assert!((sum_a as i32 - 255).abs() <= 8);
    }

    #[test]
    fn wrong_buffer_length_is_rejected() {
        let src = vec![0u8; 7];
        assert!(blur_rgba8(&src, 2, 2, 1, None).is_err());
    }

    #[test]
    fn bad_sigma_is_rejected() {
        let src = vec![0u8; 16];
        assert!(blur_rgba8(&src, 2, 2, 1, Some(0.0)).is_err());
        assert!(blur_rgba8(&src, 2, 2, 1, Some(f32::NAN)).is_err());
    }

    #[test]
    fn image_wrapper_keeps_dimensions() {
        let img = RgbaImage::from_pixel(6, 4, image::Rgba([40, 50, 60, 255]));
        let out = blur_image(&img, 5).unwrap();
        assert_eq!(out.dimensions(), (6, 4));
        assert_eq!(out.get_pixel(3, 2).0, [40, 50, 60, 255]);
    }
}
