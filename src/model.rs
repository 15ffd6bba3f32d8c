use std::path::PathBuf;

use crate::error::{VitrineError, VitrineResult};

/// Straight (non-premultiplied) RGBA8 color.
pub type Rgba8 = [u8; 4];

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// How the subject is sized relative to the canvas before pasting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SubjectFit {
    /// Target width = floor(canvas_width * scale); height follows the
    /// subject's aspect ratio. The height may exceed the canvas.
    Width,
    /// Fit within (canvas * scale) in both dimensions: size by width first,
    /// refit by height if the derived height overflows.
    Contain,
}

/// Background layer description. `source` pointing at a missing file is a
/// recoverable branch (flat `fill`, no blur), never an error.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct BackdropSpec {
    pub source: Option<PathBuf>,
    /// Gaussian blur half-width in pixels applied to a photo backdrop.
    pub blur_radius: u32,
    /// Flat color used when no photo source is available.
    pub fill: Rgba8,
}

/// One composite run: everything the pipeline needs, passed per invocation.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CompositeSpec {
    pub foreground: PathBuf,
    /// Tried once if `foreground` does not exist.
    pub foreground_fallback: Option<PathBuf>,
    /// Near-white strip threshold; `None` keeps the decoded alpha untouched.
    pub threshold: Option<u8>,
    pub backdrop: BackdropSpec,
    pub canvas: Canvas,
    /// Fraction of the canvas the subject occupies, in (0, 1].
    pub scale: f32,
    pub fit: SubjectFit,
    pub output: PathBuf,
}

impl CompositeSpec {
    pub fn validate(&self) -> VitrineResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(VitrineError::validation("canvas width/height must be > 0"));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 || self.scale > 1.0 {
            return Err(VitrineError::validation("scale must be in (0, 1]"));
        }
        if self.backdrop.blur_radius > 256 {
            return Err(VitrineError::validation(
                "backdrop blur_radius must be <= 256",
            ));
        }
        if self.foreground.as_os_str().is_empty() {
            return Err(VitrineError::validation("foreground path must be non-empty"));
        }
        if self.output.as_os_str().is_empty() {
            return Err(VitrineError::validation("output path must be non-empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> CompositeSpec {
        CompositeSpec {
            foreground: PathBuf::from("in.png"),
            foreground_fallback: None,
            threshold: Some(230),
            backdrop: BackdropSpec {
                source: None,
                blur_radius: 15,
                fill: [245, 240, 230, 255],
            },
            canvas: Canvas {
                width: 800,
                height: 800,
            },
            scale: 0.85,
            fit: SubjectFit::Width,
            output: PathBuf::from("out.png"),
        }
    }

    #[test]
    fn valid_spec_passes() {
        spec().validate().unwrap();
    }

    #[test]
    fn zero_canvas_rejected() {
        let mut s = spec();
        s.canvas.width = 0;
        assert!(matches!(s.validate(), Err(VitrineError::Validation(_))));
    }

    #[test]
    fn scale_bounds_enforced() {
        let mut s = spec();
        s.scale = 0.0;
        assert!(s.validate().is_err());
        s.scale = 1.0;
        s.validate().unwrap();
        s.scale = 1.01;
        assert!(s.validate().is_err());
        s.scale = f32::NAN;
        assert!(s.validate().is_err());
    }

    #[test]
    fn oversized_blur_rejected() {
        let mut s = spec();
        s.backdrop.blur_radius = 257;
        assert!(s.validate().is_err());
    }

    #[test]
    fn empty_paths_rejected() {
        let mut s = spec();
        s.foreground = PathBuf::new();
        assert!(s.validate().is_err());

        let mut s = spec();
        s.output = PathBuf::new();
        assert!(s.validate().is_err());
    }
}
