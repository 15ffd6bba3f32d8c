//! The embedded literal configurations for the shipped composites. Paths,
//! thresholds and scales are deliberately literals per preset; the shared
//! logic lives in [`crate::pipeline`].

use std::path::PathBuf;

use crate::model::{BackdropSpec, Canvas, CompositeSpec, SubjectFit};

/// Pound cake on a blurred photo backdrop, 800x800.
pub fn pound_cake() -> CompositeSpec {
    CompositeSpec {
        foreground: PathBuf::from("images/unnamed.jpg"),
        foreground_fallback: Some(PathBuf::from("../uploaded_image_1766467351728_A4.jpg")),
        threshold: Some(230),
        backdrop: BackdropSpec {
            source: Some(PathBuf::from("images/pol.jpg")),
            blur_radius: 15,
            fill: [245, 240, 230, 255],
        },
        canvas: Canvas {
            width: 800,
            height: 800,
        },
        scale: 0.85,
        fit: SubjectFit::Width,
        output: PathBuf::from("images/pound_cake_final.png"),
    }
}

/// Crepe on the same backdrop, zoomed out to show more background.
pub fn crepe() -> CompositeSpec {
    CompositeSpec {
        foreground: PathBuf::from("images/crepe2.png"),
        foreground_fallback: None,
        threshold: Some(240),
        backdrop: BackdropSpec {
            source: Some(PathBuf::from("images/pol.jpg")),
            blur_radius: 10,
            fill: [245, 240, 230, 255],
        },
        canvas: Canvas {
            width: 800,
            height: 800,
        },
        scale: 0.65,
        fit: SubjectFit::Width,
        output: PathBuf::from("images/crepe_refined.png"),
    }
}

/// Re-canvas an already-cut-out subject onto a flat site-background fill,
/// 600x600. No stripping; the input PNG brings its own alpha.
pub fn recanvas() -> CompositeSpec {
    CompositeSpec {
        foreground: PathBuf::from("images/pound_cake_new.png"),
        foreground_fallback: None,
        threshold: None,
        backdrop: BackdropSpec {
            source: None,
            blur_radius: 0,
            // #FDFBF7, the site background light.
            fill: [253, 251, 247, 255],
        },
        canvas: Canvas {
            width: 600,
            height: 600,
        },
        scale: 0.75,
        fit: SubjectFit::Contain,
        output: PathBuf::from("images/pound_cake_final.png"),
    }
}
