#![forbid(unsafe_code)]

pub mod backdrop;
pub mod blur_cpu;
pub mod composite_cpu;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod presets;
pub mod strip;

pub use error::{VitrineError, VitrineResult};
pub use model::{BackdropSpec, Canvas, CompositeSpec, Rgba8, SubjectFit};
pub use pipeline::run;
