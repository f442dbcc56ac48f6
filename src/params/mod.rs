//! Parameter definitions with units and documented semantics.
//!
//! All tuned constants live here with:
//! - Units (world units, seconds, radians, pixels)
//! - Documented ranges and meanings
//! - Validation before anything is built from them

mod camera;
mod field;
mod overlay;
mod render;

// Re-export all types
pub use camera::FixedCamera;
pub use field::{FieldPhysics, RippleParams, WaveInput, WaveTerm};
pub use overlay::{CopyBlock, CtaKind, CtaRegion, OverlayLayout, ScreenRect};
pub use render::{RecordingConfig, RenderConfig};
