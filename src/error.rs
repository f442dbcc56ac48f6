//! Crate-wide error type.

use thiserror::Error;

/// Errors surfaced by configuration, GPU setup, text and frame capture
#[derive(Debug, Error)]
pub enum WavefieldError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter found")]
    NoAdapter,

    #[error("failed to request device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("failed to save frame {frame}: {source}")]
    Capture {
        frame: usize,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to prepare text: {0}")]
    TextPrepare(#[from] glyphon::PrepareError),

    #[error("failed to draw text: {0}")]
    TextRender(#[from] glyphon::RenderError),

    #[error("failed to prepare recording directory: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WavefieldError>;
