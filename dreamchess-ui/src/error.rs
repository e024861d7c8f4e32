//! Error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::dialog::Dialog;

/// A required asset could not be loaded. The UI cannot run without it.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("could not load texture {path}: {source}")]
    Texture {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("couldn't open font width file {path}: {source}")]
    FontWidths {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("font width file {path} is truncated: {len} of 256 bytes")]
    FontWidthsTruncated { path: PathBuf, len: usize },

    #[error("could not list {path}: {source}")]
    Listing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no {kind} available under {path}")]
    Missing { kind: &'static str, path: PathBuf },
}

/// A dialog stack operation that was refused.
#[derive(Debug, Error)]
pub enum DialogError {
    /// The rejected dialog is handed back to the caller.
    #[error("too many open dialogs")]
    StackFull(Dialog),

    #[error("too many to-be-destroyed dialogs")]
    PendingFull,

    #[error("no open dialogs")]
    Empty,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level error of the UI binary.
#[derive(Debug, Error)]
pub enum UiError {
    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create rendering surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter found")]
    NoAdapter,

    #[error("failed to create GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("window closed before the renderer was ready")]
    WindowClosed,
}
