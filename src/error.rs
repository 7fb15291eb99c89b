use thiserror::Error;

/// Problems with a scene or render request found before any pixel is traced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("scene contains no objects")]
    EmptyScene,
    #[error("scene has no camera")]
    MissingCamera,
    #[error("scene has {0} cameras, expected exactly one")]
    MultipleCameras(usize),
    #[error("invalid camera size {width}x{height}, both dimensions must be positive")]
    InvalidCameraSize { width: f64, height: f64 },
    #[error("invalid output size {width}x{height}, both dimensions must be positive")]
    InvalidOutputSize { width: u32, height: u32 },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("failed to parse scene: {0}")]
    SceneParse(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
