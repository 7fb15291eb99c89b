mod pixel_buffer;
mod raytracing_scene;
mod scene;

use crate::error::ConfigurationError;
use serde::Deserialize;

pub use pixel_buffer::PixelBuffer;
pub use raytracing_scene::{RaytracingCamera, RaytracingScene};
pub use scene::{Scene, SceneObject};

/// View plane of the fixed camera at the origin, one unit down +z.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Camera {
    pub width: f64,
    pub height: f64,
}

impl Camera {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(ConfigurationError::InvalidCameraSize {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Output image size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
        }
    }
}

impl RenderOptions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigurationError::InvalidOutputSize {
                width: self.width,
                height: self.height,
            });
        }

        Ok(())
    }
}
