#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::wildcard_imports
)]

pub mod core;
mod error;
pub mod output;
mod primitives;
mod ray_intersection;
mod render;

pub use crate::error::{ConfigurationError, Error, Result};
pub use crate::output::PpmFormat;
pub use crate::primitives::{LightFalloff, Plane, Primitive, Sphere};
pub use crate::ray_intersection::{Intersectable, Intersection, Ray};
pub use crate::render::{
    Camera, PixelBuffer, RaytracingCamera, RaytracingScene, RenderOptions, Scene, SceneObject,
};
