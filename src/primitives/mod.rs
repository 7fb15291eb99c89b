mod plane;
mod sphere;

use crate::ray_intersection::{Intersectable, Ray};
use nalgebra::Vector3;

pub use plane::*;
pub use sphere::*;

/// Renderable scene object.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
}

impl Primitive {
    /// Flat color written for pixels that hit this primitive.
    pub fn color(&self) -> &Vector3<f64> {
        match self {
            Primitive::Sphere(sphere) => sphere.color(),
            Primitive::Plane(plane) => plane.color(),
        }
    }
}

impl Intersectable for Primitive {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        match self {
            Primitive::Sphere(sphere) => sphere.intersect(ray),
            Primitive::Plane(plane) => plane.intersect(ray),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}
