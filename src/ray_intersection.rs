use nalgebra::{Point3, Unit, Vector3};

pub trait Intersectable {
    /// Distance along `ray` to the nearest surface in front of its origin.
    fn intersect(&self, ray: &Ray) -> Option<f64>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point3<f64>,
    pub direction: Unit<Vector3<f64>>,
}

impl Ray {
    pub fn new(origin: Point3<f64>, direction: Unit<Vector3<f64>>) -> Self {
        Self { origin, direction }
    }
}

/// Nearest hit found by a scene scan: the index of the primitive in scene
/// order and the distance along the ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub index: usize,
    pub distance: f64,
}

impl Intersection {
    pub fn new(index: usize, distance: f64) -> Self {
        Self { index, distance }
    }
}

pub(crate) fn forward_distance(t: f64) -> Option<f64> {
    if t.is_finite() && t > 0.0 {
        Some(t)
    } else {
        None
    }
}
