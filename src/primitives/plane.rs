use crate::ray_intersection::{forward_distance, Intersectable, Ray};
use nalgebra::{Point3, Vector3};
use serde::Deserialize;

/// Lighting coefficients carried by plane objects. Nothing in the renderer
/// reads them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LightFalloff {
    pub radial_a2: f64,
    pub radial_a1: f64,
    pub radial_a0: f64,
    pub angular_a0: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "PlaneDefinition")]
pub struct Plane {
    pub color: Vector3<f64>,
    pub position: Point3<f64>,
    pub normal: Vector3<f64>,
    pub falloff: LightFalloff,
}

impl Plane {
    pub fn new(position: Point3<f64>, normal: Vector3<f64>, color: Vector3<f64>) -> Self {
        Self {
            color,
            position,
            normal,
            falloff: LightFalloff::default(),
        }
    }

    pub fn color(&self) -> &Vector3<f64> {
        &self.color
    }
}

impl Intersectable for Plane {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        let n_dot_d = ray.direction.dot(&self.normal);
        let t = -self.normal.dot(&(ray.origin - self.position)) / n_dot_d;

        // A ray parallel to the plane gives an infinite or NaN distance
        forward_distance(t)
    }
}

/// Flat on-disk layout of a plane.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlaneDefinition {
    color: Vector3<f64>,
    position: Point3<f64>,
    #[serde(alias = "direction")]
    normal: Vector3<f64>,
    #[serde(default)]
    radial_a2: f64,
    #[serde(default)]
    radial_a1: f64,
    #[serde(default)]
    radial_a0: f64,
    #[serde(default, alias = "angular_ao")]
    angular_a0: f64,
}

impl From<PlaneDefinition> for Plane {
    fn from(definition: PlaneDefinition) -> Self {
        Self {
            color: definition.color,
            position: definition.position,
            normal: definition.normal,
            falloff: LightFalloff {
                radial_a2: definition.radial_a2,
                radial_a1: definition.radial_a1,
                radial_a0: definition.radial_a0,
                angular_a0: definition.angular_a0,
            },
        }
    }
}
