use crate::core::{quadratic, sqr, squared_length};
use crate::ray_intersection::{forward_distance, Intersectable, Ray};
use nalgebra::{Point3, Vector3};
use num_traits::identities::Zero;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Sphere {
    #[serde(alias = "color")]
    pub diffuse_color: Vector3<f64>,
    #[serde(default = "Vector3::zeros")]
    pub specular_color: Vector3<f64>,
    pub position: Point3<f64>,
    pub radius: f64,
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            diffuse_color: Vector3::from([1.0; 3]),
            specular_color: Vector3::zero(),
            position: Point3::origin(),
            radius: 1.0,
        }
    }
}

impl Sphere {
    pub fn new(position: Point3<f64>, radius: f64, diffuse_color: Vector3<f64>) -> Self {
        Self {
            diffuse_color,
            position,
            radius,
            ..Sphere::default()
        }
    }

    pub fn color(&self) -> &Vector3<f64> {
        &self.diffuse_color
    }
}

impl Intersectable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        let hypot = ray.origin - self.position;
        let a = squared_length(&ray.direction);
        let b = 2.0 * ray.direction.dot(&hypot);
        let c = squared_length(&hypot) - sqr(self.radius);

        let (t1, t2) = quadratic(a, b, c)?;

        // Near surface first; a negative root lies behind the ray origin.
        forward_distance(t1).or_else(|| forward_distance(t2))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::normalize;
    use more_asserts::assert_lt;

    const PRECISION: f64 = 1e-9;

    fn ray_from_origin(direction: [f64; 3]) -> Ray {
        Ray::new(Point3::origin(), normalize(&Vector3::from(direction)))
    }

    #[test]
    fn it_hits_the_front_surface() {
        let sphere = Sphere::new(Point3::from([0.0, 0.0, 5.0]), 1.0, Vector3::zero());
        let t = sphere.intersect(&ray_from_origin([0.0, 0.0, 1.0]));

        assert!(t.is_some());
        assert_lt!((t.unwrap() - 4.0).abs(), PRECISION);
    }

    #[test]
    fn it_hits_the_front_surface_of_off_axis_spheres() {
        let center = Point3::from([3.0, -4.0, 12.0]);
        let radius = 2.5;
        let sphere = Sphere::new(center, radius, Vector3::zero());
        let t = sphere.intersect(&ray_from_origin([3.0, -4.0, 12.0]));

        assert!(t.is_some());
        assert_lt!((t.unwrap() - (13.0 - radius)).abs(), PRECISION);
    }

    #[test]
    fn it_misses_spheres_behind_the_origin() {
        let sphere = Sphere::new(Point3::from([0.0, 0.0, -5.0]), 1.0, Vector3::zero());
        assert_eq!(sphere.intersect(&ray_from_origin([0.0, 0.0, 1.0])), None);
    }

    #[test]
    fn it_misses_spheres_off_the_ray() {
        let sphere = Sphere::new(Point3::from([0.0, 3.0, 5.0]), 1.0, Vector3::zero());
        assert_eq!(sphere.intersect(&ray_from_origin([0.0, 0.0, 1.0])), None);
    }

    #[test]
    fn it_hits_the_far_surface_from_inside() {
        let sphere = Sphere::new(Point3::from([0.0, 0.0, 1.0]), 3.0, Vector3::zero());
        let t = sphere.intersect(&ray_from_origin([0.0, 0.0, 1.0]));

        assert!(t.is_some());
        assert_lt!((t.unwrap() - 4.0).abs(), PRECISION);
    }

    #[test]
    fn it_hits_tangent_rays() {
        let sphere = Sphere::new(Point3::from([1.0, 0.0, 5.0]), 1.0, Vector3::zero());
        let t = sphere.intersect(&ray_from_origin([0.0, 0.0, 1.0]));

        assert!(t.is_some());
        assert_lt!((t.unwrap() - 5.0).abs(), PRECISION);
    }

    #[test]
    fn it_skips_the_root_at_the_ray_origin() {
        let sphere = Sphere::new(Point3::from([0.0, 0.0, 1.0]), 1.0, Vector3::zero());
        let t = sphere.intersect(&ray_from_origin([0.0, 0.0, 1.0]));

        assert!(t.is_some());
        assert_lt!((t.unwrap() - 2.0).abs(), PRECISION);
    }

    #[test]
    fn it_deserializes_color_aliases() {
        let sphere: Sphere = serde_json::from_value(serde_json::json!({
            "color": [1, 0, 0],
            "position": [0, 2, 5],
            "radius": 2
        }))
        .unwrap();

        assert_eq!(sphere.diffuse_color, Vector3::from([1.0, 0.0, 0.0]));
        assert_eq!(sphere.specular_color, Vector3::zero());
        assert_eq!(sphere.position, Point3::from([0.0, 2.0, 5.0]));
        assert_eq!(sphere.radius, 2.0);
    }

    #[test]
    fn it_rejects_spheres_without_radius() {
        let sphere: Result<Sphere, _> = serde_json::from_value(serde_json::json!({
            "color": [1, 0, 0],
            "position": [0, 0, 5]
        }));

        assert!(sphere.is_err());
    }

    #[test]
    fn it_rejects_spheres_without_position_or_color() {
        let sphere: Result<Sphere, _> = serde_json::from_value(serde_json::json!({
            "color": [1, 0, 0],
            "radius": 1
        }));
        assert!(sphere.is_err());

        let sphere: Result<Sphere, _> = serde_json::from_value(serde_json::json!({
            "position": [0, 0, 5],
            "radius": 1
        }));
        assert!(sphere.is_err());
    }
}
