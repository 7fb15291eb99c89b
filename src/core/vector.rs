use nalgebra::{Unit, Vector3};

pub fn sqr(v: f64) -> f64 {
    v * v
}

pub fn squared_length(v: &Vector3<f64>) -> f64 {
    sqr(v.x) + sqr(v.y) + sqr(v.z)
}

/// Scales `v` to unit length.
///
/// `v` must be non-zero. Camera rays always have a depth component of 1 so
/// this holds for every ray built by the renderer.
pub fn normalize(v: &Vector3<f64>) -> Unit<Vector3<f64>> {
    let len = squared_length(v).sqrt();
    Unit::new_unchecked(v / len)
}

/// Real roots of `a·t² + b·t + c = 0`, smallest first.
pub fn quadratic(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        None
    } else if discriminant == 0.0 {
        Some((-0.5 * b / a, -0.5 * b / a))
    } else {
        let q = -0.5 * (b + b.signum() * discriminant.sqrt());
        let r0 = q / a;
        let r1 = c / q;
        Some((r0.min(r1), r0.max(r1)))
    }
}
