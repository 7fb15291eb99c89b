use nalgebra::Vector3;

pub type Rgb8 = [u8; 3];

pub const BACKGROUND: Rgb8 = [0, 0, 0];

/// Maps a color channel in [0, 1] to 0..=255, clamping out of range values.
pub fn quantize(c: f64) -> u8 {
    if c.is_nan() {
        return 0;
    }

    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

pub fn quantize_color(color: &Vector3<f64>) -> Rgb8 {
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

pub fn is_normalized_color(color: &Vector3<f64>) -> bool {
    color.iter().all(|c| (0.0..=1.0).contains(c))
}
