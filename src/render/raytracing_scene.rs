use super::pixel_buffer::PixelBuffer;
use super::{Camera, RenderOptions};
use crate::core::{normalize, quantize_color, Rgb8, BACKGROUND};
use crate::primitives::Primitive;
use crate::ray_intersection::{Intersectable, Intersection, Ray};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use log::info;
use nalgebra::{Point3, Vector3};
use rayon::prelude::*;
use std::cmp::Ordering::Equal;
use std::time::{Duration, Instant};

/// Camera resolved against an output size: view plane extents plus the size
/// of a single pixel on it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaytracingCamera {
    width: f64,
    height: f64,
    pixel_width: f64,
    pixel_height: f64,
}

impl RaytracingCamera {
    pub fn new(camera: &Camera, render_options: &RenderOptions) -> Self {
        Self {
            width: camera.width,
            height: camera.height,
            pixel_width: camera.width / f64::from(render_options.width),
            pixel_height: camera.height / f64::from(render_options.height),
        }
    }

    /// Center of pixel (`x`, `y`) on the view plane at depth 1. `y` grows
    /// upwards.
    pub fn view_plane_point(&self, x: u32, y: u32) -> Vector3<f64> {
        let vx = -self.width / 2.0 + self.pixel_width * (f64::from(x) + 0.5);
        let vy = -self.height / 2.0 + self.pixel_height * (f64::from(y) + 0.5);

        Vector3::from([vx, vy, 1.0])
    }
}

#[derive(Debug)]
pub struct RaytracingScene {
    pub render_options: RenderOptions,
    camera: RaytracingCamera,
    objects: Vec<Primitive>,
}

impl RaytracingScene {
    pub fn new(
        render_options: RenderOptions,
        camera: RaytracingCamera,
        objects: Vec<Primitive>,
    ) -> Self {
        Self {
            render_options,
            camera,
            objects,
        }
    }

    pub fn get_width(&self) -> u32 {
        self.render_options.width
    }

    pub fn get_height(&self) -> u32 {
        self.render_options.height
    }

    pub fn get_num_objects(&self) -> usize {
        self.objects.len()
    }

    pub fn get_object(&self, index: usize) -> Option<&Primitive> {
        self.objects.get(index)
    }

    /// Nearest primitive in front of the ray origin. Equal distances resolve to
    /// the primitive that comes first in the scene.
    pub fn raycast(&self, ray: &Ray) -> Option<Intersection> {
        self.objects
            .iter()
            .enumerate()
            .filter_map(|(index, object)| {
                object
                    .intersect(ray)
                    .map(|distance| Intersection::new(index, distance))
            })
            .min_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Equal))
    }

    /// Primary ray through pixel (`x`, `y`), with `y` counted from the bottom
    /// of the view plane.
    pub fn build_camera_ray(&self, x: u32, y: u32) -> Ray {
        assert!(x < self.get_width() && y < self.get_height());

        let direction = normalize(&self.camera.view_plane_point(x, y));
        Ray::new(Point3::origin(), direction)
    }

    pub fn screen_raycast(&self, x: u32, y: u32) -> Rgb8 {
        let ray = self.build_camera_ray(x, y);

        self.raycast(&ray)
            .and_then(|intersection| self.get_object(intersection.index))
            .map_or(BACKGROUND, |object| quantize_color(object.color()))
    }

    fn build_progress_bar(&self) -> ProgressBar {
        let height = self.get_height();

        let progress = ProgressBar::new(height.into());
        progress.set_draw_delta((height / 100).max(1).into());
        progress.set_style(ProgressStyle::default_bar().template(
            "[{elapsed_precise} elapsed] [{eta_precise} left] {bar:40} {pos}/{len} rows",
        ));

        progress
    }

    /// Traces every pixel into a new buffer. Rows are traced in parallel; the
    /// result does not depend on scheduling.
    pub fn raytrace_to_buffer(&self, use_progress: bool) -> (PixelBuffer, Duration) {
        let width = self.get_width();
        let height = self.get_height();
        info!(
            "Tracing {}x{} pixels against {} primitives",
            width,
            height,
            self.get_num_objects()
        );

        let mut buffer = PixelBuffer::new(width, height);

        // The first buffer row is the top of the view plane
        let process_row = |(row, pixels): (usize, &mut [u8])| {
            let y = height - 1 - row as u32;
            for (x, pixel) in pixels.chunks_exact_mut(PixelBuffer::CHANNELS).enumerate() {
                pixel.copy_from_slice(&self.screen_raycast(x as u32, y));
            }
        };

        let start = Instant::now();
        if use_progress {
            let progress = self.build_progress_bar();

            buffer
                .par_rows_mut()
                .enumerate()
                .progress_with(progress.clone())
                .for_each(process_row);

            progress.finish();
        } else {
            buffer.par_rows_mut().enumerate().for_each(process_row);
        }
        let duration = start.elapsed();

        info!(
            "Traced {} rays in {:.3?}",
            u64::from(width) * u64::from(height),
            duration
        );

        (buffer, duration)
    }

    pub fn render(&self) -> PixelBuffer {
        self.raytrace_to_buffer(false).0
    }
}
