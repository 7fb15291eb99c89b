use super::raytracing_scene::{RaytracingCamera, RaytracingScene};
use super::{Camera, RenderOptions};
use crate::core::is_normalized_color;
use crate::error::{ConfigurationError, Result};
use crate::primitives::{Plane, Primitive, Sphere};
use log::{debug, warn};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SceneObject {
    Camera(Camera),
    Sphere(Sphere),
    #[serde(alias = "light")]
    Plane(Plane),
}

impl SceneObject {
    pub fn kind(&self) -> &'static str {
        match self {
            SceneObject::Camera(_) => "camera",
            SceneObject::Sphere(_) => "sphere",
            SceneObject::Plane(_) => "plane",
        }
    }
}

impl From<Camera> for SceneObject {
    fn from(camera: Camera) -> Self {
        SceneObject::Camera(camera)
    }
}

impl From<Sphere> for SceneObject {
    fn from(sphere: Sphere) -> Self {
        SceneObject::Sphere(sphere)
    }
}

impl From<Plane> for SceneObject {
    fn from(plane: Plane) -> Self {
        SceneObject::Plane(plane)
    }
}

/// Scene objects in the order they were parsed.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl FromStr for Scene {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let scene = Self::from_reader(BufReader::new(file))?;
        debug!(
            "Loaded {} scene objects from {}",
            scene.len(),
            path.display()
        );

        Ok(scene)
    }

    pub fn add_object<O: Into<SceneObject>>(&mut self, object: O) {
        self.objects.push(object.into());
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Checks the scene against `render_options` and splits it into the camera
    /// and the renderable primitives. Nothing is allocated for rendering if
    /// this fails.
    pub fn build_raytracing_scene(
        self,
        render_options: RenderOptions,
    ) -> Result<RaytracingScene, ConfigurationError> {
        render_options.validate()?;
        if self.is_empty() {
            return Err(ConfigurationError::EmptyScene);
        }

        let mut cameras = Vec::new();
        let mut objects = Vec::new();
        for (index, object) in self.objects.into_iter().enumerate() {
            debug!("Scene object {}: {}", index, object.kind());
            match object {
                SceneObject::Camera(camera) => cameras.push(camera),
                SceneObject::Sphere(sphere) => objects.push(Primitive::Sphere(sphere)),
                SceneObject::Plane(plane) => objects.push(Primitive::Plane(plane)),
            }
        }

        let camera = match cameras.as_slice() {
            [] => return Err(ConfigurationError::MissingCamera),
            [camera] => *camera,
            _ => return Err(ConfigurationError::MultipleCameras(cameras.len())),
        };
        camera.validate()?;

        for (index, object) in objects.iter().enumerate() {
            if !is_normalized_color(object.color()) {
                warn!(
                    "Object {} has color {:?} outside [0, 1], it will be clamped",
                    index,
                    object.color().as_slice()
                );
            }
        }
        debug!(
            "Built scene with a {}x{} camera and {} primitives",
            camera.width,
            camera.height,
            objects.len()
        );

        Ok(RaytracingScene::new(
            render_options,
            RaytracingCamera::new(&camera, &render_options),
            objects,
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use nalgebra::{Point3, Vector3};
    use serde_json::json;

    #[test]
    fn it_parses_objects_in_order() {
        let scene: Scene = r#"[
            { "type": "sphere", "color": [1, 0, 0], "position": [0, 0, 5], "radius": 1 },
            { "type": "camera", "width": 2.0, "height": 1.5 },
            { "type": "light", "color": [0, 1, 0], "position": [0, -1, 0], "direction": [0, 1, 0] },
            { "type": "plane", "color": [0, 0, 1], "position": [0, 0, 9], "normal": [0, 0, 1] }
        ]"#
        .parse()
        .unwrap();

        let kinds: Vec<&str> = scene.objects().iter().map(SceneObject::kind).collect();
        assert_eq!(kinds, vec!["sphere", "camera", "plane", "plane"]);
        assert_eq!(
            scene.objects()[1],
            SceneObject::Camera(Camera::new(2.0, 1.5))
        );
        assert_eq!(
            scene.objects()[2],
            SceneObject::Plane(Plane::new(
                Point3::from([0.0, -1.0, 0.0]),
                Vector3::from([0.0, 1.0, 0.0]),
                Vector3::from([0.0, 1.0, 0.0]),
            ))
        );
    }

    #[test]
    fn it_parses_an_empty_scene() {
        let scene: Scene = "[]".parse().unwrap();
        assert!(scene.is_empty());
    }

    #[test]
    fn it_rejects_unknown_object_types() {
        let scene: Result<Scene, _> = serde_json::from_value(json!([
            { "type": "cube", "position": [0, 0, 5] }
        ]));
        assert!(scene.is_err());
    }

    #[test]
    fn it_rejects_cameras_without_dimensions() {
        let scene: Result<Scene, _> = serde_json::from_value(json!([
            { "type": "camera", "width": 2.0 }
        ]));
        assert!(scene.is_err());
    }

    #[test]
    fn it_rejects_spheres_without_geometry() {
        let scene: Result<Scene, _> = serde_json::from_value(json!([
            { "type": "camera", "width": 2, "height": 2 },
            { "type": "sphere", "color": [1, 0, 0] }
        ]));
        assert!(scene.is_err());

        let scene: Result<Scene, _> = serde_json::from_value(json!([
            { "type": "camera", "width": 2, "height": 2 },
            { "type": "sphere", "color": [1, 0, 0], "position": [0, 0, 5] }
        ]));
        assert!(scene.is_err());
    }

    #[test]
    fn it_rejects_planes_without_normal() {
        let scene: Result<Scene, _> = serde_json::from_value(json!([
            { "type": "plane", "color": [1, 1, 1], "position": [0, -1, 0] }
        ]));
        assert!(scene.is_err());
    }

    #[test]
    fn it_reads_scenes_from_readers() {
        let json = br#"[{ "type": "camera", "width": 1, "height": 1 }]"#;
        let scene = Scene::from_reader(&json[..]).unwrap();
        assert_eq!(scene.len(), 1);

        assert!(Scene::from_reader(&b"{"[..]).is_err());
    }

    #[test]
    fn it_keeps_primitive_order_when_building() {
        let mut scene = Scene::new();
        scene.add_object(Plane::new(
            Point3::from([0.0, 0.0, 10.0]),
            Vector3::from([0.0, 0.0, 1.0]),
            Vector3::from([0.0, 0.0, 1.0]),
        ));
        scene.add_object(Camera::new(2.0, 2.0));
        scene.add_object(Sphere::new(
            Point3::from([0.0, 0.0, 5.0]),
            1.0,
            Vector3::from([1.0, 0.0, 0.0]),
        ));

        let scene = scene
            .build_raytracing_scene(RenderOptions::new(10, 10))
            .unwrap();
        assert!(matches!(scene.get_object(0), Some(Primitive::Plane(_))));
        assert!(matches!(scene.get_object(1), Some(Primitive::Sphere(_))));
        assert!(scene.get_object(2).is_none());
    }
}
