//! Explicit viewer context shared by every UI callback.

use crate::camera::Camera;
use crate::constants::{
    AMBIENT_INTENSITY, DIRECTIONAL_INTENSITY, DIRECTIONAL_LIGHT_POSITION, INITIAL_DIMENSIONS_CM,
    WHITE,
};
use crate::dimensions::Dimensions;
use crate::orbit::OrbitControls;
use crate::projector::{AnnotationSet, DimensionProjector};
use crate::scene::{GridHelper, Light, Renderable, Scene};
use crate::zoom::{ZoomController, ZoomDirection};
use glam::Vec3;

/// Scene, camera and controllers for one box viewer.
///
/// Built once at startup and handed to every callback, so no state lives in
/// globals. The camera always looks at the origin.
#[derive(Debug)]
pub struct Viewer<S: Scene> {
    scene: S,
    camera: Camera,
    projector: DimensionProjector,
    zoom: ZoomController,
    orbit: OrbitControls,
    dimensions: Dimensions,
}

impl<S: Scene> Viewer<S> {
    /// Populate `scene` with lights, grid and box, then project the initial
    /// 100×100×100 cm dimensions.
    pub fn new(mut scene: S, aspect: f32) -> Self {
        scene.add(Renderable::Light(Light::Ambient {
            color: WHITE,
            intensity: AMBIENT_INTENSITY,
        }));
        scene.add(Renderable::Light(Light::Directional {
            color: WHITE,
            intensity: DIRECTIONAL_INTENSITY,
            position: DIRECTIONAL_LIGHT_POSITION,
        }));
        scene.add(Renderable::Grid(GridHelper::default()));

        let projector = DimensionProjector::new(&mut scene);
        let [length, width, height] = INITIAL_DIMENSIONS_CM;
        let mut viewer = Self {
            scene,
            camera: Camera::with_aspect(aspect),
            projector,
            zoom: ZoomController::default(),
            orbit: OrbitControls::default(),
            dimensions: Dimensions::default(),
        };
        viewer.camera.look_at(Vec3::ZERO);
        viewer.update_dimensions(Dimensions::new(length, width, height));
        viewer
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn annotations(&self) -> Option<&AnnotationSet> {
        self.projector.annotations()
    }

    /// Rescale the box and rebuild its annotations. Returns the new box scale.
    pub fn update_dimensions(&mut self, dimensions: Dimensions) -> Vec3 {
        self.dimensions = dimensions;
        let (scale, _) = self.projector.project(&mut self.scene, &dimensions);
        scale
    }

    /// One zoom step; `false` if it would leave the zoom interval.
    pub fn zoom(&mut self, direction: ZoomDirection) -> bool {
        self.zoom.zoom(&mut self.camera, direction)
    }

    pub fn orbit(&mut self, dx_px: f32, dy_px: f32, viewport_height_px: f32) {
        self.orbit.rotate(dx_px, dy_px, viewport_height_px);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.set_viewport(width, height);
    }

    /// Per-frame controller update, run before every render.
    pub fn tick(&mut self) {
        self.orbit.update(&mut self.camera);
    }
}
