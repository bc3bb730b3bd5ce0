use glam::Vec3;

// Shared geometry, camera and pricing constants used by the web frontend.

// Zoom buttons
pub const ZOOM_SPEED: f32 = 0.5; // world units per zoom step
pub const MIN_ZOOM: f32 = 3.0; // closest camera distance from the origin
pub const MAX_ZOOM: f32 = 15.0; // farthest camera distance from the origin

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.05; // fraction of the pending rotation applied per frame
pub const ORBIT_POLAR_EPSILON: f32 = 1e-6; // keeps the camera off the poles

// Dimension geometry
pub const CM_PER_UNIT: f64 = 100.0; // centimeters per world unit
pub const LABEL_OFFSET: f32 = 0.1; // label distance past the end of its edge

// Pricing
pub const VOLUMETRIC_DIVISOR: f64 = 5000.0; // cm³ per volumetric kg
pub const RATE_PER_KG: f64 = 5.0; // currency units per chargeable kg

// Camera
pub const CAMERA_START: Vec3 = Vec3::new(6.0, 6.0, 6.0);
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Scene
pub const INITIAL_DIMENSIONS_CM: [f64; 3] = [100.0, 100.0, 100.0]; // length, width, height
pub const BOX_COLOR: [f32; 3] = [0.204, 0.596, 0.859]; // #3498db
pub const BOX_OPACITY: f32 = 0.8;
pub const LINE_COLOR: [f32; 3] = [0.4, 0.4, 0.4]; // #666666
pub const GRID_SIZE: f32 = 10.0;
pub const GRID_DIVISIONS: u32 = 10;
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const DIRECTIONAL_INTENSITY: f32 = 0.8;
pub const DIRECTIONAL_LIGHT_POSITION: Vec3 = Vec3::new(5.0, 5.0, 5.0);
pub const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
