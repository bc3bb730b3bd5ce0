//! Scene capability consumed by the projector and the viewer, plus the
//! retained [`SceneGraph`] the canvas renderer draws from.

use crate::constants::{BOX_COLOR, BOX_OPACITY, GRID_DIVISIONS, GRID_SIZE};
use fnv::FnvHashMap;
use glam::Vec3;

/// Handle returned by [`Scene::add`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RenderId(u32);

#[derive(Clone, Debug, PartialEq)]
pub struct LineSegment {
    pub start: Vec3,
    pub end: Vec3,
    pub color: [f32; 3],
}

/// Screen-aligned text anchored at a world position.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub position: Vec3,
}

/// Unit cube centered at the origin, stretched by `scale`.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxMesh {
    pub scale: Vec3,
    pub color: [f32; 3],
    pub opacity: f32,
}

impl Default for BoxMesh {
    fn default() -> Self {
        Self {
            scale: Vec3::ONE,
            color: BOX_COLOR,
            opacity: BOX_OPACITY,
        }
    }
}

/// Square grid on the XZ plane.
#[derive(Clone, Debug, PartialEq)]
pub struct GridHelper {
    pub size: f32,
    pub divisions: u32,
}

impl Default for GridHelper {
    fn default() -> Self {
        Self {
            size: GRID_SIZE,
            divisions: GRID_DIVISIONS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Light {
    Ambient {
        color: [f32; 3],
        intensity: f32,
    },
    /// Shines from `position` towards the origin.
    Directional {
        color: [f32; 3],
        intensity: f32,
        position: Vec3,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Renderable {
    Line(LineSegment),
    Label(TextLabel),
    Box(BoxMesh),
    Grid(GridHelper),
    Light(Light),
}

/// Attach/detach capability of whatever draws the scene.
pub trait Scene {
    fn add(&mut self, item: Renderable) -> RenderId;

    /// Detach an item. Returns `None` if the id is not attached.
    fn remove(&mut self, id: RenderId) -> Option<Renderable>;

    /// Update the scale of an attached box in place. Returns `false` if `id`
    /// does not name a box.
    fn set_scale(&mut self, id: RenderId, scale: Vec3) -> bool;
}

#[derive(Debug, Default)]
pub struct SceneGraph {
    items: FnvHashMap<RenderId, Renderable>,
    next_id: u32,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: RenderId) -> Option<&Renderable> {
        self.items.get(&id)
    }

    /// Attached items in insertion order.
    pub fn ordered(&self) -> Vec<(RenderId, &Renderable)> {
        let mut out: Vec<_> = self.items.iter().map(|(id, item)| (*id, item)).collect();
        out.sort_unstable_by_key(|(id, _)| *id);
        out
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineSegment> {
        self.items.values().filter_map(|item| match item {
            Renderable::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &TextLabel> {
        self.items.values().filter_map(|item| match item {
            Renderable::Label(label) => Some(label),
            _ => None,
        })
    }

    pub fn boxes(&self) -> impl Iterator<Item = &BoxMesh> {
        self.items.values().filter_map(|item| match item {
            Renderable::Box(mesh) => Some(mesh),
            _ => None,
        })
    }

    pub fn lights(&self) -> impl Iterator<Item = &Light> {
        self.items.values().filter_map(|item| match item {
            Renderable::Light(light) => Some(light),
            _ => None,
        })
    }
}

impl Scene for SceneGraph {
    fn add(&mut self, item: Renderable) -> RenderId {
        let id = RenderId(self.next_id);
        self.next_id += 1;
        self.items.insert(id, item);
        id
    }

    fn remove(&mut self, id: RenderId) -> Option<Renderable> {
        self.items.remove(&id)
    }

    fn set_scale(&mut self, id: RenderId, scale: Vec3) -> bool {
        match self.items.get_mut(&id) {
            Some(Renderable::Box(mesh)) => {
                mesh.scale = scale;
                true
            }
            _ => false,
        }
    }
}
