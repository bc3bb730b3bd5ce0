//! Dimension projection: box scale plus the three edge annotations.

use crate::constants::{LABEL_OFFSET, LINE_COLOR};
use crate::dimensions::{Axis, Dimensions};
use crate::scene::{BoxMesh, LineSegment, RenderId, Renderable, Scene, TextLabel};
use glam::Vec3;
use smallvec::SmallVec;

/// One measured edge: a line along the box plus its text label.
#[derive(Clone, Debug, PartialEq)]
pub struct DimensionIndicator {
    pub axis: Axis,
    pub line: LineSegment,
    pub label: TextLabel,
}

/// The length, width and height indicators for one set of dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnotationSet {
    pub indicators: [DimensionIndicator; 3],
}

impl AnnotationSet {
    /// Lay out the indicators for `dimensions`.
    ///
    /// Every line starts at the box's minimum corner and runs to the far end
    /// of its own axis. Labels sit `LABEL_OFFSET` past that end and show the
    /// entered centimeter value, not the scaled one.
    pub fn build(dimensions: &Dimensions) -> Self {
        let scale = dimensions.scale();
        let corner = -scale / 2.0;
        let indicators = Axis::ALL.map(|axis| {
            let dir = axis.render_axis();
            let end = corner + dir * scale.dot(dir);
            DimensionIndicator {
                axis,
                line: LineSegment {
                    start: corner,
                    end,
                    color: LINE_COLOR,
                },
                label: TextLabel {
                    text: format!("{}={}cm", axis.letter(), dimensions.value(axis)),
                    position: end + dir * LABEL_OFFSET,
                },
            }
        });
        Self { indicators }
    }

    pub fn indicator(&self, axis: Axis) -> &DimensionIndicator {
        // `build` stores indicators in `Axis::ALL` order.
        match axis {
            Axis::Length => &self.indicators[0],
            Axis::Width => &self.indicators[1],
            Axis::Height => &self.indicators[2],
        }
    }
}

/// Owns the box mesh handle and the currently attached annotations.
#[derive(Debug)]
pub struct DimensionProjector {
    box_id: RenderId,
    attached: SmallVec<[RenderId; 6]>,
    current: Option<AnnotationSet>,
}

impl DimensionProjector {
    /// Attach the box mesh. It stays in the scene for the projector's lifetime.
    pub fn new<S: Scene + ?Sized>(scene: &mut S) -> Self {
        let box_id = scene.add(Renderable::Box(BoxMesh::default()));
        Self {
            box_id,
            attached: SmallVec::new(),
            current: None,
        }
    }

    pub fn box_id(&self) -> RenderId {
        self.box_id
    }

    pub fn annotations(&self) -> Option<&AnnotationSet> {
        self.current.as_ref()
    }

    /// Rescale the box and swap in a fresh annotation set.
    ///
    /// The previous lines and labels are detached before the new ones are
    /// attached, so the scene never holds more than one set.
    pub fn project<S: Scene + ?Sized>(
        &mut self,
        scene: &mut S,
        dimensions: &Dimensions,
    ) -> (Vec3, &AnnotationSet) {
        self.detach(scene);

        let scale = dimensions.scale();
        if !scene.set_scale(self.box_id, scale) {
            log::warn!("[projector] box {:?} missing from scene", self.box_id);
        }

        let set = AnnotationSet::build(dimensions);
        for indicator in &set.indicators {
            let id = scene.add(Renderable::Line(indicator.line.clone()));
            self.attached.push(id);
        }
        for indicator in &set.indicators {
            let id = scene.add(Renderable::Label(indicator.label.clone()));
            self.attached.push(id);
        }
        log::debug!(
            "[projector] L={} W={} H={} -> scale=({:.3},{:.3},{:.3})",
            dimensions.length,
            dimensions.width,
            dimensions.height,
            scale.x,
            scale.y,
            scale.z
        );

        let set: &AnnotationSet = self.current.insert(set);
        (scale, set)
    }

    fn detach<S: Scene + ?Sized>(&mut self, scene: &mut S) {
        for id in self.attached.drain(..) {
            _ = scene.remove(id);
        }
        self.current = None;
    }
}
