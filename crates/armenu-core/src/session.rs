//! One viewing session of one dish.
//!
//! A session is created when a dish is opened and dropped when the viewer is
//! closed, so nothing carries over between dish selections. Input handlers
//! mutate it synchronously; rendering only reads it through [`SceneSink`].

use crate::constants::AR_PLACEMENT;
use crate::dish::DishRecord;
use crate::error::MenuError;
use crate::gesture::{GestureOutput, GestureTracker, RawPointerEvent};
use crate::transform::{base_scale_for, Transform, TransformController};

/// Consumer of the per-frame transform (the external renderer).
pub trait SceneSink {
    fn apply_transform(&mut self, transform: &Transform);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelState {
    Loading,
    Ready,
    Failed,
}

pub struct ViewerSession {
    dish: DishRecord,
    tracker: GestureTracker,
    controller: TransformController,
    model: ModelState,
    in_ar: bool,
}

impl ViewerSession {
    pub fn new(dish: DishRecord) -> Self {
        let controller = TransformController::for_dish_height(dish.height);
        log::info!("[viewer] opening '{}' ({})", dish.name, dish.id);
        Self {
            dish,
            tracker: GestureTracker::new(),
            controller,
            model: ModelState::Loading,
            in_ar: false,
        }
    }

    pub fn dish(&self) -> &DishRecord {
        &self.dish
    }

    pub fn model_state(&self) -> ModelState {
        self.model
    }

    pub fn tracker(&self) -> &GestureTracker {
        &self.tracker
    }

    pub fn is_in_ar(&self) -> bool {
        self.in_ar
    }

    #[inline]
    fn has_model(&self) -> bool {
        self.model == ModelState::Ready
    }

    /// Current pose, or `None` while there is no model to pose.
    pub fn transform(&self) -> Option<&Transform> {
        self.has_model().then(|| self.controller.transform())
    }

    /// Feed a pointer event. Gesture bookkeeping always runs so a gesture
    /// that started during loading stays consistent; deltas only reach the
    /// transform once a model is present.
    pub fn handle_pointer(&mut self, ev: RawPointerEvent) -> Option<GestureOutput> {
        let out = self.tracker.handle(ev)?;
        if !self.has_model() {
            return None;
        }
        match out {
            GestureOutput::Pan(delta) => self.controller.apply_pan(delta),
            GestureOutput::Pinch(ratio) => self.controller.apply_pinch(ratio),
        }
        Some(out)
    }

    pub fn handle_wheel(&mut self, delta_y: f32) {
        if self.has_model() {
            self.controller.apply_wheel(delta_y);
        }
    }

    /// Loader finished: derive the base scale and start from the resting pose.
    pub fn model_loaded(&mut self, max_bounding_dimension: f32) -> Result<f32, MenuError> {
        let base = base_scale_for(self.dish.diameter, self.dish.height, max_bounding_dimension)
            .ok_or_else(|| {
                MenuError::ModelLoadFailure(format!(
                    "degenerate bounding box (max dimension {max_bounding_dimension})"
                ))
            })?;
        self.controller.set_base_scale(base);
        self.controller.reset();
        if self.in_ar {
            self.controller.place_at(AR_PLACEMENT);
        }
        self.model = ModelState::Ready;
        log::info!(
            "[viewer] model ready: max_dim={:.3} base_scale={:.3}",
            max_bounding_dimension,
            base
        );
        Ok(base)
    }

    /// Loader failed. A model that is already displayed stays displayed.
    pub fn model_failed(&mut self, reason: impl Into<String>) -> MenuError {
        let reason = reason.into();
        log::error!("[viewer] model load failed: {}", reason);
        if self.model == ModelState::Loading {
            self.model = ModelState::Failed;
        }
        MenuError::ModelLoadFailure(reason)
    }

    /// Per-frame update: ambient spin unless the user is dragging.
    pub fn advance_frame(&mut self) {
        if self.has_model() && !self.tracker.is_panning() {
            self.controller.advance_idle();
        }
    }

    /// Push the current pose to the renderer. Pure read.
    pub fn render(&self, sink: &mut impl SceneSink) {
        if let Some(t) = self.transform() {
            sink.apply_transform(t);
        }
    }

    pub fn reset(&mut self) {
        if self.has_model() {
            self.controller.reset();
        }
    }

    pub fn enter_ar(&mut self) {
        self.in_ar = true;
        self.tracker.clear();
        if self.has_model() {
            self.controller.place_at(AR_PLACEMENT);
        }
        log::info!("[xr] session started");
    }

    pub fn exit_ar(&mut self) {
        self.in_ar = false;
        log::info!("[xr] session ended");
    }
}
