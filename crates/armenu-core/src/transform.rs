use crate::constants::{
    CM_PER_METER, IDLE_SPIN_PER_FRAME, PAN_SENSITIVITY, SCALE_FACTOR_MAX, SCALE_FACTOR_MIN,
    WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT,
};
use glam::{Vec2, Vec3};

/// Pose of the displayed dish model.
///
/// `rotation.x` / `rotation.y` are Euler angles in radians and are never
/// wrapped. The rendered scale is `base_scale * scale_factor`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub rotation: Vec2,
    pub scale_factor: f32,
    pub base_scale: f32,
    pub position: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            rotation: Vec2::ZERO,
            scale_factor: 1.0,
            base_scale: 1.0,
            position: Vec3::ZERO,
        }
    }
}

impl Transform {
    #[inline]
    pub fn effective_scale(&self) -> f32 {
        self.base_scale * self.scale_factor
    }
}

/// Scale that maps a model's native size onto the dish's declared size.
///
/// Dimensions are in centimetres; `max_bounding_dimension` in model units
/// (metres for glTF). Returns `None` for a degenerate bounding box.
pub fn base_scale_for(diameter_cm: f64, height_cm: f64, max_bounding_dimension: f32) -> Option<f32> {
    if !(max_bounding_dimension.is_finite() && max_bounding_dimension > 0.0) {
        return None;
    }
    let real_size_m = (diameter_cm / CM_PER_METER).max(height_cm / CM_PER_METER);
    Some((real_size_m / max_bounding_dimension as f64) as f32)
}

/// Resting height of the model's centre: half the dish height, in metres.
#[inline]
pub fn resting_position(height_cm: f64) -> Vec3 {
    Vec3::new(0.0, (height_cm / (2.0 * CM_PER_METER)) as f32, 0.0)
}

#[inline]
fn clamp_scale(v: f32) -> f32 {
    v.clamp(SCALE_FACTOR_MIN, SCALE_FACTOR_MAX)
}

/// Accumulates gesture deltas into a [`Transform`].
#[derive(Clone, Debug)]
pub struct TransformController {
    transform: Transform,
    resting: Vec3,
}

impl TransformController {
    pub fn new(resting: Vec3) -> Self {
        Self {
            transform: Transform {
                position: resting,
                ..Transform::default()
            },
            resting,
        }
    }

    pub fn for_dish_height(height_cm: f64) -> Self {
        Self::new(resting_position(height_cm))
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn apply_pan(&mut self, delta: Vec2) {
        self.transform.rotation.y += delta.x * PAN_SENSITIVITY;
        self.transform.rotation.x += delta.y * PAN_SENSITIVITY;
    }

    pub fn apply_pinch(&mut self, ratio: f32) {
        if !(ratio.is_finite() && ratio > 0.0) {
            return;
        }
        self.transform.scale_factor = clamp_scale(self.transform.scale_factor * ratio);
    }

    /// Discrete desktop zoom; a positive direction (wheel towards the user)
    /// shrinks the model.
    pub fn apply_wheel(&mut self, direction: f32) {
        let step = if direction > 0.0 {
            WHEEL_ZOOM_OUT
        } else {
            WHEEL_ZOOM_IN
        };
        self.transform.scale_factor = clamp_scale(self.transform.scale_factor * step);
    }

    /// Ambient spin for one rendered frame.
    #[inline]
    pub fn advance_idle(&mut self) {
        self.transform.rotation.y += IDLE_SPIN_PER_FRAME;
    }

    pub fn set_base_scale(&mut self, value: f32) {
        self.transform.base_scale = value;
    }

    pub fn place_at(&mut self, position: Vec3) {
        self.transform.position = position;
    }

    /// Back to the resting pose. `base_scale` belongs to the loaded model and
    /// is kept.
    pub fn reset(&mut self) {
        self.transform.rotation = Vec2::ZERO;
        self.transform.scale_factor = 1.0;
        self.transform.position = self.resting;
    }
}
