use glam::Vec3;

// Shared tuning constants used by the viewer session and the web front-end.

// Gestures
pub const PAN_SENSITIVITY: f32 = 0.01; // radians of rotation per pixel dragged
pub const SCALE_FACTOR_MIN: f32 = 0.5;
pub const SCALE_FACTOR_MAX: f32 = 3.0;
pub const WHEEL_ZOOM_OUT: f32 = 0.9; // wheel scrolled towards the user (deltaY > 0)
pub const WHEEL_ZOOM_IN: f32 = 1.1;
pub const MIN_PINCH_DISTANCE: f32 = 1.0; // floor for the recorded two-pointer distance (px)

// Ambient slow spin applied once per rendered frame while idle (radians)
pub const IDLE_SPIN_PER_FRAME: f32 = 0.005;

// Units
pub const CM_PER_METER: f64 = 100.0;

// Persistence
pub const STORAGE_KEY: &str = "armenu_dishes";

// Display
pub const CURRENCY_PREFIX: &str = "R$";

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_EYE_INITIAL: Vec3 = Vec3::new(0.0, 1.6, 0.0); // standing eye height, before a model exists
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 1.6, 1.5);
pub const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 0.5, 0.0);

// AR
pub const AR_PLACEMENT: Vec3 = Vec3::new(0.0, 0.0, -1.0); // one metre in front of the viewer, on the floor
pub const XR_SESSION_MODE: &str = "immersive-ar";
pub const XR_FEATURE_LOCAL_FLOOR: &str = "local-floor";
pub const XR_FEATURE_BOUNDED_FLOOR: &str = "bounded-floor";
pub const XR_FEATURE_HAND_TRACKING: &str = "hand-tracking";
