use crate::constants::{
    XR_FEATURE_BOUNDED_FLOOR, XR_FEATURE_HAND_TRACKING, XR_FEATURE_LOCAL_FLOOR, XR_SESSION_MODE,
};
use serde::Serialize;

/// Session options handed to `navigator.xr.requestSession`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XrSessionInit {
    pub required_features: Vec<&'static str>,
    pub optional_features: Vec<&'static str>,
}

impl Default for XrSessionInit {
    fn default() -> Self {
        Self {
            required_features: vec![XR_FEATURE_LOCAL_FLOOR],
            optional_features: vec![XR_FEATURE_BOUNDED_FLOOR, XR_FEATURE_HAND_TRACKING],
        }
    }
}

impl XrSessionInit {
    pub fn mode(&self) -> &'static str {
        XR_SESSION_MODE
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Outcome of the capability probe run at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArAvailability {
    #[default]
    Unknown,
    Supported,
    Unsupported,
}

impl ArAvailability {
    /// A probe that rejected counts as "unsupported".
    pub fn from_probe<E>(result: Result<bool, E>) -> Self {
        match result {
            Ok(true) => ArAvailability::Supported,
            _ => ArAvailability::Unsupported,
        }
    }

    #[inline]
    pub fn can_start(self) -> bool {
        self != ArAvailability::Unsupported
    }
}
