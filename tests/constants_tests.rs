// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use armenu_core::constants as core_constants;
use constants::*;
use std::collections::HashSet;

#[test]
#[allow(clippy::assertions_on_constants)]
fn gesture_constants_are_sane() {
    use core_constants::*;
    assert!(PAN_SENSITIVITY > 0.0);
    assert!(SCALE_FACTOR_MIN > 0.0);
    assert!(SCALE_FACTOR_MIN < 1.0 && SCALE_FACTOR_MAX > 1.0);
    assert!(WHEEL_ZOOM_OUT < 1.0 && WHEEL_ZOOM_IN > 1.0);
    assert!(IDLE_SPIN_PER_FRAME > 0.0);
    assert!(MIN_PINCH_DISTANCE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_are_sane() {
    use core_constants::*;
    assert!(CAMERA_NEAR > 0.0 && CAMERA_FAR > CAMERA_NEAR);
    assert!(CAMERA_FOV_DEGREES > 0.0 && CAMERA_FOV_DEGREES < 180.0);
    assert!(AR_PLACEMENT.z < 0.0);
}

#[test]
fn element_ids_are_unique() {
    let ids = [
        MENU_SCREEN_ID,
        AR_SCREEN_ID,
        ADMIN_SCREEN_ID,
        DISHES_CONTAINER_ID,
        ADMIN_BUTTON_ID,
        DISH_NAME_ID,
        DISH_MEASURES_ID,
        AR_CONTAINER_ID,
        LOADING_OVERLAY_ID,
        BACK_BUTTON_ID,
        START_AR_BUTTON_ID,
        RESET_BUTTON_ID,
        CLOSE_ADMIN_BUTTON_ID,
        DISH_FORM_ID,
        FORM_NAME_ID,
        FORM_DESCRIPTION_ID,
        FORM_DIAMETER_ID,
        FORM_HEIGHT_ID,
        FORM_PRICE_ID,
        FORM_MODEL_ID,
        FORM_IMAGE_ID,
        ADMIN_LIST_ID,
    ];
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
    assert!(ids.iter().all(|id| !id.is_empty() && !id.contains(' ')));
}

#[test]
fn index_html_declares_every_bound_id() {
    let html = include_str!("../www/index.html");
    for id in [
        DISHES_CONTAINER_ID,
        AR_CONTAINER_ID,
        DISH_FORM_ID,
        ADMIN_LIST_ID,
        START_AR_BUTTON_ID,
        RESET_BUTTON_ID,
        LOADING_OVERLAY_ID,
    ] {
        assert!(html.contains(&format!("id=\"{id}\"")), "missing #{id}");
    }
}

#[test]
fn web_sys_features_exclude_unused_element_types() {
    let manifest = include_str!("../Cargo.toml");
    for feature in ["HtmlImageElement", "HtmlButtonElement", "DomRect", "ProgressEvent"] {
        assert!(
            !manifest.contains(&format!("\"{feature}\"")),
            "web-sys feature {feature} is enabled but unused"
        );
    }
}
