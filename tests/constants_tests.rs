// Host-side tests for constants, parameters and color serialization.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use trace_core::constants::*;
use trace_core::{
    FieldParams, ParamsError, Rgba, SurfaceSize, TraceField, AMBER, FADE_OVERLAY, GRID_LINE, TEAL,
};

#[test]
fn pixel_ratio_falls_back_when_invalid() {
    assert_eq!(sanitize_device_pixel_ratio(2.0), 2.0);
    assert_eq!(sanitize_device_pixel_ratio(0.0), FALLBACK_DEVICE_PIXEL_RATIO);
    assert_eq!(sanitize_device_pixel_ratio(-1.5), FALLBACK_DEVICE_PIXEL_RATIO);
    assert_eq!(sanitize_device_pixel_ratio(f64::NAN), FALLBACK_DEVICE_PIXEL_RATIO);
}

#[test]
fn backing_store_scales_with_pixel_ratio() {
    let size = SurfaceSize::new(1280.0, 721.0);
    assert_eq!(size.backing_pixels(1.0), (1280, 721));
    assert_eq!(size.backing_pixels(2.0), (2560, 1442));
    assert_eq!(size.backing_pixels(1.5), (1920, 1081));
    assert_eq!(size.backing_pixels(0.0), (1280, 721));
    assert_eq!(SurfaceSize::new(-5.0, 10.0).backing_pixels(2.0), (0, 20));
}

#[test]
fn interaction_radii_relationships() {
    // Traces start dimming before the repulsion kicks in
    assert!(DIM_RADIUS > REPEL_RADIUS);
    assert!(ALPHA_NEAR < ALPHA_FAR);
    assert!(DAMPING > 0.0 && DAMPING < 1.0);
    assert!(STROKE_THICK > STROKE_THIN);
    assert_eq!(TRACE_COUNT, 34);
}

#[test]
fn palette_serializes_as_css() {
    assert_eq!(AMBER.to_css(), "rgba(251, 191, 36, 1)");
    assert_eq!(TEAL.to_css(), "rgba(54, 207, 201, 1)");
    assert_eq!(FADE_OVERLAY.to_css(), "rgba(13, 27, 42, 0.2)");
    assert_eq!(GRID_LINE.to_css(), "rgba(54, 207, 201, 0.06)");
    assert_eq!(Rgba::rgb(1, 2, 3).with_alpha(4.0).to_css(), "rgba(1, 2, 3, 1)");
}

#[test]
fn default_params_are_valid() {
    assert_eq!(FieldParams::default().validate(), Ok(()));
}

#[test]
fn invalid_params_are_rejected() {
    let bad_step = FieldParams {
        grid_step: 0.0,
        ..FieldParams::default()
    };
    assert_eq!(bad_step.validate(), Err(ParamsError::GridStep(0.0)));

    let bad_margin = FieldParams {
        wrap_margin: -1.0,
        ..FieldParams::default()
    };
    assert!(matches!(
        bad_margin.validate(),
        Err(ParamsError::NegativeDistance { name: "wrap margin", .. })
    ));

    let bad_strength = FieldParams {
        repel_strength: f32::INFINITY,
        ..FieldParams::default()
    };
    assert!(matches!(
        bad_strength.validate(),
        Err(ParamsError::RepelStrength(_))
    ));

    let mut rng = rand::thread_rng();
    assert!(TraceField::new(bad_step, SurfaceSize::new(10.0, 10.0), &mut rng).is_err());
}
