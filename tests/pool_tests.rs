// Host-side tests for trace pool initialization.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::TAU;
use trace_core::constants::*;
use trace_core::{initialize, BendOrder, SurfaceSize, TraceColor};

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn pool_has_exactly_requested_size() {
    let size = SurfaceSize::new(1280.0, 720.0);
    for n in [0usize, 1, 2, 34, 100] {
        assert_eq!(initialize(n, size, &mut rng()).len(), n, "pool size for n={}", n);
    }
}

#[test]
fn every_fourth_trace_is_amber() {
    let pool = initialize(34, SurfaceSize::new(800.0, 600.0), &mut rng());
    for (i, t) in pool.iter().enumerate() {
        let expected = if i % 4 == 0 {
            TraceColor::Amber
        } else {
            TraceColor::Teal
        };
        assert_eq!(t.color, expected, "trace {}", i);
    }
}

#[test]
fn initial_fields_stay_in_range() {
    let size = SurfaceSize::new(800.0, 600.0);
    let pool = initialize(500, size, &mut rng());
    for t in &pool {
        assert!((0.0..=size.width).contains(&t.position.x));
        assert!((0.0..=size.height).contains(&t.position.y));
        assert!(t.velocity.x.abs() <= INIT_VELOCITY_SPAN);
        assert!(t.velocity.y.abs() <= INIT_VELOCITY_SPAN);
        assert!((0.0..TAU).contains(&t.heading));
        assert!(t.heading_drift.abs() <= INIT_HEADING_DRIFT_SPAN);
        assert!((BASE_SPEED_MIN..BASE_SPEED_MAX).contains(&t.base_speed));
        assert!((0.0..TAU).contains(&t.phase));
        assert!((ORBIT_RADIUS_MIN..ORBIT_RADIUS_MAX).contains(&t.orbit_radius));
        assert!((SEGMENT_LENGTH_MIN..SEGMENT_LENGTH_MAX).contains(&t.segment_length));
        assert!(t.stroke_width == STROKE_THIN || t.stroke_width == STROKE_THICK);
    }
}

#[test]
fn thick_strokes_are_the_minority() {
    let pool = initialize(4000, SurfaceSize::new(800.0, 600.0), &mut rng());
    let thick = pool.iter().filter(|t| t.stroke_width == STROKE_THICK).count();
    let ratio = thick as f32 / pool.len() as f32;
    assert!(ratio > 0.2 && ratio < 0.3, "thick ratio {}", ratio);

    let x_first = pool.iter().filter(|t| t.bend == BendOrder::XFirst).count();
    let ratio = x_first as f32 / pool.len() as f32;
    assert!(ratio > 0.45 && ratio < 0.55, "x-first ratio {}", ratio);
}

#[test]
fn zero_area_surface_places_traces_at_origin() {
    let pool = initialize(10, SurfaceSize::new(0.0, 0.0), &mut rng());
    assert_eq!(pool.len(), 10);
    assert!(pool.iter().all(|t| t.position == glam::Vec2::ZERO));
}
