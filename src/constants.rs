/// Web front-end constants.
// Default DOM id looked up by `TraceBackground::start_on_default`
pub const DEFAULT_CANVAS_ID: &str = "trace-canvas";

// Used when the window reports a non-finite or non-positive pixel ratio
pub const FALLBACK_DEVICE_PIXEL_RATIO: f64 = 1.0;

// Frame-rate summary cadence (seconds)
pub const STATS_LOG_INTERVAL_SEC: f32 = 5.0;

// Host events the adapter subscribes to
pub const EVENT_RESIZE: &str = "resize";
pub const EVENT_POINTER_MOVE: &str = "mousemove";
pub const EVENT_POINTER_OUT: &str = "mouseout";

#[inline]
pub fn sanitize_device_pixel_ratio(dpr: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 {
        dpr
    } else {
        FALLBACK_DEVICE_PIXEL_RATIO
    }
}
