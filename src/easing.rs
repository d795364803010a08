//! Scalar interpolation helpers shared by the updater and the drawers.

/// Linear interpolation from `start` to `stop`. `amount` is not clamped.
#[inline]
pub fn lerp(start: f64, stop: f64, amount: f64) -> f64 {
    start + (stop - start) * amount
}

/// Re-map `value` from `[in_start, in_stop]` onto `[out_start, out_stop]`.
/// Values outside the input range extrapolate.
#[inline]
pub fn map_range(value: f64, in_start: f64, in_stop: f64, out_start: f64, out_stop: f64) -> f64 {
    out_start + (out_stop - out_start) * ((value - in_start) / (in_stop - in_start))
}
