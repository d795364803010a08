//! Concentric wave outlines.

use std::f64::consts::TAU;

use rand::Rng;

use crate::easing::map_range;
use crate::frame::{Point, Rgba};

/// Per-frame inputs shared by every wave in the stack.
#[derive(Debug, Clone, Copy)]
pub struct WaveParams {
    pub time: f64,
    pub amplitude: f64,
    pub wave_count: usize,
    pub vertex_step: f64,
    pub shape_changed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WaveShape {
    pub stroke: Rgba,
    pub points: Vec<Point>,
}

const SMOOTH_DISTORTION: f64 = 5.0;
const RANDOM_DISTORTION: f64 = 30.0;

/// Outline of wave `index` around `radius`.
///
/// The colour is drawn fresh on every call; inner waves are more opaque than
/// outer ones. In shape-changed mode each vertex gets an independent random
/// offset instead of the smooth angular ripple.
pub fn wave_shape<R: Rng>(radius: f64, index: usize, params: &WaveParams, rng: &mut R) -> WaveShape {
    let r = rng.gen_range(128.0..255.0);
    let g = rng.gen_range(128.0..255.0);
    let b = rng.gen_range(128.0..255.0);
    let alpha = map_range(index as f64, 0.0, params.wave_count as f64, 200.0, 100.0);

    let t = params.time;
    let points = sample_angles(params.vertex_step)
        .map(|angle| {
            let freq = angle * 5.0 + t * 2.0;
            let distortion = if params.shape_changed {
                rng.gen_range(-RANDOM_DISTORTION..RANDOM_DISTORTION)
            } else {
                (t + angle * 3.0).sin() * SMOOTH_DISTORTION
            };
            let rho = radius + freq.sin() * params.amplitude + distortion;
            Point::new(rho * angle.cos(), rho * angle.sin())
        })
        .collect();

    WaveShape {
        stroke: Rgba::new(r, g, b, alpha),
        points,
    }
}

/// Angles `0, step, 2*step, ...` strictly below a full turn.
pub fn sample_angles(step: f64) -> impl Iterator<Item = f64> {
    (0u32..)
        .map(move |k| k as f64 * step)
        .take_while(|angle| *angle < TAU)
}
