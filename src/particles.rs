//! Randomly spawned, randomly wandering points.
//!
//! Particles are never removed, so the field only grows.

use rand::Rng;

use crate::frame::{DrawCommand, Frame, Point, Rgba, Viewport};

const PARTICLE_ALPHA: f64 = 150.0;

#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Point>,
    spawn_chance: f64,
    jitter: f64,
}

impl ParticleField {
    pub fn new(spawn_chance: f64, jitter: f64) -> Self {
        Self {
            particles: Vec::new(),
            spawn_chance,
            jitter,
        }
    }

    /// Maybe spawn one particle inside the viewport (centre origin), then
    /// emit a dot for every particle and jitter it.
    pub fn update<R: Rng>(&mut self, viewport: Viewport, rng: &mut R, frame: &mut Frame) {
        if rng.gen::<f64>() < self.spawn_chance {
            let half_w = viewport.width / 2.0;
            let half_h = viewport.height / 2.0;
            self.particles.push(Point::new(
                uniform(rng, -half_w, half_w),
                uniform(rng, -half_h, half_h),
            ));
        }

        for p in &mut self.particles {
            let stroke = Rgba::new(
                rng.gen_range(0.0..255.0),
                rng.gen_range(0.0..255.0),
                rng.gen_range(0.0..255.0),
                PARTICLE_ALPHA,
            );
            frame.push(DrawCommand::Dot { stroke, at: *p });
            p.x += uniform(rng, -self.jitter, self.jitter);
            p.y += uniform(rng, -self.jitter, self.jitter);
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn positions(&self) -> &[Point] {
        &self.particles
    }
}

/// `gen_range` panics on an empty range; a zero-sized viewport or jitter
/// collapses to `low`.
fn uniform<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}
