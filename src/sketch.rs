//! The frame updater and the two UI handlers.

use std::f64::consts::{PI, TAU};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::debug;

use crate::config::{ConfigError, SketchConfig};
use crate::easing::{lerp, map_range};
use crate::frame::{DrawCommand, Frame, Point, Viewport};
use crate::particles::ParticleField;
use crate::state::AnimationState;
use crate::wave::{wave_shape, WaveParams};

const BACKGROUND_EASE_RESETTING: f64 = 0.05;
const BACKGROUND_EASE_IDLE: f64 = 0.1;
const BURST_EASE: f64 = 0.1;
const SETTLE_EASE: f64 = 0.05;
const CHAOS_RATE: f64 = 0.1;
const CHAOS_STRENGTH: f64 = 50.0;

/// Owns the animation state, the particles and the random source.
pub struct Sketch {
    config: SketchConfig,
    state: AnimationState,
    particles: ParticleField,
    rng: SmallRng,
}

impl Sketch {
    /// Fails if `config` does not pass [`SketchConfig::validate`].
    pub fn new(config: SketchConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = AnimationState::new(&config);
        let particles = ParticleField::new(config.spawn_chance, config.jitter);
        Ok(Self {
            config,
            state,
            particles,
            rng: SmallRng::seed_from_u64(seed),
        })
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    /// Reset button handler.
    pub fn start_reset(&mut self) {
        let s = &mut self.state;
        s.resetting = true;
        s.reset_progress = 0.0;
        s.bounce = 0.0;
        s.click_effect = true;
        s.shape_changed = false;
        debug!(frame = s.frame_count, "reset started");
    }

    /// Canvas click handler.
    pub fn toggle_shape(&mut self) {
        self.state.shape_changed = !self.state.shape_changed;
        debug!(shape_changed = self.state.shape_changed, "shape toggled");
    }

    /// Advance one frame and record its drawing into `frame`.
    pub fn tick(&mut self, viewport: Viewport, frame: &mut Frame) {
        frame.clear();
        let cfg = &self.config;
        let s = &mut self.state;
        s.frame_count += 1;

        s.background = if s.resetting {
            lerp(s.background, cfg.reset_background, BACKGROUND_EASE_RESETTING)
        } else {
            lerp(s.background, 0.0, BACKGROUND_EASE_IDLE)
        };
        frame.push(DrawCommand::Background(s.background));

        frame.push(DrawCommand::Translate(viewport.center()));

        if s.resetting {
            advance_reset(s, cfg);
        }

        if s.click_effect {
            s.wave_expansion = lerp(s.wave_expansion, cfg.burst_target, BURST_EASE);
            if s.wave_expansion > cfg.burst_threshold {
                s.click_effect = false;
            }
        } else {
            s.wave_expansion = lerp(s.wave_expansion, 1.0, SETTLE_EASE);
        }

        let chaos_factor = (s.time * CHAOS_RATE).sin() * CHAOS_STRENGTH;
        let params = WaveParams {
            time: s.time,
            amplitude: s.amplitude,
            wave_count: s.wave_count,
            vertex_step: cfg.vertex_step,
            shape_changed: s.shape_changed,
        };
        let outer_radius = viewport.min_side() / 5.0;
        for i in 0..s.wave_count {
            let radius = map_range(i as f64, 0.0, s.wave_count as f64, s.base_radius, outer_radius)
                * s.wave_expansion;
            let chaos = (s.time + i as f64).sin() * chaos_factor;
            let shape = wave_shape(radius + chaos, i, &params, &mut self.rng);
            frame.push(DrawCommand::Polygon {
                stroke: shape.stroke,
                points: shape.points,
            });
        }

        self.particles.update(viewport, &mut self.rng, frame);

        s.time += s.speed;
        // Trails everything drawn; the next Background resets the transform.
        s.drift = drift(s.time, s.move_direction);
        frame.push(DrawCommand::Translate(s.drift));
        frame.button_pressed = s.resetting;

        if s.frame_count % cfg.flip_interval == 0 {
            s.move_direction = -s.move_direction;
        }
    }
}

fn advance_reset(s: &mut AnimationState, cfg: &SketchConfig) {
    s.reset_progress += cfg.reset_step;
    if s.reset_progress >= 1.0 {
        s.reset_progress = 1.0;
        s.resetting = false;
        debug!(frame = s.frame_count, "reset finished");
    }

    let p = s.reset_progress;
    // The bounce feeding the radius is last frame's value.
    s.base_radius = lerp(cfg.initial_radius, cfg.reset_radius + s.bounce, p);
    s.amplitude = lerp(cfg.initial_amplitude, cfg.reset_amplitude, p);
    s.time = lerp(0.0, TAU, p);
    s.bounce = (p * PI).sin() * cfg.bounce_height;
}

/// Orbit offset: small, or wide when the direction is negative.
fn drift(time: f64, direction: f64) -> Point {
    let (rate, reach) = if direction > 0.0 { (0.5, 100.0) } else { (0.7, 200.0) };
    Point::new((time * rate).sin() * reach, (time * rate).cos() * reach)
}
