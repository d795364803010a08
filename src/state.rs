use crate::config::SketchConfig;
use crate::frame::Point;

/// Everything the frame updater reads and writes each tick, apart from the
/// particles and the random source.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    pub wave_count: usize,
    pub base_radius: f64,
    pub amplitude: f64,
    pub time: f64,
    pub speed: f64,
    pub resetting: bool,
    /// Fraction of the reset animation played, in `[0, 1]`.
    pub reset_progress: f64,
    pub bounce: f64,
    /// Background gray level.
    pub background: f64,
    pub click_effect: bool,
    pub shape_changed: bool,
    pub wave_expansion: f64,
    /// `1.0` or `-1.0`.
    pub move_direction: f64,
    pub frame_count: u64,
    /// Orbit offset translated after the last frame's drawing.
    pub drift: Point,
}

impl AnimationState {
    pub fn new(config: &SketchConfig) -> Self {
        Self {
            wave_count: config.wave_count,
            base_radius: config.initial_radius,
            amplitude: config.initial_amplitude,
            time: 0.0,
            speed: config.speed,
            resetting: false,
            reset_progress: 0.0,
            bounce: 0.0,
            background: 0.0,
            click_effect: false,
            shape_changed: false,
            wave_expansion: 0.0,
            move_direction: 1.0,
            frame_count: 0,
            drift: Point::default(),
        }
    }
}
