//! Pulsating waveform sketch with drifting particles.
//!
//! The animation core is plain Rust and builds on any target; the browser
//! shell in `wasm` only exists on `wasm32`.

pub mod config;
pub mod easing;
pub mod error;
pub mod frame;
pub mod particles;
pub mod sketch;
pub mod state;
pub mod wave;

pub use config::{ConfigError, SketchConfig};
pub use error::SketchError;
pub use frame::{DrawCommand, Frame, Point, Rgba, Viewport};
pub use sketch::Sketch;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    mod controls;
    mod logging;
    mod render;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        render::start("c")?;
        Ok(())
    }
}
