use std::cell::RefCell;
use std::rc::Rc;

use tracing::{info, warn, Level};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d as Ctx2d, HtmlCanvasElement, UrlSearchParams, Window};

use super::{controls, logging};
use crate::config::{SketchConfig, QUERY_KEYS};
use crate::error::SketchError;
use crate::frame::{DrawCommand, Frame, Viewport};
use crate::sketch::Sketch;

/// Wire the sketch to `<canvas id={canvas_id}>` and start the frame loop.
pub fn start(canvas_id: &str) -> Result<(), SketchError> {
    let window = window().ok_or(SketchError::NoWindow)?;
    let document = window.document().ok_or(SketchError::NoDocument)?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| SketchError::CanvasNotFound(canvas_id.to_string()))?
        .dyn_into()
        .map_err(|_| SketchError::CanvasNotFound(canvas_id.to_string()))?;

    let pairs = query_pairs(&window)?;
    let level = pairs
        .iter()
        .find(|(k, _)| k == "log")
        .and_then(|(_, v)| v.parse().ok())
        .unwrap_or(Level::INFO);
    logging::init(level);

    let config = SketchConfig::from_query_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .unwrap_or_else(|err| {
            warn!(%err, "bad query configuration, using defaults");
            SketchConfig::default()
        });
    let seed = config.seed.unwrap_or_else(clock_seed);
    info!(seed, waves = config.wave_count, "starting sketch");

    let ctx: Ctx2d = canvas
        .get_context("2d")?
        .ok_or(SketchError::ContextUnavailable)?
        .dyn_into()
        .map_err(|_| SketchError::ContextUnavailable)?;

    // Resize canvas to fit window
    fit_to_window(&window, &canvas);
    let resize_closure = {
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || {
            if let Some(w) = web_sys::window() {
                fit_to_window(&w, &canvas);
            }
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    let sketch = Rc::new(RefCell::new(Sketch::new(config, seed)?));
    let button = controls::reset_button(&document, sketch.clone())?;
    controls::shape_toggle(&canvas, sketch.clone())?;

    // Animation loop
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let mut frame = Frame::new();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let viewport = Viewport::new(canvas.width() as f64, canvas.height() as f64);
        sketch.borrow_mut().tick(viewport, &mut frame);
        if let Err(err) = replay(&ctx, viewport, &frame) {
            warn!(?err, "frame replay failed");
        }
        controls::set_pressed(&button, frame.button_pressed);

        // schedule next
        if let Err(err) = request_frame(&f) {
            warn!(?err, "animation loop stopped");
        }
    }) as Box<dyn FnMut()>));

    request_frame(&g)?;
    Ok(())
}

fn request_frame(f: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Result<i32, JsValue> {
    let window = window().ok_or("no window")?;
    let slot = f.borrow();
    let callback = slot.as_ref().ok_or("frame callback missing")?;
    window.request_animation_frame(callback.as_ref().unchecked_ref())
}

/// Draw one recorded frame onto the 2D context.
pub fn replay(ctx: &Ctx2d, viewport: Viewport, frame: &Frame) -> Result<(), JsValue> {
    for command in frame.commands() {
        match command {
            DrawCommand::Background(gray) => {
                ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
                let g = gray.clamp(0.0, 255.0).round() as u8;
                ctx.set_fill_style_str(&format!("rgb({g}, {g}, {g})"));
                ctx.fill_rect(0.0, 0.0, viewport.width, viewport.height);
            }
            DrawCommand::Translate(offset) => ctx.translate(offset.x, offset.y)?,
            DrawCommand::Polygon { stroke, points } => {
                let Some((first, rest)) = points.split_first() else {
                    continue;
                };
                ctx.set_stroke_style_str(&stroke.to_css());
                ctx.begin_path();
                ctx.move_to(first.x, first.y);
                for p in rest {
                    ctx.line_to(p.x, p.y);
                }
                ctx.close_path();
                ctx.stroke();
            }
            DrawCommand::Dot { stroke, at } => {
                ctx.set_fill_style_str(&stroke.to_css());
                ctx.fill_rect(at.x - 0.5, at.y - 0.5, 1.0, 1.0);
            }
        }
    }
    Ok(())
}

fn fit_to_window(window: &Window, canvas: &HtmlCanvasElement) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64());
    let h = window.inner_height().ok().and_then(|v| v.as_f64());
    if let (Some(w), Some(h)) = (w, h) {
        canvas.set_width(w as u32);
        canvas.set_height(h as u32);
    }
}

fn query_pairs(window: &Window) -> Result<Vec<(String, String)>, SketchError> {
    let search = window.location().search()?;
    let params = UrlSearchParams::new_with_str(&search)?;
    Ok(QUERY_KEYS
        .iter()
        .filter_map(|key| params.get(key).map(|value| (key.to_string(), value)))
        .collect())
}

fn clock_seed() -> u64 {
    let now = js_sys::Date::now() as u64;
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    now ^ (noise << 32)
}
