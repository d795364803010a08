use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, HtmlButtonElement, HtmlCanvasElement};

use crate::error::SketchError;
use crate::sketch::Sketch;

const BUTTON_STYLE: [(&str, &str); 9] = [
    ("position", "absolute"),
    ("left", "20px"),
    ("top", "20px"),
    ("background-color", "rgba(255, 255, 255, 0.2)"),
    ("border", "none"),
    ("border-radius", "10px"),
    ("color", "#fff"),
    ("font-size", "20px"),
    ("transform", "scale(1)"),
];

/// Create the Reset button, wire it to `Sketch::start_reset` and return it
/// so the frame loop can restyle it.
pub fn reset_button(document: &Document, sketch: Rc<RefCell<Sketch>>) -> Result<HtmlButtonElement, SketchError> {
    let button: HtmlButtonElement = document
        .create_element("button")?
        .dyn_into()
        .map_err(|_| SketchError::Dom("created element is not a button".into()))?;
    button.set_text_content(Some("Reset"));

    let style = button.style();
    for (name, value) in BUTTON_STYLE {
        style.set_property(name, value)?;
    }

    let on_press = {
        let button = button.clone();
        Closure::wrap(Box::new(move || {
            sketch.borrow_mut().start_reset();
            set_pressed(&button, true);
        }) as Box<dyn FnMut()>)
    };
    button.add_event_listener_with_callback("mousedown", on_press.as_ref().unchecked_ref())?;
    on_press.forget();

    document
        .body()
        .ok_or_else(|| SketchError::Dom("document has no body".into()))?
        .append_child(&button)?;
    Ok(button)
}

/// Toggle the distortion mode whenever the canvas is clicked.
pub fn shape_toggle(canvas: &HtmlCanvasElement, sketch: Rc<RefCell<Sketch>>) -> Result<(), SketchError> {
    let on_click = Closure::wrap(Box::new(move || {
        sketch.borrow_mut().toggle_shape();
    }) as Box<dyn FnMut()>);
    canvas.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

pub fn set_pressed(button: &HtmlButtonElement, pressed: bool) {
    let transform = if pressed { "scale(0.9)" } else { "scale(1)" };
    if let Err(err) = button.style().set_property("transform", transform) {
        tracing::warn!(?err, "failed to restyle reset button");
    }
}
