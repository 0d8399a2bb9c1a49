//! Browser front end
//!
//! Mounts a canvas inside a container element and runs the particle field
//! on it through eframe, one frame per display refresh.

mod app;
mod painter;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::FieldConfig;
use crate::surface::Bounds;
use app::FieldApp;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    // Initialize tracing for browser console
    tracing_wasm::set_as_global_default();
}

fn js_error(msg: impl AsRef<str>) -> JsValue {
    js_sys::Error::new(msg.as_ref()).into()
}

/// Running background; call `stop()` when the container goes away
#[wasm_bindgen]
pub struct FieldHandle {
    runner: eframe::WebRunner,
    canvas: web_sys::HtmlCanvasElement,
}

#[wasm_bindgen]
impl FieldHandle {
    /// Tear down the runner, end the frame chain and detach the canvas
    pub fn stop(&self) {
        info!("Stopping particle field");
        self.runner.destroy();
        self.canvas.remove();
    }

    #[wasm_bindgen(js_name = hasPanicked)]
    pub fn has_panicked(&self) -> bool {
        self.runner.has_panicked()
    }
}

/// Start a particle background inside the element with id `container_id`.
///
/// `config_json` is an optional JSON object overriding [`FieldConfig`]
/// defaults.
#[wasm_bindgen(js_name = startParticleField)]
pub async fn start_particle_field(
    container_id: String,
    config_json: Option<String>,
) -> Result<FieldHandle, JsValue> {
    let config = match config_json.as_deref() {
        Some(json) => FieldConfig::from_json(json).map_err(|e| js_error(e.to_string()))?,
        None => FieldConfig::default(),
    };

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| js_error("no document"))?;
    let container = document
        .get_element_by_id(&container_id)
        .ok_or_else(|| js_error(format!("no element with id {container_id:?}")))?
        .dyn_into::<web_sys::HtmlElement>()?;

    let canvas = document
        .create_element("canvas")?
        .dyn_into::<web_sys::HtmlCanvasElement>()?;
    let style = canvas.style();
    style.set_property("display", "block")?;
    style.set_property("width", "100%")?;
    style.set_property("height", "100%")?;
    container.append_child(&canvas)?;

    let bounds = Bounds::new(container.offset_width() as f32, container.offset_height() as f32);
    info!(container = %container_id, %bounds, particles = config.particle_count, "Starting particle field");

    let mut rng = StdRng::from_entropy();
    let runner = eframe::WebRunner::new();
    runner
        .start(
            canvas.clone(),
            eframe::WebOptions::default(),
            Box::new(move |_cc| Ok(Box::new(FieldApp::new(bounds, config, &mut rng)))),
        )
        .await?;

    Ok(FieldHandle { runner, canvas })
}
