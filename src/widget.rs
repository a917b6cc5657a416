//! Browser widget boundary
//!
//! Wires the simulator to a host page: finds (or creates) the canvas,
//! sizes it to its container, runs the frame loop, keeps the canvas in
//! step with window resizes, and tears everything down on `dispose`.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Element, HtmlCanvasElement, HtmlInputElement};

use crate::config::PhysicsConfig;
use crate::renderer::CanvasRenderer;
use crate::runloop::{LoopHandle, SimLoop};
use crate::scheduler::RafScheduler;
use crate::simulator::HexagonBallSimulator;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// A hexagon-and-ball animation mounted on a host element
///
/// The element may be a canvas (used as-is) or any container (a canvas is
/// created and appended). The optional config is a JSON object with the
/// fields of [`PhysicsConfig`]; missing or malformed fields take defaults.
#[wasm_bindgen]
pub struct HexagonWidget {
    sim_loop: SimLoop<RafScheduler>,
    container: Element,
    canvas: HtmlCanvasElement,
    resize_listener: Option<Closure<dyn FnMut()>>,
    rotation_control: Option<(HtmlInputElement, Closure<dyn FnMut()>)>,
}

#[wasm_bindgen]
impl HexagonWidget {
    #[wasm_bindgen(constructor)]
    pub fn new(element_id: &str, config_json: Option<String>) -> Result<HexagonWidget, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let container = document
            .get_element_by_id(element_id)
            .ok_or_else(|| JsValue::from_str("host element not found"))?;

        let canvas = match container.clone().dyn_into::<HtmlCanvasElement>() {
            Ok(canvas) => canvas,
            Err(element) => {
                let canvas: HtmlCanvasElement =
                    document.create_element("canvas")?.dyn_into()?;
                element.append_child(&canvas)?;
                canvas
            }
        };

        let (width, height) = measure(&container);
        canvas.set_width(width);
        canvas.set_height(height);

        let config = match config_json {
            Some(json) => PhysicsConfig::from_json(&json),
            None => PhysicsConfig::default(),
        };
        let seed = js_sys::Date::now() as u64;
        let simulator = HexagonBallSimulator::new(width as f32, height as f32, config, seed);
        log::info!("hexagon widget mounted on #{element_id} ({width}x{height}, seed {seed})");

        let renderer = CanvasRenderer::new(canvas.clone())?;
        let sim_loop = SimLoop::new(
            RafScheduler::new(),
            simulator,
            Box::new(move |sim| renderer.render(sim)),
        );

        let mut widget = HexagonWidget {
            sim_loop,
            container,
            canvas,
            resize_listener: None,
            rotation_control: None,
        };
        widget.attach_resize_listener()?;
        widget.sim_loop.start();
        Ok(widget)
    }

    /// Adjust the hexagon rotation speed live (radians per step)
    pub fn set_rotation_speed(&self, angular_speed: f32) {
        self.sim_loop
            .with_simulator(|sim| sim.set_rotation_speed(angular_speed));
    }

    /// The effective, sanitized configuration as JSON
    pub fn config_json(&self) -> String {
        self.sim_loop.with_simulator(|sim| sim.config().to_json())
    }

    /// Drive rotation speed from a range input's value
    pub fn bind_rotation_control(&mut self, input_id: &str) -> Result<(), JsValue> {
        self.unbind_rotation_control();
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let input: HtmlInputElement = document
            .get_element_by_id(input_id)
            .ok_or_else(|| JsValue::from_str("rotation control not found"))?
            .dyn_into()?;

        let handle = self.sim_loop.handle();
        let input_clone = input.clone();
        let listener = Closure::<dyn FnMut()>::new(move || {
            let value = input_clone.value_as_number() as f32;
            let _ = handle.with_simulator(|sim| sim.set_rotation_speed(value));
        });
        input.add_event_listener_with_callback("input", listener.as_ref().unchecked_ref())?;
        self.rotation_control = Some((input, listener));
        Ok(())
    }

    /// Stop the frame loop and detach all listeners
    pub fn dispose(&mut self) {
        self.sim_loop.stop();
        if let Some(listener) = self.resize_listener.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "resize",
                    listener.as_ref().unchecked_ref(),
                );
            }
        }
        self.unbind_rotation_control();
        log::info!("hexagon widget disposed");
    }
}

impl HexagonWidget {
    fn attach_resize_listener(&mut self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let container = self.container.clone();
        let canvas = self.canvas.clone();
        let handle: LoopHandle<RafScheduler> = self.sim_loop.handle();

        let listener = Closure::<dyn FnMut()>::new(move || {
            let (width, height) = measure(&container);
            canvas.set_width(width);
            canvas.set_height(height);
            let _ = handle.with_simulator(|sim| sim.resize(width as f32, height as f32));
        });
        window.add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())?;
        self.resize_listener = Some(listener);
        Ok(())
    }

    fn unbind_rotation_control(&mut self) {
        if let Some((input, listener)) = self.rotation_control.take() {
            let _ = input
                .remove_event_listener_with_callback("input", listener.as_ref().unchecked_ref());
        }
    }
}

impl Drop for HexagonWidget {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn measure(element: &Element) -> (u32, u32) {
    (
        element.client_width().max(0) as u32,
        element.client_height().max(0) as u32,
    )
}
