// ============================================================================
// APP - Aplicación principal
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::app_state::AppState;
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación montada en #app
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::browser();

        // Varias notificaciones seguidas => un solo re-render en el siguiente tick
        let scheduled = Rc::new(Cell::new(false));
        state.subscribe_to_changes(move || {
            if scheduled.replace(true) {
                return;
            }
            let scheduled = scheduled.clone();
            Timeout::new(0, move || {
                scheduled.set(false);
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self { state, root })
    }

    /// Renderizar aplicación
    pub fn render(&mut self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let view = render_app(&self.state)?;
        append_child(&self.root, &view)
    }
}
