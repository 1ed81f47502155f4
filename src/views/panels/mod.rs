pub mod api_query;
pub mod users;
pub mod credits;
pub mod logs;

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::viewmodels::Panel;

pub use api_query::render_api_query_panel;
pub use users::render_users_panel;
pub use credits::render_credits_panel;
pub use logs::render_logs_panel;

/// Renderizar el panel activo de un dashboard
pub fn render_panel(panel: &Panel) -> Result<Element, JsValue> {
    match panel {
        Panel::ApiQuery(vm) => render_api_query_panel(vm),
        Panel::Users(vm) => render_users_panel(vm),
        Panel::Credits(vm) => render_credits_panel(vm),
        Panel::Logs(vm) => render_logs_panel(vm),
    }
}
