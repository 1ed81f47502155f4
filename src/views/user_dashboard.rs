use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::viewmodels::{DashboardViewModel, UserSection};
use crate::views::dashboard::render_dashboard;

/// Dashboard del usuario: consultas, su historial y su saldo
pub fn render_user_dashboard(
    user_email: &str,
    dashboard: &DashboardViewModel<UserSection>,
) -> Result<Element, JsValue> {
    render_dashboard("📄 DocuExpress", user_email, dashboard)
}
