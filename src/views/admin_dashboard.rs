// ============================================================================
// ADMIN DASHBOARD - Consultas, usuarios, créditos y bitácora completa
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::viewmodels::{AdminSection, DashboardViewModel};
use crate::views::dashboard::render_dashboard;

/// Renderizar dashboard admin completo
pub fn render_admin_dashboard(
    user_email: &str,
    dashboard: &DashboardViewModel<AdminSection>,
) -> Result<Element, JsValue> {
    render_dashboard("👔 DocuExpress · Administración", user_email, dashboard)
}
