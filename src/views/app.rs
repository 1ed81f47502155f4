// ============================================================================
// APP VIEW - Router de pantallas
// ============================================================================
// login | dashboard admin | dashboard usuario, según la sesión.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::state::app_state::AppState;
use crate::viewmodels::MountedScreen;
use crate::views::{render_admin_dashboard, render_login, render_user_dashboard};

/// Renderizar la pantalla que toca
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let (screen, newly_mounted) = state.router.sync();

    // Carga inicial del panel por defecto del dashboard recién montado
    if newly_mounted {
        if let Some(panel) = screen.initial_panel() {
            spawn_local(async move { panel.mount().await });
        }
    }

    let email = state
        .session
        .user()
        .map(|u| u.email)
        .unwrap_or_default();

    match &screen {
        MountedScreen::Login(vm) => render_login(vm),
        MountedScreen::Admin(dashboard) => render_admin_dashboard(&email, dashboard),
        MountedScreen::User(dashboard) => render_user_dashboard(&email, dashboard),
    }
}
