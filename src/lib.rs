// ============================================================================
// DOCUEXPRESS WEB - CLIENTE WASM (RUST PURO + MVVM)
// ============================================================================
// - Views: funciones que renderizan DOM (solo wasm32)
// - ViewModels: estado de pantallas/paneles + acciones
// - Services: SOLO comunicación HTTP con el backend
// - State: sesión, notificaciones y router con Rc<RefCell>
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod views;
#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use browser::*;

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::cell::RefCell;
    use wasm_bindgen::prelude::*;
    use crate::app::App;
    use crate::config::CONFIG;

    // Instancia global de la App (un solo hilo en el navegador)
    thread_local! {
        static APP: RefCell<Option<App>> = RefCell::new(None);
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let level = if CONFIG.is_logging_enabled() {
            log::Level::Debug
        } else {
            log::Level::Error
        };
        wasm_logger::init(wasm_logger::Config::new(level));
        let entorno = if CONFIG.is_production() { "producción" } else { "desarrollo" };
        log::info!("🚀 DocuExpress ({}) - API en {:?}", entorno, CONFIG.api_base_url());

        let mut app = App::new()?;
        app.render()?;

        APP.with(|cell| {
            *cell.borrow_mut() = Some(app);
        });

        Ok(())
    }

    /// Re-render completo de la app
    pub fn rerender_app() {
        APP.with(|cell| {
            if let Some(app) = cell.borrow_mut().as_mut() {
                if let Err(e) = app.render() {
                    log::error!("❌ [RERENDER] Error renderizando: {:?}", e);
                }
            } else {
                log::warn!("⚠️ [RERENDER] App no está inicializada");
            }
        });
    }

    /// Re-render invocable desde JavaScript
    #[wasm_bindgen]
    pub fn rerender_app_wasm() {
        rerender_app();
    }
}
