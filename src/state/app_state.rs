// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================
// Une sesión, cliente API, notificaciones y router. Todo lo demás es estado
// local de cada pantalla/panel.
// ============================================================================

use std::rc::Rc;
use crate::services::api_client::ApiClient;
use crate::services::transport::HttpTransport;
use crate::state::reactivity::ChangeNotifier;
use crate::state::session_state::SessionContext;
use crate::utils::storage::TokenStore;
use crate::viewmodels::router::Router;

#[derive(Clone)]
pub struct AppState {
    pub session: SessionContext,
    pub api: ApiClient,
    pub notifier: ChangeNotifier,
    pub router: Router,
}

impl AppState {
    pub fn new(api_base_url: &str, transport: Rc<dyn HttpTransport>, store: Rc<dyn TokenStore>) -> Self {
        let session = SessionContext::new(store);
        let api = ApiClient::new(api_base_url, transport, session.clone());
        let notifier = ChangeNotifier::new();
        let router = Router::new(api.clone(), notifier.clone());
        Self {
            session,
            api,
            notifier,
            router,
        }
    }

    /// Estado del navegador: fetch (gloo-net) + localStorage + CONFIG
    #[cfg(target_arch = "wasm32")]
    pub fn browser() -> Self {
        use crate::config::CONFIG;
        use crate::services::transport::GlooTransport;
        use crate::utils::storage::LocalStorageTokenStore;

        Self::new(
            CONFIG.api_base_url(),
            Rc::new(GlooTransport),
            Rc::new(LocalStorageTokenStore::new()),
        )
    }

    /// Suscribirse a cambios de estado (re-render)
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.notifier.subscribe(callback);
    }
}
