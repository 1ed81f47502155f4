// ============================================================================
// CREDITS VIEWMODEL - Saldo de créditos del usuario
// ============================================================================
// Una carga al montar, sin polling. El saldo solo lo descuenta el backend.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::services::api_client::ApiClient;
use crate::state::reactivity::ChangeNotifier;
use crate::viewmodels::refresh::best_effort;

#[derive(Clone)]
pub struct CreditsViewModel {
    api: ApiClient,
    notifier: ChangeNotifier,
    credits: Rc<RefCell<u64>>,
}

impl CreditsViewModel {
    pub fn new(api: ApiClient, notifier: ChangeNotifier) -> Self {
        Self {
            api,
            notifier,
            credits: Rc::new(RefCell::new(0)),
        }
    }

    pub fn credits(&self) -> u64 {
        *self.credits.borrow()
    }

    /// Carga best-effort: si falla se queda el valor anterior
    pub async fn refresh(&self) {
        if let Some(credits) = best_effort("créditos", self.api.fetch_my_credits()).await {
            log::info!("💳 [CREDITS] Saldo actual: {}", credits);
            *self.credits.borrow_mut() = credits;
            self.notifier.notify();
        }
    }
}
