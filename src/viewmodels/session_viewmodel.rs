// ============================================================================
// SESSION VIEWMODEL - FORMULARIO DE LOGIN
// ============================================================================
// El formulario de login vive aquí. La sesión solo cambia cuando el backend
// devuelve token + usuario; cualquier fallo deja todo como estaba.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::auth::SessionUser;
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;
use crate::state::reactivity::ChangeNotifier;

/// ViewModel de sesión
#[derive(Clone)]
pub struct SessionViewModel {
    api: ApiClient,
    notifier: ChangeNotifier,
    email: Rc<RefCell<String>>,
    password: Rc<RefCell<String>>,
    loading: Rc<RefCell<bool>>,
    error: Rc<RefCell<Option<String>>>,
}

impl SessionViewModel {
    pub fn new(api: ApiClient, notifier: ChangeNotifier) -> Self {
        Self {
            api,
            notifier,
            email: Rc::new(RefCell::new(String::new())),
            password: Rc::new(RefCell::new(String::new())),
            loading: Rc::new(RefCell::new(false)),
            error: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set_email(&self, email: &str) {
        *self.email.borrow_mut() = email.to_string();
    }

    pub fn email(&self) -> String {
        self.email.borrow().clone()
    }

    pub fn set_password(&self, password: &str) {
        *self.password.borrow_mut() = password.to_string();
    }

    pub fn password(&self) -> String {
        self.password.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    /// Login con los datos del formulario.
    /// `Ok(None)` si ya hay un login en curso.
    pub async fn login(&self) -> Result<Option<SessionUser>, ApiError> {
        if self.is_loading() {
            log::debug!("⏳ [LOGIN] Login en curso, se ignora el reintento");
            return Ok(None);
        }

        let email = self.email();
        let password = self.password();
        *self.loading.borrow_mut() = true;
        *self.error.borrow_mut() = None;
        self.notifier.notify();

        let result = self.authenticate(&email, &password).await;

        *self.loading.borrow_mut() = false;
        match &result {
            Ok(user) => {
                log::info!("✅ [LOGIN] {} autenticado como {}", user.email, user.role);
                self.password.borrow_mut().clear();
            }
            Err(e) => {
                log::error!("❌ [LOGIN] Falló el login de {}: {}", email, e);
                *self.error.borrow_mut() = Some(e.to_string());
            }
        }
        self.notifier.notify();

        result.map(Some)
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<SessionUser, ApiError> {
        let (token, user) = self.api.login(email, password).await?;
        self.api.session().establish(&token, user.clone())?;
        Ok(user)
    }
}
