// ============================================================================
// SESSION STATE - Sesión del usuario + token persistido
// ============================================================================
// Anonymous --login--> Authenticated{Admin|User} --logout--> Anonymous
// Token y usuario se establecen juntos: si hay usuario, hay token guardado.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::auth::{Role, SessionUser};
use crate::services::error::ApiError;
use crate::utils::storage::{redact_token, TokenStore};

/// Estado de sesión
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated { user: SessionUser },
}

impl Session {
    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { user } => Some(user),
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }
}

/// Contexto de sesión compartido. Se inyecta en el ApiClient,
/// que lee el token de aquí al construir cada petición.
#[derive(Clone)]
pub struct SessionContext {
    session: Rc<RefCell<Session>>,
    store: Rc<dyn TokenStore>,
}

impl SessionContext {
    /// Arranca siempre como anónimo: solo el token sobrevive a una recarga
    pub fn new(store: Rc<dyn TokenStore>) -> Self {
        Self {
            session: Rc::new(RefCell::new(Session::Anonymous)),
            store,
        }
    }

    /// Obtener sesión actual
    pub fn current(&self) -> Session {
        self.session.borrow().clone()
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.session.borrow().user().cloned()
    }

    /// Token persistido (lo lee cada petición saliente)
    pub fn token(&self) -> Option<String> {
        self.store.load_token()
    }

    /// Establecer sesión tras un login verificado.
    /// Si el token no se puede guardar, la sesión sigue como estaba.
    pub fn establish(&self, token: &str, user: SessionUser) -> Result<(), ApiError> {
        self.store.save_token(token).map_err(ApiError::Storage)?;
        log::info!(
            "🔐 [SESSION] Sesión iniciada: {} ({}) token {}",
            user.email,
            user.role,
            redact_token(token)
        );
        *self.session.borrow_mut() = Session::Authenticated { user };
        Ok(())
    }

    /// Logout - limpiar token y usuario. Idempotente y nunca falla.
    pub fn clear(&self) {
        if let Err(e) = self.store.clear_token() {
            log::warn!("⚠️ [SESSION] No se pudo borrar el token: {}", e);
        }
        let was_authenticated = self.session.borrow().is_authenticated();
        *self.session.borrow_mut() = Session::Anonymous;
        if was_authenticated {
            log::info!("👋 [SESSION] Sesión cerrada");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryTokenStore;

    fn admin() -> SessionUser {
        SessionUser {
            email: "admin@docuexpress.com".to_string(),
            role: Role::Admin,
        }
    }

    #[test]
    fn starts_anonymous_even_with_a_stored_token() {
        let ctx = SessionContext::new(Rc::new(MemoryTokenStore::with_token("viejo")));
        assert_eq!(ctx.current(), Session::Anonymous);
        assert_eq!(ctx.token().as_deref(), Some("viejo"));
    }

    #[test]
    fn establish_stores_token_and_user_together() {
        let ctx = SessionContext::new(Rc::new(MemoryTokenStore::new()));
        ctx.establish("t1", admin()).unwrap();

        assert_eq!(ctx.token().as_deref(), Some("t1"));
        assert_eq!(ctx.current().role(), Some(Role::Admin));
    }

    #[test]
    fn failed_token_write_leaves_session_anonymous() {
        struct BrokenStore;
        impl TokenStore for BrokenStore {
            fn load_token(&self) -> Option<String> {
                None
            }
            fn save_token(&self, _token: &str) -> Result<(), String> {
                Err("cuota excedida".to_string())
            }
            fn clear_token(&self) -> Result<(), String> {
                Ok(())
            }
        }

        let ctx = SessionContext::new(Rc::new(BrokenStore));
        let err = ctx.establish("t1", admin()).unwrap_err();
        assert_eq!(err, ApiError::Storage("cuota excedida".to_string()));
        assert!(!ctx.current().is_authenticated());
    }

    #[test]
    fn clear_is_idempotent() {
        let ctx = SessionContext::new(Rc::new(MemoryTokenStore::new()));
        ctx.establish("t1", admin()).unwrap();

        ctx.clear();
        ctx.clear();

        assert_eq!(ctx.current(), Session::Anonymous);
        assert_eq!(ctx.token(), None);
    }
}
