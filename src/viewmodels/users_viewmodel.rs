// ============================================================================
// USERS VIEWMODEL - Gestión de usuarios (solo admin)
// ============================================================================
// La lista es una copia de solo lectura de GET /users. Tras crear un usuario
// se vuelve a pedir la lista (sin inserción optimista).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::user::UserRecord;
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;
use crate::state::reactivity::ChangeNotifier;

#[derive(Clone)]
pub struct UsersViewModel {
    api: ApiClient,
    notifier: ChangeNotifier,
    users: Rc<RefCell<Vec<UserRecord>>>,
    email: Rc<RefCell<String>>,
    password: Rc<RefCell<String>>,
    creating: Rc<RefCell<bool>>,
    error: Rc<RefCell<Option<String>>>,
}

impl UsersViewModel {
    pub fn new(api: ApiClient, notifier: ChangeNotifier) -> Self {
        Self {
            api,
            notifier,
            users: Rc::new(RefCell::new(Vec::new())),
            email: Rc::new(RefCell::new(String::new())),
            password: Rc::new(RefCell::new(String::new())),
            creating: Rc::new(RefCell::new(false)),
            error: Rc::new(RefCell::new(None)),
        }
    }

    pub fn users(&self) -> Vec<UserRecord> {
        self.users.borrow().clone()
    }

    pub fn email(&self) -> String {
        self.email.borrow().clone()
    }

    pub fn set_email(&self, email: &str) {
        *self.email.borrow_mut() = email.to_string();
    }

    pub fn password(&self) -> String {
        self.password.borrow().clone()
    }

    pub fn set_password(&self, password: &str) {
        *self.password.borrow_mut() = password.to_string();
    }

    pub fn is_creating(&self) -> bool {
        *self.creating.borrow()
    }

    pub fn error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    /// Recargar la lista. Si falla se conserva la última lista buena.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        let result = self.api.fetch_users().await;
        match &result {
            Ok(users) => {
                log::info!("👥 [USERS] {} usuarios cargados", users.len());
                *self.users.borrow_mut() = users.clone();
                *self.error.borrow_mut() = None;
            }
            Err(e) => {
                log::error!("❌ [USERS] Error cargando usuarios: {}", e);
                *self.error.borrow_mut() = Some(e.to_string());
            }
        }
        self.notifier.notify();
        result.map(|_| ())
    }

    /// Crear usuario con el formulario; si sale bien, limpiar y recargar
    pub async fn create(&self) -> Result<(), ApiError> {
        if self.is_creating() {
            return Ok(());
        }

        let email = self.email();
        let password = self.password();
        *self.creating.borrow_mut() = true;
        *self.error.borrow_mut() = None;
        self.notifier.notify();

        let created = self.api.create_user(&email, &password).await;

        *self.creating.borrow_mut() = false;
        if let Err(e) = created {
            log::error!("❌ [USERS] No se pudo crear {}: {}", email, e);
            *self.error.borrow_mut() = Some(e.to_string());
            self.notifier.notify();
            return Err(e);
        }

        log::info!("✅ [USERS] Usuario {} creado", email);
        self.email.borrow_mut().clear();
        self.password.borrow_mut().clear();
        self.notifier.notify();

        // La recarga sale solo cuando la creación ya terminó
        self.refresh().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::Role;
    use crate::services::testing::{client_with, MockTransport};
    use crate::services::transport::HttpMethod;

    const TWO_USERS: &str = r#"[
        {"id":1,"email":"admin@docuexpress.com","role":"admin","credits":0},
        {"id":2,"email":"ana@correo.mx","role":"user","credits":5}
    ]"#;

    fn viewmodel(mock: &MockTransport) -> UsersViewModel {
        UsersViewModel::new(client_with(mock, Some("t1")), ChangeNotifier::new())
    }

    #[tokio::test]
    async fn refresh_loads_the_list() {
        let mock = MockTransport::new();
        mock.respond(200, TWO_USERS);
        let vm = viewmodel(&mock);

        vm.refresh().await.unwrap();

        let users = vm.users();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].role, Role::User);
        assert_eq!(users[1].credits, 5);
    }

    #[tokio::test]
    async fn create_clears_form_and_refetches_exactly_once() {
        let mock = MockTransport::new();
        mock.respond(200, TWO_USERS);
        mock.respond(201, r#"{"id":3,"email":"nuevo@correo.mx","role":"user","credits":0}"#);
        mock.respond(
            200,
            r#"[{"id":1,"email":"admin@docuexpress.com","role":"admin","credits":0},
                {"id":2,"email":"ana@correo.mx","role":"user","credits":5},
                {"id":3,"email":"nuevo@correo.mx","role":"user","credits":0}]"#,
        );
        let vm = viewmodel(&mock);
        vm.refresh().await.unwrap();
        vm.set_email("nuevo@correo.mx");
        vm.set_password("temporal");

        vm.create().await.unwrap();

        assert_eq!(mock.count(HttpMethod::Get, "/api/users"), 2);
        assert_eq!(mock.count(HttpMethod::Post, "/api/users"), 1);
        let methods: Vec<HttpMethod> = mock.requests().iter().map(|r| r.method).collect();
        assert_eq!(methods, vec![HttpMethod::Get, HttpMethod::Post, HttpMethod::Get]);
        assert_eq!(vm.email(), "");
        assert_eq!(vm.password(), "");
        assert_eq!(vm.users().len(), 3);
    }

    #[tokio::test]
    async fn failed_create_keeps_list_and_form() {
        let mock = MockTransport::new();
        mock.respond(200, TWO_USERS);
        mock.respond(409, r#"{"message":"El correo ya existe"}"#);
        let vm = viewmodel(&mock);
        vm.refresh().await.unwrap();
        vm.set_email("ana@correo.mx");
        vm.set_password("x");

        let err = vm.create().await.unwrap_err();

        assert_eq!(err.to_string(), "El correo ya existe");
        assert_eq!(vm.error().as_deref(), Some("El correo ya existe"));
        assert_eq!(vm.users().len(), 2);
        assert_eq!(vm.email(), "ana@correo.mx");
        assert_eq!(mock.count(HttpMethod::Get, "/api/users"), 1);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_last_good_list() {
        let mock = MockTransport::new();
        mock.respond(200, TWO_USERS);
        mock.respond(403, r#"{"message":"Invalid token"}"#);
        let vm = viewmodel(&mock);

        vm.refresh().await.unwrap();
        assert!(vm.refresh().await.is_err());

        assert_eq!(vm.users().len(), 2);
        assert_eq!(vm.error().as_deref(), Some("Invalid token"));
    }
}
