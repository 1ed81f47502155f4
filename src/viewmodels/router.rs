// ============================================================================
// ROUTER - Pantalla según la sesión
// ============================================================================
// Anonymous -> login, Admin -> dashboard admin, User -> dashboard usuario.
// Al cambiar de pantalla se monta una nueva (estado local reiniciado).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::auth::Role;
use crate::services::api_client::ApiClient;
use crate::state::reactivity::ChangeNotifier;
use crate::state::session_state::Session;
use crate::viewmodels::dashboard_viewmodel::{AdminSection, DashboardViewModel, Panel, UserSection};
use crate::viewmodels::session_viewmodel::SessionViewModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    AdminDashboard,
    UserDashboard,
}

/// Función pura: qué pantalla corresponde a la sesión
pub fn route(session: &Session) -> Screen {
    match session {
        Session::Anonymous => Screen::Login,
        Session::Authenticated { user } => match user.role {
            Role::Admin => Screen::AdminDashboard,
            Role::User => Screen::UserDashboard,
        },
    }
}

/// Pantalla montada con su estado local
#[derive(Clone)]
pub enum MountedScreen {
    Login(SessionViewModel),
    Admin(DashboardViewModel<AdminSection>),
    User(DashboardViewModel<UserSection>),
}

impl MountedScreen {
    pub fn screen(&self) -> Screen {
        match self {
            MountedScreen::Login(_) => Screen::Login,
            MountedScreen::Admin(_) => Screen::AdminDashboard,
            MountedScreen::User(_) => Screen::UserDashboard,
        }
    }

    /// Panel que hay que cargar al montar la pantalla
    pub fn initial_panel(&self) -> Option<Panel> {
        match self {
            MountedScreen::Login(_) => None,
            MountedScreen::Admin(dashboard) => Some(dashboard.panel()),
            MountedScreen::User(dashboard) => Some(dashboard.panel()),
        }
    }
}

#[derive(Clone)]
pub struct Router {
    api: ApiClient,
    notifier: ChangeNotifier,
    mounted: Rc<RefCell<Option<MountedScreen>>>,
}

impl Router {
    pub fn new(api: ApiClient, notifier: ChangeNotifier) -> Self {
        Self {
            api,
            notifier,
            mounted: Rc::new(RefCell::new(None)),
        }
    }

    pub fn current_screen(&self) -> Screen {
        route(&self.api.session().current())
    }

    /// Alinear la pantalla montada con la sesión.
    /// Devuelve la pantalla y si se acaba de montar.
    pub fn sync(&self) -> (MountedScreen, bool) {
        let target = self.current_screen();
        if let Some(mounted) = self.mounted.borrow().as_ref() {
            if mounted.screen() == target {
                return (mounted.clone(), false);
            }
        }

        log::info!("🧭 [ROUTER] Montando pantalla {:?}", target);
        let api = self.api.clone();
        let notifier = self.notifier.clone();
        let screen = match target {
            Screen::Login => MountedScreen::Login(SessionViewModel::new(api, notifier)),
            Screen::AdminDashboard => MountedScreen::Admin(DashboardViewModel::new(api, notifier)),
            Screen::UserDashboard => MountedScreen::User(DashboardViewModel::new(api, notifier)),
        };
        *self.mounted.borrow_mut() = Some(screen.clone());
        (screen, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::SessionUser;
    use crate::services::testing::{client_with, MockTransport};

    fn authenticated(role: Role) -> Session {
        Session::Authenticated {
            user: SessionUser {
                email: "x@docuexpress.com".to_string(),
                role,
            },
        }
    }

    #[test]
    fn route_is_exhaustive_over_session() {
        assert_eq!(route(&Session::Anonymous), Screen::Login);
        assert_eq!(route(&authenticated(Role::Admin)), Screen::AdminDashboard);
        assert_eq!(route(&authenticated(Role::User)), Screen::UserDashboard);
    }

    #[tokio::test]
    async fn admin_login_lands_on_admin_dashboard_api_section() {
        let mock = MockTransport::new();
        mock.respond(
            200,
            r#"{"token":"t1","user":{"email":"admin@docuexpress.com","role":"admin"}}"#,
        );
        let api = client_with(&mock, None);
        let router = Router::new(api.clone(), ChangeNotifier::new());

        let (screen, mounted) = router.sync();
        assert!(mounted);
        let login = match screen {
            MountedScreen::Login(vm) => vm,
            _ => panic!("sin sesión debe mostrarse el login"),
        };
        login.set_email("admin@docuexpress.com");
        login.set_password("correcta");
        login.login().await.unwrap();

        let (screen, mounted) = router.sync();
        assert!(mounted);
        assert_eq!(api.session().token().as_deref(), Some("t1"));
        match screen {
            MountedScreen::Admin(dashboard) => assert_eq!(dashboard.active(), AdminSection::Api),
            _ => panic!("un admin debe ver el dashboard de admin"),
        }
    }

    #[test]
    fn sync_keeps_the_mounted_screen_while_session_is_stable() {
        let mock = MockTransport::new();
        let router = Router::new(client_with(&mock, None), ChangeNotifier::new());

        let (_, first) = router.sync();
        let (_, second) = router.sync();

        assert!(first);
        assert!(!second);
    }

    #[test]
    fn relogin_resets_dashboard_section() {
        let mock = MockTransport::new();
        let api = client_with(&mock, None);
        let router = Router::new(api.clone(), ChangeNotifier::new());
        let user = SessionUser {
            email: "ana@correo.mx".to_string(),
            role: Role::User,
        };

        api.session().establish("t1", user.clone()).unwrap();
        if let (MountedScreen::User(dashboard), _) = router.sync() {
            dashboard.select(UserSection::Credits);
            dashboard.logout();
        }
        assert_eq!(router.sync().0.screen(), Screen::Login);

        api.session().establish("t2", user).unwrap();
        match router.sync() {
            (MountedScreen::User(dashboard), true) => assert_eq!(dashboard.active(), UserSection::Api),
            _ => panic!("se esperaba un dashboard de usuario recién montado"),
        }
    }
}
