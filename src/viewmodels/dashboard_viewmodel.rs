// ============================================================================
// DASHBOARD VIEWMODEL - Secciones de cada dashboard + panel activo
// ============================================================================
// El dashboard solo elige qué panel se muestra. Cambiar de sección crea
// un panel nuevo (equivale a montarlo otra vez: créditos y bitácora recargan).
// La sección no se persiste: cada dashboard nuevo arranca en "api".
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::logs::LogScope;
use crate::services::api_client::ApiClient;
use crate::state::reactivity::ChangeNotifier;
use crate::viewmodels::api_query_viewmodel::ApiQueryViewModel;
use crate::viewmodels::credits_viewmodel::CreditsViewModel;
use crate::viewmodels::logs_viewmodel::LogsViewModel;
use crate::viewmodels::users_viewmodel::UsersViewModel;

/// Panel montado dentro de un dashboard
#[derive(Clone)]
pub enum Panel {
    ApiQuery(ApiQueryViewModel),
    Users(UsersViewModel),
    Credits(CreditsViewModel),
    Logs(LogsViewModel),
}

impl Panel {
    /// Carga inicial del panel
    pub async fn mount(&self) {
        match self {
            Panel::ApiQuery(_) => {}
            Panel::Users(vm) => {
                // El error ya queda en el estado del panel para mostrarlo
                let _ = vm.refresh().await;
            }
            Panel::Credits(vm) => vm.refresh().await,
            Panel::Logs(vm) => vm.refresh().await,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Panel::ApiQuery(_) => "api",
            Panel::Users(_) => "users",
            Panel::Credits(_) => "credits",
            Panel::Logs(_) => "logs",
        }
    }
}

/// Sección de navegación de un dashboard
pub trait Section: Copy + Eq + Default + std::fmt::Debug + 'static {
    const ALL: &'static [Self];

    fn key(&self) -> &'static str;

    fn label(&self) -> &'static str;

    fn build_panel(&self, api: &ApiClient, notifier: &ChangeNotifier) -> Panel;
}

/// Secciones del dashboard de administrador
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminSection {
    #[default]
    Api,
    Users,
    Credits,
    Logs,
}

impl Section for AdminSection {
    const ALL: &'static [Self] = &[
        AdminSection::Api,
        AdminSection::Users,
        AdminSection::Credits,
        AdminSection::Logs,
    ];

    fn key(&self) -> &'static str {
        match self {
            AdminSection::Api => "api",
            AdminSection::Users => "users",
            AdminSection::Credits => "credits",
            AdminSection::Logs => "logs",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AdminSection::Api => "Consultas IMSS",
            AdminSection::Users => "Usuarios",
            AdminSection::Credits => "Créditos",
            AdminSection::Logs => "Bitácora",
        }
    }

    fn build_panel(&self, api: &ApiClient, notifier: &ChangeNotifier) -> Panel {
        let api = api.clone();
        let notifier = notifier.clone();
        match self {
            AdminSection::Api => Panel::ApiQuery(ApiQueryViewModel::new(api, notifier)),
            AdminSection::Users => Panel::Users(UsersViewModel::new(api, notifier)),
            AdminSection::Credits => Panel::Credits(CreditsViewModel::new(api, notifier)),
            AdminSection::Logs => Panel::Logs(LogsViewModel::new(api, notifier, LogScope::All)),
        }
    }
}

/// Secciones del dashboard de usuario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserSection {
    #[default]
    Api,
    History,
    Credits,
}

impl Section for UserSection {
    const ALL: &'static [Self] = &[UserSection::Api, UserSection::History, UserSection::Credits];

    fn key(&self) -> &'static str {
        match self {
            UserSection::Api => "api",
            UserSection::History => "history",
            UserSection::Credits => "credits",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            UserSection::Api => "Consultas IMSS",
            UserSection::History => "Mi historial",
            UserSection::Credits => "Mis créditos",
        }
    }

    fn build_panel(&self, api: &ApiClient, notifier: &ChangeNotifier) -> Panel {
        let api = api.clone();
        let notifier = notifier.clone();
        match self {
            UserSection::Api => Panel::ApiQuery(ApiQueryViewModel::new(api, notifier)),
            UserSection::History => Panel::Logs(LogsViewModel::new(api, notifier, LogScope::Mine)),
            UserSection::Credits => Panel::Credits(CreditsViewModel::new(api, notifier)),
        }
    }
}

#[derive(Clone)]
pub struct DashboardViewModel<S: Section> {
    api: ApiClient,
    notifier: ChangeNotifier,
    active: Rc<RefCell<S>>,
    panel: Rc<RefCell<Panel>>,
}

impl<S: Section> DashboardViewModel<S> {
    pub fn new(api: ApiClient, notifier: ChangeNotifier) -> Self {
        let active = S::default();
        let panel = active.build_panel(&api, &notifier);
        Self {
            api,
            notifier,
            active: Rc::new(RefCell::new(active)),
            panel: Rc::new(RefCell::new(panel)),
        }
    }

    pub fn active(&self) -> S {
        *self.active.borrow()
    }

    pub fn panel(&self) -> Panel {
        self.panel.borrow().clone()
    }

    /// Cambiar de sección. Devuelve el panel nuevo, que hay que montar;
    /// `None` si ya era la sección activa.
    pub fn select(&self, section: S) -> Option<Panel> {
        if self.active() == section {
            return None;
        }
        log::debug!("🧭 [DASHBOARD] Sección {:?} -> {:?}", self.active(), section);
        let panel = section.build_panel(&self.api, &self.notifier);
        *self.active.borrow_mut() = section;
        *self.panel.borrow_mut() = panel.clone();
        self.notifier.notify();
        Some(panel)
    }

    /// Cerrar sesión desde el dashboard
    pub fn logout(&self) {
        log::info!("🚪 [DASHBOARD] Logout");
        self.api.session().clear();
        self.notifier.notify();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{client_with, MockTransport};

    #[test]
    fn dashboards_start_on_api_section() {
        let mock = MockTransport::new();
        let api = client_with(&mock, Some("t1"));

        let admin = DashboardViewModel::<AdminSection>::new(api.clone(), ChangeNotifier::new());
        let user = DashboardViewModel::<UserSection>::new(api, ChangeNotifier::new());

        assert_eq!(admin.active(), AdminSection::Api);
        assert_eq!(user.active(), UserSection::Api);
        assert_eq!(admin.panel().name(), "api");
    }

    #[test]
    fn user_history_is_my_logs() {
        let mock = MockTransport::new();
        let dashboard =
            DashboardViewModel::<UserSection>::new(client_with(&mock, Some("t1")), ChangeNotifier::new());

        let panel = dashboard.select(UserSection::History).unwrap();

        match panel {
            Panel::Logs(vm) => assert_eq!(vm.scope(), LogScope::Mine),
            _ => panic!("history debe montar la bitácora"),
        }
        assert!(dashboard.select(UserSection::History).is_none());
    }

    #[tokio::test]
    async fn reselecting_credits_mounts_a_fresh_panel() {
        let mock = MockTransport::new();
        mock.respond(200, r#"{"credits":4}"#);
        mock.respond(200, r#"{"credits":3}"#);
        let dashboard =
            DashboardViewModel::<AdminSection>::new(client_with(&mock, Some("t1")), ChangeNotifier::new());

        dashboard.select(AdminSection::Credits).unwrap().mount().await;
        dashboard.select(AdminSection::Logs);
        let panel = dashboard.select(AdminSection::Credits).unwrap();
        match &panel {
            Panel::Credits(vm) => assert_eq!(vm.credits(), 0),
            _ => panic!("se esperaba el panel de créditos"),
        }
        panel.mount().await;

        match dashboard.panel() {
            Panel::Credits(vm) => assert_eq!(vm.credits(), 3),
            _ => panic!("se esperaba el panel de créditos"),
        }
    }

    #[test]
    fn logout_is_idempotent() {
        let mock = MockTransport::new();
        let dashboard =
            DashboardViewModel::<UserSection>::new(client_with(&mock, Some("t1")), ChangeNotifier::new());

        dashboard.logout();
        dashboard.logout();

        assert!(!dashboard.api.session().current().is_authenticated());
        assert_eq!(dashboard.api.session().token(), None);
    }
}
