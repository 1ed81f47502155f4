// ============================================================================
// LOGS VIEWMODEL - Bitácora de consultas
// ============================================================================
// Admin ve todas (GET /logs), el usuario solo las suyas (GET /logs/me).
// Carga best-effort: un fallo deja la lista vacía o como estaba.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::logs::{LogEntry, LogScope};
use crate::services::api_client::ApiClient;
use crate::state::reactivity::ChangeNotifier;
use crate::viewmodels::refresh::best_effort;

pub const EMPTY_LOGS_MESSAGE: &str = "No hay consultas registradas";

#[derive(Clone)]
pub struct LogsViewModel {
    api: ApiClient,
    notifier: ChangeNotifier,
    scope: Rc<RefCell<LogScope>>,
    entries: Rc<RefCell<Vec<LogEntry>>>,
}

impl LogsViewModel {
    pub fn new(api: ApiClient, notifier: ChangeNotifier, scope: LogScope) -> Self {
        Self {
            api,
            notifier,
            scope: Rc::new(RefCell::new(scope)),
            entries: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn scope(&self) -> LogScope {
        *self.scope.borrow()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Cargar la bitácora del modo actual
    pub async fn refresh(&self) {
        let scope = self.scope();
        if let Some(entries) = best_effort("bitácora", self.api.fetch_logs(scope)).await {
            log::info!("📜 [LOGS] {} entradas ({:?})", entries.len(), scope);
            *self.entries.borrow_mut() = entries;
            self.notifier.notify();
        }
    }

    /// Cambiar de modo; solo recarga si el modo cambió realmente
    pub async fn set_scope(&self, scope: LogScope) {
        if self.scope() == scope {
            return;
        }
        *self.scope.borrow_mut() = scope;
        self.refresh().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{client_with, MockTransport};
    use crate::services::transport::HttpMethod;

    const ONE_ENTRY: &str = r#"[{"id":1,"type":"vigencia","curp":"GODE561231HDFRRN09","createdAt":"2024-03-05T17:42:10Z"}]"#;

    #[tokio::test]
    async fn user_mode_reads_own_logs() {
        let mock = MockTransport::new();
        mock.respond(200, ONE_ENTRY);
        let vm = LogsViewModel::new(client_with(&mock, Some("t1")), ChangeNotifier::new(), LogScope::Mine);

        vm.refresh().await;

        assert_eq!(mock.last_request().unwrap().url, "/api/logs/me");
        assert_eq!(vm.entries().len(), 1);
        assert_eq!(vm.entries()[0].curp, "GODE561231HDFRRN09");
    }

    #[tokio::test]
    async fn empty_list_is_not_an_error() {
        let mock = MockTransport::new();
        mock.respond(200, "[]");
        let vm = LogsViewModel::new(client_with(&mock, Some("t1")), ChangeNotifier::new(), LogScope::All);

        vm.refresh().await;

        assert!(vm.is_empty());
        assert_eq!(mock.last_request().unwrap().url, "/api/logs");
    }

    #[tokio::test]
    async fn failures_are_swallowed_and_keep_stale_entries() {
        let mock = MockTransport::new();
        mock.respond(200, ONE_ENTRY);
        mock.respond(500, "");
        let vm = LogsViewModel::new(client_with(&mock, Some("t1")), ChangeNotifier::new(), LogScope::All);

        vm.refresh().await;
        vm.refresh().await;

        assert_eq!(vm.entries().len(), 1);
    }

    #[tokio::test]
    async fn refetches_only_when_mode_changes() {
        let mock = MockTransport::new();
        mock.respond(200, ONE_ENTRY);
        let vm = LogsViewModel::new(client_with(&mock, Some("t1")), ChangeNotifier::new(), LogScope::All);

        vm.set_scope(LogScope::All).await;
        assert!(mock.requests().is_empty());

        vm.set_scope(LogScope::Mine).await;
        assert_eq!(mock.count(HttpMethod::Get, "/api/logs/me"), 1);
        assert_eq!(vm.scope(), LogScope::Mine);
    }
}
