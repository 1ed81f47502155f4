// ============================================================================
// API QUERY VIEWMODEL - Solicitud de documentos IMSS
// ============================================================================
// Formulario {tipo, CURP, NSS}; el NSS solo aplica a semanas/vigencia.
// No hay validación local: el backend decide.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::imss::{ImssQueryRequest, QueryType};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;
use crate::state::reactivity::ChangeNotifier;

#[derive(Clone)]
pub struct ApiQueryViewModel {
    api: ApiClient,
    notifier: ChangeNotifier,
    query_type: Rc<RefCell<QueryType>>,
    curp: Rc<RefCell<String>>,
    nss: Rc<RefCell<String>>,
    loading: Rc<RefCell<bool>>,
    pdf_url: Rc<RefCell<Option<String>>>,
    error: Rc<RefCell<Option<String>>>,
}

impl ApiQueryViewModel {
    pub fn new(api: ApiClient, notifier: ChangeNotifier) -> Self {
        Self {
            api,
            notifier,
            query_type: Rc::new(RefCell::new(QueryType::default())),
            curp: Rc::new(RefCell::new(String::new())),
            nss: Rc::new(RefCell::new(String::new())),
            loading: Rc::new(RefCell::new(false)),
            pdf_url: Rc::new(RefCell::new(None)),
            error: Rc::new(RefCell::new(None)),
        }
    }

    pub fn query_type(&self) -> QueryType {
        *self.query_type.borrow()
    }

    /// Cambiar tipo (re-render: puede mostrar u ocultar el NSS)
    pub fn set_query_type(&self, query_type: QueryType) {
        *self.query_type.borrow_mut() = query_type;
        self.notifier.notify();
    }

    pub fn curp(&self) -> String {
        self.curp.borrow().clone()
    }

    pub fn set_curp(&self, curp: &str) {
        *self.curp.borrow_mut() = curp.to_string();
    }

    pub fn nss(&self) -> String {
        self.nss.borrow().clone()
    }

    pub fn set_nss(&self, nss: &str) {
        *self.nss.borrow_mut() = nss.to_string();
    }

    /// ¿Se muestra el campo NSS?
    pub fn shows_nss(&self) -> bool {
        self.query_type().requires_nss()
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn pdf_url(&self) -> Option<String> {
        self.pdf_url.borrow().clone()
    }

    pub fn error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    /// Payload a enviar; el NSS solo viaja si el tipo lo usa
    pub fn build_request(&self) -> ImssQueryRequest {
        let query_type = self.query_type();
        ImssQueryRequest {
            query_type,
            curp: self.curp(),
            nss: query_type.requires_nss().then(|| self.nss()),
        }
    }

    /// Enviar la consulta. `Ok(None)` si ya hay una en vuelo.
    pub async fn submit(&self) -> Result<Option<String>, ApiError> {
        if self.is_loading() {
            log::debug!("⏳ [IMSS] Consulta en curso, se ignora el reintento");
            return Ok(None);
        }

        let request = self.build_request();
        *self.loading.borrow_mut() = true;
        *self.error.borrow_mut() = None;
        self.notifier.notify();

        let result = self.api.query_imss(&request).await;

        *self.loading.borrow_mut() = false;
        match &result {
            Ok(url) => {
                log::info!("✅ [IMSS] PDF listo: {}", url);
                *self.pdf_url.borrow_mut() = Some(url.clone());
            }
            Err(e) => {
                log::error!("❌ [IMSS] Consulta {} fallida: {}", request.query_type, e);
                // Nunca dejar un enlace viejo junto a un error nuevo
                *self.pdf_url.borrow_mut() = None;
                *self.error.borrow_mut() = Some(e.to_string());
            }
        }
        self.notifier.notify();

        result.map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use crate::services::testing::{client_with, MockTransport};

    fn viewmodel(mock: &MockTransport) -> ApiQueryViewModel {
        ApiQueryViewModel::new(client_with(mock, Some("t1")), ChangeNotifier::new())
    }

    fn sent_body(mock: &MockTransport) -> Value {
        let body = mock.last_request().unwrap().body.unwrap();
        serde_json::from_str(&body).unwrap()
    }

    #[test]
    fn asignacion_hides_nss() {
        let mock = MockTransport::new();
        let vm = viewmodel(&mock);
        vm.set_nss("12345678901");

        vm.set_query_type(QueryType::Asignacion);

        assert!(!vm.shows_nss());
        assert_eq!(vm.build_request().nss, None);
    }

    #[tokio::test]
    async fn semanas_and_vigencia_send_the_nss() {
        for query_type in [QueryType::Semanas, QueryType::Vigencia] {
            let mock = MockTransport::new();
            mock.respond(200, r#"{"pdfUrl":"https://cdn.docuexpress.mx/doc.pdf"}"#);
            let vm = viewmodel(&mock);
            vm.set_query_type(query_type);
            vm.set_curp("GODE561231HDFRRN09");
            vm.set_nss("12345678901");

            assert!(vm.shows_nss());
            vm.submit().await.unwrap();

            assert_eq!(
                sent_body(&mock),
                json!({
                    "type": query_type.as_str(),
                    "curp": "GODE561231HDFRRN09",
                    "nss": "12345678901"
                })
            );
            assert_eq!(mock.last_request().unwrap().url, "/api/imss");
        }
    }

    #[tokio::test]
    async fn success_exposes_the_pdf_link() {
        let mock = MockTransport::new();
        mock.respond(200, r#"{"pdfUrl":"https://cdn.docuexpress.mx/doc.pdf"}"#);
        let vm = viewmodel(&mock);
        vm.set_curp("GODE561231HDFRRN09");

        let url = vm.submit().await.unwrap();

        assert_eq!(url.as_deref(), Some("https://cdn.docuexpress.mx/doc.pdf"));
        assert_eq!(vm.pdf_url(), url);
        assert_eq!(vm.error(), None);
        assert!(!vm.is_loading());
    }

    #[tokio::test]
    async fn failure_clears_a_stale_link() {
        let mock = MockTransport::new();
        mock.respond(200, r#"{"pdfUrl":"https://cdn.docuexpress.mx/viejo.pdf"}"#);
        mock.respond(402, r#"{"message":"Créditos insuficientes"}"#);
        let vm = viewmodel(&mock);

        vm.submit().await.unwrap();
        let err = vm.submit().await.unwrap_err();

        assert_eq!(err.to_string(), "Créditos insuficientes");
        assert_eq!(vm.pdf_url(), None);
        assert_eq!(vm.error().as_deref(), Some("Créditos insuficientes"));
    }

    #[tokio::test]
    async fn resubmit_during_flight_does_not_send_twice() {
        let mock = MockTransport::new();
        mock.respond(200, r#"{"pdfUrl":"https://cdn.docuexpress.mx/doc.pdf"}"#);
        let vm = viewmodel(&mock);

        let (first, second) = tokio::join!(vm.submit(), vm.submit());

        assert!(first.unwrap().is_some());
        assert_eq!(second.unwrap(), None);
        assert_eq!(mock.requests().len(), 1);
    }
}
