// Transporte simulado para tests: respuestas en cola + registro de peticiones

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use async_trait::async_trait;
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;
use crate::services::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::state::session_state::SessionContext;
use crate::utils::storage::MemoryTokenStore;

#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Rc<RefCell<VecDeque<Result<HttpResponse, ApiError>>>>,
    requests: Rc<RefCell<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encolar una respuesta HTTP
    pub fn respond(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    /// Encolar un fallo de red
    pub fn fail(&self, reason: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(ApiError::Network(reason.to_string())));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }

    /// Cuántas veces se pidió `method url`
    pub fn count(&self, method: HttpMethod, url: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .count()
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        // Cede el turno para que la petición quede "en vuelo" un instante
        tokio::task::yield_now().await;
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("sin respuesta simulada".to_string())))
    }
}

/// Cliente contra `/api` con el token indicado ya guardado
pub fn client_with(mock: &MockTransport, token: Option<&str>) -> ApiClient {
    let store = match token {
        Some(token) => MemoryTokenStore::with_token(token),
        None => MemoryTokenStore::new(),
    };
    let session = SessionContext::new(Rc::new(store));
    ApiClient::new("/api", Rc::new(mock.clone()), session)
}
