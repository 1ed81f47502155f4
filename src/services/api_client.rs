// ============================================================================
// API CLIENT - ÚNICA frontera de red del cliente
// ============================================================================
// - Content-Type JSON fijo + Bearer cuando hay token + headers del llamador
// - Body que no es JSON => objeto vacío
// - Status no-2xx => ApiError::Http con el `message` del backend o genérico
// ============================================================================

use std::rc::Rc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use crate::config::join_url;
use crate::models::auth::{LoginRequest, LoginResponse, SessionUser};
use crate::models::credits::CreditsResponse;
use crate::models::imss::{ImssQueryRequest, ImssQueryResponse};
use crate::models::logs::{LogEntry, LogScope};
use crate::models::user::{CreateUserRequest, UserRecord};
use crate::services::error::ApiError;
use crate::services::transport::{HttpMethod, HttpRequest, HttpTransport};
use crate::state::session_state::SessionContext;

const CONTENT_TYPE: &str = "Content-Type";
const AUTHORIZATION: &str = "Authorization";
const JSON_MIME: &str = "application/json";

/// Opciones de una petición: método, body JSON y headers extra
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post<T: Serialize>(body: &T) -> Result<Self, ApiError> {
        Self {
            method: HttpMethod::Post,
            ..Self::default()
        }
        .json(body)
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        let value =
            serde_json::to_value(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// Respuesta exitosa: metadatos + payload ya parseado
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub data: Value,
}

impl ApiResponse {
    /// Decodificar el payload; un shape inesperado es respuesta inválida
    pub fn json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        serde_json::from_value(self.data).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

/// Cliente API - comunicación HTTP con el backend de DocuExpress
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
    session: SessionContext,
}

impl ApiClient {
    pub fn new(base_url: &str, transport: Rc<dyn HttpTransport>, session: SessionContext) -> Self {
        Self {
            base_url: crate::config::normalize_base_url(base_url),
            transport,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Petición autenticada (Bearer si hay token guardado)
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<ApiResponse, ApiError> {
        let token = self.session.token();
        self.execute(path, options, token.as_deref()).await
    }

    /// Variante sin Authorization, para el login
    pub async fn request_public(&self, path: &str, options: RequestOptions) -> Result<ApiResponse, ApiError> {
        self.execute(path, options, None).await
    }

    /// Construir la petición final (headers mezclados, body serializado)
    pub fn build_request(&self, path: &str, options: RequestOptions, token: Option<&str>) -> HttpRequest {
        let mut headers: Vec<(String, String)> = vec![(CONTENT_TYPE.to_string(), JSON_MIME.to_string())];
        if let Some(token) = token {
            headers.push((AUTHORIZATION.to_string(), format!("Bearer {}", token)));
        }
        // Los headers del llamador ganan en caso de conflicto
        for (name, value) in options.headers {
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
            headers.push((name, value));
        }

        HttpRequest {
            method: options.method,
            url: join_url(&self.base_url, path),
            headers,
            body: options.body.map(|b| b.to_string()),
        }
    }

    async fn execute(
        &self,
        path: &str,
        options: RequestOptions,
        token: Option<&str>,
    ) -> Result<ApiResponse, ApiError> {
        let request = self.build_request(path, options, token);
        log::debug!("🌐 [API] {} {}", request.method, request.url);

        let response = self.transport.send(request).await.map_err(|e| {
            log::error!("❌ [API] {} sin respuesta: {}", path, e);
            e
        })?;

        let data = parse_body(&response.body);

        if !response.ok() {
            let message = error_message(response.status, &data);
            log::warn!("⚠️ [API] {} -> HTTP {}: {}", path, response.status, message);
            return Err(ApiError::Http {
                status: response.status,
                message,
            });
        }

        Ok(ApiResponse {
            status: response.status,
            data,
        })
    }

    // ------------------------------------------------------------------------
    // Endpoints
    // ------------------------------------------------------------------------

    /// POST /auth/login (sin token). Exige `token` y `user` en la respuesta.
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, SessionUser), ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        log::info!("🔐 [API] Login para {}", email);

        let response: LoginResponse = self
            .request_public("/auth/login", RequestOptions::post(&body)?)
            .await?
            .json()?;

        let token = response
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::InvalidResponse("no se recibió token".to_string()))?;
        let user = response
            .user
            .ok_or_else(|| ApiError::InvalidResponse("no se recibió el usuario".to_string()))?;

        Ok((token, user))
    }

    /// POST /imss - devuelve la URL del PDF generado
    pub async fn query_imss(&self, query: &ImssQueryRequest) -> Result<String, ApiError> {
        log::info!("📄 [API] Consulta IMSS {} para {}", query.query_type, query.curp);
        let response: ImssQueryResponse = self
            .request("/imss", RequestOptions::post(query)?)
            .await?
            .json()?;

        response
            .pdf_url
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ApiError::InvalidResponse("no se recibió el PDF".to_string()))
    }

    /// GET /users
    pub async fn fetch_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        self.request("/users", RequestOptions::get()).await?.json()
    }

    /// POST /users - el usuario creado se ignora, la lista se recarga aparte
    pub async fn create_user(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let body = CreateUserRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        log::info!("👤 [API] Creando usuario {}", email);
        self.request("/users", RequestOptions::post(&body)?).await?;
        Ok(())
    }

    /// GET /credits/me
    pub async fn fetch_my_credits(&self) -> Result<u64, ApiError> {
        let response: CreditsResponse = self
            .request("/credits/me", RequestOptions::get())
            .await?
            .json()?;
        Ok(response.credits)
    }

    /// GET /logs o GET /logs/me
    pub async fn fetch_logs(&self, scope: LogScope) -> Result<Vec<LogEntry>, ApiError> {
        self.request(scope.path(), RequestOptions::get()).await?.json()
    }
}

/// Parsear el body; vacío o no-JSON => `{}`
pub fn parse_body(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::Object(Map::new()))
}

/// Mensaje de error: `message` del backend si existe, si no uno genérico
pub fn error_message(status: u16, data: &Value) -> String {
    data.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP error {}", status))
}
