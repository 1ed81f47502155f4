// ============================================================================
// HTTP TRANSPORT - Envío crudo de peticiones (sin lógica de API)
// ============================================================================
// En el navegador se usa gloo-net; en tests un transporte simulado.
// ============================================================================

use std::fmt;
use async_trait::async_trait;
use crate::services::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Petición ya resuelta: URL absoluta, headers finales y body serializado
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Buscar un header sin distinguir mayúsculas
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Respuesta cruda: status y body como texto
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait HttpTransport {
    /// Enviar la petición. Solo falla por errores de red:
    /// un status no-2xx es una respuesta válida.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

#[cfg(target_arch = "wasm32")]
pub use gloo::GlooTransport;

#[cfg(target_arch = "wasm32")]
mod gloo {
    use async_trait::async_trait;
    use gloo_net::http::Request;
    use super::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
    use crate::services::error::ApiError;

    /// Transporte del navegador (fetch vía gloo-net)
    #[derive(Debug, Clone, Copy, Default)]
    pub struct GlooTransport;

    #[async_trait(?Send)]
    impl HttpTransport for GlooTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            let mut builder = match request.method {
                HttpMethod::Get => Request::get(&request.url),
                HttpMethod::Post => Request::post(&request.url),
                HttpMethod::Put => Request::put(&request.url),
                HttpMethod::Patch => Request::patch(&request.url),
                HttpMethod::Delete => Request::delete(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }

            let prepared = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))?;

            let response = prepared
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;

            let status = response.status();
            // Un body ilegible se trata igual que uno vacío
            let body = response.text().await.unwrap_or_default();

            Ok(HttpResponse { status, body })
        }
    }
}
