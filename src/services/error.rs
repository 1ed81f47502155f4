// ============================================================================
// API ERROR - Taxonomía de fallos de la comunicación con el backend
// ============================================================================
// El Display de cada variante es el texto que ve el usuario.
// ============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// La petición no llegó o no hubo respuesta
    #[error("Error de red: {0}")]
    Network(String),

    /// Status fuera de 2xx; `message` ya viene resuelto (backend o genérico)
    #[error("{message}")]
    Http { status: u16, message: String },

    /// 2xx pero falta un campo esperado (token, pdfUrl...)
    #[error("Respuesta inválida del servidor: {0}")]
    InvalidResponse(String),

    /// No se pudo serializar el body de la petición
    #[error("Error serializando la petición: {0}")]
    Serialization(String),

    /// Fallo al persistir el token
    #[error("Error de almacenamiento: {0}")]
    Storage(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_displays_backend_message_verbatim() {
        let err = ApiError::Http {
            status: 403,
            message: "Invalid token".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid token");
        assert_eq!(err.status(), Some(403));
        assert_eq!(ApiError::Network("offline".into()).status(), None);
    }
}
