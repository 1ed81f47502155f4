// ============================================================================
// BEST-EFFORT REFRESH - Política de los paneles informativos
// ============================================================================
// Créditos y bitácora son de solo lectura: si la carga falla se registra
// un warning y la vista conserva lo que tenía (valor por defecto o dato viejo).
// Nunca se muestra error ni se reintenta.
// ============================================================================

use std::future::Future;
use crate::services::error::ApiError;

/// Ejecutar una carga descartando el error
pub async fn best_effort<T, F>(what: &str, load: F) -> Option<T>
where
    F: Future<Output = Result<T, ApiError>>,
{
    match load.await {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("⚠️ [REFRESH] {} no disponible, se conserva el valor anterior: {}", what, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn swallows_errors() {
        let loaded = best_effort("créditos", async {
            Err::<u64, _>(ApiError::Network("offline".to_string()))
        })
        .await;
        assert_eq!(loaded, None);

        let loaded = best_effort("créditos", async { Ok::<u64, ApiError>(7) }).await;
        assert_eq!(loaded, Some(7));
    }
}
