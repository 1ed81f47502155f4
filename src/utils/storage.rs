// ============================================================================
// TOKEN STORAGE - Persistencia del token de autenticación
// ============================================================================
// El token es el único estado que sobrevive a una recarga de la página.
// Se guarda como string plano (no JSON) bajo TOKEN_STORAGE_KEY.
// ============================================================================

use std::cell::RefCell;

/// Almacén durable del token de autenticación
pub trait TokenStore {
    /// Leer el token persistido (None si no hay sesión guardada)
    fn load_token(&self) -> Option<String>;

    /// Persistir el token, reemplazando el anterior
    fn save_token(&self, token: &str) -> Result<(), String>;

    /// Eliminar el token persistido. Sin token guardado es un no-op.
    fn clear_token(&self) -> Result<(), String>;
}

/// Almacén en memoria (tests y entornos sin localStorage)
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save_token(&self, token: &str) -> Result<(), String> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear_token(&self) -> Result<(), String> {
        *self.token.borrow_mut() = None;
        Ok(())
    }
}

/// Versión redactada del token para logs (inicio4…fin4)
pub fn redact_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    match chars.len() {
        0 => String::new(),
        1..=8 => "…".to_string(),
        n => {
            let head: String = chars[..4].iter().collect();
            let tail: String = chars[n - 4..].iter().collect();
            format!("{}…{}", head, tail)
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use local::*;

#[cfg(target_arch = "wasm32")]
mod local {
    use web_sys::{window, Storage};
    use super::TokenStore;
    use crate::utils::constants::TOKEN_STORAGE_KEY;

    pub fn get_local_storage() -> Option<Storage> {
        window()?.local_storage().ok()?
    }

    /// Token persistido en `window.localStorage`
    #[derive(Debug, Clone)]
    pub struct LocalStorageTokenStore {
        key: String,
    }

    impl LocalStorageTokenStore {
        pub fn new() -> Self {
            Self {
                key: TOKEN_STORAGE_KEY.to_string(),
            }
        }
    }

    impl Default for LocalStorageTokenStore {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TokenStore for LocalStorageTokenStore {
        fn load_token(&self) -> Option<String> {
            let storage = get_local_storage()?;
            storage
                .get_item(&self.key)
                .ok()?
                .filter(|token| !token.is_empty())
        }

        fn save_token(&self, token: &str) -> Result<(), String> {
            let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
            storage
                .set_item(&self.key, token)
                .map_err(|_| "Error guardando el token en localStorage".to_string())
        }

        fn clear_token(&self) -> Result<(), String> {
            let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
            storage
                .remove_item(&self.key)
                .map_err(|_| "Error eliminando el token de localStorage".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_and_clears() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.load_token(), None);

        store.save_token("t1").unwrap();
        assert_eq!(store.load_token().as_deref(), Some("t1"));

        store.clear_token().unwrap();
        store.clear_token().unwrap();
        assert_eq!(store.load_token(), None);
    }

    #[test]
    fn redaction_hides_the_middle_of_the_token() {
        assert_eq!(redact_token(""), "");
        assert_eq!(redact_token("t1"), "…");
        assert_eq!(redact_token("eyJhbGciOiJIUzI1NiJ9.payload"), "eyJh…load");
    }
}
