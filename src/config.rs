use serde::{Deserialize, Serialize};
use crate::utils::constants::{BACKEND_URL, DEFAULT_BACKEND_URL};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BACKEND_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            Some(BACKEND_URL),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
        )
    }

    /// Construye la configuración a partir de valores crudos (vacíos = por defecto)
    pub fn from_values(
        api_base_url: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(normalize_base_url)
            .unwrap_or(defaults.api_base_url);

        Self {
            api_base_url,
            environment: environment
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty())
                .unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    /// URL base de la API (sin "/" final)
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

/// Quita las barras finales para que `base + "/ruta"` no genere "//"
pub fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');
    if trimmed.is_empty() {
        // "/" a secas apunta a la raíz del origen
        String::new()
    } else {
        trimmed.to_string()
    }
}

/// Une la URL base con una ruta relativa de la API
pub fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
