/// URL base de la API REST
/// Configurada en tiempo de compilación:
/// - Por defecto: /api (mismo origen que la PWA)
/// - Override: variable DOCUEXPRESS_API_URL (o .env)
pub const BACKEND_URL: &str = match option_env!("DOCUEXPRESS_API_URL") {
    Some(url) => url,
    None => DEFAULT_BACKEND_URL,
};

pub const DEFAULT_BACKEND_URL: &str = "/api";

/// Clave de localStorage donde vive el token de autenticación
pub const TOKEN_STORAGE_KEY: &str = "token";
