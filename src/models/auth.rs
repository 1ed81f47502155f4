use std::fmt;
use serde::{Deserialize, Serialize};

/// Rol del usuario autenticado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrador",
            Role::User => "Usuario",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identidad del usuario en sesión
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
    pub role: Role,
}

/// Body de POST /auth/login
#[derive(Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// Debug manual para que la contraseña nunca acabe en un log
impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Respuesta de POST /auth/login. Ambos campos son opcionales en el wire:
/// la validación (token obligatorio) la hace el cliente.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_uses_lowercase_wire_names() {
        let user: SessionUser =
            serde_json::from_str(r#"{"email":"admin@docuexpress.com","role":"admin"}"#).unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
    }

    #[test]
    fn login_request_debug_hides_password() {
        let req = LoginRequest {
            email: "ana@correo.mx".to_string(),
            password: "secreta".to_string(),
        };
        let debug = format!("{:?}", req);
        assert!(debug.contains("ana@correo.mx"));
        assert!(!debug.contains("secreta"));
    }
}
