use std::fmt;
use serde::{Deserialize, Serialize};
use crate::models::auth::Role;
use crate::models::common::RecordId;

/// Usuario tal como lo lista GET /users (solo admin)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: RecordId,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub credits: u64,
}

/// Body de POST /users
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}
