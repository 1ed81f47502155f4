pub mod common;
pub mod auth;
pub mod imss;
pub mod user;
pub mod credits;
pub mod logs;

pub use common::RecordId;
pub use auth::{LoginRequest, LoginResponse, Role, SessionUser};
pub use imss::{ImssQueryRequest, ImssQueryResponse, QueryType};
pub use user::{CreateUserRequest, UserRecord};
pub use credits::CreditsResponse;
pub use logs::{LogEntry, LogScope};
