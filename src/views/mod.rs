pub mod app;
pub mod login;
pub mod dashboard;
pub mod admin_dashboard;
pub mod user_dashboard;
pub mod panels;
pub mod shared;

pub use app::render_app;
pub use login::render_login;
pub use admin_dashboard::render_admin_dashboard;
pub use user_dashboard::render_user_dashboard;
