pub mod refresh;
pub mod session_viewmodel;
pub mod api_query_viewmodel;
pub mod users_viewmodel;
pub mod credits_viewmodel;
pub mod logs_viewmodel;
pub mod dashboard_viewmodel;
pub mod router;

pub use refresh::best_effort;
pub use session_viewmodel::SessionViewModel;
pub use api_query_viewmodel::ApiQueryViewModel;
pub use users_viewmodel::UsersViewModel;
pub use credits_viewmodel::CreditsViewModel;
pub use logs_viewmodel::{LogsViewModel, EMPTY_LOGS_MESSAGE};
pub use dashboard_viewmodel::{AdminSection, DashboardViewModel, Panel, Section, UserSection};
pub use router::{route, MountedScreen, Router, Screen};
