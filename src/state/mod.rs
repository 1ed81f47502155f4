// ============================================================================
// STATE MODULE - Estado compartido con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod session_state;
pub mod app_state;

pub use reactivity::*;
pub use session_state::*;
pub use app_state::*;
