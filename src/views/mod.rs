// ============================================================================
// VIEWS - Funciones que renderizan DOM (sin lógica)
// ============================================================================

pub mod app;
pub mod navigation;
pub mod home;
pub mod login;
pub mod events;
pub mod debug_panel;

pub use app::render_app;
pub use navigation::render_navigation;
pub use home::render_home;
pub use login::render_login;
pub use events::render_events;
pub use debug_panel::render_debug_panel;

use crate::dom::alert;
use crate::models::Intent;
use crate::state::AppState;

/// Enviar intención desde un handler; los errores de usuario se muestran con alert
pub(crate) fn dispatch_or_alert(state: &AppState, intent: Intent) {
    if let Err(e) = state.dispatch(intent) {
        alert(e.user_message());
    }
}
