// ============================================================================
// HOUZEFUL - DEMO DE SESIÓN Y NAVEGACIÓN (RUST PURO + MVVM)
// ============================================================================
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Textos y flags derivados del estado
// - State: AppState con Rc<RefCell> + notificaciones
// - Stores: SessionStore (identidad + persistencia) y NavigationStore
// - Services: Contrato clave/valor (localStorage / memoria)
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod stores;
pub mod state;
pub mod viewmodels;
mod dom;
mod views;
mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;

pub use error::SessionError;
pub use models::{Intent, LoginDraft, LoginField, Session, View};
pub use state::{AppSnapshot, AppState, UpdateType};

// Única instancia montada de la App
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Houzeful - Rust Puro + MVVM ({})", CONFIG.environment);

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-render completo de la app montada
pub fn rerender_app() {
    APP.with(|app_cell| {
        let mut app = app_cell.borrow_mut();
        match app.as_mut() {
            Some(app) => {
                if let Err(e) = app.render() {
                    log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
        }
    });
}

/// Snapshot del estado actual, llamable desde JavaScript (depuración)
#[wasm_bindgen]
pub fn debug_state() -> String {
    APP.with(|app_cell| match app_cell.borrow().as_ref() {
        Some(app) => format!("{:?}", app.state().snapshot()),
        None => "App no está inicializada".to_string(),
    })
}
