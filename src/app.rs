// ============================================================================
// APP - Aplicación principal: monta el estado y re-renderiza en cada cambio
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use gloo_timers::callback::Timeout;
use crate::config::CONFIG;
use crate::dom::{append_child, clear_children, get_element_by_id, set_document_title};
use crate::services::BrowserStorage;
use crate::state::{AppState, UpdateType};
use crate::viewmodels::AppViewModel;
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación (restaura la sesión de localStorage)
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new(Rc::new(BrowserStorage), &CONFIG);
        match state.session() {
            Some(session) => log::info!("✅ [APP] Sesión restaurada: {}", session.name),
            None => log::info!("ℹ️ [APP] Sin sesión guardada, modo anónimo"),
        }

        // Timeout(0) saca el re-render del handler que disparó el cambio
        state.subscribe_to_changes(|update_type| {
            if update_type == UpdateType::FullRender {
                Timeout::new(0, crate::rerender_app).forget();
            }
        });

        Ok(Self { state, root })
    }

    /// Renderizar aplicación
    pub fn render(&mut self) -> Result<(), JsValue> {
        let vm = AppViewModel::from_snapshot(&self.state.snapshot());

        clear_children(&self.root);
        let app_view = render_app(&self.state, &vm)?;
        append_child(&self.root, &app_view)?;
        set_document_title(&vm.document_title);

        Ok(())
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
