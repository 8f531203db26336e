// ============================================================================
// APP VIEW - Layout principal: navegación + página + panel de debug
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::ElementBuilder;
use crate::state::AppState;
use crate::viewmodels::{AppViewModel, Page};
use crate::views::{render_debug_panel, render_events, render_home, render_login, render_navigation};

/// Renderizar la aplicación completa para el estado actual
pub fn render_app(state: &AppState, vm: &AppViewModel) -> Result<Element, JsValue> {
    log::debug!("🎬 [VIEW] render_app: {:?}", vm.page);

    let content = ElementBuilder::new("div")?.class("container mx-auto px-4 py-6");
    let content = match vm.page {
        Page::Home => content.child(render_home(state, vm)?)?,
        Page::Login => content.child(render_login(state, vm)?)?,
        Page::Events => content.child(render_events()?)?,
        Page::Empty => content,
    };

    Ok(ElementBuilder::new("div")?
        .class("min-h-screen bg-gray-100")
        .child(render_navigation(state, vm, &CONFIG.app_title)?)?
        .child(content.build())?
        .child(render_debug_panel(vm)?)?
        .build())
}
