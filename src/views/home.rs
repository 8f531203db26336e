// ============================================================================
// HOME VIEW - Info de usuario + demo de estado (contador y mensaje)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{on_click, ElementBuilder};
use crate::models::{Intent, Session};
use crate::state::AppState;
use crate::viewmodels::AppViewModel;
use crate::views::dispatch_or_alert;

pub fn render_home(state: &AppState, vm: &AppViewModel) -> Result<Element, JsValue> {
    let mut page = ElementBuilder::new("div")?.class("text-center").child(
        ElementBuilder::new("h2")?
            .class("text-3xl font-bold mb-6")
            .text("State Management Demo")
            .build(),
    )?;

    if let Some(user) = &vm.user {
        page = page.child(render_user_info(state, user)?)?;
    }

    page = page.child(render_state_demo(state, vm)?)?;

    if vm.user.is_none() {
        let hint = ElementBuilder::new("div")?
            .class("bg-gray-100 p-6 rounded-lg")
            .child(
                ElementBuilder::new("p")?
                    .class("text-gray-600 mb-4")
                    .text("👆 Try the buttons above to see state updates in action! Then login to see more features.")
                    .build(),
            )?
            .build();
        page = page.child(hint)?;
    }

    Ok(page.build())
}

fn render_user_info(state: &AppState, user: &Session) -> Result<Element, JsValue> {
    let logout_btn = ElementBuilder::new("button")?
        .class("mt-2 bg-red-500 text-white px-4 py-2 rounded hover:bg-red-600")
        .text("Logout")
        .build();
    {
        let state = state.clone();
        on_click(&logout_btn, move |_| dispatch_or_alert(&state, Intent::Logout))?;
    }

    Ok(ElementBuilder::new("div")?
        .class("bg-green-100 p-4 rounded-lg mb-4")
        .child(
            ElementBuilder::new("h3")?
                .class("font-bold text-green-800")
                .text(&format!("Welcome, {}!", user.name))
                .build(),
        )?
        .child(
            ElementBuilder::new("p")?
                .class("text-green-600")
                .text(&format!("Email: {}", user.email))
                .build(),
        )?
        .child(logout_btn)?
        .build())
}

fn render_state_demo(state: &AppState, vm: &AppViewModel) -> Result<Element, JsValue> {
    let mut card = ElementBuilder::new("div")?
        .class("bg-white p-6 rounded-lg shadow-lg mb-6")
        .child(
            ElementBuilder::new("h3")?
                .class("text-xl font-bold mb-4")
                .text("State Demo")
                .build(),
        )?;

    if let Some(message) = &vm.message {
        let message_box = ElementBuilder::new("div")?
            .class("bg-yellow-100 p-4 rounded mb-4")
            .child(ElementBuilder::new("p")?.class("text-yellow-800").text(message).build())?
            .build();
        card = card.child(message_box)?;
    }

    let counter_btn = ElementBuilder::new("button")?
        .class("bg-green-500 text-white px-4 py-2 rounded hover:bg-green-600")
        .text(&vm.counter_label)
        .build();
    {
        let state = state.clone();
        on_click(&counter_btn, move |_| dispatch_or_alert(&state, Intent::ClickCounter))?;
    }

    let toggle_btn = ElementBuilder::new("button")?
        .class("bg-purple-500 text-white px-4 py-2 rounded hover:bg-purple-600")
        .text(&vm.toggle_label)
        .build();
    {
        let state = state.clone();
        on_click(&toggle_btn, move |_| dispatch_or_alert(&state, Intent::ToggleMessage))?;
    }

    let buttons = ElementBuilder::new("div")?
        .class("space-x-4 mb-4")
        .child(counter_btn)?
        .child(toggle_btn)?
        .build();

    Ok(card.child(buttons)?.build())
}
