// ============================================================================
// LOGIN VIEW - Formulario enlazado al borrador de login
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{on_click, on_input_value, ElementBuilder};
use crate::models::{Intent, LoginField};
use crate::state::AppState;
use crate::viewmodels::AppViewModel;
use crate::views::dispatch_or_alert;

/// Renderizar vista de login
pub fn render_login(state: &AppState, vm: &AppViewModel) -> Result<Element, JsValue> {
    let email_group = create_form_group(
        state,
        LoginField::Email,
        "Email:",
        "email",
        "Enter your email",
        &vm.draft.email,
    )?;
    let password_group = create_form_group(
        state,
        LoginField::Password,
        "Password:",
        "password",
        "Enter your password",
        &vm.draft.password,
    )?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("w-full bg-blue-500 text-white py-2 px-4 rounded-lg hover:bg-blue-600")
        .text("Login")
        .build();
    {
        let state = state.clone();
        on_click(&submit_btn, move |e| {
            e.prevent_default();
            dispatch_or_alert(&state, Intent::SubmitLogin);
        })?;
    }

    Ok(ElementBuilder::new("div")?
        .class("max-w-md mx-auto bg-white p-6 rounded-lg shadow-lg")
        .child(ElementBuilder::new("h2")?.class("text-2xl font-bold mb-4").text("Login").build())?
        .child(email_group)?
        .child(password_group)?
        .child(submit_btn)?
        .build())
}

/// Label + input; cada tecla actualiza el campo correspondiente del borrador
fn create_form_group(
    state: &AppState,
    field: LoginField,
    label: &str,
    input_type: &str,
    placeholder: &str,
    value: &str,
) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .attr("type", input_type)?
        .attr("placeholder", placeholder)?
        .attr("value", value)?
        .class("w-full px-3 py-2 border rounded-lg focus:outline-none focus:border-blue-500")
        .build();
    {
        let state = state.clone();
        on_input_value(&input, move |value| {
            dispatch_or_alert(&state, Intent::EditField(field, value));
        })?;
    }

    Ok(ElementBuilder::new("div")?
        .class("mb-4")
        .child(
            ElementBuilder::new("label")?
                .class("block text-gray-700 text-sm font-bold mb-2")
                .text(label)
                .build(),
        )?
        .child(input)?
        .build())
}
