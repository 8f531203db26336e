use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{on_click, ElementBuilder};
use crate::models::Intent;
use crate::state::AppState;
use crate::viewmodels::{AppViewModel, NavItem};
use crate::views::dispatch_or_alert;

/// Barra de navegación
pub fn render_navigation(state: &AppState, vm: &AppViewModel, title: &str) -> Result<Element, JsValue> {
    let buttons = vm
        .nav_items
        .iter()
        .map(|item| render_nav_button(state, item))
        .collect::<Result<Vec<_>, JsValue>>()?;

    let menu = ElementBuilder::new("div")?
        .class("space-x-4")
        .children(buttons)?
        .build();

    let bar = ElementBuilder::new("div")?
        .class("flex justify-between items-center")
        .child(ElementBuilder::new("h1")?.class("text-2xl font-bold").text(title).build())?
        .child(menu)?
        .build();

    Ok(ElementBuilder::new("nav")?
        .class("bg-blue-600 text-white p-4 mb-6")
        .child(bar)?
        .build())
}

fn render_nav_button(state: &AppState, item: &NavItem) -> Result<Element, JsValue> {
    let class = if item.active {
        "px-4 py-2 rounded bg-blue-800"
    } else {
        "px-4 py-2 rounded hover:bg-blue-700"
    };
    let button = ElementBuilder::new("button")?
        .class(class)
        .text(item.label)
        .attr("data-view", item.view.as_str())?
        .build();

    let state = state.clone();
    let view = item.view;
    on_click(&button, move |_| dispatch_or_alert(&state, Intent::Navigate(view)))?;

    Ok(button)
}
