use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::viewmodels::AppViewModel;

/// Panel fijo con página actual, usuario y contador
pub fn render_debug_panel(vm: &AppViewModel) -> Result<Element, JsValue> {
    let lines = vm
        .debug_lines
        .iter()
        .map(|line| -> Result<Element, JsValue> { Ok(ElementBuilder::new("div")?.text(line).build()) })
        .collect::<Result<Vec<_>, JsValue>>()?;

    Ok(ElementBuilder::new("div")?
        .class("fixed bottom-4 right-4 bg-black text-white p-3 rounded text-xs")
        .children(lines)?
        .build())
}
