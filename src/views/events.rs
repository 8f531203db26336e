use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;

const NEXT_STEPS: [&str; 4] = [
    "• Add API calls to fetch events",
    "• Create event booking functionality",
    "• Add form validation",
    "• Implement error handling",
];

/// Página de eventos (placeholder, solo con sesión)
pub fn render_events() -> Result<Element, JsValue> {
    let steps = NEXT_STEPS
        .iter()
        .map(|step| -> Result<Element, JsValue> { Ok(ElementBuilder::new("li")?.text(step).build()) })
        .collect::<Result<Vec<_>, JsValue>>()?;

    let next_steps = ElementBuilder::new("div")?
        .class("mt-4 p-4 bg-blue-50 rounded")
        .child(
            ElementBuilder::new("h4")?
                .class("font-bold text-blue-800 mb-2")
                .text("Next Steps:")
                .build(),
        )?
        .child(
            ElementBuilder::new("ul")?
                .class("text-blue-600 text-sm space-y-1")
                .children(steps)?
                .build(),
        )?
        .build();

    let panel = ElementBuilder::new("div")?
        .class("bg-white p-6 rounded-lg shadow-lg")
        .child(
            ElementBuilder::new("p")?
                .class("text-gray-600")
                .text("🚧 Events page coming soon!")
                .build(),
        )?
        .child(next_steps)?
        .build();

    Ok(ElementBuilder::new("div")?
        .child(ElementBuilder::new("h2")?.class("text-3xl font-bold mb-6").text("Events").build())?
        .child(panel)?
        .build())
}
