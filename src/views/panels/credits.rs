use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::viewmodels::CreditsViewModel;

pub fn render_credits_panel(vm: &CreditsViewModel) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("section")?
        .class("panel panel-credits")
        .child(
            ElementBuilder::new("h2")?
                .text("Créditos disponibles")
                .build(),
        )?
        .child(
            ElementBuilder::new("p")?
                .class("credits-value")
                .text(&vm.credits().to_string())
                .build(),
        )?
        .child(
            ElementBuilder::new("p")?
                .class("credits-hint")
                .text("Cada documento generado consume un crédito.")
                .build(),
        )?
        .build())
}
