// ============================================================================
// FORM HELPERS - Grupos label + input reutilizables
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_input_value, ElementBuilder};

/// Crear grupo de formulario: el input arranca con `value` y cada tecla
/// llama a `on_change` (sin re-render, para no perder el foco)
pub fn create_form_group<F>(
    id: &str,
    label_text: &str,
    input_type: &str,
    placeholder: &str,
    value: &str,
    disabled: bool,
    on_change: F,
) -> Result<Element, JsValue>
where
    F: FnMut(String) + 'static,
{
    let group = ElementBuilder::new("div")?
        .class("form-group")
        .build();

    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();

    let input = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", input_type)?
        .attr("id", id)?
        .attr("name", id)?
        .attr("placeholder", placeholder)?
        .attr("value", value)?
        .flag("disabled", disabled)?
        .build();
    on_input_value(&input, on_change)?;

    append_child(&group, &label)?;
    append_child(&group, &input)?;

    Ok(group)
}

/// Botón de envío con texto alternativo mientras carga
pub fn create_submit_button(text: &str, loading_text: &str, loading: bool) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .class("btn-primary")
        .attr("type", "submit")?
        .flag("disabled", loading)?
        .text(if loading { loading_text } else { text })
        .build())
}

/// Mensaje de error en línea (vacío si no hay error)
pub fn create_error_banner(error: Option<&str>) -> Result<Option<Element>, JsValue> {
    match error {
        Some(message) => Ok(Some(
            ElementBuilder::new("div")?
                .class("error-message")
                .attr("role", "alert")?
                .text(message)
                .build(),
        )),
        None => Ok(None),
    }
}
