// ============================================================================
// LOGS PANEL - Tabla de la bitácora de consultas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, create_element, ElementBuilder};
use crate::models::logs::LogScope;
use crate::viewmodels::{LogsViewModel, EMPTY_LOGS_MESSAGE};

pub fn render_logs_panel(vm: &LogsViewModel) -> Result<Element, JsValue> {
    let title = match vm.scope() {
        LogScope::All => "Bitácora de consultas",
        LogScope::Mine => "Mi historial",
    };
    let panel = ElementBuilder::new("section")?
        .class("panel panel-logs")
        .child(ElementBuilder::new("h2")?.text(title).build())?
        .build();

    if vm.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("empty-state")
            .text(EMPTY_LOGS_MESSAGE)
            .build();
        append_child(&panel, &empty)?;
        return Ok(panel);
    }

    let table = ElementBuilder::new("table")?
        .class("data-table")
        .build();
    let header = create_element("tr")?;
    for column in ["Tipo", "CURP", "Fecha"] {
        append_child(&header, &ElementBuilder::new("th")?.text(column).build())?;
    }
    append_child(&table, &header)?;

    for entry in vm.entries() {
        let row = create_element("tr")?;
        for cell in [entry.type_label(), entry.curp.clone(), entry.created_at_display()] {
            append_child(&row, &ElementBuilder::new("td")?.text(&cell).build())?;
        }
        append_child(&table, &row)?;
    }
    append_child(&panel, &table)?;

    Ok(panel)
}
