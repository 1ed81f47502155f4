// ============================================================================
// API QUERY PANEL - Formulario de consulta IMSS + enlace al PDF
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{alert, append_child, create_element, on_select_change, on_submit, set_class_name, ElementBuilder};
use crate::models::imss::QueryType;
use crate::viewmodels::ApiQueryViewModel;
use crate::views::shared::{create_error_banner, create_form_group, create_submit_button};

pub fn render_api_query_panel(vm: &ApiQueryViewModel) -> Result<Element, JsValue> {
    let loading = vm.is_loading();

    let panel = ElementBuilder::new("section")?
        .class("panel panel-api")
        .child(
            ElementBuilder::new("h2")?
                .text("Consulta de documentos IMSS")
                .build(),
        )?
        .build();

    let form = create_element("form")?;
    set_class_name(&form, "query-form");

    append_child(&form, &create_type_selector(vm, loading)?)?;

    let curp_group = {
        let vm = vm.clone();
        create_form_group(
            "curp",
            "CURP",
            "text",
            "18 caracteres",
            &vm.curp(),
            loading,
            move |value| vm.set_curp(&value),
        )?
    };
    append_child(&form, &curp_group)?;

    // El NSS solo existe en el DOM cuando el tipo lo necesita
    if vm.shows_nss() {
        let nss_group = {
            let vm = vm.clone();
            create_form_group(
                "nss",
                "NSS",
                "text",
                "11 dígitos",
                &vm.nss(),
                loading,
                move |value| vm.set_nss(&value),
            )?
        };
        append_child(&form, &nss_group)?;
    }

    append_child(&form, &create_submit_button("Generar documento", "Generando...", loading)?)?;

    {
        let vm = vm.clone();
        on_submit(&form, move || {
            let vm = vm.clone();
            spawn_local(async move {
                if let Err(e) = vm.submit().await {
                    alert(&e.to_string());
                }
            });
        })?;
    }
    append_child(&panel, &form)?;

    if let Some(banner) = create_error_banner(vm.error().as_deref())? {
        append_child(&panel, &banner)?;
    }

    if let Some(url) = vm.pdf_url() {
        let result = ElementBuilder::new("div")?
            .class("query-result")
            .child(
                ElementBuilder::new("a")?
                    .class("btn-download")
                    .attr("href", &url)?
                    .attr("target", "_blank")?
                    .attr("rel", "noopener noreferrer")?
                    .text("📄 Descargar PDF")
                    .build(),
            )?
            .build();
        append_child(&panel, &result)?;
    }

    Ok(panel)
}

fn create_type_selector(vm: &ApiQueryViewModel, loading: bool) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?
        .class("form-group")
        .child(
            ElementBuilder::new("label")?
                .attr("for", "query-type")?
                .text("Tipo de consulta")
                .build(),
        )?
        .build();

    let select = ElementBuilder::new("select")?
        .class("form-input")
        .attr("id", "query-type")?
        .flag("disabled", loading)?
        .build();

    let current = vm.query_type();
    for query_type in QueryType::ALL {
        let option = ElementBuilder::new("option")?
            .attr("value", query_type.as_str())?
            .flag("selected", query_type == current)?
            .text(query_type.label())
            .build();
        append_child(&select, &option)?;
    }

    {
        let vm = vm.clone();
        on_select_change(&select, move |value| match value.parse::<QueryType>() {
            Ok(query_type) => vm.set_query_type(query_type),
            Err(e) => log::warn!("⚠️ [IMSS] {}", e),
        })?;
    }
    append_child(&group, &select)?;

    Ok(group)
}
