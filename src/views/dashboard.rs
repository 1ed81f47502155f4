// ============================================================================
// DASHBOARD LAYOUT - Header + navegación por secciones + panel activo
// ============================================================================
// Compartido por el dashboard de admin y el de usuario.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::viewmodels::{DashboardViewModel, Section};
use crate::views::panels::render_panel;

pub fn render_dashboard<S: Section>(
    title: &str,
    user_email: &str,
    dashboard: &DashboardViewModel<S>,
) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .class("dashboard")
        .build();

    append_child(&container, &create_header(title, user_email, dashboard)?)?;
    append_child(&container, &create_navigation(dashboard)?)?;

    let content = ElementBuilder::new("main")?
        .class("dashboard-content")
        .child(render_panel(&dashboard.panel())?)?
        .build();
    append_child(&container, &content)?;

    Ok(container)
}

fn create_header<S: Section>(
    title: &str,
    user_email: &str,
    dashboard: &DashboardViewModel<S>,
) -> Result<Element, JsValue> {
    let logout_btn = ElementBuilder::new("button")?
        .class("btn-logout")
        .attr("type", "button")?
        .text("Cerrar sesión")
        .build();
    {
        let dashboard = dashboard.clone();
        on_click(&logout_btn, move |_| dashboard.logout())?;
    }

    let actions = ElementBuilder::new("div")?
        .class("header-actions")
        .child(
            ElementBuilder::new("span")?
                .class("header-user")
                .text(user_email)
                .build(),
        )?
        .child(logout_btn)?
        .build();

    Ok(ElementBuilder::new("header")?
        .class("app-header")
        .child(ElementBuilder::new("h1")?.text(title).build())?
        .child(actions)?
        .build())
}

fn create_navigation<S: Section>(dashboard: &DashboardViewModel<S>) -> Result<Element, JsValue> {
    let nav = ElementBuilder::new("nav")?
        .class("dashboard-nav")
        .build();

    let active = dashboard.active();
    for &section in S::ALL {
        let class = if section == active { "nav-item active" } else { "nav-item" };
        let button = ElementBuilder::new("button")?
            .class(class)
            .attr("type", "button")?
            .attr("data-section", section.key())?
            .text(section.label())
            .build();

        let dashboard = dashboard.clone();
        on_click(&button, move |_| {
            if let Some(panel) = dashboard.select(section) {
                spawn_local(async move { panel.mount().await });
            }
        })?;
        append_child(&nav, &button)?;
    }

    Ok(nav)
}
