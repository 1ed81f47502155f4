// ============================================================================
// USERS PANEL - Alta y listado de usuarios (admin)
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{alert, append_child, create_element, on_submit, set_class_name, ElementBuilder};
use crate::models::user::UserRecord;
use crate::viewmodels::UsersViewModel;
use crate::views::shared::{create_error_banner, create_form_group, create_submit_button};

pub fn render_users_panel(vm: &UsersViewModel) -> Result<Element, JsValue> {
    let creating = vm.is_creating();

    let panel = ElementBuilder::new("section")?
        .class("panel panel-users")
        .child(
            ElementBuilder::new("h2")?
                .text("Usuarios")
                .build(),
        )?
        .build();

    // Formulario de alta
    let form = create_element("form")?;
    set_class_name(&form, "user-form");
    let email_group = {
        let vm = vm.clone();
        create_form_group(
            "new-user-email",
            "Correo",
            "email",
            "usuario@correo.com",
            &vm.email(),
            creating,
            move |value| vm.set_email(&value),
        )?
    };
    let password_group = {
        let vm = vm.clone();
        create_form_group(
            "new-user-password",
            "Contraseña",
            "password",
            "Contraseña inicial",
            &vm.password(),
            creating,
            move |value| vm.set_password(&value),
        )?
    };
    append_child(&form, &email_group)?;
    append_child(&form, &password_group)?;
    append_child(&form, &create_submit_button("Crear usuario", "Creando...", creating)?)?;
    {
        let vm = vm.clone();
        on_submit(&form, move || {
            let vm = vm.clone();
            spawn_local(async move {
                if let Err(e) = vm.create().await {
                    alert(&e.to_string());
                }
            });
        })?;
    }
    append_child(&panel, &form)?;

    if let Some(banner) = create_error_banner(vm.error().as_deref())? {
        append_child(&panel, &banner)?;
    }

    append_child(&panel, &render_users_table(&vm.users())?)?;

    Ok(panel)
}

fn render_users_table(users: &[UserRecord]) -> Result<Element, JsValue> {
    let table = ElementBuilder::new("table")?
        .class("data-table")
        .build();

    let header = create_element("tr")?;
    for title in ["ID", "Correo", "Rol", "Créditos"] {
        append_child(&header, &ElementBuilder::new("th")?.text(title).build())?;
    }
    append_child(&table, &header)?;

    for user in users {
        let row = create_element("tr")?;
        for cell in [
            user.id.to_string(),
            user.email.clone(),
            user.role.label().to_string(),
            user.credits.to_string(),
        ] {
            append_child(&row, &ElementBuilder::new("td")?.text(&cell).build())?;
        }
        append_child(&table, &row)?;
    }

    Ok(table)
}
