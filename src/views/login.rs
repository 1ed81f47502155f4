// ============================================================================
// LOGIN VIEW - Pantalla de acceso
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{alert, append_child, create_element, on_submit, set_class_name, ElementBuilder};
use crate::viewmodels::SessionViewModel;
use crate::views::shared::{create_error_banner, create_form_group, create_submit_button};

/// Renderizar vista de login
pub fn render_login(vm: &SessionViewModel) -> Result<Element, JsValue> {
    let loading = vm.is_loading();

    let login_screen = ElementBuilder::new("div")?
        .class("login-screen")
        .build();

    let login_container = ElementBuilder::new("div")?
        .class("login-container")
        .build();

    // Header
    let login_header = ElementBuilder::new("div")?
        .class("login-header")
        .child(
            ElementBuilder::new("h1")?
                .text("DocuExpress")
                .build(),
        )?
        .child(
            ElementBuilder::new("p")?
                .text("Documentos IMSS al instante")
                .build(),
        )?
        .build();

    // Formulario
    let form = create_element("form")?;
    set_class_name(&form, "login-form");

    let email_group = {
        let vm = vm.clone();
        create_form_group(
            "email",
            "Correo electrónico",
            "email",
            "tu@correo.com",
            &vm.email(),
            loading,
            move |value| vm.set_email(&value),
        )?
    };
    let password_group = {
        let vm = vm.clone();
        create_form_group(
            "password",
            "Contraseña",
            "password",
            "••••••••",
            &vm.password(),
            loading,
            move |value| vm.set_password(&value),
        )?
    };
    append_child(&form, &email_group)?;
    append_child(&form, &password_group)?;
    if let Some(banner) = create_error_banner(vm.error().as_deref())? {
        append_child(&form, &banner)?;
    }
    append_child(&form, &create_submit_button("Iniciar sesión", "Verificando...", loading)?)?;

    {
        let vm = vm.clone();
        on_submit(&form, move || {
            let vm = vm.clone();
            spawn_local(async move {
                // El éxito lo refleja el router en el siguiente render
                if let Err(e) = vm.login().await {
                    alert(&e.to_string());
                }
            });
        })?;
    }

    append_child(&login_container, &login_header)?;
    append_child(&login_container, &form)?;
    append_child(&login_screen, &login_container)?;

    Ok(login_screen)
}
