use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use super::api;
use crate::layout::global_context::AppGlobalContext;

/// Botón de import de la barra superior: un input file disfrazado.
/// Al terminar refresca transportistas siempre (el import puede crear
/// nuevos) y la pestaña que esté a la vista.
#[component]
pub fn ImportarExcel() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let (importando, set_importando) = signal(false);

    let on_file = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        let Some(input) = input else { return };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Mismo archivo dos veces seguidas también tiene que disparar
        // el change.
        input.set_value("");

        ctx.limpiar_mensaje();
        set_importando.set(true);
        spawn_local(async move {
            match api::importar(file).await {
                Ok(resultado) => {
                    ctx.avisar(resultado.resumen());
                    ctx.recargar_transportistas();
                    ctx.refrescar_tras_mutacion();
                }
                Err(e) => {
                    log::error!("import excel: {}", e);
                    ctx.avisar(e);
                }
            }
            set_importando.set(false);
        });
    };

    view! {
        <label class="btn" style="display: inline-flex; gap: 8px; align-items: center;">
            <input
                type="file"
                accept=".xlsx"
                on:change=on_file
                disabled=move || importando.get()
            />
            <span>{move || if importando.get() { "Importando…" } else { "Importar Excel" }}</span>
        </label>
    }
}
