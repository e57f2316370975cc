pub mod global_context;

use leptos::prelude::*;

use crate::layout::global_context::{AppGlobalContext, Pestania};
use crate::shared::export::exportar_excel;
use crate::usecases::u501_import_excel::widget::ImportarExcel;

#[component]
pub fn TopBar() -> impl IntoView {
    view! {
        <div class="topbar">
            <div>
                <h2 class="title">"Logística Conecar"</h2>
                <p class="sub">"Fletes · Import / Export · Estados · Dashboard"</p>
            </div>

            <div class="actions">
                <button class="btn" on:click=move |_| exportar_excel()>
                    "Exportar Excel"
                </button>
                <ImportarExcel />
            </div>
        </div>
    }
}

#[component]
pub fn TabsBar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs">
            {Pestania::ALL
                .into_iter()
                .map(|pestania| {
                    view! {
                        <button
                            class=move || {
                                if ctx.active.get() == pestania { "btn active" } else { "btn" }
                            }
                            on:click=move |_| ctx.activar(pestania)
                        >
                            {pestania.titulo()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Banda única de avisos: muestra el resultado de la última operación,
/// sea éxito o error.
#[component]
pub fn MensajeBanner() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        {move || {
            let mensaje = ctx.mensaje.get();
            if mensaje.is_empty() {
                view! { <></> }.into_any()
            } else {
                view! {
                    <div class="card" style="margin-top: 12px;">{mensaje}</div>
                }.into_any()
            }
        }}
    }
}
