use contracts::domain::a001_transportista::aggregate::TransportistaCreate;
use contracts::domain::a002_viaje::aggregate::EstadoViaje;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_transportista::api as transportistas_api;
use crate::domain::a002_viaje::api;
use crate::domain::a002_viaje::form::CampoViaje;
use crate::layout::global_context::{AppGlobalContext, Pestania};

/// Input de texto atado a un campo del borrador. Toda la edición pasa
/// por `CargaViaje::set`, así la capa de render no conoce reglas.
#[component]
fn CampoTexto(
    label: &'static str,
    campo: CampoViaje,
    #[prop(optional, into)] tipo: Option<&'static str>,
    #[prop(optional, into)] placeholder: Option<&'static str>,
) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div>
            <label>{label}</label>
            <input
                type=tipo.unwrap_or("text")
                placeholder=placeholder.unwrap_or("")
                prop:value=move || ctx.carga.with(|c| c.valor(campo))
                on:input=move |ev| {
                    ctx.carga.update(|c| c.set(campo, event_target_value(&ev)));
                }
            />
        </div>
    }
}

#[component]
pub fn CargarViaje() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let (guardando, set_guardando) = signal(false);
    let (creando_t, set_creando_t) = signal(false);

    let guardar = move |_| {
        ctx.limpiar_mensaje();

        // Validación local primero: sin O.Carga o sin transportista no
        // sale ningún request.
        let payload = match ctx.carga.with_untracked(|c| c.payload()) {
            Ok(payload) => payload,
            Err(e) => {
                ctx.avisar(e);
                return;
            }
        };

        set_guardando.set(true);
        spawn_local(async move {
            match api::crear(&payload).await {
                Ok(_) => {
                    ctx.avisar("✅ Viaje guardado");
                    ctx.carga.update(|c| c.reset_tras_alta());
                    // Volver al listado en la primera página; el efecto
                    // de listado dispara el único refetch.
                    ctx.filtros.update(|f| f.reset_offset());
                    ctx.activar(Pestania::Listado);
                }
                // El borrador queda intacto para corregir y reintentar.
                Err(e) => ctx.avisar(e),
            }
            set_guardando.set(false);
        });
    };

    let crear_transportista = move |_| {
        ctx.limpiar_mensaje();

        let payload = match TransportistaCreate::new(&ctx.nuevo_transportista.get_untracked()) {
            Ok(payload) => payload,
            Err(e) => {
                ctx.avisar(e);
                return;
            }
        };

        set_creando_t.set(true);
        spawn_local(async move {
            match transportistas_api::crear(&payload).await {
                Ok(creado) => {
                    ctx.recargar_transportistas();
                    ctx.carga.update(|c| c.set_transportista(creado.id.to_string()));
                    ctx.nuevo_transportista.set(String::new());
                    ctx.avisar("✅ Transportista creado");
                }
                Err(e) => ctx.avisar(e),
            }
            set_creando_t.set(false);
        });
    };

    view! {
        <div class="card" style="margin-top: 12px;">
            <h3 style="margin-top: 0;">"Cargar viaje"</h3>

            <div class="grid" style="grid-template-columns: repeat(4, minmax(0, 1fr));">
                <div>
                    <label>"Estado *"</label>
                    <select
                        prop:value=move || ctx.carga.with(|c| c.estado.as_str().to_string())
                        on:change=move |ev| {
                            if let Ok(estado) = event_target_value(&ev).parse::<EstadoViaje>() {
                                ctx.carga.update(|c| c.set_estado(estado));
                            }
                        }
                    >
                        {EstadoViaje::ALL
                            .into_iter()
                            .map(|estado| {
                                view! { <option value=estado.as_str()>{estado.as_str()}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>

                <CampoTexto label="Fecha" campo=CampoViaje::Fecha tipo="date" />
                <CampoTexto label="O.Carga *" campo=CampoViaje::OCarga />
                <CampoTexto
                    label="Año/Mes (YYYY-MM)"
                    campo=CampoViaje::AnioMes
                    placeholder="2025-03"
                />

                <div style="grid-column: span 2;">
                    <label>"Cliente / Destino"</label>
                    <input
                        prop:value=move || ctx.carga.with(|c| c.cliente_destino.clone())
                        on:input=move |ev| {
                            ctx.carga
                                .update(|c| c.set(CampoViaje::ClienteDestino, event_target_value(&ev)));
                        }
                    />
                </div>

                <div style="grid-column: span 2;">
                    <label>"Transportista *"</label>
                    <select
                        prop:value=move || ctx.carga.with(|c| c.transportista_id.clone())
                        on:change=move |ev| {
                            ctx.carga.update(|c| c.set_transportista(event_target_value(&ev)));
                        }
                    >
                        <option value="">"(seleccionar)"</option>
                        {move || {
                            ctx.transportistas
                                .with(|slot| slot.data().cloned().unwrap_or_default())
                                .into_iter()
                                .map(|t| {
                                    view! { <option value=t.id.to_string()>{t.nombre}</option> }
                                })
                                .collect_view()
                        }}
                    </select>

                    <div style="display: flex; gap: 8px; margin-top: 8px;">
                        <input
                            prop:value=move || ctx.nuevo_transportista.get()
                            on:input=move |ev| ctx.nuevo_transportista.set(event_target_value(&ev))
                            placeholder="Nuevo transportista…"
                            style="flex: 1;"
                        />
                        <Button on_click=crear_transportista disabled=move || creando_t.get()>
                            {move || if creando_t.get() { "Creando..." } else { "Agregar" }}
                        </Button>
                    </div>

                    <div class="small" style="margin-top: 6px;">
                        "Si no está en la lista, lo agregás acá y queda seleccionado."
                    </div>
                </div>

                <CampoTexto label="Cod. Transporte" campo=CampoViaje::CodTransporte />
                <CampoTexto label="Ingrese Transporte" campo=CampoViaje::IngreseTransporte />
                <CampoTexto label="KM" campo=CampoViaje::Km />
                <CampoTexto label="TN Orden" campo=CampoViaje::TnOrdenCarga />
                <CampoTexto label="TN Cargadas" campo=CampoViaje::TnCargadas />
                <CampoTexto label="Aforo" campo=CampoViaje::Aforo />
                <CampoTexto label="Tarifa Asign" campo=CampoViaje::TarifaAsign />
                <CampoTexto label="Flete Cobrado" campo=CampoViaje::FleteCobrado />
                <CampoTexto label="Tarifa TTE" campo=CampoViaje::TarifaTte />
                <CampoTexto label="Flete Pagado" campo=CampoViaje::FletePagado />

                <div style="grid-column: span 4;">
                    <label>"Observación"</label>
                    <input
                        prop:value=move || ctx.carga.with(|c| c.observacion.clone())
                        on:input=move |ev| {
                            ctx.carga
                                .update(|c| c.set(CampoViaje::Observacion, event_target_value(&ev)));
                        }
                    />
                </div>
            </div>

            <div style="margin-top: 12px; display: flex; gap: 8px;">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=guardar
                    disabled=move || guardando.get()
                >
                    {move || if guardando.get() { "Guardando..." } else { "Guardar viaje" }}
                </Button>
                <Button on_click=move |_| ctx.activar(Pestania::Listado)>
                    "Cancelar"
                </Button>
            </div>
        </div>
    }
}
