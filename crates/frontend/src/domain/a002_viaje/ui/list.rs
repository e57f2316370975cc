use chrono::{Datelike, Utc};
use contracts::domain::a002_viaje::aggregate::EstadoViaje;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::domain::a002_viaje::api;
use crate::domain::a002_viaje::list_state::CambioFiltro;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::format::{format_anio_mes, money};

#[component]
pub fn ListadoViajes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Cambio de estado desde la fila. La fila no se toca acá: el valor
    // nuevo recién se ve con el refetch posterior.
    let mover_estado = move |o_carga: String, estado: EstadoViaje| {
        ctx.limpiar_mensaje();
        spawn_local(async move {
            match api::cambiar_estado(&o_carga, estado).await {
                Ok(()) => ctx.refrescar_tras_mutacion(),
                Err(e) => {
                    log::error!("cambio de estado de {}: {}", o_carga, e);
                    ctx.avisar(e);
                }
            }
        });
    };

    let mes_actual = move |_| {
        let now = Utc::now().date_naive();
        ctx.aplicar_filtro(CambioFiltro::AnioMes(format!(
            "{:04}-{:02}",
            now.year(),
            now.month()
        )));
    };

    view! {
        <div class="card" style="margin-top: 12px;">
            <div class="grid" style="grid-template-columns: repeat(5, minmax(0, 1fr));">
                <div>
                    <label>"Estado"</label>
                    <select
                        prop:value=move || ctx.filtros.with(|f| f.estado.clone())
                        on:change=move |ev| {
                            ctx.aplicar_filtro(CambioFiltro::Estado(event_target_value(&ev)));
                        }
                    >
                        <option value="">"(todos)"</option>
                        {EstadoViaje::ALL
                            .into_iter()
                            .map(|estado| {
                                view! { <option value=estado.as_str()>{estado.as_str()}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div>
                    <label>"Año/Mes"</label>
                    <div style="display: flex; gap: 6px;">
                        <input
                            prop:value=move || ctx.filtros.with(|f| f.anio_mes.clone())
                            on:input=move |ev| {
                                ctx.aplicar_filtro(CambioFiltro::AnioMes(event_target_value(&ev)));
                            }
                            placeholder="ej: 2025-03"
                            style="flex: 1;"
                        />
                        <button class="btn" title="Mes actual" on:click=mes_actual>
                            "0M"
                        </button>
                    </div>
                </div>

                <div>
                    <label>"Transportista"</label>
                    <select
                        prop:value=move || ctx.filtros.with(|f| f.transportista_id.clone())
                        on:change=move |ev| {
                            ctx.aplicar_filtro(CambioFiltro::Transportista(event_target_value(&ev)));
                        }
                    >
                        <option value="">"(todos)"</option>
                        {move || {
                            ctx.transportistas
                                .with(|slot| slot.data().cloned().unwrap_or_default())
                                .into_iter()
                                .map(|t| {
                                    view! {
                                        <option value=t.id.to_string()>{t.nombre}</option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>

                <div>
                    <label>"Buscar"</label>
                    <input
                        prop:value=move || ctx.filtros.with(|f| f.q.clone())
                        on:input=move |ev| {
                            ctx.aplicar_filtro(CambioFiltro::Busqueda(event_target_value(&ev)));
                        }
                        placeholder="O.Carga o cliente/destino"
                    />
                </div>

                <div>
                    <label>"Limit"</label>
                    <input
                        type="number"
                        prop:value=move || ctx.filtros.with(|f| f.limit.to_string())
                        on:change=move |ev| {
                            let limit = event_target_value(&ev).parse().unwrap_or(200);
                            ctx.aplicar_filtro(CambioFiltro::Limit(limit));
                        }
                    />
                </div>
            </div>

            <div style="margin-top: 10px; display: flex; justify-content: flex-end; gap: 8px;">
                <button
                    class="btn"
                    disabled=move || ctx.filtros.with(|f| f.offset == 0)
                    on:click=move |_| ctx.aplicar_filtro(CambioFiltro::PaginaAnterior)
                >
                    "◀ Prev"
                </button>
                <button class="btn" on:click=move |_| ctx.aplicar_filtro(CambioFiltro::PaginaSiguiente)>
                    "Next ▶"
                </button>
            </div>
        </div>

        <div style="margin-top: 12px;">
            {move || {
                let slot = ctx.viajes.get();
                if slot.is_fetching() {
                    return view! { <div class="card">"Cargando…"</div> }.into_any();
                }

                let viajes = slot.data().cloned().unwrap_or_default();
                let vacio = viajes.is_empty();

                view! {
                    <div class="tableWrap">
                        <table>
                            <thead>
                                <tr>
                                    <th>"Fecha"</th>
                                    <th>"O.Carga"</th>
                                    <th>"Estado"</th>
                                    <th>"Año/Mes"</th>
                                    <th>"Cliente/Destino"</th>
                                    <th>"Transportista"</th>
                                    <th>"Cobrado"</th>
                                    <th>"Pagado"</th>
                                    <th>"Dif."</th>
                                    <th>"Acción"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {viajes
                                    .into_iter()
                                    .map(|viaje| {
                                        let o_carga_mover = viaje.o_carga.clone();
                                        let fecha = viaje
                                            .fecha
                                            .map(|f| f.to_string())
                                            .unwrap_or_default();
                                        let anio_mes = format_anio_mes(
                                            viaje.anio_mes.as_deref().unwrap_or(""),
                                        );

                                        view! {
                                            <tr>
                                                <td>{fecha}</td>
                                                <td style="white-space: nowrap;">{viaje.o_carga.clone()}</td>
                                                <td>{viaje.estado.clone().unwrap_or_default()}</td>
                                                <td>{anio_mes}</td>
                                                <td>{viaje.cliente_destino.clone().unwrap_or_default()}</td>
                                                <td>{move || ctx.nombre_transportista(viaje.transportista_id)}</td>
                                                <td>{money(viaje.flete_cobrado)}</td>
                                                <td>{money(viaje.flete_pagado)}</td>
                                                <td>{money(viaje.diferencia)}</td>
                                                <td>
                                                    <select on:change=move |ev| {
                                                        let valor = event_target_value(&ev);
                                                        // El select vuelve al placeholder; solo dispara la acción.
                                                        if let Some(select) = ev
                                                            .target()
                                                            .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
                                                        {
                                                            select.set_value("");
                                                        }
                                                        if let Ok(estado) = valor.parse::<EstadoViaje>() {
                                                            mover_estado(o_carga_mover.clone(), estado);
                                                        }
                                                    }>
                                                        <option value="" selected=true>"Mover a…"</option>
                                                        {EstadoViaje::ALL
                                                            .into_iter()
                                                            .map(|estado| {
                                                                view! {
                                                                    <option value=estado.as_str()>{estado.as_str()}</option>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </select>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}

                                {vacio
                                    .then(|| {
                                        view! {
                                            <tr>
                                                <td colspan="10" style="padding: 12px; color: #666;">
                                                    "No hay resultados con esos filtros."
                                                </td>
                                            </tr>
                                        }
                                    })}
                            </tbody>
                        </table>
                    </div>
                }
                .into_any()
            }}
        </div>

        <p class="small" style="margin-top: 10px;">
            {move || {
                let filas = ctx
                    .viajes
                    .with(|slot| slot.data().map(|v| v.len()).unwrap_or(0));
                let offset = ctx.filtros.with(|f| f.offset);
                format!("Mostrando {} filas · offset {}", filas, offset)
            }}
        </p>
    }
}
