use contracts::dashboards::d400_analytics::dto::AnalyticsResponse;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::format::{cantidad, format_anio_mes, money};

#[component]
pub fn AnalyticsDashboard() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="grid" style="margin-top: 12px;">
            {move || {
                let slot = ctx.analytics.get();
                match slot.data().cloned() {
                    // Sin payload todavía: o está llegando o falló la
                    // primera carga.
                    None => {
                        let texto = if slot.is_fetching() {
                            "Cargando dashboard..."
                        } else {
                            "No hay datos de analytics."
                        };
                        view! { <div class="card">{texto}</div> }.into_any()
                    }
                    Some(dash) => view! { <DashboardCargado dash=dash /> }.into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn DashboardCargado(dash: AnalyticsResponse) -> impl IntoView {
    let por_mes = dash.por_mes.clone();
    let por_estado = dash.por_estado.clone();
    let sin_estados = por_estado.is_empty();

    view! {
        <div class="grid cards">
            <div class="card">
                <div class="kpiTitle">"Viajes"</div>
                <div class="kpiValue">{cantidad(dash.totales.cantidad)}</div>
            </div>
            <div class="card">
                <div class="kpiTitle">"Total cobrado"</div>
                <div class="kpiValue">{money(Some(dash.totales.cobrado))}</div>
            </div>
            <div class="card">
                <div class="kpiTitle">"Total pagado"</div>
                <div class="kpiValue">{money(Some(dash.totales.pagado))}</div>
            </div>
            <div class="card">
                <div class="kpiTitle">"Diferencia"</div>
                <div class="kpiValue">{money(Some(dash.totales.diferencia))}</div>
            </div>
        </div>

        <div class="card">
            <h3 style="margin-top: 0;">"Evolución por mes"</h3>
            <div class="tableWrap">
                <table>
                    <thead>
                        <tr>
                            <th>"Año/Mes"</th>
                            <th>"Cobrado"</th>
                            <th>"Pagado"</th>
                            <th>"Diferencia"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {por_mes
                            .into_iter()
                            .map(|mes| {
                                view! {
                                    <tr>
                                        <td>{format_anio_mes(&mes.anio_mes)}</td>
                                        <td>{money(Some(mes.cobrado))}</td>
                                        <td>{money(Some(mes.pagado))}</td>
                                        <td>{money(Some(mes.diferencia))}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
            <div class="small">
                "Si falta AÑO.MES en algunos registros, no aparecen en esta tabla."
            </div>
        </div>

        <div class="card">
            <h3 style="margin-top: 0;">"Resumen por estado"</h3>
            <div class="tableWrap">
                <table>
                    <thead>
                        <tr>
                            <th>"Estado"</th>
                            <th>"Cantidad"</th>
                            <th>"Cobrado"</th>
                            <th>"Pagado"</th>
                            <th>"Diferencia"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {por_estado
                            .into_iter()
                            .map(|fila| {
                                let estado = fila
                                    .estado
                                    .clone()
                                    .unwrap_or_else(|| "(sin estado)".to_string());
                                view! {
                                    <tr>
                                        <td>{estado}</td>
                                        <td>{cantidad(fila.cantidad)}</td>
                                        <td>{money(Some(fila.cobrado))}</td>
                                        <td>{money(Some(fila.pagado))}</td>
                                        <td>{money(Some(fila.diferencia))}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}

                        {sin_estados
                            .then(|| {
                                view! {
                                    <tr>
                                        <td colspan="5" style="padding: 12px; color: #666;">
                                            "Sin datos por estado."
                                        </td>
                                    </tr>
                                }
                            })}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
