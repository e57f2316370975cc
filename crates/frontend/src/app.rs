use leptos::prelude::*;

use crate::dashboards::d400_analytics::ui::AnalyticsDashboard;
use crate::domain::a002_viaje::query;
use crate::domain::a002_viaje::ui::form::CargarViaje;
use crate::domain::a002_viaje::ui::list::ListadoViajes;
use crate::layout::global_context::{AppGlobalContext, Pestania};
use crate::layout::{MensajeBanner, TabsBar, TopBar};

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    ctx.init_router_integration();

    // Transportistas: una sola carga al arrancar el proceso. Después
    // solo se refresca tras crear uno o tras un import.
    Effect::new(move |_| {
        ctx.recargar_transportistas();
    });

    // Query canónico memoizado: dos estados de filtros que derivan el
    // mismo query no disparan dos fetch.
    let query_listado = Memo::new(move |_| ctx.filtros.with(query::query_pairs));

    // Listado: un fetch al activar la pestaña y uno por cada cambio
    // real del query derivado. Los cambios del mismo lote (p. ej. alta
    // exitosa: reset de offset + cambio de pestaña) colapsan en una
    // sola corrida del efecto.
    Effect::new(move |_| {
        let activa = ctx.active.get() == Pestania::Listado;
        let _query = query_listado.get();
        if activa {
            ctx.recargar_viajes();
        }
    });

    // Dashboard: exactamente un fetch por activación, no uno por
    // render mientras está activo.
    Effect::new(move |prev: Option<bool>| {
        let activa = ctx.active.get() == Pestania::Dashboard;
        if activa && prev != Some(true) {
            ctx.recargar_analytics();
        }
        activa
    });

    view! {
        <div class="container">
            <TopBar />
            <TabsBar />
            <MensajeBanner />

            {move || match ctx.active.get() {
                Pestania::Listado => view! { <ListadoViajes /> }.into_any(),
                Pestania::Cargar => view! { <CargarViaje /> }.into_any(),
                Pestania::Dashboard => view! { <AnalyticsDashboard /> }.into_any(),
            }}
        </div>
    }
}
