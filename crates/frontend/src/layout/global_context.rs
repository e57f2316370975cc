//! Estado global de la vista.
//!
//! Una sola fuente de verdad por concern: pestaña activa, mensaje
//! vigente, filtros del listado, borrador de alta y un slot de fetch
//! por recurso remoto. Los componentes leen señales y reportan
//! intenciones; las reglas de refetch viven acá y en `app.rs`.

use std::collections::HashMap;

use contracts::dashboards::d400_analytics::dto::AnalyticsResponse;
use contracts::domain::a001_transportista::aggregate::Transportista;
use contracts::domain::a002_viaje::aggregate::Viaje;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::window;

use crate::dashboards::d400_analytics::api as analytics_api;
use crate::domain::a001_transportista::api as transportistas_api;
use crate::domain::a002_viaje::api as viajes_api;
use crate::domain::a002_viaje::form::CargaViaje;
use crate::domain::a002_viaje::list_state::{CambioFiltro, ListadoFiltros};
use crate::domain::a002_viaje::query;
use crate::shared::fetch::{FetchSlot, Settle};

/// Pestañas de la aplicación.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pestania {
    #[default]
    Listado,
    Cargar,
    Dashboard,
}

impl Pestania {
    pub const ALL: [Pestania; 3] = [Pestania::Listado, Pestania::Cargar, Pestania::Dashboard];

    /// Clave estable para la URL.
    pub fn key(&self) -> &'static str {
        match self {
            Pestania::Listado => "listado",
            Pestania::Cargar => "cargar",
            Pestania::Dashboard => "dashboard",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "listado" => Some(Pestania::Listado),
            "cargar" => Some(Pestania::Cargar),
            "dashboard" => Some(Pestania::Dashboard),
            _ => None,
        }
    }

    pub fn titulo(&self) -> &'static str {
        match self {
            Pestania::Listado => "Listado",
            Pestania::Cargar => "Cargar viaje",
            Pestania::Dashboard => "Dashboard",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Pestania>,
    /// Un solo mensaje a la vez: el resultado de la última operación
    /// pisa al anterior.
    pub mensaje: RwSignal<String>,
    pub transportistas: RwSignal<FetchSlot<Vec<Transportista>>>,
    pub filtros: RwSignal<ListadoFiltros>,
    pub viajes: RwSignal<FetchSlot<Vec<Viaje>>>,
    pub analytics: RwSignal<FetchSlot<AnalyticsResponse>>,
    pub carga: RwSignal<CargaViaje>,
    pub nuevo_transportista: RwSignal<String>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Pestania::default()),
            mensaje: RwSignal::new(String::new()),
            transportistas: RwSignal::new(FetchSlot::default()),
            filtros: RwSignal::new(ListadoFiltros::default()),
            viajes: RwSignal::new(FetchSlot::default()),
            analytics: RwSignal::new(FetchSlot::default()),
            carga: RwSignal::new(CargaViaje::default()),
            nuevo_transportista: RwSignal::new(String::new()),
        }
    }

    pub fn activar(&self, pestania: Pestania) {
        self.active.set(pestania);
    }

    pub fn aplicar_filtro(&self, cambio: CambioFiltro) {
        self.filtros.update(|f| f.aplicar(cambio));
    }

    /// Toda operación arranca limpiando el mensaje anterior.
    pub fn limpiar_mensaje(&self) {
        self.mensaje.set(String::new());
    }

    pub fn avisar(&self, mensaje: impl Into<String>) {
        self.mensaje.set(mensaje.into());
    }

    /// Nombre del transportista para una fila del listado. Si la
    /// referencia no resuelve se muestra el id crudo, no es un error.
    pub fn nombre_transportista(&self, id: i64) -> String {
        self.transportistas
            .with(|slot| {
                slot.data()
                    .and_then(|ts| ts.iter().find(|t| t.id == id))
                    .map(|t| t.nombre.clone())
            })
            .unwrap_or_else(|| id.to_string())
    }

    /// Dispara el fetch del listado con los filtros actuales. Solo la
    /// respuesta del request más reciente toca el estado.
    pub fn recargar_viajes(&self) {
        let ticket = self.viajes.try_update(|s| s.begin()).unwrap_or_default();
        let query = self.filtros.with_untracked(query::query_string);
        let viajes = self.viajes;
        let mensaje = self.mensaje;

        spawn_local(async move {
            let result = viajes_api::listar(&query).await;
            if let Some(Settle::Failed(e)) = viajes.try_update(|s| s.settle(ticket, result)) {
                log::error!("listado de viajes: {}", e);
                mensaje.set(e);
            }
        });
    }

    pub fn recargar_analytics(&self) {
        let ticket = self.analytics.try_update(|s| s.begin()).unwrap_or_default();
        let analytics = self.analytics;
        let mensaje = self.mensaje;

        spawn_local(async move {
            let result = analytics_api::obtener().await;
            if let Some(Settle::Failed(e)) = analytics.try_update(|s| s.settle(ticket, result)) {
                log::error!("analytics: {}", e);
                mensaje.set(e);
            }
        });
    }

    /// Refresca la lista compartida de transportistas. Se reemplaza
    /// completa de una: ningún lector ve una lista a medio actualizar.
    pub fn recargar_transportistas(&self) {
        let ticket = self
            .transportistas
            .try_update(|s| s.begin())
            .unwrap_or_default();
        let transportistas = self.transportistas;
        let mensaje = self.mensaje;

        spawn_local(async move {
            let result = transportistas_api::listar().await;
            if let Some(Settle::Failed(e)) = transportistas.try_update(|s| s.settle(ticket, result))
            {
                log::error!("transportistas: {}", e);
                mensaje.set(e);
            }
        });
    }

    /// Refrescos posteriores a una mutación exitosa: el listado solo si
    /// es la pestaña activa, el dashboard ídem. Lo que no está a la
    /// vista se actualiza recién al activarse.
    pub fn refrescar_tras_mutacion(&self) {
        match self.active.get_untracked() {
            Pestania::Listado => self.recargar_viajes(),
            Pestania::Dashboard => self.recargar_analytics(),
            Pestania::Cargar => {}
        }
    }

    /// Sincroniza la pestaña activa con `?tab=` en la URL: la lee al
    /// arrancar y la escribe en cada cambio vía `replace_state`.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(pestania) = params.get("tab").and_then(|v| Pestania::from_key(v)) {
            self.active.set(pestania);
        }

        let this = *self;
        Effect::new(move |_| {
            let active = this.active.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "tab".to_string(),
                active.key().to_string(),
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
