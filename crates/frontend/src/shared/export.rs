//! Export de la planilla completa.
//!
//! A diferencia de un fetch, el export es una navegación directa al
//! endpoint de descarga: el browser maneja el attachment y acá no hay
//! respuesta que esperar.

use crate::shared::api_utils::api_url;

pub fn exportar_excel() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(&api_url("/api/export-excel"));
    }
}
