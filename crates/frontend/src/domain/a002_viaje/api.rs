use contracts::domain::a002_viaje::aggregate::{EstadoUpdate, EstadoViaje, Viaje, ViajeCreate};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, error_message};

pub async fn listar(query: &str) -> Result<Vec<Viaje>, String> {
    let url = api_url(&format!("/api/fletes?{}", query));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("No pude cargar fletes: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "No pude cargar fletes").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Respuesta inválida del listado: {}", e))
}

pub async fn crear(payload: &ViajeCreate) -> Result<Viaje, String> {
    let response = Request::post(&api_url("/api/fletes-web"))
        .json(payload)
        .map_err(|e| format!("No pude armar el request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Error guardando viaje: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Error guardando viaje").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Respuesta inválida al guardar viaje: {}", e))
}

/// PATCH parcial direccionado por O.Carga. La fila local no se toca:
/// el cambio recién se ve con el próximo refetch del listado.
pub async fn cambiar_estado(o_carga: &str, estado: EstadoViaje) -> Result<(), String> {
    let url = api_url(&format!(
        "/api/fletes/{}/estado",
        urlencoding::encode(o_carga)
    ));

    let response = Request::patch(&url)
        .json(&EstadoUpdate { estado })
        .map_err(|e| format!("No pude armar el request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Error cambiando estado: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Error cambiando estado").await);
    }

    Ok(())
}
