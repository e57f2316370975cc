use contracts::domain::a001_transportista::aggregate::{Transportista, TransportistaCreate};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, error_message};

pub async fn listar() -> Result<Vec<Transportista>, String> {
    let response = Request::get(&api_url("/api/transportistas"))
        .send()
        .await
        .map_err(|e| format!("No pude cargar transportistas: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "No pude cargar transportistas").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Respuesta inválida de transportistas: {}", e))
}

pub async fn crear(payload: &TransportistaCreate) -> Result<Transportista, String> {
    let response = Request::post(&api_url("/api/transportistas"))
        .json(payload)
        .map_err(|e| format!("No pude armar el request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Error creando transportista: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Error creando transportista").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Respuesta inválida al crear transportista: {}", e))
}
