use contracts::dashboards::d400_analytics::dto::AnalyticsResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, error_message};

pub async fn obtener() -> Result<AnalyticsResponse, String> {
    let response = Request::get(&api_url("/api/analytics"))
        .send()
        .await
        .map_err(|e| format!("No pude cargar analytics: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "No pude cargar analytics").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Respuesta inválida de analytics: {}", e))
}
