//! API utilities for frontend-backend communication
//!
//! Provides helpers for constructing API URLs and for turning failed
//! responses into user-facing messages.

use gloo_net::http::Response;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 8000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:8000" or "https://example.com:8000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/fletes");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Extrae el `detail` de un cuerpo de error JSON del backend; si el
/// cuerpo no trae uno, queda el mensaje genérico de la operación.
pub fn detail_from_body(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("detail")
                .and_then(|d| d.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| fallback.to_string())
}

/// Mensaje de error para una respuesta no exitosa. Intenta leer el
/// `detail` del cuerpo; el fallback es por operación.
pub async fn error_message(response: Response, fallback: &str) -> String {
    match response.text().await {
        Ok(body) => detail_from_body(&body, fallback),
        Err(_) => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_del_backend_se_muestra_textual() {
        assert_eq!(
            detail_from_body(r#"{"detail": "O.Carga ya existe"}"#, "Error guardando viaje"),
            "O.Carga ya existe"
        );
    }

    #[test]
    fn test_cuerpo_sin_detail_usa_fallback() {
        assert_eq!(
            detail_from_body(r#"{"error": "boom"}"#, "Error guardando viaje"),
            "Error guardando viaje"
        );
        assert_eq!(
            detail_from_body("", "Error guardando viaje"),
            "Error guardando viaje"
        );
        assert_eq!(
            detail_from_body("<html>502</html>", "Error guardando viaje"),
            "Error guardando viaje"
        );
    }

    #[test]
    fn test_detail_no_string_usa_fallback() {
        assert_eq!(
            detail_from_body(r#"{"detail": {"loc": ["body"]}}"#, "Error"),
            "Error"
        );
    }
}
