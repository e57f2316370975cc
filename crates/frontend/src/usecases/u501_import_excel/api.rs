use contracts::usecases::u501_import_excel::response::ImportExcelResponse;
use wasm_bindgen::JsCast;
use web_sys::{window, FormData, RequestInit, RequestMode, Response};

use crate::shared::api_utils::{api_url, detail_from_body};

/// Sube la planilla como multipart y devuelve el resumen del import.
/// Un import parcial no es un error: los contadores igual vuelven.
pub async fn importar(file: web_sys::File) -> Result<ImportExcelResponse, String> {
    let window = window().ok_or("No window object")?;

    let form = FormData::new().map_err(|e| format!("No pude armar el form: {:?}", e))?;
    form.append_with_blob("file", &file)
        .map_err(|e| format!("No pude adjuntar el archivo: {:?}", e))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form.as_ref());

    let req = web_sys::Request::new_with_str_and_init(&api_url("/api/import-excel"), &opts)
        .map_err(|e| format!("Failed to create request: {:?}", e))?;

    let resp_val = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(|e| format!("Error importando Excel: {:?}", e))?;

    let response: Response = resp_val.dyn_into().map_err(|_| "Not a Response")?;

    if !response.ok() {
        let body = match response.text() {
            Ok(promise) => wasm_bindgen_futures::JsFuture::from(promise)
                .await
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };
        return Err(detail_from_body(&body, "Error importando Excel"));
    }

    let json = wasm_bindgen_futures::JsFuture::from(
        response
            .json()
            .map_err(|e| format!("Failed to parse JSON: {:?}", e))?,
    )
    .await
    .map_err(|e| format!("Failed to get JSON: {:?}", e))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}
