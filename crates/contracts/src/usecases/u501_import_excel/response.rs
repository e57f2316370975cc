use serde::{Deserialize, Serialize};

/// Resumen que devuelve el backend al terminar un import de planilla.
/// Un import parcialmente exitoso igual reporta sus contadores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportExcelResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub processed_sheets: Vec<String>,
    pub inserted: i64,
    pub skipped: i64,
    #[serde(default)]
    pub transportistas_created: i64,
}

impl ImportExcelResponse {
    /// Mensaje de una línea para la banda de avisos.
    pub fn resumen(&self) -> String {
        format!(
            "✅ Import OK. inserted={} skipped={} transportistas={} hojas={}",
            self.inserted,
            self.skipped,
            self.transportistas_created,
            self.processed_sheets.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resumen() {
        let resp = ImportExcelResponse {
            ok: true,
            processed_sheets: vec!["transporte".to_string(), "base datos".to_string()],
            inserted: 12,
            skipped: 3,
            transportistas_created: 2,
        };
        assert_eq!(
            resp.resumen(),
            "✅ Import OK. inserted=12 skipped=3 transportistas=2 hojas=transporte, base datos"
        );
    }

    #[test]
    fn test_deserializa_sin_campos_opcionales() {
        let resp: ImportExcelResponse =
            serde_json::from_str(r#"{"inserted": 1, "skipped": 0}"#).unwrap();
        assert!(!resp.ok);
        assert!(resp.processed_sheets.is_empty());
        assert_eq!(resp.transportistas_created, 0);
    }
}
