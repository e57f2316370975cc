use anyhow::bail;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Estado del workflow
// ============================================================================

/// Estados del tablero de viajes. El orden es el del flujo operativo,
/// pero el backend acepta cualquier transición entre ellos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EstadoViaje {
    #[serde(rename = "transporte")]
    Transporte,
    #[serde(rename = "viajes en camino")]
    EnCamino,
    #[serde(rename = "viajes concretados")]
    Concretado,
}

impl EstadoViaje {
    pub const ALL: [EstadoViaje; 3] = [
        EstadoViaje::Transporte,
        EstadoViaje::EnCamino,
        EstadoViaje::Concretado,
    ];

    /// Representación exacta que entiende el backend (y que viaja en los
    /// query params y en los cuerpos JSON).
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoViaje::Transporte => "transporte",
            EstadoViaje::EnCamino => "viajes en camino",
            EstadoViaje::Concretado => "viajes concretados",
        }
    }
}

impl fmt::Display for EstadoViaje {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EstadoViaje {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "transporte" => Ok(EstadoViaje::Transporte),
            "viajes en camino" => Ok(EstadoViaje::EnCamino),
            "viajes concretados" => Ok(EstadoViaje::Concretado),
            otro => bail!("Estado inválido: {otro}"),
        }
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// Registro de viaje (flete) tal como lo devuelve el backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viaje {
    pub id: i64,

    pub fecha: Option<NaiveDate>,
    pub dia: Option<String>,

    pub o_carga: String,
    pub anio_mes: Option<String>,

    pub cliente_destino: Option<String>,

    pub transportista_id: i64,
    pub cod_transporte: Option<String>,
    pub ingrese_transporte: Option<String>,

    pub km: Option<f64>,
    pub tn_orden_carga: Option<f64>,
    pub tn_cargadas: Option<f64>,
    pub aforo: Option<f64>,

    pub tarifa_asign: Option<f64>,
    pub flete_cobrado: Option<f64>,
    pub tarifa_tte: Option<f64>,
    pub flete_pagado: Option<f64>,

    /// Calculada por el backend (cobrado - pagado). Nunca se recalcula
    /// del lado del cliente.
    pub diferencia: Option<f64>,

    pub observacion: Option<String>,

    /// Texto libre en lectura: filas importadas de planillas viejas
    /// pueden venir sin estado o con valores fuera del workflow.
    #[serde(default)]
    pub estado: Option<String>,
}

/// Payload de alta de viaje desde el formulario web.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViajeCreate {
    pub estado: EstadoViaje,

    pub fecha: Option<NaiveDate>,
    pub dia: Option<String>,

    pub o_carga: String,
    pub anio_mes: Option<String>,

    pub cliente_destino: Option<String>,

    pub transportista_id: i64,
    pub cod_transporte: Option<String>,
    pub ingrese_transporte: Option<String>,

    pub km: Option<f64>,
    pub tn_orden_carga: Option<f64>,
    pub tn_cargadas: Option<f64>,
    pub aforo: Option<f64>,

    pub tarifa_asign: Option<f64>,
    pub flete_cobrado: Option<f64>,
    pub tarifa_tte: Option<f64>,
    pub flete_pagado: Option<f64>,

    pub observacion: Option<String>,
}

/// Cuerpo del PATCH de cambio de estado, direccionado por O.Carga.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstadoUpdate {
    pub estado: EstadoViaje,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estado_serde_usa_los_nombres_del_backend() {
        let json = serde_json::to_string(&EstadoViaje::EnCamino).unwrap();
        assert_eq!(json, "\"viajes en camino\"");

        let parsed: EstadoViaje = serde_json::from_str("\"viajes concretados\"").unwrap();
        assert_eq!(parsed, EstadoViaje::Concretado);
    }

    #[test]
    fn test_estado_from_str_tolera_mayusculas_y_espacios() {
        assert_eq!(
            "  Transporte ".parse::<EstadoViaje>().unwrap(),
            EstadoViaje::Transporte
        );
        assert_eq!(
            "VIAJES EN CAMINO".parse::<EstadoViaje>().unwrap(),
            EstadoViaje::EnCamino
        );
    }

    #[test]
    fn test_estado_desconocido_rechazado() {
        assert!("entregado".parse::<EstadoViaje>().is_err());
        assert!("".parse::<EstadoViaje>().is_err());
    }

    #[test]
    fn test_viaje_sin_estado_deserializa() {
        // Filas históricas: el backend puede omitir el campo.
        let json = r#"{
            "id": 7,
            "fecha": null,
            "dia": null,
            "o_carga": "OC-001",
            "anio_mes": "202506",
            "cliente_destino": null,
            "transportista_id": 3,
            "cod_transporte": null,
            "ingrese_transporte": null,
            "km": null,
            "tn_orden_carga": null,
            "tn_cargadas": null,
            "aforo": null,
            "tarifa_asign": null,
            "flete_cobrado": 100.5,
            "tarifa_tte": null,
            "flete_pagado": 80.0,
            "diferencia": 20.5,
            "observacion": null
        }"#;
        let viaje: Viaje = serde_json::from_str(json).unwrap();
        assert_eq!(viaje.estado, None);
        assert_eq!(viaje.diferencia, Some(20.5));
    }
}
