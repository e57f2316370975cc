use serde::{Deserialize, Serialize};

/// Agregado de analytics calculado por el backend. El cliente solo lo
/// muestra; en particular `diferencia` nunca se recalcula acá.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    pub totales: Totales,
    #[serde(default)]
    pub por_mes: Vec<ResumenMes>,
    #[serde(default)]
    pub por_estado: Vec<ResumenEstado>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totales {
    pub cantidad: i64,
    pub cobrado: f64,
    pub pagado: f64,
    pub diferencia: f64,
}

/// Una fila por `anio_mes`; el backend excluye los registros sin mes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumenMes {
    pub anio_mes: String,
    pub cobrado: f64,
    pub pagado: f64,
    pub diferencia: f64,
}

/// Una fila por estado. `estado` puede ser null (filas importadas sin
/// estado asignado).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumenEstado {
    pub estado: Option<String>,
    pub cantidad: i64,
    pub cobrado: f64,
    pub pagado: f64,
    pub diferencia: f64,
}
