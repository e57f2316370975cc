//! Borrador de alta de viaje.
//!
//! Los campos se editan como texto crudo (string vacío, no null) y la
//! coerción recién pasa al armar el payload. La validación corta en el
//! primer error: O.Carga y transportista son los únicos obligatorios.

use chrono::NaiveDate;
use contracts::domain::a002_viaje::aggregate::{EstadoViaje, ViajeCreate};

use crate::shared::coerce::{blank_to_null, to_number_or_null};

#[derive(Debug, Clone, PartialEq)]
pub struct CargaViaje {
    pub estado: EstadoViaje,
    pub fecha: String,
    pub dia: String,
    pub o_carga: String,
    pub anio_mes: String,
    pub cliente_destino: String,
    pub transportista_id: String,
    pub cod_transporte: String,
    pub ingrese_transporte: String,
    pub km: String,
    pub tn_orden_carga: String,
    pub tn_cargadas: String,
    pub aforo: String,
    pub tarifa_asign: String,
    pub flete_cobrado: String,
    pub tarifa_tte: String,
    pub flete_pagado: String,
    pub observacion: String,
}

impl Default for CargaViaje {
    fn default() -> Self {
        Self {
            estado: EstadoViaje::Transporte,
            fecha: String::new(),
            dia: String::new(),
            o_carga: String::new(),
            anio_mes: String::new(),
            cliente_destino: String::new(),
            transportista_id: String::new(),
            cod_transporte: String::new(),
            ingrese_transporte: String::new(),
            km: String::new(),
            tn_orden_carga: String::new(),
            tn_cargadas: String::new(),
            aforo: String::new(),
            tarifa_asign: String::new(),
            flete_cobrado: String::new(),
            tarifa_tte: String::new(),
            flete_pagado: String::new(),
            observacion: String::new(),
        }
    }
}

/// Campos de texto del borrador. Estado y transportista tienen setters
/// propios porque no son texto libre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampoViaje {
    Fecha,
    Dia,
    OCarga,
    AnioMes,
    ClienteDestino,
    CodTransporte,
    IngreseTransporte,
    Km,
    TnOrdenCarga,
    TnCargadas,
    Aforo,
    TarifaAsign,
    FleteCobrado,
    TarifaTte,
    FletePagado,
    Observacion,
}

impl CargaViaje {
    /// Valor crudo del campo, para los inputs.
    pub fn valor(&self, campo: CampoViaje) -> String {
        match campo {
            CampoViaje::Fecha => self.fecha.clone(),
            CampoViaje::Dia => self.dia.clone(),
            CampoViaje::OCarga => self.o_carga.clone(),
            CampoViaje::AnioMes => self.anio_mes.clone(),
            CampoViaje::ClienteDestino => self.cliente_destino.clone(),
            CampoViaje::CodTransporte => self.cod_transporte.clone(),
            CampoViaje::IngreseTransporte => self.ingrese_transporte.clone(),
            CampoViaje::Km => self.km.clone(),
            CampoViaje::TnOrdenCarga => self.tn_orden_carga.clone(),
            CampoViaje::TnCargadas => self.tn_cargadas.clone(),
            CampoViaje::Aforo => self.aforo.clone(),
            CampoViaje::TarifaAsign => self.tarifa_asign.clone(),
            CampoViaje::FleteCobrado => self.flete_cobrado.clone(),
            CampoViaje::TarifaTte => self.tarifa_tte.clone(),
            CampoViaje::FletePagado => self.flete_pagado.clone(),
            CampoViaje::Observacion => self.observacion.clone(),
        }
    }

    /// Única transición de edición: la capa de render no conoce reglas
    /// de campos, solo reporta (campo, valor).
    pub fn set(&mut self, campo: CampoViaje, valor: String) {
        match campo {
            CampoViaje::Fecha => self.fecha = valor,
            CampoViaje::Dia => self.dia = valor,
            CampoViaje::OCarga => self.o_carga = valor,
            CampoViaje::AnioMes => self.anio_mes = valor,
            CampoViaje::ClienteDestino => self.cliente_destino = valor,
            CampoViaje::CodTransporte => self.cod_transporte = valor,
            CampoViaje::IngreseTransporte => self.ingrese_transporte = valor,
            CampoViaje::Km => self.km = valor,
            CampoViaje::TnOrdenCarga => self.tn_orden_carga = valor,
            CampoViaje::TnCargadas => self.tn_cargadas = valor,
            CampoViaje::Aforo => self.aforo = valor,
            CampoViaje::TarifaAsign => self.tarifa_asign = valor,
            CampoViaje::TarifaTte => self.tarifa_tte = valor,
            CampoViaje::FleteCobrado => self.flete_cobrado = valor,
            CampoViaje::FletePagado => self.flete_pagado = valor,
            CampoViaje::Observacion => self.observacion = valor,
        }
    }

    pub fn set_estado(&mut self, estado: EstadoViaje) {
        self.estado = estado;
    }

    pub fn set_transportista(&mut self, id: String) {
        self.transportista_id = id;
    }

    /// Valida y coerciona el borrador al payload de alta. Devuelve el
    /// primer error encontrado; los números ilegibles viajan como null
    /// (tolerancia heredada de la carga por planilla).
    pub fn payload(&self) -> Result<ViajeCreate, String> {
        let o_carga = self.o_carga.trim();
        if o_carga.is_empty() {
            return Err("O.Carga es obligatorio".to_string());
        }

        let transportista_id = self
            .transportista_id
            .trim()
            .parse::<i64>()
            .map_err(|_| "Seleccioná un transportista".to_string())?;

        Ok(ViajeCreate {
            estado: self.estado,
            fecha: NaiveDate::parse_from_str(self.fecha.trim(), "%Y-%m-%d").ok(),
            dia: blank_to_null(&self.dia),
            o_carga: o_carga.to_string(),
            anio_mes: blank_to_null(&self.anio_mes),
            cliente_destino: blank_to_null(&self.cliente_destino),
            transportista_id,
            cod_transporte: blank_to_null(&self.cod_transporte),
            ingrese_transporte: blank_to_null(&self.ingrese_transporte),
            km: to_number_or_null(&self.km),
            tn_orden_carga: to_number_or_null(&self.tn_orden_carga),
            tn_cargadas: to_number_or_null(&self.tn_cargadas),
            aforo: to_number_or_null(&self.aforo),
            tarifa_asign: to_number_or_null(&self.tarifa_asign),
            flete_cobrado: to_number_or_null(&self.flete_cobrado),
            tarifa_tte: to_number_or_null(&self.tarifa_tte),
            flete_pagado: to_number_or_null(&self.flete_pagado),
            observacion: blank_to_null(&self.observacion),
        })
    }

    /// Limpieza post-alta: quedan el estado y el transportista elegidos
    /// para cargar varios viajes seguidos del mismo proveedor.
    pub fn reset_tras_alta(&mut self) {
        let estado = self.estado;
        let transportista_id = self.transportista_id.clone();
        *self = Self::default();
        self.estado = estado;
        self.transportista_id = transportista_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn borrador_valido() -> CargaViaje {
        let mut carga = CargaViaje::default();
        carga.set(CampoViaje::OCarga, " OC-123 ".to_string());
        carga.set_transportista("7".to_string());
        carga
    }

    #[test]
    fn test_sin_o_carga_corta_antes_de_la_red() {
        let mut carga = CargaViaje::default();
        carga.set_transportista("7".to_string());
        assert_eq!(carga.payload().unwrap_err(), "O.Carga es obligatorio");

        carga.set(CampoViaje::OCarga, "   ".to_string());
        assert_eq!(carga.payload().unwrap_err(), "O.Carga es obligatorio");
    }

    #[test]
    fn test_sin_transportista_es_el_segundo_error() {
        let mut carga = CargaViaje::default();
        carga.set(CampoViaje::OCarga, "OC-1".to_string());
        assert_eq!(carga.payload().unwrap_err(), "Seleccioná un transportista");
    }

    #[test]
    fn test_payload_coerciona_numeros_y_blancos() {
        let mut carga = borrador_valido();
        carga.set(CampoViaje::Km, "1234,56".to_string());
        carga.set(CampoViaje::TarifaAsign, "12km".to_string());
        carga.set(CampoViaje::Dia, String::new());
        carga.set(CampoViaje::Observacion, "urgente".to_string());
        carga.set(CampoViaje::Fecha, "2025-06-15".to_string());

        let payload = carga.payload().unwrap();
        assert_eq!(payload.o_carga, "OC-123");
        assert_eq!(payload.transportista_id, 7);
        assert_eq!(payload.km, Some(1234.56));
        assert_eq!(payload.tarifa_asign, None); // ilegible = ausente
        assert_eq!(payload.dia, None);
        assert_eq!(payload.observacion, Some("urgente".to_string()));
        assert_eq!(
            payload.fecha,
            NaiveDate::from_ymd_opt(2025, 6, 15)
        );
        assert_eq!(payload.estado, EstadoViaje::Transporte);
    }

    #[test]
    fn test_fecha_ilegible_viaja_como_null() {
        let mut carga = borrador_valido();
        carga.set(CampoViaje::Fecha, "15/06/2025".to_string());
        assert_eq!(carga.payload().unwrap().fecha, None);
    }

    #[test]
    fn test_reset_conserva_estado_y_transportista() {
        let mut carga = borrador_valido();
        carga.set_estado(EstadoViaje::EnCamino);
        carga.set(CampoViaje::Km, "120".to_string());
        carga.set(CampoViaje::ClienteDestino, "Rosario".to_string());

        carga.reset_tras_alta();

        assert_eq!(carga.estado, EstadoViaje::EnCamino);
        assert_eq!(carga.transportista_id, "7");
        assert_eq!(carga.o_carga, "");
        assert_eq!(carga.km, "");
        assert_eq!(carga.cliente_destino, "");
    }
}
