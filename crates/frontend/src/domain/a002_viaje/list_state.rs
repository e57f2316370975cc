//! Filtros y paginado del listado de viajes.
//!
//! El estado vive en el contexto global para sobrevivir a los cambios
//! de pestaña; la única forma de mutarlo es `aplicar`, que concentra la
//! regla de invalidación: cualquier cambio que no sea de paginado
//! vuelve el offset a 0, así nunca queda una página vieja bajo filtros
//! nuevos.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListadoFiltros {
    pub estado: String,
    pub anio_mes: String,
    pub transportista_id: String,
    pub q: String,
    pub limit: u32,
    pub offset: u32,
}

impl Default for ListadoFiltros {
    fn default() -> Self {
        Self {
            estado: String::new(),
            anio_mes: String::new(),
            transportista_id: String::new(),
            q: String::new(),
            limit: 200,
            offset: 0,
        }
    }
}

/// Cambios que la UI puede aplicar sobre los filtros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CambioFiltro {
    Estado(String),
    AnioMes(String),
    Transportista(String),
    Busqueda(String),
    Limit(u32),
    PaginaSiguiente,
    PaginaAnterior,
}

impl ListadoFiltros {
    pub fn aplicar(&mut self, cambio: CambioFiltro) {
        match cambio {
            CambioFiltro::Estado(v) => {
                self.estado = v;
                self.offset = 0;
            }
            CambioFiltro::AnioMes(v) => {
                self.anio_mes = v;
                self.offset = 0;
            }
            CambioFiltro::Transportista(v) => {
                self.transportista_id = v;
                self.offset = 0;
            }
            CambioFiltro::Busqueda(v) => {
                self.q = v;
                self.offset = 0;
            }
            CambioFiltro::Limit(v) => {
                self.limit = v.max(1);
                self.offset = 0;
            }
            // Siguiente no chequea contra un total: una página vacía es
            // un resultado válido, no un error.
            CambioFiltro::PaginaSiguiente => {
                self.offset = self.offset.saturating_add(self.limit);
            }
            CambioFiltro::PaginaAnterior => {
                self.offset = self.offset.saturating_sub(self.limit);
            }
        }
    }

    /// Vuelta a la primera página (tras un alta exitosa).
    pub fn reset_offset(&mut self) {
        self.offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn con_offset(offset: u32) -> ListadoFiltros {
        ListadoFiltros {
            offset,
            ..ListadoFiltros::default()
        }
    }

    #[test]
    fn test_todo_cambio_de_filtro_resetea_offset() {
        let cambios = [
            CambioFiltro::Estado("transporte".to_string()),
            CambioFiltro::AnioMes("2025-06".to_string()),
            CambioFiltro::Transportista("3".to_string()),
            CambioFiltro::Busqueda("OC-1".to_string()),
            CambioFiltro::Limit(50),
        ];
        for cambio in cambios {
            let mut filtros = con_offset(400);
            filtros.aplicar(cambio.clone());
            assert_eq!(filtros.offset, 0, "offset debía resetearse para {cambio:?}");
        }
    }

    #[test]
    fn test_paginado() {
        let mut filtros = ListadoFiltros::default();
        filtros.aplicar(CambioFiltro::PaginaSiguiente);
        assert_eq!(filtros.offset, 200);
        filtros.aplicar(CambioFiltro::PaginaSiguiente);
        assert_eq!(filtros.offset, 400);
        filtros.aplicar(CambioFiltro::PaginaAnterior);
        assert_eq!(filtros.offset, 200);
    }

    #[test]
    fn test_pagina_anterior_en_cero_es_noop() {
        let mut filtros = ListadoFiltros::default();
        let antes = filtros.clone();
        filtros.aplicar(CambioFiltro::PaginaAnterior);
        assert_eq!(filtros, antes);
    }

    #[test]
    fn test_pagina_anterior_con_offset_corto_queda_en_cero() {
        let mut filtros = con_offset(120);
        filtros.aplicar(CambioFiltro::PaginaAnterior);
        assert_eq!(filtros.offset, 0);
    }

    #[test]
    fn test_reset_offset_no_toca_los_filtros() {
        let mut filtros = con_offset(600);
        filtros.estado = "transporte".to_string();
        filtros.reset_offset();
        assert_eq!(filtros.offset, 0);
        assert_eq!(filtros.estado, "transporte");
    }

    #[test]
    fn test_limit_minimo_uno() {
        let mut filtros = ListadoFiltros::default();
        filtros.aplicar(CambioFiltro::Limit(0));
        assert_eq!(filtros.limit, 1);
    }
}
