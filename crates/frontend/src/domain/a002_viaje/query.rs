//! Derivación del query remoto a partir de los filtros del listado.
//!
//! La representación canónica (claves en orden fijo, valores vacíos
//! omitidos) permite comparar dos estados de filtros por igualdad: si
//! derivan el mismo query, no hay nada que volver a pedir.

use super::list_state::ListadoFiltros;

/// Pares (clave, valor) canónicos del query de listado. Solo viajan
/// claves con valor definido; `transportista_id` se coerciona a número
/// y si no parsea se trata como ausente.
pub fn query_pairs(filtros: &ListadoFiltros) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();

    let estado = filtros.estado.trim();
    if !estado.is_empty() {
        pairs.push(("estado", estado.to_string()));
    }

    let anio_mes = filtros.anio_mes.trim();
    if !anio_mes.is_empty() {
        pairs.push(("anio_mes", anio_mes.to_string()));
    }

    if let Ok(id) = filtros.transportista_id.trim().parse::<i64>() {
        pairs.push(("transportista_id", id.to_string()));
    }

    let q = filtros.q.trim();
    if !q.is_empty() {
        pairs.push(("q", q.to_string()));
    }

    pairs.push(("limit", filtros.limit.to_string()));
    pairs.push(("offset", filtros.offset.to_string()));
    pairs
}

/// Query string percent-encodeado listo para pegar a la URL.
pub fn query_string(filtros: &ListadoFiltros) -> String {
    query_pairs(filtros)
        .into_iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(&v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_viaje::list_state::CambioFiltro;

    #[test]
    fn test_filtros_vacios_solo_paginado() {
        let pairs = query_pairs(&ListadoFiltros::default());
        assert_eq!(
            pairs,
            vec![
                ("limit", "200".to_string()),
                ("offset", "0".to_string()),
            ]
        );
    }

    #[test]
    fn test_orden_canonico_completo() {
        let filtros = ListadoFiltros {
            estado: "transporte".to_string(),
            anio_mes: " 2025-06 ".to_string(),
            transportista_id: "7".to_string(),
            q: "rosario".to_string(),
            limit: 50,
            offset: 100,
        };
        assert_eq!(
            query_pairs(&filtros),
            vec![
                ("estado", "transporte".to_string()),
                ("anio_mes", "2025-06".to_string()),
                ("transportista_id", "7".to_string()),
                ("q", "rosario".to_string()),
                ("limit", "50".to_string()),
                ("offset", "100".to_string()),
            ]
        );
    }

    #[test]
    fn test_transportista_ilegible_se_omite() {
        let filtros = ListadoFiltros {
            transportista_id: "abc".to_string(),
            ..ListadoFiltros::default()
        };
        assert!(query_pairs(&filtros).iter().all(|(k, _)| *k != "transportista_id"));
    }

    #[test]
    fn test_independiente_del_orden_de_seteo() {
        let mut a = ListadoFiltros::default();
        a.aplicar(CambioFiltro::Estado("transporte".to_string()));
        a.aplicar(CambioFiltro::Busqueda("OC".to_string()));

        let mut b = ListadoFiltros::default();
        b.aplicar(CambioFiltro::Busqueda("OC".to_string()));
        b.aplicar(CambioFiltro::Estado("transporte".to_string()));

        assert_eq!(query_pairs(&a), query_pairs(&b));
    }

    #[test]
    fn test_query_string_encodea_valores() {
        let filtros = ListadoFiltros {
            q: "cliente destino".to_string(),
            estado: "viajes en camino".to_string(),
            ..ListadoFiltros::default()
        };
        assert_eq!(
            query_string(&filtros),
            "estado=viajes%20en%20camino&q=cliente%20destino&limit=200&offset=0"
        );
    }
}
