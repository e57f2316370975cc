use serde::{Deserialize, Serialize};

/// Transportista tal como lo devuelve el backend. El `id` lo asigna el
/// servidor; `nombre` es único.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transportista {
    pub id: i64,
    pub nombre: String,
}

/// Payload de alta de transportista.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportistaCreate {
    pub nombre: String,
}

impl TransportistaCreate {
    /// Arma el payload a partir del input crudo. Un nombre en blanco se
    /// rechaza acá, sin llegar al backend.
    pub fn new(nombre: &str) -> Result<Self, String> {
        let nombre = nombre.trim();
        if nombre.is_empty() {
            return Err("Escribí el nombre del transportista".to_string());
        }
        Ok(Self {
            nombre: nombre.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nombre_recortado() {
        let payload = TransportistaCreate::new("  Transporte Sur  ").unwrap();
        assert_eq!(payload.nombre, "Transporte Sur");
    }

    #[test]
    fn test_nombre_vacio_rechazado() {
        assert!(TransportistaCreate::new("").is_err());
        assert!(TransportistaCreate::new("   ").is_err());
    }
}
