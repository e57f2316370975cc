//! Coerción de input libre a valores del payload.
//!
//! Las reglas son deliberadamente tolerantes: un número ilegible no es
//! un error de validación, es un campo ausente.

/// Convierte texto libre a número. Acepta coma o punto como separador
/// decimal. Vacío o ilegible es `None`; nunca falla.
pub fn to_number_or_null(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    s.replace(',', ".").parse::<f64>().ok()
}

/// Texto vacío viaja como null en el payload; en edición sigue siendo
/// string vacío.
pub fn blank_to_null(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coma_decimal() {
        assert_eq!(to_number_or_null("1234,56"), Some(1234.56));
        assert_eq!(to_number_or_null("1234.56"), Some(1234.56));
        assert_eq!(to_number_or_null("  120 "), Some(120.0));
    }

    #[test]
    fn test_vacio_e_ilegible_son_null() {
        assert_eq!(to_number_or_null(""), None);
        assert_eq!(to_number_or_null("   "), None);
        assert_eq!(to_number_or_null("abc"), None);
        assert_eq!(to_number_or_null("12km"), None);
        assert_eq!(to_number_or_null("1.234,56"), None); // separador de miles no soportado
    }

    #[test]
    fn test_blank_to_null() {
        assert_eq!(blank_to_null(""), None);
        assert_eq!(blank_to_null("lunes"), Some("lunes".to_string()));
    }
}
