//! Formateo de números y claves de período para mostrar (estilo es-AR:
//! punto de miles, coma decimal).

/// Agrupa la parte entera de a tres dígitos con punto, respetando el
/// signo.
fn agrupar_miles(entero: &str) -> String {
    let mut result = String::new();
    let chars: Vec<char> = entero.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push('.');
        }
        result.push(*c);
    }

    result.chars().rev().collect()
}

/// Formatea con la cantidad pedida de decimales y separador de miles.
pub fn format_decimal(value: f64, decimales: usize) -> String {
    let formatted = format!("{:.*}", decimales, value);
    match formatted.split_once('.') {
        Some((entero, dec)) => format!("{},{}", agrupar_miles(entero), dec),
        None => agrupar_miles(&formatted),
    }
}

/// Moneda para la tabla y los KPI. Un valor ausente se muestra como
/// cero, igual que en la planilla original.
pub fn money(value: Option<f64>) -> String {
    let v = value.unwrap_or(0.0);
    if v < 0.0 {
        format!("-$ {}", format_decimal(-v, 2))
    } else {
        format!("$ {}", format_decimal(v, 2))
    }
}

/// Enteros con separador de miles (cantidades de viajes).
pub fn cantidad(value: i64) -> String {
    agrupar_miles(&value.to_string())
}

/// Normaliza la clave Año/Mes para mostrar: "202506" -> "2025-06".
/// Valores ya canónicos (o cualquier otro texto) pasan sin tocar.
pub fn format_anio_mes(v: &str) -> String {
    let s = v.trim();
    if s.len() == 6 && s.bytes().all(|b| b.is_ascii_digit()) {
        return format!("{}-{}", &s[..4], &s[4..]);
    }
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money() {
        assert_eq!(money(Some(1234.56)), "$ 1.234,56");
        assert_eq!(money(Some(1234567.891)), "$ 1.234.567,89");
        assert_eq!(money(Some(0.0)), "$ 0,00");
        assert_eq!(money(None), "$ 0,00");
        assert_eq!(money(Some(-1234.5)), "-$ 1.234,50");
    }

    #[test]
    fn test_cantidad() {
        assert_eq!(cantidad(0), "0");
        assert_eq!(cantidad(1234), "1.234");
        assert_eq!(cantidad(1234567), "1.234.567");
        assert_eq!(cantidad(-1234), "-1.234");
    }

    #[test]
    fn test_format_anio_mes() {
        assert_eq!(format_anio_mes("202506"), "2025-06");
        assert_eq!(format_anio_mes("2025-06"), "2025-06");
        assert_eq!(format_anio_mes(""), "");
        assert_eq!(format_anio_mes(" 202512 "), "2025-12");
        assert_eq!(format_anio_mes("junio"), "junio");
    }
}
