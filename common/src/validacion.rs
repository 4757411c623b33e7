//! Chequeos de formato previos al envío y coerción de campos de formulario.
//!
//! Son cortesías de UX: el backend vuelve a validar todo y puede rechazar
//! por su cuenta (unicidad, reglas de negocio). Nada de esto es autoritativo.

use regex::Regex;

/// Prefijo de categoría: tres o más letras mayúsculas, nada más.
pub fn es_prefijo_valido(valor: &str) -> bool {
    Regex::new(r"^[A-Z]{3,}$").unwrap().is_match(valor)
}

/// Teléfonos: dígitos, espacios, guiones y paréntesis.
pub fn es_telefono_valido(valor: &str) -> bool {
    Regex::new(r"^[\d\s\-()]+$").unwrap().is_match(valor)
}

pub fn es_correo_valido(valor: &str) -> bool {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap().is_match(valor)
}

/// Recorta y convierte a `None` los opcionales vacíos, que el backend
/// espera como `null` y no como cadena vacía.
pub fn campo_opcional(valor: &str) -> Option<String> {
    let recortado = valor.trim();
    if recortado.is_empty() {
        None
    } else {
        Some(recortado.to_string())
    }
}

/// Campo de texto obligatorio: recortado y no vacío, o nada.
pub fn texto_requerido(valor: &str) -> Option<String> {
    campo_opcional(valor)
}

/// Números de formulario (precio, capacidad, límite de crédito): se aceptan
/// solo valores no negativos.
pub fn numero_no_negativo(valor: &str) -> Option<f64> {
    valor.trim().parse::<f64>().ok().filter(|n| *n >= 0.0)
}

pub fn entero_no_negativo(valor: &str) -> Option<i32> {
    valor.trim().parse::<i32>().ok().filter(|n| *n >= 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefijo_exige_tres_mayusculas() {
        assert!(es_prefijo_valido("PLA"));
        assert!(es_prefijo_valido("HOGAR"));
        assert!(!es_prefijo_valido("PL"));
        assert!(!es_prefijo_valido("pla"));
        assert!(!es_prefijo_valido("PLA1"));
        assert!(!es_prefijo_valido(""));
    }

    #[test]
    fn telefono_admite_separadores_comunes() {
        assert!(es_telefono_valido("22224444"));
        assert!(es_telefono_valido("(502) 2222-4444"));
        assert!(!es_telefono_valido("2222x4444"));
        assert!(!es_telefono_valido(""));
    }

    #[test]
    fn correo_basico() {
        assert!(es_correo_valido("a@b.com"));
        assert!(!es_correo_valido("a@b"));
        assert!(!es_correo_valido("a b@c.com"));
    }

    #[test]
    fn opcional_vacio_se_vuelve_none() {
        assert_eq!(campo_opcional("  "), None);
        assert_eq!(campo_opcional(" Acme "), Some("Acme".to_string()));
    }

    #[test]
    fn numeros_negativos_se_rechazan() {
        assert_eq!(numero_no_negativo("12.5"), Some(12.5));
        assert_eq!(numero_no_negativo(" 0 "), Some(0.0));
        assert_eq!(numero_no_negativo("-1"), None);
        assert_eq!(numero_no_negativo("abc"), None);
        assert_eq!(entero_no_negativo("30"), Some(30));
        assert_eq!(entero_no_negativo("-3"), None);
    }
}
