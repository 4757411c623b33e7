//! Lectura del token de sesión.
//!
//! El cliente no verifica firmas — no tiene el secreto y solo usa el token
//! para decidir qué vista mostrar; la autoridad es siempre el backend. Aquí
//! solo se decodifica la carga del JWT y se compara su expiración.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

/// Claims que interesan al cliente. El backend emite más; se ignoran.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Claims {
    #[serde(default, alias = "unique_name")]
    pub nombre: Option<String>,
    #[serde(default, alias = "email")]
    pub correo: Option<String>,
    pub exp: i64,
}

/// Decodifica la carga de un JWT sin verificar la firma. Cualquier defecto
/// de forma (sin puntos, base64 inválido, JSON ajeno) da `None`.
pub fn claims_de_token(token: &str) -> Option<Claims> {
    let carga = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(carga.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Un token ausente, vencido o indescifrable vale lo mismo: sesión inválida.
pub fn es_token_valido(token: Option<&str>, ahora_epoch: i64) -> bool {
    match token {
        Some(t) => claims_de_token(t).is_some_and(|c| c.exp > ahora_epoch),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_con_exp(exp: i64) -> String {
        let carga = serde_json::json!({
            "unique_name": "Admin",
            "email": "admin@plastihogar.com",
            "exp": exp
        });
        format!(
            "cabecera.{}.firma",
            URL_SAFE_NO_PAD.encode(carga.to_string())
        )
    }

    #[test]
    fn token_vigente_es_valido() {
        let token = token_con_exp(2_000_000_000);
        assert!(es_token_valido(Some(&token), 1_900_000_000));
        let claims = claims_de_token(&token).unwrap();
        assert_eq!(claims.nombre.as_deref(), Some("Admin"));
    }

    #[test]
    fn token_vencido_es_invalido() {
        let token = token_con_exp(1_000_000_000);
        assert!(!es_token_valido(Some(&token), 1_900_000_000));
    }

    #[test]
    fn exp_igual_a_ahora_cuenta_como_vencido() {
        let token = token_con_exp(1_900_000_000);
        assert!(!es_token_valido(Some(&token), 1_900_000_000));
    }

    #[test]
    fn token_ausente_o_ilegible_es_invalido() {
        assert!(!es_token_valido(None, 0));
        assert!(!es_token_valido(Some("no-es-un-jwt"), 0));
        assert!(!es_token_valido(Some("a.%%%%.c"), 0));
        // carga base64 válida pero sin `exp`
        let sin_exp = format!("a.{}.c", URL_SAFE_NO_PAD.encode(r#"{"sub":"1"}"#));
        assert!(!es_token_valido(Some(&sin_exp), 0));
    }
}
