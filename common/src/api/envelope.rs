//! Sobre de respuesta del backend.
//!
//! Los endpoints no son uniformes: unos responden `{isSuccess, detail,
//! message}` y otros `{success, data, message}`. La reconciliación de ambas
//! formas ocurre aquí y en ningún otro lugar; los servicios reciben siempre
//! un `Result` ya normalizado.

use serde::Deserialize;

use super::ErrorApi;

/// Mensaje mostrado cuando el backend falla sin explicar por qué.
pub const MENSAJE_GENERICO: &str = "Ocurrió un error inesperado. Intente nuevamente.";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sobre<T> {
    is_success: Option<bool>,
    success: Option<bool>,
    detail: Option<T>,
    data: Option<T>,
    message: Option<String>,
}

impl<T> Sobre<T> {
    /// Bandera de éxito, venga con el nombre que venga. Ausente cuenta como
    /// fallo: un sobre sin bandera no es un éxito silencioso.
    pub fn exito(&self) -> bool {
        self.is_success.or(self.success).unwrap_or(false)
    }

    fn mensaje(&self) -> String {
        match &self.message {
            Some(m) if !m.trim().is_empty() => m.clone(),
            _ => MENSAJE_GENERICO.to_string(),
        }
    }

    /// Extrae la carga útil. Un sobre exitoso sin `detail` ni `data` también
    /// es un fallo de negocio: el llamador esperaba datos.
    pub fn into_resultado(self) -> Result<T, ErrorApi> {
        let mensaje = self.mensaje();
        if !self.exito() {
            return Err(ErrorApi::Negocio(mensaje));
        }
        self.detail
            .or(self.data)
            .ok_or(ErrorApi::Negocio(mensaje))
    }

    /// Para operaciones sin carga útil (eliminar, otorgar, revocar):
    /// devuelve el mensaje del backend como confirmación.
    pub fn into_confirmacion(self) -> Result<String, ErrorApi> {
        let mensaje = self.mensaje();
        if self.exito() {
            Ok(mensaje)
        } else {
            Err(ErrorApi::Negocio(mensaje))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::cliente::PaginaClientes;

    #[test]
    fn forma_is_success_detail() {
        let crudo = r#"{
            "isSuccess": true,
            "detail": {
                "clientes": [{
                    "id": 7, "codigo": "CLI-0007", "nombre": "Acme",
                    "nit": "123456", "direccion": null,
                    "telefono1": "22224444", "telefono2": null,
                    "correoElectronico": "a@b.com",
                    "limiteCredito": 1500.0, "diasCredito": 30, "activo": true
                }],
                "total": 41, "totalPaginas": 5, "pagina": 1
            },
            "message": "ok"
        }"#;
        let sobre: Sobre<PaginaClientes> = serde_json::from_str(crudo).unwrap();
        let pagina = sobre.into_resultado().unwrap();
        assert_eq!(pagina.clientes.len(), 1);
        assert_eq!(pagina.clientes[0].nombre, "Acme");
        assert_eq!(pagina.total_paginas, 5);
    }

    #[test]
    fn forma_success_data() {
        let crudo = r#"{"success": true, "data": {"existe": false}, "message": ""}"#;
        #[derive(Debug, serde::Deserialize)]
        struct Existe {
            existe: bool,
        }
        let sobre: Sobre<Existe> = serde_json::from_str(crudo).unwrap();
        assert!(!sobre.into_resultado().unwrap().existe);
    }

    #[test]
    fn fallo_lleva_mensaje_del_backend() {
        let crudo = r#"{"isSuccess": false, "detail": null, "message": "NIT duplicado"}"#;
        let sobre: Sobre<serde_json::Value> = serde_json::from_str(crudo).unwrap();
        assert_eq!(
            sobre.into_resultado().unwrap_err(),
            ErrorApi::Negocio("NIT duplicado".to_string())
        );
    }

    #[test]
    fn fallo_sin_mensaje_usa_el_generico() {
        let crudo = r#"{"success": false}"#;
        let sobre: Sobre<serde_json::Value> = serde_json::from_str(crudo).unwrap();
        assert_eq!(
            sobre.into_resultado().unwrap_err(),
            ErrorApi::Negocio(MENSAJE_GENERICO.to_string())
        );
    }

    #[test]
    fn sobre_sin_bandera_no_es_exito() {
        let crudo = r#"{"detail": {"existe": true}}"#;
        let sobre: Sobre<serde_json::Value> = serde_json::from_str(crudo).unwrap();
        assert!(!sobre.exito());
        assert!(sobre.into_resultado().is_err());
    }

    #[test]
    fn exito_sin_carga_es_fallo_para_resultado() {
        let crudo = r#"{"isSuccess": true, "message": "sin datos"}"#;
        let sobre: Sobre<serde_json::Value> = serde_json::from_str(crudo).unwrap();
        assert_eq!(
            sobre.into_resultado().unwrap_err(),
            ErrorApi::Negocio("sin datos".to_string())
        );
    }

    #[test]
    fn confirmacion_acepta_exito_sin_carga() {
        let crudo = r#"{"isSuccess": true, "message": "Cliente eliminado"}"#;
        let sobre: Sobre<()> = serde_json::from_str(crudo).unwrap();
        assert_eq!(sobre.into_confirmacion().unwrap(), "Cliente eliminado");
    }
}
