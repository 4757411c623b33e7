//! Cargas de solicitud hacia el backend.
//!
//! Los formularios arman estas estructuras ya recortadas y coercionadas
//! (ver `crate::validacion`); los servicios las serializan tal cual. En los
//! `Datos*` un `id` en `None` significa creación y el backend asigna el
//! código; con `Some(id)` es actualización.

use serde::{Deserialize, Serialize};

use crate::model::usuario::Usuario;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredencialesLogin {
    pub correo: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SesionIniciada {
    pub token: String,
    pub usuario: Usuario,
}

/// Una sola carga para el endpoint de reinicio: el administrador envía solo
/// el correo (el backend genera y envía una contraseña temporal) y el flujo
/// de primer ingreso añade la contraseña nueva elegida.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReinicioPassword {
    pub correo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_nueva: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatosCliente {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Solo viaja en edición; al crear lo asigna el servidor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo: Option<String>,
    pub nombre: String,
    pub nit: Option<String>,
    pub direccion: Option<String>,
    pub telefono1: Option<String>,
    pub telefono2: Option<String>,
    pub correo_electronico: Option<String>,
    pub limite_credito: f64,
    pub dias_credito: i32,
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatosProducto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub categoria_id: i64,
    pub proveedor_id: i64,
    pub precio: f64,
    pub stock_minimo: f64,
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatosProveedor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_proveedor: Option<i64>,
    pub nombre: String,
    pub contacto: Option<String>,
    pub telefono: Option<String>,
    pub correo: Option<String>,
    pub nit: Option<String>,
    pub direccion: Option<String>,
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatosBodega {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub codigo: String,
    pub nombre: String,
    pub direccion: Option<String>,
    pub responsable: Option<String>,
    pub capacidad: Option<f64>,
    pub activa: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatosCategoria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub codigo_prefijo: String,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatosUsuario {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre: String,
    pub correo: String,
    pub rol_id: i64,
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatosRol {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre: String,
    pub descripcion: Option<String>,
}

/// Entrada o salida de inventario; si es una u otra lo decide el endpoint
/// al que la envía el servicio, no el formulario.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatosMovimiento {
    pub producto_id: i64,
    pub bodega_id: i64,
    pub cantidad: f64,
    pub observaciones: Option<String>,
}

/// Consulta de unicidad para los campos con validación asíncrona. En
/// edición se excluye al propio registro.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultaUnicidad {
    pub valor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluir_id: Option<i64>,
}

/// Veredicto del backend para una consulta de unicidad.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VeredictoUnicidad {
    pub existe: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creacion_omite_id_y_serializa_camel_case() {
        let datos = DatosCliente {
            id: None,
            codigo: None,
            nombre: "Acme".to_string(),
            nit: Some("123456".to_string()),
            direccion: None,
            telefono1: Some("22224444".to_string()),
            telefono2: None,
            correo_electronico: Some("a@b.com".to_string()),
            limite_credito: 0.0,
            dias_credito: 0,
            activo: true,
        };
        let json = serde_json::to_value(&datos).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("codigo").is_none());
        assert_eq!(json["correoElectronico"], "a@b.com");
        assert_eq!(json["telefono2"], serde_json::Value::Null);
    }

    #[test]
    fn proveedor_serializa_su_clave_propia() {
        let datos = DatosProveedor {
            id_proveedor: Some(9),
            nombre: "Proveedora SA".to_string(),
            contacto: None,
            telefono: None,
            correo: None,
            nit: None,
            direccion: None,
            activo: true,
        };
        let json = serde_json::to_value(&datos).unwrap();
        assert_eq!(json["idProveedor"], 9);
    }
}
