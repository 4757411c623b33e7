use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rol {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    /// Presente solo cuando se pide el rol con su detalle de permisos.
    pub permisos: Option<Vec<Permiso>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permiso {
    pub id: i64,
    pub codigo: String,
    pub nombre: String,
    pub modulo: String,
}
