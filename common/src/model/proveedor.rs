use serde::{Deserialize, Serialize};

/// El backend expone la clave de proveedor como `idProveedor`, a diferencia
/// del resto de entidades que usan `id`. Se respeta tal cual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proveedor {
    pub id_proveedor: i64,
    pub nombre: String,
    pub contacto: Option<String>,
    pub telefono: Option<String>,
    pub correo: Option<String>,
    pub nit: Option<String>,
    pub direccion: Option<String>,
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginaProveedores {
    pub proveedores: Vec<Proveedor>,
    pub total: i64,
    pub total_paginas: i64,
    pub pagina: i64,
}
