use serde::{Deserialize, Serialize};

/// Cliente tal como lo entrega el backend. El `codigo` lo asigna el
/// servidor al crear; el cliente nunca lo inventa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    pub id: i64,
    pub codigo: String,
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

/// Página de clientes dentro del `detail` del sobre de respuesta.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginaClientes {
    pub clientes: Vec<Cliente>,
    pub total: i64,
    pub total_paginas: i64,
    pub pagina: i64,
}
