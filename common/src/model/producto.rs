use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Producto {
    pub id: i64,
    pub codigo: String,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub categoria_id: i64,
    pub categoria_nombre: Option<String>,
    pub proveedor_id: i64,
    pub proveedor_nombre: Option<String>,
    pub precio: f64,
    pub stock_minimo: f64,
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginaProductos {
    pub productos: Vec<Producto>,
    pub total: i64,
    pub total_paginas: i64,
    pub pagina: i64,
}
