use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bodega {
    pub id: i64,
    pub codigo: String,
    pub nombre: String,
    pub direccion: Option<String>,
    pub responsable: Option<String>,
    pub capacidad: Option<f64>,
    pub activa: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginaBodegas {
    pub bodegas: Vec<Bodega>,
    pub total: i64,
    pub total_paginas: i64,
    pub pagina: i64,
}
