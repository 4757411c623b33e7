use serde::{Deserialize, Serialize};

/// El `codigoPrefijo` es único y debe ser 3+ letras mayúsculas; el chequeo
/// de formato vive en `crate::validacion` y la unicidad la valida el backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Categoria {
    pub id: i64,
    pub codigo_prefijo: String,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginaCategorias {
    pub categorias: Vec<Categoria>,
    pub total: i64,
    pub total_paginas: i64,
    pub pagina: i64,
}
