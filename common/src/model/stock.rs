use serde::{Deserialize, Serialize};

/// Clasificación de salud de una existencia, derivada por el backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NivelAlerta {
    SinStock,
    Critico,
    Bajo,
    Normal,
}

impl NivelAlerta {
    pub fn etiqueta(&self) -> &'static str {
        match self {
            NivelAlerta::SinStock => "Sin stock",
            NivelAlerta::Critico => "Crítico",
            NivelAlerta::Bajo => "Bajo",
            NivelAlerta::Normal => "Normal",
        }
    }
}

/// Existencia de un producto en una bodega. De solo lectura en este
/// cliente: se modifica indirectamente con entradas y salidas.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub id: i64,
    pub producto_id: i64,
    pub producto_codigo: String,
    pub producto_nombre: String,
    pub bodega_id: i64,
    pub bodega_nombre: String,
    pub cantidad_actual: f64,
    pub cantidad_minima: f64,
    pub cantidad_reservada: f64,
    pub cantidad_disponible: f64,
    pub nivel_alerta: NivelAlerta,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginaStock {
    pub stock: Vec<Stock>,
    pub total: i64,
    pub total_paginas: i64,
    pub pagina: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginaMovimientos {
    pub movimientos: Vec<Movimiento>,
    pub total: i64,
    pub total_paginas: i64,
    pub pagina: i64,
}

/// Movimiento ya registrado, tal como lo lista el backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movimiento {
    pub id: i64,
    pub tipo: String,
    pub producto_nombre: String,
    pub bodega_nombre: String,
    pub cantidad: f64,
    pub fecha: String,
    pub observaciones: Option<String>,
}
