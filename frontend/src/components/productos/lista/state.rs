use common::model::producto::Producto;

use crate::components::compartidos::alerta::Alerta;

pub const TAMANO_PAGINA: i64 = 10;

/// Estado del listado de productos: página visible, filtro de búsqueda,
/// paginación que reporta el backend y el producto pendiente de confirmar
/// su eliminación.
pub struct ProductosLista {
    pub productos: Vec<Producto>,
    pub cargando: bool,
    pub alerta: Option<Alerta>,
    pub termino: String,
    pub pagina: i64,
    pub total: i64,
    pub total_paginas: i64,
    pub eliminar_pendiente: Option<Producto>,
}

impl ProductosLista {
    pub fn new() -> Self {
        ProductosLista {
            productos: Vec::new(),
            cargando: false,
            alerta: None,
            termino: String::new(),
            pagina: 1,
            total: 0,
            total_paginas: 0,
            eliminar_pendiente: None,
        }
    }
}
