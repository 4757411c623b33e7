use common::api::ResultadoApi;
use common::model::producto::{PaginaProductos, Producto};
use common::requests::{ConsultaUnicidad, DatosProducto, VeredictoUnicidad};

use super::{endpoints, http};

pub async fn listar(
    pagina: i64,
    tamano: i64,
    termino: Option<&str>,
) -> ResultadoApi<PaginaProductos> {
    http::obtener(&endpoints::producto::listar(pagina, tamano, termino)).await
}

pub async fn obtener(id: i64) -> ResultadoApi<Producto> {
    http::obtener(&endpoints::producto::obtener(id)).await
}

/// Búsqueda directa por término, sin paginar. Alimenta el selector de
/// producto de los movimientos de inventario.
pub async fn buscar(termino: &str) -> ResultadoApi<Vec<Producto>> {
    http::obtener(&endpoints::producto::buscar(termino)).await
}

pub async fn crear(datos: &DatosProducto) -> ResultadoApi<Producto> {
    http::crear(&endpoints::producto::crear(), datos).await
}

pub async fn actualizar(id: i64, datos: &DatosProducto) -> ResultadoApi<Producto> {
    http::actualizar(&endpoints::producto::actualizar(id), datos).await
}

pub async fn eliminar(id: i64) -> ResultadoApi<String> {
    http::eliminar(&endpoints::producto::eliminar(id)).await
}

pub async fn validar_codigo(consulta: &ConsultaUnicidad) -> ResultadoApi<VeredictoUnicidad> {
    http::crear(&endpoints::producto::validar_codigo(), consulta).await
}
