use common::api::ResultadoApi;
use common::model::bodega::{Bodega, PaginaBodegas};
use common::requests::{ConsultaUnicidad, DatosBodega, VeredictoUnicidad};

use super::{endpoints, http};

pub async fn listar(pagina: i64, tamano: i64, termino: Option<&str>) -> ResultadoApi<PaginaBodegas> {
    http::obtener(&endpoints::bodega::listar(pagina, tamano, termino)).await
}

/// Catálogo completo para selectores (movimientos, filtros de stock).
pub async fn todas() -> ResultadoApi<Vec<Bodega>> {
    http::obtener(&endpoints::bodega::todas()).await
}

pub async fn crear(datos: &DatosBodega) -> ResultadoApi<Bodega> {
    http::crear(&endpoints::bodega::crear(), datos).await
}

pub async fn actualizar(id: i64, datos: &DatosBodega) -> ResultadoApi<Bodega> {
    http::actualizar(&endpoints::bodega::actualizar(id), datos).await
}

pub async fn eliminar(id: i64) -> ResultadoApi<String> {
    http::eliminar(&endpoints::bodega::eliminar(id)).await
}

pub async fn validar_codigo(consulta: &ConsultaUnicidad) -> ResultadoApi<VeredictoUnicidad> {
    http::crear(&endpoints::bodega::validar_codigo(), consulta).await
}
