use common::api::ResultadoApi;
use common::model::cliente::{Cliente, PaginaClientes};
use common::requests::{ConsultaUnicidad, DatosCliente, VeredictoUnicidad};

use super::{endpoints, http};

pub async fn listar(
    pagina: i64,
    tamano: i64,
    termino: Option<&str>,
) -> ResultadoApi<PaginaClientes> {
    http::obtener(&endpoints::cliente::listar(pagina, tamano, termino)).await
}

/// Búsqueda por término con la misma paginación del listado; el listado la
/// usa cuando hay un término activo.
pub async fn buscar(pagina: i64, tamano: i64, termino: &str) -> ResultadoApi<PaginaClientes> {
    http::obtener(&endpoints::cliente::buscar(pagina, tamano, termino)).await
}

pub async fn obtener(id: i64) -> ResultadoApi<Cliente> {
    http::obtener(&endpoints::cliente::obtener(id)).await
}

pub async fn crear(datos: &DatosCliente) -> ResultadoApi<Cliente> {
    http::crear(&endpoints::cliente::crear(), datos).await
}

pub async fn actualizar(id: i64, datos: &DatosCliente) -> ResultadoApi<Cliente> {
    http::actualizar(&endpoints::cliente::actualizar(id), datos).await
}

pub async fn eliminar(id: i64) -> ResultadoApi<String> {
    http::eliminar(&endpoints::cliente::eliminar(id)).await
}

pub async fn validar_codigo(consulta: &ConsultaUnicidad) -> ResultadoApi<VeredictoUnicidad> {
    http::crear(&endpoints::cliente::validar_codigo(), consulta).await
}

pub async fn validar_nit(consulta: &ConsultaUnicidad) -> ResultadoApi<VeredictoUnicidad> {
    http::crear(&endpoints::cliente::validar_nit(), consulta).await
}
