use common::api::ResultadoApi;
use common::model::proveedor::{PaginaProveedores, Proveedor};
use common::requests::{ConsultaUnicidad, DatosProveedor, VeredictoUnicidad};

use super::{endpoints, http};

pub async fn listar(
    pagina: i64,
    tamano: i64,
    termino: Option<&str>,
) -> ResultadoApi<PaginaProveedores> {
    http::obtener(&endpoints::proveedor::listar(pagina, tamano, termino)).await
}

pub async fn buscar(pagina: i64, tamano: i64, termino: &str) -> ResultadoApi<PaginaProveedores> {
    http::obtener(&endpoints::proveedor::buscar(pagina, tamano, termino)).await
}

pub async fn obtener(id_proveedor: i64) -> ResultadoApi<Proveedor> {
    http::obtener(&endpoints::proveedor::obtener(id_proveedor)).await
}

/// Catálogo completo para el selector del formulario de productos.
pub async fn todos() -> ResultadoApi<Vec<Proveedor>> {
    http::obtener(&endpoints::proveedor::todos()).await
}

pub async fn crear(datos: &DatosProveedor) -> ResultadoApi<Proveedor> {
    http::crear(&endpoints::proveedor::crear(), datos).await
}

pub async fn actualizar(id_proveedor: i64, datos: &DatosProveedor) -> ResultadoApi<Proveedor> {
    http::actualizar(&endpoints::proveedor::actualizar(id_proveedor), datos).await
}

pub async fn eliminar(id_proveedor: i64) -> ResultadoApi<String> {
    http::eliminar(&endpoints::proveedor::eliminar(id_proveedor)).await
}

pub async fn validar_nombre(consulta: &ConsultaUnicidad) -> ResultadoApi<VeredictoUnicidad> {
    http::crear(&endpoints::proveedor::validar_nombre(), consulta).await
}
