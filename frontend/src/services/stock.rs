use common::api::ResultadoApi;
use common::model::stock::{PaginaMovimientos, PaginaStock};
use common::requests::DatosMovimiento;

use super::{endpoints, http};

pub async fn listar(
    pagina: i64,
    tamano: i64,
    bodega_id: Option<i64>,
    nivel: Option<&str>,
) -> ResultadoApi<PaginaStock> {
    http::obtener(&endpoints::stock::listar(pagina, tamano, bodega_id, nivel)).await
}

pub async fn movimientos(pagina: i64, tamano: i64) -> ResultadoApi<PaginaMovimientos> {
    http::obtener(&endpoints::stock::movimientos(pagina, tamano)).await
}

pub async fn registrar_entrada(datos: &DatosMovimiento) -> ResultadoApi<String> {
    http::ejecutar(&endpoints::stock::entrada(), datos).await
}

pub async fn registrar_salida(datos: &DatosMovimiento) -> ResultadoApi<String> {
    http::ejecutar(&endpoints::stock::salida(), datos).await
}
