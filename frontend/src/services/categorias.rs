use common::api::ResultadoApi;
use common::model::categoria::{Categoria, PaginaCategorias};
use common::requests::{ConsultaUnicidad, DatosCategoria, VeredictoUnicidad};

use super::{endpoints, http};

pub async fn listar(
    pagina: i64,
    tamano: i64,
    termino: Option<&str>,
) -> ResultadoApi<PaginaCategorias> {
    http::obtener(&endpoints::categoria::listar(pagina, tamano, termino)).await
}

pub async fn todas() -> ResultadoApi<Vec<Categoria>> {
    http::obtener(&endpoints::categoria::todas()).await
}

pub async fn crear(datos: &DatosCategoria) -> ResultadoApi<Categoria> {
    http::crear(&endpoints::categoria::crear(), datos).await
}

pub async fn actualizar(id: i64, datos: &DatosCategoria) -> ResultadoApi<Categoria> {
    http::actualizar(&endpoints::categoria::actualizar(id), datos).await
}

pub async fn eliminar(id: i64) -> ResultadoApi<String> {
    http::eliminar(&endpoints::categoria::eliminar(id)).await
}

pub async fn validar_prefijo(consulta: &ConsultaUnicidad) -> ResultadoApi<VeredictoUnicidad> {
    http::crear(&endpoints::categoria::validar_prefijo(), consulta).await
}
