use common::api::ResultadoApi;
use common::model::rol::{Permiso, Rol};
use common::requests::DatosRol;

use super::{endpoints, http};

pub async fn listar() -> ResultadoApi<Vec<Rol>> {
    http::obtener(&endpoints::rol::listar()).await
}

/// Rol con su detalle de permisos otorgados.
pub async fn obtener(id: i64) -> ResultadoApi<Rol> {
    http::obtener(&endpoints::rol::obtener(id)).await
}

pub async fn crear(datos: &DatosRol) -> ResultadoApi<Rol> {
    http::crear(&endpoints::rol::crear(), datos).await
}

pub async fn actualizar(id: i64, datos: &DatosRol) -> ResultadoApi<Rol> {
    http::actualizar(&endpoints::rol::actualizar(id), datos).await
}

pub async fn eliminar(id: i64) -> ResultadoApi<String> {
    http::eliminar(&endpoints::rol::eliminar(id)).await
}

pub async fn permisos_disponibles() -> ResultadoApi<Vec<Permiso>> {
    http::obtener(&endpoints::rol::permisos_disponibles()).await
}

/// Cada casilla del editor de permisos dispara su propia llamada; no hay
/// guardado por lote.
pub async fn otorgar_permiso(rol_id: i64, permiso_id: i64) -> ResultadoApi<String> {
    http::ejecutar_sin_cuerpo(&endpoints::rol::otorgar_permiso(rol_id, permiso_id)).await
}

pub async fn revocar_permiso(rol_id: i64, permiso_id: i64) -> ResultadoApi<String> {
    http::ejecutar_sin_cuerpo(&endpoints::rol::revocar_permiso(rol_id, permiso_id)).await
}
