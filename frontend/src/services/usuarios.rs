use common::api::ResultadoApi;
use common::model::usuario::{PaginaUsuarios, Usuario};
use common::requests::{ConsultaUnicidad, DatosUsuario, VeredictoUnicidad};

use super::{endpoints, http};

pub async fn listar(
    pagina: i64,
    tamano: i64,
    termino: Option<&str>,
) -> ResultadoApi<PaginaUsuarios> {
    http::obtener(&endpoints::auth::listar_usuarios(pagina, tamano, termino)).await
}

/// El backend genera la contraseña temporal y la envía por correo; el
/// formulario nunca maneja contraseñas al crear.
pub async fn crear(datos: &DatosUsuario) -> ResultadoApi<Usuario> {
    http::crear(&endpoints::auth::crear_usuario(), datos).await
}

pub async fn actualizar(id: i64, datos: &DatosUsuario) -> ResultadoApi<Usuario> {
    http::actualizar(&endpoints::auth::actualizar_usuario(id), datos).await
}

pub async fn validar_correo(consulta: &ConsultaUnicidad) -> ResultadoApi<VeredictoUnicidad> {
    http::crear(&endpoints::auth::validar_correo(), consulta).await
}
