use common::api::ResultadoApi;
use common::requests::{CredencialesLogin, ReinicioPassword, SesionIniciada};

use super::{endpoints, http};

pub async fn login(credenciales: &CredencialesLogin) -> ResultadoApi<SesionIniciada> {
    http::crear(&endpoints::auth::login(), credenciales).await
}

/// Con `password_nueva` es el cambio forzado de primer ingreso; sin ella es
/// el reinicio administrativo que envía una contraseña temporal por correo.
pub async fn reiniciar_password(datos: &ReinicioPassword) -> ResultadoApi<String> {
    http::ejecutar(&endpoints::auth::reiniciar_contrasenia(), datos).await
}
