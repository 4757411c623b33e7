use common::api::ResultadoApi;
use common::model::menu::MenuItem;

use super::{endpoints, http};

/// Menú lateral resuelto por el backend para el usuario en sesión.
pub async fn obtener_menu() -> ResultadoApi<Vec<MenuItem>> {
    http::obtener(&endpoints::menu::obtener_menu()).await
}
