use serde::{Deserialize, Serialize};

/// Entrada del menú lateral, resuelta por el backend según el rol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: i64,
    pub nombre: String,
    pub icono: Option<String>,
    pub ruta: String,
    pub orden: i32,
}
