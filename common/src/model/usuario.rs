use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: i64,
    pub nombre: String,
    pub correo: String,
    pub rol_id: i64,
    pub rol_nombre: Option<String>,
    pub activo: bool,
    /// Marcado por el backend cuando el usuario aún tiene la contraseña
    /// temporal que se le envió por correo.
    pub forzar_cambio_password: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginaUsuarios {
    pub usuarios: Vec<Usuario>,
    pub total: i64,
    pub total_paginas: i64,
    pub pagina: i64,
}
