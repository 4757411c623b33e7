//! Estado de sesión persistido en el navegador.
//!
//! Dos piezas y nada más: el token bearer en `localStorage` bajo una clave
//! fija, y el usuario de primer ingreso (contraseña temporal) en
//! `sessionStorage` mientras dura el cambio forzado. Todo lector del token
//! pasa por aquí; ningún otro módulo toca el almacenamiento.

use common::auth;
use common::model::usuario::Usuario;

const CLAVE_TOKEN: &str = "plastihogar_token";
const CLAVE_PENDIENTE: &str = "plastihogar_usuario_pendiente";

fn almacen_local() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn almacen_sesion() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

pub fn leer_token() -> Option<String> {
    almacen_local()?.get_item(CLAVE_TOKEN).ok().flatten()
}

pub fn guardar_token(token: &str) {
    if let Some(almacen) = almacen_local() {
        let _ = almacen.set_item(CLAVE_TOKEN, token);
    }
}

pub fn borrar_token() {
    if let Some(almacen) = almacen_local() {
        let _ = almacen.remove_item(CLAVE_TOKEN);
    }
}

fn ahora_epoch() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

/// Un token vencido, ausente o ilegible vale lo mismo: no hay sesión.
pub fn sesion_activa() -> bool {
    auth::es_token_valido(leer_token().as_deref(), ahora_epoch())
}

/// Nombre para la barra superior, sacado de los claims del token.
pub fn nombre_usuario() -> Option<String> {
    let token = leer_token()?;
    let claims = auth::claims_de_token(&token)?;
    claims.nombre.or(claims.correo)
}

pub fn guardar_usuario_pendiente(usuario: &Usuario) {
    if let (Some(almacen), Ok(crudo)) = (almacen_sesion(), serde_json::to_string(usuario)) {
        let _ = almacen.set_item(CLAVE_PENDIENTE, &crudo);
    }
}

pub fn leer_usuario_pendiente() -> Option<Usuario> {
    let crudo = almacen_sesion()?.get_item(CLAVE_PENDIENTE).ok().flatten()?;
    serde_json::from_str(&crudo).ok()
}

pub fn borrar_usuario_pendiente() {
    if let Some(almacen) = almacen_sesion() {
        let _ = almacen.remove_item(CLAVE_PENDIENTE);
    }
}
