//! Envoltorio HTTP único de la aplicación.
//!
//! Adjunta el token bearer a toda solicitud saliente y aplica la única
//! política transversal de fallo que existe: un 401 borra el token y manda
//! al login. No hay reintentos, ni backoff, ni timeouts propios.

use common::api::{ErrorApi, ResultadoApi, Sobre};
use gloo_console::error;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::sesion;

const RUTA_LOGIN: &str = "/login";

fn con_token(builder: RequestBuilder) -> RequestBuilder {
    match sesion::leer_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// Sesión rechazada por el backend: se descarta el token y, si no estamos
/// ya en el login, se navega hasta él. Aplica a cualquier solicitud.
fn manejar_sesion_vencida() {
    sesion::borrar_token();
    if let Some(ventana) = web_sys::window() {
        let ubicacion = ventana.location();
        if ubicacion.pathname().unwrap_or_default() != RUTA_LOGIN {
            let _ = ubicacion.set_href(RUTA_LOGIN);
        }
    }
}

enum Carga<T> {
    Datos(T),
    Confirmacion(String),
}

async fn despachar<T: DeserializeOwned>(
    enviado: Result<Response, gloo_net::Error>,
    solo_confirmacion: bool,
) -> ResultadoApi<Carga<T>> {
    let respuesta = enviado.map_err(|e| {
        error!("fallo de red:", e.to_string());
        ErrorApi::Red(e.to_string())
    })?;

    let estado = respuesta.status();
    if estado == 401 {
        manejar_sesion_vencida();
        return Err(ErrorApi::SesionExpirada);
    }

    match respuesta.json::<Sobre<T>>().await {
        Ok(sobre) if solo_confirmacion => sobre.into_confirmacion().map(Carga::Confirmacion),
        Ok(sobre) => sobre.into_resultado().map(Carga::Datos),
        Err(_) if !(200..300).contains(&estado) => Err(ErrorApi::Red(format!("HTTP {estado}"))),
        Err(e) => {
            error!("sobre ilegible:", e.to_string());
            Err(ErrorApi::Formato(e.to_string()))
        }
    }
}

fn solo_datos<T>(carga: Carga<T>) -> ResultadoApi<T> {
    match carga {
        Carga::Datos(datos) => Ok(datos),
        // no debería pasar: despachar con solo_confirmacion=false nunca la produce
        Carga::Confirmacion(mensaje) => Err(ErrorApi::Formato(mensaje)),
    }
}

fn solo_mensaje<T>(carga: Carga<T>) -> ResultadoApi<String> {
    match carga {
        Carga::Confirmacion(mensaje) => Ok(mensaje),
        Carga::Datos(_) => Err(ErrorApi::Formato("se esperaba una confirmación".into())),
    }
}

pub async fn obtener<T: DeserializeOwned>(url: &str) -> ResultadoApi<T> {
    let enviado = con_token(Request::get(url)).send().await;
    despachar(enviado, false).await.and_then(solo_datos)
}

pub async fn crear<T: DeserializeOwned, B: Serialize>(url: &str, cuerpo: &B) -> ResultadoApi<T> {
    let solicitud = con_token(Request::post(url))
        .json(cuerpo)
        .map_err(|e| ErrorApi::Formato(e.to_string()))?;
    despachar(solicitud.send().await, false)
        .await
        .and_then(solo_datos)
}

pub async fn actualizar<T: DeserializeOwned, B: Serialize>(url: &str, cuerpo: &B) -> ResultadoApi<T> {
    let solicitud = con_token(Request::put(url))
        .json(cuerpo)
        .map_err(|e| ErrorApi::Formato(e.to_string()))?;
    despachar(solicitud.send().await, false)
        .await
        .and_then(solo_datos)
}

/// POST cuyo resultado útil es solo el mensaje de confirmación.
pub async fn ejecutar<B: Serialize>(url: &str, cuerpo: &B) -> ResultadoApi<String> {
    let solicitud = con_token(Request::post(url))
        .json(cuerpo)
        .map_err(|e| ErrorApi::Formato(e.to_string()))?;
    despachar::<serde_json::Value>(solicitud.send().await, true)
        .await
        .and_then(solo_mensaje)
}

/// POST sin cuerpo (otorgar/revocar permisos y similares).
pub async fn ejecutar_sin_cuerpo(url: &str) -> ResultadoApi<String> {
    let enviado = con_token(Request::post(url)).send().await;
    despachar::<serde_json::Value>(enviado, true)
        .await
        .and_then(solo_mensaje)
}

pub async fn eliminar(url: &str) -> ResultadoApi<String> {
    let enviado = con_token(Request::delete(url)).send().await;
    despachar::<serde_json::Value>(enviado, true)
        .await
        .and_then(solo_mensaje)
}
