//! Frontera con la API REST: tipo de error unificado y sobre de respuesta.

mod envelope;

pub use envelope::{MENSAJE_GENERICO, Sobre};

use thiserror::Error;

/// Error único en la frontera de servicios. Las tres familias de fallo que
/// distingue la aplicación: transporte, sesión vencida y rechazo de negocio
/// reportado por el backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorApi {
    #[error("Error de conexión: {0}")]
    Red(String),

    #[error("La sesión ha expirado")]
    SesionExpirada,

    #[error("{0}")]
    Negocio(String),

    #[error("Respuesta ilegible del servidor: {0}")]
    Formato(String),
}

pub type ResultadoApi<T> = Result<T, ErrorApi>;
