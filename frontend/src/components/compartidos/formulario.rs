//! Utilidades comunes a los formularios: extracción de valores de eventos
//! y el estado de las validaciones asíncronas de unicidad.

use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent};
use yew::prelude::*;

pub fn valor_de_input(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn valor_de_area(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlTextAreaElement>().value()
}

pub fn valor_de_select(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

/// Las casillas se leen por `checked`, no por `value`.
pub fn marcado(e: &InputEvent) -> bool {
    e.target_unchecked_into::<HtmlInputElement>().checked()
}

/// Estado de un campo con chequeo de unicidad contra el backend.
#[derive(Debug, Clone, PartialEq)]
pub struct EstadoValidacion {
    pub validando: bool,
    pub valido: bool,
    pub mensaje: Option<String>,
}

impl Default for EstadoValidacion {
    fn default() -> Self {
        EstadoValidacion {
            validando: false,
            valido: true,
            mensaje: None,
        }
    }
}

impl EstadoValidacion {
    pub fn verificando() -> Self {
        EstadoValidacion {
            validando: true,
            valido: true,
            mensaje: None,
        }
    }

    pub fn disponible() -> Self {
        EstadoValidacion::default()
    }

    pub fn conflicto(mensaje: impl Into<String>) -> Self {
        EstadoValidacion {
            validando: false,
            valido: false,
            mensaje: Some(mensaje.into()),
        }
    }

    /// El envío queda deshabilitado mientras el campo esté inválido o el
    /// chequeo siga en vuelo.
    pub fn bloquea_envio(&self) -> bool {
        self.validando || !self.valido
    }
}

#[cfg(test)]
mod tests {
    use super::EstadoValidacion;

    #[test]
    fn el_envio_se_bloquea_durante_y_tras_un_conflicto() {
        assert!(EstadoValidacion::verificando().bloquea_envio());
        assert!(EstadoValidacion::conflicto("ya existe").bloquea_envio());
        assert!(!EstadoValidacion::disponible().bloquea_envio());
        assert!(!EstadoValidacion::default().bloquea_envio());
    }
}
