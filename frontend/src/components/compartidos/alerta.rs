use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipoAlerta {
    Exito,
    Error,
    Aviso,
}

impl TipoAlerta {
    fn clase(&self) -> &'static str {
        match self {
            TipoAlerta::Exito => "alerta alerta-exito",
            TipoAlerta::Error => "alerta alerta-error",
            TipoAlerta::Aviso => "alerta alerta-aviso",
        }
    }
}

/// Resultado visible de una operación. Toda salida, buena o mala, termina
/// en una de estas; se descarta con el botón de cierre.
#[derive(Debug, Clone, PartialEq)]
pub struct Alerta {
    pub tipo: TipoAlerta,
    pub mensaje: String,
}

impl Alerta {
    pub fn exito(mensaje: impl Into<String>) -> Self {
        Alerta {
            tipo: TipoAlerta::Exito,
            mensaje: mensaje.into(),
        }
    }

    pub fn error(mensaje: impl Into<String>) -> Self {
        Alerta {
            tipo: TipoAlerta::Error,
            mensaje: mensaje.into(),
        }
    }

    pub fn aviso(mensaje: impl Into<String>) -> Self {
        Alerta {
            tipo: TipoAlerta::Aviso,
            mensaje: mensaje.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AlertaProps {
    pub alerta: Option<Alerta>,
    pub al_cerrar: Callback<MouseEvent>,
}

pub struct AlertaBanner;

impl Component for AlertaBanner {
    type Message = ();
    type Properties = AlertaProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AlertaBanner
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &ctx.props().alerta {
            Some(alerta) => html! {
                <div class={alerta.tipo.clase()} role="alert">
                    <span>{ &alerta.mensaje }</span>
                    <button
                        class="alerta-cerrar"
                        aria-label="Cerrar"
                        onclick={ctx.props().al_cerrar.clone()}
                    >
                        {"×"}
                    </button>
                </div>
            },
            None => html! {},
        }
    }
}
