use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CargandoProps {
    pub visible: bool,
}

/// Velo de carga que cubre la superficie y bloquea la interacción mientras
/// hay una solicitud en vuelo.
pub struct PantallaCargando;

impl Component for PantallaCargando {
    type Message = ();
    type Properties = CargandoProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PantallaCargando
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !ctx.props().visible {
            return html! {};
        }
        html! {
            <div class="velo-carga">
                <div class="velo-carga-girador" aria-label="Cargando"></div>
            </div>
        }
    }
}
