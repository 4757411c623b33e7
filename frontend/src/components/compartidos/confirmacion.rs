use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmacionProps {
    pub visible: bool,
    pub mensaje: String,
    #[prop_or("Eliminar".to_string())]
    pub etiqueta_confirmar: String,
    pub al_confirmar: Callback<MouseEvent>,
    pub al_cancelar: Callback<MouseEvent>,
}

/// Paso de confirmación previo a toda acción destructiva. La acción no se
/// dispara hasta que el usuario pulsa el botón de confirmar; cancelar no
/// emite ninguna llamada.
pub struct DialogoConfirmacion;

impl Component for DialogoConfirmacion {
    type Message = ();
    type Properties = ConfirmacionProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DialogoConfirmacion
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.visible {
            return html! {};
        }
        html! {
            <div class="dialogo-fondo">
                <div class="dialogo" role="dialog" aria-modal="true">
                    <p>{ &props.mensaje }</p>
                    <div class="dialogo-acciones">
                        <button class="boton-secundario" onclick={props.al_cancelar.clone()}>
                            {"Cancelar"}
                        </button>
                        <button class="boton-peligro" onclick={props.al_confirmar.clone()}>
                            { &props.etiqueta_confirmar }
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}
