use common::paginacion::ItemPagina;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BotoneraProps {
    /// Ventana ya calculada por la vista dueña; cada listado usa la suya.
    pub items: Vec<ItemPagina>,
    pub actual: i64,
    pub al_cambiar: Callback<i64>,
}

/// Render común de la botonera. El cálculo de la ventana NO vive aquí:
/// cada listado decide cómo recorta (ver `common::paginacion`).
pub struct BotoneraPaginas;

impl Component for BotoneraPaginas {
    type Message = ();
    type Properties = BotoneraProps;

    fn create(_ctx: &Context<Self>) -> Self {
        BotoneraPaginas
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if props.items.len() <= 1 {
            return html! {};
        }
        html! {
            <nav class="paginacion" aria-label="Páginas">
                {
                    for props.items.iter().enumerate().map(|(i, item)| match item {
                        ItemPagina::Numero(n) => {
                            let n = *n;
                            let al_cambiar = props.al_cambiar.clone();
                            html! {
                                <button
                                    class={classes!("pagina-btn", (n == props.actual).then_some("activa"))}
                                    disabled={n == props.actual}
                                    onclick={Callback::from(move |_| al_cambiar.emit(n))}
                                >
                                    { n }
                                </button>
                            }
                        }
                        ItemPagina::PuntosSuspensivos => html! {
                            <span key={format!("puntos-{i}")} class="pagina-puntos">{"…"}</span>
                        },
                    })
                }
            </nav>
        }
    }
}
