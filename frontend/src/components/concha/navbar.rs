use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub usuario: Option<String>,
    pub al_cerrar_sesion: Callback<MouseEvent>,
}

pub struct Navbar;

impl Component for Navbar {
    type Message = ();
    type Properties = NavbarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Navbar
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <header class="barra-superior">
                <span class="barra-titulo">{"Plastihogar — Administración"}</span>
                <div class="barra-acciones">
                    {
                        match &props.usuario {
                            Some(nombre) => html! { <span class="barra-usuario">{ nombre }</span> },
                            None => html! {},
                        }
                    }
                    <button class="boton-secundario" onclick={props.al_cerrar_sesion.clone()}>
                        {"Cerrar sesión"}
                    </button>
                </div>
            </header>
        }
    }
}
