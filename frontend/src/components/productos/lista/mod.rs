//! Listado de productos: módulo raíz que une la implementación del
//! `Component` con los submódulos de estado, mensajes, actualización y
//! vista.

mod messages;
mod props;
mod state;
mod update;
mod view;

use yew::prelude::*;

pub use messages::Msg;
pub use props::ListaProps;
pub use state::ProductosLista;

impl Component for ProductosLista {
    type Message = Msg;
    type Properties = ListaProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ProductosLista::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().version != old_props.version {
            ctx.link().send_message(Msg::Cargar);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Cargar);
        }
    }
}
