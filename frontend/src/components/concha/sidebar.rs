use common::api::ErrorApi;
use common::model::menu::MenuItem;
use gloo_console::warn;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::Seccion;
use crate::services::menu;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub seccion: Seccion,
    pub al_navegar: Callback<Seccion>,
}

pub enum Msg {
    MenuCargado(Vec<MenuItem>),
    FalloMenu(ErrorApi),
}

/// Menú lateral. Intenta el menú por usuario del backend y, si la llamada
/// falla, cae a la lista estática de secciones para no dejar el panel sin
/// navegación.
pub struct Sidebar {
    items: Option<Vec<MenuItem>>,
}

impl Component for Sidebar {
    type Message = Msg;
    type Properties = SidebarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Sidebar { items: None }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                match menu::obtener_menu().await {
                    Ok(items) => link.send_message(Msg::MenuCargado(items)),
                    Err(e) => link.send_message(Msg::FalloMenu(e)),
                }
            });
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::MenuCargado(mut items) => {
                items.sort_by_key(|item| item.orden);
                self.items = Some(items);
                true
            }
            Msg::FalloMenu(e) => {
                warn!("menú no disponible, usando el estático:", e.to_string());
                self.items = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let entradas: Vec<(Seccion, String)> = match &self.items {
            Some(items) => items
                .iter()
                .filter_map(|item| {
                    Seccion::desde_ruta(&item.ruta).map(|s| (s, item.nombre.clone()))
                })
                .collect(),
            None => Seccion::todas()
                .into_iter()
                .map(|s| (s, s.titulo().to_string()))
                .collect(),
        };

        html! {
            <aside class="barra-lateral">
                <nav>
                    <ul>
                        {
                            for entradas.into_iter().map(|(seccion, nombre)| {
                                let al_navegar = props.al_navegar.clone();
                                let activa = seccion == props.seccion;
                                html! {
                                    <li>
                                        <button
                                            class={classes!("entrada-menu", activa.then_some("activa"))}
                                            onclick={Callback::from(move |_| al_navegar.emit(seccion))}
                                        >
                                            { nombre }
                                        </button>
                                    </li>
                                }
                            })
                        }
                    </ul>
                </nav>
            </aside>
        }
    }
}
