mod form;
mod list;

use common::model::categoria::Categoria;
use yew::prelude::*;

use crate::components::compartidos::alerta::{Alerta, AlertaBanner};

use form::CategoriasFormulario;
use list::CategoriasLista;

enum Modo {
    Lista,
    Formulario(Option<Categoria>),
}

pub enum Msg {
    Nueva,
    Editar(Categoria),
    Guardado(String),
    Cancelar,
    CerrarAlerta,
}

pub struct CategoriasMain {
    modo: Modo,
    version_lista: u32,
    alerta: Option<Alerta>,
}

impl Component for CategoriasMain {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        CategoriasMain {
            modo: Modo::Lista,
            version_lista: 0,
            alerta: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Nueva => {
                self.alerta = None;
                self.modo = Modo::Formulario(None);
                true
            }
            Msg::Editar(categoria) => {
                self.alerta = None;
                self.modo = Modo::Formulario(Some(categoria));
                true
            }
            Msg::Guardado(mensaje) => {
                self.modo = Modo::Lista;
                self.version_lista += 1;
                self.alerta = Some(Alerta::exito(mensaje));
                true
            }
            Msg::Cancelar => {
                self.modo = Modo::Lista;
                true
            }
            Msg::CerrarAlerta => {
                self.alerta = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <section class="seccion">
                <h2>{"Categorías"}</h2>
                <AlertaBanner
                    alerta={self.alerta.clone()}
                    al_cerrar={link.callback(|_| Msg::CerrarAlerta)}
                />
                {
                    match &self.modo {
                        Modo::Lista => html! {
                            <CategoriasLista
                                version={self.version_lista}
                                al_crear={link.callback(|_| Msg::Nueva)}
                                al_editar={link.callback(Msg::Editar)}
                            />
                        },
                        Modo::Formulario(categoria) => html! {
                            <CategoriasFormulario
                                categoria={categoria.clone()}
                                al_guardar={link.callback(Msg::Guardado)}
                                al_cancelar={link.callback(|_| Msg::Cancelar)}
                            />
                        },
                    }
                }
            </section>
        }
    }
}
