mod form;
mod list;

use common::model::bodega::Bodega;
use yew::prelude::*;

use crate::components::compartidos::alerta::{Alerta, AlertaBanner};

use form::BodegasFormulario;
use list::BodegasLista;

enum Modo {
    Lista,
    Formulario(Option<Bodega>),
}

pub enum Msg {
    Nueva,
    Editar(Bodega),
    Guardado(String),
    Cancelar,
    CerrarAlerta,
}

pub struct BodegasMain {
    modo: Modo,
    version_lista: u32,
    alerta: Option<Alerta>,
}

impl Component for BodegasMain {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        BodegasMain {
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
            Msg::Editar(bodega) => {
                self.alerta = None;
                self.modo = Modo::Formulario(Some(bodega));
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
                <h2>{"Bodegas"}</h2>
                <AlertaBanner
                    alerta={self.alerta.clone()}
                    al_cerrar={link.callback(|_| Msg::CerrarAlerta)}
                />
                {
                    match &self.modo {
                        Modo::Lista => html! {
                            <BodegasLista
                                version={self.version_lista}
                                al_crear={link.callback(|_| Msg::Nueva)}
                                al_editar={link.callback(Msg::Editar)}
                            />
                        },
                        Modo::Formulario(bodega) => html! {
                            <BodegasFormulario
                                bodega={bodega.clone()}
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
