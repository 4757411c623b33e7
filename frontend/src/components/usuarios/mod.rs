mod form;
mod list;

use common::model::usuario::Usuario;
use yew::prelude::*;

use crate::components::compartidos::alerta::{Alerta, AlertaBanner};

use form::UsuariosFormulario;
use list::UsuariosLista;

enum Modo {
    Lista,
    Formulario(Option<Usuario>),
}

pub enum Msg {
    Nuevo,
    Editar(Usuario),
    Guardado(String),
    Cancelar,
    CerrarAlerta,
}

pub struct UsuariosMain {
    modo: Modo,
    version_lista: u32,
    alerta: Option<Alerta>,
}

impl Component for UsuariosMain {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        UsuariosMain {
            modo: Modo::Lista,
            version_lista: 0,
            alerta: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Nuevo => {
                self.alerta = None;
                self.modo = Modo::Formulario(None);
                true
            }
            Msg::Editar(usuario) => {
                self.alerta = None;
                self.modo = Modo::Formulario(Some(usuario));
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
                <h2>{"Usuarios"}</h2>
                <AlertaBanner
                    alerta={self.alerta.clone()}
                    al_cerrar={link.callback(|_| Msg::CerrarAlerta)}
                />
                {
                    match &self.modo {
                        Modo::Lista => html! {
                            <UsuariosLista
                                version={self.version_lista}
                                al_crear={link.callback(|_| Msg::Nuevo)}
                                al_editar={link.callback(Msg::Editar)}
                            />
                        },
                        Modo::Formulario(usuario) => html! {
                            <UsuariosFormulario
                                usuario={usuario.clone()}
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
