//! Sección de clientes: contenedor que alterna entre listado y formulario.
//!
//! El contenedor es dueño del modo (lista o edición), del cliente
//! seleccionado y de la alerta superior; el listado y el formulario son
//! hijos con estado propio. Tras cualquier alta, edición o baja exitosa el
//! listado se recarga (el contador de versión lo fuerza).

mod form;
mod list;

use common::api::ErrorApi;
use common::model::cliente::Cliente;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::compartidos::alerta::{Alerta, AlertaBanner};
use crate::components::compartidos::cargando::PantallaCargando;
use crate::services::clientes;

use form::ClientesFormulario;
use list::ClientesLista;

enum Modo {
    Lista,
    Formulario(Option<Cliente>),
}

pub enum Msg {
    Nuevo,
    Editar(Cliente),
    EdicionCargada(Cliente),
    FalloEdicion(ErrorApi),
    Guardado(String),
    Cancelar,
    CerrarAlerta,
}

pub struct ClientesMain {
    modo: Modo,
    version_lista: u32,
    alerta: Option<Alerta>,
    cargando: bool,
}

impl Component for ClientesMain {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ClientesMain {
            modo: Modo::Lista,
            version_lista: 0,
            alerta: None,
            cargando: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Nuevo => {
                self.alerta = None;
                self.modo = Modo::Formulario(None);
                true
            }
            Msg::Editar(cliente) => {
                // se pide la copia fresca antes de editar
                self.cargando = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    match clientes::obtener(cliente.id).await {
                        Ok(c) => link.send_message(Msg::EdicionCargada(c)),
                        Err(e) => link.send_message(Msg::FalloEdicion(e)),
                    }
                });
                true
            }
            Msg::EdicionCargada(cliente) => {
                self.cargando = false;
                self.alerta = None;
                self.modo = Modo::Formulario(Some(cliente));
                true
            }
            Msg::FalloEdicion(e) => {
                self.cargando = false;
                self.alerta = Some(Alerta::error(e.to_string()));
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
                <h2>{"Clientes"}</h2>
                <AlertaBanner
                    alerta={self.alerta.clone()}
                    al_cerrar={link.callback(|_| Msg::CerrarAlerta)}
                />
                <PantallaCargando visible={self.cargando} />
                {
                    match &self.modo {
                        Modo::Lista => html! {
                            <ClientesLista
                                version={self.version_lista}
                                al_crear={link.callback(|_| Msg::Nuevo)}
                                al_editar={link.callback(Msg::Editar)}
                            />
                        },
                        Modo::Formulario(cliente) => html! {
                            <ClientesFormulario
                                cliente={cliente.clone()}
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
