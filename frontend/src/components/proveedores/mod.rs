mod form;
mod list;

use common::api::ErrorApi;
use common::model::proveedor::Proveedor;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::compartidos::alerta::{Alerta, AlertaBanner};
use crate::components::compartidos::cargando::PantallaCargando;
use crate::services::proveedores;

use form::ProveedoresFormulario;
use list::ProveedoresLista;

enum Modo {
    Lista,
    Formulario(Option<Proveedor>),
}

pub enum Msg {
    Nuevo,
    Editar(Proveedor),
    EdicionCargada(Proveedor),
    FalloEdicion(ErrorApi),
    Guardado(String),
    Cancelar,
    CerrarAlerta,
}

pub struct ProveedoresMain {
    modo: Modo,
    version_lista: u32,
    alerta: Option<Alerta>,
    cargando: bool,
}

impl Component for ProveedoresMain {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ProveedoresMain {
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
            Msg::Editar(proveedor) => {
                self.cargando = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    match proveedores::obtener(proveedor.id_proveedor).await {
                        Ok(p) => link.send_message(Msg::EdicionCargada(p)),
                        Err(e) => link.send_message(Msg::FalloEdicion(e)),
                    }
                });
                true
            }
            Msg::EdicionCargada(proveedor) => {
                self.cargando = false;
                self.alerta = None;
                self.modo = Modo::Formulario(Some(proveedor));
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
                <h2>{"Proveedores"}</h2>
                <AlertaBanner
                    alerta={self.alerta.clone()}
                    al_cerrar={link.callback(|_| Msg::CerrarAlerta)}
                />
                <PantallaCargando visible={self.cargando} />
                {
                    match &self.modo {
                        Modo::Lista => html! {
                            <ProveedoresLista
                                version={self.version_lista}
                                al_crear={link.callback(|_| Msg::Nuevo)}
                                al_editar={link.callback(Msg::Editar)}
                            />
                        },
                        Modo::Formulario(proveedor) => html! {
                            <ProveedoresFormulario
                                proveedor={proveedor.clone()}
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
