//! Sección de roles. Además del par listado/formulario tiene un tercer
//! modo: el editor de permisos, donde cada casilla dispara su propia
//! llamada de otorgar o revocar (no hay guardado por lote).

mod form;
mod list;
mod permisos;

use common::model::rol::Rol;
use yew::prelude::*;

use crate::components::compartidos::alerta::{Alerta, AlertaBanner};

use form::RolesFormulario;
use list::RolesLista;
use permisos::EditorPermisos;

enum Modo {
    Lista,
    Formulario(Option<Rol>),
    Permisos(Rol),
}

pub enum Msg {
    Nuevo,
    Editar(Rol),
    AbrirPermisos(Rol),
    Guardado(String),
    Cancelar,
    CerrarAlerta,
}

pub struct RolesMain {
    modo: Modo,
    version_lista: u32,
    alerta: Option<Alerta>,
}

impl Component for RolesMain {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        RolesMain {
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
            Msg::Editar(rol) => {
                self.alerta = None;
                self.modo = Modo::Formulario(Some(rol));
                true
            }
            Msg::AbrirPermisos(rol) => {
                self.alerta = None;
                self.modo = Modo::Permisos(rol);
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
                <h2>{"Roles y permisos"}</h2>
                <AlertaBanner
                    alerta={self.alerta.clone()}
                    al_cerrar={link.callback(|_| Msg::CerrarAlerta)}
                />
                {
                    match &self.modo {
                        Modo::Lista => html! {
                            <RolesLista
                                version={self.version_lista}
                                al_crear={link.callback(|_| Msg::Nuevo)}
                                al_editar={link.callback(Msg::Editar)}
                                al_abrir_permisos={link.callback(Msg::AbrirPermisos)}
                            />
                        },
                        Modo::Formulario(rol) => html! {
                            <RolesFormulario
                                rol={rol.clone()}
                                al_guardar={link.callback(Msg::Guardado)}
                                al_cancelar={link.callback(|_| Msg::Cancelar)}
                            />
                        },
                        Modo::Permisos(rol) => html! {
                            <EditorPermisos
                                rol={rol.clone()}
                                al_volver={link.callback(|_| Msg::Cancelar)}
                            />
                        },
                    }
                }
            </section>
        }
    }
}
