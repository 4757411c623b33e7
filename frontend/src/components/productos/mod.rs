//! Sección de productos. El listado es el más cargado del panel y está
//! partido en módulos de estado, mensajes, actualización y vista; el
//! contenedor y el formulario siguen el esquema de las demás secciones.

mod form;
mod lista;

use common::api::ErrorApi;
use common::model::producto::Producto;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::compartidos::alerta::{Alerta, AlertaBanner};
use crate::components::compartidos::cargando::PantallaCargando;
use crate::services::productos;

use form::ProductosFormulario;
use lista::ProductosLista;

enum Modo {
    Lista,
    Formulario(Option<Producto>),
}

pub enum Msg {
    Nuevo,
    Editar(Producto),
    EdicionCargada(Producto),
    FalloEdicion(ErrorApi),
    Guardado(String),
    Cancelar,
    CerrarAlerta,
}

pub struct ProductosMain {
    modo: Modo,
    version_lista: u32,
    alerta: Option<Alerta>,
    cargando: bool,
}

impl Component for ProductosMain {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ProductosMain {
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
            Msg::Editar(producto) => {
                self.cargando = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    match productos::obtener(producto.id).await {
                        Ok(p) => link.send_message(Msg::EdicionCargada(p)),
                        Err(e) => link.send_message(Msg::FalloEdicion(e)),
                    }
                });
                true
            }
            Msg::EdicionCargada(producto) => {
                self.cargando = false;
                self.alerta = None;
                self.modo = Modo::Formulario(Some(producto));
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
                <h2>{"Productos"}</h2>
                <AlertaBanner
                    alerta={self.alerta.clone()}
                    al_cerrar={link.callback(|_| Msg::CerrarAlerta)}
                />
                <PantallaCargando visible={self.cargando} />
                {
                    match &self.modo {
                        Modo::Lista => html! {
                            <ProductosLista
                                version={self.version_lista}
                                al_crear={link.callback(|_| Msg::Nuevo)}
                                al_editar={link.callback(Msg::Editar)}
                            />
                        },
                        Modo::Formulario(producto) => html! {
                            <ProductosFormulario
                                producto={producto.clone()}
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
