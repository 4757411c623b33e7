use common::api::ErrorApi;
use common::model::proveedor::{PaginaProveedores, Proveedor};
use common::paginacion::ventana_clasica;
use web_sys::SubmitEvent;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::compartidos::alerta::{Alerta, AlertaBanner};
use crate::components::compartidos::cargando::PantallaCargando;
use crate::components::compartidos::confirmacion::DialogoConfirmacion;
use crate::components::compartidos::formulario::valor_de_input;
use crate::components::compartidos::paginacion::BotoneraPaginas;
use crate::services::proveedores;

const TAMANO_PAGINA: i64 = 10;

#[derive(Properties, PartialEq)]
pub struct ListaProps {
    pub version: u32,
    pub al_crear: Callback<MouseEvent>,
    pub al_editar: Callback<Proveedor>,
}

pub enum Msg {
    Cargar,
    Cargada(PaginaProveedores),
    Fallo(ErrorApi),
    CambiarTermino(String),
    Buscar,
    IrAPagina(i64),
    PedirEliminacion(Proveedor),
    CancelarEliminacion,
    ConfirmarEliminacion,
    Eliminado(String),
    FalloEliminacion(ErrorApi),
    CerrarAlerta,
}

pub struct ProveedoresLista {
    proveedores: Vec<Proveedor>,
    cargando: bool,
    alerta: Option<Alerta>,
    termino: String,
    pagina: i64,
    total: i64,
    total_paginas: i64,
    eliminar_pendiente: Option<Proveedor>,
}

impl Component for ProveedoresLista {
    type Message = Msg;
    type Properties = ListaProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ProveedoresLista {
            proveedores: Vec::new(),
            cargando: false,
            alerta: None,
            termino: String::new(),
            pagina: 1,
            total: 0,
            total_paginas: 0,
            eliminar_pendiente: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Cargar);
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().version != old_props.version {
            ctx.link().send_message(Msg::Cargar);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Cargar => {
                self.cargando = true;
                let pagina = self.pagina;
                let termino = self.termino.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let termino = termino.trim().to_string();
                    let resultado = if termino.is_empty() {
                        proveedores::listar(pagina, TAMANO_PAGINA, None).await
                    } else {
                        proveedores::buscar(pagina, TAMANO_PAGINA, &termino).await
                    };
                    match resultado {
                        Ok(p) => link.send_message(Msg::Cargada(p)),
                        Err(e) => link.send_message(Msg::Fallo(e)),
                    }
                });
                true
            }
            Msg::Cargada(p) => {
                self.cargando = false;
                self.proveedores = p.proveedores;
                self.total = p.total;
                self.total_paginas = p.total_paginas;
                self.pagina = p.pagina;
                true
            }
            Msg::Fallo(e) => {
                self.cargando = false;
                self.proveedores.clear();
                self.total = 0;
                self.total_paginas = 0;
                self.alerta = Some(Alerta::error(e.to_string()));
                true
            }
            Msg::CambiarTermino(valor) => {
                self.termino = valor;
                true
            }
            Msg::Buscar => {
                if self.cargando {
                    return false;
                }
                self.pagina = 1;
                ctx.link().send_message(Msg::Cargar);
                false
            }
            Msg::IrAPagina(n) => {
                if n == self.pagina || self.cargando {
                    return false;
                }
                self.pagina = n;
                ctx.link().send_message(Msg::Cargar);
                false
            }
            Msg::PedirEliminacion(proveedor) => {
                self.eliminar_pendiente = Some(proveedor);
                true
            }
            Msg::CancelarEliminacion => {
                self.eliminar_pendiente = None;
                true
            }
            Msg::ConfirmarEliminacion => {
                let Some(proveedor) = self.eliminar_pendiente.take() else {
                    return false;
                };
                self.cargando = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    // esta entidad identifica por idProveedor, no por id
                    match proveedores::eliminar(proveedor.id_proveedor).await {
                        Ok(mensaje) => link.send_message(Msg::Eliminado(mensaje)),
                        Err(e) => link.send_message(Msg::FalloEliminacion(e)),
                    }
                });
                true
            }
            Msg::Eliminado(mensaje) => {
                self.alerta = Some(Alerta::exito(mensaje));
                ctx.link().send_message(Msg::Cargar);
                true
            }
            Msg::FalloEliminacion(e) => {
                self.cargando = false;
                self.alerta = Some(Alerta::error(e.to_string()));
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
            <div class="listado">
                <AlertaBanner
                    alerta={self.alerta.clone()}
                    al_cerrar={link.callback(|_| Msg::CerrarAlerta)}
                />
                <div class="listado-barra">
                    <form onsubmit={link.callback(|e: SubmitEvent| { e.prevent_default(); Msg::Buscar })}>
                        <input
                            type="search"
                            placeholder="Buscar proveedores…"
                            value={self.termino.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::CambiarTermino(valor_de_input(&e)))}
                        />
                        <button type="submit" disabled={self.cargando}>{"Buscar"}</button>
                    </form>
                    <button class="boton-primario" onclick={ctx.props().al_crear.clone()}>
                        {"Nuevo proveedor"}
                    </button>
                </div>

                <table class="tabla">
                    <thead>
                        <tr>
                            <th>{"Nombre"}</th>
                            <th>{"Contacto"}</th>
                            <th>{"Teléfono"}</th>
                            <th>{"NIT"}</th>
                            <th>{"Estado"}</th>
                            <th>{"Acciones"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for self.proveedores.iter().map(|proveedor| {
                                let editar = {
                                    let al_editar = ctx.props().al_editar.clone();
                                    let proveedor = proveedor.clone();
                                    Callback::from(move |_| al_editar.emit(proveedor.clone()))
                                };
                                let eliminar = {
                                    let proveedor = proveedor.clone();
                                    link.callback(move |_| Msg::PedirEliminacion(proveedor.clone()))
                                };
                                html! {
                                    <tr key={proveedor.id_proveedor}>
                                        <td>{ &proveedor.nombre }</td>
                                        <td>{ proveedor.contacto.clone().unwrap_or_default() }</td>
                                        <td>{ proveedor.telefono.clone().unwrap_or_default() }</td>
                                        <td>{ proveedor.nit.clone().unwrap_or_default() }</td>
                                        <td>
                                            {
                                                if proveedor.activo {
                                                    html! { <span class="insignia activa">{"Activo"}</span> }
                                                } else {
                                                    html! { <span class="insignia inactiva">{"Inactivo"}</span> }
                                                }
                                            }
                                        </td>
                                        <td class="acciones">
                                            <button onclick={editar}>{"Editar"}</button>
                                            <button class="boton-peligro" onclick={eliminar}>{"Eliminar"}</button>
                                        </td>
                                    </tr>
                                }
                            })
                        }
                    </tbody>
                </table>

                <div class="listado-pie">
                    <span>{ format!("{} proveedores", self.total) }</span>
                    <BotoneraPaginas
                        items={ventana_clasica(self.pagina, self.total_paginas)}
                        actual={self.pagina}
                        al_cambiar={link.callback(Msg::IrAPagina)}
                    />
                </div>

                <DialogoConfirmacion
                    visible={self.eliminar_pendiente.is_some()}
                    mensaje={
                        self.eliminar_pendiente
                            .as_ref()
                            .map(|p| format!("¿Eliminar al proveedor \"{}\"?", p.nombre))
                            .unwrap_or_default()
                    }
                    al_confirmar={link.callback(|_| Msg::ConfirmarEliminacion)}
                    al_cancelar={link.callback(|_| Msg::CancelarEliminacion)}
                />
                <PantallaCargando visible={self.cargando} />
            </div>
        }
    }
}
