use common::api::ErrorApi;
use common::model::bodega::{Bodega, PaginaBodegas};
use common::paginacion::ventana_clasica;
use web_sys::SubmitEvent;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::compartidos::alerta::{Alerta, AlertaBanner};
use crate::components::compartidos::cargando::PantallaCargando;
use crate::components::compartidos::confirmacion::DialogoConfirmacion;
use crate::components::compartidos::formulario::valor_de_input;
use crate::components::compartidos::paginacion::BotoneraPaginas;
use crate::services::bodegas;

const TAMANO_PAGINA: i64 = 10;

#[derive(Properties, PartialEq)]
pub struct ListaProps {
    pub version: u32,
    pub al_crear: Callback<MouseEvent>,
    pub al_editar: Callback<Bodega>,
}

pub enum Msg {
    Cargar,
    Cargada(PaginaBodegas),
    Fallo(ErrorApi),
    CambiarTermino(String),
    Buscar,
    CambiarRefinar(String),
    IrAPagina(i64),
    PedirEliminacion(Bodega),
    CancelarEliminacion,
    ConfirmarEliminacion,
    Eliminada(String),
    FalloEliminacion(ErrorApi),
    CerrarAlerta,
}

pub struct BodegasLista {
    bodegas: Vec<Bodega>,
    cargando: bool,
    alerta: Option<Alerta>,
    termino: String,
    /// Filtro local sobre la página visible, no viaja al servidor.
    refinar: String,
    pagina: i64,
    total: i64,
    total_paginas: i64,
    eliminar_pendiente: Option<Bodega>,
}

impl Component for BodegasLista {
    type Message = Msg;
    type Properties = ListaProps;

    fn create(_ctx: &Context<Self>) -> Self {
        BodegasLista {
            bodegas: Vec::new(),
            cargando: false,
            alerta: None,
            termino: String::new(),
            refinar: String::new(),
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
                    let termino = (!termino.trim().is_empty()).then_some(termino);
                    match bodegas::listar(pagina, TAMANO_PAGINA, termino.as_deref()).await {
                        Ok(p) => link.send_message(Msg::Cargada(p)),
                        Err(e) => link.send_message(Msg::Fallo(e)),
                    }
                });
                true
            }
            Msg::Cargada(p) => {
                self.cargando = false;
                self.bodegas = p.bodegas;
                self.total = p.total;
                self.total_paginas = p.total_paginas;
                self.pagina = p.pagina;
                true
            }
            Msg::Fallo(e) => {
                self.cargando = false;
                self.bodegas.clear();
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
            Msg::CambiarRefinar(valor) => {
                self.refinar = valor;
                true
            }
            Msg::IrAPagina(n) => {
                if n == self.pagina || self.cargando {
                    return false;
                }
                self.pagina = n;
                ctx.link().send_message(Msg::Cargar);
                false
            }
            Msg::PedirEliminacion(bodega) => {
                self.eliminar_pendiente = Some(bodega);
                true
            }
            Msg::CancelarEliminacion => {
                self.eliminar_pendiente = None;
                true
            }
            Msg::ConfirmarEliminacion => {
                let Some(bodega) = self.eliminar_pendiente.take() else {
                    return false;
                };
                self.cargando = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    match bodegas::eliminar(bodega.id).await {
                        Ok(mensaje) => link.send_message(Msg::Eliminada(mensaje)),
                        Err(e) => link.send_message(Msg::FalloEliminacion(e)),
                    }
                });
                true
            }
            Msg::Eliminada(mensaje) => {
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
        let refinar = self.refinar.trim().to_lowercase();
        let visibles: Vec<&Bodega> = self
            .bodegas
            .iter()
            .filter(|b| {
                refinar.is_empty()
                    || b.nombre.to_lowercase().contains(&refinar)
                    || b.codigo.to_lowercase().contains(&refinar)
            })
            .collect();

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
                            placeholder="Buscar bodegas…"
                            value={self.termino.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::CambiarTermino(valor_de_input(&e)))}
                        />
                        <button type="submit" disabled={self.cargando}>{"Buscar"}</button>
                    </form>
                    <input
                        type="text"
                        class="refinar"
                        placeholder="Afinar en esta página"
                        value={self.refinar.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::CambiarRefinar(valor_de_input(&e)))}
                    />
                    <button class="boton-primario" onclick={ctx.props().al_crear.clone()}>
                        {"Nueva bodega"}
                    </button>
                </div>

                <table class="tabla">
                    <thead>
                        <tr>
                            <th>{"Código"}</th>
                            <th>{"Nombre"}</th>
                            <th>{"Dirección"}</th>
                            <th>{"Responsable"}</th>
                            <th>{"Capacidad"}</th>
                            <th>{"Estado"}</th>
                            <th>{"Acciones"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for visibles.iter().map(|bodega| {
                                let editar = {
                                    let al_editar = ctx.props().al_editar.clone();
                                    let bodega = (*bodega).clone();
                                    Callback::from(move |_| al_editar.emit(bodega.clone()))
                                };
                                let eliminar = {
                                    let bodega = (*bodega).clone();
                                    link.callback(move |_| Msg::PedirEliminacion(bodega.clone()))
                                };
                                html! {
                                    <tr key={bodega.id}>
                                        <td>{ &bodega.codigo }</td>
                                        <td>{ &bodega.nombre }</td>
                                        <td>{ bodega.direccion.clone().unwrap_or_default() }</td>
                                        <td>{ bodega.responsable.clone().unwrap_or_default() }</td>
                                        <td class="numero">
                                            { bodega.capacidad.map(|c| c.to_string()).unwrap_or_default() }
                                        </td>
                                        <td>
                                            {
                                                if bodega.activa {
                                                    html! { <span class="insignia activa">{"Activa"}</span> }
                                                } else {
                                                    html! { <span class="insignia inactiva">{"Inactiva"}</span> }
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
                    <span>
                        {
                            if refinar.is_empty() {
                                format!("{} bodegas", self.total)
                            } else {
                                format!(
                                    "Mostrando {} de {} en esta página",
                                    visibles.len(),
                                    self.bodegas.len()
                                )
                            }
                        }
                    </span>
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
                            .map(|b| format!("¿Eliminar la bodega \"{}\"?", b.nombre))
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
