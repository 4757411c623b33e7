use common::api::ErrorApi;
use common::model::stock::{Movimiento, PaginaMovimientos};
use common::paginacion::ventana_clasica;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::compartidos::alerta::{Alerta, AlertaBanner};
use crate::components::compartidos::cargando::PantallaCargando;
use crate::components::compartidos::paginacion::BotoneraPaginas;
use crate::services::stock;

const TAMANO_PAGINA: i64 = 15;

#[derive(Properties, PartialEq)]
pub struct ListaProps {
    pub version: u32,
}

pub enum Msg {
    Cargar,
    Cargada(PaginaMovimientos),
    Fallo(ErrorApi),
    IrAPagina(i64),
    CerrarAlerta,
}

/// Historial de entradas y salidas, el más reciente primero.
pub struct MovimientosLista {
    movimientos: Vec<Movimiento>,
    cargando: bool,
    alerta: Option<Alerta>,
    pagina: i64,
    total_paginas: i64,
}

impl Component for MovimientosLista {
    type Message = Msg;
    type Properties = ListaProps;

    fn create(_ctx: &Context<Self>) -> Self {
        MovimientosLista {
            movimientos: Vec::new(),
            cargando: false,
            alerta: None,
            pagina: 1,
            total_paginas: 0,
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
                let link = ctx.link().clone();
                spawn_local(async move {
                    match stock::movimientos(pagina, TAMANO_PAGINA).await {
                        Ok(p) => link.send_message(Msg::Cargada(p)),
                        Err(e) => link.send_message(Msg::Fallo(e)),
                    }
                });
                true
            }
            Msg::Cargada(p) => {
                self.cargando = false;
                self.movimientos = p.movimientos;
                self.total_paginas = p.total_paginas;
                self.pagina = p.pagina;
                true
            }
            Msg::Fallo(e) => {
                self.cargando = false;
                self.movimientos.clear();
                self.total_paginas = 0;
                self.alerta = Some(Alerta::error(e.to_string()));
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
                <table class="tabla">
                    <thead>
                        <tr>
                            <th>{"Fecha"}</th>
                            <th>{"Tipo"}</th>
                            <th>{"Producto"}</th>
                            <th>{"Bodega"}</th>
                            <th>{"Cantidad"}</th>
                            <th>{"Observaciones"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for self.movimientos.iter().map(|movimiento| html! {
                                <tr key={movimiento.id}>
                                    <td>{ &movimiento.fecha }</td>
                                    <td>{ &movimiento.tipo }</td>
                                    <td>{ &movimiento.producto_nombre }</td>
                                    <td>{ &movimiento.bodega_nombre }</td>
                                    <td class="numero">{ movimiento.cantidad }</td>
                                    <td>{ movimiento.observaciones.clone().unwrap_or_default() }</td>
                                </tr>
                            })
                        }
                    </tbody>
                </table>
                <div class="listado-pie">
                    <BotoneraPaginas
                        items={ventana_clasica(self.pagina, self.total_paginas)}
                        actual={self.pagina}
                        al_cambiar={link.callback(Msg::IrAPagina)}
                    />
                </div>
                <PantallaCargando visible={self.cargando} />
            </div>
        }
    }
}
