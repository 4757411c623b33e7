use common::api::ErrorApi;
use common::model::bodega::Bodega;
use common::model::stock::{NivelAlerta, PaginaStock, Stock};
use common::paginacion::ventana_clasica;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::compartidos::alerta::{Alerta, AlertaBanner};
use crate::components::compartidos::cargando::PantallaCargando;
use crate::components::compartidos::formulario::valor_de_select;
use crate::components::compartidos::paginacion::BotoneraPaginas;
use crate::services::{bodegas, stock};

const TAMANO_PAGINA: i64 = 10;

const NIVELES: [(&str, &str); 4] = [
    ("SIN_STOCK", "Sin stock"),
    ("CRITICO", "Crítico"),
    ("BAJO", "Bajo"),
    ("NORMAL", "Normal"),
];

#[derive(Properties, PartialEq)]
pub struct ListaProps {
    pub version: u32,
}

pub enum Msg {
    Cargar,
    Cargada(PaginaStock),
    Fallo(ErrorApi),
    BodegasCargadas(Vec<Bodega>),
    FiltrarBodega(String),
    FiltrarNivel(String),
    IrAPagina(i64),
    CerrarAlerta,
}

/// Existencias por producto y bodega. Solo lectura: sin editar ni
/// eliminar; el filtro por bodega y por nivel de alerta relanza la
/// consulta al servidor.
pub struct StockLista {
    existencias: Vec<Stock>,
    bodegas: Vec<Bodega>,
    cargando: bool,
    alerta: Option<Alerta>,
    filtro_bodega: Option<i64>,
    filtro_nivel: Option<String>,
    pagina: i64,
    total: i64,
    total_paginas: i64,
}

impl Component for StockLista {
    type Message = Msg;
    type Properties = ListaProps;

    fn create(_ctx: &Context<Self>) -> Self {
        StockLista {
            existencias: Vec::new(),
            bodegas: Vec::new(),
            cargando: false,
            alerta: None,
            filtro_bodega: None,
            filtro_nivel: None,
            pagina: 1,
            total: 0,
            total_paginas: 0,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Cargar);
            // el catálogo de bodegas alimenta el filtro; si falla se sigue
            // sin él, la tabla no depende de este selector
            let link = ctx.link().clone();
            spawn_local(async move {
                if let Ok(todas) = bodegas::todas().await {
                    link.send_message(Msg::BodegasCargadas(todas));
                }
            });
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
                let bodega = self.filtro_bodega;
                let nivel = self.filtro_nivel.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match stock::listar(pagina, TAMANO_PAGINA, bodega, nivel.as_deref()).await {
                        Ok(p) => link.send_message(Msg::Cargada(p)),
                        Err(e) => link.send_message(Msg::Fallo(e)),
                    }
                });
                true
            }
            Msg::Cargada(p) => {
                self.cargando = false;
                self.existencias = p.stock;
                self.total = p.total;
                self.total_paginas = p.total_paginas;
                self.pagina = p.pagina;
                true
            }
            Msg::Fallo(e) => {
                self.cargando = false;
                self.existencias.clear();
                self.total = 0;
                self.total_paginas = 0;
                self.alerta = Some(Alerta::error(e.to_string()));
                true
            }
            Msg::BodegasCargadas(todas) => {
                self.bodegas = todas;
                true
            }
            Msg::FiltrarBodega(valor) => {
                self.filtro_bodega = valor.parse::<i64>().ok();
                self.pagina = 1;
                ctx.link().send_message(Msg::Cargar);
                true
            }
            Msg::FiltrarNivel(valor) => {
                self.filtro_nivel = (!valor.is_empty()).then_some(valor);
                self.pagina = 1;
                ctx.link().send_message(Msg::Cargar);
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
                <div class="listado-barra">
                    <select onchange={link.callback(|e: Event| Msg::FiltrarBodega(valor_de_select(&e)))}>
                        <option value="" selected={self.filtro_bodega.is_none()}>{"Todas las bodegas"}</option>
                        {
                            for self.bodegas.iter().map(|b| html! {
                                <option
                                    value={b.id.to_string()}
                                    selected={self.filtro_bodega == Some(b.id)}
                                >
                                    { &b.nombre }
                                </option>
                            })
                        }
                    </select>
                    <select onchange={link.callback(|e: Event| Msg::FiltrarNivel(valor_de_select(&e)))}>
                        <option value="" selected={self.filtro_nivel.is_none()}>{"Todos los niveles"}</option>
                        {
                            for NIVELES.iter().map(|(valor, etiqueta)| html! {
                                <option
                                    value={*valor}
                                    selected={self.filtro_nivel.as_deref() == Some(*valor)}
                                >
                                    { *etiqueta }
                                </option>
                            })
                        }
                    </select>
                </div>

                <table class="tabla">
                    <thead>
                        <tr>
                            <th>{"Producto"}</th>
                            <th>{"Bodega"}</th>
                            <th>{"Actual"}</th>
                            <th>{"Mínima"}</th>
                            <th>{"Reservada"}</th>
                            <th>{"Disponible"}</th>
                            <th>{"Nivel"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for self.existencias.iter().map(|existencia| html! {
                                <tr key={existencia.id}>
                                    <td>{ format!("{} — {}", existencia.producto_codigo, existencia.producto_nombre) }</td>
                                    <td>{ &existencia.bodega_nombre }</td>
                                    <td class="numero">{ existencia.cantidad_actual }</td>
                                    <td class="numero">{ existencia.cantidad_minima }</td>
                                    <td class="numero">{ existencia.cantidad_reservada }</td>
                                    <td class="numero">{ existencia.cantidad_disponible }</td>
                                    <td>{ insignia_nivel(existencia.nivel_alerta) }</td>
                                </tr>
                            })
                        }
                    </tbody>
                </table>

                <div class="listado-pie">
                    <span>{ format!("{} existencias", self.total) }</span>
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

fn insignia_nivel(nivel: NivelAlerta) -> Html {
    let clase = match nivel {
        NivelAlerta::SinStock => "insignia nivel-sin-stock",
        NivelAlerta::Critico => "insignia nivel-critico",
        NivelAlerta::Bajo => "insignia nivel-bajo",
        NivelAlerta::Normal => "insignia nivel-normal",
    };
    html! { <span class={clase}>{ nivel.etiqueta() }</span> }
}
