use common::api::ErrorApi;
use common::model::bodega::Bodega;
use common::model::producto::Producto;
use common::requests::DatosMovimiento;
use common::validacion::campo_opcional;
use web_sys::SubmitEvent;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::compartidos::alerta::{Alerta, AlertaBanner};
use crate::components::compartidos::formulario::{valor_de_area, valor_de_input, valor_de_select};
use crate::services::{bodegas, productos, stock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipoMovimiento {
    Entrada,
    Salida,
}

impl TipoMovimiento {
    fn titulo(&self) -> &'static str {
        match self {
            TipoMovimiento::Entrada => "Registrar entrada",
            TipoMovimiento::Salida => "Registrar salida",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FormularioProps {
    pub tipo: TipoMovimiento,
    pub al_registrar: Callback<String>,
    pub al_cancelar: Callback<MouseEvent>,
}

pub enum Msg {
    BodegasCargadas(Vec<Bodega>),
    FalloBodegas(ErrorApi),
    CambiarTermino(String),
    BuscarProducto,
    Resultados(Vec<Producto>),
    FalloBusqueda(ErrorApi),
    Elegir(Producto),
    CambiarBodega(String),
    CambiarCantidad(String),
    CambiarObservaciones(String),
    Enviar,
    Registrado(String),
    Fallo(ErrorApi),
    CerrarAlerta,
}

/// Formulario de entrada/salida de inventario. El producto se elige
/// buscándolo por término; la cantidad debe ser positiva (una salida de
/// cero no mueve nada y el backend la rechaza de todas formas).
pub struct MovimientoFormulario {
    bodegas: Vec<Bodega>,
    termino: String,
    resultados: Vec<Producto>,
    buscando: bool,
    producto: Option<Producto>,
    bodega_id: String,
    cantidad: String,
    observaciones: String,
    cargando: bool,
    alerta: Option<Alerta>,
}

impl Component for MovimientoFormulario {
    type Message = Msg;
    type Properties = FormularioProps;

    fn create(_ctx: &Context<Self>) -> Self {
        MovimientoFormulario {
            bodegas: Vec::new(),
            termino: String::new(),
            resultados: Vec::new(),
            buscando: false,
            producto: None,
            bodega_id: String::new(),
            cantidad: String::new(),
            observaciones: String::new(),
            cargando: false,
            alerta: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                match bodegas::todas().await {
                    Ok(todas) => link.send_message(Msg::BodegasCargadas(todas)),
                    Err(e) => link.send_message(Msg::FalloBodegas(e)),
                }
            });
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::BodegasCargadas(todas) => {
                self.bodegas = todas;
                true
            }
            Msg::FalloBodegas(e) => {
                self.alerta = Some(Alerta::error(format!(
                    "No se pudieron cargar las bodegas: {e}"
                )));
                true
            }
            Msg::CambiarTermino(v) => {
                self.termino = v;
                true
            }
            Msg::BuscarProducto => {
                let termino = self.termino.trim().to_string();
                if termino.is_empty() || self.buscando {
                    return false;
                }
                self.buscando = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    match productos::buscar(&termino).await {
                        Ok(encontrados) => link.send_message(Msg::Resultados(encontrados)),
                        Err(e) => link.send_message(Msg::FalloBusqueda(e)),
                    }
                });
                true
            }
            Msg::Resultados(encontrados) => {
                self.buscando = false;
                if encontrados.is_empty() {
                    self.alerta = Some(Alerta::aviso("No se encontraron productos."));
                }
                self.resultados = encontrados;
                true
            }
            Msg::FalloBusqueda(e) => {
                self.buscando = false;
                self.alerta = Some(Alerta::error(e.to_string()));
                true
            }
            Msg::Elegir(producto) => {
                self.producto = Some(producto);
                self.resultados.clear();
                true
            }
            Msg::CambiarBodega(v) => {
                self.bodega_id = v;
                true
            }
            Msg::CambiarCantidad(v) => {
                self.cantidad = v;
                true
            }
            Msg::CambiarObservaciones(v) => {
                self.observaciones = v;
                true
            }
            Msg::Enviar => {
                let Some(producto) = &self.producto else {
                    self.alerta = Some(Alerta::aviso("Seleccione un producto."));
                    return true;
                };
                let Ok(bodega_id) = self.bodega_id.parse::<i64>() else {
                    self.alerta = Some(Alerta::aviso("Seleccione una bodega."));
                    return true;
                };
                let cantidad = match self.cantidad.trim().parse::<f64>() {
                    Ok(c) if c > 0.0 => c,
                    _ => {
                        self.alerta =
                            Some(Alerta::aviso("La cantidad debe ser un número mayor que cero."));
                        return true;
                    }
                };
                self.cargando = true;
                self.alerta = None;
                let datos = DatosMovimiento {
                    producto_id: producto.id,
                    bodega_id,
                    cantidad,
                    observaciones: campo_opcional(&self.observaciones),
                };
                let tipo = ctx.props().tipo;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let resultado = match tipo {
                        TipoMovimiento::Entrada => stock::registrar_entrada(&datos).await,
                        TipoMovimiento::Salida => stock::registrar_salida(&datos).await,
                    };
                    match resultado {
                        Ok(mensaje) => link.send_message(Msg::Registrado(mensaje)),
                        Err(e) => link.send_message(Msg::Fallo(e)),
                    }
                });
                true
            }
            Msg::Registrado(mensaje) => {
                self.cargando = false;
                ctx.props().al_registrar.emit(mensaje);
                false
            }
            Msg::Fallo(e) => {
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
            <form
                class="formulario"
                onsubmit={link.callback(|e: SubmitEvent| { e.prevent_default(); Msg::Enviar })}
            >
                <h3>{ ctx.props().tipo.titulo() }</h3>
                <AlertaBanner
                    alerta={self.alerta.clone()}
                    al_cerrar={link.callback(|_| Msg::CerrarAlerta)}
                />

                <div class="campo">
                    <label for="movimiento-producto">{"Producto *"}</label>
                    <div class="buscador-producto">
                        <input
                            id="movimiento-producto"
                            type="search"
                            placeholder="Código o nombre…"
                            value={self.termino.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::CambiarTermino(valor_de_input(&e)))}
                        />
                        <button
                            type="button"
                            disabled={self.buscando}
                            onclick={link.callback(|_| Msg::BuscarProducto)}
                        >
                            { if self.buscando { "Buscando…" } else { "Buscar" } }
                        </button>
                    </div>
                    {
                        if let Some(producto) = &self.producto {
                            html! {
                                <p class="producto-elegido">
                                    { format!("Seleccionado: {} — {}", producto.codigo, producto.nombre) }
                                </p>
                            }
                        } else {
                            html! {}
                        }
                    }
                    {
                        if self.resultados.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <ul class="resultados-busqueda">
                                    {
                                        for self.resultados.iter().map(|producto| {
                                            let elegir = {
                                                let producto = producto.clone();
                                                link.callback(move |_| Msg::Elegir(producto.clone()))
                                            };
                                            html! {
                                                <li key={producto.id}>
                                                    <button type="button" onclick={elegir}>
                                                        { format!("{} — {}", producto.codigo, producto.nombre) }
                                                    </button>
                                                </li>
                                            }
                                        })
                                    }
                                </ul>
                            }
                        }
                    }
                </div>

                <div class="campo-doble">
                    <div class="campo">
                        <label for="movimiento-bodega">{"Bodega *"}</label>
                        <select
                            id="movimiento-bodega"
                            onchange={link.callback(|e: Event| Msg::CambiarBodega(valor_de_select(&e)))}
                        >
                            <option value="" selected={self.bodega_id.is_empty()}>{"— Seleccione —"}</option>
                            {
                                for self.bodegas.iter().map(|b| html! {
                                    <option
                                        value={b.id.to_string()}
                                        selected={self.bodega_id == b.id.to_string()}
                                    >
                                        { format!("{} — {}", b.codigo, b.nombre) }
                                    </option>
                                })
                            }
                        </select>
                    </div>
                    <div class="campo">
                        <label for="movimiento-cantidad">{"Cantidad *"}</label>
                        <input
                            id="movimiento-cantidad"
                            inputmode="decimal"
                            value={self.cantidad.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::CambiarCantidad(valor_de_input(&e)))}
                        />
                    </div>
                </div>

                <div class="campo">
                    <label for="movimiento-observaciones">{"Observaciones"}</label>
                    <textarea
                        id="movimiento-observaciones"
                        rows="2"
                        value={self.observaciones.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::CambiarObservaciones(valor_de_area(&e)))}
                    />
                </div>

                <div class="formulario-acciones">
                    <button
                        type="button"
                        class="boton-secundario"
                        onclick={ctx.props().al_cancelar.clone()}
                    >
                        {"Cancelar"}
                    </button>
                    <button type="submit" class="boton-primario" disabled={self.cargando}>
                        { if self.cargando { "Registrando…" } else { "Registrar" } }
                    </button>
                </div>
            </form>
        }
    }
}
