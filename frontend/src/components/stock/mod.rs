//! Sección de stock. Las existencias son de solo lectura: se modifican
//! únicamente registrando entradas y salidas, así que el contenedor ofrece
//! cuatro pestañas en lugar del par listado/formulario habitual.

mod lista;
mod movimiento_form;
mod movimientos;

use yew::prelude::*;

use crate::components::compartidos::alerta::{Alerta, AlertaBanner};

use lista::StockLista;
use movimiento_form::{MovimientoFormulario, TipoMovimiento};
use movimientos::MovimientosLista;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pestana {
    Existencias,
    Movimientos,
    Entrada,
    Salida,
}

pub enum Msg {
    Ir(Pestana),
    MovimientoRegistrado(String),
    CerrarAlerta,
}

pub struct StockMain {
    pestana: Pestana,
    version: u32,
    alerta: Option<Alerta>,
}

impl Component for StockMain {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        StockMain {
            pestana: Pestana::Existencias,
            version: 0,
            alerta: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Ir(pestana) => {
                if self.pestana == pestana {
                    return false;
                }
                self.pestana = pestana;
                true
            }
            Msg::MovimientoRegistrado(mensaje) => {
                self.pestana = Pestana::Existencias;
                self.version += 1;
                self.alerta = Some(Alerta::exito(mensaje));
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
        let pestana = |destino: Pestana, etiqueta: &str| {
            let activa = self.pestana == destino;
            html! {
                <button
                    class={classes!("tab-btn", activa.then_some("activa"))}
                    onclick={link.callback(move |_| Msg::Ir(destino))}
                >
                    { etiqueta }
                </button>
            }
        };

        html! {
            <section class="seccion">
                <h2>{"Stock"}</h2>
                <AlertaBanner
                    alerta={self.alerta.clone()}
                    al_cerrar={link.callback(|_| Msg::CerrarAlerta)}
                />
                <div class="tab-bar">
                    { pestana(Pestana::Existencias, "Existencias") }
                    { pestana(Pestana::Movimientos, "Movimientos") }
                    { pestana(Pestana::Entrada, "Registrar entrada") }
                    { pestana(Pestana::Salida, "Registrar salida") }
                </div>
                {
                    match self.pestana {
                        Pestana::Existencias => html! {
                            <StockLista version={self.version} />
                        },
                        Pestana::Movimientos => html! {
                            <MovimientosLista version={self.version} />
                        },
                        Pestana::Entrada => html! {
                            <MovimientoFormulario
                                tipo={TipoMovimiento::Entrada}
                                al_registrar={link.callback(Msg::MovimientoRegistrado)}
                                al_cancelar={link.callback(|_| Msg::Ir(Pestana::Existencias))}
                            />
                        },
                        Pestana::Salida => html! {
                            <MovimientoFormulario
                                tipo={TipoMovimiento::Salida}
                                al_registrar={link.callback(Msg::MovimientoRegistrado)}
                                al_cancelar={link.callback(|_| Msg::Ir(Pestana::Existencias))}
                            />
                        },
                    }
                }
            </section>
        }
    }
}
