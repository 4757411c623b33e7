//! Vista del listado de productos. A diferencia de los otros listados, la
//! botonera usa la ventana con límites: primera y última página siempre
//! visibles y puntos calculados por borde.

use common::paginacion::ventana_limites;
use num_format::{Locale, ToFormattedString};
use web_sys::SubmitEvent;
use yew::prelude::*;

use crate::components::compartidos::alerta::AlertaBanner;
use crate::components::compartidos::cargando::PantallaCargando;
use crate::components::compartidos::confirmacion::DialogoConfirmacion;
use crate::components::compartidos::formulario::valor_de_input;
use crate::components::compartidos::paginacion::BotoneraPaginas;

use super::messages::Msg;
use super::state::ProductosLista;

pub fn view(lista: &ProductosLista, ctx: &Context<ProductosLista>) -> Html {
    let link = ctx.link();
    html! {
        <div class="listado">
            <AlertaBanner
                alerta={lista.alerta.clone()}
                al_cerrar={link.callback(|_| Msg::CerrarAlerta)}
            />
            <div class="listado-barra">
                <form onsubmit={link.callback(|e: SubmitEvent| { e.prevent_default(); Msg::Buscar })}>
                    <input
                        type="search"
                        placeholder="Buscar productos…"
                        value={lista.termino.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::CambiarTermino(valor_de_input(&e)))}
                    />
                    <button type="submit" disabled={lista.cargando}>{"Buscar"}</button>
                </form>
                <button class="boton-primario" onclick={ctx.props().al_crear.clone()}>
                    {"Nuevo producto"}
                </button>
            </div>

            { tabla(lista, ctx) }

            <div class="listado-pie">
                <span>{ format!("{} productos", lista.total.to_formatted_string(&Locale::es)) }</span>
                <BotoneraPaginas
                    items={ventana_limites(lista.pagina, lista.total_paginas)}
                    actual={lista.pagina}
                    al_cambiar={link.callback(Msg::IrAPagina)}
                />
            </div>

            <DialogoConfirmacion
                visible={lista.eliminar_pendiente.is_some()}
                mensaje={
                    lista.eliminar_pendiente
                        .as_ref()
                        .map(|p| format!("¿Eliminar el producto \"{}\"?", p.nombre))
                        .unwrap_or_default()
                }
                al_confirmar={link.callback(|_| Msg::ConfirmarEliminacion)}
                al_cancelar={link.callback(|_| Msg::CancelarEliminacion)}
            />
            <PantallaCargando visible={lista.cargando} />
        </div>
    }
}

fn tabla(lista: &ProductosLista, ctx: &Context<ProductosLista>) -> Html {
    let link = ctx.link();
    html! {
        <table class="tabla">
            <thead>
                <tr>
                    <th>{"Código"}</th>
                    <th>{"Nombre"}</th>
                    <th>{"Categoría"}</th>
                    <th>{"Proveedor"}</th>
                    <th>{"Precio"}</th>
                    <th>{"Stock mínimo"}</th>
                    <th>{"Estado"}</th>
                    <th>{"Acciones"}</th>
                </tr>
            </thead>
            <tbody>
                {
                    for lista.productos.iter().map(|producto| {
                        let editar = {
                            let al_editar = ctx.props().al_editar.clone();
                            let producto = producto.clone();
                            Callback::from(move |_| al_editar.emit(producto.clone()))
                        };
                        let eliminar = {
                            let producto = producto.clone();
                            link.callback(move |_| Msg::PedirEliminacion(producto.clone()))
                        };
                        html! {
                            <tr key={producto.id}>
                                <td>{ &producto.codigo }</td>
                                <td>{ &producto.nombre }</td>
                                <td>{ producto.categoria_nombre.clone().unwrap_or_default() }</td>
                                <td>{ producto.proveedor_nombre.clone().unwrap_or_default() }</td>
                                <td class="numero">{ format!("Q {:.2}", producto.precio) }</td>
                                <td class="numero">{ producto.stock_minimo }</td>
                                <td>
                                    {
                                        if producto.activo {
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
    }
}
