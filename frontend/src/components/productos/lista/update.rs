//! Lógica de actualización del listado de productos. Recibe el estado, el
//! contexto y un mensaje; muta y devuelve si hay que re-renderizar.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::compartidos::alerta::Alerta;
use crate::services::productos;

use super::messages::Msg;
use super::state::{ProductosLista, TAMANO_PAGINA};

pub fn update(lista: &mut ProductosLista, ctx: &Context<ProductosLista>, msg: Msg) -> bool {
    match msg {
        Msg::Cargar => {
            lista.cargando = true;
            let pagina = lista.pagina;
            let termino = lista.termino.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let termino = (!termino.trim().is_empty()).then_some(termino);
                match productos::listar(pagina, TAMANO_PAGINA, termino.as_deref()).await {
                    Ok(p) => link.send_message(Msg::Cargada(p)),
                    Err(e) => link.send_message(Msg::Fallo(e)),
                }
            });
            true
        }
        Msg::Cargada(p) => {
            lista.cargando = false;
            lista.productos = p.productos;
            lista.total = p.total;
            lista.total_paginas = p.total_paginas;
            lista.pagina = p.pagina;
            true
        }
        Msg::Fallo(e) => {
            lista.cargando = false;
            lista.productos.clear();
            lista.total = 0;
            lista.total_paginas = 0;
            lista.alerta = Some(Alerta::error(e.to_string()));
            true
        }
        Msg::CambiarTermino(valor) => {
            lista.termino = valor;
            true
        }
        Msg::Buscar => {
            if lista.cargando {
                return false;
            }
            lista.pagina = 1;
            ctx.link().send_message(Msg::Cargar);
            false
        }
        Msg::IrAPagina(n) => {
            if n == lista.pagina || lista.cargando {
                return false;
            }
            lista.pagina = n;
            ctx.link().send_message(Msg::Cargar);
            false
        }
        Msg::PedirEliminacion(producto) => {
            lista.eliminar_pendiente = Some(producto);
            true
        }
        Msg::CancelarEliminacion => {
            lista.eliminar_pendiente = None;
            true
        }
        Msg::ConfirmarEliminacion => {
            let Some(producto) = lista.eliminar_pendiente.take() else {
                return false;
            };
            lista.cargando = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                match productos::eliminar(producto.id).await {
                    Ok(mensaje) => link.send_message(Msg::Eliminado(mensaje)),
                    Err(e) => link.send_message(Msg::FalloEliminacion(e)),
                }
            });
            true
        }
        Msg::Eliminado(mensaje) => {
            lista.alerta = Some(Alerta::exito(mensaje));
            ctx.link().send_message(Msg::Cargar);
            true
        }
        Msg::FalloEliminacion(e) => {
            lista.cargando = false;
            lista.alerta = Some(Alerta::error(e.to_string()));
            true
        }
        Msg::CerrarAlerta => {
            lista.alerta = None;
            true
        }
    }
}
