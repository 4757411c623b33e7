use common::api::ErrorApi;
use common::model::cliente::{Cliente, PaginaClientes};
use common::paginacion::ventana_clasica;
use num_format::{Locale, ToFormattedString};
use web_sys::SubmitEvent;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::compartidos::alerta::{Alerta, AlertaBanner};
use crate::components::compartidos::cargando::PantallaCargando;
use crate::components::compartidos::confirmacion::DialogoConfirmacion;
use crate::components::compartidos::formulario::valor_de_input;
use crate::components::compartidos::paginacion::BotoneraPaginas;
use crate::services::clientes;

const TAMANO_PAGINA: i64 = 10;

#[derive(Properties, PartialEq)]
pub struct ListaProps {
    /// El contenedor la incrementa para forzar una recarga tras guardar.
    pub version: u32,
    pub al_crear: Callback<MouseEvent>,
    pub al_editar: Callback<Cliente>,
}

pub enum Msg {
    Cargar,
    Cargada(PaginaClientes),
    Fallo(ErrorApi),
    CambiarTermino(String),
    Buscar,
    CambiarRefinar(String),
    IrAPagina(i64),
    PedirEliminacion(Cliente),
    CancelarEliminacion,
    ConfirmarEliminacion,
    Eliminado(String),
    FalloEliminacion(ErrorApi),
    CerrarAlerta,
}

pub struct ClientesLista {
    clientes: Vec<Cliente>,
    cargando: bool,
    alerta: Option<Alerta>,
    /// Término que viaja al backend con cada búsqueda.
    termino: String,
    /// Afina dentro de la página ya traída; no toca al servidor.
    refinar: String,
    pagina: i64,
    total: i64,
    total_paginas: i64,
    eliminar_pendiente: Option<Cliente>,
}

impl Component for ClientesLista {
    type Message = Msg;
    type Properties = ListaProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ClientesLista {
            clientes: Vec::new(),
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
                    // con término activo la página sale del endpoint de
                    // búsqueda; sin término, del listado normal
                    let termino = termino.trim().to_string();
                    let resultado = if termino.is_empty() {
                        clientes::listar(pagina, TAMANO_PAGINA, None).await
                    } else {
                        clientes::buscar(pagina, TAMANO_PAGINA, &termino).await
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
                self.clientes = p.clientes;
                self.total = p.total;
                self.total_paginas = p.total_paginas;
                self.pagina = p.pagina;
                true
            }
            Msg::Fallo(e) => {
                self.cargando = false;
                self.clientes.clear();
                self.total = 0;
                self.total_paginas = 0;
                self.alerta = Some(Alerta::error(e.to_string()));
                true
            }
            Msg::CambiarTermino(valor) => {
                self.termino = valor;
                true
            }
            // sin guarda de `cargando`: en esta vista la búsqueda sigue
            // viva aunque haya una carga en vuelo
            Msg::Buscar => {
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
            Msg::PedirEliminacion(cliente) => {
                self.eliminar_pendiente = Some(cliente);
                true
            }
            Msg::CancelarEliminacion => {
                self.eliminar_pendiente = None;
                true
            }
            Msg::ConfirmarEliminacion => {
                let Some(cliente) = self.eliminar_pendiente.take() else {
                    return false;
                };
                self.cargando = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    match clientes::eliminar(cliente.id).await {
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
                // el listado queda tal cual; solo se informa
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
        let visibles: Vec<&Cliente> = self
            .clientes
            .iter()
            .filter(|c| {
                refinar.is_empty()
                    || c.nombre.to_lowercase().contains(&refinar)
                    || c.codigo.to_lowercase().contains(&refinar)
                    || c.nit.as_deref().unwrap_or("").to_lowercase().contains(&refinar)
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
                            placeholder="Buscar clientes…"
                            value={self.termino.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::CambiarTermino(valor_de_input(&e)))}
                        />
                        <button type="submit">{"Buscar"}</button>
                    </form>
                    <input
                        type="text"
                        class="refinar"
                        placeholder="Afinar en esta página"
                        value={self.refinar.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::CambiarRefinar(valor_de_input(&e)))}
                    />
                    <button class="boton-primario" onclick={ctx.props().al_crear.clone()}>
                        {"Nuevo cliente"}
                    </button>
                </div>

                <table class="tabla">
                    <thead>
                        <tr>
                            <th>{"Código"}</th>
                            <th>{"Nombre"}</th>
                            <th>{"NIT"}</th>
                            <th>{"Teléfono"}</th>
                            <th>{"Correo"}</th>
                            <th>{"Límite de crédito"}</th>
                            <th>{"Estado"}</th>
                            <th>{"Acciones"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for visibles.iter().map(|cliente| {
                                let editar = {
                                    let al_editar = ctx.props().al_editar.clone();
                                    let cliente = (*cliente).clone();
                                    Callback::from(move |_| al_editar.emit(cliente.clone()))
                                };
                                let eliminar = {
                                    let cliente = (*cliente).clone();
                                    link.callback(move |_| Msg::PedirEliminacion(cliente.clone()))
                                };
                                html! {
                                    <tr key={cliente.id}>
                                        <td>{ &cliente.codigo }</td>
                                        <td>{ &cliente.nombre }</td>
                                        <td>{ cliente.nit.clone().unwrap_or_default() }</td>
                                        <td>{ cliente.telefono1.clone().unwrap_or_default() }</td>
                                        <td>{ cliente.correo_electronico.clone().unwrap_or_default() }</td>
                                        <td class="numero">{ format!("Q {:.2}", cliente.limite_credito) }</td>
                                        <td>
                                            {
                                                if cliente.activo {
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
                    <span>
                        {
                            if refinar.is_empty() {
                                format!("{} clientes", self.total.to_formatted_string(&Locale::es))
                            } else {
                                // el afinado solo mira la página visible
                                format!(
                                    "Mostrando {} de {} en esta página",
                                    visibles.len(),
                                    self.clientes.len()
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
                            .map(|c| format!("¿Eliminar al cliente \"{}\"? Esta acción no se puede deshacer.", c.nombre))
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
