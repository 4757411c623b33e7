use common::api::ErrorApi;
use common::model::rol::Rol;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::compartidos::alerta::{Alerta, AlertaBanner};
use crate::components::compartidos::cargando::PantallaCargando;
use crate::components::compartidos::confirmacion::DialogoConfirmacion;
use crate::services::roles;

#[derive(Properties, PartialEq)]
pub struct ListaProps {
    pub version: u32,
    pub al_crear: Callback<MouseEvent>,
    pub al_editar: Callback<Rol>,
    pub al_abrir_permisos: Callback<Rol>,
}

pub enum Msg {
    Cargar,
    Cargados(Vec<Rol>),
    Fallo(ErrorApi),
    PedirEliminacion(Rol),
    CancelarEliminacion,
    ConfirmarEliminacion,
    Eliminado(String),
    FalloEliminacion(ErrorApi),
    CerrarAlerta,
}

/// Tabla de roles. Son pocos registros, así que el backend los entrega
/// completos y aquí no hay paginación ni búsqueda.
pub struct RolesLista {
    roles: Vec<Rol>,
    cargando: bool,
    alerta: Option<Alerta>,
    eliminar_pendiente: Option<Rol>,
}

impl Component for RolesLista {
    type Message = Msg;
    type Properties = ListaProps;

    fn create(_ctx: &Context<Self>) -> Self {
        RolesLista {
            roles: Vec::new(),
            cargando: false,
            alerta: None,
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
                let link = ctx.link().clone();
                spawn_local(async move {
                    match roles::listar().await {
                        Ok(roles) => link.send_message(Msg::Cargados(roles)),
                        Err(e) => link.send_message(Msg::Fallo(e)),
                    }
                });
                true
            }
            Msg::Cargados(roles) => {
                self.cargando = false;
                self.roles = roles;
                true
            }
            Msg::Fallo(e) => {
                self.cargando = false;
                self.roles.clear();
                self.alerta = Some(Alerta::error(e.to_string()));
                true
            }
            Msg::PedirEliminacion(rol) => {
                self.eliminar_pendiente = Some(rol);
                true
            }
            Msg::CancelarEliminacion => {
                self.eliminar_pendiente = None;
                true
            }
            Msg::ConfirmarEliminacion => {
                let Some(rol) = self.eliminar_pendiente.take() else {
                    return false;
                };
                self.cargando = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    match roles::eliminar(rol.id).await {
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
                    <button class="boton-primario" onclick={ctx.props().al_crear.clone()}>
                        {"Nuevo rol"}
                    </button>
                </div>

                <table class="tabla">
                    <thead>
                        <tr>
                            <th>{"Nombre"}</th>
                            <th>{"Descripción"}</th>
                            <th>{"Acciones"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for self.roles.iter().map(|rol| {
                                let editar = {
                                    let al_editar = ctx.props().al_editar.clone();
                                    let rol = rol.clone();
                                    Callback::from(move |_| al_editar.emit(rol.clone()))
                                };
                                let permisos = {
                                    let al_abrir = ctx.props().al_abrir_permisos.clone();
                                    let rol = rol.clone();
                                    Callback::from(move |_| al_abrir.emit(rol.clone()))
                                };
                                let eliminar = {
                                    let rol = rol.clone();
                                    link.callback(move |_| Msg::PedirEliminacion(rol.clone()))
                                };
                                html! {
                                    <tr key={rol.id}>
                                        <td>{ &rol.nombre }</td>
                                        <td>{ rol.descripcion.clone().unwrap_or_default() }</td>
                                        <td class="acciones">
                                            <button onclick={editar}>{"Editar"}</button>
                                            <button onclick={permisos}>{"Permisos"}</button>
                                            <button class="boton-peligro" onclick={eliminar}>{"Eliminar"}</button>
                                        </td>
                                    </tr>
                                }
                            })
                        }
                    </tbody>
                </table>

                <DialogoConfirmacion
                    visible={self.eliminar_pendiente.is_some()}
                    mensaje={
                        self.eliminar_pendiente
                            .as_ref()
                            .map(|r| format!(
                                "¿Eliminar el rol \"{}\"? Los usuarios con este rol perderán sus permisos.",
                                r.nombre
                            ))
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
