use common::api::ErrorApi;
use common::model::usuario::{PaginaUsuarios, Usuario};
use common::paginacion::ventana_adyacente;
use common::requests::ReinicioPassword;
use web_sys::SubmitEvent;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::compartidos::alerta::{Alerta, AlertaBanner};
use crate::components::compartidos::cargando::PantallaCargando;
use crate::components::compartidos::confirmacion::DialogoConfirmacion;
use crate::components::compartidos::formulario::valor_de_input;
use crate::components::compartidos::paginacion::BotoneraPaginas;
use crate::services::{auth, usuarios};

const TAMANO_PAGINA: i64 = 10;

#[derive(Properties, PartialEq)]
pub struct ListaProps {
    pub version: u32,
    pub al_crear: Callback<MouseEvent>,
    pub al_editar: Callback<Usuario>,
}

pub enum Msg {
    Cargar,
    Cargada(PaginaUsuarios),
    Fallo(ErrorApi),
    CambiarTermino(String),
    Buscar,
    IrAPagina(i64),
    PedirReinicio(Usuario),
    CancelarReinicio,
    ConfirmarReinicio,
    Reiniciada(String),
    FalloReinicio(ErrorApi),
    CerrarAlerta,
}

/// Los usuarios no se eliminan: se desactivan desde el formulario. La
/// acción destructiva de esta tabla es el reinicio de contraseña, que
/// invalida la actual y envía una temporal por correo, y por eso pasa por
/// el mismo diálogo de confirmación que las eliminaciones.
pub struct UsuariosLista {
    usuarios: Vec<Usuario>,
    cargando: bool,
    alerta: Option<Alerta>,
    termino: String,
    pagina: i64,
    total: i64,
    total_paginas: i64,
    reinicio_pendiente: Option<Usuario>,
}

impl Component for UsuariosLista {
    type Message = Msg;
    type Properties = ListaProps;

    fn create(_ctx: &Context<Self>) -> Self {
        UsuariosLista {
            usuarios: Vec::new(),
            cargando: false,
            alerta: None,
            termino: String::new(),
            pagina: 1,
            total: 0,
            total_paginas: 0,
            reinicio_pendiente: None,
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
                    match usuarios::listar(pagina, TAMANO_PAGINA, termino.as_deref()).await {
                        Ok(p) => link.send_message(Msg::Cargada(p)),
                        Err(e) => link.send_message(Msg::Fallo(e)),
                    }
                });
                true
            }
            Msg::Cargada(p) => {
                self.cargando = false;
                self.usuarios = p.usuarios;
                self.total = p.total;
                self.total_paginas = p.total_paginas;
                self.pagina = p.pagina;
                true
            }
            Msg::Fallo(e) => {
                self.cargando = false;
                self.usuarios.clear();
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
            Msg::PedirReinicio(usuario) => {
                self.reinicio_pendiente = Some(usuario);
                true
            }
            Msg::CancelarReinicio => {
                self.reinicio_pendiente = None;
                true
            }
            Msg::ConfirmarReinicio => {
                let Some(usuario) = self.reinicio_pendiente.take() else {
                    return false;
                };
                self.cargando = true;
                let datos = ReinicioPassword {
                    correo: usuario.correo,
                    password_nueva: None,
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    match auth::reiniciar_password(&datos).await {
                        Ok(mensaje) => link.send_message(Msg::Reiniciada(mensaje)),
                        Err(e) => link.send_message(Msg::FalloReinicio(e)),
                    }
                });
                true
            }
            Msg::Reiniciada(mensaje) => {
                self.cargando = false;
                self.alerta = Some(Alerta::exito(mensaje));
                true
            }
            Msg::FalloReinicio(e) => {
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
                            placeholder="Buscar usuarios…"
                            value={self.termino.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::CambiarTermino(valor_de_input(&e)))}
                        />
                        <button type="submit" disabled={self.cargando}>{"Buscar"}</button>
                    </form>
                    <button class="boton-primario" onclick={ctx.props().al_crear.clone()}>
                        {"Nuevo usuario"}
                    </button>
                </div>

                <table class="tabla">
                    <thead>
                        <tr>
                            <th>{"Nombre"}</th>
                            <th>{"Correo"}</th>
                            <th>{"Rol"}</th>
                            <th>{"Estado"}</th>
                            <th>{"Acciones"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for self.usuarios.iter().map(|usuario| {
                                let editar = {
                                    let al_editar = ctx.props().al_editar.clone();
                                    let usuario = usuario.clone();
                                    Callback::from(move |_| al_editar.emit(usuario.clone()))
                                };
                                let reiniciar = {
                                    let usuario = usuario.clone();
                                    link.callback(move |_| Msg::PedirReinicio(usuario.clone()))
                                };
                                html! {
                                    <tr key={usuario.id}>
                                        <td>
                                            { &usuario.nombre }
                                            {
                                                if usuario.forzar_cambio_password {
                                                    html! { <span class="insignia pendiente">{"Contraseña temporal"}</span> }
                                                } else {
                                                    html! {}
                                                }
                                            }
                                        </td>
                                        <td>{ &usuario.correo }</td>
                                        <td>{ usuario.rol_nombre.clone().unwrap_or_default() }</td>
                                        <td>
                                            {
                                                if usuario.activo {
                                                    html! { <span class="insignia activa">{"Activo"}</span> }
                                                } else {
                                                    html! { <span class="insignia inactiva">{"Inactivo"}</span> }
                                                }
                                            }
                                        </td>
                                        <td class="acciones">
                                            <button onclick={editar}>{"Editar"}</button>
                                            <button class="boton-peligro" onclick={reiniciar}>
                                                {"Reiniciar contraseña"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                        }
                    </tbody>
                </table>

                <div class="listado-pie">
                    <span>{ format!("{} usuarios", self.total) }</span>
                    // esta tabla usa su propia ventana: ±1 alrededor de la
                    // página actual con puntos en ambos cortes
                    <BotoneraPaginas
                        items={ventana_adyacente(self.pagina, self.total_paginas)}
                        actual={self.pagina}
                        al_cambiar={link.callback(Msg::IrAPagina)}
                    />
                </div>

                <DialogoConfirmacion
                    visible={self.reinicio_pendiente.is_some()}
                    mensaje={
                        self.reinicio_pendiente
                            .as_ref()
                            .map(|u| format!(
                                "¿Reiniciar la contraseña de \"{}\"? Se enviará una contraseña temporal a {}.",
                                u.nombre, u.correo
                            ))
                            .unwrap_or_default()
                    }
                    etiqueta_confirmar={"Reiniciar".to_string()}
                    al_confirmar={link.callback(|_| Msg::ConfirmarReinicio)}
                    al_cancelar={link.callback(|_| Msg::CancelarReinicio)}
                />
                <PantallaCargando visible={self.cargando} />
            </div>
        }
    }
}
