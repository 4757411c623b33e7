use common::api::ErrorApi;
use common::model::rol::Rol;
use common::model::usuario::Usuario;
use common::requests::{ConsultaUnicidad, DatosUsuario, VeredictoUnicidad};
use common::validacion::{es_correo_valido, texto_requerido};
use web_sys::SubmitEvent;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::compartidos::alerta::{Alerta, AlertaBanner};
use crate::components::compartidos::formulario::{
    EstadoValidacion, marcado, valor_de_input, valor_de_select,
};
use crate::services::{roles, usuarios};

#[derive(Properties, PartialEq)]
pub struct FormularioProps {
    pub usuario: Option<Usuario>,
    pub al_guardar: Callback<String>,
    pub al_cancelar: Callback<MouseEvent>,
}

pub enum Msg {
    RolesCargados(Vec<Rol>),
    FalloRoles(ErrorApi),
    CambiarNombre(String),
    CambiarCorreo(String),
    ValidarCorreo,
    CorreoVerificado(Result<VeredictoUnicidad, ErrorApi>),
    CambiarRol(String),
    CambiarActivo(bool),
    Enviar,
    Guardado(String),
    Fallo(ErrorApi),
    CerrarAlerta,
}

/// Alta y edición de usuarios. No hay campo de contraseña: al crear, el
/// backend genera una temporal y la envía al correo del usuario.
pub struct UsuariosFormulario {
    roles: Vec<Rol>,
    nombre: String,
    correo: String,
    validacion_correo: EstadoValidacion,
    rol_id: String,
    activo: bool,
    cargando: bool,
    alerta: Option<Alerta>,
}

impl Component for UsuariosFormulario {
    type Message = Msg;
    type Properties = FormularioProps;

    fn create(ctx: &Context<Self>) -> Self {
        let u = ctx.props().usuario.as_ref();
        UsuariosFormulario {
            roles: Vec::new(),
            nombre: u.map(|u| u.nombre.clone()).unwrap_or_default(),
            correo: u.map(|u| u.correo.clone()).unwrap_or_default(),
            validacion_correo: EstadoValidacion::default(),
            rol_id: u.map(|u| u.rol_id.to_string()).unwrap_or_default(),
            activo: u.map(|u| u.activo).unwrap_or(true),
            cargando: false,
            alerta: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                match roles::listar().await {
                    Ok(roles) => link.send_message(Msg::RolesCargados(roles)),
                    Err(e) => link.send_message(Msg::FalloRoles(e)),
                }
            });
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::RolesCargados(roles) => {
                self.roles = roles;
                true
            }
            Msg::FalloRoles(e) => {
                self.alerta = Some(Alerta::error(format!(
                    "No se pudieron cargar los roles: {e}"
                )));
                true
            }
            Msg::CambiarNombre(v) => {
                self.nombre = v;
                true
            }
            Msg::CambiarCorreo(v) => {
                self.correo = v;
                self.validacion_correo = EstadoValidacion::default();
                true
            }
            Msg::ValidarCorreo => {
                let valor = self.correo.trim().to_string();
                if valor.is_empty() || !es_correo_valido(&valor) {
                    return false;
                }
                self.validacion_correo = EstadoValidacion::verificando();
                let consulta = ConsultaUnicidad {
                    valor,
                    excluir_id: ctx.props().usuario.as_ref().map(|u| u.id),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    let resultado = usuarios::validar_correo(&consulta).await;
                    link.send_message(Msg::CorreoVerificado(resultado));
                });
                true
            }
            Msg::CorreoVerificado(resultado) => {
                self.validacion_correo = match resultado {
                    Ok(v) if v.existe => {
                        EstadoValidacion::conflicto("Ya existe un usuario con ese correo.")
                    }
                    Ok(_) => EstadoValidacion::disponible(),
                    Err(e) => {
                        EstadoValidacion::conflicto(format!("No se pudo validar el correo: {e}"))
                    }
                };
                true
            }
            Msg::CambiarRol(v) => {
                self.rol_id = v;
                true
            }
            Msg::CambiarActivo(v) => {
                self.activo = v;
                true
            }
            Msg::Enviar => {
                let Some(nombre) = texto_requerido(&self.nombre) else {
                    self.alerta = Some(Alerta::aviso("El nombre es obligatorio."));
                    return true;
                };
                let correo = self.correo.trim().to_string();
                if !es_correo_valido(&correo) {
                    self.alerta = Some(Alerta::aviso("El correo no tiene un formato válido."));
                    return true;
                }
                let Ok(rol_id) = self.rol_id.parse::<i64>() else {
                    self.alerta = Some(Alerta::aviso("Seleccione un rol."));
                    return true;
                };
                self.cargando = true;
                self.alerta = None;
                let datos = DatosUsuario {
                    id: ctx.props().usuario.as_ref().map(|u| u.id),
                    nombre,
                    correo,
                    rol_id,
                    activo: self.activo,
                };
                let id = datos.id;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let resultado = match id {
                        Some(id) => usuarios::actualizar(id, &datos).await,
                        None => usuarios::crear(&datos).await,
                    };
                    match resultado {
                        Ok(_) => link.send_message(Msg::Guardado(match id {
                            Some(_) => "Usuario actualizado correctamente.".to_string(),
                            None => {
                                "Usuario creado. La contraseña temporal fue enviada a su correo."
                                    .to_string()
                            }
                        })),
                        Err(e) => link.send_message(Msg::Fallo(e)),
                    }
                });
                true
            }
            Msg::Guardado(mensaje) => {
                self.cargando = false;
                ctx.props().al_guardar.emit(mensaje);
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
        let editando = ctx.props().usuario.is_some();
        html! {
            <form
                class="formulario"
                onsubmit={link.callback(|e: SubmitEvent| { e.prevent_default(); Msg::Enviar })}
            >
                <h3>{ if editando { "Editar usuario" } else { "Nuevo usuario" } }</h3>
                <AlertaBanner
                    alerta={self.alerta.clone()}
                    al_cerrar={link.callback(|_| Msg::CerrarAlerta)}
                />

                <div class="campo">
                    <label for="usuario-nombre">{"Nombre *"}</label>
                    <input
                        id="usuario-nombre"
                        value={self.nombre.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::CambiarNombre(valor_de_input(&e)))}
                    />
                </div>

                <div class="campo">
                    <label for="usuario-correo">{"Correo *"}</label>
                    <input
                        id="usuario-correo"
                        type="email"
                        value={self.correo.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::CambiarCorreo(valor_de_input(&e)))}
                        onblur={link.callback(|_| Msg::ValidarCorreo)}
                    />
                    {
                        if self.validacion_correo.validando {
                            html! { <small class="ayuda">{"Verificando…"}</small> }
                        } else if let Some(mensaje) = &self.validacion_correo.mensaje {
                            html! { <small class="error-campo">{ mensaje }</small> }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div class="campo">
                    <label for="usuario-rol">{"Rol *"}</label>
                    <select
                        id="usuario-rol"
                        onchange={link.callback(|e: Event| Msg::CambiarRol(valor_de_select(&e)))}
                    >
                        <option value="" selected={self.rol_id.is_empty()}>{"— Seleccione —"}</option>
                        {
                            for self.roles.iter().map(|rol| html! {
                                <option
                                    value={rol.id.to_string()}
                                    selected={self.rol_id == rol.id.to_string()}
                                >
                                    { &rol.nombre }
                                </option>
                            })
                        }
                    </select>
                </div>

                {
                    if !editando {
                        html! {
                            <p class="ayuda">
                                {"Se generará una contraseña temporal y se enviará al correo indicado."}
                            </p>
                        }
                    } else {
                        html! {}
                    }
                }

                <div class="campo campo-casilla">
                    <label>
                        <input
                            type="checkbox"
                            checked={self.activo}
                            oninput={link.callback(|e: InputEvent| Msg::CambiarActivo(marcado(&e)))}
                        />
                        {" Activo"}
                    </label>
                </div>

                <div class="formulario-acciones">
                    <button
                        type="button"
                        class="boton-secundario"
                        onclick={ctx.props().al_cancelar.clone()}
                    >
                        {"Cancelar"}
                    </button>
                    <button
                        type="submit"
                        class="boton-primario"
                        disabled={self.cargando || self.validacion_correo.bloquea_envio()}
                    >
                        { if self.cargando { "Guardando…" } else { "Guardar" } }
                    </button>
                </div>
            </form>
        }
    }
}
