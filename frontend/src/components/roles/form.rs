use common::api::ErrorApi;
use common::model::rol::Rol;
use common::requests::DatosRol;
use common::validacion::{campo_opcional, texto_requerido};
use web_sys::SubmitEvent;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::compartidos::alerta::{Alerta, AlertaBanner};
use crate::components::compartidos::formulario::valor_de_input;
use crate::services::roles;

#[derive(Properties, PartialEq)]
pub struct FormularioProps {
    pub rol: Option<Rol>,
    pub al_guardar: Callback<String>,
    pub al_cancelar: Callback<MouseEvent>,
}

pub enum Msg {
    CambiarNombre(String),
    CambiarDescripcion(String),
    Enviar,
    Guardado(String),
    Fallo(ErrorApi),
    CerrarAlerta,
}

pub struct RolesFormulario {
    nombre: String,
    descripcion: String,
    cargando: bool,
    alerta: Option<Alerta>,
}

impl Component for RolesFormulario {
    type Message = Msg;
    type Properties = FormularioProps;

    fn create(ctx: &Context<Self>) -> Self {
        let r = ctx.props().rol.as_ref();
        RolesFormulario {
            nombre: r.map(|r| r.nombre.clone()).unwrap_or_default(),
            descripcion: r.and_then(|r| r.descripcion.clone()).unwrap_or_default(),
            cargando: false,
            alerta: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CambiarNombre(v) => {
                self.nombre = v;
                true
            }
            Msg::CambiarDescripcion(v) => {
                self.descripcion = v;
                true
            }
            Msg::Enviar => {
                let Some(nombre) = texto_requerido(&self.nombre) else {
                    self.alerta = Some(Alerta::aviso("El nombre es obligatorio."));
                    return true;
                };
                self.cargando = true;
                self.alerta = None;
                let datos = DatosRol {
                    id: ctx.props().rol.as_ref().map(|r| r.id),
                    nombre,
                    descripcion: campo_opcional(&self.descripcion),
                };
                let id = datos.id;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let resultado = match id {
                        Some(id) => roles::actualizar(id, &datos).await,
                        None => roles::crear(&datos).await,
                    };
                    match resultado {
                        Ok(_) => link.send_message(Msg::Guardado(match id {
                            Some(_) => "Rol actualizado correctamente.".to_string(),
                            None => "Rol creado correctamente.".to_string(),
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
        let editando = ctx.props().rol.is_some();
        html! {
            <form
                class="formulario"
                onsubmit={link.callback(|e: SubmitEvent| { e.prevent_default(); Msg::Enviar })}
            >
                <h3>{ if editando { "Editar rol" } else { "Nuevo rol" } }</h3>
                <AlertaBanner
                    alerta={self.alerta.clone()}
                    al_cerrar={link.callback(|_| Msg::CerrarAlerta)}
                />

                <div class="campo">
                    <label for="rol-nombre">{"Nombre *"}</label>
                    <input
                        id="rol-nombre"
                        value={self.nombre.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::CambiarNombre(valor_de_input(&e)))}
                    />
                </div>

                <div class="campo">
                    <label for="rol-descripcion">{"Descripción"}</label>
                    <input
                        id="rol-descripcion"
                        value={self.descripcion.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::CambiarDescripcion(valor_de_input(&e)))}
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
                        { if self.cargando { "Guardando…" } else { "Guardar" } }
                    </button>
                </div>
            </form>
        }
    }
}
