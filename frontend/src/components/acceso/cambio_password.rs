use common::api::ErrorApi;
use common::model::usuario::Usuario;
use common::requests::ReinicioPassword;
use web_sys::SubmitEvent;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::compartidos::alerta::{Alerta, AlertaBanner};
use crate::components::compartidos::formulario::valor_de_input;
use crate::services::auth;

const LARGO_MINIMO: usize = 8;

#[derive(Properties, PartialEq)]
pub struct CambioPasswordProps {
    pub usuario: Usuario,
    pub al_completar: Callback<()>,
}

pub enum Msg {
    CambiarNueva(String),
    CambiarConfirmacion(String),
    Enviar,
    Completado(String),
    Fallo(ErrorApi),
    CerrarAlerta,
}

/// Cambio forzado de primer ingreso: el usuario llegó con la contraseña
/// temporal del correo y no puede entrar al panel hasta reemplazarla.
pub struct CambioPassword {
    nueva: String,
    confirmacion: String,
    cargando: bool,
    alerta: Option<Alerta>,
}

impl Component for CambioPassword {
    type Message = Msg;
    type Properties = CambioPasswordProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CambioPassword {
            nueva: String::new(),
            confirmacion: String::new(),
            cargando: false,
            alerta: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CambiarNueva(valor) => {
                self.nueva = valor;
                true
            }
            Msg::CambiarConfirmacion(valor) => {
                self.confirmacion = valor;
                true
            }
            Msg::Enviar => {
                if self.cargando {
                    return false;
                }
                if self.nueva.len() < LARGO_MINIMO {
                    self.alerta = Some(Alerta::aviso(format!(
                        "La contraseña debe tener al menos {LARGO_MINIMO} caracteres."
                    )));
                    return true;
                }
                if self.nueva != self.confirmacion {
                    self.alerta = Some(Alerta::aviso("Las contraseñas no coinciden."));
                    return true;
                }
                self.cargando = true;
                self.alerta = None;
                let datos = ReinicioPassword {
                    correo: ctx.props().usuario.correo.clone(),
                    password_nueva: Some(self.nueva.clone()),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    match auth::reiniciar_password(&datos).await {
                        Ok(mensaje) => link.send_message(Msg::Completado(mensaje)),
                        Err(e) => link.send_message(Msg::Fallo(e)),
                    }
                });
                true
            }
            Msg::Completado(_) => {
                self.cargando = false;
                ctx.props().al_completar.emit(());
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
            <div class="pantalla-login">
                <form
                    class="tarjeta-login"
                    onsubmit={link.callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Enviar
                    })}
                >
                    <h1>{"Cambio de contraseña"}</h1>
                    <p>
                        { format!(
                            "Hola {}, debes reemplazar la contraseña temporal antes de continuar.",
                            ctx.props().usuario.nombre
                        ) }
                    </p>
                    <AlertaBanner
                        alerta={self.alerta.clone()}
                        al_cerrar={link.callback(|_| Msg::CerrarAlerta)}
                    />
                    <label for="password-nueva">{"Contraseña nueva"}</label>
                    <input
                        id="password-nueva"
                        type="password"
                        value={self.nueva.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::CambiarNueva(valor_de_input(&e)))}
                    />
                    <label for="password-confirmacion">{"Confirmar contraseña"}</label>
                    <input
                        id="password-confirmacion"
                        type="password"
                        value={self.confirmacion.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::CambiarConfirmacion(valor_de_input(&e)))}
                    />
                    <button type="submit" disabled={self.cargando}>
                        { if self.cargando { "Guardando…" } else { "Guardar y continuar" } }
                    </button>
                </form>
            </div>
        }
    }
}
