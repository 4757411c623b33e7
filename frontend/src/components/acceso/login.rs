use common::api::ErrorApi;
use common::model::usuario::Usuario;
use common::requests::{CredencialesLogin, SesionIniciada};
use web_sys::SubmitEvent;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::compartidos::alerta::{Alerta, AlertaBanner};
use crate::components::compartidos::formulario::valor_de_input;
use crate::services::{auth, sesion};

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    /// Sesión lista: token guardado y sin cambio de contraseña pendiente.
    pub al_ingresar: Callback<Usuario>,
    /// El backend exige cambiar la contraseña temporal antes de entrar.
    pub al_cambio_requerido: Callback<Usuario>,
}

pub enum Msg {
    CambiarCorreo(String),
    CambiarPassword(String),
    Enviar,
    Ingresado(SesionIniciada),
    Fallo(ErrorApi),
    CerrarAlerta,
}

pub struct Login {
    correo: String,
    password: String,
    cargando: bool,
    alerta: Option<Alerta>,
}

impl Component for Login {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Login {
            correo: String::new(),
            password: String::new(),
            cargando: false,
            alerta: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CambiarCorreo(valor) => {
                self.correo = valor;
                true
            }
            Msg::CambiarPassword(valor) => {
                self.password = valor;
                true
            }
            Msg::Enviar => {
                if self.cargando {
                    return false;
                }
                let correo = self.correo.trim().to_string();
                if correo.is_empty() || self.password.is_empty() {
                    self.alerta = Some(Alerta::aviso("Ingrese correo y contraseña."));
                    return true;
                }
                self.cargando = true;
                self.alerta = None;
                let credenciales = CredencialesLogin {
                    correo,
                    password: self.password.clone(),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    match auth::login(&credenciales).await {
                        Ok(s) => link.send_message(Msg::Ingresado(s)),
                        Err(e) => link.send_message(Msg::Fallo(e)),
                    }
                });
                true
            }
            Msg::Ingresado(s) => {
                self.cargando = false;
                sesion::guardar_token(&s.token);
                if s.usuario.forzar_cambio_password {
                    ctx.props().al_cambio_requerido.emit(s.usuario);
                } else {
                    ctx.props().al_ingresar.emit(s.usuario);
                }
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
                    <h1>{"Plastihogar"}</h1>
                    <AlertaBanner
                        alerta={self.alerta.clone()}
                        al_cerrar={link.callback(|_| Msg::CerrarAlerta)}
                    />
                    <label for="login-correo">{"Correo"}</label>
                    <input
                        id="login-correo"
                        type="email"
                        value={self.correo.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::CambiarCorreo(valor_de_input(&e)))}
                    />
                    <label for="login-password">{"Contraseña"}</label>
                    <input
                        id="login-password"
                        type="password"
                        value={self.password.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::CambiarPassword(valor_de_input(&e)))}
                    />
                    <button type="submit" disabled={self.cargando}>
                        { if self.cargando { "Ingresando…" } else { "Ingresar" } }
                    </button>
                </form>
            </div>
        }
    }
}
