use common::api::ErrorApi;
use common::model::cliente::Cliente;
use common::requests::{ConsultaUnicidad, DatosCliente, VeredictoUnicidad};
use common::validacion::{
    campo_opcional, entero_no_negativo, es_correo_valido, es_telefono_valido, numero_no_negativo,
};
use std::collections::HashSet;
use web_sys::SubmitEvent;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::compartidos::alerta::{Alerta, AlertaBanner};
use crate::components::compartidos::formulario::{EstadoValidacion, marcado, valor_de_input};
use crate::services::clientes;

#[derive(Properties, PartialEq)]
pub struct FormularioProps {
    /// `None` crea; `Some` edita.
    pub cliente: Option<Cliente>,
    pub al_guardar: Callback<String>,
    pub al_cancelar: Callback<MouseEvent>,
}

pub enum Msg {
    CambiarCodigo(String),
    ValidarCodigo,
    CodigoVerificado(Result<VeredictoUnicidad, ErrorApi>),
    CambiarNombre(String),
    CambiarNit(String),
    CambiarDireccion(String),
    CambiarTelefono1(String),
    CambiarTelefono2(String),
    CambiarCorreo(String),
    CambiarLimite(String),
    CambiarDias(String),
    CambiarActivo(bool),
    Tocar(&'static str),
    ValidarNit,
    NitVerificado(Result<VeredictoUnicidad, ErrorApi>),
    Enviar,
    Guardado(String),
    Fallo(ErrorApi),
    CerrarAlerta,
}

pub struct ClientesFormulario {
    codigo: String,
    validacion_codigo: EstadoValidacion,
    nombre: String,
    nit: String,
    direccion: String,
    telefono1: String,
    telefono2: String,
    correo: String,
    limite: String,
    dias: String,
    activo: bool,
    tocados: HashSet<&'static str>,
    validacion_nit: EstadoValidacion,
    cargando: bool,
    alerta: Option<Alerta>,
}

impl Component for ClientesFormulario {
    type Message = Msg;
    type Properties = FormularioProps;

    fn create(ctx: &Context<Self>) -> Self {
        match &ctx.props().cliente {
            Some(c) => ClientesFormulario {
                codigo: c.codigo.clone(),
                validacion_codigo: EstadoValidacion::default(),
                nombre: c.nombre.clone(),
                nit: c.nit.clone().unwrap_or_default(),
                direccion: c.direccion.clone().unwrap_or_default(),
                telefono1: c.telefono1.clone().unwrap_or_default(),
                telefono2: c.telefono2.clone().unwrap_or_default(),
                correo: c.correo_electronico.clone().unwrap_or_default(),
                limite: c.limite_credito.to_string(),
                dias: c.dias_credito.to_string(),
                activo: c.activo,
                tocados: HashSet::new(),
                validacion_nit: EstadoValidacion::default(),
                cargando: false,
                alerta: None,
            },
            None => ClientesFormulario {
                codigo: String::new(),
                validacion_codigo: EstadoValidacion::default(),
                nombre: String::new(),
                nit: String::new(),
                direccion: String::new(),
                telefono1: String::new(),
                telefono2: String::new(),
                correo: String::new(),
                limite: String::new(),
                dias: String::new(),
                activo: true,
                tocados: HashSet::new(),
                validacion_nit: EstadoValidacion::default(),
                cargando: false,
                alerta: None,
            },
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CambiarCodigo(v) => {
                self.codigo = v;
                self.validacion_codigo = EstadoValidacion::default();
                true
            }
            Msg::ValidarCodigo => {
                // el código solo se edita en modo edición; al crear lo
                // asigna el servidor y el campo está deshabilitado
                if ctx.props().cliente.is_none() {
                    return false;
                }
                let valor = self.codigo.trim().to_string();
                if valor.is_empty() {
                    self.validacion_codigo =
                        EstadoValidacion::conflicto("El código no puede quedar vacío.");
                    return true;
                }
                self.validacion_codigo = EstadoValidacion::verificando();
                let consulta = ConsultaUnicidad {
                    valor,
                    excluir_id: ctx.props().cliente.as_ref().map(|c| c.id),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    let resultado = clientes::validar_codigo(&consulta).await;
                    link.send_message(Msg::CodigoVerificado(resultado));
                });
                true
            }
            Msg::CodigoVerificado(resultado) => {
                self.validacion_codigo = match resultado {
                    Ok(v) if v.existe => {
                        EstadoValidacion::conflicto("Ya existe un cliente con ese código.")
                    }
                    Ok(_) => EstadoValidacion::disponible(),
                    Err(e) => {
                        EstadoValidacion::conflicto(format!("No se pudo validar el código: {e}"))
                    }
                };
                true
            }
            Msg::CambiarNombre(v) => {
                self.nombre = v;
                true
            }
            Msg::CambiarNit(v) => {
                self.nit = v;
                // el veredicto anterior ya no aplica al valor nuevo
                self.validacion_nit = EstadoValidacion::default();
                true
            }
            Msg::CambiarDireccion(v) => {
                self.direccion = v;
                true
            }
            Msg::CambiarTelefono1(v) => {
                self.telefono1 = v;
                true
            }
            Msg::CambiarTelefono2(v) => {
                self.telefono2 = v;
                true
            }
            Msg::CambiarCorreo(v) => {
                self.correo = v;
                true
            }
            Msg::CambiarLimite(v) => {
                self.limite = v;
                true
            }
            Msg::CambiarDias(v) => {
                self.dias = v;
                true
            }
            Msg::CambiarActivo(v) => {
                self.activo = v;
                true
            }
            Msg::Tocar(campo) => {
                self.tocados.insert(campo);
                true
            }
            Msg::ValidarNit => {
                let valor = self.nit.trim().to_string();
                if valor.is_empty() {
                    self.validacion_nit = EstadoValidacion::default();
                    return true;
                }
                self.validacion_nit = EstadoValidacion::verificando();
                let consulta = ConsultaUnicidad {
                    valor,
                    excluir_id: ctx.props().cliente.as_ref().map(|c| c.id),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    let resultado = clientes::validar_nit(&consulta).await;
                    link.send_message(Msg::NitVerificado(resultado));
                });
                true
            }
            Msg::NitVerificado(resultado) => {
                self.validacion_nit = match resultado {
                    Ok(v) if v.existe => {
                        EstadoValidacion::conflicto("Ya existe un cliente con ese NIT.")
                    }
                    Ok(_) => EstadoValidacion::disponible(),
                    Err(e) => EstadoValidacion::conflicto(format!(
                        "No se pudo validar el NIT: {e}"
                    )),
                };
                true
            }
            Msg::Enviar => {
                if !self.puede_enviar() {
                    self.tocados.extend(["nombre", "telefono1", "telefono2", "correo", "limite", "dias"]);
                    return true;
                }
                self.cargando = true;
                self.alerta = None;
                let datos = self.armar_datos(ctx);
                let id = ctx.props().cliente.as_ref().map(|c| c.id);
                let link = ctx.link().clone();
                spawn_local(async move {
                    let resultado = match id {
                        Some(id) => clientes::actualizar(id, &datos).await,
                        None => clientes::crear(&datos).await,
                    };
                    match resultado {
                        Ok(_) => link.send_message(Msg::Guardado(match id {
                            Some(_) => "Cliente actualizado correctamente.".to_string(),
                            None => "Cliente creado correctamente.".to_string(),
                        })),
                        Err(e) => link.send_message(Msg::Fallo(e)),
                    }
                });
                true
            }
            Msg::Guardado(mensaje) => {
                self.cargando = false;
                self.alerta = Some(Alerta::exito(mensaje.clone()));
                // esta vista regresa al listado con una pausa breve para
                // que la confirmación alcance a leerse
                let al_guardar = ctx.props().al_guardar.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(1500).await;
                    al_guardar.emit(mensaje);
                });
                true
            }
            Msg::Fallo(e) => {
                // el formulario conserva lo escrito para corregir
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
        let editando = ctx.props().cliente.is_some();

        html! {
            <form
                class="formulario"
                onsubmit={link.callback(|e: SubmitEvent| { e.prevent_default(); Msg::Enviar })}
            >
                <h3>{ if editando { "Editar cliente" } else { "Nuevo cliente" } }</h3>
                <AlertaBanner
                    alerta={self.alerta.clone()}
                    al_cerrar={link.callback(|_| Msg::CerrarAlerta)}
                />

                <div class="campo">
                    <label for="cliente-codigo">{"Código"}</label>
                    <input
                        id="cliente-codigo"
                        value={self.codigo.clone()}
                        placeholder={ if editando { "" } else { "Asignado por el sistema" } }
                        disabled={!editando}
                        oninput={link.callback(|e: InputEvent| Msg::CambiarCodigo(valor_de_input(&e)))}
                        onblur={link.callback(|_| Msg::ValidarCodigo)}
                    />
                    {
                        if self.validacion_codigo.validando {
                            html! { <small class="ayuda">{"Verificando…"}</small> }
                        } else if let Some(mensaje) = &self.validacion_codigo.mensaje {
                            html! { <small class="error-campo">{ mensaje }</small> }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div class="campo">
                    <label for="cliente-nombre">{"Nombre *"}</label>
                    <input
                        id="cliente-nombre"
                        value={self.nombre.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::CambiarNombre(valor_de_input(&e)))}
                        onblur={link.callback(|_| Msg::Tocar("nombre"))}
                    />
                    { self.error_campo("nombre", self.error_nombre()) }
                </div>

                <div class="campo">
                    <label for="cliente-nit">{"NIT"}</label>
                    <input
                        id="cliente-nit"
                        value={self.nit.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::CambiarNit(valor_de_input(&e)))}
                        onblur={link.batch_callback(|_| vec![Msg::Tocar("nit"), Msg::ValidarNit])}
                    />
                    {
                        if self.validacion_nit.validando {
                            html! { <small class="ayuda">{"Verificando…"}</small> }
                        } else if let Some(mensaje) = &self.validacion_nit.mensaje {
                            html! { <small class="error-campo">{ mensaje }</small> }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div class="campo">
                    <label for="cliente-direccion">{"Dirección"}</label>
                    <input
                        id="cliente-direccion"
                        value={self.direccion.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::CambiarDireccion(valor_de_input(&e)))}
                    />
                </div>

                <div class="campo-doble">
                    <div class="campo">
                        <label for="cliente-telefono1">{"Teléfono 1"}</label>
                        <input
                            id="cliente-telefono1"
                            value={self.telefono1.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::CambiarTelefono1(valor_de_input(&e)))}
                            onblur={link.callback(|_| Msg::Tocar("telefono1"))}
                        />
                        { self.error_campo("telefono1", self.error_telefono(&self.telefono1)) }
                    </div>
                    <div class="campo">
                        <label for="cliente-telefono2">{"Teléfono 2"}</label>
                        <input
                            id="cliente-telefono2"
                            value={self.telefono2.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::CambiarTelefono2(valor_de_input(&e)))}
                            onblur={link.callback(|_| Msg::Tocar("telefono2"))}
                        />
                        { self.error_campo("telefono2", self.error_telefono(&self.telefono2)) }
                    </div>
                </div>

                <div class="campo">
                    <label for="cliente-correo">{"Correo electrónico"}</label>
                    <input
                        id="cliente-correo"
                        type="email"
                        value={self.correo.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::CambiarCorreo(valor_de_input(&e)))}
                        onblur={link.callback(|_| Msg::Tocar("correo"))}
                    />
                    { self.error_campo("correo", self.error_correo()) }
                </div>

                <div class="campo-doble">
                    <div class="campo">
                        <label for="cliente-limite">{"Límite de crédito"}</label>
                        <input
                            id="cliente-limite"
                            inputmode="decimal"
                            value={self.limite.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::CambiarLimite(valor_de_input(&e)))}
                            onblur={link.callback(|_| Msg::Tocar("limite"))}
                        />
                        { self.error_campo("limite", self.error_limite()) }
                    </div>
                    <div class="campo">
                        <label for="cliente-dias">{"Días de crédito"}</label>
                        <input
                            id="cliente-dias"
                            inputmode="numeric"
                            value={self.dias.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::CambiarDias(valor_de_input(&e)))}
                            onblur={link.callback(|_| Msg::Tocar("dias"))}
                        />
                        { self.error_campo("dias", self.error_dias()) }
                    </div>
                </div>

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
                        disabled={self.cargando || !self.puede_enviar()}
                    >
                        { if self.cargando { "Guardando…" } else { "Guardar" } }
                    </button>
                </div>
            </form>
        }
    }
}

impl ClientesFormulario {
    fn error_nombre(&self) -> Option<String> {
        if self.nombre.trim().is_empty() {
            Some("El nombre es obligatorio.".to_string())
        } else {
            None
        }
    }

    fn error_telefono(&self, valor: &str) -> Option<String> {
        let valor = valor.trim();
        if !valor.is_empty() && !es_telefono_valido(valor) {
            Some("Solo dígitos, espacios, guiones y paréntesis.".to_string())
        } else {
            None
        }
    }

    fn error_correo(&self) -> Option<String> {
        let valor = self.correo.trim();
        if !valor.is_empty() && !es_correo_valido(valor) {
            Some("El correo no tiene un formato válido.".to_string())
        } else {
            None
        }
    }

    fn error_limite(&self) -> Option<String> {
        let valor = self.limite.trim();
        if !valor.is_empty() && numero_no_negativo(valor).is_none() {
            Some("Debe ser un número no negativo.".to_string())
        } else {
            None
        }
    }

    fn error_dias(&self) -> Option<String> {
        let valor = self.dias.trim();
        if !valor.is_empty() && entero_no_negativo(valor).is_none() {
            Some("Debe ser un entero no negativo.".to_string())
        } else {
            None
        }
    }

    /// Los errores solo se muestran en campos ya tocados; el botón de
    /// guardar sí los considera todos.
    fn error_campo(&self, campo: &'static str, error: Option<String>) -> Html {
        match error {
            Some(mensaje) if self.tocados.contains(campo) => {
                html! { <small class="error-campo">{ mensaje }</small> }
            }
            _ => html! {},
        }
    }

    fn puede_enviar(&self) -> bool {
        self.error_nombre().is_none()
            && self.error_telefono(&self.telefono1).is_none()
            && self.error_telefono(&self.telefono2).is_none()
            && self.error_correo().is_none()
            && self.error_limite().is_none()
            && self.error_dias().is_none()
            && !self.validacion_codigo.bloquea_envio()
            && !self.validacion_nit.bloquea_envio()
    }

    fn armar_datos(&self, ctx: &Context<Self>) -> DatosCliente {
        DatosCliente {
            id: ctx.props().cliente.as_ref().map(|c| c.id),
            codigo: ctx
                .props()
                .cliente
                .as_ref()
                .and_then(|_| campo_opcional(&self.codigo)),
            nombre: self.nombre.trim().to_string(),
            nit: campo_opcional(&self.nit),
            direccion: campo_opcional(&self.direccion),
            telefono1: campo_opcional(&self.telefono1),
            telefono2: campo_opcional(&self.telefono2),
            correo_electronico: campo_opcional(&self.correo),
            limite_credito: numero_no_negativo(&self.limite).unwrap_or(0.0),
            dias_credito: entero_no_negativo(&self.dias).unwrap_or(0),
            activo: self.activo,
        }
    }
}
