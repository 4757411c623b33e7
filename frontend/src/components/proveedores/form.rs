use common::api::ErrorApi;
use common::model::proveedor::Proveedor;
use common::requests::{ConsultaUnicidad, DatosProveedor, VeredictoUnicidad};
use common::validacion::{campo_opcional, es_correo_valido, es_telefono_valido, texto_requerido};
use web_sys::SubmitEvent;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::compartidos::alerta::{Alerta, AlertaBanner};
use crate::components::compartidos::formulario::{EstadoValidacion, marcado, valor_de_input};
use crate::services::proveedores;

#[derive(Properties, PartialEq)]
pub struct FormularioProps {
    pub proveedor: Option<Proveedor>,
    pub al_guardar: Callback<String>,
    pub al_cancelar: Callback<MouseEvent>,
}

pub enum Msg {
    CambiarNombre(String),
    ValidarNombre,
    NombreVerificado(Result<VeredictoUnicidad, ErrorApi>),
    CambiarContacto(String),
    CambiarTelefono(String),
    CambiarCorreo(String),
    CambiarNit(String),
    CambiarDireccion(String),
    CambiarActivo(bool),
    Enviar,
    Guardado(String),
    Fallo(ErrorApi),
    CerrarAlerta,
}

/// El nombre del proveedor es único en el sistema; se verifica contra el
/// backend al salir del campo.
pub struct ProveedoresFormulario {
    nombre: String,
    validacion_nombre: EstadoValidacion,
    contacto: String,
    telefono: String,
    correo: String,
    nit: String,
    direccion: String,
    activo: bool,
    cargando: bool,
    alerta: Option<Alerta>,
}

impl Component for ProveedoresFormulario {
    type Message = Msg;
    type Properties = FormularioProps;

    fn create(ctx: &Context<Self>) -> Self {
        let p = ctx.props().proveedor.as_ref();
        ProveedoresFormulario {
            nombre: p.map(|p| p.nombre.clone()).unwrap_or_default(),
            validacion_nombre: EstadoValidacion::default(),
            contacto: p.and_then(|p| p.contacto.clone()).unwrap_or_default(),
            telefono: p.and_then(|p| p.telefono.clone()).unwrap_or_default(),
            correo: p.and_then(|p| p.correo.clone()).unwrap_or_default(),
            nit: p.and_then(|p| p.nit.clone()).unwrap_or_default(),
            direccion: p.and_then(|p| p.direccion.clone()).unwrap_or_default(),
            activo: p.map(|p| p.activo).unwrap_or(true),
            cargando: false,
            alerta: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CambiarNombre(v) => {
                self.nombre = v;
                self.validacion_nombre = EstadoValidacion::default();
                true
            }
            Msg::ValidarNombre => {
                let valor = self.nombre.trim().to_string();
                if valor.is_empty() {
                    return false;
                }
                self.validacion_nombre = EstadoValidacion::verificando();
                let consulta = ConsultaUnicidad {
                    valor,
                    excluir_id: ctx.props().proveedor.as_ref().map(|p| p.id_proveedor),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    let resultado = proveedores::validar_nombre(&consulta).await;
                    link.send_message(Msg::NombreVerificado(resultado));
                });
                true
            }
            Msg::NombreVerificado(resultado) => {
                self.validacion_nombre = match resultado {
                    Ok(v) if v.existe => {
                        EstadoValidacion::conflicto("Ya existe un proveedor con ese nombre.")
                    }
                    Ok(_) => EstadoValidacion::disponible(),
                    Err(e) => {
                        EstadoValidacion::conflicto(format!("No se pudo validar el nombre: {e}"))
                    }
                };
                true
            }
            Msg::CambiarContacto(v) => {
                self.contacto = v;
                true
            }
            Msg::CambiarTelefono(v) => {
                self.telefono = v;
                true
            }
            Msg::CambiarCorreo(v) => {
                self.correo = v;
                true
            }
            Msg::CambiarNit(v) => {
                self.nit = v;
                true
            }
            Msg::CambiarDireccion(v) => {
                self.direccion = v;
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
                if !self.telefono.trim().is_empty() && !es_telefono_valido(self.telefono.trim()) {
                    self.alerta = Some(Alerta::aviso("El teléfono no tiene un formato válido."));
                    return true;
                }
                if !self.correo.trim().is_empty() && !es_correo_valido(self.correo.trim()) {
                    self.alerta = Some(Alerta::aviso("El correo no tiene un formato válido."));
                    return true;
                }
                self.cargando = true;
                self.alerta = None;
                let datos = DatosProveedor {
                    id_proveedor: ctx.props().proveedor.as_ref().map(|p| p.id_proveedor),
                    nombre,
                    contacto: campo_opcional(&self.contacto),
                    telefono: campo_opcional(&self.telefono),
                    correo: campo_opcional(&self.correo),
                    nit: campo_opcional(&self.nit),
                    direccion: campo_opcional(&self.direccion),
                    activo: self.activo,
                };
                let id = datos.id_proveedor;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let resultado = match id {
                        Some(id) => proveedores::actualizar(id, &datos).await,
                        None => proveedores::crear(&datos).await,
                    };
                    match resultado {
                        Ok(_) => link.send_message(Msg::Guardado(match id {
                            Some(_) => "Proveedor actualizado correctamente.".to_string(),
                            None => "Proveedor creado correctamente.".to_string(),
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
        let editando = ctx.props().proveedor.is_some();
        html! {
            <form
                class="formulario"
                onsubmit={link.callback(|e: SubmitEvent| { e.prevent_default(); Msg::Enviar })}
            >
                <h3>{ if editando { "Editar proveedor" } else { "Nuevo proveedor" } }</h3>
                <AlertaBanner
                    alerta={self.alerta.clone()}
                    al_cerrar={link.callback(|_| Msg::CerrarAlerta)}
                />

                <div class="campo">
                    <label for="proveedor-nombre">{"Nombre *"}</label>
                    <input
                        id="proveedor-nombre"
                        value={self.nombre.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::CambiarNombre(valor_de_input(&e)))}
                        onblur={link.callback(|_| Msg::ValidarNombre)}
                    />
                    {
                        if self.validacion_nombre.validando {
                            html! { <small class="ayuda">{"Verificando…"}</small> }
                        } else if let Some(mensaje) = &self.validacion_nombre.mensaje {
                            html! { <small class="error-campo">{ mensaje }</small> }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div class="campo">
                    <label for="proveedor-contacto">{"Contacto"}</label>
                    <input
                        id="proveedor-contacto"
                        value={self.contacto.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::CambiarContacto(valor_de_input(&e)))}
                    />
                </div>

                <div class="campo-doble">
                    <div class="campo">
                        <label for="proveedor-telefono">{"Teléfono"}</label>
                        <input
                            id="proveedor-telefono"
                            value={self.telefono.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::CambiarTelefono(valor_de_input(&e)))}
                        />
                    </div>
                    <div class="campo">
                        <label for="proveedor-correo">{"Correo"}</label>
                        <input
                            id="proveedor-correo"
                            type="email"
                            value={self.correo.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::CambiarCorreo(valor_de_input(&e)))}
                        />
                    </div>
                </div>

                <div class="campo-doble">
                    <div class="campo">
                        <label for="proveedor-nit">{"NIT"}</label>
                        <input
                            id="proveedor-nit"
                            value={self.nit.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::CambiarNit(valor_de_input(&e)))}
                        />
                    </div>
                    <div class="campo">
                        <label for="proveedor-direccion">{"Dirección"}</label>
                        <input
                            id="proveedor-direccion"
                            value={self.direccion.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::CambiarDireccion(valor_de_input(&e)))}
                        />
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
                        disabled={self.cargando || self.validacion_nombre.bloquea_envio()}
                    >
                        { if self.cargando { "Guardando…" } else { "Guardar" } }
                    </button>
                </div>
            </form>
        }
    }
}
