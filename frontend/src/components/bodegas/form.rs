use common::api::ErrorApi;
use common::model::bodega::Bodega;
use common::requests::{ConsultaUnicidad, DatosBodega, VeredictoUnicidad};
use common::validacion::{campo_opcional, numero_no_negativo, texto_requerido};
use web_sys::SubmitEvent;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::compartidos::alerta::{Alerta, AlertaBanner};
use crate::components::compartidos::formulario::{EstadoValidacion, marcado, valor_de_input};
use crate::services::bodegas;

#[derive(Properties, PartialEq)]
pub struct FormularioProps {
    pub bodega: Option<Bodega>,
    pub al_guardar: Callback<String>,
    pub al_cancelar: Callback<MouseEvent>,
}

pub enum Msg {
    CambiarCodigo(String),
    ValidarCodigo,
    CodigoVerificado(Result<VeredictoUnicidad, ErrorApi>),
    CambiarNombre(String),
    CambiarDireccion(String),
    CambiarResponsable(String),
    CambiarCapacidad(String),
    CambiarActiva(bool),
    Enviar,
    Guardado(String),
    Fallo(ErrorApi),
    CerrarAlerta,
}

/// A diferencia de clientes y productos, el código de bodega lo escribe el
/// usuario, así que se edita en ambos modos y se verifica su unicidad al
/// salir del campo.
pub struct BodegasFormulario {
    codigo: String,
    validacion_codigo: EstadoValidacion,
    nombre: String,
    direccion: String,
    responsable: String,
    capacidad: String,
    activa: bool,
    cargando: bool,
    alerta: Option<Alerta>,
}

impl Component for BodegasFormulario {
    type Message = Msg;
    type Properties = FormularioProps;

    fn create(ctx: &Context<Self>) -> Self {
        let b = ctx.props().bodega.as_ref();
        BodegasFormulario {
            codigo: b.map(|b| b.codigo.clone()).unwrap_or_default(),
            validacion_codigo: EstadoValidacion::default(),
            nombre: b.map(|b| b.nombre.clone()).unwrap_or_default(),
            direccion: b.and_then(|b| b.direccion.clone()).unwrap_or_default(),
            responsable: b.and_then(|b| b.responsable.clone()).unwrap_or_default(),
            capacidad: b
                .and_then(|b| b.capacidad.map(|c| c.to_string()))
                .unwrap_or_default(),
            activa: b.map(|b| b.activa).unwrap_or(true),
            cargando: false,
            alerta: None,
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
                let valor = self.codigo.trim().to_string();
                if valor.is_empty() {
                    return false;
                }
                self.validacion_codigo = EstadoValidacion::verificando();
                let consulta = ConsultaUnicidad {
                    valor,
                    excluir_id: ctx.props().bodega.as_ref().map(|b| b.id),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    let resultado = bodegas::validar_codigo(&consulta).await;
                    link.send_message(Msg::CodigoVerificado(resultado));
                });
                true
            }
            Msg::CodigoVerificado(resultado) => {
                self.validacion_codigo = match resultado {
                    Ok(v) if v.existe => {
                        EstadoValidacion::conflicto("Ya existe una bodega con ese código.")
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
            Msg::CambiarDireccion(v) => {
                self.direccion = v;
                true
            }
            Msg::CambiarResponsable(v) => {
                self.responsable = v;
                true
            }
            Msg::CambiarCapacidad(v) => {
                self.capacidad = v;
                true
            }
            Msg::CambiarActiva(v) => {
                self.activa = v;
                true
            }
            Msg::Enviar => {
                let (Some(codigo), Some(nombre)) =
                    (texto_requerido(&self.codigo), texto_requerido(&self.nombre))
                else {
                    self.alerta = Some(Alerta::aviso("Código y nombre son obligatorios."));
                    return true;
                };
                let capacidad = if self.capacidad.trim().is_empty() {
                    None
                } else {
                    match numero_no_negativo(&self.capacidad) {
                        Some(c) => Some(c),
                        None => {
                            self.alerta = Some(Alerta::aviso(
                                "La capacidad debe ser un número no negativo.",
                            ));
                            return true;
                        }
                    }
                };
                self.cargando = true;
                self.alerta = None;
                let datos = DatosBodega {
                    id: ctx.props().bodega.as_ref().map(|b| b.id),
                    codigo,
                    nombre,
                    direccion: campo_opcional(&self.direccion),
                    responsable: campo_opcional(&self.responsable),
                    capacidad,
                    activa: self.activa,
                };
                let id = datos.id;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let resultado = match id {
                        Some(id) => bodegas::actualizar(id, &datos).await,
                        None => bodegas::crear(&datos).await,
                    };
                    match resultado {
                        Ok(_) => link.send_message(Msg::Guardado(match id {
                            Some(_) => "Bodega actualizada correctamente.".to_string(),
                            None => "Bodega creada correctamente.".to_string(),
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
        let editando = ctx.props().bodega.is_some();
        html! {
            <form
                class="formulario"
                onsubmit={link.callback(|e: SubmitEvent| { e.prevent_default(); Msg::Enviar })}
            >
                <h3>{ if editando { "Editar bodega" } else { "Nueva bodega" } }</h3>
                <AlertaBanner
                    alerta={self.alerta.clone()}
                    al_cerrar={link.callback(|_| Msg::CerrarAlerta)}
                />

                <div class="campo-doble">
                    <div class="campo">
                        <label for="bodega-codigo">{"Código *"}</label>
                        <input
                            id="bodega-codigo"
                            value={self.codigo.clone()}
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
                        <label for="bodega-nombre">{"Nombre *"}</label>
                        <input
                            id="bodega-nombre"
                            value={self.nombre.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::CambiarNombre(valor_de_input(&e)))}
                        />
                    </div>
                </div>

                <div class="campo">
                    <label for="bodega-direccion">{"Dirección"}</label>
                    <input
                        id="bodega-direccion"
                        value={self.direccion.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::CambiarDireccion(valor_de_input(&e)))}
                    />
                </div>

                <div class="campo-doble">
                    <div class="campo">
                        <label for="bodega-responsable">{"Responsable"}</label>
                        <input
                            id="bodega-responsable"
                            value={self.responsable.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::CambiarResponsable(valor_de_input(&e)))}
                        />
                    </div>
                    <div class="campo">
                        <label for="bodega-capacidad">{"Capacidad"}</label>
                        <input
                            id="bodega-capacidad"
                            inputmode="decimal"
                            value={self.capacidad.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::CambiarCapacidad(valor_de_input(&e)))}
                        />
                    </div>
                </div>

                <div class="campo campo-casilla">
                    <label>
                        <input
                            type="checkbox"
                            checked={self.activa}
                            oninput={link.callback(|e: InputEvent| Msg::CambiarActiva(marcado(&e)))}
                        />
                        {" Activa"}
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
                        disabled={self.cargando || self.validacion_codigo.bloquea_envio()}
                    >
                        { if self.cargando { "Guardando…" } else { "Guardar" } }
                    </button>
                </div>
            </form>
        }
    }
}
