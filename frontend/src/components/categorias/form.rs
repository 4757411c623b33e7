use common::api::ErrorApi;
use common::model::categoria::Categoria;
use common::requests::{ConsultaUnicidad, DatosCategoria, VeredictoUnicidad};
use common::validacion::{campo_opcional, es_prefijo_valido, texto_requerido};
use web_sys::SubmitEvent;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::compartidos::alerta::{Alerta, AlertaBanner};
use crate::components::compartidos::formulario::{EstadoValidacion, marcado, valor_de_input};
use crate::services::categorias;

#[derive(Properties, PartialEq)]
pub struct FormularioProps {
    pub categoria: Option<Categoria>,
    pub al_guardar: Callback<String>,
    pub al_cancelar: Callback<MouseEvent>,
}

pub enum Msg {
    CambiarPrefijo(String),
    PrefijoVerificado(Result<VeredictoUnicidad, ErrorApi>),
    CambiarNombre(String),
    CambiarDescripcion(String),
    CambiarActivo(bool),
    Enviar,
    Guardado(String),
    Fallo(ErrorApi),
    CerrarAlerta,
}

/// El prefijo se valida mientras se escribe: en cuanto alcanza las tres
/// letras la unicidad se consulta al backend, sin esperar a salir del
/// campo. El formato (solo mayúsculas, mínimo tres) se comprueba local.
pub struct CategoriasFormulario {
    prefijo: String,
    validacion_prefijo: EstadoValidacion,
    nombre: String,
    descripcion: String,
    activo: bool,
    cargando: bool,
    alerta: Option<Alerta>,
}

impl Component for CategoriasFormulario {
    type Message = Msg;
    type Properties = FormularioProps;

    fn create(ctx: &Context<Self>) -> Self {
        let c = ctx.props().categoria.as_ref();
        CategoriasFormulario {
            prefijo: c.map(|c| c.codigo_prefijo.clone()).unwrap_or_default(),
            validacion_prefijo: EstadoValidacion::default(),
            nombre: c.map(|c| c.nombre.clone()).unwrap_or_default(),
            descripcion: c.and_then(|c| c.descripcion.clone()).unwrap_or_default(),
            activo: c.map(|c| c.activo).unwrap_or(true),
            cargando: false,
            alerta: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CambiarPrefijo(v) => {
                self.prefijo = v;
                let valor = self.prefijo.trim().to_string();
                if valor.len() < 3 {
                    self.validacion_prefijo =
                        EstadoValidacion::conflicto("Mínimo tres letras mayúsculas.");
                } else if !es_prefijo_valido(&valor) {
                    self.validacion_prefijo =
                        EstadoValidacion::conflicto("Solo letras mayúsculas (A-Z).");
                } else {
                    self.validacion_prefijo = EstadoValidacion::verificando();
                    let consulta = ConsultaUnicidad {
                        valor,
                        excluir_id: ctx.props().categoria.as_ref().map(|c| c.id),
                    };
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let resultado = categorias::validar_prefijo(&consulta).await;
                        link.send_message(Msg::PrefijoVerificado(resultado));
                    });
                }
                true
            }
            Msg::PrefijoVerificado(resultado) => {
                // si el usuario siguió escribiendo, este veredicto ya caducó
                if !es_prefijo_valido(self.prefijo.trim()) {
                    return false;
                }
                self.validacion_prefijo = match resultado {
                    Ok(v) if v.existe => {
                        EstadoValidacion::conflicto("Ese prefijo ya está en uso.")
                    }
                    Ok(_) => EstadoValidacion::disponible(),
                    Err(e) => {
                        EstadoValidacion::conflicto(format!("No se pudo validar el prefijo: {e}"))
                    }
                };
                true
            }
            Msg::CambiarNombre(v) => {
                self.nombre = v;
                true
            }
            Msg::CambiarDescripcion(v) => {
                self.descripcion = v;
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
                let prefijo = self.prefijo.trim().to_string();
                if !es_prefijo_valido(&prefijo) {
                    self.alerta = Some(Alerta::aviso(
                        "El prefijo debe tener al menos tres letras mayúsculas.",
                    ));
                    return true;
                }
                self.cargando = true;
                self.alerta = None;
                let datos = DatosCategoria {
                    id: ctx.props().categoria.as_ref().map(|c| c.id),
                    codigo_prefijo: prefijo,
                    nombre,
                    descripcion: campo_opcional(&self.descripcion),
                    activo: self.activo,
                };
                let id = datos.id;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let resultado = match id {
                        Some(id) => categorias::actualizar(id, &datos).await,
                        None => categorias::crear(&datos).await,
                    };
                    match resultado {
                        Ok(_) => link.send_message(Msg::Guardado(match id {
                            Some(_) => "Categoría actualizada correctamente.".to_string(),
                            None => "Categoría creada correctamente.".to_string(),
                        })),
                        Err(e) => link.send_message(Msg::Fallo(e)),
                    }
                });
                true
            }
            Msg::Guardado(mensaje) => {
                self.cargando = false;
                self.alerta = Some(Alerta::exito(mensaje.clone()));
                // igual que el formulario de clientes: pausa breve antes de
                // volver al listado
                let al_guardar = ctx.props().al_guardar.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(1500).await;
                    al_guardar.emit(mensaje);
                });
                true
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
        let editando = ctx.props().categoria.is_some();
        html! {
            <form
                class="formulario"
                onsubmit={link.callback(|e: SubmitEvent| { e.prevent_default(); Msg::Enviar })}
            >
                <h3>{ if editando { "Editar categoría" } else { "Nueva categoría" } }</h3>
                <AlertaBanner
                    alerta={self.alerta.clone()}
                    al_cerrar={link.callback(|_| Msg::CerrarAlerta)}
                />

                <div class="campo">
                    <label for="categoria-prefijo">{"Prefijo de código *"}</label>
                    <input
                        id="categoria-prefijo"
                        maxlength="10"
                        value={self.prefijo.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::CambiarPrefijo(valor_de_input(&e)))}
                    />
                    {
                        if self.validacion_prefijo.validando {
                            html! { <small class="ayuda">{"Verificando…"}</small> }
                        } else if let Some(mensaje) = &self.validacion_prefijo.mensaje {
                            html! { <small class="error-campo">{ mensaje }</small> }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div class="campo">
                    <label for="categoria-nombre">{"Nombre *"}</label>
                    <input
                        id="categoria-nombre"
                        value={self.nombre.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::CambiarNombre(valor_de_input(&e)))}
                    />
                </div>

                <div class="campo">
                    <label for="categoria-descripcion">{"Descripción"}</label>
                    <input
                        id="categoria-descripcion"
                        value={self.descripcion.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::CambiarDescripcion(valor_de_input(&e)))}
                    />
                </div>

                <div class="campo campo-casilla">
                    <label>
                        <input
                            type="checkbox"
                            checked={self.activo}
                            oninput={link.callback(|e: InputEvent| Msg::CambiarActivo(marcado(&e)))}
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
                        disabled={self.cargando || self.validacion_prefijo.bloquea_envio()}
                    >
                        { if self.cargando { "Guardando…" } else { "Guardar" } }
                    </button>
                </div>
            </form>
        }
    }
}
