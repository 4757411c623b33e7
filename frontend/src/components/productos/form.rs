use common::api::ErrorApi;
use common::model::categoria::Categoria;
use common::model::producto::Producto;
use common::model::proveedor::Proveedor;
use common::requests::{ConsultaUnicidad, DatosProducto, VeredictoUnicidad};
use common::validacion::{campo_opcional, numero_no_negativo, texto_requerido};
use web_sys::SubmitEvent;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::compartidos::alerta::{Alerta, AlertaBanner};
use crate::components::compartidos::cargando::PantallaCargando;
use crate::components::compartidos::formulario::{
    EstadoValidacion, marcado, valor_de_area, valor_de_input, valor_de_select,
};
use crate::services::{categorias, productos, proveedores};

#[derive(Properties, PartialEq)]
pub struct FormularioProps {
    pub producto: Option<Producto>,
    pub al_guardar: Callback<String>,
    pub al_cancelar: Callback<MouseEvent>,
}

pub enum Msg {
    ReferenciasListas(Vec<Categoria>, Vec<Proveedor>),
    FalloReferencias(ErrorApi),
    CambiarCodigo(String),
    ValidarCodigo,
    CodigoVerificado(Result<VeredictoUnicidad, ErrorApi>),
    CambiarNombre(String),
    CambiarDescripcion(String),
    CambiarCategoria(String),
    CambiarProveedor(String),
    CambiarPrecio(String),
    CambiarStockMinimo(String),
    CambiarActivo(bool),
    Enviar,
    Guardado(String),
    Fallo(ErrorApi),
    CerrarAlerta,
}

pub struct ProductosFormulario {
    categorias: Vec<Categoria>,
    proveedores: Vec<Proveedor>,
    cargando_referencias: bool,
    codigo: String,
    validacion_codigo: EstadoValidacion,
    nombre: String,
    descripcion: String,
    categoria_id: String,
    proveedor_id: String,
    precio: String,
    stock_minimo: String,
    activo: bool,
    cargando: bool,
    alerta: Option<Alerta>,
}

impl Component for ProductosFormulario {
    type Message = Msg;
    type Properties = FormularioProps;

    fn create(ctx: &Context<Self>) -> Self {
        let producto = ctx.props().producto.as_ref();
        ProductosFormulario {
            categorias: Vec::new(),
            proveedores: Vec::new(),
            cargando_referencias: true,
            codigo: producto.map(|p| p.codigo.clone()).unwrap_or_default(),
            validacion_codigo: EstadoValidacion::default(),
            nombre: producto.map(|p| p.nombre.clone()).unwrap_or_default(),
            descripcion: producto
                .and_then(|p| p.descripcion.clone())
                .unwrap_or_default(),
            categoria_id: producto
                .map(|p| p.categoria_id.to_string())
                .unwrap_or_default(),
            proveedor_id: producto
                .map(|p| p.proveedor_id.to_string())
                .unwrap_or_default(),
            precio: producto.map(|p| p.precio.to_string()).unwrap_or_default(),
            stock_minimo: producto
                .map(|p| p.stock_minimo.to_string())
                .unwrap_or_default(),
            activo: producto.map(|p| p.activo).unwrap_or(true),
            cargando: false,
            alerta: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            // dos catálogos independientes, pedidos uno tras otro
            let link = ctx.link().clone();
            spawn_local(async move {
                let cats = match categorias::todas().await {
                    Ok(c) => c,
                    Err(e) => {
                        link.send_message(Msg::FalloReferencias(e));
                        return;
                    }
                };
                match proveedores::todos().await {
                    Ok(provs) => link.send_message(Msg::ReferenciasListas(cats, provs)),
                    Err(e) => link.send_message(Msg::FalloReferencias(e)),
                }
            });
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ReferenciasListas(categorias, proveedores) => {
                self.cargando_referencias = false;
                self.categorias = categorias;
                self.proveedores = proveedores;
                true
            }
            Msg::FalloReferencias(e) => {
                self.cargando_referencias = false;
                self.alerta = Some(Alerta::error(format!(
                    "No se pudieron cargar los catálogos: {e}"
                )));
                true
            }
            Msg::CambiarCodigo(v) => {
                self.codigo = v;
                self.validacion_codigo = EstadoValidacion::default();
                true
            }
            Msg::ValidarCodigo => {
                // solo en edición: al crear el código lo pone el servidor
                if ctx.props().producto.is_none() {
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
                    excluir_id: ctx.props().producto.as_ref().map(|p| p.id),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    let resultado = productos::validar_codigo(&consulta).await;
                    link.send_message(Msg::CodigoVerificado(resultado));
                });
                true
            }
            Msg::CodigoVerificado(resultado) => {
                self.validacion_codigo = match resultado {
                    Ok(v) if v.existe => {
                        EstadoValidacion::conflicto("Ya existe un producto con ese código.")
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
            Msg::CambiarDescripcion(v) => {
                self.descripcion = v;
                true
            }
            Msg::CambiarCategoria(v) => {
                self.categoria_id = v;
                true
            }
            Msg::CambiarProveedor(v) => {
                self.proveedor_id = v;
                true
            }
            Msg::CambiarPrecio(v) => {
                self.precio = v;
                true
            }
            Msg::CambiarStockMinimo(v) => {
                self.stock_minimo = v;
                true
            }
            Msg::CambiarActivo(v) => {
                self.activo = v;
                true
            }
            Msg::Enviar => {
                let Some(datos) = self.armar_datos(ctx) else {
                    self.alerta = Some(Alerta::aviso(
                        "Revise los campos obligatorios antes de guardar.",
                    ));
                    return true;
                };
                self.cargando = true;
                self.alerta = None;
                let id = ctx.props().producto.as_ref().map(|p| p.id);
                let link = ctx.link().clone();
                spawn_local(async move {
                    let resultado = match id {
                        Some(id) => productos::actualizar(id, &datos).await,
                        None => productos::crear(&datos).await,
                    };
                    match resultado {
                        Ok(_) => link.send_message(Msg::Guardado(match id {
                            Some(_) => "Producto actualizado correctamente.".to_string(),
                            None => "Producto creado correctamente.".to_string(),
                        })),
                        Err(e) => link.send_message(Msg::Fallo(e)),
                    }
                });
                true
            }
            Msg::Guardado(mensaje) => {
                self.cargando = false;
                // esta vista vuelve al listado de inmediato
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
        let editando = ctx.props().producto.is_some();

        html! {
            <form
                class="formulario"
                onsubmit={link.callback(|e: SubmitEvent| { e.prevent_default(); Msg::Enviar })}
            >
                <h3>{ if editando { "Editar producto" } else { "Nuevo producto" } }</h3>
                <AlertaBanner
                    alerta={self.alerta.clone()}
                    al_cerrar={link.callback(|_| Msg::CerrarAlerta)}
                />

                <div class="campo">
                    <label for="producto-codigo">{"Código"}</label>
                    <input
                        id="producto-codigo"
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
                    <label for="producto-nombre">{"Nombre *"}</label>
                    <input
                        id="producto-nombre"
                        value={self.nombre.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::CambiarNombre(valor_de_input(&e)))}
                    />
                </div>

                <div class="campo">
                    <label for="producto-descripcion">{"Descripción"}</label>
                    <textarea
                        id="producto-descripcion"
                        rows="3"
                        value={self.descripcion.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::CambiarDescripcion(valor_de_area(&e)))}
                    />
                </div>

                <div class="campo-doble">
                    <div class="campo">
                        <label for="producto-categoria">{"Categoría *"}</label>
                        <select
                            id="producto-categoria"
                            disabled={self.cargando_referencias}
                            onchange={link.callback(|e: Event| Msg::CambiarCategoria(valor_de_select(&e)))}
                        >
                            <option value="" selected={self.categoria_id.is_empty()}>{"— Seleccione —"}</option>
                            {
                                for self.categorias.iter().map(|c| html! {
                                    <option
                                        value={c.id.to_string()}
                                        selected={self.categoria_id == c.id.to_string()}
                                    >
                                        { format!("{} — {}", c.codigo_prefijo, c.nombre) }
                                    </option>
                                })
                            }
                        </select>
                    </div>
                    <div class="campo">
                        <label for="producto-proveedor">{"Proveedor *"}</label>
                        <select
                            id="producto-proveedor"
                            disabled={self.cargando_referencias}
                            onchange={link.callback(|e: Event| Msg::CambiarProveedor(valor_de_select(&e)))}
                        >
                            <option value="" selected={self.proveedor_id.is_empty()}>{"— Seleccione —"}</option>
                            {
                                for self.proveedores.iter().map(|p| html! {
                                    <option
                                        value={p.id_proveedor.to_string()}
                                        selected={self.proveedor_id == p.id_proveedor.to_string()}
                                    >
                                        { &p.nombre }
                                    </option>
                                })
                            }
                        </select>
                    </div>
                </div>

                <div class="campo-doble">
                    <div class="campo">
                        <label for="producto-precio">{"Precio *"}</label>
                        <input
                            id="producto-precio"
                            inputmode="decimal"
                            value={self.precio.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::CambiarPrecio(valor_de_input(&e)))}
                        />
                    </div>
                    <div class="campo">
                        <label for="producto-stock-minimo">{"Stock mínimo"}</label>
                        <input
                            id="producto-stock-minimo"
                            inputmode="decimal"
                            value={self.stock_minimo.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::CambiarStockMinimo(valor_de_input(&e)))}
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
                        disabled={self.cargando || self.validacion_codigo.bloquea_envio()}
                    >
                        { if self.cargando { "Guardando…" } else { "Guardar" } }
                    </button>
                </div>
                <PantallaCargando visible={self.cargando_referencias} />
            </form>
        }
    }
}

impl ProductosFormulario {
    /// `None` cuando falta un obligatorio o un número no parsea; el aviso
    /// lo pone el llamador.
    fn armar_datos(&self, ctx: &Context<Self>) -> Option<DatosProducto> {
        let nombre = texto_requerido(&self.nombre)?;
        let categoria_id = self.categoria_id.parse::<i64>().ok()?;
        let proveedor_id = self.proveedor_id.parse::<i64>().ok()?;
        let precio = numero_no_negativo(&self.precio)?;
        let stock_minimo = if self.stock_minimo.trim().is_empty() {
            0.0
        } else {
            numero_no_negativo(&self.stock_minimo)?
        };
        Some(DatosProducto {
            id: ctx.props().producto.as_ref().map(|p| p.id),
            nombre,
            descripcion: campo_opcional(&self.descripcion),
            categoria_id,
            proveedor_id,
            precio,
            stock_minimo,
            activo: self.activo,
        })
    }
}
