use common::api::ErrorApi;
use common::model::rol::{Permiso, Rol};
use std::collections::{BTreeMap, HashSet};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::compartidos::alerta::{Alerta, AlertaBanner};
use crate::components::compartidos::cargando::PantallaCargando;
use crate::services::roles;

#[derive(Properties, PartialEq)]
pub struct PermisosProps {
    pub rol: Rol,
    pub al_volver: Callback<MouseEvent>,
}

pub enum Msg {
    Cargado {
        otorgados: HashSet<i64>,
        disponibles: Vec<Permiso>,
    },
    FalloCarga(ErrorApi),
    Alternar(i64),
    Alternado {
        permiso_id: i64,
        mensaje: String,
    },
    FalloAlternar {
        permiso_id: i64,
        error: ErrorApi,
    },
    CerrarAlerta,
}

/// Editor de permisos de un rol. Cada casilla dispara en el acto su
/// llamada de otorgar o revocar; mientras la llamada está en vuelo la
/// casilla queda deshabilitada y, si falla, vuelve a su estado anterior.
pub struct EditorPermisos {
    disponibles: Vec<Permiso>,
    otorgados: HashSet<i64>,
    en_vuelo: HashSet<i64>,
    cargando: bool,
    alerta: Option<Alerta>,
}

impl Component for EditorPermisos {
    type Message = Msg;
    type Properties = PermisosProps;

    fn create(_ctx: &Context<Self>) -> Self {
        EditorPermisos {
            disponibles: Vec::new(),
            otorgados: HashSet::new(),
            en_vuelo: HashSet::new(),
            cargando: true,
            alerta: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            // dos lecturas seguidas: el rol con su detalle y el catálogo
            let rol_id = ctx.props().rol.id;
            let link = ctx.link().clone();
            spawn_local(async move {
                let detalle = match roles::obtener(rol_id).await {
                    Ok(rol) => rol,
                    Err(e) => {
                        link.send_message(Msg::FalloCarga(e));
                        return;
                    }
                };
                match roles::permisos_disponibles().await {
                    Ok(disponibles) => {
                        let otorgados = detalle
                            .permisos
                            .unwrap_or_default()
                            .into_iter()
                            .map(|p| p.id)
                            .collect();
                        link.send_message(Msg::Cargado {
                            otorgados,
                            disponibles,
                        });
                    }
                    Err(e) => link.send_message(Msg::FalloCarga(e)),
                }
            });
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Cargado {
                otorgados,
                disponibles,
            } => {
                self.cargando = false;
                self.otorgados = otorgados;
                self.disponibles = disponibles;
                true
            }
            Msg::FalloCarga(e) => {
                self.cargando = false;
                self.alerta = Some(Alerta::error(e.to_string()));
                true
            }
            Msg::Alternar(permiso_id) => {
                if self.en_vuelo.contains(&permiso_id) {
                    return false;
                }
                let rol_id = ctx.props().rol.id;
                let otorgar = !self.otorgados.contains(&permiso_id);
                self.en_vuelo.insert(permiso_id);
                // la casilla cambia ya; si el backend falla, se revierte
                if otorgar {
                    self.otorgados.insert(permiso_id);
                } else {
                    self.otorgados.remove(&permiso_id);
                }
                let link = ctx.link().clone();
                spawn_local(async move {
                    let resultado = if otorgar {
                        roles::otorgar_permiso(rol_id, permiso_id).await
                    } else {
                        roles::revocar_permiso(rol_id, permiso_id).await
                    };
                    match resultado {
                        Ok(mensaje) => link.send_message(Msg::Alternado { permiso_id, mensaje }),
                        Err(error) => link.send_message(Msg::FalloAlternar { permiso_id, error }),
                    }
                });
                true
            }
            Msg::Alternado { permiso_id, mensaje } => {
                self.en_vuelo.remove(&permiso_id);
                self.alerta = Some(Alerta::exito(mensaje));
                true
            }
            Msg::FalloAlternar { permiso_id, error } => {
                self.en_vuelo.remove(&permiso_id);
                // revertir al estado que confirmó el backend
                if self.otorgados.contains(&permiso_id) {
                    self.otorgados.remove(&permiso_id);
                } else {
                    self.otorgados.insert(permiso_id);
                }
                self.alerta = Some(Alerta::error(error.to_string()));
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

        // agrupado por módulo, en orden estable
        let mut por_modulo: BTreeMap<&str, Vec<&Permiso>> = BTreeMap::new();
        for permiso in &self.disponibles {
            por_modulo
                .entry(permiso.modulo.as_str())
                .or_default()
                .push(permiso);
        }

        html! {
            <div class="editor-permisos">
                <div class="listado-barra">
                    <h3>{ format!("Permisos del rol \"{}\"", ctx.props().rol.nombre) }</h3>
                    <button class="boton-secundario" onclick={ctx.props().al_volver.clone()}>
                        {"Volver"}
                    </button>
                </div>
                <AlertaBanner
                    alerta={self.alerta.clone()}
                    al_cerrar={link.callback(|_| Msg::CerrarAlerta)}
                />
                {
                    for por_modulo.into_iter().map(|(modulo, permisos)| html! {
                        <fieldset class="grupo-permisos">
                            <legend>{ modulo }</legend>
                            {
                                for permisos.into_iter().map(|permiso| {
                                    let id = permiso.id;
                                    html! {
                                        <label class="permiso" key={id}>
                                            <input
                                                type="checkbox"
                                                checked={self.otorgados.contains(&id)}
                                                disabled={self.en_vuelo.contains(&id)}
                                                oninput={link.callback(move |_| Msg::Alternar(id))}
                                            />
                                            { format!(" {} ({})", permiso.nombre, permiso.codigo) }
                                        </label>
                                    }
                                })
                            }
                        </fieldset>
                    })
                }
                <PantallaCargando visible={self.cargando} />
            </div>
        }
    }
}
