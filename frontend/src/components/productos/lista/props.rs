use common::model::producto::Producto;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ListaProps {
    /// El contenedor la incrementa tras guardar para forzar la recarga.
    pub version: u32,
    pub al_crear: Callback<MouseEvent>,
    pub al_editar: Callback<Producto>,
}
