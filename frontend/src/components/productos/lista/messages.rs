use common::api::ErrorApi;
use common::model::producto::{PaginaProductos, Producto};

pub enum Msg {
    Cargar,
    Cargada(PaginaProductos),
    Fallo(ErrorApi),
    CambiarTermino(String),
    Buscar,
    IrAPagina(i64),
    PedirEliminacion(Producto),
    CancelarEliminacion,
    ConfirmarEliminacion,
    Eliminado(String),
    FalloEliminacion(ErrorApi),
    CerrarAlerta,
}
