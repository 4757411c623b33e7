//! Piezas de interfaz que comparten todas las secciones: banner de alerta,
//! pantalla de carga, diálogo de confirmación, botonera de páginas y
//! utilidades de formulario.

pub mod alerta;
pub mod cargando;
pub mod confirmacion;
pub mod formulario;
pub mod paginacion;
