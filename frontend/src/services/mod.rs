//! Capa de servicios: una función por operación de dominio, una llamada
//! HTTP por función. Los componentes no conocen rutas ni sobres de
//! respuesta; reciben `ResultadoApi<T>` ya normalizado.

pub mod auth;
pub mod bodegas;
pub mod categorias;
pub mod clientes;
pub mod endpoints;
pub mod http;
pub mod menu;
pub mod productos;
pub mod proveedores;
pub mod roles;
pub mod sesion;
pub mod stock;
pub mod usuarios;
