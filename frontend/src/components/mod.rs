pub mod acceso;
pub mod bodegas;
pub mod categorias;
pub mod clientes;
pub mod compartidos;
pub mod concha;
pub mod productos;
pub mod proveedores;
pub mod roles;
pub mod stock;
pub mod usuarios;
