pub mod bodega;
pub mod categoria;
pub mod cliente;
pub mod menu;
pub mod producto;
pub mod proveedor;
pub mod rol;
pub mod stock;
pub mod usuario;
