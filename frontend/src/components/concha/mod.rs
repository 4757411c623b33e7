//! Armazón de la aplicación: barra lateral, barra superior y el selector
//! de sección activa. La navegación es estado del componente raíz, no hay
//! enrutador.

pub mod navbar;
pub mod sidebar;

/// Secciones del panel. Cada una monta su propio contenedor de entidad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seccion {
    Clientes,
    Productos,
    Proveedores,
    Bodegas,
    Categorias,
    Stock,
    Usuarios,
    Roles,
}

impl Seccion {
    pub fn titulo(&self) -> &'static str {
        match self {
            Seccion::Clientes => "Clientes",
            Seccion::Productos => "Productos",
            Seccion::Proveedores => "Proveedores",
            Seccion::Bodegas => "Bodegas",
            Seccion::Categorias => "Categorías",
            Seccion::Stock => "Stock",
            Seccion::Usuarios => "Usuarios",
            Seccion::Roles => "Roles",
        }
    }

    /// Traduce la ruta que trae el menú del backend. Rutas desconocidas se
    /// descartan (el backend puede anunciar módulos que este panel no tiene).
    pub fn desde_ruta(ruta: &str) -> Option<Seccion> {
        match ruta.trim_end_matches('/') {
            "/clientes" => Some(Seccion::Clientes),
            "/productos" => Some(Seccion::Productos),
            "/proveedores" => Some(Seccion::Proveedores),
            "/bodegas" => Some(Seccion::Bodegas),
            "/categorias" => Some(Seccion::Categorias),
            "/stock" => Some(Seccion::Stock),
            "/usuarios" => Some(Seccion::Usuarios),
            "/roles" => Some(Seccion::Roles),
            _ => None,
        }
    }

    pub fn todas() -> [Seccion; 8] {
        [
            Seccion::Clientes,
            Seccion::Productos,
            Seccion::Proveedores,
            Seccion::Bodegas,
            Seccion::Categorias,
            Seccion::Stock,
            Seccion::Usuarios,
            Seccion::Roles,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rutas_del_menu_se_traducen() {
        assert_eq!(Seccion::desde_ruta("/clientes"), Some(Seccion::Clientes));
        assert_eq!(Seccion::desde_ruta("/bodegas/"), Some(Seccion::Bodegas));
        assert_eq!(Seccion::desde_ruta("/reportes"), None);
    }
}
