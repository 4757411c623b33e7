//! Catálogo de endpoints: el único lugar donde se escriben rutas REST.
//!
//! La aplicación original llamaba algunas operaciones de bodega, categoría,
//! stock y roles con URL sueltas fuera del catálogo; aquí todas las rutas
//! salen de este módulo.

pub const BASE: &str = "/api";

fn ruta(camino: &str) -> String {
    format!("{BASE}{camino}")
}

/// Query de listado paginado. El término va codificado porque viene tal
/// cual de un input de búsqueda.
fn con_paginacion(camino: &str, pagina: i64, tamano: i64, termino: Option<&str>) -> String {
    let mut url = format!("{}?pagina={}&tamanoPagina={}", ruta(camino), pagina, tamano);
    if let Some(t) = termino.map(str::trim).filter(|t| !t.is_empty()) {
        url.push_str("&termino=");
        url.push_str(&js_sys::encode_uri_component(t).as_string().unwrap_or_default());
    }
    url
}

pub mod auth {
    use super::ruta;

    pub fn login() -> String {
        ruta("/Auth/login")
    }
    pub fn crear_usuario() -> String {
        ruta("/Auth/crear-usuario")
    }
    pub fn reiniciar_contrasenia() -> String {
        ruta("/Auth/reiniciar-contrasenia")
    }
    pub fn actualizar_usuario(id: i64) -> String {
        ruta(&format!("/Auth/actualizar-usuario/{id}"))
    }
    pub fn listar_usuarios(pagina: i64, tamano: i64, termino: Option<&str>) -> String {
        super::con_paginacion("/Auth/listar-usuarios", pagina, tamano, termino)
    }
    pub fn validar_correo() -> String {
        ruta("/Auth/validar-correo")
    }
}

pub mod cliente {
    use super::ruta;

    pub fn listar(pagina: i64, tamano: i64, termino: Option<&str>) -> String {
        super::con_paginacion("/Cliente/listar", pagina, tamano, termino)
    }
    /// Búsqueda paginada por término; respalda el filtro del listado.
    pub fn buscar(pagina: i64, tamano: i64, termino: &str) -> String {
        super::con_paginacion("/Cliente/buscar", pagina, tamano, Some(termino))
    }
    pub fn obtener(id: i64) -> String {
        ruta(&format!("/Cliente/obtener/{id}"))
    }
    pub fn crear() -> String {
        ruta("/Cliente/crear")
    }
    pub fn actualizar(id: i64) -> String {
        ruta(&format!("/Cliente/actualizar/{id}"))
    }
    pub fn eliminar(id: i64) -> String {
        ruta(&format!("/Cliente/eliminar/{id}"))
    }
    pub fn validar_codigo() -> String {
        ruta("/Cliente/validar-codigo")
    }
    pub fn validar_nit() -> String {
        ruta("/Cliente/validar-nit")
    }
}

pub mod producto {
    use super::ruta;

    pub fn listar(pagina: i64, tamano: i64, termino: Option<&str>) -> String {
        super::con_paginacion("/Producto/listar", pagina, tamano, termino)
    }
    pub fn obtener(id: i64) -> String {
        ruta(&format!("/Producto/obtener/{id}"))
    }
    pub fn buscar(termino: &str) -> String {
        format!(
            "{}?termino={}",
            ruta("/Producto/buscar"),
            js_sys::encode_uri_component(termino)
                .as_string()
                .unwrap_or_default()
        )
    }
    pub fn crear() -> String {
        ruta("/Producto/crear")
    }
    pub fn actualizar(id: i64) -> String {
        ruta(&format!("/Producto/actualizar/{id}"))
    }
    pub fn eliminar(id: i64) -> String {
        ruta(&format!("/Producto/eliminar/{id}"))
    }
    pub fn validar_codigo() -> String {
        ruta("/Producto/validar-codigo")
    }
}

pub mod proveedor {
    use super::ruta;

    pub fn listar(pagina: i64, tamano: i64, termino: Option<&str>) -> String {
        super::con_paginacion("/Proveedor/listar", pagina, tamano, termino)
    }
    pub fn buscar(pagina: i64, tamano: i64, termino: &str) -> String {
        super::con_paginacion("/Proveedor/buscar", pagina, tamano, Some(termino))
    }
    pub fn obtener(id_proveedor: i64) -> String {
        ruta(&format!("/Proveedor/obtener/{id_proveedor}"))
    }
    pub fn crear() -> String {
        ruta("/Proveedor/crear")
    }
    pub fn actualizar(id: i64) -> String {
        ruta(&format!("/Proveedor/actualizar/{id}"))
    }
    pub fn eliminar(id: i64) -> String {
        ruta(&format!("/Proveedor/eliminar/{id}"))
    }
    pub fn validar_nombre() -> String {
        ruta("/Proveedor/validar-nombre")
    }
    /// Catálogo completo para selectores, sin paginar.
    pub fn todos() -> String {
        ruta("/Proveedor/todos")
    }
}

pub mod bodega {
    use super::ruta;

    pub fn listar(pagina: i64, tamano: i64, termino: Option<&str>) -> String {
        super::con_paginacion("/Bodega/listar", pagina, tamano, termino)
    }
    pub fn crear() -> String {
        ruta("/Bodega/crear")
    }
    pub fn actualizar(id: i64) -> String {
        ruta(&format!("/Bodega/actualizar/{id}"))
    }
    pub fn eliminar(id: i64) -> String {
        ruta(&format!("/Bodega/eliminar/{id}"))
    }
    pub fn validar_codigo() -> String {
        ruta("/Bodega/validar-codigo")
    }
    /// Catálogo completo para poblar selectores, sin paginar.
    pub fn todas() -> String {
        ruta("/Bodega/todas")
    }
}

pub mod categoria {
    use super::ruta;

    pub fn listar(pagina: i64, tamano: i64, termino: Option<&str>) -> String {
        super::con_paginacion("/Categoria/listar", pagina, tamano, termino)
    }
    pub fn crear() -> String {
        ruta("/Categoria/crear")
    }
    pub fn actualizar(id: i64) -> String {
        ruta(&format!("/Categoria/actualizar/{id}"))
    }
    pub fn eliminar(id: i64) -> String {
        ruta(&format!("/Categoria/eliminar/{id}"))
    }
    pub fn validar_prefijo() -> String {
        ruta("/Categoria/validar-prefijo")
    }
    pub fn todas() -> String {
        ruta("/Categoria/todas")
    }
}

pub mod stock {
    use super::ruta;

    pub fn listar(pagina: i64, tamano: i64, bodega_id: Option<i64>, nivel: Option<&str>) -> String {
        let mut url = format!(
            "{}?pagina={}&tamanoPagina={}",
            ruta("/Stock/listar"),
            pagina,
            tamano
        );
        if let Some(id) = bodega_id {
            url.push_str(&format!("&bodegaId={id}"));
        }
        if let Some(n) = nivel {
            url.push_str(&format!("&nivelAlerta={n}"));
        }
        url
    }
    pub fn movimientos(pagina: i64, tamano: i64) -> String {
        format!(
            "{}?pagina={}&tamanoPagina={}",
            ruta("/Stock/movimientos"),
            pagina,
            tamano
        )
    }
    pub fn entrada() -> String {
        ruta("/Stock/entrada")
    }
    pub fn salida() -> String {
        ruta("/Stock/salida")
    }
}

pub mod rol {
    use super::ruta;

    pub fn listar() -> String {
        ruta("/Rol/listar")
    }
    pub fn obtener(id: i64) -> String {
        ruta(&format!("/Rol/obtener/{id}"))
    }
    pub fn crear() -> String {
        ruta("/Rol/crear")
    }
    pub fn actualizar(id: i64) -> String {
        ruta(&format!("/Rol/actualizar/{id}"))
    }
    pub fn eliminar(id: i64) -> String {
        ruta(&format!("/Rol/eliminar/{id}"))
    }
    pub fn permisos_disponibles() -> String {
        ruta("/Permiso/listar")
    }
    pub fn otorgar_permiso(rol_id: i64, permiso_id: i64) -> String {
        ruta(&format!("/Rol/{rol_id}/otorgar-permiso/{permiso_id}"))
    }
    pub fn revocar_permiso(rol_id: i64, permiso_id: i64) -> String {
        ruta(&format!("/Rol/{rol_id}/revocar-permiso/{permiso_id}"))
    }
}

pub mod menu {
    use super::ruta;

    pub fn obtener_menu() -> String {
        ruta("/Menu/Obtener-menu")
    }
    /// Catálogo completo de menús del backend. Sin consumidor en este
    /// panel; se conserva en el catálogo porque es parte de la superficie
    /// documentada del API.
    pub fn obtener_todos_menus() -> String {
        ruta("/Menu/Obtener-todos-menus")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listados_llevan_paginacion() {
        assert_eq!(
            cliente::listar(2, 10, None),
            "/api/Cliente/listar?pagina=2&tamanoPagina=10"
        );
        // un término en blanco no agrega el parámetro
        assert_eq!(
            producto::listar(1, 25, Some("   ")),
            "/api/Producto/listar?pagina=1&tamanoPagina=25"
        );
    }

    #[test]
    fn rutas_con_identificador() {
        assert_eq!(cliente::eliminar(7), "/api/Cliente/eliminar/7");
        assert_eq!(proveedor::obtener(3), "/api/Proveedor/obtener/3");
        assert_eq!(proveedor::actualizar(3), "/api/Proveedor/actualizar/3");
        assert_eq!(rol::otorgar_permiso(2, 11), "/api/Rol/2/otorgar-permiso/11");
    }

    #[test]
    fn busqueda_comparte_la_paginacion_del_listado() {
        assert_eq!(
            cliente::buscar(2, 10, ""),
            "/api/Cliente/buscar?pagina=2&tamanoPagina=10"
        );
        assert_eq!(
            proveedor::buscar(1, 10, " "),
            "/api/Proveedor/buscar?pagina=1&tamanoPagina=10"
        );
    }

    #[test]
    fn la_superficie_de_menu_esta_completa() {
        assert_eq!(menu::obtener_menu(), "/api/Menu/Obtener-menu");
        assert_eq!(menu::obtener_todos_menus(), "/api/Menu/Obtener-todos-menus");
    }

    #[test]
    fn stock_filtra_por_bodega_y_nivel() {
        assert_eq!(
            stock::listar(1, 10, Some(4), Some("CRITICO")),
            "/api/Stock/listar?pagina=1&tamanoPagina=10&bodegaId=4&nivelAlerta=CRITICO"
        );
    }
}
