use common::model::usuario::Usuario;
use yew::prelude::*;

use crate::components::acceso::cambio_password::CambioPassword;
use crate::components::acceso::login::Login;
use crate::components::bodegas::BodegasMain;
use crate::components::categorias::CategoriasMain;
use crate::components::clientes::ClientesMain;
use crate::components::concha::Seccion;
use crate::components::concha::navbar::Navbar;
use crate::components::concha::sidebar::Sidebar;
use crate::components::productos::ProductosMain;
use crate::components::proveedores::ProveedoresMain;
use crate::components::roles::RolesMain;
use crate::components::stock::StockMain;
use crate::components::usuarios::UsuariosMain;
use crate::services::sesion;

enum Vista {
    Login,
    CambioForzado(Usuario),
    Panel,
}

pub enum Msg {
    SesionLista(Usuario),
    CambioRequerido(Usuario),
    PasswordActualizada,
    CerrarSesion,
    IrA(Seccion),
}

/// Raíz de la aplicación. Decide entre login, cambio forzado de contraseña
/// y el panel; dentro del panel sostiene la sección activa. La validez de
/// la sesión se evalúa al montar: un token vencido o ilegible manda
/// directo al login.
pub struct App {
    vista: Vista,
    seccion: Seccion,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let vista = if sesion::sesion_activa() {
            Vista::Panel
        } else if let Some(pendiente) = sesion::leer_usuario_pendiente() {
            Vista::CambioForzado(pendiente)
        } else {
            sesion::borrar_token();
            Vista::Login
        };
        App {
            vista,
            seccion: Seccion::Clientes,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SesionLista(_) => {
                self.vista = Vista::Panel;
                self.seccion = Seccion::Clientes;
                true
            }
            Msg::CambioRequerido(usuario) => {
                sesion::guardar_usuario_pendiente(&usuario);
                self.vista = Vista::CambioForzado(usuario);
                true
            }
            Msg::PasswordActualizada => {
                // la contraseña nueva exige autenticarse de nuevo
                sesion::borrar_usuario_pendiente();
                sesion::borrar_token();
                self.vista = Vista::Login;
                true
            }
            Msg::CerrarSesion => {
                sesion::borrar_token();
                self.vista = Vista::Login;
                true
            }
            Msg::IrA(seccion) => {
                if self.seccion == seccion {
                    return false;
                }
                self.seccion = seccion;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        match &self.vista {
            Vista::Login => html! {
                <Login
                    al_ingresar={link.callback(Msg::SesionLista)}
                    al_cambio_requerido={link.callback(Msg::CambioRequerido)}
                />
            },
            Vista::CambioForzado(usuario) => html! {
                <CambioPassword
                    usuario={usuario.clone()}
                    al_completar={link.callback(|_| Msg::PasswordActualizada)}
                />
            },
            Vista::Panel => html! {
                <div class="panel">
                    <Navbar
                        usuario={sesion::nombre_usuario()}
                        al_cerrar_sesion={link.callback(|_| Msg::CerrarSesion)}
                    />
                    <div class="panel-cuerpo">
                        <Sidebar
                            seccion={self.seccion}
                            al_navegar={link.callback(Msg::IrA)}
                        />
                        <main class="panel-contenido">
                            { self.contenido() }
                        </main>
                    </div>
                </div>
            },
        }
    }
}

impl App {
    fn contenido(&self) -> Html {
        match self.seccion {
            Seccion::Clientes => html! { <ClientesMain /> },
            Seccion::Productos => html! { <ProductosMain /> },
            Seccion::Proveedores => html! { <ProveedoresMain /> },
            Seccion::Bodegas => html! { <BodegasMain /> },
            Seccion::Categorias => html! { <CategoriasMain /> },
            Seccion::Stock => html! { <StockMain /> },
            Seccion::Usuarios => html! { <UsuariosMain /> },
            Seccion::Roles => html! { <RolesMain /> },
        }
    }
}
