pub mod cambio_password;
pub mod login;
