//! Contract crate shared by the dashboard frontend: entity models, request
//! payloads, the response-envelope normaliser, token-claim decoding, field
//! validation, and the per-view pagination-window computations.
//!
//! Everything here is pure logic with no browser dependency, so the whole
//! crate is testable with plain `cargo test`.

pub mod api;
pub mod auth;
pub mod model;
pub mod paginacion;
pub mod requests;
pub mod validacion;
