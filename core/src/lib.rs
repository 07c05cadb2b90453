//! Synchronous client core for the registro de marcas service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). A [`Transport`]
//! implementation executes the actual HTTP round-trip, making the core fully
//! deterministic and testable.
//!
//! # Design
//! - `RegistroClient` is stateless — it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `RegistroStore` layers the collection state a front-end renders
//!   (records, loading flag, error slot) on top of the client.
//! - `RegistroForm` holds editable field buffers with per-field validation
//!   and derives the create/update payloads.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod fecha;
pub mod form;
pub mod http;
pub mod store;
pub mod transport;
pub mod types;

pub use client::RegistroClient;
pub use error::ApiError;
pub use form::{Campo, RegistroForm};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::RegistroStore;
pub use transport::Transport;
pub use types::{
    CreateRegistroMarca, EstadoRegistro, RegistroMarca, UpdateRegistroMarca, CATEGORIAS,
};
