//! The I/O seam between the stateless client and whatever executes HTTP.
//!
//! # Design
//! The core never performs network I/O itself. A `Transport` takes a fully
//! built [`HttpRequest`] and returns the raw [`HttpResponse`]; status
//! interpretation stays in [`client`](crate::client). Production hosts back
//! this with a real HTTP agent, tests with a scripted fake.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes one HTTP round-trip for the client.
///
/// Implementations report connectivity problems as
/// [`ApiError::Network`]; a response that arrived, whatever its status
/// code, is returned as `Ok`.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// A shared reference to a transport is itself a transport, so one agent
/// can back both a store and direct client calls.
impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}
