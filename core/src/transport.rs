//! The seam between `TodoClient` and whatever performs HTTP.
//!
//! Implementations return every HTTP status as an `HttpResponse`. Only
//! failures to complete the round-trip at all (DNS, connect, timeout, body
//! read) become `TransportError`.

use std::future::Future;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

pub trait Transport: Send + Sync {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}
