//! The I/O seam between the deterministic core and the network.
//!
//! Implementations execute an `HttpRequest` and hand back the raw
//! `HttpResponse`. Non-2xx statuses are data, not errors; only a failure to
//! obtain any response at all maps to `ApiError::Transport`.

use std::future::Future;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

pub trait Transport {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, ApiError>> + Send;
}

impl<T: Transport> Transport for &T {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, ApiError>> + Send {
        (**self).execute(request)
    }
}
