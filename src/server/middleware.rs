//! Performance middleware for request monitoring
//!
//! Times every request, logs method/path/status/elapsed, and exposes the
//! handling time to callers via the `X-Process-Time` response header.

use std::future::Future;
use std::pin::Pin;
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures::future::{ready, Ready};
use tracing::info;

/// Request-timing middleware for Actix-web.
pub struct PerformanceMiddleware;

impl<S, B> Transform<S, ServiceRequest> for PerformanceMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = PerformanceMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(PerformanceMiddlewareService { service }))
    }
}

/// Service implementation for the performance middleware.
pub struct PerformanceMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for PerformanceMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start_time = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();

        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;
            let elapsed = start_time.elapsed();

            info!(
                method = %method,
                path = %path,
                status = res.status().as_u16(),
                elapsed_ms = elapsed.as_millis() as u64,
                "Request handled"
            );

            if let Ok(value) = HeaderValue::from_str(&format!("{:.4}", elapsed.as_secs_f64())) {
                res.headers_mut()
                    .insert(HeaderName::from_static("x-process-time"), value);
            }

            Ok(res)
        })
    }
}
