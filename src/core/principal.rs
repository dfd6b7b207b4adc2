//! Principal resolution - caller identity for audit stamping
//!
//! Authentication happens upstream of this service; the resolved caller
//! identity arrives in the `x-principal` header. The middleware makes it
//! available to every handler as an `Extension<Principal>`.

use axum::{body::Body, extract::Request, http::Response, middleware::Next};
use tracing::{debug, instrument};

pub const ANONYMOUS: &str = "anonymous";

/// Identity string of the current caller, stamped into the audit fields.
#[derive(Debug, Clone)]
pub struct Principal(pub String);

impl Principal {
    pub fn name(&self) -> &str {
        &self.0
    }
}

#[instrument(skip_all)]
pub async fn principal_middleware(mut req: Request, next: Next) -> Response<Body> {
    let name = req
        .headers()
        .get("x-principal")
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .unwrap_or(ANONYMOUS)
        .to_string();
    debug!("Resolved principal <{name}>");
    req.extensions_mut().insert(Principal(name));
    next.run(req).await
}
