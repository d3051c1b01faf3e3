//! Fingerprint Middleware
//!
//! Per-request orchestration: derive a client key, consult the cache,
//! compute the fingerprint on a miss, publish the result for downstream
//! handlers, and forward to the next stage. The request is always
//! forwarded exactly once; nothing here can terminate it.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request, State};
use axum::http::header::USER_AGENT;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use crate::api::AppState;
use crate::fingerprint::resolve_fingerprint;

// == Public Constants ==
/// Name under which the fingerprint is published for downstream stages
/// (extension type, log field, response DTO field).
pub const PLACEHOLDER_NAME: &str = "ja4h";

// == Published Value ==
/// Request extension carrying the resolved fingerprint.
///
/// Inserted by [`ja4h_middleware`] before the inner service runs, so any
/// handler or later middleware can read it with `Extension<Ja4h>`.
#[derive(Debug, Clone)]
pub struct Ja4h(pub String);

// == Client Key ==
/// Builds the cache key for a client from its remote address and
/// User-Agent.
///
/// Both fields are length-prefixed so the composite is injective: a
/// crafted User-Agent containing the separator cannot collide with a
/// different (address, agent) pair.
pub fn client_key(remote_addr: &str, user_agent: &str) -> String {
    format!(
        "{}:{}|{}:{}",
        remote_addr.len(),
        remote_addr,
        user_agent.len(),
        user_agent
    )
}

// == Middleware ==
/// Resolves the client fingerprint for the request, caching it per
/// client key, then hands the request to the next stage.
///
/// Cache lookups run under the shared side of the lock; only a miss
/// takes the exclusive side to store the freshly computed value. Two
/// racing misses for the same key both compute and the later write wins,
/// which is harmless since the computation is pure.
pub async fn ja4h_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.to_string())
        .unwrap_or_default();
    let user_agent = request
        .headers()
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    let key = client_key(&remote_addr, user_agent);

    let cached = { state.cache.read().await.get(&key) };
    let hash = match cached {
        Some(hash) => hash,
        None => {
            let hash = resolve_fingerprint(state.fingerprinter.as_ref(), &request);
            state.cache.write().await.set(key, hash.clone());
            hash
        }
    };

    debug!(ja4h = %hash, "client fingerprint resolved");
    request.extensions_mut().insert(Ja4h(hash));

    next.run(request).await
}
