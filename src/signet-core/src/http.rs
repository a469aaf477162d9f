//! HTTP routes for the signing oracle.
//!
//! JSON in, JSON out, camelCase field names on the wire. Input
//! validation errors map to 400 with a static message; internal
//! failures map to a generic 500 so no detail leaks to callers.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::codec;
use crate::oracle::SigningOracle;
use crate::ratelimit::RateLimiter;

/// Fixed hash signed and verified by the health endpoint.
const HEALTH_PROBE_HASH: &str = "deadbeef";

/// Shared state for all routes.
#[derive(Clone)]
pub struct AppState {
    /// The signing oracle.
    pub oracle: SigningOracle,
    /// Per-client rate limiter.
    pub limiter: Arc<RateLimiter>,
}

/// Build the oracle router.
///
/// The rate limit applies to every route; request tracing wraps the
/// whole router so rejected requests are logged too.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/sign", post(sign))
        .route("/verify", post(verify))
        .route("/public-key", get(public_key))
        .route("/health", get(health))
        .layer(middleware::from_fn_with_state(state.clone(), rate_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Rejects requests from clients that exhausted their window budget.
async fn rate_limit(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    if state.limiter.check_and_record(addr.ip()) {
        next.run(request).await
    } else {
        warn!(client = %addr.ip(), "rate limit exceeded");
        (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorResponse {
                error: "too many requests".to_string(),
            }),
        )
            .into_response()
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Static description of the failure.
    pub error: String,
}

/// POST /sign request body.
#[derive(Debug, Deserialize)]
pub struct SignRequest {
    /// Hash to sign, as hex.
    pub hash: String,
}

/// POST /sign response body.
#[derive(Debug, Serialize)]
pub struct SignResponse {
    /// DER signature, as hex.
    pub signature: String,
}

/// POST /sign - sign a caller-supplied hash.
pub async fn sign(
    State(state): State<AppState>,
    Json(req): Json<SignRequest>,
) -> Result<Json<SignResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.oracle.sign_hash(&req.hash) {
        Ok(signature) => Ok(Json(SignResponse { signature })),
        Err(e) if e.is_client_error() => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
        Err(e) => {
            warn!(error = %e, "sign request failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "signing failed".to_string(),
                }),
            ))
        }
    }
}

/// POST /verify request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    /// Hash that was signed, as hex.
    pub hash: String,
    /// DER signature, as hex.
    pub signature: String,
    /// SPKI DER public key, as hex.
    pub public_key: String,
}

/// POST /verify response body.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    /// Whether the signature checks out.
    pub valid: bool,
}

/// POST /verify - verify a (hash, signature, public key) triple.
pub async fn verify(
    State(state): State<AppState>,
    Json(req): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>, (StatusCode, Json<ErrorResponse>)> {
    if codec::decode_hex(&req.hash).is_err()
        || codec::decode_hex(&req.signature).is_err()
        || codec::decode_hex(&req.public_key).is_err()
    {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "hash, signature and publicKey must be hex".to_string(),
            }),
        ));
    }

    let valid = state
        .oracle
        .verify_signature(&req.hash, &req.signature, &req.public_key);
    Ok(Json(VerifyResponse { valid }))
}

/// GET /public-key response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyResponse {
    /// SPKI DER public key, as hex.
    pub public_key: String,
}

/// GET /public-key - export the oracle's public key.
pub async fn public_key(State(state): State<AppState>) -> Json<PublicKeyResponse> {
    Json(PublicKeyResponse {
        public_key: state.oracle.export_public_key().to_owned(),
    })
}

/// Self-test report carried by the health response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthProbe {
    /// The fixed probe hash.
    pub hash: String,
    /// Signature over the probe hash; empty when signing failed.
    pub signature: String,
    /// The oracle's public key.
    pub public_key: String,
    /// Whether the probe signature verified.
    pub valid: bool,
}

/// GET /health response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `"ok"` when the probe round-trip succeeded, `"error"` otherwise.
    pub status: String,
    /// The probe that was signed and verified.
    pub probe: HealthProbe,
}

/// GET /health - sign and verify a fixed probe hash end to end.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let public_key = state.oracle.export_public_key().to_owned();

    let (signature, valid) = match state.oracle.sign_hash(HEALTH_PROBE_HASH) {
        Ok(signature) => {
            let valid = state
                .oracle
                .verify_signature(HEALTH_PROBE_HASH, &signature, &public_key);
            (signature, valid)
        }
        Err(e) => {
            warn!(error = %e, "health probe signing failed");
            (String::new(), false)
        }
    };

    let code = if valid {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    let status = if valid { "ok" } else { "error" };

    (
        code,
        Json(HealthResponse {
            status: status.to_string(),
            probe: HealthProbe {
                hash: HEALTH_PROBE_HASH.to_string(),
                signature,
                public_key,
                valid,
            },
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use signet_keystore::KeyStore;
    use tempfile::tempdir;

    fn test_state() -> AppState {
        let dir = tempdir().unwrap();
        let store = KeyStore::open(dir.path().join("keys.json")).unwrap();
        AppState {
            oracle: SigningOracle::with_keystore(store),
            limiter: Arc::new(RateLimiter::new(60, 100)),
        }
    }

    #[tokio::test]
    async fn test_sign_endpoint_roundtrip() {
        let state = test_state();

        let result = sign(
            State(state.clone()),
            Json(SignRequest {
                hash: "deadbeef".to_string(),
            }),
        )
        .await;

        let Json(body) = result.expect("valid hex must sign");
        assert!(state.oracle.verify_signature(
            "deadbeef",
            &body.signature,
            state.oracle.export_public_key()
        ));
    }

    #[tokio::test]
    async fn test_sign_endpoint_rejects_bad_hex() {
        let state = test_state();

        for bad in ["", "zz", "abc"] {
            let result = sign(
                State(state.clone()),
                Json(SignRequest {
                    hash: bad.to_string(),
                }),
            )
            .await;

            let (status, Json(body)) = result.expect_err("bad hex must be rejected");
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(!body.error.is_empty());
        }
    }

    #[tokio::test]
    async fn test_verify_endpoint_roundtrip() {
        let state = test_state();
        let signature = state.oracle.sign_hash("deadbeef").unwrap();
        let public_key = state.oracle.export_public_key().to_owned();

        let result = verify(
            State(state.clone()),
            Json(VerifyRequest {
                hash: "deadbeef".to_string(),
                signature,
                public_key,
            }),
        )
        .await;

        let Json(body) = result.expect("hex triple must reach the oracle");
        assert!(body.valid);
    }

    #[tokio::test]
    async fn test_verify_endpoint_rejects_non_hex() {
        let state = test_state();

        let result = verify(
            State(state),
            Json(VerifyRequest {
                hash: "deadbeef".to_string(),
                signature: "not hex".to_string(),
                public_key: "00ff".to_string(),
            }),
        )
        .await;

        let (status, _) = result.expect_err("non-hex must be rejected");
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_verify_endpoint_garbage_hex_is_false() {
        let state = test_state();
        let public_key = state.oracle.export_public_key().to_owned();

        let result = verify(
            State(state),
            Json(VerifyRequest {
                hash: "deadbeef".to_string(),
                signature: "0000".to_string(),
                public_key,
            }),
        )
        .await;

        let Json(body) = result.expect("hex garbage still produces a verdict");
        assert!(!body.valid);
    }

    #[tokio::test]
    async fn test_public_key_endpoint() {
        let state = test_state();

        let Json(body) = public_key(State(state.clone())).await;
        assert_eq!(body.public_key, state.oracle.export_public_key());
        assert_eq!(body.public_key.len(), 176);
    }

    #[tokio::test]
    async fn test_health_endpoint_self_test() {
        let state = test_state();

        let (status, Json(body)) = health(State(state)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "ok");
        assert!(body.probe.valid);
        assert_eq!(body.probe.hash, "deadbeef");
        assert!(!body.probe.signature.is_empty());
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let probe = HealthProbe {
            hash: "00".to_string(),
            signature: "00".to_string(),
            public_key: "00".to_string(),
            valid: true,
        };
        let value = serde_json::to_value(&probe).unwrap();
        assert!(value.get("publicKey").is_some());
        assert!(value.get("public_key").is_none());

        let request: VerifyRequest = serde_json::from_value(serde_json::json!({
            "hash": "00",
            "signature": "00",
            "publicKey": "00",
        }))
        .unwrap();
        assert_eq!(request.public_key, "00");
    }
}
