//! Transfer handler (decode-and-echo placeholder)

use crate::account::TransferRequest;

use super::super::types::{ApiJson, ApiResult, ok};

/// Accept a transfer request and echo it back
///
/// POST /transfer. No balance is mutated, neither account is checked
/// for existence, and nothing is persisted; real transfer semantics
/// are out of scope for this service.
#[utoipa::path(
    post,
    path = "/transfer",
    request_body = TransferRequest,
    responses(
        (status = 200, description = "Echoed transfer request", body = TransferRequest, content_type = "application/json"),
        (status = 400, description = "Malformed JSON body", body = super::super::types::ErrorBody)
    ),
    tag = "Transfer"
)]
pub async fn transfer(ApiJson(req): ApiJson<TransferRequest>) -> ApiResult<TransferRequest> {
    tracing::info!(
        "Transfer request echoed: {} -> {} amount {}",
        req.from,
        req.to,
        req.amount
    );
    ok(req)
}
