//! Account CRUD handlers

use std::sync::Arc;

use axum::extract::{Path, State};

use crate::account::{Account, CreateAccountRequest, DeleteAccountResponse};

use super::super::state::AppState;
use super::super::types::{ApiError, ApiJson, ApiResult, ok};

/// Parse a path-embedded account id.
///
/// Non-numeric input is a 400; so is the value 0, which is never a
/// valid identifier regardless of database state.
fn parse_account_id(raw: &str) -> Result<i64, ApiError> {
    let id: i64 = raw
        .parse()
        .map_err(|_| ApiError::bad_request(format!("invalid account id: {}", raw)))?;
    if id == 0 {
        return Err(ApiError::bad_request("invalid account id: 0"));
    }
    Ok(id)
}

/// List all accounts
///
/// GET /account
#[utoipa::path(
    get,
    path = "/account",
    responses(
        (status = 200, description = "All accounts", body = [Account], content_type = "application/json"),
        (status = 500, description = "Store failure", body = super::super::types::ErrorBody)
    ),
    tag = "Account"
)]
pub async fn list_accounts(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Account>> {
    let accounts = state.store.get_accounts().await?;
    ok(accounts)
}

/// Create an account
///
/// POST /account with `{"firstName": "...", "lastName": "..."}`.
/// Name content is not validated; empty strings are accepted.
#[utoipa::path(
    post,
    path = "/account",
    request_body = CreateAccountRequest,
    responses(
        (status = 200, description = "Created account with its assigned id", body = Account, content_type = "application/json"),
        (status = 400, description = "Malformed JSON body", body = super::super::types::ErrorBody),
        (status = 500, description = "Store failure", body = super::super::types::ErrorBody)
    ),
    tag = "Account"
)]
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateAccountRequest>,
) -> ApiResult<Account> {
    let account = Account::new(req.first_name, req.last_name);
    let stored = state.store.create_account(&account).await?;
    tracing::info!("Created account {} ({})", stored.id, stored.number);
    ok(stored)
}

/// Get one account by id
///
/// GET /account/{id}
#[utoipa::path(
    get,
    path = "/account/{id}",
    params(("id" = i64, Path, description = "Account id")),
    responses(
        (status = 200, description = "The account", body = Account, content_type = "application/json"),
        (status = 400, description = "Non-numeric or zero id", body = super::super::types::ErrorBody),
        (status = 404, description = "No account with that id", body = super::super::types::ErrorBody),
        (status = 500, description = "Store failure", body = super::super::types::ErrorBody)
    ),
    tag = "Account"
)]
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Account> {
    let id = parse_account_id(&raw_id)?;
    let account = state.store.get_account_by_id(id).await?;
    ok(account)
}

/// Delete an account by id
///
/// DELETE /account/{id}. Reports the id whether or not a row existed;
/// deleting a missing id is not an error.
#[utoipa::path(
    delete,
    path = "/account/{id}",
    params(("id" = i64, Path, description = "Account id")),
    responses(
        (status = 200, description = "Deleted id report", body = DeleteAccountResponse, content_type = "application/json"),
        (status = 400, description = "Non-numeric or zero id", body = super::super::types::ErrorBody),
        (status = 500, description = "Store failure", body = super::super::types::ErrorBody)
    ),
    tag = "Account"
)]
pub async fn delete_account(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> ApiResult<DeleteAccountResponse> {
    let id = parse_account_id(&raw_id)?;
    state.store.delete_account(id).await?;
    tracing::info!("Deleted account {}", id);
    ok(DeleteAccountResponse { deleted: id })
}
