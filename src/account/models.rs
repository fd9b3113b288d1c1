//! Data models for the account service

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Bank account record, the sole persisted entity.
///
/// Wire format is camelCase; column names stay snake_case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Store-assigned identity (BIGSERIAL). 0 until persisted.
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Ann")]
    pub first_name: String,
    #[schema(example = "Lee")]
    pub last_name: String,
    /// Account number, assigned at construction. Intended unique,
    /// uniqueness is not enforced.
    #[schema(example = 48291734)]
    pub number: i64,
    #[schema(example = 0)]
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Build a fresh account: zero balance, random 8-digit number,
    /// current timestamp. The id is assigned by the store on insert.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            number: rand::thread_rng().gen_range(10_000_000..100_000_000),
            balance: 0,
            created_at: Utc::now(),
        }
    }
}

/// Create-account request body
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    #[schema(example = "Ann")]
    pub first_name: String,
    #[schema(example = "Lee")]
    pub last_name: String,
}

/// Transfer request body. Accepted and echoed back; never applied to
/// any balance and never persisted (placeholder endpoint).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TransferRequest {
    #[schema(example = 1)]
    pub from: i64,
    #[schema(example = 2)]
    pub to: i64,
    #[schema(example = 50)]
    pub amount: i64,
}

/// Response body for DELETE /account/{id}
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteAccountResponse {
    #[schema(example = 7)]
    pub deleted: i64,
}
