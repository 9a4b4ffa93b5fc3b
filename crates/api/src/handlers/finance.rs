//! Handlers for the general ledger: chart of accounts, balances, and
//! journal entries.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use ledger_core::audit::{actions, journal_entry_details};
use ledger_core::error::CoreError;
use ledger_core::ledger::{referenced_accounts, validate_lines};
use ledger_core::types::DbId;
use ledger_db::models::account::{Account, AccountBalance};
use ledger_db::models::journal::{CreateJournalEntry, JournalEntry, JournalEntryWithLines};
use ledger_db::repositories::{AccountRepo, JournalRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::json::ValidJson;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PostJournalResponse {
    pub message: &'static str,
    pub entry: JournalEntry,
}

/// GET /api/finance/accounts
pub async fn list_accounts(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<Account>>> {
    let accounts = AccountRepo::list(&state.pool).await?;
    Ok(Json(accounts))
}

/// GET /api/finance/accounts/{id}/balance
///
/// Debit and credit totals summed from the account's journal lines.
pub async fn account_balance(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<AccountBalance>> {
    let balance = AccountRepo::balance(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Account",
            id,
        })?;
    Ok(Json(balance))
}

/// POST /api/finance/journal
///
/// Lines are validated (non-empty, non-negative, balanced, known accounts)
/// before anything is written. The header and lines are then committed in
/// one transaction and an audit record is emitted for the posting user.
pub async fn post_journal_entry(
    State(state): State<AppState>,
    user: AuthUser,
    ValidJson(input): ValidJson<CreateJournalEntry>,
) -> AppResult<impl IntoResponse> {
    let totals = validate_lines(&input.lines)?;

    let missing = AccountRepo::find_missing(&state.pool, &referenced_accounts(&input.lines)).await?;
    if !missing.is_empty() {
        return Err(CoreError::UnknownAccount {
            account_ids: missing,
        }
        .into());
    }

    let entry = JournalRepo::create_posted(&state.pool, &input).await?;

    tracing::info!(
        entry_id = entry.id,
        user_id = user.user_id,
        lines = input.lines.len(),
        total = %totals.total_debit,
        "Journal entry posted"
    );

    state.audit.log_action(
        user.user_id,
        actions::CREATED_JOURNAL_ENTRY,
        journal_entry_details(entry.id, &entry.description),
    );

    Ok((
        StatusCode::CREATED,
        Json(PostJournalResponse {
            message: "Journal Entry Posted",
            entry,
        }),
    ))
}

/// GET /api/finance/journal
pub async fn list_journal_entries(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<JournalEntryWithLines>>> {
    let entries = JournalRepo::list_with_lines(&state.pool).await?;
    Ok(Json(entries))
}
