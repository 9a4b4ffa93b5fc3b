//! Repository for the `accounts` table (chart of accounts).

use ledger_core::ledger::derived_balance;
use ledger_core::types::{DbId, Money};
use sqlx::PgPool;

use crate::models::account::{Account, AccountBalance};

const COLUMNS: &str = "id, code, name, account_type, created_at, updated_at";

/// Read access to the chart of accounts.
pub struct AccountRepo;

impl AccountRepo {
    /// List all accounts ordered by code ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts ORDER BY code ASC");
        sqlx::query_as::<_, Account>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE id = $1");
        sqlx::query_as::<_, Account>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Return the subset of `ids` that do not exist, in ascending order.
    pub async fn find_missing(pool: &PgPool, ids: &[DbId]) -> Result<Vec<DbId>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_scalar::<_, DbId>(
            "SELECT t.id FROM UNNEST($1::BIGINT[]) AS t(id)
             WHERE NOT EXISTS (SELECT 1 FROM accounts a WHERE a.id = t.id)
             ORDER BY t.id",
        )
        .bind(ids)
        .fetch_all(pool)
        .await
    }

    /// Sum the account's journal lines. Returns `None` if the account does not exist.
    ///
    /// There is no stored balance column; the balance is always derived.
    pub async fn balance(pool: &PgPool, id: DbId) -> Result<Option<AccountBalance>, sqlx::Error> {
        let Some(account) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let (total_debit, total_credit): (Money, Money) = sqlx::query_as(
            "SELECT COALESCE(SUM(debit), 0), COALESCE(SUM(credit), 0)
             FROM journal_lines WHERE account_id = $1",
        )
        .bind(id)
        .fetch_one(pool)
        .await?;

        Ok(Some(AccountBalance {
            account_id: account.id,
            code: account.code,
            name: account.name,
            total_debit,
            total_credit,
            balance: derived_balance(total_debit, total_credit),
        }))
    }
}
