//! Repository for `journal_entries` and `journal_lines`.

use ledger_core::ledger::STATUS_POSTED;
use ledger_core::types::DbId;
use sqlx::PgPool;

use crate::models::journal::{
    CreateJournalEntry, JournalEntry, JournalEntryWithLines, JournalLineView,
};

const ENTRY_COLUMNS: &str = "id, date, description, status, created_at";

/// Storage for journal entries and their lines.
pub struct JournalRepo;

impl JournalRepo {
    /// Write a header in `Posted` status plus all of its lines.
    ///
    /// Runs in one transaction: if any line insert fails the header is rolled
    /// back with it and the error is returned. Balance and account checks are
    /// the caller's job; this only performs the structural write.
    pub async fn create_posted(
        pool: &PgPool,
        input: &CreateJournalEntry,
    ) -> Result<JournalEntry, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO journal_entries (date, description, status)
             VALUES ($1, $2, $3)
             RETURNING {ENTRY_COLUMNS}"
        );
        let entry = sqlx::query_as::<_, JournalEntry>(&query)
            .bind(input.date)
            .bind(&input.description)
            .bind(STATUS_POSTED)
            .fetch_one(&mut *tx)
            .await?;

        for line in &input.lines {
            sqlx::query(
                "INSERT INTO journal_lines (entry_id, account_id, debit, credit)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(entry.id)
            .bind(line.account_id)
            .bind(line.debit_amount())
            .bind(line.credit_amount())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(entry)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<JournalEntry>, sqlx::Error> {
        let query = format!("SELECT {ENTRY_COLUMNS} FROM journal_entries WHERE id = $1");
        sqlx::query_as::<_, JournalEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*)::BIGINT FROM journal_entries")
            .fetch_one(pool)
            .await
    }

    /// List entries most recent first (date DESC, id DESC), each with its
    /// lines enriched by account code and name.
    ///
    /// Entries without lines are omitted.
    pub async fn list_with_lines(pool: &PgPool) -> Result<Vec<JournalEntryWithLines>, sqlx::Error> {
        let query = format!(
            "SELECT {ENTRY_COLUMNS} FROM journal_entries je
             WHERE EXISTS (SELECT 1 FROM journal_lines jl WHERE jl.entry_id = je.id)
             ORDER BY date DESC, id DESC"
        );
        let entries = sqlx::query_as::<_, JournalEntry>(&query)
            .fetch_all(pool)
            .await?;

        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<DbId> = entries.iter().map(|e| e.id).collect();
        let lines = sqlx::query_as::<_, JournalLineView>(
            "SELECT jl.entry_id, jl.account_id, a.code AS account_code,
                    a.name AS account_name, jl.debit, jl.credit
             FROM journal_lines jl
             JOIN accounts a ON a.id = jl.account_id
             WHERE jl.entry_id = ANY($1)
             ORDER BY jl.entry_id, jl.id",
        )
        .bind(&ids)
        .fetch_all(pool)
        .await?;

        Ok(group_lines(entries, lines))
    }
}

/// Attach each line to its entry, preserving the entry order.
fn group_lines(
    entries: Vec<JournalEntry>,
    lines: Vec<JournalLineView>,
) -> Vec<JournalEntryWithLines> {
    let mut by_entry: std::collections::HashMap<DbId, Vec<JournalLineView>> =
        std::collections::HashMap::with_capacity(entries.len());
    for line in lines {
        by_entry.entry(line.entry_id).or_default().push(line);
    }

    entries
        .into_iter()
        .map(|entry| {
            let lines = by_entry.remove(&entry.id).unwrap_or_default();
            JournalEntryWithLines { entry, lines }
        })
        .collect()
}
