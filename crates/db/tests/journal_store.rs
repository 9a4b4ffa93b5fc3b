//! Integration tests for the ledger store: chart of accounts, atomic journal
//! writes, listing order and derived balances.

use std::str::FromStr;

use chrono::NaiveDate;
use ledger_core::ledger::{JournalLineInput, STATUS_DRAFT};
use ledger_core::types::{DbId, Money};
use ledger_db::models::journal::CreateJournalEntry;
use ledger_db::repositories::{AccountRepo, JournalRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn dec(s: &str) -> Money {
    Money::from_str(s).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn account_id(pool: &PgPool, code: &str) -> DbId {
    sqlx::query_scalar("SELECT id FROM accounts WHERE code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

fn entry(on: NaiveDate, description: &str, lines: Vec<(DbId, &str, &str)>) -> CreateJournalEntry {
    CreateJournalEntry {
        date: on,
        description: description.to_string(),
        lines: lines
            .into_iter()
            .map(|(account_id, debit, credit)| JournalLineInput {
                account_id,
                debit: Some(dec(debit)),
                credit: Some(dec(credit)),
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Chart of accounts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn accounts_are_listed_by_code(pool: PgPool) {
    let accounts = AccountRepo::list(&pool).await.unwrap();
    assert!(!accounts.is_empty(), "seed chart of accounts should be present");

    let codes: Vec<&str> = accounts.iter().map(|a| a.code.as_str()).collect();
    let mut sorted = codes.clone();
    sorted.sort();
    assert_eq!(codes, sorted);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_missing_reports_unknown_ids(pool: PgPool) {
    let cash = account_id(&pool, "101").await;
    let missing = AccountRepo::find_missing(&pool, &[cash, 999_998, 999_999])
        .await
        .unwrap();
    assert_eq!(missing, vec![999_998, 999_999]);

    let none = AccountRepo::find_missing(&pool, &[]).await.unwrap();
    assert!(none.is_empty());
}

// ---------------------------------------------------------------------------
// Journal writes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_posted_writes_header_and_lines(pool: PgPool) {
    let cash = account_id(&pool, "101").await;
    let cogs = account_id(&pool, "501").await;

    let created = JournalRepo::create_posted(
        &pool,
        &entry(date(2025, 3, 1), "Stock purchase", vec![(cash, "100", "0"), (cogs, "0", "100")]),
    )
    .await
    .unwrap();

    assert_eq!(created.status, "Posted");
    assert_eq!(created.description, "Stock purchase");

    let stored = JournalRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(stored.status, "Posted");
    assert_eq!(stored.date, date(2025, 3, 1));

    let listed = JournalRepo::list_with_lines(&pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].entry.id, created.id);
    assert_eq!(listed[0].lines.len(), 2);
    assert_eq!(listed[0].lines[0].account_code, "101");
    assert_eq!(listed[0].lines[0].account_name, "Cash");
    assert_eq!(listed[0].lines[0].debit, dec("100"));
    assert_eq!(listed[0].lines[1].account_code, "501");
    assert_eq!(listed[0].lines[1].credit, dec("100"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn failed_line_insert_leaves_no_partial_entry(pool: PgPool) {
    let cash = account_id(&pool, "101").await;

    // The second line references a missing account, so its insert violates
    // the foreign key after the header has already been written.
    let result = JournalRepo::create_posted(
        &pool,
        &entry(date(2025, 3, 2), "Broken", vec![(cash, "50", "0"), (987_654, "0", "50")]),
    )
    .await;
    assert!(result.is_err());

    assert_eq!(JournalRepo::count(&pool).await.unwrap(), 0);
    assert!(JournalRepo::list_with_lines(&pool).await.unwrap().is_empty());

    let orphan_lines: i64 = sqlx::query_scalar("SELECT COUNT(*)::BIGINT FROM journal_lines")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(orphan_lines, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn header_without_lines_is_not_listed(pool: PgPool) {
    let draft_id: DbId = sqlx::query_scalar(
        "INSERT INTO journal_entries (date, description, status)
         VALUES ('2025-05-01', 'Unfinished', $1)
         RETURNING id",
    )
    .bind(STATUS_DRAFT)
    .fetch_one(&pool)
    .await
    .unwrap();

    let draft = JournalRepo::find_by_id(&pool, draft_id).await.unwrap().unwrap();
    assert_eq!(draft.status, "Draft");
    assert!(JournalRepo::list_with_lines(&pool).await.unwrap().is_empty());
    assert!(JournalRepo::find_by_id(&pool, draft_id + 1).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn entries_are_listed_by_date_then_id_descending(pool: PgPool) {
    let cash = account_id(&pool, "101").await;
    let equity = account_id(&pool, "301").await;
    let lines = || vec![(cash, "10", "0"), (equity, "0", "10")];

    let older = JournalRepo::create_posted(&pool, &entry(date(2025, 1, 1), "older", lines()))
        .await
        .unwrap();
    let newest_a = JournalRepo::create_posted(&pool, &entry(date(2025, 2, 1), "a", lines()))
        .await
        .unwrap();
    let newest_b = JournalRepo::create_posted(&pool, &entry(date(2025, 2, 1), "b", lines()))
        .await
        .unwrap();

    let ids: Vec<DbId> = JournalRepo::list_with_lines(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.entry.id)
        .collect();
    assert_eq!(ids, vec![newest_b.id, newest_a.id, older.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn balance_is_derived_from_lines(pool: PgPool) {
    let cash = account_id(&pool, "101").await;
    let revenue = account_id(&pool, "401").await;
    let rent = account_id(&pool, "502").await;

    JournalRepo::create_posted(
        &pool,
        &entry(date(2025, 4, 1), "Sale", vec![(cash, "250.75", "0"), (revenue, "0", "250.75")]),
    )
    .await
    .unwrap();
    JournalRepo::create_posted(
        &pool,
        &entry(date(2025, 4, 2), "Rent", vec![(rent, "100", "0"), (cash, "0", "100")]),
    )
    .await
    .unwrap();

    let balance = AccountRepo::balance(&pool, cash).await.unwrap().unwrap();
    assert_eq!(balance.code, "101");
    assert_eq!(balance.total_debit, dec("250.75"));
    assert_eq!(balance.total_credit, dec("100"));
    assert_eq!(balance.balance, dec("150.75"));

    assert!(AccountRepo::balance(&pool, 999_999).await.unwrap().is_none());
}
