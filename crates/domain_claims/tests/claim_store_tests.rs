//! Claim store behavior tests

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::Peril;
use domain_claims::{ClaimError, ClaimStore, ClaimSubmission};
use infra_persistence::{MemoryStore, CLAIMS_KEY};

async fn empty_store() -> (Arc<MemoryStore>, ClaimStore) {
    let snapshots = Arc::new(MemoryStore::new());
    let store = ClaimStore::load(snapshots.clone()).await.unwrap();
    (snapshots, store)
}

fn submission(case_name: &str, day: u32) -> ClaimSubmission {
    ClaimSubmission {
        case_name: Some(case_name.to_string()),
        date: NaiveDate::from_ymd_opt(2024, 5, day),
        amount: Some(dec!(500)),
        peril: Some(Peril::Hail),
        notes: None,
    }
}

#[tokio::test]
async fn test_add_claim_appends() {
    let (_, store) = empty_store().await;

    let claim = store.add_claim(submission("Field A", 1)).await.unwrap();

    assert_eq!(store.len().await, 1);
    assert_eq!(claim.case_name, "Field A");
}

#[tokio::test]
async fn test_invalid_submission_leaves_log_untouched() {
    let (_, store) = empty_store().await;

    let mut incomplete = submission("Field A", 1);
    incomplete.amount = None;

    let result = store.add_claim(incomplete).await;
    assert_eq!(result, Err(ClaimError::MissingField("amount")));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_recent_returns_reverse_insertion_order() {
    let (_, store) = empty_store().await;

    // Filed out of loss-date order on purpose: insertion order wins
    store.add_claim(submission("Field A", 20)).await.unwrap();
    store.add_claim(submission("Field B", 5)).await.unwrap();
    store.add_claim(submission("Field C", 12)).await.unwrap();

    let recent = store.recent(2).await;
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].case_name, "Field C");
    assert_eq!(recent[1].case_name, "Field B");
}

#[tokio::test]
async fn test_recent_with_large_n_returns_all() {
    let (_, store) = empty_store().await;
    store.add_claim(submission("Field A", 1)).await.unwrap();

    let recent = store.recent(5).await;
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].case_name, "Field A");
}

#[tokio::test]
async fn test_claims_reference_may_dangle() {
    let (_, store) = empty_store().await;

    // No case registry is consulted: a claim can name any case
    let claim = store.add_claim(submission("Deleted Field", 1)).await.unwrap();
    assert_eq!(claim.case_name, "Deleted Field");
}

#[tokio::test]
async fn test_write_through_and_reload() {
    let (snapshots, store) = empty_store().await;
    store.add_claim(submission("Field A", 1)).await.unwrap();

    let document = snapshots.document(CLAIMS_KEY).await.unwrap();
    assert!(document.contains("Field A"));

    let reloaded = ClaimStore::load(snapshots).await.unwrap();
    assert_eq!(reloaded.claims().await, store.claims().await);
}

#[tokio::test]
async fn test_failed_write_does_not_roll_back() {
    let (snapshots, store) = empty_store().await;
    snapshots.set_fail_saves(true);

    store.add_claim(submission("Field A", 1)).await.unwrap();

    assert_eq!(store.len().await, 1);
    assert!(snapshots.document(CLAIMS_KEY).await.is_none());
}
