//! ReminderStore interface tests.
//!
//! These tests verify the contract of the ReminderStore trait.
//! Each storage implementation should run these tests. Every test starts
//! from an empty store, so they can share one store instance.

use placemark::interfaces::{ReminderStore, StorageError};
use placemark::model::Reminder;

/// Create a test reminder.
pub fn make_reminder(id: &str, title: &str) -> Reminder {
    Reminder::new(
        id,
        title,
        format!("Remember: {}", title),
        format!("Place {}", id),
        42.123,
        75.3216,
    )
}

async fn reset<S: ReminderStore>(store: &S) {
    store.delete_all().await.expect("delete_all should succeed");
}

// =============================================================================
// ReminderStore::list_all tests
// =============================================================================

pub async fn test_list_empty<S: ReminderStore>(store: &S) {
    reset(store).await;

    let reminders = store.list_all().await.expect("list_all should succeed");
    assert!(reminders.is_empty(), "empty store should list nothing");
}

pub async fn test_list_insertion_order<S: ReminderStore>(store: &S) {
    reset(store).await;

    for id in ["3", "1", "2"] {
        store
            .upsert(make_reminder(id, "ordered"))
            .await
            .expect("upsert should succeed");
    }

    let ids: Vec<_> = store
        .list_all()
        .await
        .expect("list_all should succeed")
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec!["3", "1", "2"]);
}

// =============================================================================
// ReminderStore::get_by_id tests
// =============================================================================

pub async fn test_get_round_trip<S: ReminderStore>(store: &S) {
    reset(store).await;
    let reminder = Reminder::new("1", "Pick up Jimmy", "", "", 1.0, 2.0);

    store
        .upsert(reminder.clone())
        .await
        .expect("upsert should succeed");

    let loaded = store.get_by_id("1").await.expect("get should succeed");
    assert_eq!(loaded, reminder);
}

pub async fn test_get_missing<S: ReminderStore>(store: &S) {
    reset(store).await;
    store
        .upsert(make_reminder("present", "x"))
        .await
        .expect("upsert should succeed");

    let err = store
        .get_by_id("missing")
        .await
        .expect_err("missing id should be an error");
    assert!(matches!(err, StorageError::NotFound { ref id } if id == "missing"));
}

// =============================================================================
// ReminderStore::upsert tests
// =============================================================================

pub async fn test_upsert_replaces<S: ReminderStore>(store: &S) {
    reset(store).await;

    store
        .upsert(make_reminder("X", "first"))
        .await
        .expect("upsert should succeed");
    store
        .upsert(Reminder::new("X", "second", "changed", "elsewhere", -1.5, 3.25))
        .await
        .expect("upsert should succeed");

    let all = store.list_all().await.expect("list_all should succeed");
    assert_eq!(all.len(), 1, "upsert must not duplicate");
    assert_eq!(
        all[0],
        Reminder::new("X", "second", "changed", "elsewhere", -1.5, 3.25)
    );
}

pub async fn test_upsert_allows_empty_text<S: ReminderStore>(store: &S) {
    reset(store).await;
    let reminder = Reminder::new("blank", "", "", "", 0.0, 0.0);

    store
        .upsert(reminder.clone())
        .await
        .expect("upsert should succeed");

    assert_eq!(
        store.get_by_id("blank").await.expect("get should succeed"),
        reminder
    );
}

// =============================================================================
// ReminderStore::delete_all tests
// =============================================================================

pub async fn test_delete_all_empties<S: ReminderStore>(store: &S) {
    reset(store).await;
    store
        .upsert(make_reminder("1", "a"))
        .await
        .expect("upsert should succeed");
    store
        .upsert(make_reminder("2", "b"))
        .await
        .expect("upsert should succeed");

    store.delete_all().await.expect("delete_all should succeed");

    let all = store.list_all().await.expect("list_all should succeed");
    assert!(all.is_empty());
    assert!(store.get_by_id("1").await.is_err());
}

pub async fn test_delete_all_idempotent<S: ReminderStore>(store: &S) {
    reset(store).await;

    store.delete_all().await.expect("first delete should succeed");
    store.delete_all().await.expect("second delete should succeed");

    assert!(store.list_all().await.expect("list_all").is_empty());
}

// =============================================================================
// Test runner macro
// =============================================================================

/// Run all ReminderStore interface tests against a store implementation.
#[macro_export]
macro_rules! run_reminder_store_tests {
    ($store:expr) => {
        use $crate::storage::reminder_store_tests::*;

        test_list_empty($store).await;
        println!("  test_list_empty: PASSED");

        test_list_insertion_order($store).await;
        println!("  test_list_insertion_order: PASSED");

        test_get_round_trip($store).await;
        println!("  test_get_round_trip: PASSED");

        test_get_missing($store).await;
        println!("  test_get_missing: PASSED");

        test_upsert_replaces($store).await;
        println!("  test_upsert_replaces: PASSED");

        test_upsert_allows_empty_text($store).await;
        println!("  test_upsert_allows_empty_text: PASSED");

        test_delete_all_empties($store).await;
        println!("  test_delete_all_empties: PASSED");

        test_delete_all_idempotent($store).await;
        println!("  test_delete_all_idempotent: PASSED");
    };
}
