//! Shared storage integration tests.
//!
//! Tests the ReminderStore interface against all implementations.
//! Each implementation test binary imports these functions and runs them.

pub mod reminder_store_tests;
