//! Domain DTOs for the todo collection.
//!
//! # Design
//! These types mirror the public payload shape (`userId` in camelCase) but
//! are defined independently from the mock-server crate. Integration tests
//! catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single todo record as returned by the remote collection.
///
/// Records are immutable once fetched; the widget only ever borrows them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub completed: bool,
}
